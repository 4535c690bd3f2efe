#![allow(dead_code)]

use whatslink_scraper::api::routes::app_router;
use whatslink_scraper::config::{Config, ScraperConfig};
use whatslink_scraper::AppState;
use axum_test::TestServer;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Test configuration with short timeouts
pub fn test_config() -> Config {
    Config {
        scraper: ScraperConfig {
            request_timeout_secs: 5,
            connect_timeout_secs: 2,
            deadline_secs: 20,
            ..ScraperConfig::default()
        },
        ..Config::default()
    }
}

pub fn test_server(config: &Config) -> TestServer {
    let state = AppState::from_config(config).expect("Failed to build state");
    TestServer::new(app_router(state)).unwrap()
}

pub fn listing_html(hrefs: &[&str]) -> String {
    let cards: String = hrefs
        .iter()
        .map(|href| {
            format!(
                r#"<div class="card group-card"><div class="card-body"><h5>Group</h5><a href="{}">Ver grupo</a></div></div>"#,
                href
            )
        })
        .collect();
    format!("<html><head><title>Grupos</title></head><body>{}</body></html>", cards)
}

pub fn detail_html(data_url: &str) -> String {
    format!(
        r#"<html><body><h1>Grupo</h1><a class="btn btn-success" role="button" data-url="{}">Entrar no grupo</a></body></html>"#,
        data_url
    )
}

pub async fn mount_listing(server: &MockServer, page: &str, hrefs: &[&str]) {
    Mock::given(method("GET"))
        .and(path("/"))
        .and(query_param("page", page))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(listing_html(hrefs))
                .insert_header("content-type", "text/html"),
        )
        .mount(server)
        .await;
}

pub async fn mount_detail(server: &MockServer, detail_path: &str, data_url: &str) {
    Mock::given(method("GET"))
        .and(path(detail_path))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(detail_html(data_url))
                .insert_header("content-type", "text/html"),
        )
        .mount(server)
        .await;
}
