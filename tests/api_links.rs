//! End-to-end tests for `GET /get_whatsapp_links` against a mock listing site.

mod common;

use axum::http::StatusCode;
use serde_json::{json, Value};
use wiremock::matchers::any;
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_two_cards_fewer_than_requested() {
    let site = MockServer::start().await;
    common::mount_listing(&site, "1", &["/grupo/1", "/grupo/2"]).await;
    common::mount_listing(&site, "2", &[]).await;
    common::mount_detail(&site, "/grupo/1", "https://chat.whatsapp.com/AAA111").await;
    common::mount_detail(&site, "/grupo/2", "https://chat.whatsapp.com/BBB222").await;

    let server = common::test_server(&common::test_config());
    let response = server
        .get("/get_whatsapp_links")
        .add_query_param("base_url", site.uri())
        .add_query_param("num_links", 5)
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>(),
        json!([
            "https://chat.whatsapp.com/AAA111",
            "https://chat.whatsapp.com/BBB222"
        ])
    );
}

#[tokio::test]
async fn test_result_truncated_to_num_links() {
    let site = MockServer::start().await;
    common::mount_listing(&site, "1", &["/grupo/1", "/grupo/2", "/grupo/3"]).await;
    common::mount_detail(&site, "/grupo/1", "https://chat.whatsapp.com/one").await;
    common::mount_detail(&site, "/grupo/2", "https://chat.whatsapp.com/two").await;
    common::mount_detail(&site, "/grupo/3", "https://chat.whatsapp.com/three").await;

    let server = common::test_server(&common::test_config());
    let response = server
        .get("/get_whatsapp_links")
        .add_query_param("base_url", site.uri())
        .add_query_param("num_links", 2)
        .await;

    response.assert_status_ok();
    let links = response.json::<Vec<String>>();
    assert_eq!(
        links,
        vec!["https://chat.whatsapp.com/one", "https://chat.whatsapp.com/two"]
    );
}

#[tokio::test]
async fn test_non_positive_num_links_rejected_without_fetching() {
    let site = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&site)
        .await;

    let server = common::test_server(&common::test_config());
    for num_links in ["0", "-3", "many", "1.5"] {
        let response = server
            .get("/get_whatsapp_links")
            .add_query_param("base_url", site.uri())
            .add_query_param("num_links", num_links)
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(
            response.json::<Value>(),
            json!({"error": "invalid parameters"})
        );
    }
}

#[tokio::test]
async fn test_no_cards_is_not_found() {
    let site = MockServer::start().await;
    common::mount_listing(&site, "1", &[]).await;

    let server = common::test_server(&common::test_config());
    let response = server
        .get("/get_whatsapp_links")
        .add_query_param("base_url", site.uri())
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>(), json!({"error": "no links found"}));
}

#[tokio::test]
async fn test_non_invite_data_url_contributes_nothing() {
    let site = MockServer::start().await;
    common::mount_listing(&site, "1", &["/grupo/tg"]).await;
    common::mount_listing(&site, "2", &[]).await;
    common::mount_detail(&site, "/grupo/tg", "https://t.me/joinchat/abc").await;

    let server = common::test_server(&common::test_config());
    let response = server
        .get("/get_whatsapp_links")
        .add_query_param("base_url", site.uri())
        .add_query_param("num_links", 3)
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unreachable_site_is_not_found() {
    let server = common::test_server(&common::test_config());
    let response = server
        .get("/get_whatsapp_links")
        .add_query_param("base_url", "http://127.0.0.1:1")
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_default_base_url_from_config() {
    let site = MockServer::start().await;
    common::mount_listing(&site, "1", &["/grupo/1"]).await;
    common::mount_listing(&site, "2", &[]).await;
    common::mount_detail(&site, "/grupo/1", "https://chat.whatsapp.com/DEF").await;

    let mut config = common::test_config();
    config.scraper.default_base_url = site.uri();

    let server = common::test_server(&config);
    let response = server.get("/get_whatsapp_links").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), json!(["https://chat.whatsapp.com/DEF"]));
}
