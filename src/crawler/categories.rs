//! Category listing from the site's home page

use crate::crawler::fetcher::fetch_page;
use crate::crawler::parser::{parse_categories, SiteSelectors};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A named navigational grouping on the scraped site
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub url: String,
}

/// Lists categories with a single fetch of the base URL
#[derive(Debug, Clone)]
pub struct CategoryLister {
    client: Client,
    selectors: Arc<SiteSelectors>,
}

impl CategoryLister {
    pub fn new(client: Client, selectors: Arc<SiteSelectors>) -> Self {
        Self { client, selectors }
    }

    /// Fetches `base_url` and extracts its category navigation
    ///
    /// A failed fetch is logged and yields an empty list.
    pub async fn list(&self, base_url: &str) -> Vec<Category> {
        let outcome = fetch_page(&self.client, base_url).await;
        if let Some(reason) = outcome.failure_reason() {
            tracing::warn!(base_url = %base_url, "Failed to fetch categories: {}", reason);
            return Vec::new();
        }

        let body = outcome.into_body().unwrap_or_default();
        let categories = parse_categories(&body, &self.selectors);
        tracing::debug!(base_url = %base_url, count = categories.len(), "Categories parsed");
        categories
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ScraperConfig, SelectorConfig, UserAgentConfig};
    use crate::crawler::build_http_client;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn lister() -> CategoryLister {
        let client =
            build_http_client(&UserAgentConfig::default(), &ScraperConfig::default()).unwrap();
        let selectors = Arc::new(SiteSelectors::compile(&SelectorConfig::default()).unwrap());
        CategoryLister::new(client, selectors)
    }

    #[tokio::test]
    async fn test_lists_categories() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"<nav class="categories">
                    <a class="category-item" href="/category/amizade"><span class="category-name">Amizade</span></a>
                    <a class="category-item" href="/category/jogos"><span class="category-name">Jogos</span></a>
                </nav>"#,
            ))
            .expect(1)
            .mount(&server)
            .await;

        let categories = lister().list(&server.uri()).await;

        assert_eq!(categories.len(), 2);
        assert_eq!(categories[0].name, "Amizade");
        assert_eq!(categories[1].url, "/category/jogos");
    }

    #[tokio::test]
    async fn test_fetch_failure_is_empty() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(502))
            .mount(&server)
            .await;

        assert!(lister().list(&server.uri()).await.is_empty());
    }

    #[tokio::test]
    async fn test_unreachable_is_empty() {
        assert!(lister().list("http://127.0.0.1:1").await.is_empty());
    }

    #[test]
    fn test_category_serializes_name_and_url() {
        let category = Category {
            name: "Amizade".to_string(),
            url: "/category/amizade".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&category).unwrap(),
            serde_json::json!({"name": "Amizade", "url": "/category/amizade"})
        );
    }
}
