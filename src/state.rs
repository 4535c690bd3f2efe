//! Shared, immutable application state.

use std::sync::Arc;

use crate::config::Config;
use crate::crawler::{build_http_client, CategoryLister, LinkCollector, SiteSelectors};
use crate::ScrapeError;

#[derive(Clone)]
pub struct AppState {
    pub link_collector: Arc<LinkCollector>,
    pub category_lister: Arc<CategoryLister>,
    pub default_base_url: Arc<str>,
    pub default_num_links: usize,
}

impl AppState {
    /// Builds the HTTP client and compiles the site selectors once.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built or a selector
    /// does not compile.
    pub fn from_config(config: &Config) -> Result<Self, ScrapeError> {
        let client = build_http_client(&config.user_agent, &config.scraper)?;
        let selectors = Arc::new(SiteSelectors::compile(&config.selectors)?);

        Ok(Self {
            link_collector: Arc::new(LinkCollector::new(
                client.clone(),
                selectors.clone(),
                &config.scraper,
            )),
            category_lister: Arc::new(CategoryLister::new(client, selectors)),
            default_base_url: Arc::from(config.scraper.default_base_url.as_str()),
            default_num_links: config.scraper.default_num_links,
        })
    }
}
