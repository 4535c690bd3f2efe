//! Listing page URL construction
//!
//! The scraped site paginates category listings with a `/page/{n}` path
//! suffix and the home listing with a `?page={n}` query parameter. Which one
//! applies is guessed from the base URL in `auto` mode; this only holds for
//! sites following that convention.

use crate::config::PaginationStrategy;

/// Builds listing page URLs for one base URL
#[derive(Debug, Clone)]
pub struct Paginator {
    strategy: PaginationStrategy,
    marker: String,
}

impl Paginator {
    /// Creates a paginator
    ///
    /// # Arguments
    ///
    /// * `strategy` - How page numbers are encoded
    /// * `marker` - Base URL fragment selecting path style in `auto` mode
    pub fn new(strategy: PaginationStrategy, marker: impl Into<String>) -> Self {
        Self {
            strategy,
            marker: marker.into(),
        }
    }

    /// Resolves `auto` into a concrete strategy for this base URL
    pub fn strategy_for(&self, base_url: &str) -> PaginationStrategy {
        match self.strategy {
            PaginationStrategy::Auto if base_url.contains(&self.marker) => {
                PaginationStrategy::Path
            }
            PaginationStrategy::Auto => PaginationStrategy::Query,
            concrete => concrete,
        }
    }

    /// Returns the URL of listing page `page` (1-based)
    ///
    /// # Example
    ///
    /// ```
    /// use whatslink_scraper::config::PaginationStrategy;
    /// use whatslink_scraper::crawler::Paginator;
    ///
    /// let paginator = Paginator::new(PaginationStrategy::Auto, "/category/");
    /// assert_eq!(paginator.page_url("https://site.test", 2), "https://site.test?page=2");
    /// assert_eq!(
    ///     paginator.page_url("https://site.test/category/games/", 2),
    ///     "https://site.test/category/games/page/2"
    /// );
    /// ```
    pub fn page_url(&self, base_url: &str, page: u32) -> String {
        match self.strategy_for(base_url) {
            PaginationStrategy::Path => {
                format!("{}/page/{}", base_url.trim_end_matches('/'), page)
            }
            _ => {
                let separator = if base_url.contains('?') { '&' } else { '?' };
                format!("{}{}page={}", base_url, separator, page)
            }
        }
    }
}
