use serde::Deserialize;

/// Main configuration structure for Whatslink-Scraper
///
/// Every section is optional; a missing file or section falls back to the
/// defaults below.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub scraper: ScraperConfig,
    #[serde(rename = "user-agent")]
    pub user_agent: UserAgentConfig,
    pub selectors: SelectorConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Socket address the API listens on
    #[serde(rename = "listen-addr")]
    pub listen_addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8000".to_string(),
        }
    }
}

/// How listing page URLs are built from the base URL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaginationStrategy {
    /// Path style when the base URL contains the pagination marker, query style otherwise
    #[default]
    Auto,
    /// `{base}/page/{n}`
    Path,
    /// `{base}?page={n}`
    Query,
}

/// Scraping behavior configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScraperConfig {
    /// Site scraped when a request omits `base_url`
    #[serde(rename = "default-base-url")]
    pub default_base_url: String,

    /// Number of links collected when a request omits `num_links`
    #[serde(rename = "default-num-links")]
    pub default_num_links: usize,

    /// Maximum number of listing pages visited per collection
    #[serde(rename = "max-pages")]
    pub max_pages: u32,

    /// Timeout for a single page fetch (seconds)
    #[serde(rename = "request-timeout-secs")]
    pub request_timeout_secs: u64,

    /// Timeout for establishing a connection (seconds)
    #[serde(rename = "connect-timeout-secs")]
    pub connect_timeout_secs: u64,

    /// Wall-clock budget for one whole link collection (seconds)
    #[serde(rename = "deadline-secs")]
    pub deadline_secs: u64,

    /// Listing page URL construction
    pub pagination: PaginationStrategy,

    /// Base URL fragment that selects path-style pagination in `auto` mode
    #[serde(rename = "pagination-marker")]
    pub pagination_marker: String,

    /// Substring every accepted invite link must contain
    #[serde(rename = "invite-marker")]
    pub invite_marker: String,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            default_base_url: "https://gruposwhats.app".to_string(),
            default_num_links: 5,
            max_pages: 50,
            request_timeout_secs: 15,
            connect_timeout_secs: 10,
            deadline_secs: 120,
            pagination: PaginationStrategy::Auto,
            pagination_marker: "/category/".to_string(),
            invite_marker: "chat.whatsapp.com".to_string(),
        }
    }
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UserAgentConfig {
    /// Name of the scraper
    #[serde(rename = "crawler-name")]
    pub crawler_name: String,

    /// Version of the scraper
    #[serde(rename = "crawler-version")]
    pub crawler_version: String,

    /// URL with information about the scraper
    #[serde(rename = "contact-url")]
    pub contact_url: String,
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            crawler_name: "WhatslinkScraper".to_string(),
            crawler_version: env!("CARGO_PKG_VERSION").to_string(),
            contact_url: "https://github.com/whatslink-scraper".to_string(),
        }
    }
}

/// CSS selectors describing the scraped site's markup
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SelectorConfig {
    /// Group cards on a listing page (regular and VIP)
    #[serde(rename = "group-card")]
    pub group_card: String,

    /// Link to the detail page, searched inside a card
    #[serde(rename = "card-link")]
    pub card_link: String,

    /// Call-to-action element on a detail page carrying `data-url`
    #[serde(rename = "invite-button")]
    pub invite_button: String,

    /// Category navigation entries on the home page
    pub category: String,

    /// Name element nested inside a category entry
    #[serde(rename = "category-name")]
    pub category_name: String,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            group_card: "div.card.group-card, div.card.vip-card".to_string(),
            card_link: ".card-body a[href]".to_string(),
            invite_button: "a.btn-success[data-url], button.btn-success[data-url]".to_string(),
            category: "nav.categories a.category-item[href]".to_string(),
            category_name: ".category-name".to_string(),
        }
    }
}
