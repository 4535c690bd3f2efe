//! HTML parser for listing, detail and home pages
//!
//! This module handles parsing HTML content to extract:
//! - Group cards and their detail page links (listing pages)
//! - The invite call-to-action `data-url` (detail pages)
//! - Category navigation entries (home page)
//!
//! The scraped site's markup is an external, unversioned schema, so every
//! selector comes from configuration and is compiled once at startup.

use crate::config::SelectorConfig;
use crate::crawler::Category;
use crate::ScrapeError;
use scraper::{ElementRef, Html, Selector};
use url::Url;

/// Compiled CSS selectors for the scraped site
#[derive(Debug, Clone)]
pub struct SiteSelectors {
    group_card: Selector,
    card_link: Selector,
    invite_button: Selector,
    category: Selector,
    category_name: Selector,
}

impl SiteSelectors {
    /// Compiles every selector in the configuration
    ///
    /// # Returns
    ///
    /// * `Ok(SiteSelectors)` - All selectors compiled
    /// * `Err(ScrapeError::Selector)` - The first selector that failed to compile
    pub fn compile(config: &SelectorConfig) -> Result<Self, ScrapeError> {
        Ok(Self {
            group_card: compile_selector(&config.group_card)?,
            card_link: compile_selector(&config.card_link)?,
            invite_button: compile_selector(&config.invite_button)?,
            category: compile_selector(&config.category)?,
            category_name: compile_selector(&config.category_name)?,
        })
    }
}

fn compile_selector(selector: &str) -> Result<Selector, ScrapeError> {
    Selector::parse(selector).map_err(|e| ScrapeError::Selector {
        selector: selector.to_string(),
        message: e.to_string(),
    })
}

/// A group card found on a listing page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupCard {
    /// `href` of the first link inside the card body, if any
    pub detail_href: Option<String>,
}

/// Extracts all group cards from a listing page, in document order
///
/// # Example
///
/// ```
/// use whatslink_scraper::config::SelectorConfig;
/// use whatslink_scraper::crawler::{parse_listing, SiteSelectors};
///
/// let selectors = SiteSelectors::compile(&SelectorConfig::default()).unwrap();
/// let html = r#"<div class="card group-card"><div class="card-body"><a href="/g/1">Join</a></div></div>"#;
/// let cards = parse_listing(html, &selectors);
/// assert_eq!(cards[0].detail_href.as_deref(), Some("/g/1"));
/// ```
pub fn parse_listing(html: &str, selectors: &SiteSelectors) -> Vec<GroupCard> {
    let document = Html::parse_document(html);

    document
        .select(&selectors.group_card)
        .map(|card| GroupCard {
            detail_href: first_href(card, &selectors.card_link),
        })
        .collect()
}

fn first_href(card: ElementRef<'_>, link_selector: &Selector) -> Option<String> {
    card.select(link_selector)
        .filter_map(|a| a.value().attr("href"))
        .map(str::trim)
        .find(|href| !href.is_empty())
        .map(str::to_string)
}

/// Extracts the `data-url` of the first invite call-to-action on a detail page
///
/// Returns `None` when no call-to-action exists or its `data-url` is blank.
pub fn parse_invite_url(html: &str, selectors: &SiteSelectors) -> Option<String> {
    let document = Html::parse_document(html);

    document
        .select(&selectors.invite_button)
        .next()
        .and_then(|button| button.value().attr("data-url"))
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .map(str::to_string)
}

/// Extracts category navigation entries from the home page
///
/// An entry is kept only when both its trimmed name and its `href` are
/// non-empty. Order matches the document.
pub fn parse_categories(html: &str, selectors: &SiteSelectors) -> Vec<Category> {
    let document = Html::parse_document(html);
    let mut categories = Vec::new();

    for element in document.select(&selectors.category) {
        let name = element
            .select(&selectors.category_name)
            .next()
            .map(|name| name.text().collect::<String>().trim().to_string())
            .unwrap_or_default();

        let url = element
            .value()
            .attr("href")
            .map(|href| href.trim().to_string())
            .unwrap_or_default();

        if name.is_empty() || url.is_empty() {
            continue;
        }

        categories.push(Category { name, url });
    }

    categories
}

/// Resolves a card `href` against the request's base URL
///
/// An `href` that already carries a scheme is returned unchanged. Anything
/// else is joined to the base with exactly one `/` between them.
///
/// # Example
///
/// ```
/// use whatslink_scraper::crawler::resolve_href;
///
/// assert_eq!(resolve_href("https://site.test/", "/g/abc"), "https://site.test/g/abc");
/// assert_eq!(resolve_href("https://site.test/", "http://other.test/x"), "http://other.test/x");
/// ```
pub fn resolve_href(base_url: &str, href: &str) -> String {
    if Url::parse(href).is_ok() {
        return href.to_string();
    }

    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        href.trim_start_matches('/')
    )
}
