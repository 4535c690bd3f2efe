//! Scraping module for the group listing site
//!
//! This module contains the scraping logic, including:
//! - HTTP fetching with outcome classification
//! - HTML parsing of listing, detail and home pages
//! - Listing pagination
//! - Invite link collection and category listing

mod categories;
mod fetcher;
mod links;
mod pagination;
mod parser;

pub use categories::{Category, CategoryLister};
pub use fetcher::{build_http_client, fetch_page, FetchOutcome};
pub use links::{CollectReport, LinkCollector, StopReason};
pub use pagination::Paginator;
pub use parser::{
    parse_categories, parse_invite_url, parse_listing, resolve_href, GroupCard, SiteSelectors,
};
