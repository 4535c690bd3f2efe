//! Invite link collection
//!
//! Walks listing pages in order, follows every group card to its detail page
//! and keeps the invite URLs found there. Each fetch produces an explicit
//! outcome value, and the loop decides whether to continue, skip a card or
//! stop by matching on it:
//!
//! | Outcome | Decision |
//! |---------|----------|
//! | Listing page fetch failed | stop, `PageFailed` |
//! | Listing page has no cards | stop, `Exhausted` |
//! | Card has no link | skip card |
//! | Detail page fetch failed | skip card |
//! | Detail page has no valid invite | skip card |
//! | Detail page has a valid invite | keep link |
//!
//! Two bounds keep a site with endless card-bearing but invite-less pages
//! from looping forever: a maximum number of listing pages, and an overall
//! deadline checked before every fetch.

use crate::config::ScraperConfig;
use crate::crawler::fetcher::fetch_page;
use crate::crawler::pagination::Paginator;
use crate::crawler::parser::{
    parse_invite_url, parse_listing, resolve_href, GroupCard, SiteSelectors,
};
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;

/// Why a collection stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The requested number of links was collected
    TargetReached,
    /// A listing page had no group cards
    Exhausted,
    /// A listing page could not be fetched
    PageFailed,
    /// The listing page cap was reached
    PageLimit,
    /// The overall deadline elapsed
    Deadline,
}

/// Result of one link collection
#[derive(Debug, Clone)]
pub struct CollectReport {
    /// Collected invite links, never more than the target
    pub links: Vec<String>,
    /// Number of listing pages fetched (including the one that ended the run)
    pub pages_visited: u32,
    /// Why collection stopped
    pub stop_reason: StopReason,
}

/// Outcome of visiting one listing page
#[derive(Debug)]
enum PageOutcome {
    Cards(Vec<GroupCard>),
    Empty,
    Failed(String),
}

/// Outcome of following one group card
#[derive(Debug)]
enum CardOutcome {
    Invite(String),
    NoInvite { detail_url: String },
    NoLink,
    Failed { detail_url: String, reason: String },
}

/// Collects WhatsApp invite links from a paginated group listing
#[derive(Debug, Clone)]
pub struct LinkCollector {
    client: Client,
    selectors: Arc<SiteSelectors>,
    paginator: Paginator,
    invite_marker: String,
    max_pages: u32,
    deadline: Duration,
}

impl LinkCollector {
    /// Creates a collector sharing the given client and selectors
    pub fn new(client: Client, selectors: Arc<SiteSelectors>, config: &ScraperConfig) -> Self {
        Self {
            client,
            selectors,
            paginator: Paginator::new(config.pagination, config.pagination_marker.clone()),
            invite_marker: config.invite_marker.clone(),
            max_pages: config.max_pages,
            deadline: Duration::from_secs(config.deadline_secs),
        }
    }

    /// Collects up to `target` invite links starting from `base_url`
    ///
    /// Fewer links are returned when the site runs out of pages, a listing
    /// page fails, or a bound is hit. Never returns more than `target`.
    pub async fn collect(&self, base_url: &str, target: usize) -> Vec<String> {
        self.collect_report(base_url, target).await.links
    }

    /// Like [`collect`](Self::collect), but also reports how the run ended
    pub async fn collect_report(&self, base_url: &str, target: usize) -> CollectReport {
        let started = Instant::now();
        let mut links: Vec<String> = Vec::with_capacity(target.min(64));
        let mut page: u32 = 1;
        let mut pages_visited: u32 = 0;

        let stop_reason = loop {
            if links.len() >= target {
                break StopReason::TargetReached;
            }
            if pages_visited >= self.max_pages {
                break StopReason::PageLimit;
            }
            if started.elapsed() >= self.deadline {
                break StopReason::Deadline;
            }

            let page_url = self.paginator.page_url(base_url, page);
            pages_visited += 1;

            let cards = match self.visit_listing(&page_url).await {
                PageOutcome::Cards(cards) => cards,
                PageOutcome::Empty => {
                    tracing::debug!(page_url = %page_url, "No group cards, end of listing");
                    break StopReason::Exhausted;
                }
                PageOutcome::Failed(reason) => {
                    tracing::warn!(page_url = %page_url, "Listing page fetch failed: {}", reason);
                    break StopReason::PageFailed;
                }
            };

            tracing::debug!(page_url = %page_url, cards = cards.len(), "Listing page parsed");

            for card in &cards {
                if links.len() >= target || started.elapsed() >= self.deadline {
                    break;
                }

                match self.visit_card(base_url, card).await {
                    CardOutcome::Invite(link) => links.push(link),
                    CardOutcome::NoInvite { detail_url } => {
                        tracing::debug!(detail_url = %detail_url, "No invite link on detail page");
                    }
                    CardOutcome::NoLink => {
                        tracing::debug!(page_url = %page_url, "Group card without link, skipping");
                    }
                    CardOutcome::Failed { detail_url, reason } => {
                        tracing::debug!(detail_url = %detail_url, "Detail page fetch failed: {}", reason);
                    }
                }
            }

            page += 1;
        };

        links.truncate(target);

        tracing::info!(
            base_url = %base_url,
            collected = links.len(),
            requested = target,
            pages_visited,
            "Link collection stopped: {:?}",
            stop_reason
        );

        CollectReport {
            links,
            pages_visited,
            stop_reason,
        }
    }

    async fn visit_listing(&self, page_url: &str) -> PageOutcome {
        let outcome = fetch_page(&self.client, page_url).await;
        if let Some(reason) = outcome.failure_reason() {
            return PageOutcome::Failed(reason);
        }

        let body = outcome.into_body().unwrap_or_default();
        let cards = parse_listing(&body, &self.selectors);
        if cards.is_empty() {
            PageOutcome::Empty
        } else {
            PageOutcome::Cards(cards)
        }
    }

    async fn visit_card(&self, base_url: &str, card: &GroupCard) -> CardOutcome {
        let Some(href) = card.detail_href.as_deref() else {
            return CardOutcome::NoLink;
        };

        let detail_url = resolve_href(base_url, href);
        let outcome = fetch_page(&self.client, &detail_url).await;
        if let Some(reason) = outcome.failure_reason() {
            return CardOutcome::Failed { detail_url, reason };
        }

        let body = outcome.into_body().unwrap_or_default();
        match parse_invite_url(&body, &self.selectors) {
            Some(link) if link.contains(&self.invite_marker) => CardOutcome::Invite(link),
            _ => CardOutcome::NoInvite { detail_url },
        }
    }
}
