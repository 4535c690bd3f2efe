//! Handler for invite link collection.

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};

use super::ScrapeTask;
use crate::api::dto::{LinksQuery, ScrapeRequest};
use crate::error::AppError;
use crate::state::AppState;

/// Collects WhatsApp invite links from the listing site.
///
/// # Endpoint
///
/// `GET /get_whatsapp_links?base_url=...&num_links=...`
///
/// # Response Codes
///
/// - **200 OK**: JSON array of invite links, at most `num_links` long
/// - **400 Bad Request**: `num_links` is not a positive integer
/// - **404 Not Found**: no invite link could be collected
/// - **500 Internal Server Error**: the scraping task failed unexpectedly
///
/// Parameters are validated before any request leaves the service. The
/// scrape is aborted if the client disconnects before it finishes.
pub async fn whatsapp_links_handler(
    State(state): State<AppState>,
    query: Result<Query<LinksQuery>, QueryRejection>,
) -> Result<Json<Vec<String>>, AppError> {
    let Query(query) = query.map_err(|e| {
        tracing::debug!("Rejected link query: {}", e);
        AppError::bad_request("invalid parameters")
    })?;
    let request =
        ScrapeRequest::from_query(query, &state.default_base_url, state.default_num_links)?;

    let collector = state.link_collector.clone();
    let report = ScrapeTask::spawn(async move {
        collector
            .collect_report(&request.base_url, request.num_links)
            .await
    })
    .await
    .map_err(|e| AppError::internal("internal server error", e.to_string()))?;

    if report.links.is_empty() {
        return Err(AppError::not_found("no links found"));
    }

    Ok(Json(report.links))
}
