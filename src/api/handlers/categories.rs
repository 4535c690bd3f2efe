//! Handler for category listing.

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};

use super::ScrapeTask;
use crate::api::dto::{CategoriesQuery, CategoryRequest};
use crate::crawler::Category;
use crate::error::AppError;
use crate::state::AppState;

/// Lists the categories shown in the listing site's navigation.
///
/// # Endpoint
///
/// `GET /get_categories?base_url=...`
///
/// # Response Codes
///
/// - **200 OK**: JSON array of `{name, url}`, empty when the site is
///   unreachable or has no category navigation
/// - **400 Bad Request**: the query string cannot be decoded
/// - **500 Internal Server Error**: the scraping task failed unexpectedly
pub async fn categories_handler(
    State(state): State<AppState>,
    query: Result<Query<CategoriesQuery>, QueryRejection>,
) -> Result<Json<Vec<Category>>, AppError> {
    let Query(query) = query.map_err(|e| {
        tracing::debug!("Rejected category query: {}", e);
        AppError::bad_request("invalid parameters")
    })?;
    let request = CategoryRequest::from_query(query, &state.default_base_url);

    let lister = state.category_lister.clone();
    let categories = ScrapeTask::spawn(async move { lister.list(&request.base_url).await })
        .await
        .map_err(|e| AppError::internal("error fetching categories", e.to_string()))?;

    Ok(Json(categories))
}
