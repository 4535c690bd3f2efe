//! Router configuration.
//!
//! # Endpoints
//!
//! - `GET /get_whatsapp_links` - Collect invite links
//! - `GET /get_categories`     - List site categories
//! - `GET /health`             - Liveness check

use axum::{routing::get, Router};

use crate::api::handlers::{categories_handler, health_handler, whatsapp_links_handler};
use crate::api::trace;
use crate::state::AppState;

/// Constructs the application router with all routes and request tracing.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/get_whatsapp_links", get(whatsapp_links_handler))
        .route("/get_categories", get(categories_handler))
        .route("/health", get(health_handler))
        .with_state(state)
        .layer(trace::layer())
}
