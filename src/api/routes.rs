//! API route configuration.

use crate::api::handlers::{link_details_handler, list_links_handler, recent_links_handler};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Read-only listing routes, nested under `/api`.
///
/// # Endpoints
///
/// - `GET /recent`       - Most recent links (capped at the configured recent limit)
/// - `GET /links`        - All links, with `search`, `sort` and `limit`
/// - `GET /links/{code}` - One link, without counting a visit
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/recent", get(recent_links_handler))
        .route("/links", get(list_links_handler))
        .route("/links/{code}", get(link_details_handler))
}
