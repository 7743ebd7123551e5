//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /shorten`     - Create a short link
//! - `GET  /health`      - Health check
//! - `GET  /{code}`      - Short link redirect (counts a visit)
//! - `/api/*`            - Listing and lookup (see [`crate::api::routes`])
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Permissive cross-origin access, when enabled
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler, shorten_handler};
use crate::api::middleware::{cors, tracing};
use crate::state::AppState;
use axum::Router;
use axum::routing::{get, post};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `cors_enabled` - when `true`, responses carry permissive CORS headers so a
///   browser client served from another origin can call the API
pub fn app_router(state: AppState, cors_enabled: bool) -> NormalizePath<Router> {
    let mut router = Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/health", get(health_handler))
        .route("/{code}", get(redirect_handler))
        .nest("/api", api::routes::api_routes())
        .with_state(state)
        .layer(tracing::layer());

    if cors_enabled {
        router = router.layer(cors::layer());
    }

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
