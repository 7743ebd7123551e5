//! Handler for health check endpoint.

use axum::{Json, extract::State};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "registry": {
///       "status": "ok",
///       "message": "3 links registered"
///     }
///   }
/// }
/// ```
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let registry = check_registry(&state).await;

    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks { registry },
    })
}

/// Reports the registry size; taking the read lock proves it is not wedged.
async fn check_registry(state: &AppState) -> CheckStatus {
    let count = state.link_service.link_count().await;

    CheckStatus {
        status: "ok".to_string(),
        message: Some(format!("{count} links registered")),
    }
}
