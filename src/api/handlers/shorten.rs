//! Handler for link shortening endpoint.

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use serde_json::json;
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link for a URL.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://example.com",
///   "custom_code": "my-link"
/// }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "original_url": "https://example.com",
///   "short_url": "http://localhost:3000/my-link",
///   "short_code": "my-link",
///   "status": "created",
///   "is_custom": true
/// }
/// ```
///
/// # Errors
///
/// - 400 `empty_url`, `invalid_url`, `invalid_alias`, `validation_error`
/// - 409 `alias_taken`
/// - 503 `code_space_exhausted`
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<Json<ShortenResponse>, AppError> {
    let Json(payload) = payload.map_err(|rejection| {
        AppError::bad_request(
            "Request must be JSON",
            json!({ "reason": rejection.body_text() }),
        )
    })?;
    payload.validate()?;

    let link = state
        .link_service
        .shorten(&payload.url, payload.custom_code.as_deref())
        .await?;

    Ok(Json(link.into()))
}
