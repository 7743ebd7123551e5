//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect},
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its destination and counts the visit.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let destination = state.link_service.resolve(&code).await?;

    Ok(Redirect::temporary(&destination))
}
