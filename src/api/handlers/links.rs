//! Handlers for listing and inspecting links.

use axum::{
    Json,
    extract::{Path, Query, State},
};

use crate::api::dto::links::{LinkItem, ListQueryParams};
use crate::error::AppError;
use crate::state::AppState;

/// Lists links with optional search, sort and limit.
///
/// # Endpoint
///
/// `GET /api/links`
///
/// # Query Parameters
///
/// - `search` (optional): case-insensitive substring of destination or code
/// - `sort` (optional): `recent` (default), `visits` or `alphabetical`
/// - `limit` (optional): maximum number of items, applied after sorting
///
/// # Errors
///
/// Returns 400 Bad Request for an unknown `sort` or a zero `limit`.
pub async fn list_links_handler(
    State(state): State<AppState>,
    Query(params): Query<ListQueryParams>,
) -> Result<Json<Vec<LinkItem>>, AppError> {
    list(&state, params, None).await
}

/// Same as [`list_links_handler`] but capped at the configured recent limit
/// when no `limit` is given.
///
/// # Endpoint
///
/// `GET /api/recent`
pub async fn recent_links_handler(
    State(state): State<AppState>,
    Query(params): Query<ListQueryParams>,
) -> Result<Json<Vec<LinkItem>>, AppError> {
    let default_limit = Some(state.recent_limit);
    list(&state, params, default_limit).await
}

/// Returns one link without recording a visit.
///
/// # Endpoint
///
/// `GET /api/links/{code}`
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn link_details_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<LinkItem>, AppError> {
    let link = state.link_service.get_link(&code).await?;

    Ok(Json(link.into()))
}

async fn list(
    state: &AppState,
    params: ListQueryParams,
    default_limit: Option<usize>,
) -> Result<Json<Vec<LinkItem>>, AppError> {
    let sort = params.sort_key()?;
    let limit = params.limit_or(default_limit)?;

    let items = state
        .link_service
        .list(params.search, sort, limit)
        .await
        .into_iter()
        .map(LinkItem::from)
        .collect();

    Ok(Json(items))
}
