//! DTOs for the link listing and lookup endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};

use crate::application::services::LinkView;
use crate::domain::repositories::SortKey;
use crate::error::AppError;
use serde_json::json;

/// Query parameters for listing links.
///
/// Uses `serde_with` to parse `limit` from the query string as an integer.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct ListQueryParams {
    pub search: Option<String>,

    pub sort: Option<String>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub limit: Option<usize>,
}

impl ListQueryParams {
    /// Parses the sort key, defaulting to [`SortKey::Recent`].
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for an unknown sort key.
    pub fn sort_key(&self) -> Result<SortKey, AppError> {
        match self.sort.as_deref().map(str::trim) {
            None | Some("") => Ok(SortKey::default()),
            Some(raw) => raw
                .parse()
                .map_err(|e: String| AppError::bad_request(e, json!({ "sort": raw }))),
        }
    }

    /// Validates the limit, falling back to `default` when absent.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the limit is zero.
    pub fn limit_or(&self, default: Option<usize>) -> Result<Option<usize>, AppError> {
        match self.limit {
            Some(0) => Err(AppError::bad_request(
                "Limit must be greater than 0",
                json!({ "limit": 0 }),
            )),
            Some(limit) => Ok(Some(limit)),
            None => Ok(default),
        }
    }
}

/// One link in a listing.
#[derive(Debug, Serialize)]
pub struct LinkItem {
    pub original_url: String,
    pub short_url: String,
    pub short_code: String,
    pub visits: u64,
    pub created_at: DateTime<Utc>,
    pub last_accessed: Option<DateTime<Utc>>,
    pub is_custom: bool,
}

impl From<LinkView> for LinkItem {
    fn from(link: LinkView) -> Self {
        let LinkView { short_url, record } = link;
        Self {
            original_url: record.destination,
            short_url,
            short_code: record.code,
            visits: record.visits,
            created_at: record.created_at,
            last_accessed: record.last_accessed_at,
            is_custom: record.is_custom,
        }
    }
}
