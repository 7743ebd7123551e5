//! DTOs for the shortening endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::application::services::LinkView;

/// Request to shorten a single URL.
///
/// Only upper bounds are checked here; emptiness and URL/alias syntax are
/// decided by the service and registry.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The URL to shorten.
    #[serde(default)]
    #[validate(length(max = 2048, message = "URL must be at most 2048 characters"))]
    pub url: String,

    /// Optional caller-chosen alias.
    #[validate(length(max = 64, message = "Custom code must be at most 64 characters"))]
    pub custom_code: Option<String>,
}

/// Created short link.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub original_url: String,
    pub short_url: String,
    pub short_code: String,
    pub status: &'static str,
    pub is_custom: bool,
}

impl From<LinkView> for ShortenResponse {
    fn from(link: LinkView) -> Self {
        Self {
            original_url: link.record.destination,
            short_url: link.short_url,
            short_code: link.record.code,
            status: "created",
            is_custom: link.record.is_custom,
        }
    }
}
