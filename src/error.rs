//! Crate-wide error type and its HTTP representation.
//!
//! The registry reports the precise failure kind and the service passes it
//! through unchanged, so every variant here maps one-to-one onto a stable
//! machine-readable code in the response body.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Serializable error payload: `{ "code", "message", "details" }`.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The URL was empty after trimming whitespace.
    #[error("URL is required")]
    EmptyUrl,

    /// The URL is not an absolute http(s) URL with a host.
    #[error("Invalid URL format: {reason}")]
    InvalidUrl { url: String, reason: String },

    /// The custom alias violates the charset, length, or reserved-word rule.
    #[error("Invalid custom alias: {reason}")]
    InvalidAlias { alias: String, reason: String },

    #[error("Custom alias '{alias}' is already taken")]
    AliasTaken { alias: String },

    /// Every generated candidate collided with an existing code.
    #[error("Failed to generate a unique code after {attempts} attempts")]
    CodeSpaceExhausted { attempts: usize },

    #[error("Short link '{code}' not found")]
    NotFound { code: String },

    /// Malformed request body or query string.
    #[error("{message}")]
    Validation { message: String, details: Value },

    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    pub fn not_found(code: impl Into<String>) -> Self {
        Self::NotFound { code: code.into() }
    }

    /// Stable machine-readable identifier for this error kind.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::EmptyUrl => "empty_url",
            AppError::InvalidUrl { .. } => "invalid_url",
            AppError::InvalidAlias { .. } => "invalid_alias",
            AppError::AliasTaken { .. } => "alias_taken",
            AppError::CodeSpaceExhausted { .. } => "code_space_exhausted",
            AppError::NotFound { .. } => "not_found",
            AppError::Validation { .. } => "validation_error",
            AppError::Internal { .. } => "internal_error",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::EmptyUrl
            | AppError::InvalidUrl { .. }
            | AppError::InvalidAlias { .. }
            | AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::AliasTaken { .. } => StatusCode::CONFLICT,
            AppError::CodeSpaceExhausted { .. } => StatusCode::SERVICE_UNAVAILABLE,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn details(&self) -> Value {
        match self {
            AppError::EmptyUrl => json!({}),
            AppError::InvalidUrl { url, .. } => json!({ "url": url }),
            AppError::InvalidAlias { alias, .. } => json!({ "alias": alias }),
            AppError::AliasTaken { alias } => json!({ "alias": alias }),
            AppError::CodeSpaceExhausted { attempts } => json!({ "attempts": attempts }),
            AppError::NotFound { code } => json!({ "code": code }),
            AppError::Validation { details, .. } | AppError::Internal { details, .. } => {
                details.clone()
            }
        }
    }

    pub fn to_error_info(&self) -> ErrorInfo {
        ErrorInfo {
            code: self.code(),
            message: self.to_string(),
            details: self.details(),
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let details = serde_json::to_value(&errors).unwrap_or_else(|_| json!({}));
        AppError::bad_request("Request validation failed", details)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_errors_have_distinct_codes() {
        let errors = [
            AppError::EmptyUrl,
            AppError::InvalidUrl {
                url: "x".to_string(),
                reason: "relative".to_string(),
            },
            AppError::InvalidAlias {
                alias: "ab".to_string(),
                reason: "too short".to_string(),
            },
            AppError::AliasTaken {
                alias: "taken".to_string(),
            },
            AppError::CodeSpaceExhausted { attempts: 3 },
            AppError::not_found("nope"),
        ];

        let mut codes: Vec<_> = errors.iter().map(AppError::code).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(AppError::EmptyUrl.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AppError::AliasTaken {
                alias: "x".to_string()
            }
            .status(),
            StatusCode::CONFLICT
        );
        assert_eq!(AppError::not_found("x").status(), StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::CodeSpaceExhausted { attempts: 1 }.status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }

    #[test]
    fn test_error_info_carries_details() {
        let info = AppError::AliasTaken {
            alias: "promo".to_string(),
        }
        .to_error_info();

        assert_eq!(info.code, "alias_taken");
        assert!(info.message.contains("promo"));
        assert_eq!(info.details["alias"], "promo");
    }
}
