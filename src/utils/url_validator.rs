//! Destination URL validation.

use crate::error::AppError;
use url::Url;

/// Checks that `input` is an absolute http(s) URL with a host.
///
/// The input is not rewritten: a stored destination is byte-for-byte what the
/// caller submitted, so resolving a code returns exactly the original URL.
///
/// # Errors
///
/// Returns [`AppError::InvalidUrl`] for relative or malformed URLs, missing
/// hosts, schemes other than `http`/`https` (`javascript:`, `data:`,
/// `file:`, `ftp:` ...) and control characters anywhere in the input.
pub fn validate_destination(input: &str) -> Result<(), AppError> {
    let invalid = |reason: &str| AppError::InvalidUrl {
        url: input.to_string(),
        reason: reason.to_string(),
    };

    // The parser silently drops tab/CR/LF, but the stored value must be
    // usable verbatim as a `Location` header.
    if input.chars().any(char::is_control) {
        return Err(invalid("URL must not contain control characters"));
    }

    let url = Url::parse(input).map_err(|e| invalid(&e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(invalid("only http and https URLs are allowed")),
    }

    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(()),
        _ => Err(invalid("URL must include a host")),
    }
}
