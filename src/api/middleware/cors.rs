//! Cross-origin access for the browser frontend.

use tower_http::cors::{Any, CorsLayer};

/// Allows any origin to call the API with any method and header.
///
/// Requests carry no credentials.
pub fn layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}
