//! # quicklink
//!
//! A small URL shortening service built with Axum: it issues or validates
//! short codes, keeps a collision-free code → URL mapping, counts visits under
//! concurrent access and lists links with deterministic ordering.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - The [`domain::entities::UrlRecord`] model and
//!   the [`domain::repositories::UrlRegistry`] contract
//! - **Application Layer** ([`application`]) - Shorten / resolve / list logic
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory registry
//! - **API Layer** ([`api`]) - HTTP handlers, DTOs and middleware
//!
//! ## Quick Start
//!
//! ```bash
//! export BASE_URL="http://localhost:3000"
//! cargo run
//!
//! curl -X POST localhost:3000/shorten \
//!   -H 'content-type: application/json' \
//!   -d '{"url": "https://www.rust-lang.org", "custom_code": "rust"}'
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{LinkService, LinkView};
    pub use crate::domain::entities::{NewUrlRecord, RecordState, UrlRecord};
    pub use crate::domain::repositories::{SnapshotQuery, SortKey, UrlRegistry};
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::InMemoryRegistry;
    pub use crate::state::AppState;
    pub use crate::utils::code_generator::CodeGenerator;
}
