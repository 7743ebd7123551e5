//! Application layer services implementing business logic.
//!
//! Services consume the registry trait and give HTTP handlers a small API:
//!
//! - [`services::link_service::LinkService`] - shorten, resolve, look up and list links

pub mod services;
