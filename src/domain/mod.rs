//! Domain layer: entities and the registry contract.
//!
//! - [`entities`] - the [`entities::UrlRecord`] data model
//! - [`repositories`] - the [`repositories::UrlRegistry`] trait plus snapshot
//!   filtering and ordering rules
//!
//! Nothing here depends on the HTTP or storage layers.

pub mod entities;
pub mod repositories;
