//! Repository trait definitions for the domain layer.
//!
//! The registry trait is the contract the application layer depends on. The
//! concrete implementation lives in `crate::infrastructure::persistence`, and
//! a `mockall` mock is generated for unit tests.

pub mod url_registry;

pub use url_registry::{SnapshotQuery, SortKey, UrlRegistry};

#[cfg(test)]
pub use url_registry::MockUrlRegistry;
