//! Registry implementations.
//!
//! - [`InMemoryRegistry`] - process-local store guarded by a reader-writer lock

pub mod memory_registry;

pub use memory_registry::InMemoryRegistry;
