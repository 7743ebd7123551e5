//! Infrastructure layer.
//!
//! Concrete implementations of the domain contracts. [`persistence`] holds the
//! registry backends.

pub mod persistence;
