//! HTTP middleware for request processing.
//!
//! Provides request tracing and cross-origin access for the browser client.

pub mod cors;
pub mod tracing;
