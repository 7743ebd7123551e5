//! Helpers shared by the registry and the service.
//!
//! - [`code_generator`] - Short code generation and alias validation
//! - [`url_validator`] - Destination URL validation

pub mod code_generator;
pub mod url_validator;
