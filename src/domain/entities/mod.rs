//! Core domain entities.
//!
//! - [`UrlRecord`] - a short code mapped to its destination, with visit metadata
//! - [`NewUrlRecord`] - input for inserting a record
//! - [`RecordState`] - `Created` / `Visited` lifecycle of a record

pub mod url_record;

pub use url_record::{NewUrlRecord, RecordState, UrlRecord};
