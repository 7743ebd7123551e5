//! Registry trait owning the code ↔ destination mapping.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::domain::entities::{NewUrlRecord, UrlRecord};
use crate::error::AppError;
use async_trait::async_trait;

/// Ordering applied to a registry snapshot.
///
/// Every key is applied with a stable sort, so records that compare equal
/// keep their insertion order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    /// Newest first (descending `created_at`).
    #[default]
    Recent,
    /// Most visited first.
    Visits,
    /// Destination URL ascending, ignoring case.
    Alphabetical,
}

impl SortKey {
    pub fn compare(self, a: &UrlRecord, b: &UrlRecord) -> Ordering {
        match self {
            SortKey::Recent => b.created_at.cmp(&a.created_at),
            SortKey::Visits => b.visits.cmp(&a.visits),
            SortKey::Alphabetical => a
                .destination
                .to_lowercase()
                .cmp(&b.destination.to_lowercase()),
        }
    }

    /// Sorts `records` in place. Equal records keep their relative order.
    pub fn sort(self, records: &mut [UrlRecord]) {
        match self {
            SortKey::Alphabetical => {
                records.sort_by_cached_key(|record| record.destination.to_lowercase())
            }
            _ => records.sort_by(|a, b| self.compare(a, b)),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Recent => "recent",
            SortKey::Visits => "visits",
            SortKey::Alphabetical => "alphabetical",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "recent" | "recency" => Ok(SortKey::Recent),
            "visits" => Ok(SortKey::Visits),
            "alphabetical" => Ok(SortKey::Alphabetical),
            other => Err(format!(
                "unknown sort key '{other}', expected one of: recent, visits, alphabetical"
            )),
        }
    }
}

/// Filter, ordering and size limit for [`UrlRegistry::snapshot`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SnapshotQuery {
    /// Case-insensitive substring matched against destination or code.
    /// Held lowercased; build it through [`SnapshotQuery::with_search`].
    pub search: Option<String>,
    pub sort: SortKey,
    pub limit: Option<usize>,
}

impl SnapshotQuery {
    pub fn new(sort: SortKey) -> Self {
        Self {
            search: None,
            sort,
            limit: None,
        }
    }

    /// Adds a search term. Blank terms are ignored.
    pub fn with_search(mut self, search: Option<String>) -> Self {
        self.search = search
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty());
        self
    }

    pub fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }

    /// Returns true if `record` passes the search filter.
    pub fn matches(&self, record: &UrlRecord) -> bool {
        match &self.search {
            None => true,
            Some(term) => {
                record.destination.to_lowercase().contains(term.as_str())
                    || record.code.to_lowercase().contains(term.as_str())
            }
        }
    }
}

/// Sole authority over short code mappings and their visit metadata.
///
/// Implementations must make [`insert`](UrlRegistry::insert) and
/// [`record_visit`](UrlRegistry::record_visit) atomic with respect to the
/// affected code, and must hand out owned copies only.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::InMemoryRegistry`] - lock-protected map
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRegistry: Send + Sync {
    /// Inserts a new record, generating a code unless a custom one is given.
    ///
    /// # Errors
    ///
    /// - [`AppError::InvalidUrl`] if the destination is not an absolute http(s) URL.
    ///   Checked before any code is allocated.
    /// - [`AppError::InvalidAlias`] if the custom code breaks the alias rule.
    /// - [`AppError::AliasTaken`] if the custom code is already in use.
    /// - [`AppError::CodeSpaceExhausted`] if generation hits its retry bound.
    async fn insert(&self, new_record: NewUrlRecord) -> Result<UrlRecord, AppError>;

    /// Reads a record without touching its visit state.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for an unknown code.
    async fn lookup(&self, code: &str) -> Result<UrlRecord, AppError>;

    /// Increments the visit counter and stamps the access time.
    ///
    /// Returns the record as of right after this visit.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for an unknown code. The registry is
    /// left unchanged in that case.
    async fn record_visit(&self, code: &str) -> Result<UrlRecord, AppError>;

    /// Returns a point-in-time copy of matching records in the requested order.
    async fn snapshot(&self, query: SnapshotQuery) -> Vec<UrlRecord>;

    /// Number of records currently stored.
    async fn count(&self) -> usize;
}
