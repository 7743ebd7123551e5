//! Url record entity representing a short code mapping.

use chrono::{DateTime, Utc};

/// Lifecycle state of a record, derived from its visit counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordState {
    /// Inserted but never resolved (`visits == 0`).
    Created,
    /// Resolved at least once (`visits >= 1`).
    Visited,
}

/// A shortened URL with its visit metadata.
///
/// `code`, `destination`, `is_custom` and `created_at` never change after
/// insertion. Only [`UrlRecord::register_visit`] mutates a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlRecord {
    pub code: String,
    pub destination: String,
    pub is_custom: bool,
    pub visits: u64,
    pub created_at: DateTime<Utc>,
    pub last_accessed_at: Option<DateTime<Utc>>,
}

impl UrlRecord {
    /// Creates a fresh, unvisited record.
    pub fn new(
        code: String,
        destination: String,
        is_custom: bool,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            code,
            destination,
            is_custom,
            visits: 0,
            created_at,
            last_accessed_at: None,
        }
    }

    pub fn state(&self) -> RecordState {
        if self.visits == 0 {
            RecordState::Created
        } else {
            RecordState::Visited
        }
    }

    /// Counts one visit at `now`.
    ///
    /// The access timestamp never moves backwards and never precedes
    /// `created_at`, even if the wall clock does.
    pub fn register_visit(&mut self, now: DateTime<Utc>) {
        let floor = self.last_accessed_at.unwrap_or(self.created_at);
        self.visits = self.visits.saturating_add(1);
        self.last_accessed_at = Some(now.max(floor));
    }
}

/// Input data for inserting a new record.
///
/// `custom_code` is `None` when the registry should generate the code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUrlRecord {
    pub destination: String,
    pub custom_code: Option<String>,
}
