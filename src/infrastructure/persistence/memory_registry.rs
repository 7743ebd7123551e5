//! In-memory implementation of the url registry.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;
use tracing::{debug, info, warn};

use crate::domain::entities::{NewUrlRecord, RecordState, UrlRecord};
use crate::domain::repositories::{SnapshotQuery, UrlRegistry};
use crate::error::AppError;
use crate::utils::code_generator::{CodeGenerator, validate_custom_code};
use crate::utils::url_validator::validate_destination;

/// Records in insertion order plus a code → position index.
#[derive(Debug, Default)]
struct Entries {
    records: Vec<UrlRecord>,
    index: HashMap<String, usize>,
}

/// Registry holding every record behind a single reader-writer lock.
///
/// Inserts and visits take the write lock, so the uniqueness check and the
/// insertion happen in one critical section and concurrent visits to the
/// same code are serialized. Lookups and snapshots share the read lock and
/// copy records out before returning; sorting happens after the lock is
/// released.
pub struct InMemoryRegistry {
    generator: CodeGenerator,
    entries: RwLock<Entries>,
}

impl InMemoryRegistry {
    /// Creates an empty registry using `generator` for generated codes.
    pub fn new(generator: CodeGenerator) -> Self {
        Self {
            generator,
            entries: RwLock::new(Entries::default()),
        }
    }

    /// Draws candidates until one is free, at most `max_attempts` times.
    ///
    /// Must be called with the write lock held so the chosen code cannot be
    /// taken before it is inserted.
    fn generate_unique_code(&self, entries: &Entries) -> Result<String, AppError> {
        let attempts = self.generator.max_attempts();

        for attempt in 1..=attempts {
            let candidate = self.generator.generate();
            if !entries.index.contains_key(&candidate) {
                return Ok(candidate);
            }

            metrics::counter!("quicklink_code_collisions_total").increment(1);
            debug!(attempt, code = %candidate, "Generated code collided");
        }

        warn!(attempts, size = entries.records.len(), "Code space exhausted");
        Err(AppError::CodeSpaceExhausted { attempts })
    }
}

impl Default for InMemoryRegistry {
    fn default() -> Self {
        Self::new(CodeGenerator::default())
    }
}

#[async_trait]
impl UrlRegistry for InMemoryRegistry {
    async fn insert(&self, new_record: NewUrlRecord) -> Result<UrlRecord, AppError> {
        let NewUrlRecord {
            destination,
            custom_code,
        } = new_record;

        validate_destination(&destination)?;
        if let Some(alias) = &custom_code {
            validate_custom_code(alias)?;
        }

        let mut guard = self.entries.write();
        let entries = &mut *guard;

        let (code, is_custom) = match custom_code {
            Some(alias) => {
                if entries.index.contains_key(&alias) {
                    return Err(AppError::AliasTaken { alias });
                }
                (alias, true)
            }
            None => (self.generate_unique_code(entries)?, false),
        };

        let record = UrlRecord::new(code, destination, is_custom, Utc::now());
        let position = entries.records.len();
        entries.index.insert(record.code.clone(), position);
        entries.records.push(record.clone());

        info!(
            code = %record.code,
            is_custom,
            size = entries.records.len(),
            "Registered short link"
        );

        Ok(record)
    }

    async fn lookup(&self, code: &str) -> Result<UrlRecord, AppError> {
        let entries = self.entries.read();

        entries
            .index
            .get(code)
            .map(|&position| entries.records[position].clone())
            .ok_or_else(|| AppError::not_found(code))
    }

    async fn record_visit(&self, code: &str) -> Result<UrlRecord, AppError> {
        let mut guard = self.entries.write();
        let entries = &mut *guard;

        let position = *entries
            .index
            .get(code)
            .ok_or_else(|| AppError::not_found(code))?;

        let record = &mut entries.records[position];
        let previous = record.state();
        record.register_visit(Utc::now());

        if previous == RecordState::Created {
            info!(code, "Short link visited for the first time");
        }
        debug!(code, visits = record.visits, "Recorded visit");

        Ok(record.clone())
    }

    async fn snapshot(&self, query: SnapshotQuery) -> Vec<UrlRecord> {
        let mut records: Vec<UrlRecord> = {
            let entries = self.entries.read();
            entries
                .records
                .iter()
                .filter(|record| query.matches(record))
                .cloned()
                .collect()
        };

        query.sort.sort(&mut records);

        if let Some(limit) = query.limit {
            records.truncate(limit);
        }

        records
    }

    async fn count(&self) -> usize {
        self.entries.read().records.len()
    }
}
