//! Shortening, resolution and listing service.

use std::sync::Arc;

use crate::domain::entities::{NewUrlRecord, UrlRecord};
use crate::domain::repositories::{SnapshotQuery, SortKey, UrlRegistry};
use crate::error::AppError;
use tracing::{debug, info, warn};

/// A registry record paired with its public short URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkView {
    pub short_url: String,
    pub record: UrlRecord,
}

/// Translates requests into registry operations and shapes the results.
///
/// Holds no records of its own. The short URL is composed here from the
/// configured base address and is never stored with the record.
pub struct LinkService<R: UrlRegistry> {
    registry: Arc<R>,
    base_url: String,
}

impl<R: UrlRegistry> LinkService<R> {
    /// Creates a new link service publishing links under `base_url`.
    pub fn new(registry: Arc<R>, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { registry, base_url }
    }

    /// Creates a short link.
    ///
    /// Both inputs are trimmed. A blank custom code counts as absent, in which
    /// case the registry generates one.
    ///
    /// # Errors
    ///
    /// - [`AppError::EmptyUrl`] if the URL is blank
    /// - [`AppError::InvalidUrl`], [`AppError::InvalidAlias`],
    ///   [`AppError::AliasTaken`], [`AppError::CodeSpaceExhausted`] from the
    ///   registry, unchanged
    pub async fn shorten(
        &self,
        raw_url: &str,
        raw_custom_code: Option<&str>,
    ) -> Result<LinkView, AppError> {
        let destination = raw_url.trim();
        if destination.is_empty() {
            return Err(AppError::EmptyUrl);
        }

        let custom_code = raw_custom_code
            .map(str::trim)
            .filter(|code| !code.is_empty())
            .map(str::to_string);

        let record = self
            .registry
            .insert(NewUrlRecord {
                destination: destination.to_string(),
                custom_code,
            })
            .await
            .inspect_err(|e| warn!(error = %e, kind = e.code(), "Shorten rejected"))?;

        let kind = if record.is_custom { "custom" } else { "generated" };
        metrics::counter!("quicklink_links_created_total", "kind" => kind).increment(1);
        info!(code = %record.code, kind, "Short link created");

        Ok(self.view(record))
    }

    /// Resolves a code to its destination and counts the visit.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code does not exist.
    pub async fn resolve(&self, code: &str) -> Result<String, AppError> {
        let record = self.registry.record_visit(code).await?;

        metrics::counter!("quicklink_redirects_total").increment(1);
        debug!(code, visits = record.visits, "Resolved short link");

        Ok(record.destination)
    }

    /// Reads a single link without counting a visit.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code does not exist.
    pub async fn get_link(&self, code: &str) -> Result<LinkView, AppError> {
        let record = self.registry.lookup(code).await?;
        Ok(self.view(record))
    }

    /// Lists links matching `search`, ordered by `sort`, at most `limit` of them.
    pub async fn list(
        &self,
        search: Option<String>,
        sort: SortKey,
        limit: Option<usize>,
    ) -> Vec<LinkView> {
        let query = SnapshotQuery::new(sort)
            .with_search(search)
            .with_limit(limit);

        let records = self.registry.snapshot(query).await;
        debug!(count = records.len(), sort = %sort, "Listed short links");

        records.into_iter().map(|record| self.view(record)).collect()
    }

    /// Number of links in the registry.
    pub async fn link_count(&self) -> usize {
        self.registry.count().await
    }

    /// Builds the public short URL for `code`.
    pub fn short_url(&self, code: &str) -> String {
        format!("{}/{}", self.base_url, code)
    }

    fn view(&self, record: UrlRecord) -> LinkView {
        LinkView {
            short_url: self.short_url(&record.code),
            record,
        }
    }
}
