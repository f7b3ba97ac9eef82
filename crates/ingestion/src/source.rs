//! Listing sources and search-generation tracking.
//!
//! The fetch against the pricing provider is the one asynchronous,
//! fallible collaborator in the system. It is abstracted behind
//! [`ListingSource`]; the analytics pipeline only ever sees a fully
//! materialized batch, never partial results.
//!
//! [`SearchSession`] tags every search with a generation counter. A fetch
//! that resolves after a newer search has begun is superseded and its
//! result is dropped, so a slow early response can never overwrite a later
//! one.

use async_trait::async_trait;
use chrono::Utc;
use comps_core::config::SearchConfig;
use comps_core::{ListingBatch, RawRecord, Result};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

use crate::normalizer::normalize_batch;
use crate::sample::sample_raw_records;

/// Parameters for one comparable-listings search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchQuery {
    /// ZIP code to center the search on.
    pub zip: String,
    /// Search radius in miles.
    pub radius_miles: u32,
}

impl From<&SearchConfig> for SearchQuery {
    fn from(config: &SearchConfig) -> Self {
        Self {
            zip: config.zip.clone(),
            radius_miles: config.radius_miles,
        }
    }
}

/// A source of raw listing records.
///
/// Implementations either call out to the live pricing provider or return
/// canned data. Transport failures surface as [`comps_core::Error::Source`];
/// on that
/// path the pipeline is simply not invoked and the previous working set
/// stays untouched.
#[async_trait]
pub trait ListingSource: Send + Sync {
    /// Fetch one batch of raw records for the query.
    async fn fetch(&self, query: &SearchQuery) -> Result<Vec<RawRecord>>;
}

/// Source backed by the built-in synthetic sample batch.
pub struct SampleSource;

#[async_trait]
impl ListingSource for SampleSource {
    async fn fetch(&self, query: &SearchQuery) -> Result<Vec<RawRecord>> {
        let records = sample_raw_records();
        tracing::debug!(
            zip = %query.zip,
            radius = query.radius_miles,
            count = records.len(),
            "serving sample batch"
        );
        Ok(records)
    }
}

/// Tracks search generations so stale in-flight results are discarded.
///
/// `begin` supersedes every earlier generation. After a fetch resolves,
/// `run_search` re-checks that its generation is still current before
/// committing; an out-of-order response from an older search is dropped.
#[derive(Debug, Default)]
pub struct SearchSession {
    latest: AtomicU64,
}

impl SearchSession {
    /// Create a new session with no searches issued.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new search generation, superseding all prior ones.
    pub fn begin(&self) -> u64 {
        self.latest.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Whether the given generation is still the newest.
    pub fn is_current(&self, generation: u64) -> bool {
        self.latest.load(Ordering::SeqCst) == generation
    }

    /// Fetch, normalize, and commit one search.
    ///
    /// Returns `Ok(None)` when the response arrived after a newer search
    /// began; the stale batch is logged and dropped, never committed.
    pub async fn run_search(
        &self,
        source: &dyn ListingSource,
        query: &SearchQuery,
    ) -> Result<Option<ListingBatch>> {
        let generation = self.begin();

        let raws = source.fetch(query).await?;

        if !self.is_current(generation) {
            tracing::debug!(generation, "dropping superseded search result");
            return Ok(None);
        }

        let listings = normalize_batch(&raws);
        tracing::info!(generation, count = listings.len(), "search committed");

        Ok(Some(ListingBatch {
            listings,
            fetched_at: Utc::now(),
            generation,
        }))
    }
}
