//! Comps computation engine.
//!
//! Combines the pipeline components behind a single interface over one
//! working set. Every derived value is recomputed on demand from the
//! current inputs; memoization, if wanted, is a caller-side optimization.

use comps_core::{
    Config, FilterConstraints, HistogramBucket, Listing, ListingBatch, OfferSuggestion,
    PriceStatistics, SortSpec,
};
use comps_export::{listing_rows, to_csv, Row};

use crate::{
    filter::apply_filters, histogram::build_histogram, offer::offer_suggestion,
    sorter::sort_listings, statistics::compute_statistics,
};

/// Comps computation engine.
///
/// Owns the current working set plus the adjustable analysis inputs
/// (filter thresholds, target margin, bucket count). The batch is replaced
/// wholesale after each committed search and never partially updated.
pub struct CompsEngine {
    /// Current working set, if a search has committed.
    batch: Option<ListingBatch>,
    /// Active filter thresholds.
    constraints: FilterConstraints,
    /// Target margin below median, in percent.
    margin_percent: f64,
    /// Histogram bucket count.
    bucket_count: usize,
}

impl CompsEngine {
    /// Create a new engine from configuration defaults.
    pub fn new(config: &Config) -> Self {
        Self {
            batch: None,
            constraints: FilterConstraints {
                max_days_on_market: config.filter.max_days_on_market,
                max_miles: config.filter.max_miles,
            },
            margin_percent: config.offer.target_margin_percent,
            bucket_count: config.histogram.bucket_count,
        }
    }

    /// Replace the working set with a freshly committed batch.
    pub fn set_batch(&mut self, batch: ListingBatch) {
        tracing::debug!(
            generation = batch.generation,
            count = batch.len(),
            "working set replaced"
        );
        self.batch = Some(batch);
    }

    /// Drop the working set.
    pub fn clear(&mut self) {
        self.batch = None;
    }

    /// Update the filter thresholds.
    pub fn set_constraints(&mut self, constraints: FilterConstraints) {
        self.constraints = constraints;
    }

    /// Update the target margin.
    pub fn set_margin(&mut self, margin_percent: f64) {
        self.margin_percent = margin_percent;
    }

    /// The unfiltered working set.
    pub fn working_set(&self) -> &[Listing] {
        self.batch.as_ref().map(|b| b.listings.as_slice()).unwrap_or(&[])
    }

    /// Active filter thresholds.
    pub fn constraints(&self) -> FilterConstraints {
        self.constraints
    }

    /// The filtered working set.
    pub fn filtered(&self) -> Vec<Listing> {
        apply_filters(self.working_set(), &self.constraints)
    }

    /// Price/mileage statistics over the filtered set.
    pub fn statistics(&self) -> Option<PriceStatistics> {
        compute_statistics(&self.filtered())
    }

    /// Price histogram over the filtered set.
    pub fn histogram(&self) -> Vec<HistogramBucket> {
        build_histogram(&self.filtered(), self.bucket_count)
    }

    /// Suggested offer from the current statistics and margin.
    pub fn offer(&self) -> Option<OfferSuggestion> {
        offer_suggestion(self.statistics().as_ref(), self.margin_percent)
    }

    /// Stably sorted view of the filtered set.
    pub fn sorted_view(&self, spec: &SortSpec) -> Vec<Listing> {
        sort_listings(&self.filtered(), spec)
    }

    /// Export rows for the sorted view.
    pub fn export_rows(&self, spec: &SortSpec) -> Vec<Row> {
        listing_rows(&self.sorted_view(spec))
    }

    /// CSV text for the sorted view.
    pub fn export_csv(&self, spec: &SortSpec) -> String {
        to_csv(&self.export_rows(spec))
    }
}
