//! Core data types for the vehicle-comps system.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A raw provider record. Shape is provider-defined and varies by source;
/// this system never controls or mutates it.
pub type RawRecord = serde_json::Value;

/// A canonical, provider-agnostic vehicle listing.
///
/// Produced by the normalizer and immutable afterwards. Identity is `id`;
/// no two listings in one working set share an `id`. Numeric fields are
/// `None` when the provider supplied no usable value, so consumers can
/// distinguish "no data" from an actual zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    /// Unique identifier within one normalized batch.
    pub id: String,
    /// Vehicle identification number.
    pub vin: Option<String>,
    /// Seller or dealer display name.
    pub seller_name: Option<String>,
    /// Asking price in whole currency units.
    pub price: Option<f64>,
    /// Odometer reading in miles.
    pub miles: Option<f64>,
    /// Days the listing has been active.
    pub days_on_market: Option<u32>,
    /// Distance from the search point in miles.
    pub distance_miles: Option<f64>,
    /// Seller city.
    pub city: Option<String>,
    /// Seller state.
    pub state: Option<String>,
    /// Link to the listing detail page.
    pub detail_url: Option<String>,
}

impl Listing {
    /// Whether the listing carries a usable price.
    #[inline]
    pub fn has_price(&self) -> bool {
        self.price.is_some()
    }

    /// Value used for ordering on the given key. Absent fields compare as 0.
    #[inline]
    pub fn sort_value(&self, key: SortKey) -> f64 {
        match key {
            SortKey::Price => self.price.unwrap_or(0.0),
            SortKey::Miles => self.miles.unwrap_or(0.0),
            SortKey::DaysOnMarket => self.days_on_market.unwrap_or(0) as f64,
            SortKey::DistanceMiles => self.distance_miles.unwrap_or(0.0),
        }
    }
}

/// A normalized batch of listings, the working set for one pipeline run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingBatch {
    /// Canonical listings in provider order.
    pub listings: Vec<Listing>,
    /// When the raw records were fetched.
    pub fetched_at: DateTime<Utc>,
    /// Search generation that produced this batch.
    pub generation: u64,
}

impl ListingBatch {
    /// Number of listings in the batch.
    #[inline]
    pub fn len(&self) -> usize {
        self.listings.len()
    }

    /// Whether the batch is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }
}

/// Numeric threshold constraints applied to a working set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterConstraints {
    /// Maximum days on market; absent DOM counts as 0.
    pub max_days_on_market: u32,
    /// Maximum odometer miles; absent miles count as 0.
    pub max_miles: u32,
}

impl FilterConstraints {
    /// Whether a listing satisfies both thresholds.
    #[inline]
    pub fn passes(&self, listing: &Listing) -> bool {
        listing.days_on_market.unwrap_or(0) <= self.max_days_on_market
            && listing.miles.unwrap_or(0.0) <= self.max_miles as f64
    }
}

/// Sortable listing field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    Price,
    Miles,
    DaysOnMarket,
    DistanceMiles,
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// Apply the direction to an ascending three-way comparison.
    ///
    /// Flips the sign only; tie-break behavior is unaffected.
    #[inline]
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

/// A complete sort specification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    /// Field to order by.
    pub key: SortKey,
    /// Ordering direction.
    pub direction: SortDirection,
}

/// Descriptive statistics over the priced subset of a working set.
///
/// The whole value is absent (the computing function returns `None`) when no
/// listing has a defined price; `median_miles` alone is `None` when no
/// listing has defined miles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceStatistics {
    /// Minimum price.
    pub min: f64,
    /// Maximum price.
    pub max: f64,
    /// Arithmetic mean price.
    pub mean: f64,
    /// Median price.
    pub median: f64,
    /// Median odometer miles, over listings with defined miles.
    pub median_miles: Option<f64>,
}

/// One equal-width price bucket.
///
/// Buckets are half-open `[range_start, range_end)`; the last bucket is
/// closed on the right so the maximum price lands in it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistogramBucket {
    /// Currency-formatted lower bound, for display.
    pub label: String,
    /// Inclusive lower bound.
    pub range_start: f64,
    /// Exclusive upper bound (inclusive for the last bucket).
    pub range_end: f64,
    /// Number of priced listings in the bucket.
    pub count: usize,
}

/// A suggested purchase offer derived from the median comparable price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OfferSuggestion {
    /// Desired discount below median, in percent.
    pub target_margin_percent: f64,
    /// `round(median * (1 - margin / 100))`.
    pub suggested_price: f64,
}

impl OfferSuggestion {
    /// Decimal string form of the suggested price, as handed to the
    /// clipboard collaborator.
    pub fn clipboard_text(&self) -> String {
        format!("{}", self.suggested_price)
    }
}
