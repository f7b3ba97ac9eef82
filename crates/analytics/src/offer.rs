//! Suggested-offer derivation.
//!
//! A pure arithmetic transform of the median comparable price. The margin
//! is caller-validated to a sane presentation range (0-100); nothing here
//! rejects out-of-range values.

use comps_core::{OfferSuggestion, PriceStatistics};

/// `round(median * (1 - margin/100))`, or `None` without statistics.
pub fn suggest_offer(stats: Option<&PriceStatistics>, margin_percent: f64) -> Option<f64> {
    stats.map(|s| (s.median * (1.0 - margin_percent / 100.0)).round())
}

/// [`suggest_offer`] packaged with the margin that produced it.
pub fn offer_suggestion(
    stats: Option<&PriceStatistics>,
    margin_percent: f64,
) -> Option<OfferSuggestion> {
    suggest_offer(stats, margin_percent).map(|suggested_price| OfferSuggestion {
        target_margin_percent: margin_percent,
        suggested_price,
    })
}
