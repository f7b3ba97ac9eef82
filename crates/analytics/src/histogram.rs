//! Equal-width price histogram.
//!
//! Buckets the priced subset of a working set into a fixed number of
//! equal-width ranges between the minimum and maximum price.

use comps_core::{HistogramBucket, Listing};

/// Build an equal-width price histogram.
///
/// Only listings with a defined price participate; each increments exactly
/// one bucket, so the bucket counts sum to the priced-listing count. Bucket
/// `i` covers `[min + i*step, min + (i+1)*step)` with the last bucket
/// closed on the right so `max` lands in it. When all prices are equal the
/// step degenerates to zero and is substituted with 1.
///
/// An empty priced subset (or a zero bucket count) yields an empty vec.
pub fn build_histogram(listings: &[Listing], bucket_count: usize) -> Vec<HistogramBucket> {
    let prices: Vec<f64> = listings.iter().filter_map(|l| l.price).collect();
    if prices.is_empty() || bucket_count == 0 {
        return Vec::new();
    }

    let min = prices.iter().copied().fold(f64::INFINITY, f64::min);
    let max = prices.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    let mut step = (max - min) / bucket_count as f64;
    if step == 0.0 {
        step = 1.0;
    }

    let mut counts = vec![0usize; bucket_count];
    for price in &prices {
        // Indices computed past the end (the max price) clamp to the last
        // bucket, closing it on the right.
        let index = (((price - min) / step).floor() as usize).min(bucket_count - 1);
        counts[index] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| {
            let range_start = min + i as f64 * step;
            HistogramBucket {
                label: format_currency(range_start),
                range_start,
                range_end: min + (i + 1) as f64 * step,
                count,
            }
        })
        .collect()
}

/// Currency-format an amount: `$` plus the rounded value with thousands
/// separators. Used for bucket labels; the numeric bounds stay
/// authoritative for any other presentation.
pub fn format_currency(amount: f64) -> String {
    let rounded = amount.round() as i64;
    // unsigned_abs: the cast saturates to i64::MIN for extreme negative
    // amounts, where a signed abs() would overflow.
    let digits = rounded.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if rounded < 0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn priced(id: &str, price: Option<f64>) -> Listing {
        Listing {
            id: id.to_string(),
            vin: None,
            seller_name: None,
            price,
            miles: None,
            days_on_market: None,
            distance_miles: None,
            city: None,
            state: None,
            detail_url: None,
        }
    }

    fn batch(prices: &[f64]) -> Vec<Listing> {
        prices
            .iter()
            .enumerate()
            .map(|(i, p)| priced(&i.to_string(), Some(*p)))
            .collect()
    }

    #[test]
    fn test_counts_sum_to_priced_listings() {
        let listings = batch(&[100.0, 100.0, 200.0, 300.0, 300.0, 300.0]);
        let buckets = build_histogram(&listings, 3);
        assert_eq!(buckets.len(), 3);
        assert_eq!(buckets.iter().map(|b| b.count).sum::<usize>(), 6);
    }

    #[test]
    fn test_max_lands_in_last_bucket() {
        let listings = batch(&[100.0, 200.0, 300.0]);
        let buckets = build_histogram(&listings, 3);
        // step ~66.67; 300 computes index 3, clamped down to 2.
        assert_eq!(buckets[2].count, 1);
        assert_relative_eq!(buckets[2].range_end, 300.0);
    }

    #[test]
    fn test_all_prices_equal_uses_unit_step() {
        let listings = batch(&[5000.0, 5000.0, 5000.0]);
        let buckets = build_histogram(&listings, 10);
        assert_eq!(buckets.len(), 10);
        assert_eq!(buckets[0].count, 3);
        assert_eq!(buckets.iter().map(|b| b.count).sum::<usize>(), 3);
        assert_relative_eq!(buckets[0].range_end - buckets[0].range_start, 1.0);
    }

    #[test]
    fn test_unpriced_listings_do_not_count() {
        let mut listings = batch(&[100.0, 200.0]);
        listings.push(priced("x", None));
        let buckets = build_histogram(&listings, 2);
        assert_eq!(buckets.iter().map(|b| b.count).sum::<usize>(), 2);
    }

    #[test]
    fn test_empty_input_yields_empty_histogram() {
        assert!(build_histogram(&[], 10).is_empty());
        assert!(build_histogram(&[priced("a", None)], 10).is_empty());
    }

    #[test]
    fn test_buckets_are_contiguous() {
        let listings = batch(&[0.0, 50.0, 100.0]);
        let buckets = build_histogram(&listings, 4);
        for pair in buckets.windows(2) {
            assert_relative_eq!(pair[0].range_end, pair[1].range_start);
        }
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(950.0), "$950");
        assert_eq!(format_currency(18950.4), "$18,950");
        assert_eq!(format_currency(1_234_567.0), "$1,234,567");
        assert_eq!(format_currency(-4200.0), "-$4,200");
        assert_eq!(format_currency(0.0), "$0");
    }

    #[test]
    fn test_format_currency_extreme_amounts_never_panic() {
        // Amounts past i64 range saturate on the cast; the label must
        // still render rather than overflow on negation.
        assert_eq!(
            format_currency(-9.3e18),
            "-$9,223,372,036,854,775,808"
        );
        assert!(format_currency(f64::MAX).starts_with('$'));
        assert!(format_currency(-f64::MAX).starts_with("-$"));
    }
}
