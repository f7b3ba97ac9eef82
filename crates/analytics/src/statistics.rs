//! Descriptive statistics over a working set.
//!
//! Price statistics use only listings with a defined price; the mileage
//! median uses only those with defined miles. Absent data is excluded,
//! never coerced to zero, so a batch full of price-less listings yields no
//! statistics rather than misleading zeros.

use comps_core::{Listing, PriceStatistics};

/// Textbook median over a copy of the values.
///
/// The input is never reordered: a copy is sorted ascending, then the
/// middle element is taken for an odd count and the arithmetic mean of the
/// two central elements for an even count. Empty input has no median.
pub fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        Some(sorted[mid])
    } else {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    }
}

/// Compute price and mileage statistics for a (typically filtered) set.
///
/// Returns `None` when no listing has a defined price. `median_miles` is
/// `None` when no listing has defined miles, independently of the price
/// subset.
pub fn compute_statistics(listings: &[Listing]) -> Option<PriceStatistics> {
    let prices: Vec<f64> = listings.iter().filter_map(|l| l.price).collect();
    let median_price = median(&prices)?;

    let min = prices.iter().copied().fold(f64::INFINITY, f64::min);
    let max = prices.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let mean = prices.iter().sum::<f64>() / prices.len() as f64;

    let miles: Vec<f64> = listings.iter().filter_map(|l| l.miles).collect();

    Some(PriceStatistics {
        min,
        max,
        mean,
        median: median_price,
        median_miles: median(&miles),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn priced(id: &str, price: Option<f64>, miles: Option<f64>) -> Listing {
        Listing {
            id: id.to_string(),
            vin: None,
            seller_name: None,
            price,
            miles,
            days_on_market: None,
            distance_miles: None,
            city: None,
            state: None,
            detail_url: None,
        }
    }

    #[test]
    fn test_median_odd_count() {
        assert_eq!(median(&[10.0, 20.0, 30.0]), Some(20.0));
        assert_eq!(median(&[30.0, 10.0, 20.0]), Some(20.0));
    }

    #[test]
    fn test_median_even_count() {
        assert_eq!(median(&[10.0, 20.0, 30.0, 40.0]), Some(25.0));
    }

    #[test]
    fn test_median_empty_and_single() {
        assert_eq!(median(&[]), None);
        assert_eq!(median(&[42.0]), Some(42.0));
    }

    #[test]
    fn test_median_does_not_reorder_input() {
        let values = vec![30.0, 10.0, 20.0];
        let _ = median(&values);
        assert_eq!(values, [30.0, 10.0, 20.0]);
    }

    #[test]
    fn test_statistics_basic() {
        let listings = vec![
            priced("a", Some(10_000.0), Some(40_000.0)),
            priced("b", Some(20_000.0), Some(60_000.0)),
            priced("c", Some(18_000.0), Some(50_000.0)),
        ];
        let stats = compute_statistics(&listings).unwrap();
        assert_eq!(stats.min, 10_000.0);
        assert_eq!(stats.max, 20_000.0);
        assert_relative_eq!(stats.mean, 16_000.0);
        assert_eq!(stats.median, 18_000.0);
        assert_eq!(stats.median_miles, Some(50_000.0));
    }

    #[test]
    fn test_unpriced_listings_are_excluded() {
        let listings = vec![
            priced("a", Some(10_000.0), None),
            priced("b", None, Some(80_000.0)),
            priced("c", Some(30_000.0), None),
        ];
        let stats = compute_statistics(&listings).unwrap();
        // Price stats over {10000, 30000} only.
        assert_eq!(stats.median, 20_000.0);
        // Miles median over the one listing with miles, priced or not.
        assert_eq!(stats.median_miles, Some(80_000.0));
    }

    #[test]
    fn test_no_prices_means_no_statistics() {
        let listings = vec![priced("a", None, Some(50_000.0))];
        assert_eq!(compute_statistics(&listings), None);
        assert_eq!(compute_statistics(&[]), None);
    }

    #[test]
    fn test_no_miles_means_no_miles_median() {
        let listings = vec![priced("a", Some(9_000.0), None)];
        let stats = compute_statistics(&listings).unwrap();
        assert_eq!(stats.median_miles, None);
    }
}
