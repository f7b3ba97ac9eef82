//! Constraint filtering over a working set.
//!
//! Filtering is pure and total: any pair of non-negative thresholds is a
//! legal constraint, so there is no validation error path. Listings that
//! pass keep their relative order.

use comps_core::{FilterConstraints, Listing};

/// Produce the sub-sequence of listings that satisfy the constraints.
///
/// A listing's absent `days_on_market` or `miles` counts as 0, so listings
/// without that data always pass the corresponding threshold. Idempotent:
/// re-filtering an already-filtered set with the same constraints yields
/// an identical set.
pub fn apply_filters(listings: &[Listing], constraints: &FilterConstraints) -> Vec<Listing> {
    listings
        .iter()
        .filter(|l| constraints.passes(l))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(id: &str, miles: Option<f64>, dom: Option<u32>) -> Listing {
        Listing {
            id: id.to_string(),
            vin: None,
            seller_name: None,
            price: None,
            miles,
            days_on_market: dom,
            distance_miles: None,
            city: None,
            state: None,
            detail_url: None,
        }
    }

    fn ids(listings: &[Listing]) -> Vec<&str> {
        listings.iter().map(|l| l.id.as_str()).collect()
    }

    #[test]
    fn test_filter_preserves_order() {
        let input = vec![
            listing("a", Some(10_000.0), Some(5)),
            listing("b", Some(90_000.0), Some(5)),
            listing("c", Some(20_000.0), Some(50)),
            listing("d", None, None),
        ];
        let constraints = FilterConstraints {
            max_days_on_market: 30,
            max_miles: 50_000,
        };
        let filtered = apply_filters(&input, &constraints);
        assert_eq!(ids(&filtered), ["a", "d"]);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let input = vec![
            listing("a", Some(10_000.0), Some(5)),
            listing("b", Some(90_000.0), Some(95)),
            listing("c", Some(49_999.0), Some(29)),
        ];
        let constraints = FilterConstraints {
            max_days_on_market: 30,
            max_miles: 50_000,
        };
        let once = apply_filters(&input, &constraints);
        let twice = apply_filters(&once, &constraints);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_empty_input_is_fine() {
        let constraints = FilterConstraints {
            max_days_on_market: 30,
            max_miles: 50_000,
        };
        assert!(apply_filters(&[], &constraints).is_empty());
    }
}
