//! Stable sorted views over a working set.

use comps_core::{Listing, SortSpec};
use ordered_float::OrderedFloat;

/// Produce a sorted copy of the listings.
///
/// The comparator treats an absent field as 0. The sort is stable:
/// listings comparing equal on the key keep their relative input order in
/// both directions, since direction flips the three-way comparison and
/// never the tie-break.
pub fn sort_listings(listings: &[Listing], spec: &SortSpec) -> Vec<Listing> {
    let mut sorted = listings.to_vec();
    sorted.sort_by(|a, b| {
        let ordering =
            OrderedFloat(a.sort_value(spec.key)).cmp(&OrderedFloat(b.sort_value(spec.key)));
        spec.direction.apply(ordering)
    });
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use comps_core::{SortDirection, SortKey};

    fn listing(id: &str, price: Option<f64>, distance: Option<f64>) -> Listing {
        Listing {
            id: id.to_string(),
            vin: None,
            seller_name: None,
            price,
            miles: None,
            days_on_market: None,
            distance_miles: distance,
            city: None,
            state: None,
            detail_url: None,
        }
    }

    fn ids(listings: &[Listing]) -> Vec<&str> {
        listings.iter().map(|l| l.id.as_str()).collect()
    }

    #[test]
    fn test_stability_on_ties_ascending() {
        let input = vec![
            listing("1", Some(10.0), None),
            listing("2", Some(10.0), None),
            listing("3", Some(5.0), None),
        ];
        let sorted = sort_listings(
            &input,
            &SortSpec {
                key: SortKey::Price,
                direction: SortDirection::Ascending,
            },
        );
        assert_eq!(ids(&sorted), ["3", "1", "2"]);
    }

    #[test]
    fn test_stability_on_ties_descending() {
        let input = vec![
            listing("1", Some(10.0), None),
            listing("2", Some(10.0), None),
            listing("3", Some(5.0), None),
        ];
        let sorted = sort_listings(
            &input,
            &SortSpec {
                key: SortKey::Price,
                direction: SortDirection::Descending,
            },
        );
        // Ties keep input order even when the direction flips.
        assert_eq!(ids(&sorted), ["1", "2", "3"]);
    }

    #[test]
    fn test_absent_sorts_as_zero() {
        let input = vec![
            listing("a", Some(100.0), None),
            listing("b", None, None),
            listing("c", Some(-5.0), None),
        ];
        let sorted = sort_listings(
            &input,
            &SortSpec {
                key: SortKey::Price,
                direction: SortDirection::Ascending,
            },
        );
        assert_eq!(ids(&sorted), ["c", "b", "a"]);
    }

    #[test]
    fn test_sort_by_distance() {
        let input = vec![
            listing("far", None, Some(41.0)),
            listing("near", None, Some(2.7)),
            listing("mid", None, Some(15.2)),
        ];
        let sorted = sort_listings(
            &input,
            &SortSpec {
                key: SortKey::DistanceMiles,
                direction: SortDirection::Ascending,
            },
        );
        assert_eq!(ids(&sorted), ["near", "mid", "far"]);
    }

    #[test]
    fn test_input_is_untouched() {
        let input = vec![listing("b", Some(2.0), None), listing("a", Some(1.0), None)];
        let _ = sort_listings(
            &input,
            &SortSpec {
                key: SortKey::Price,
                direction: SortDirection::Ascending,
            },
        );
        assert_eq!(ids(&input), ["b", "a"]);
    }
}
