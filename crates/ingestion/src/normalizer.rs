//! Raw record normalization.
//!
//! Maps heterogeneous provider records into canonical [`Listing`] values.
//! Each canonical field resolves through an ordered fallback chain of
//! plausible provider field names, taking the first defined value. The
//! chains are part of the contract:
//!
//! - `id`: `id` -> `vin` -> positional index
//! - `vin`: `vin`
//! - `seller_name`: `sellerName` -> `dealerName` -> `seller.name`
//! - `price`: `price` -> `listPrice` -> `currentPrice` -> `offerPrice`
//! - `miles`: `miles` -> `mileage` -> `odometer`
//! - `days_on_market`: `daysOnMarket` -> `dom` -> `daysListed`
//! - `distance_miles`: `distanceFromPoint` -> `distance`
//! - `city`: `city` -> `dealer.city`
//! - `state`: `state` -> `dealer.state`
//! - `detail_url`: `vdpUrl` -> `detailUrl` -> `url`
//!
//! Missing or malformed numeric fields resolve to absent, never zero and
//! never `NaN`. The raw input is never mutated.

use comps_core::{Listing, RawRecord};
use serde_json::Value;

const SELLER_FIELDS: &[&str] = &["sellerName", "dealerName", "seller.name"];
const PRICE_FIELDS: &[&str] = &["price", "listPrice", "currentPrice", "offerPrice"];
const MILES_FIELDS: &[&str] = &["miles", "mileage", "odometer"];
const DOM_FIELDS: &[&str] = &["daysOnMarket", "dom", "daysListed"];
const DISTANCE_FIELDS: &[&str] = &["distanceFromPoint", "distance"];
const CITY_FIELDS: &[&str] = &["city", "dealer.city"];
const STATE_FIELDS: &[&str] = &["state", "dealer.state"];
const URL_FIELDS: &[&str] = &["vdpUrl", "detailUrl", "url"];

/// Resolve a field path like `seller.name` against a raw record.
fn lookup<'a>(raw: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = raw;
    for segment in path.split('.') {
        current = current.get(segment)?;
    }
    if current.is_null() {
        None
    } else {
        Some(current)
    }
}

/// First defined value along a fallback chain.
fn first_defined<'a>(raw: &'a Value, paths: &[&str]) -> Option<&'a Value> {
    paths.iter().find_map(|path| lookup(raw, path))
}

/// Coerce a JSON value to a finite f64.
///
/// Accepts numbers and numeric strings; a leading `$` and thousands commas
/// are stripped. Anything else, including non-finite parses, is absent.
fn coerce_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64().filter(|f| f.is_finite()),
        Value::String(s) => {
            let cleaned = s.trim().trim_start_matches('$').replace(',', "");
            cleaned.parse::<f64>().ok().filter(|f| f.is_finite())
        }
        _ => None,
    }
}

/// Coerce a JSON value to a non-negative integer count.
fn coerce_count(value: &Value) -> Option<u32> {
    coerce_number(value)
        .filter(|n| *n >= 0.0)
        .map(|n| n as u32)
}

/// Coerce a JSON value to a non-empty string.
fn coerce_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        // Providers occasionally send numeric identifiers.
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn string_field(raw: &Value, paths: &[&str]) -> Option<String> {
    first_defined(raw, paths).and_then(coerce_string)
}

fn number_field(raw: &Value, paths: &[&str]) -> Option<f64> {
    first_defined(raw, paths).and_then(coerce_number)
}

/// Normalize one raw provider record into a canonical [`Listing`].
///
/// `index` is the record's position within its batch and serves as the
/// identifier of last resort, so `id` uniqueness holds within a single
/// normalization pass over one batch. Independent batches may collide on
/// positional ids; callers must not mix batches without re-indexing.
pub fn normalize(raw: &RawRecord, index: usize) -> Listing {
    let vin = string_field(raw, &["vin"]);

    let id = string_field(raw, &["id"])
        .or_else(|| vin.clone())
        .unwrap_or_else(|| index.to_string());

    Listing {
        id,
        vin,
        seller_name: string_field(raw, SELLER_FIELDS),
        price: number_field(raw, PRICE_FIELDS),
        miles: number_field(raw, MILES_FIELDS),
        days_on_market: first_defined(raw, DOM_FIELDS).and_then(coerce_count),
        distance_miles: number_field(raw, DISTANCE_FIELDS),
        city: string_field(raw, CITY_FIELDS),
        state: string_field(raw, STATE_FIELDS),
        detail_url: string_field(raw, URL_FIELDS),
    }
}

/// Normalize a whole batch, indexing records by position.
pub fn normalize_batch(raws: &[RawRecord]) -> Vec<Listing> {
    let listings: Vec<Listing> = raws
        .iter()
        .enumerate()
        .map(|(index, raw)| normalize(raw, index))
        .collect();

    let priced = listings.iter().filter(|l| l.has_price()).count();
    tracing::debug!(
        total = listings.len(),
        priced,
        "normalized raw listing batch"
    );

    listings
}
