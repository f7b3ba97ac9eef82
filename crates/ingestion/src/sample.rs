//! Built-in synthetic sample batch.
//!
//! A fixed set of raw records shaped like real provider responses, used
//! for preview/demo runs without a live data source. The shapes vary on
//! purpose so every normalizer fallback chain gets exercised.

use comps_core::RawRecord;
use serde_json::json;

/// The fixed synthetic sample batch.
pub fn sample_raw_records() -> Vec<RawRecord> {
    vec![
        json!({
            "id": "S-1001",
            "vin": "1HGCM82633A004352",
            "sellerName": "Lakeside Auto Group",
            "price": 18950,
            "miles": 41200,
            "daysOnMarket": 12,
            "distanceFromPoint": 8.4,
            "city": "Minneapolis",
            "state": "MN",
            "vdpUrl": "https://example.com/listings/S-1001"
        }),
        json!({
            "id": "S-1002",
            "vin": "2FTRX18W1XCA01212",
            "dealerName": "Northtown Ford",
            "listPrice": "$21,400",
            "mileage": "36,750",
            "dom": 34,
            "distance": 15.2,
            "dealer": { "city": "Blaine", "state": "MN" },
            "detailUrl": "https://example.com/listings/S-1002"
        }),
        json!({
            "vin": "3VWFE21C04M000001",
            "seller": { "name": "Private Seller" },
            "currentPrice": 9875.5,
            "odometer": 88300,
            "daysListed": 61,
            "city": "St. Paul",
            "state": "MN",
            "url": "https://example.com/listings/3VWFE21C04M000001"
        }),
        json!({
            "id": "S-1004",
            "sellerName": "Capitol Motors",
            "offerPrice": 17250,
            "miles": 52000,
            "daysOnMarket": 5,
            "distanceFromPoint": 22.9,
            "city": "Madison",
            "state": "WI",
            "vdpUrl": "https://example.com/listings/S-1004"
        }),
        json!({
            "id": "S-1005",
            "vin": "5YJ3E1EA7KF000316",
            "sellerName": "EV Exchange",
            "price": 30400,
            "mileage": 18900,
            "daysOnMarket": 47,
            "distance": 41.0,
            "city": "Chicago",
            "state": "IL",
            "vdpUrl": "https://example.com/listings/S-1005"
        }),
        // No price at all: excluded from stats and histogram, still filterable.
        json!({
            "id": "S-1006",
            "sellerName": "Wholesale Outlet",
            "miles": 120500,
            "daysOnMarket": 90,
            "city": "Duluth",
            "state": "MN"
        }),
        json!({
            "id": "S-1007",
            "vin": "WBA3A5C58DF123456",
            "dealerName": "Autobahn Imports",
            "listPrice": 18950,
            "odometer": 60100,
            "dom": 21,
            "distanceFromPoint": 5.1,
            "dealer": { "city": "Edina", "state": "MN" },
            "detailUrl": "https://example.com/listings/S-1007"
        }),
        json!({
            "id": "S-1008",
            "sellerName": "Bargain Lot",
            "price": "$7,995",
            "miles": 143000,
            "daysOnMarket": 73,
            "distance": 2.7,
            "city": "Richfield",
            "state": "MN",
            "url": "https://example.com/listings/S-1008"
        }),
    ]
}
