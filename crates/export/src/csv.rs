//! CSV serialization with JSON-escaped cells.
//!
//! The header row is the key sequence of the first row, in insertion
//! order; every subsequent row serializes against that same key sequence
//! regardless of its own keys. Each cell renders through JSON string
//! quoting, so embedded commas, quotes, and newlines survive a conforming
//! reader and the original value is recoverable per row.

use comps_core::Listing;
use serde_json::Value;

/// One export row: keys in insertion order.
pub type Row = serde_json::Map<String, Value>;

/// Render one cell.
///
/// Missing keys and JSON nulls both render as a quoted empty string.
/// Strings render JSON-quoted and escaped; numbers and booleans render
/// bare. Composite values are re-quoted as their compact JSON text so no
/// unescaped comma can leak into the line.
fn encode_cell(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => "\"\"".to_string(),
        Some(v @ Value::String(_)) => v.to_string(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(composite) => Value::String(composite.to_string()).to_string(),
    }
}

/// Serialize rows to CSV text.
///
/// The empty input is a defined no-op yielding the empty string. No
/// trailing newline is emitted.
pub fn to_csv(rows: &[Row]) -> String {
    let Some(first) = rows.first() else {
        return String::new();
    };

    let headers: Vec<&String> = first.keys().collect();

    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(
        headers
            .iter()
            .map(|h| Value::String((*h).clone()).to_string())
            .collect::<Vec<_>>()
            .join(","),
    );

    for row in rows {
        lines.push(
            headers
                .iter()
                .map(|h| encode_cell(row.get(h.as_str())))
                .collect::<Vec<_>>()
                .join(","),
        );
    }

    lines.join("\n")
}

/// Map listings into export rows with a fixed key order.
pub fn listing_rows(listings: &[Listing]) -> Vec<Row> {
    listings
        .iter()
        .map(|l| {
            let mut row = Row::new();
            row.insert("id".to_string(), Value::String(l.id.clone()));
            row.insert("vin".to_string(), opt_string(&l.vin));
            row.insert("seller".to_string(), opt_string(&l.seller_name));
            row.insert("price".to_string(), opt_number(l.price));
            row.insert("miles".to_string(), opt_number(l.miles));
            row.insert(
                "days_on_market".to_string(),
                l.days_on_market.map(|d| d.into()).unwrap_or(Value::Null),
            );
            row.insert("distance_miles".to_string(), opt_number(l.distance_miles));
            row.insert("city".to_string(), opt_string(&l.city));
            row.insert("state".to_string(), opt_string(&l.state));
            row.insert("url".to_string(), opt_string(&l.detail_url));
            row
        })
        .collect()
}

fn opt_string(value: &Option<String>) -> Value {
    value
        .as_ref()
        .map(|s| Value::String(s.clone()))
        .unwrap_or(Value::Null)
}

fn opt_number(value: Option<f64>) -> Value {
    match value {
        // Whole amounts render bare, the way providers send them.
        Some(n) if n.fract() == 0.0 && n.abs() < i64::MAX as f64 => {
            Value::Number(serde_json::Number::from(n as i64))
        }
        Some(n) => serde_json::Number::from_f64(n)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        None => Value::Null,
    }
}
