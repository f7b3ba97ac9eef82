//! Run the full pipeline against the built-in sample batch and print a
//! text report: statistics, histogram, suggested offer, and the CSV view.
//!
//! ```sh
//! cargo run -p comps-analytics --example sample_report
//! ```

use anyhow::{anyhow, Result};
use comps_analytics::CompsEngine;
use comps_core::{Config, SortDirection, SortKey, SortSpec};
use comps_export::{ExportSink, MemorySink};
use comps_ingestion::{SampleSource, SearchQuery, SearchSession};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::default();
    let session = SearchSession::new();
    let batch = session
        .run_search(&SampleSource, &SearchQuery::from(&config.search))
        .await?
        .ok_or_else(|| anyhow!("search was superseded"))?;

    let mut engine = CompsEngine::new(&config);
    engine.set_batch(batch);

    println!(
        "{} listings, {} after filters\n",
        engine.working_set().len(),
        engine.filtered().len()
    );

    if let Some(stats) = engine.statistics() {
        println!("price    min {:>10.0}  max {:>10.0}", stats.min, stats.max);
        println!(
            "         mean {:>9.0}  median {:>7.0}",
            stats.mean, stats.median
        );
        if let Some(median_miles) = stats.median_miles {
            println!("miles    median {:>7.0}", median_miles);
        }
        println!();
    }

    for bucket in engine.histogram() {
        println!("{:>10}  {}", bucket.label, "#".repeat(bucket.count));
    }
    println!();

    let mut sink = MemorySink::new();
    if let Some(offer) = engine.offer() {
        println!(
            "suggested offer at {}% margin: {}",
            offer.target_margin_percent,
            comps_analytics::format_currency(offer.suggested_price)
        );
        sink.write_clipboard(&offer.clipboard_text())?;
    }

    let spec = SortSpec {
        key: SortKey::Price,
        direction: SortDirection::Ascending,
    };
    sink.materialize_file("comps.csv", &engine.export_csv(&spec))?;

    let (name, text) = &sink.files[0];
    println!("\n--- {name} ---\n{text}");

    Ok(())
}
