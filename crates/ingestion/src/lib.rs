//! Data ingestion and normalization for the vehicle-comps system.
//!
//! This crate handles:
//! - Raw provider record normalization (field fallback chains)
//! - The listing-source abstraction (live vs. sample data)
//! - The built-in synthetic sample batch
//! - Search-generation tracking (stale fetch results are dropped)

pub mod normalizer;
pub mod sample;
pub mod source;

pub use normalizer::{normalize, normalize_batch};
pub use sample::sample_raw_records;
pub use source::{ListingSource, SampleSource, SearchQuery, SearchSession};
