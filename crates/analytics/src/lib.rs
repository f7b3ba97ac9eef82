//! Analytics pipeline for the vehicle-comps system.
//!
//! This crate handles:
//! - Constraint filtering over a working set
//! - Price/mileage descriptive statistics
//! - Equal-width price histogram
//! - Suggested-offer derivation
//! - Stable sorted views
//! - The `CompsEngine` facade combining the components
//!
//! Every component is a synchronous pure function over a borrowed slice;
//! none mutates its input or any process-wide state, so they are safe to
//! call repeatedly and concurrently without coordination.

pub mod engine;
pub mod filter;
pub mod histogram;
pub mod offer;
pub mod sorter;
pub mod statistics;

pub use engine::CompsEngine;
pub use filter::apply_filters;
pub use histogram::{build_histogram, format_currency};
pub use offer::{offer_suggestion, suggest_offer};
pub use sorter::sort_listings;
pub use statistics::{compute_statistics, median};
