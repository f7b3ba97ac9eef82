//! Export surfaces for the vehicle-comps system.
//!
//! This crate handles:
//! - CSV serialization with JSON-escaped cells
//! - Mapping listings into export rows
//! - The narrow file/clipboard output capabilities (injected, never
//!   invoked by the analytics components themselves)

pub mod csv;
pub mod sink;

pub use csv::{listing_rows, to_csv, Row};
pub use sink::{ExportSink, MemorySink};
