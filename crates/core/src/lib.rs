//! Core types and configuration for the vehicle-comps system.
//!
//! This crate provides shared types used across all other crates:
//! - Canonical listing types and pipeline value types (stats, buckets, offers)
//! - Configuration structures
//! - Common error types

pub mod config;
pub mod error;
pub mod types;

pub use config::Config;
pub use error::{Error, Result};
pub use types::*;
