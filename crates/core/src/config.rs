//! Configuration structures for the vehicle-comps system.

use serde::{Deserialize, Serialize};

/// Main configuration for the comps pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Search configuration.
    pub search: SearchConfig,
    /// Data source configuration.
    pub source: SourceConfig,
    /// Default filter thresholds.
    pub filter: FilterConfig,
    /// Histogram configuration.
    pub histogram: HistogramConfig,
    /// Offer derivation configuration.
    pub offer: OfferConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            search: SearchConfig::default(),
            source: SourceConfig::default(),
            filter: FilterConfig::default(),
            histogram: HistogramConfig::default(),
            offer: OfferConfig::default(),
        }
    }
}

/// Search parameters sent to the listing source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// ZIP code to center the search on.
    pub zip: String,
    /// Search radius in miles.
    pub radius_miles: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            zip: "00000".to_string(),
            radius_miles: 100,
        }
    }
}

/// Which data source feeds the pipeline.
///
/// An explicit configuration value, never a global toggle: `Sample` runs
/// the pipeline against a seeded synthetic batch for preview/demo use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceMode {
    /// Fetch from the live pricing provider.
    Live,
    /// Use the built-in synthetic sample batch.
    Sample,
}

/// Data source configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Live vs. sample data.
    pub mode: SourceMode,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            mode: SourceMode::Sample,
        }
    }
}

/// Default filter thresholds, adjustable per search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Maximum days on market.
    pub max_days_on_market: u32,
    /// Maximum odometer miles.
    pub max_miles: u32,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            max_days_on_market: 90,
            max_miles: 150_000,
        }
    }
}

/// Histogram configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistogramConfig {
    /// Number of equal-width price buckets.
    pub bucket_count: usize,
}

impl Default for HistogramConfig {
    fn default() -> Self {
        Self { bucket_count: 10 }
    }
}

/// Offer derivation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OfferConfig {
    /// Target margin below median price, in percent (presentation range
    /// 0-100; the calculator itself accepts any value).
    pub target_margin_percent: f64,
}

impl Default for OfferConfig {
    fn default() -> Self {
        Self {
            target_margin_percent: 10.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.source.mode, SourceMode::Sample);
        assert_eq!(config.histogram.bucket_count, 10);
        assert_eq!(config.offer.target_margin_percent, 10.0);
    }

    #[test]
    fn test_config_round_trips_through_json() {
        let config = Config::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(back.filter.max_miles, config.filter.max_miles);
        assert_eq!(back.source.mode, config.source.mode);
    }
}
