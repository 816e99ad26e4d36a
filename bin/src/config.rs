//! Batch configuration for the fxharvest CLI.
//!
//! A run's pair list, date-range batches, and interval are ordinary
//! configuration data: a TOML file with named presets, selectable with
//! `--preset`. Loading and parsing happens here, outside the core crates.
//!
//! ```toml
//! pairs = ["AUDUSD", "EURUSD"]
//!
//! [presets.weekly-1m]
//! interval = "1m"
//! ranges = [
//!     { start = "2025-04-22", end = "2025-04-29" },
//!     { start = "2025-04-29", end = "2025-05-06" },
//! ]
//! ```

use anyhow::{Context, Result};
use chrono::NaiveDate;
use fxharvest_lib::prelude::*;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

/// Pairs used when neither a config file nor --pairs is given.
const DEFAULT_PAIRS: &[&str] = &["AUDUSD", "CADUSD", "EURUSD", "GBPUSD", "JPYUSD", "SEKUSD"];

/// A batch configuration file.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub(crate) struct BatchConfig {
    /// Pairs a run fetches.
    #[serde(default)]
    pub(crate) pairs: Vec<Symbol>,

    /// Named job-batch presets.
    #[serde(default)]
    pub(crate) presets: BTreeMap<String, Preset>,
}

/// One selectable batch: an interval and its date ranges.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct Preset {
    /// Sampling interval for every range in the preset.
    pub(crate) interval: Interval,

    /// Date-range batches, each fetched as one job per pair.
    pub(crate) ranges: Vec<RangeSpec>,
}

/// A date range as written in the file.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct RangeSpec {
    /// Start date (inclusive).
    pub(crate) start: NaiveDate,
    /// End date (exclusive).
    pub(crate) end: NaiveDate,
}

impl BatchConfig {
    /// Loads a configuration file.
    pub(crate) fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }
}

impl Preset {
    /// Validates the preset's ranges.
    pub(crate) fn date_ranges(&self) -> Result<Vec<DateRange>> {
        self.ranges
            .iter()
            .map(|spec| {
                DateRange::new(spec.start, spec.end)
                    .with_context(|| format!("Invalid range {} to {}", spec.start, spec.end))
            })
            .collect()
    }
}

/// Returns the built-in default pair list.
pub(crate) fn default_pairs() -> Vec<Symbol> {
    DEFAULT_PAIRS
        .iter()
        .map(|p| Symbol::new(p).expect("default pairs are valid"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
pairs = ["audusd", "EURUSD"]

[presets.weekly-1m]
interval = "1m"
ranges = [
    { start = "2025-04-22", end = "2025-04-29" },
    { start = "2025-04-29", end = "2025-05-06" },
]

[presets.winter-5m]
interval = "5m"
ranges = [{ start = "2024-12-02", end = "2025-01-28" }]
"#;

    #[test]
    fn test_parse_sample_config() {
        let config: BatchConfig = toml::from_str(SAMPLE).unwrap();

        assert_eq!(config.pairs.len(), 2);
        assert_eq!(config.pairs[0].as_str(), "AUDUSD");
        assert_eq!(config.presets.len(), 2);

        let weekly = &config.presets["weekly-1m"];
        assert_eq!(weekly.interval, Interval::Minute1);
        assert_eq!(weekly.date_ranges().unwrap().len(), 2);

        let winter = &config.presets["winter-5m"];
        assert_eq!(winter.interval, Interval::Minute5);
    }

    #[test]
    fn test_parse_rejects_unknown_keys() {
        let result: std::result::Result<BatchConfig, _> = toml::from_str("intervals = []");
        assert!(result.is_err());
    }

    #[test]
    fn test_reversed_range_rejected_at_validation() {
        let config: BatchConfig = toml::from_str(
            r#"
[presets.bad]
interval = "1d"
ranges = [{ start = "2025-05-06", end = "2025-04-29" }]
"#,
        )
        .unwrap();

        assert!(config.presets["bad"].date_ranges().is_err());
    }

    #[test]
    fn test_default_pairs_are_valid() {
        let pairs = default_pairs();
        assert_eq!(pairs.len(), 6);
        assert!(pairs.iter().any(|p| p.as_str() == "EURUSD"));
    }

    #[test]
    fn test_load_missing_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        assert!(BatchConfig::load(&dir.path().join("absent.toml")).is_err());
    }
}
