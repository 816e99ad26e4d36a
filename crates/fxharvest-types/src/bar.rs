//! OHLCV bar representation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single OHLCV bar as delivered by the provider.
///
/// Bars are treated as opaque records: fields are carried through to the
/// output without validation or transformation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    /// Bar open time (UTC).
    pub timestamp: DateTime<Utc>,
    /// Opening price.
    pub open: f64,
    /// Highest price during the period.
    pub high: f64,
    /// Lowest price during the period.
    pub low: f64,
    /// Closing price.
    pub close: f64,
    /// Dividend/split adjusted closing price.
    pub adj_close: f64,
    /// Traded volume.
    pub volume: f64,
}

impl Bar {
    /// Creates a new bar.
    #[must_use]
    pub const fn new(
        timestamp: DateTime<Utc>,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        adj_close: f64,
        volume: f64,
    ) -> Self {
        Self {
            timestamp,
            open,
            high,
            low,
            close,
            adj_close,
            volume,
        }
    }

    /// Returns the price range (high - low).
    #[must_use]
    pub fn range(&self) -> f64 {
        self.high - self.low
    }

    /// Returns true if this is a bullish (close above open) bar.
    #[must_use]
    pub fn is_bullish(&self) -> bool {
        self.close > self.open
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn create_test_bar() -> Bar {
        let timestamp = Utc.with_ymd_and_hms(2025, 4, 29, 12, 0, 0).unwrap();
        Bar::new(timestamp, 1.1000, 1.1050, 1.0980, 1.1020, 1.1020, 1000.0)
    }

    #[test]
    fn test_range() {
        let bar = create_test_bar();
        assert!((bar.range() - 0.0070).abs() < 1e-10);
    }

    #[test]
    fn test_bullish() {
        let bar = create_test_bar();
        assert!(bar.is_bullish());
    }
}
