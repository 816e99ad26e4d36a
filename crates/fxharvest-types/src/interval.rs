//! Bar sampling interval definitions.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Sampling granularity of returned bars.
///
/// The tokens match what the provider's chart endpoint accepts, so
/// [`Interval::as_str`] can be passed straight through as a query parameter
/// and used verbatim in output file names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Interval {
    /// 1-minute bars.
    #[default]
    #[serde(rename = "1m")]
    Minute1,
    /// 2-minute bars.
    #[serde(rename = "2m")]
    Minute2,
    /// 5-minute bars.
    #[serde(rename = "5m")]
    Minute5,
    /// 15-minute bars.
    #[serde(rename = "15m")]
    Minute15,
    /// 30-minute bars.
    #[serde(rename = "30m")]
    Minute30,
    /// 1-hour bars.
    #[serde(rename = "1h")]
    Hour1,
    /// Daily bars.
    #[serde(rename = "1d")]
    Day1,
    /// Weekly bars.
    #[serde(rename = "1wk")]
    Week1,
    /// Monthly bars.
    #[serde(rename = "1mo")]
    Month1,
}

impl Interval {
    /// Returns the nominal bar duration in seconds.
    #[must_use]
    pub const fn seconds(&self) -> u64 {
        match self {
            Self::Minute1 => 60,
            Self::Minute2 => 120,
            Self::Minute5 => 300,
            Self::Minute15 => 900,
            Self::Minute30 => 1800,
            Self::Hour1 => 3600,
            Self::Day1 => 86400,
            Self::Week1 => 604_800,
            Self::Month1 => 2_592_000,
        }
    }

    /// Returns true for sub-daily sampling.
    ///
    /// The provider caps how far back intraday history reaches, so callers
    /// may want to warn on wide intraday ranges.
    #[must_use]
    pub const fn is_intraday(&self) -> bool {
        self.seconds() < 86400
    }

    /// Returns the interval as the provider token.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Minute1 => "1m",
            Self::Minute2 => "2m",
            Self::Minute5 => "5m",
            Self::Minute15 => "15m",
            Self::Minute30 => "30m",
            Self::Hour1 => "1h",
            Self::Day1 => "1d",
            Self::Week1 => "1wk",
            Self::Month1 => "1mo",
        }
    }

    /// Returns all supported intervals.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Minute1,
            Self::Minute2,
            Self::Minute5,
            Self::Minute15,
            Self::Minute30,
            Self::Hour1,
            Self::Day1,
            Self::Week1,
            Self::Month1,
        ]
    }
}

impl std::fmt::Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Interval {
    type Err = IntervalParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "1m" | "m1" | "minute" => Ok(Self::Minute1),
            "2m" | "m2" => Ok(Self::Minute2),
            "5m" | "m5" => Ok(Self::Minute5),
            "15m" | "m15" => Ok(Self::Minute15),
            "30m" | "m30" => Ok(Self::Minute30),
            "1h" | "h1" | "60m" | "hour" => Ok(Self::Hour1),
            "1d" | "d1" | "day" | "daily" => Ok(Self::Day1),
            "1wk" | "1w" | "week" | "weekly" => Ok(Self::Week1),
            "1mo" | "month" | "monthly" => Ok(Self::Month1),
            _ => Err(IntervalParseError(s.to_string())),
        }
    }
}

/// Error returned when parsing an invalid interval string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntervalParseError(String);

impl std::fmt::Display for IntervalParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid interval '{}', expected one of: 1m, 2m, 5m, 15m, 30m, 1h, 1d, 1wk, 1mo",
            self.0
        )
    }
}

impl std::error::Error for IntervalParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_seconds() {
        assert_eq!(Interval::Minute1.seconds(), 60);
        assert_eq!(Interval::Hour1.seconds(), 3600);
        assert_eq!(Interval::Day1.seconds(), 86400);
    }

    #[test]
    fn test_interval_is_intraday() {
        assert!(Interval::Minute5.is_intraday());
        assert!(!Interval::Day1.is_intraday());
        assert!(!Interval::Month1.is_intraday());
    }

    #[test]
    fn test_interval_parse() {
        assert_eq!("1m".parse::<Interval>().unwrap(), Interval::Minute1);
        assert_eq!("5M".parse::<Interval>().unwrap(), Interval::Minute5);
        assert_eq!("60m".parse::<Interval>().unwrap(), Interval::Hour1);
        assert_eq!("1wk".parse::<Interval>().unwrap(), Interval::Week1);
        assert!("invalid".parse::<Interval>().is_err());
    }

    #[test]
    fn test_interval_token_round_trip() {
        for interval in Interval::all() {
            assert_eq!(
                interval.as_str().parse::<Interval>().unwrap(),
                *interval,
                "token {} must parse back",
                interval
            );
        }
    }
}
