//! Chart endpoint URL construction.

use fxharvest_types::{DateRange, Interval};

/// Base URL for the Yahoo Finance chart endpoint.
pub const BASE_URL: &str = "https://query1.finance.yahoo.com/v8/finance/chart";

/// Builds the chart URL for a query symbol.
///
/// # Example
///
/// ```
/// use fxharvest_provider::url::chart_url;
///
/// assert_eq!(
///     chart_url("EURUSD=X"),
///     "https://query1.finance.yahoo.com/v8/finance/chart/EURUSD=X"
/// );
/// ```
#[must_use]
pub fn chart_url(query_symbol: &str) -> String {
    format!("{BASE_URL}/{query_symbol}")
}

/// Builds the chart query parameters for a range and interval.
///
/// `period1`/`period2` are Unix seconds at midnight UTC of the start and end
/// dates, so the fetched window is `[start, end)` for intraday data.
#[must_use]
pub fn chart_params(range: DateRange, interval: Interval) -> [(&'static str, String); 4] {
    [
        ("period1", range.start_utc().timestamp().to_string()),
        ("period2", range.end_utc().timestamp().to_string()),
        ("interval", interval.as_str().to_string()),
        ("events", "history".to_string()),
    ]
}
