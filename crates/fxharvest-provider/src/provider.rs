//! The provider capability.

use async_trait::async_trait;
use fxharvest_types::{Bar, DateRange, Interval};
use thiserror::Error;

/// A source of historical OHLCV bars.
///
/// The runner depends on this capability rather than on a concrete client,
/// so tests can substitute a stub returning deterministic tables or
/// simulated failures. Authentication, pagination, and rate limiting are
/// the implementation's concern; callers see only a table of bars or an
/// error.
#[async_trait]
pub trait BarProvider: Send + Sync {
    /// Fetches the bars for `query` over `[range.start, range.end)` at the
    /// given interval, in ascending timestamp order.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be
    /// decoded. An empty range is not an error: the result is simply empty.
    async fn fetch_bars(
        &self,
        query: &str,
        range: DateRange,
        interval: Interval,
    ) -> Result<Vec<Bar>, ProviderError>;
}

/// Errors that can occur while fetching bars.
#[derive(Error, Debug)]
pub enum ProviderError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server returned a non-success status.
    #[error("server error: {status}")]
    Status {
        /// HTTP status code.
        status: u16,
    },

    /// The provider rejected the request (unknown symbol, bad range, ...).
    #[error("provider error: {code}: {description}")]
    Api {
        /// Provider error code.
        code: String,
        /// Provider error description.
        description: String,
    },

    /// The response body did not match the expected chart shape.
    #[error("malformed chart response: {0}")]
    Decode(String),
}
