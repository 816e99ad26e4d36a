//! Error types for fxharvest.

use chrono::NaiveDate;
use thiserror::Error;

/// Result type alias for fxharvest operations.
pub type Result<T> = std::result::Result<T, FetchError>;

/// Errors that can occur while running a fetch-and-persist job.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Network or provider-side failure, including per-job timeouts.
    #[error("provider unavailable: {0}")]
    ProviderUnavailable(String),

    /// The provider returned zero rows for the requested range.
    #[error("no data returned for {job}")]
    EmptyResult {
        /// The job that produced no rows.
        job: String,
    },

    /// The output directory or file could not be created or written.
    #[error("filesystem error: {0}")]
    Filesystem(String),

    /// Invalid date range.
    #[error(transparent)]
    DateRange(#[from] DateRangeError),
}

/// Error for invalid date ranges.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateRangeError {
    /// Start date does not strictly precede the end date.
    #[error("invalid date range: {start} >= {end}")]
    InvalidRange {
        /// The start date.
        start: NaiveDate,
        /// The end date.
        end: NaiveDate,
    },
}
