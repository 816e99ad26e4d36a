//! Rust library for downloading historical FX bars into CSV files.
//!
//! This is a facade crate that re-exports functionality from the fxharvest
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```ignore
//! use fxharvest_lib::prelude::*;
//! use chrono::NaiveDate;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = YahooProvider::with_defaults()?;
//!     let store = BarStore::new("./data");
//!     let runner = JobRunner::new(provider, store);
//!
//!     let job = Job::new(
//!         Symbol::new("EURUSD")?,
//!         DateRange::new(
//!             NaiveDate::from_ymd_opt(2025, 4, 29).unwrap(),
//!             NaiveDate::from_ymd_opt(2025, 5, 6).unwrap(),
//!         )?,
//!         Interval::Minute1,
//!     );
//!
//!     let path = runner.run(&job).await?;
//!     println!("written: {}", path.display());
//!     Ok(())
//! }
//! ```

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use fxharvest_types::*;

// Re-export provider integration
#[cfg(feature = "provider")]
pub use fxharvest_provider::{BarProvider, ClientConfig, ProviderError, YahooProvider};

// Re-export persistence
#[cfg(feature = "store")]
pub use fxharvest_store::{BarStore, CsvWriter, StoreError, bar_path};

// Re-export the job runner
#[cfg(feature = "runner")]
pub use fxharvest_runner::{EmptyPolicy, JobOutcome, JobRunner, RunReport, RunnerConfig};

/// Prelude module for convenient imports.
///
/// ```
/// use fxharvest_lib::prelude::*;
/// ```
pub mod prelude {
    pub use fxharvest_types::{
        Bar, DateRange, DateRangeError, FetchError, Interval, Job, Result, Symbol,
    };

    #[cfg(feature = "provider")]
    pub use fxharvest_provider::{BarProvider, ClientConfig, ProviderError, YahooProvider};

    #[cfg(feature = "store")]
    pub use fxharvest_store::{BarStore, CsvWriter};

    #[cfg(feature = "runner")]
    pub use fxharvest_runner::{EmptyPolicy, JobRunner, RunReport, RunnerConfig};
}
