//! Core types for the fxharvest FX bar downloader.
//!
//! This crate provides the fundamental data structures used throughout
//! fxharvest:
//!
//! - [`Symbol`] - A validated instrument ticker (e.g. `EURUSD`)
//! - [`Interval`] - Sampling granularity of returned bars
//! - [`DateRange`] - Half-open date range for data retrieval
//! - [`Bar`] - A single OHLCV record as delivered by the provider
//! - [`Job`] - One unit of work: (symbol, date range, interval)

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod bar;
mod date_range;
mod error;
mod interval;
mod job;
mod symbol;

pub use bar::Bar;
pub use date_range::DateRange;
pub use error::{DateRangeError, FetchError, Result};
pub use interval::{Interval, IntervalParseError};
pub use job::Job;
pub use symbol::{Symbol, SymbolError};
