//! CSV persistence and output-path derivation for fxharvest.
//!
//! This crate provides the persist side of the pipeline:
//!
//! - [`bar_path`] - deterministic output path for a job's parameters
//! - [`CsvWriter`] - delimited serialization of bar tables
//! - [`BarStore`] - directory creation and overwrite-on-write file output

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod csv;
mod path;
mod store;

pub use csv::CsvWriter;
pub use path::bar_path;
pub use store::{BarStore, StoreError};
