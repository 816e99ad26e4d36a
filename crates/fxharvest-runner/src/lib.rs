//! Fetch-and-persist job runner for fxharvest.
//!
//! This crate provides the core of the tool:
//!
//! - [`JobRunner`] - runs one job (fetch, derive path, write) or a batch
//! - [`RunnerConfig`] / [`EmptyPolicy`] - per-job timeout and empty-result
//!   handling
//! - [`RunReport`] / [`JobOutcome`] - per-run accounting of independent
//!   job results

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod report;
mod runner;

pub use report::{JobOutcome, RunReport};
pub use runner::{EmptyPolicy, JobRunner, RunnerConfig};
