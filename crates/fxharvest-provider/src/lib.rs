//! Market-data provider integration for fxharvest.
//!
//! This crate provides the fetch side of the pipeline:
//!
//! - [`BarProvider`] - the injectable provider capability
//! - [`ClientConfig`] - HTTP client configuration
//! - [`YahooProvider`] - provider backed by the Yahoo Finance chart endpoint
//! - [`url::chart_url`] - chart endpoint URL construction

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod client;
mod provider;
pub mod url;
mod yahoo;

pub use client::ClientConfig;
pub use provider::{BarProvider, ProviderError};
pub use yahoo::YahooProvider;
