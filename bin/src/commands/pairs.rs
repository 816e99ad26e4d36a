//! Pairs listing command implementation.

use crate::config::{BatchConfig, default_pairs};
use anyhow::Result;
use std::path::Path;

/// List the pairs a run would use, with their provider query symbols.
pub(crate) fn list_pairs(config_path: Option<&Path>) -> Result<()> {
    let pairs = match config_path {
        Some(path) => {
            let config = BatchConfig::load(path)?;
            if config.pairs.is_empty() {
                default_pairs()
            } else {
                config.pairs
            }
        }
        None => default_pairs(),
    };

    println!("{:<10} {}", "PAIR", "QUERY SYMBOL");
    for pair in &pairs {
        println!("{:<10} {}", pair.as_str(), pair.query_symbol());
    }
    println!("\n{} pairs", pairs.len());

    Ok(())
}
