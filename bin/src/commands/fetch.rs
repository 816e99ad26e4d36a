//! Single-job fetch command implementation.

use crate::display::{parse_date, parse_interval, parse_pair, runner_config};
use anyhow::{Context, Result};
use fxharvest_lib::prelude::*;
use std::path::PathBuf;

/// Fetch one pair over one date range and write the CSV.
#[allow(clippy::too_many_arguments)]
pub(crate) async fn fetch(
    pair: &str,
    start_str: &str,
    end_str: &str,
    interval_str: &str,
    out_dir: PathBuf,
    timeout_secs: u64,
    skip_empty: bool,
    quiet: bool,
) -> Result<()> {
    let symbol = parse_pair(pair)?;
    let range = DateRange::new(
        parse_date(start_str, "start")?,
        parse_date(end_str, "end")?,
    )?;
    let interval = parse_interval(interval_str)?;
    let job = Job::new(symbol, range, interval);

    let provider = YahooProvider::with_defaults().context("Failed to create HTTP client")?;
    let store = BarStore::new(out_dir);
    let runner = JobRunner::with_config(provider, store, runner_config(timeout_secs, skip_empty));

    let path = runner
        .run(&job)
        .await
        .with_context(|| format!("Job failed: {job}"))?;

    if !quiet {
        println!("{} data saved to {}", job.symbol, path.display());
    }

    Ok(())
}
