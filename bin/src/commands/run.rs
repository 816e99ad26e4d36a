//! Batch run command implementation.
//!
//! Builds the job list (pairs crossed with date ranges at one interval) from
//! flags or a configuration preset, runs it sequentially, and renders a
//! per-job report.

use crate::config::{BatchConfig, default_pairs};
use crate::display::{parse_date, parse_interval, parse_pair, runner_config};
use anyhow::{Context, Result, bail};
use fxharvest_lib::JobOutcome;
use fxharvest_lib::prelude::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};

/// Execute the run command.
#[allow(clippy::too_many_arguments)]
pub(crate) async fn run(
    config_path: Option<&Path>,
    preset: Option<&str>,
    pair_args: &[String],
    start_str: Option<&str>,
    end_str: Option<&str>,
    interval_str: &str,
    out_dir: PathBuf,
    timeout_secs: u64,
    skip_empty: bool,
    quiet: bool,
) -> Result<()> {
    let config = config_path.map(BatchConfig::load).transpose()?;

    // 1. Resolve the pair list: flags, then config file, then built-ins.
    let symbols: Vec<Symbol> = if pair_args.is_empty() {
        match &config {
            Some(c) if !c.pairs.is_empty() => c.pairs.clone(),
            _ => default_pairs(),
        }
    } else {
        pair_args
            .iter()
            .map(|p| parse_pair(p))
            .collect::<Result<_>>()?
    };

    // 2. Resolve ranges and interval: a named preset, or --start/--end.
    let (ranges, interval) = match preset {
        Some(name) => {
            let config = config
                .as_ref()
                .context("--preset requires --config")?;
            let preset = config
                .presets
                .get(name)
                .with_context(|| format!("Unknown preset: {name}"))?;
            (preset.date_ranges()?, preset.interval)
        }
        None => {
            let start = start_str.context("--start is required without --preset")?;
            let end = end_str.context("--end is required without --preset")?;
            let range = DateRange::new(parse_date(start, "start")?, parse_date(end, "end")?)?;
            (vec![range], parse_interval(interval_str)?)
        }
    };

    let jobs = Job::cross_product(&symbols, &ranges, interval);
    if jobs.is_empty() {
        bail!("No jobs to run (empty pair list or empty preset)");
    }

    // 3. Build the runner.
    let provider = YahooProvider::with_defaults().context("Failed to create HTTP client")?;
    let store = BarStore::new(out_dir);
    let runner = JobRunner::with_config(provider, store, runner_config(timeout_secs, skip_empty));

    // 4. Run sequentially with per-job reporting.
    let progress = if quiet {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new(jobs.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} jobs {msg}")
                .expect("Invalid progress template")
                .progress_chars("=>-"),
        );
        pb
    };

    let mut outcomes = Vec::with_capacity(jobs.len());
    for job in jobs {
        progress.set_message(job.to_string());
        let result = runner.run(&job).await;

        if !quiet {
            match &result {
                Ok(path) => progress.println(format!("  {} -> {}", job, path.display())),
                Err(e) => progress.println(format!("  {} failed: {}", job, e)),
            }
        }

        outcomes.push(JobOutcome::new(job, result));
        progress.inc(1);
    }
    let report = RunReport::new(outcomes);
    progress.finish_with_message(format!("{} jobs done", report.len()));

    // 5. Summary; exit status reflects whether any job failed.
    if !quiet {
        println!("\nRun complete:");
        println!("  Successful: {}", report.succeeded());
        if report.has_failures() {
            println!("  Failed: {}", report.failed());
            for outcome in report.failures() {
                if let Err(e) = &outcome.result {
                    println!("    {}: {}", outcome.job, e);
                }
            }
        }
    }

    if report.has_failures() {
        bail!("{} out of {} jobs failed", report.failed(), report.len());
    }

    Ok(())
}
