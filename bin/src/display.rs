//! Display utilities and shared parsing helpers for the fxharvest CLI.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use fxharvest_lib::prelude::*;
use std::time::Duration;

/// Maps the -v count onto a tracing filter and installs the subscriber.
///
/// `RUST_LOG` takes precedence when set. Diagnostics go to stderr so they
/// never interleave with the per-job result lines on stdout.
pub(crate) fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Parses a YYYY-MM-DD date argument.
pub(crate) fn parse_date(s: &str, what: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").with_context(|| format!("Invalid {what} date: {s}"))
}

/// Parses a pair argument into a validated symbol.
pub(crate) fn parse_pair(s: &str) -> Result<Symbol> {
    Symbol::new(s).with_context(|| format!("Invalid pair: {s}"))
}

/// Parses an interval argument.
pub(crate) fn parse_interval(s: &str) -> Result<Interval> {
    s.parse::<Interval>().map_err(|e| anyhow::anyhow!("{e}"))
}

/// Builds a runner config from the shared CLI flags.
pub(crate) fn runner_config(timeout_secs: u64, skip_empty: bool) -> RunnerConfig {
    RunnerConfig {
        job_timeout: Duration::from_secs(timeout_secs),
        empty_policy: if skip_empty {
            EmptyPolicy::Skip
        } else {
            EmptyPolicy::WriteHeaderOnly
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        let date = parse_date("2025-04-29", "start").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2025, 4, 29).unwrap());
        assert!(parse_date("29/04/2025", "start").is_err());
    }

    #[test]
    fn test_runner_config_policies() {
        assert_eq!(
            runner_config(60, false).empty_policy,
            EmptyPolicy::WriteHeaderOnly
        );
        assert_eq!(runner_config(60, true).empty_policy, EmptyPolicy::Skip);
        assert_eq!(runner_config(30, false).job_timeout, Duration::from_secs(30));
    }
}
