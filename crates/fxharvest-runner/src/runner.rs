//! The fetch-and-persist job runner.

use fxharvest_provider::BarProvider;
use fxharvest_store::BarStore;
use fxharvest_types::{FetchError, Job};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::{JobOutcome, RunReport};

/// Policy for jobs whose provider call returns zero rows.
///
/// Some ranges legitimately have no data (weekends for FX), so the default
/// writes a header-only file and counts the job as a success; the artifact
/// on disk marks the range as fetched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyPolicy {
    /// Write a header-only file and treat the job as succeeded.
    #[default]
    WriteHeaderOnly,
    /// Write nothing and report the job as an empty result.
    Skip,
}

/// Configuration for the job runner.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Timeout applied around each job's provider call.
    pub job_timeout: Duration,
    /// What to do when the provider returns zero rows.
    pub empty_policy: EmptyPolicy,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            job_timeout: Duration::from_secs(60),
            empty_policy: EmptyPolicy::default(),
        }
    }
}

/// Runs fetch-and-persist jobs against an injected provider.
///
/// The runner holds no mutable state: each job is processed independently,
/// and since distinct jobs never derive the same output path, the runner is
/// safe to call concurrently should a caller want to parallelize the loop.
#[derive(Debug)]
pub struct JobRunner<P> {
    provider: P,
    store: BarStore,
    config: RunnerConfig,
}

impl<P: BarProvider> JobRunner<P> {
    /// Creates a runner with default configuration.
    pub fn new(provider: P, store: BarStore) -> Self {
        Self::with_config(provider, store, RunnerConfig::default())
    }

    /// Creates a runner with the given configuration.
    pub const fn with_config(provider: P, store: BarStore, config: RunnerConfig) -> Self {
        Self {
            provider,
            store,
            config,
        }
    }

    /// Returns the store this runner writes through.
    #[must_use]
    pub const fn store(&self) -> &BarStore {
        &self.store
    }

    /// Runs a single job: fetch the bars, ensure the symbol directory
    /// exists, and write the table to the deterministically derived path.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::ProviderUnavailable`] on fetch failure or
    /// timeout, [`FetchError::EmptyResult`] for a zero-row result under
    /// [`EmptyPolicy::Skip`], and [`FetchError::Filesystem`] if the output
    /// cannot be written.
    pub async fn run(&self, job: &Job) -> Result<PathBuf, FetchError> {
        let query = job.symbol.query_symbol();
        debug!(%job, %query, "running job");

        let fetch = self.provider.fetch_bars(&query, job.range, job.interval);
        let bars = match tokio::time::timeout(self.config.job_timeout, fetch).await {
            Ok(Ok(bars)) => bars,
            Ok(Err(e)) => return Err(FetchError::ProviderUnavailable(e.to_string())),
            Err(_) => {
                return Err(FetchError::ProviderUnavailable(format!(
                    "timed out after {}s",
                    self.config.job_timeout.as_secs()
                )));
            }
        };

        if bars.is_empty() {
            match self.config.empty_policy {
                EmptyPolicy::Skip => {
                    return Err(FetchError::EmptyResult {
                        job: job.to_string(),
                    });
                }
                EmptyPolicy::WriteHeaderOnly => {
                    warn!(%job, "provider returned no rows, writing header-only file");
                }
            }
        }

        let path = self
            .store
            .write(&job.symbol, job.interval, job.range, &bars)
            .map_err(|e| FetchError::Filesystem(e.to_string()))?;

        info!(%job, rows = bars.len(), path = %path.display(), "job complete");
        Ok(path)
    }

    /// Runs a batch of jobs sequentially, in order.
    ///
    /// A job's failure never aborts the run: every job is attempted and its
    /// outcome recorded in the returned report.
    pub async fn run_batch(&self, jobs: &[Job]) -> RunReport {
        let mut outcomes = Vec::with_capacity(jobs.len());

        for job in jobs {
            let result = self.run(job).await;
            if let Err(e) = &result {
                warn!(%job, error = %e, "job failed");
            }
            outcomes.push(JobOutcome::new(job.clone(), result));
        }

        RunReport::new(outcomes)
    }
}
