//! Per-run accounting of job outcomes.

use fxharvest_types::{FetchError, Job};
use std::path::PathBuf;

/// The recorded result of one job.
#[derive(Debug)]
pub struct JobOutcome {
    /// The job that was run.
    pub job: Job,
    /// The output path on success, or the job's failure.
    pub result: Result<PathBuf, FetchError>,
}

impl JobOutcome {
    /// Creates a new outcome.
    #[must_use]
    pub const fn new(job: Job, result: Result<PathBuf, FetchError>) -> Self {
        Self { job, result }
    }

    /// Returns true if the job succeeded.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

/// Accumulated outcomes of a batch run.
///
/// Job failures are independent: the report exists so the caller can render
/// a per-job summary and decide the process exit status, not to short-
/// circuit the run.
#[derive(Debug, Default)]
pub struct RunReport {
    outcomes: Vec<JobOutcome>,
}

impl RunReport {
    /// Creates a report from recorded outcomes.
    #[must_use]
    pub const fn new(outcomes: Vec<JobOutcome>) -> Self {
        Self { outcomes }
    }

    /// Returns the recorded outcomes, in run order.
    #[must_use]
    pub fn outcomes(&self) -> &[JobOutcome] {
        &self.outcomes
    }

    /// Returns the number of jobs in the run.
    #[must_use]
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    /// Returns true if the run had no jobs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// Returns the number of succeeded jobs.
    #[must_use]
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_success()).count()
    }

    /// Returns the number of failed jobs.
    #[must_use]
    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }

    /// Returns true if any job failed.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.outcomes.iter().any(|o| !o.is_success())
    }

    /// Returns the failed outcomes, in run order.
    pub fn failures(&self) -> impl Iterator<Item = &JobOutcome> {
        self.outcomes.iter().filter(|o| !o.is_success())
    }
}
