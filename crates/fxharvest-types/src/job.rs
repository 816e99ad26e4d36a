//! Job definitions.

use crate::{DateRange, Interval, Symbol};

/// One unit of work: a single (symbol, date range, interval) fetch request.
///
/// Jobs are immutable once constructed. A run is a static ordered sequence
/// of jobs, typically the cross product of a symbol list and a date-range
/// list at a fixed interval.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Job {
    /// The instrument to fetch.
    pub symbol: Symbol,
    /// The date range to fetch, `[start, end)`.
    pub range: DateRange,
    /// The sampling interval.
    pub interval: Interval,
}

impl Job {
    /// Creates a new job.
    #[must_use]
    pub const fn new(symbol: Symbol, range: DateRange, interval: Interval) -> Self {
        Self {
            symbol,
            range,
            interval,
        }
    }

    /// Builds the job list for a run: symbols crossed with date ranges at a
    /// fixed interval, in symbol-major order.
    #[must_use]
    pub fn cross_product(symbols: &[Symbol], ranges: &[DateRange], interval: Interval) -> Vec<Self> {
        let mut jobs = Vec::with_capacity(symbols.len() * ranges.len());
        for symbol in symbols {
            for range in ranges {
                jobs.push(Self::new(symbol.clone(), *range, interval));
            }
        }
        jobs
    }
}

impl std::fmt::Display for Job {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} @ {}", self.symbol, self.range, self.interval)
    }
}
