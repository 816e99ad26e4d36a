//! Deterministic output-path derivation.

use fxharvest_types::{DateRange, Interval, Symbol};
use std::path::{Path, PathBuf};

/// Computes the output file path for a job's parameters.
///
/// Layout: `<root>/<SYMBOL>/<QUERY_SYMBOL>_<interval>_<start>_<end>.csv`.
/// A pure function of (symbol, interval, start, end): identical inputs
/// always yield the identical path, and distinct tuples never collide.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use fxharvest_store::bar_path;
/// use fxharvest_types::{DateRange, Interval, Symbol};
///
/// let symbol = Symbol::new("EURUSD").unwrap();
/// let range = DateRange::new(
///     NaiveDate::from_ymd_opt(2025, 4, 29).unwrap(),
///     NaiveDate::from_ymd_opt(2025, 5, 6).unwrap(),
/// )
/// .unwrap();
///
/// let path = bar_path(".".as_ref(), &symbol, Interval::Minute1, range);
/// assert_eq!(
///     path.to_str().unwrap(),
///     "./EURUSD/EURUSD=X_1m_2025-04-29_2025-05-06.csv"
/// );
/// ```
#[must_use]
pub fn bar_path(root: &Path, symbol: &Symbol, interval: Interval, range: DateRange) -> PathBuf {
    root.join(symbol.as_str()).join(format!(
        "{}_{}_{}_{}.csv",
        symbol.query_symbol(),
        interval,
        range.start,
        range.end
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn range(start: (i32, u32, u32), end: (i32, u32, u32)) -> DateRange {
        DateRange::new(
            NaiveDate::from_ymd_opt(start.0, start.1, start.2).unwrap(),
            NaiveDate::from_ymd_opt(end.0, end.1, end.2).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_bar_path_layout() {
        let symbol = Symbol::new("AUDUSD").unwrap();
        let path = bar_path(
            Path::new("/data"),
            &symbol,
            Interval::Minute5,
            range((2024, 12, 2), (2025, 1, 28)),
        );
        assert_eq!(
            path,
            PathBuf::from("/data/AUDUSD/AUDUSD=X_5m_2024-12-02_2025-01-28.csv")
        );
    }

    #[test]
    fn test_bar_path_deterministic() {
        let symbol = Symbol::new("EURUSD").unwrap();
        let r = range((2025, 4, 29), (2025, 5, 6));
        let a = bar_path(Path::new("."), &symbol, Interval::Minute1, r);
        let b = bar_path(Path::new("."), &symbol, Interval::Minute1, r);
        assert_eq!(a, b);
    }

    #[test]
    fn test_bar_path_distinct_jobs_never_collide() {
        let eurusd = Symbol::new("EURUSD").unwrap();
        let gbpusd = Symbol::new("GBPUSD").unwrap();
        let r1 = range((2025, 4, 29), (2025, 5, 6));
        let r2 = range((2025, 4, 22), (2025, 4, 29));
        let root = Path::new(".");

        let paths = [
            bar_path(root, &eurusd, Interval::Minute1, r1),
            bar_path(root, &eurusd, Interval::Minute1, r2),
            bar_path(root, &eurusd, Interval::Minute5, r1),
            bar_path(root, &gbpusd, Interval::Minute1, r1),
        ];

        for (i, a) in paths.iter().enumerate() {
            for b in &paths[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
