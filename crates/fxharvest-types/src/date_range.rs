//! Date range for data retrieval.

use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};

use crate::DateRangeError;

/// A half-open range of dates, `[start, end)`.
///
/// The provider treats the end date as exclusive for intraday data, so the
/// range must be non-empty: start strictly before end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateRange {
    /// Start date (inclusive).
    pub start: NaiveDate,
    /// End date (exclusive).
    pub end: NaiveDate,
}

impl DateRange {
    /// Creates a new date range, validating that start < end.
    ///
    /// # Errors
    ///
    /// Returns an error if start is not strictly before end.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, DateRangeError> {
        if start >= end {
            return Err(DateRangeError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Returns the number of days covered by the range.
    #[must_use]
    pub fn total_days(&self) -> usize {
        (self.end - self.start).num_days() as usize
    }

    /// Returns true if the range contains the given date.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date < self.end
    }

    /// Returns the start of the range as a UTC timestamp (midnight).
    #[must_use]
    pub fn start_utc(&self) -> DateTime<Utc> {
        midnight_utc(self.start)
    }

    /// Returns the end of the range as a UTC timestamp (midnight).
    #[must_use]
    pub fn end_utc(&self) -> DateTime<Utc> {
        midnight_utc(self.end)
    }
}

impl std::fmt::Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

fn midnight_utc(date: NaiveDate) -> DateTime<Utc> {
    Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_range_new() {
        let start = NaiveDate::from_ymd_opt(2025, 4, 29).unwrap();
        let end = NaiveDate::from_ymd_opt(2025, 5, 6).unwrap();
        let range = DateRange::new(start, end).unwrap();

        assert_eq!(range.start, start);
        assert_eq!(range.end, end);
        assert_eq!(range.total_days(), 7);
    }

    #[test]
    fn test_date_range_rejects_reversed() {
        let start = NaiveDate::from_ymd_opt(2025, 5, 6).unwrap();
        let end = NaiveDate::from_ymd_opt(2025, 4, 29).unwrap();
        assert!(DateRange::new(start, end).is_err());
    }

    #[test]
    fn test_date_range_rejects_empty() {
        let date = NaiveDate::from_ymd_opt(2025, 4, 29).unwrap();
        assert!(DateRange::new(date, date).is_err());
    }

    #[test]
    fn test_contains_end_exclusive() {
        let start = NaiveDate::from_ymd_opt(2025, 4, 29).unwrap();
        let end = NaiveDate::from_ymd_opt(2025, 5, 6).unwrap();
        let range = DateRange::new(start, end).unwrap();

        assert!(range.contains(start));
        assert!(range.contains(NaiveDate::from_ymd_opt(2025, 5, 5).unwrap()));
        assert!(!range.contains(end));
    }

    #[test]
    fn test_start_utc_is_midnight() {
        let start = NaiveDate::from_ymd_opt(2025, 4, 29).unwrap();
        let end = NaiveDate::from_ymd_opt(2025, 4, 30).unwrap();
        let range = DateRange::new(start, end).unwrap();

        assert_eq!(range.start_utc().timestamp(), 1_745_884_800);
        assert_eq!(range.end_utc().timestamp() - range.start_utc().timestamp(), 86400);
    }
}
