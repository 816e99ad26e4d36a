//! Delimited serialization of bar tables.

use fxharvest_types::Bar;
use std::io::Write;

/// CSV writer for bar tables.
#[derive(Debug, Clone)]
pub struct CsvWriter {
    /// Field delimiter (default: comma).
    delimiter: char,
    /// Whether to include a header row.
    include_header: bool,
}

impl Default for CsvWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl CsvWriter {
    /// Creates a new CSV writer with default settings.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            delimiter: ',',
            include_header: true,
        }
    }

    /// Sets the field delimiter.
    #[must_use]
    pub const fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets whether to include a header row.
    #[must_use]
    pub const fn with_header(mut self, include: bool) -> Self {
        self.include_header = include;
        self
    }

    /// Creates a tab-separated values (TSV) writer.
    #[must_use]
    pub const fn tsv() -> Self {
        Self {
            delimiter: '\t',
            include_header: true,
        }
    }

    /// Writes the bar table: a header row (unless disabled) followed by one
    /// row per bar. An empty table produces a header-only output.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn write_bars<W: Write>(&self, bars: &[Bar], mut writer: W) -> std::io::Result<()> {
        let d = self.delimiter;

        if self.include_header {
            writeln!(
                writer,
                "timestamp{d}open{d}high{d}low{d}close{d}adj_close{d}volume"
            )?;
        }

        for bar in bars {
            writeln!(
                writer,
                "{}{d}{}{d}{}{d}{}{d}{}{d}{}{d}{}",
                bar.timestamp.format("%Y-%m-%dT%H:%M:%SZ"),
                bar.open,
                bar.high,
                bar.low,
                bar.close,
                bar.adj_close,
                bar.volume
            )?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use std::io::Cursor;

    fn create_test_bar() -> Bar {
        let timestamp = Utc.with_ymd_and_hms(2025, 4, 29, 12, 30, 0).unwrap();
        Bar::new(timestamp, 1.1401, 1.1405, 1.1399, 1.1402, 1.1402, 0.0)
    }

    #[test]
    fn test_csv_header_and_row() {
        let writer = CsvWriter::new();
        let bars = vec![create_test_bar()];
        let mut output = Cursor::new(Vec::new());

        writer.write_bars(&bars, &mut output).unwrap();

        let result = String::from_utf8(output.into_inner()).unwrap();
        let lines: Vec<_> = result.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "timestamp,open,high,low,close,adj_close,volume");
        assert_eq!(lines[1], "2025-04-29T12:30:00Z,1.1401,1.1405,1.1399,1.1402,1.1402,0");
    }

    #[test]
    fn test_csv_row_count() {
        let writer = CsvWriter::new();
        let bars = vec![create_test_bar(); 3];
        let mut output = Cursor::new(Vec::new());

        writer.write_bars(&bars, &mut output).unwrap();

        let result = String::from_utf8(output.into_inner()).unwrap();
        assert_eq!(result.lines().count(), 4);
    }

    #[test]
    fn test_csv_empty_table_is_header_only() {
        let writer = CsvWriter::new();
        let mut output = Cursor::new(Vec::new());

        writer.write_bars(&[], &mut output).unwrap();

        let result = String::from_utf8(output.into_inner()).unwrap();
        assert_eq!(result.lines().count(), 1);
    }

    #[test]
    fn test_csv_no_header() {
        let writer = CsvWriter::new().with_header(false);
        let mut output = Cursor::new(Vec::new());

        writer.write_bars(&[], &mut output).unwrap();

        assert!(output.into_inner().is_empty());
    }

    #[test]
    fn test_tsv() {
        let writer = CsvWriter::tsv();
        let bars = vec![create_test_bar()];
        let mut output = Cursor::new(Vec::new());

        writer.write_bars(&bars, &mut output).unwrap();

        let result = String::from_utf8(output.into_inner()).unwrap();
        assert!(result.starts_with("timestamp\topen\thigh"));
    }
}
