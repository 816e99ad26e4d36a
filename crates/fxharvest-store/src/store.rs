//! Filesystem bar store.

use fxharvest_types::{Bar, DateRange, Interval, Symbol};
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::{CsvWriter, bar_path};

/// Errors that can occur while persisting bars.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The symbol directory could not be created.
    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        /// The directory that could not be created.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The output file could not be created or written.
    #[error("failed to write {path}: {source}")]
    WriteFile {
        /// The file that could not be written.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },
}

/// Writes bar tables to per-symbol CSV files under a root directory.
///
/// Paths are a pure function of the job parameters, so re-running the same
/// job overwrites the same file and never touches any other.
#[derive(Debug, Clone)]
pub struct BarStore {
    root: PathBuf,
    writer: CsvWriter,
}

impl BarStore {
    /// Creates a store rooted at the given directory.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            writer: CsvWriter::new(),
        }
    }

    /// Replaces the CSV writer configuration.
    #[must_use]
    pub fn with_writer(mut self, writer: CsvWriter) -> Self {
        self.writer = writer;
        self
    }

    /// Returns the store's root directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the output path this store would use for the parameters.
    #[must_use]
    pub fn path_for(&self, symbol: &Symbol, interval: Interval, range: DateRange) -> PathBuf {
        bar_path(&self.root, symbol, interval, range)
    }

    /// Persists a bar table, creating the symbol directory if absent and
    /// overwriting any existing file at the derived path.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or file cannot be created or
    /// written.
    pub fn write(
        &self,
        symbol: &Symbol,
        interval: Interval,
        range: DateRange,
        bars: &[Bar],
    ) -> Result<PathBuf, StoreError> {
        let path = self.path_for(symbol, interval, range);

        let dir = path.parent().unwrap_or(&self.root);
        fs::create_dir_all(dir).map_err(|source| StoreError::CreateDir {
            path: dir.to_path_buf(),
            source,
        })?;

        let file = File::create(&path).map_err(|source| StoreError::WriteFile {
            path: path.clone(),
            source,
        })?;
        let writer = BufWriter::new(file);
        self.writer
            .write_bars(bars, writer)
            .map_err(|source| StoreError::WriteFile {
                path: path.clone(),
                source,
            })?;

        Ok(path)
    }
}
