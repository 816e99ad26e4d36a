//! Instrument symbol definitions.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Maximum accepted ticker length.
const MAX_LEN: usize = 12;

/// A validated instrument ticker (e.g. `EURUSD`).
///
/// Symbols are stored uppercase. Validation is purely syntactic; whether the
/// provider actually lists the instrument is only discovered at fetch time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Symbol(String);

impl Symbol {
    /// Creates a new symbol, validating the ticker syntax.
    ///
    /// # Errors
    ///
    /// Returns an error if the ticker is empty, longer than 12 characters,
    /// or contains anything other than ASCII alphanumerics.
    pub fn new(ticker: impl AsRef<str>) -> Result<Self, SymbolError> {
        let ticker = ticker.as_ref();
        if ticker.is_empty() {
            return Err(SymbolError::Empty);
        }
        if ticker.len() > MAX_LEN {
            return Err(SymbolError::TooLong(ticker.to_string()));
        }
        if !ticker.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(SymbolError::InvalidChar(ticker.to_string()));
        }
        Ok(Self(ticker.to_ascii_uppercase()))
    }

    /// Returns the ticker as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the provider query form of the symbol.
    ///
    /// FX pairs are quoted on Yahoo Finance with an `=X` market suffix
    /// (`EURUSD` is queried as `EURUSD=X`).
    #[must_use]
    pub fn query_symbol(&self) -> String {
        format!("{}=X", self.0)
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Symbol {
    type Err = SymbolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Symbol {
    type Error = SymbolError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<Symbol> for String {
    fn from(symbol: Symbol) -> Self {
        symbol.0
    }
}

/// Error returned when a ticker fails syntactic validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SymbolError {
    /// The ticker was empty.
    #[error("empty symbol")]
    Empty,

    /// The ticker exceeded the maximum length.
    #[error("symbol too long: {0}")]
    TooLong(String),

    /// The ticker contained a non-alphanumeric character.
    #[error("symbol contains invalid characters: {0}")]
    InvalidChar(String),
}
