//! Loader errors.

use thiserror::Error;
use vantage_core::VantageError;

/// Result type for file loading.
pub type FileResult<T> = Result<T, FileError>;

/// Errors raised while reading price tables and analysis requests.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FileError {
    /// The file could not be opened or read.
    #[error("io error: {0}")]
    Io(String),

    /// Malformed CSV.
    #[error("csv error: {0}")]
    Csv(String),

    /// A header the loader needs is absent.
    #[error("missing column: '{0}'")]
    MissingColumn(String),

    /// A cell could not be parsed.
    #[error("line {line}, column '{column}': cannot parse '{value}'")]
    InvalidCell {
        /// 1-based line number in the file.
        line: u64,
        /// Column header.
        column: String,
        /// Raw cell text.
        value: String,
    },

    /// Two rows carry the same date.
    #[error("duplicate date {0}")]
    DuplicateDate(String),

    /// The file extension does not name a supported format.
    #[error("unsupported file format: '{0}' (expected .toml or .json)")]
    UnsupportedFormat(String),

    /// Parse/deserialization error.
    #[error("parse error: {0}")]
    Parse(String),

    /// The parsed data violates a table or weight invariant.
    #[error(transparent)]
    Data(#[from] VantageError),
}

impl From<std::io::Error> for FileError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<csv::Error> for FileError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

impl From<toml::de::Error> for FileError {
    fn from(err: toml::de::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

impl From<serde_json::Error> for FileError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}
