//! CLI error types.

use thiserror::Error;
use vantage_analytics::AnalyticsError;
use vantage_core::VantageError;
use vantage_ext_file::FileError;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid date format.
    #[error("Invalid date format: {0}. Use YYYY-MM-DD.")]
    InvalidDate(String),

    /// Unusable window flags.
    #[error("Invalid window: {0}. Use max, ytd, <n>m or <start>..<end>.")]
    InvalidWindow(String),

    /// A named series is not in the report or table.
    #[error("Unknown series: {0}")]
    UnknownSeries(String),

    /// Input file could not be loaded.
    #[error(transparent)]
    File(#[from] FileError),

    /// Table or window invariant violated.
    #[error(transparent)]
    Data(#[from] VantageError),

    /// The analysis itself failed.
    #[error("Analysis failed: {0}")]
    Analytics(#[from] AnalyticsError),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
