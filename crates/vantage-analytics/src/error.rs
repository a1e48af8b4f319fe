//! Error types for allocation analytics.
//!
//! Only data-shape problems are errors here. Numerically undefined results
//! are reported through [`AnalyticsWarning`](crate::AnalyticsWarning).

use thiserror::Error;
use vantage_core::VantageError;
use vantage_math::MathError;

/// Result type for analytics operations.
pub type AnalyticsResult<T> = Result<T, AnalyticsError>;

/// Errors that abort an analytics computation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalyticsError {
    /// Too few observations for a rate of change or annualization.
    #[error("Insufficient data for {operation}: need at least {required} observations, got {actual}")]
    InsufficientData {
        /// The computation that was attempted.
        operation: String,
        /// Minimum number of observations.
        required: usize,
        /// Observations available.
        actual: usize,
    },

    /// A benchmark definition or reference named an absent column.
    #[error("Missing column: '{column}'")]
    MissingColumn {
        /// The absent column.
        column: String,
    },

    /// Invalid table, weight, window or role data.
    #[error(transparent)]
    Data(VantageError),

    /// Calculation failed.
    #[error("Calculation failed: {reason}")]
    CalculationFailed {
        /// The reason the calculation failed.
        reason: String,
    },
}

impl AnalyticsError {
    /// Creates an insufficient data error.
    #[must_use]
    pub fn insufficient_data(operation: impl Into<String>, required: usize, actual: usize) -> Self {
        Self::InsufficientData {
            operation: operation.into(),
            required,
            actual,
        }
    }

    /// Creates a missing column error.
    #[must_use]
    pub fn missing_column(column: impl Into<String>) -> Self {
        Self::MissingColumn {
            column: column.into(),
        }
    }

    /// Creates a calculation failed error.
    #[must_use]
    pub fn calculation_failed(reason: impl Into<String>) -> Self {
        Self::CalculationFailed {
            reason: reason.into(),
        }
    }

    /// Attaches an operation name to an insufficient data error.
    #[must_use]
    pub fn during(self, operation: &str) -> Self {
        match self {
            Self::InsufficientData {
                required, actual, ..
            } => Self::insufficient_data(operation, required, actual),
            other => other,
        }
    }
}

impl From<VantageError> for AnalyticsError {
    fn from(err: VantageError) -> Self {
        match err {
            VantageError::MissingColumn { column } => Self::MissingColumn { column },
            VantageError::InsufficientData { required, actual } => {
                Self::insufficient_data("table", required, actual)
            }
            other => Self::Data(other),
        }
    }
}

impl From<MathError> for AnalyticsError {
    fn from(err: MathError) -> Self {
        match err {
            MathError::InsufficientData { required, actual } => {
                Self::insufficient_data("statistics", required, actual)
            }
            other => Self::calculation_failed(other.to_string()),
        }
    }
}
