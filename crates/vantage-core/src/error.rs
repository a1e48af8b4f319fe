//! Error types for the Vantage library.
//!
//! Data-shape problems (missing columns, too few observations, malformed
//! tables) are errors. Numerically undefined results such as a Sharpe ratio
//! at zero volatility are not errors; the analytics layer reports them as
//! warnings next to a NaN value.

use thiserror::Error;

/// A specialized Result type for Vantage operations.
pub type VantageResult<T> = Result<T, VantageError>;

/// The main error type for Vantage operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum VantageError {
    /// Fewer observations than a rate of change or annualization requires.
    #[error("Insufficient data: need at least {required} observations, got {actual}")]
    InsufficientData {
        /// Minimum number of observations.
        required: usize,
        /// Observations available.
        actual: usize,
    },

    /// A benchmark definition, weight vector or role referenced an absent column.
    #[error("Missing column: '{column}'")]
    MissingColumn {
        /// Name of the absent column.
        column: String,
    },

    /// A column name appears more than once.
    #[error("Duplicate column: '{column}'")]
    DuplicateColumn {
        /// The repeated column name.
        column: String,
    },

    /// Dates are not strictly increasing.
    #[error("Dates must be strictly increasing: {previous} is followed by {next}")]
    UnsortedDates {
        /// The earlier row's date.
        previous: String,
        /// The offending date.
        next: String,
    },

    /// A price level is negative or not finite.
    #[error("Invalid value {value} in column '{column}' on {date}")]
    InvalidValue {
        /// Column holding the value.
        column: String,
        /// Row date.
        date: String,
        /// The rejected value.
        value: f64,
    },

    /// A weight is negative or not finite.
    #[error("Invalid weight for '{asset}': {value}")]
    InvalidWeight {
        /// Asset the weight belongs to.
        asset: String,
        /// The rejected weight.
        value: f64,
    },

    /// A date window does not overlap the data.
    #[error("Invalid date window: {reason}")]
    InvalidWindow {
        /// Why the window is unusable.
        reason: String,
    },

    /// A column role was requested but never mapped.
    #[error("No column mapped for role '{role}'")]
    MissingRole {
        /// The unmapped role.
        role: String,
    },

    /// Error in date parsing or arithmetic.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },

    /// Malformed input that fits no other category.
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// Description of the problem.
        reason: String,
    },
}

impl VantageError {
    /// Creates an insufficient data error.
    #[must_use]
    pub fn insufficient_data(required: usize, actual: usize) -> Self {
        Self::InsufficientData { required, actual }
    }

    /// Creates a missing column error.
    #[must_use]
    pub fn missing_column(column: impl Into<String>) -> Self {
        Self::MissingColumn {
            column: column.into(),
        }
    }

    /// Creates a duplicate column error.
    #[must_use]
    pub fn duplicate_column(column: impl Into<String>) -> Self {
        Self::DuplicateColumn {
            column: column.into(),
        }
    }

    /// Creates an invalid window error.
    #[must_use]
    pub fn invalid_window(reason: impl Into<String>) -> Self {
        Self::InvalidWindow {
            reason: reason.into(),
        }
    }

    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }

    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Returns true for errors caused by the shape of the supplied data.
    #[must_use]
    pub fn is_data_shape(&self) -> bool {
        matches!(
            self,
            Self::InsufficientData { .. }
                | Self::MissingColumn { .. }
                | Self::DuplicateColumn { .. }
                | Self::UnsortedDates { .. }
        )
    }
}
