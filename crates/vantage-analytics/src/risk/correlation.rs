//! Pearson correlation matrix of return columns.

use serde::Serialize;
use vantage_core::ReturnTable;
use vantage_math::linear_algebra;

use super::covariance::complete_samples;
use crate::error::{AnalyticsError, AnalyticsResult};

/// A symmetric correlation matrix with named rows and columns.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrelationMatrix {
    /// Column names, labelling both axes.
    pub columns: Vec<String>,

    /// Row-major coefficients. NaN where a column has zero variance.
    pub values: Vec<Vec<f64>>,

    /// Rows used after dropping those with any missing value.
    pub observations: usize,
}

impl CorrelationMatrix {
    /// Returns the coefficient between two columns.
    #[must_use]
    pub fn get(&self, a: &str, b: &str) -> Option<f64> {
        let i = self.columns.iter().position(|c| c == a)?;
        let j = self.columns.iter().position(|c| c == b)?;
        Some(self.values[i][j])
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Returns true if the matrix has no columns.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// Correlation of every column of the table.
///
/// # Errors
///
/// Returns `InsufficientData` with fewer than two complete rows.
pub fn correlation(returns: &ReturnTable) -> AnalyticsResult<CorrelationMatrix> {
    let columns: Vec<&str> = returns.columns().iter().map(String::as_str).collect();
    correlation_of(returns, &columns)
}

/// Correlation of the listed columns, with listwise deletion of rows that
/// miss any of them.
///
/// # Errors
///
/// - `MissingColumn` if a column is absent
/// - `InsufficientData` with fewer than two complete rows
pub fn correlation_of(returns: &ReturnTable, columns: &[&str]) -> AnalyticsResult<CorrelationMatrix> {
    let samples = complete_samples(returns, columns)?;
    let observations = samples.first().map_or(0, Vec::len);
    if observations < 2 {
        return Err(AnalyticsError::insufficient_data(
            "correlation",
            2,
            observations,
        ));
    }

    let cov = linear_algebra::covariance_matrix(&samples)?;
    let corr = linear_algebra::correlation_from_covariance(&cov)?;

    let n = columns.len();
    let values = (0..n)
        .map(|i| (0..n).map(|j| corr[(i, j)]).collect())
        .collect();

    Ok(CorrelationMatrix {
        columns: columns.iter().map(|c| (*c).to_string()).collect(),
        values,
        observations,
    })
}
