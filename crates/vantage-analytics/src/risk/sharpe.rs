//! Sharpe-style ratios against a caller-chosen reference rate.

use serde::{Deserialize, Serialize};
use std::fmt;
use vantage_core::{ColumnRole, ReturnTable, RoleMap};

use super::covariance::ZERO_VOLATILITY;
use crate::annualization::annualized_return;
use crate::error::AnalyticsResult;

/// The annual rate subtracted from returns in a Sharpe ratio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ReferenceRate {
    /// Raw return over volatility.
    #[default]
    Zero,

    /// A fixed annual rate (0.02 = 2%).
    Annualized {
        /// The annual rate.
        rate: f64,
    },

    /// The annualized return of a column, such as a cash index.
    Column {
        /// Column name.
        column: String,
    },

    /// The annualized return of the column mapped to a role.
    Role {
        /// Role to resolve through the request's role map.
        role: ColumnRole,
    },
}

impl ReferenceRate {
    /// Resolves the reference to an annual rate.
    ///
    /// # Errors
    ///
    /// - `Data(MissingRole)` if a role is not mapped
    /// - `MissingColumn` if the column is absent
    /// - `InsufficientData` if the column has fewer than two observations
    pub fn resolve(
        &self,
        returns: &ReturnTable,
        roles: &RoleMap,
        periods_per_year: u32,
    ) -> AnalyticsResult<f64> {
        match self {
            Self::Zero => Ok(0.0),
            Self::Annualized { rate } => Ok(*rate),
            Self::Column { column } => column_rate(returns, column, periods_per_year),
            Self::Role { role } => {
                let column = roles.resolve(role)?;
                column_rate(returns, column, periods_per_year)
            }
        }
    }
}

fn column_rate(returns: &ReturnTable, column: &str, periods_per_year: u32) -> AnalyticsResult<f64> {
    let series = returns.column(column)?;
    annualized_return(&series, periods_per_year).map_err(|e| e.during("reference rate"))
}

impl fmt::Display for ReferenceRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Zero => write!(f, "0%"),
            Self::Annualized { rate } => write!(f, "{:.2}%", rate * 100.0),
            Self::Column { column } => write!(f, "{column}"),
            Self::Role { role } => write!(f, "{role}"),
        }
    }
}

/// `(annualized_return - reference) / volatility`.
///
/// Returns NaN when the volatility is zero, below [`ZERO_VOLATILITY`] or
/// not finite.
#[must_use]
pub fn sharpe_ratio(annualized_return: f64, reference: f64, volatility: f64) -> f64 {
    if !volatility.is_finite() || volatility <= ZERO_VOLATILITY {
        return f64::NAN;
    }
    (annualized_return - reference) / volatility
}
