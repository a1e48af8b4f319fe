//! Annualized covariance and portfolio volatility.

use nalgebra::{DMatrix, DVector};
use vantage_core::ReturnTable;
use vantage_math::linear_algebra;

use crate::error::{AnalyticsError, AnalyticsResult};

/// Annualized volatility at or below which a series is treated as riskless.
///
/// Offsetting positions rarely cancel to an exact zero in floating point.
pub const ZERO_VOLATILITY: f64 = 1e-12;

/// Extracts the rows where every listed column is observed.
///
/// Returns one sample vector per column, in the order given.
///
/// # Errors
///
/// Returns `MissingColumn` if a column is absent.
pub fn complete_samples(returns: &ReturnTable, columns: &[&str]) -> AnalyticsResult<Vec<Vec<f64>>> {
    let indices = columns
        .iter()
        .map(|c| {
            returns
                .column_index(c)
                .ok_or_else(|| AnalyticsError::missing_column(*c))
        })
        .collect::<AnalyticsResult<Vec<_>>>()?;

    let mut samples = vec![Vec::with_capacity(returns.len()); indices.len()];
    for row in returns.rows() {
        let cells: Option<Vec<f64>> = indices.iter().map(|&idx| row[idx]).collect();
        if let Some(cells) = cells {
            for (sample, value) in samples.iter_mut().zip(cells) {
                sample.push(value);
            }
        }
    }
    Ok(samples)
}

/// Annualized sample covariance matrix (`n - 1` denominator, scaled by
/// `periods_per_year`) over the rows complete in `columns`.
///
/// # Errors
///
/// - `MissingColumn` if a column is absent
/// - `InsufficientData` with fewer than two complete rows
pub fn covariance_matrix(
    returns: &ReturnTable,
    columns: &[&str],
    periods_per_year: u32,
) -> AnalyticsResult<DMatrix<f64>> {
    let samples = complete_samples(returns, columns)?;
    let rows = samples.first().map_or(0, Vec::len);
    if rows < 2 {
        return Err(AnalyticsError::insufficient_data("covariance_matrix", 2, rows));
    }

    let cov = linear_algebra::covariance_matrix(&samples)?;
    Ok(cov * f64::from(periods_per_year))
}

/// Portfolio volatility `sqrt(wᵀ · Σ · w)`.
///
/// Values at or below [`ZERO_VOLATILITY`] are returned as exactly zero.
///
/// # Errors
///
/// Returns `CalculationFailed` if the dimensions disagree.
pub fn portfolio_volatility(weights: &DVector<f64>, covariance: &DMatrix<f64>) -> AnalyticsResult<f64> {
    let variance = linear_algebra::quadratic_form(weights, covariance)?;
    let vol = variance.max(0.0).sqrt();
    Ok(if vol <= ZERO_VOLATILITY { 0.0 } else { vol })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use vantage_core::Date;

    fn table() -> ReturnTable {
        let dates = (1..=5).map(|m| Date::from_ymd(2024, m, 1).unwrap()).collect();
        ReturnTable::new(
            vec!["A".into(), "B".into()],
            dates,
            vec![
                vec![Some(0.01), Some(0.02)],
                vec![Some(-0.02), None],
                vec![Some(0.03), Some(-0.01)],
                vec![Some(0.00), Some(0.01)],
                vec![None, Some(0.04)],
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_complete_samples_listwise() {
        let samples = complete_samples(&table(), &["A", "B"]).unwrap();
        assert_eq!(samples[0], vec![0.01, 0.03, 0.00]);
        assert_eq!(samples[1], vec![0.02, -0.01, 0.01]);

        let only_a = complete_samples(&table(), &["A"]).unwrap();
        assert_eq!(only_a[0].len(), 4);
    }

    #[test]
    fn test_covariance_is_annualized() {
        let cov = covariance_matrix(&table(), &["A", "B"], 12).unwrap();
        // A: mean 0.013333, deviations (-0.003333, 0.016667, -0.013333)
        let var_a = (0.01f64 / 3.0).powi(2) + (0.05f64 / 3.0).powi(2) + (0.04f64 / 3.0).powi(2);
        assert_relative_eq!(cov[(0, 0)], var_a / 2.0 * 12.0, epsilon = 1e-12);
        assert_relative_eq!(cov[(0, 1)], cov[(1, 0)]);
    }

    #[test]
    fn test_covariance_errors() {
        assert_eq!(
            covariance_matrix(&table(), &["A", "C"], 12).unwrap_err(),
            AnalyticsError::missing_column("C")
        );

        let short = ReturnTable::new(
            vec!["A".into()],
            vec![Date::from_ymd(2024, 1, 1).unwrap()],
            vec![vec![Some(0.01)]],
        )
        .unwrap();
        assert_eq!(
            covariance_matrix(&short, &["A"], 12).unwrap_err(),
            AnalyticsError::insufficient_data("covariance_matrix", 2, 1)
        );
    }

    #[test]
    fn test_portfolio_volatility() {
        let cov = DMatrix::from_row_slice(2, 2, &[0.04, 0.0, 0.0, 0.09]);
        let w = DVector::from_vec(vec![0.5, 0.5]);
        assert_relative_eq!(
            portfolio_volatility(&w, &cov).unwrap(),
            (0.25f64 * 0.04 + 0.25 * 0.09).sqrt(),
            epsilon = 1e-15
        );

        // Perfectly offsetting assets
        let cov = DMatrix::from_row_slice(2, 2, &[0.01, -0.01, -0.01, 0.01]);
        assert_eq!(portfolio_volatility(&w, &cov).unwrap(), 0.0);
    }
}
