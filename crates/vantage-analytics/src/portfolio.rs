//! Weighted portfolio return series.

use serde::Serialize;
use vantage_core::{ReturnSeries, ReturnTable, WeightVector};

use crate::error::AnalyticsResult;
use crate::warning::AnalyticsWarning;

/// Default tolerance for the distance of a weight sum from one.
pub const DEFAULT_WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// A profile's periodic return series with the conditions met building it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortfolioSeries {
    /// Weighted return per period.
    pub series: ReturnSeries,

    /// Sum of the weights applied to existing columns.
    pub weight_sum: f64,

    /// Unknown assets and weight-sum mismatches.
    pub warnings: Vec<AnalyticsWarning>,
}

/// Resolved `(column index, weight)` pairs plus warnings for unknown assets.
pub(crate) fn align_weights(
    returns: &ReturnTable,
    weights: &WeightVector,
) -> (Vec<(usize, f64)>, Vec<AnalyticsWarning>) {
    let mut aligned = Vec::with_capacity(weights.len());
    let mut warnings = Vec::new();
    for (asset, weight) in weights.iter() {
        match returns.column_index(asset) {
            Some(idx) => aligned.push((idx, weight)),
            None => warnings.push(AnalyticsWarning::UnknownAsset {
                asset: asset.to_string(),
            }),
        }
    }
    (aligned, warnings)
}

/// Builds the weighted return series of an allocation.
///
/// Each period's return is `Σ w_i · r_i` over the weighted columns. A period
/// where any column with a non-zero weight is missing is missing in the
/// result, so an all-zero allocation is identically zero. Weights are
/// used exactly as given; sums away from 100% are reported, never rescaled.
///
/// # Errors
///
/// Returns an error only if the resulting series cannot be built.
pub fn compose_portfolio(
    returns: &ReturnTable,
    weights: &WeightVector,
    name: &str,
    tolerance: f64,
) -> AnalyticsResult<PortfolioSeries> {
    let (aligned, mut warnings) = align_weights(returns, weights);

    let weight_sum: f64 = aligned.iter().map(|(_, w)| w).sum();
    if (weight_sum - 1.0).abs() > tolerance {
        warnings.push(AnalyticsWarning::WeightSumMismatch {
            realized: weight_sum,
        });
    }

    let values = returns
        .rows()
        .iter()
        .map(|row| {
            aligned
                .iter()
                .filter(|(_, w)| *w != 0.0)
                .map(|(idx, w)| row[*idx].map(|r| w * r))
                .sum::<Option<f64>>()
        })
        .collect();

    let series = ReturnSeries::new(name, returns.dates().to_vec(), values)?;
    Ok(PortfolioSeries {
        series,
        weight_sum,
        warnings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use vantage_core::Date;

    fn table() -> ReturnTable {
        let dates = (1..=3).map(|m| Date::from_ymd(2024, m, 1).unwrap()).collect();
        ReturnTable::new(
            vec!["Cash".into(), "Equity".into()],
            dates,
            vec![
                vec![Some(0.004), Some(0.05)],
                vec![Some(0.004), None],
                vec![Some(0.003), Some(-0.02)],
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_weighted_sum() {
        let weights = WeightVector::new([("Cash", 0.4), ("Equity", 0.6)]).unwrap();
        let p = compose_portfolio(&table(), &weights, "Growth", DEFAULT_WEIGHT_SUM_TOLERANCE)
            .unwrap();

        assert_eq!(p.series.name(), "Growth");
        assert!(p.warnings.is_empty());
        assert_relative_eq!(p.weight_sum, 1.0);
        assert_relative_eq!(p.series.values()[0].unwrap(), 0.0016 + 0.03, epsilon = 1e-15);
        assert_eq!(p.series.values()[1], None);
        assert_relative_eq!(p.series.values()[2].unwrap(), 0.0012 - 0.012, epsilon = 1e-15);
    }

    #[test]
    fn test_unknown_asset_and_sum_mismatch() {
        let weights = WeightVector::new([("Cash", 0.5), ("Crypto", 0.5)]).unwrap();
        let p = compose_portfolio(&table(), &weights, "Odd", DEFAULT_WEIGHT_SUM_TOLERANCE)
            .unwrap();

        assert_relative_eq!(p.weight_sum, 0.5);
        assert!(p.warnings.contains(&AnalyticsWarning::UnknownAsset {
            asset: "Crypto".into()
        }));
        assert!(p
            .warnings
            .contains(&AnalyticsWarning::WeightSumMismatch { realized: 0.5 }));
        // Weights are not rescaled
        assert_relative_eq!(p.series.values()[0].unwrap(), 0.002, epsilon = 1e-15);
    }

    #[test]
    fn test_zero_weights_give_zero_series() {
        let weights = WeightVector::new([("Cash", 0.0), ("Equity", 0.0)]).unwrap();
        let p = compose_portfolio(&table(), &weights, "Empty", DEFAULT_WEIGHT_SUM_TOLERANCE)
            .unwrap();
        assert!(p.series.values().iter().all(|v| *v == Some(0.0)));
        assert!(p
            .warnings
            .contains(&AnalyticsWarning::WeightSumMismatch { realized: 0.0 }));
    }
}
