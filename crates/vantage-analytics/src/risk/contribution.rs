//! Marginal contribution to total risk (MCTR).
//!
//! For weights `w` and annualized covariance `Σ` with `σ = sqrt(wᵀΣw)`:
//!
//! - marginal:     `∂σ/∂wᵢ = (Σw)ᵢ / σ`
//! - contribution: `wᵢ · ∂σ/∂wᵢ`, summing to `σ`
//! - share:        `contribution / σ`, summing to 1

use nalgebra::DVector;
use serde::Serialize;
use vantage_core::{ReturnTable, WeightVector};
use vantage_math::linear_algebra::matrix_vector;

use super::covariance::{covariance_matrix, portfolio_volatility};
use crate::error::AnalyticsResult;
use crate::portfolio::align_weights;
use crate::warning::AnalyticsWarning;

/// Risk attributed to one asset of an allocation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssetRiskContribution {
    /// Asset column name.
    pub asset: String,

    /// Allocation weight.
    pub weight: f64,

    /// Marginal contribution to total risk.
    pub marginal: f64,

    /// Weighted contribution to volatility.
    pub contribution: f64,

    /// Fraction of total volatility.
    pub share: f64,
}

/// Decomposition of an allocation's annualized volatility by asset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskDecomposition {
    /// Profile name; empty when decomposed outside an analysis.
    pub name: String,

    /// Annualized portfolio volatility.
    pub volatility: f64,

    /// One entry per weighted asset, in asset order.
    pub contributions: Vec<AssetRiskContribution>,

    /// Unknown assets and undefined contributions.
    pub warnings: Vec<AnalyticsWarning>,
}

impl RiskDecomposition {
    /// Returns `(asset, share)` pairs.
    pub fn shares(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.contributions.iter().map(|c| (c.asset.as_str(), c.share))
    }

    /// Returns one asset's share of total risk.
    #[must_use]
    pub fn share(&self, asset: &str) -> Option<f64> {
        self.contributions
            .iter()
            .find(|c| c.asset == asset)
            .map(|c| c.share)
    }

    /// Returns the `n` largest contributors by share.
    ///
    /// Undefined (NaN) shares sort last.
    #[must_use]
    pub fn top_contributors(&self, n: usize) -> Vec<&AssetRiskContribution> {
        let mut sorted: Vec<&AssetRiskContribution> = self.contributions.iter().collect();
        sorted.sort_by(|a, b| match (a.share.is_nan(), b.share.is_nan()) {
            (false, false) => b.share.total_cmp(&a.share),
            (x, y) => x.cmp(&y),
        });
        sorted.truncate(n);
        sorted
    }
}

/// Decomposes an allocation's volatility into per-asset contributions.
///
/// Assets without a return column are skipped with an `UnknownAsset`
/// warning; zero weights carry no risk and are left out. The covariance is
/// estimated over the rows where every remaining asset is observed. When the
/// portfolio volatility is zero the marginal figures are undefined: they are
/// NaN and an `UndefinedMetric` warning is attached.
///
/// # Errors
///
/// Returns `InsufficientData` with fewer than two complete rows.
pub fn risk_decomposition(
    returns: &ReturnTable,
    weights: &WeightVector,
    periods_per_year: u32,
) -> AnalyticsResult<RiskDecomposition> {
    let (aligned, mut warnings) = align_weights(returns, weights);
    let held: Vec<(usize, f64)> = aligned.into_iter().filter(|(_, w)| *w != 0.0).collect();

    if held.is_empty() {
        warnings.push(AnalyticsWarning::undefined(
            "risk_contribution",
            "allocation holds no assets",
        ));
        return Ok(RiskDecomposition {
            name: String::new(),
            volatility: 0.0,
            contributions: Vec::new(),
            warnings,
        });
    }

    let columns: Vec<&str> = held
        .iter()
        .map(|(idx, _)| returns.columns()[*idx].as_str())
        .collect();
    let cov = covariance_matrix(returns, &columns, periods_per_year)
        .map_err(|e| e.during("risk_decomposition"))?;
    let w = DVector::from_iterator(held.len(), held.iter().map(|(_, w)| *w));

    let volatility = portfolio_volatility(&w, &cov)?;
    let marginal = if volatility > 0.0 {
        matrix_vector(&cov, &w)? / volatility
    } else {
        warnings.push(AnalyticsWarning::undefined(
            "risk_contribution",
            "portfolio volatility is zero",
        ));
        DVector::from_element(held.len(), f64::NAN)
    };

    let contributions = columns
        .iter()
        .zip(held.iter())
        .zip(marginal.iter())
        .map(|((asset, (_, weight)), m)| {
            let contribution = weight * m;
            AssetRiskContribution {
                asset: (*asset).to_string(),
                weight: *weight,
                marginal: *m,
                contribution,
                share: contribution / volatility,
            }
        })
        .collect();

    Ok(RiskDecomposition {
        name: String::new(),
        volatility,
        contributions,
        warnings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use vantage_core::Date;

    fn table() -> ReturnTable {
        let dates = (1..=6).map(|m| Date::from_ymd(2024, m, 1).unwrap()).collect();
        ReturnTable::new(
            vec!["Cash".into(), "Bonds".into(), "Equity".into()],
            dates,
            vec![
                vec![Some(0.003), Some(0.010), Some(0.040)],
                vec![Some(0.004), Some(-0.005), Some(-0.030)],
                vec![Some(0.003), Some(0.012), Some(0.055)],
                vec![Some(0.004), Some(0.002), Some(-0.012)],
                vec![Some(0.005), Some(-0.008), Some(0.021)],
                vec![Some(0.004), Some(0.006), Some(-0.044)],
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_shares_sum_to_one() {
        let weights =
            WeightVector::new([("Cash", 0.1), ("Bonds", 0.5), ("Equity", 0.4)]).unwrap();
        let risk = risk_decomposition(&table(), &weights, 12).unwrap();

        assert!(risk.volatility > 0.0);
        assert!(risk.warnings.is_empty());
        let total: f64 = risk.shares().map(|(_, s)| s).sum();
        assert_relative_eq!(total, 1.0, epsilon = 1e-9);

        let contributed: f64 = risk.contributions.iter().map(|c| c.contribution).sum();
        assert_relative_eq!(contributed, risk.volatility, epsilon = 1e-12);

        // Equity dominates the risk budget
        assert_eq!(risk.top_contributors(1)[0].asset, "Equity");
    }

    #[test]
    fn test_zero_volatility_is_undefined() {
        let weights = WeightVector::new([("Cash", 1.0)]).unwrap();
        let flat = ReturnTable::new(
            vec!["Cash".into()],
            (1..=3).map(|m| Date::from_ymd(2024, m, 1).unwrap()).collect(),
            vec![vec![Some(0.004)]; 3],
        )
        .unwrap();
        let risk = risk_decomposition(&flat, &weights, 12).unwrap();

        assert_eq!(risk.volatility, 0.0);
        assert!(risk.share("Cash").unwrap().is_nan());
        assert!(matches!(
            risk.warnings[0],
            AnalyticsWarning::UndefinedMetric { .. }
        ));
    }

    #[test]
    fn test_unknown_and_zero_weights_are_skipped() {
        let weights =
            WeightVector::new([("Bonds", 0.5), ("Equity", 0.5), ("Cash", 0.0), ("Gold", 0.1)])
                .unwrap();
        let risk = risk_decomposition(&table(), &weights, 12).unwrap();

        assert_eq!(risk.contributions.len(), 2);
        assert!(risk.share("Cash").is_none());
        assert!(risk.warnings.contains(&AnalyticsWarning::UnknownAsset {
            asset: "Gold".into()
        }));
    }

    #[test]
    fn test_marginal_matches_finite_difference() {
        let weights =
            WeightVector::new([("Cash", 0.2), ("Bonds", 0.3), ("Equity", 0.5)]).unwrap();
        let risk = risk_decomposition(&table(), &weights, 12).unwrap();

        let bump = 1e-6;
        let bumped =
            WeightVector::new([("Cash", 0.2), ("Bonds", 0.3), ("Equity", 0.5 + bump)]).unwrap();
        let vol_up = risk_decomposition(&table(), &bumped, 12).unwrap().volatility;
        let fd = (vol_up - risk.volatility) / bump;

        let equity = risk.contributions.iter().find(|c| c.asset == "Equity").unwrap();
        assert_relative_eq!(equity.marginal, fd, epsilon = 1e-4);
    }
}
