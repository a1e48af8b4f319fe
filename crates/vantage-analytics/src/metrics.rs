//! Per-series summary metrics.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use vantage_core::ReturnSeries;

use crate::annualization::{annualized_return, annualized_volatility};
use crate::error::AnalyticsResult;
use crate::returns::cumulative_growth;
use crate::risk::{max_drawdown, sharpe_ratio, ZERO_VOLATILITY};
use crate::warning::AnalyticsWarning;

/// What a metrics row describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SeriesKind {
    /// A weighted allocation.
    Profile,
    /// A composed benchmark.
    Benchmark,
    /// A single return column.
    Asset,
}

impl fmt::Display for SeriesKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SeriesKind::Profile => "profile",
            SeriesKind::Benchmark => "benchmark",
            SeriesKind::Asset => "asset",
        };
        write!(f, "{name}")
    }
}

/// Summary statistics of one return series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsRecord {
    /// Series name.
    pub name: String,

    /// What the series describes.
    pub kind: SeriesKind,

    /// Compounded mean periodic return.
    pub annualized_return: f64,

    /// Sample standard deviation scaled by `sqrt(ppy)`.
    pub annualized_volatility: f64,

    /// Excess return over the reference per unit of volatility; NaN when
    /// volatility is zero.
    pub sharpe_ratio: f64,

    /// Largest peak-to-trough decline (non-positive).
    pub max_drawdown: f64,

    /// Cumulative return over the window.
    pub total_return: f64,

    /// Number of observed periods.
    pub observations: usize,

    /// Realized weight sum (profiles only).
    pub weight_sum: Option<f64>,

    /// Share of volatility per asset (profiles only).
    pub risk_contributions: Option<BTreeMap<String, f64>>,
}

/// A metrics record and the undefined values met computing it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsOutcome {
    /// The metrics.
    pub record: MetricsRecord,

    /// Undefined-metric warnings.
    pub warnings: Vec<AnalyticsWarning>,
}

/// Computes summary metrics of a return series.
///
/// `reference` is the annual rate subtracted in the Sharpe ratio. A
/// volatility at or below [`ZERO_VOLATILITY`] is reported as zero and makes
/// the Sharpe ratio NaN with an `UndefinedMetric` warning.
///
/// # Errors
///
/// Returns `InsufficientData` when the series has fewer than two observed
/// periods.
pub fn metrics(
    series: &ReturnSeries,
    periods_per_year: u32,
    reference: f64,
) -> AnalyticsResult<MetricsOutcome> {
    let ann_return = annualized_return(series, periods_per_year)?;
    let mut ann_vol = annualized_volatility(series, periods_per_year)?;

    let mut warnings = Vec::new();
    if ann_vol <= ZERO_VOLATILITY {
        ann_vol = 0.0;
        warnings.push(AnalyticsWarning::undefined(
            "sharpe_ratio",
            "annualized volatility is zero",
        ));
    }

    let total_return = cumulative_growth(series).last().map_or(0.0, |g| g - 1.0);

    let record = MetricsRecord {
        name: series.name().to_string(),
        kind: SeriesKind::Asset,
        annualized_return: ann_return,
        annualized_volatility: ann_vol,
        sharpe_ratio: sharpe_ratio(ann_return, reference, ann_vol),
        max_drawdown: max_drawdown(series),
        total_return,
        observations: series.observed_count(),
        weight_sum: None,
        risk_contributions: None,
    };

    Ok(MetricsOutcome { record, warnings })
}
