//! Drawdown from the running peak of cumulative growth.

use vantage_core::ReturnSeries;

use crate::returns::cumulative_growth;

/// Drawdown per period: `G[t] / max(G[0..=t]) - 1`.
///
/// `G` is the cumulative growth of the series. The running peak starts at the
/// first growth value, so the first period is never in drawdown and a curve
/// that never falls has zero drawdown throughout. Every value is at most zero.
#[must_use]
pub fn drawdown(series: &ReturnSeries) -> Vec<f64> {
    let mut peak = f64::NEG_INFINITY;
    cumulative_growth(series)
        .into_iter()
        .map(|level| {
            peak = peak.max(level);
            if peak > 0.0 {
                level / peak - 1.0
            } else {
                0.0
            }
        })
        .collect()
}

/// Largest peak-to-trough decline, as a non-positive fraction.
///
/// Zero for a series whose growth never falls, including an empty series.
#[must_use]
pub fn max_drawdown(series: &ReturnSeries) -> f64 {
    drawdown(series).into_iter().fold(0.0, f64::min)
}
