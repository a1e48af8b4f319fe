//! Price levels to simple periodic returns, and back to growth curves.

use vantage_core::{PriceTable, ReturnSeries, ReturnTable};

use crate::error::{AnalyticsError, AnalyticsResult};

/// Computes simple returns `p[t] / p[t-1] - 1` for every column.
///
/// The result has one row fewer than `prices`, dated at the end of each
/// period. A cell is `None` when the current level is missing or the prior
/// level is missing or zero.
///
/// # Errors
///
/// Returns `InsufficientData` when the table has fewer than two rows.
pub fn compute_returns(prices: &PriceTable) -> AnalyticsResult<ReturnTable> {
    if prices.len() < 2 {
        return Err(AnalyticsError::insufficient_data(
            "compute_returns",
            2,
            prices.len(),
        ));
    }

    let rows = prices
        .rows()
        .windows(2)
        .map(|pair| {
            pair[0]
                .iter()
                .zip(&pair[1])
                .map(|(prev, curr)| match (prev, curr) {
                    (Some(p0), Some(p1)) if *p0 != 0.0 => Some(p1 / p0 - 1.0),
                    _ => None,
                })
                .collect()
        })
        .collect();

    let table = ReturnTable::new(
        prices.columns().to_vec(),
        prices.dates()[1..].to_vec(),
        rows,
    )?;

    tracing::debug!(
        periods = table.len(),
        columns = table.columns().len(),
        "computed returns"
    );
    Ok(table)
}

/// Compounds a return series into growth factors `Π(1 + r)`.
///
/// Missing periods carry the previous level forward. The curve starts from an
/// implicit level of 1.0 before the first period.
#[must_use]
pub fn cumulative_growth(series: &ReturnSeries) -> Vec<f64> {
    let mut level = 1.0;
    series
        .values()
        .iter()
        .map(|r| {
            if let Some(r) = r {
                level *= 1.0 + r;
            }
            level
        })
        .collect()
}

/// Recovers periodic returns from a growth curve that starts at 1.0.
///
/// The first return is measured against the implicit starting level; a zero
/// prior level yields `None`.
#[must_use]
pub fn returns_from_growth(growth: &[f64]) -> Vec<Option<f64>> {
    let mut prev = 1.0;
    growth
        .iter()
        .map(|&g| {
            let r = if prev == 0.0 { None } else { Some(g / prev - 1.0) };
            prev = g;
            r
        })
        .collect()
}
