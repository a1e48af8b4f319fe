//! Annualization of periodic statistics.
//!
//! All conversions are explicit about the number of periods per year; the
//! only place a factor is guessed is [`infer_periods_per_year`].

use vantage_core::{Date, PeriodsPerYear, ReturnSeries};
use vantage_math::statistics::{mean, median, sample_std};

use crate::error::{AnalyticsError, AnalyticsResult};

/// Days per year used when inferring an observation frequency.
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Compounds a mean periodic return to an annual rate: `(1 + mean)^ppy - 1`.
#[must_use]
pub fn annualize_return(mean_period_return: f64, periods_per_year: u32) -> f64 {
    (1.0 + mean_period_return).powf(f64::from(periods_per_year)) - 1.0
}

/// Scales a periodic standard deviation to annual: `std * sqrt(ppy)`.
#[must_use]
pub fn annualize_vol(period_std: f64, periods_per_year: u32) -> f64 {
    period_std * f64::from(periods_per_year).sqrt()
}

/// Annual rate implied by growing from `start` to `end` over `periods`.
///
/// `(end / start)^(ppy / periods) - 1`
///
/// # Errors
///
/// Returns `InsufficientData` when `periods` is zero and `CalculationFailed`
/// when `start` is not positive.
pub fn annualize_from_levels(
    start: f64,
    end: f64,
    periods: usize,
    periods_per_year: u32,
) -> AnalyticsResult<f64> {
    if periods == 0 {
        return Err(AnalyticsError::insufficient_data("annualize_from_levels", 1, 0));
    }
    if start <= 0.0 {
        return Err(AnalyticsError::calculation_failed(format!(
            "starting level must be positive, got {start}"
        )));
    }
    let exponent = f64::from(periods_per_year) / periods as f64;
    Ok((end / start).powf(exponent) - 1.0)
}

/// Constant periodic rate that compounds to `annualized` over one year.
///
/// `(1 + annualized)^(1 / ppy) - 1`
#[must_use]
pub fn flat_period_rate(annualized: f64, periods_per_year: u32) -> f64 {
    (1.0 + annualized).powf(1.0 / f64::from(periods_per_year.max(1))) - 1.0
}

/// Infers periods per year from the median gap between dates.
///
/// Returns `round(365 / median_gap_days)`, at least 1. Month-end data
/// infers 12 and weekly data 52; daily business-day data infers about 365,
/// so callers that want 252 should pass it explicitly.
///
/// # Errors
///
/// Returns `InsufficientData` with fewer than two dates.
pub fn infer_periods_per_year(dates: &[Date]) -> AnalyticsResult<u32> {
    if dates.len() < 2 {
        return Err(AnalyticsError::insufficient_data(
            "infer_periods_per_year",
            2,
            dates.len(),
        ));
    }

    let gaps: Vec<f64> = dates
        .windows(2)
        .map(|pair| pair[0].days_between(&pair[1]) as f64)
        .collect();
    let gap = median(&gaps)?;
    if gap <= 0.0 {
        return Err(AnalyticsError::calculation_failed(
            "observation dates do not advance",
        ));
    }

    let ppy = (DAYS_PER_YEAR / gap).round().max(1.0);
    Ok(ppy as u32)
}

/// Resolves a periods-per-year setting against an index.
///
/// # Errors
///
/// Fails like [`infer_periods_per_year`] for the inferred setting, and with
/// `CalculationFailed` for a fixed value of zero.
pub fn resolve_periods_per_year(setting: PeriodsPerYear, dates: &[Date]) -> AnalyticsResult<u32> {
    match setting {
        PeriodsPerYear::Fixed(0) => Err(AnalyticsError::calculation_failed(
            "periods per year must be positive",
        )),
        PeriodsPerYear::Fixed(ppy) => Ok(ppy),
        PeriodsPerYear::Inferred => infer_periods_per_year(dates),
    }
}

/// Annualized return of a series: compounded mean of its observed values.
///
/// # Errors
///
/// Returns `InsufficientData` with fewer than two observed values.
pub fn annualized_return(series: &ReturnSeries, periods_per_year: u32) -> AnalyticsResult<f64> {
    let values = observed_at_least_two(series, "annualized_return")?;
    let m = mean(&values)?;
    Ok(annualize_return(m, periods_per_year))
}

/// Annualized volatility of a series: sample standard deviation (n - 1)
/// scaled by `sqrt(ppy)`.
///
/// # Errors
///
/// Returns `InsufficientData` with fewer than two observed values.
pub fn annualized_volatility(series: &ReturnSeries, periods_per_year: u32) -> AnalyticsResult<f64> {
    let values = observed_at_least_two(series, "annualized_volatility")?;
    let std = sample_std(&values)?;
    Ok(annualize_vol(std, periods_per_year))
}

fn observed_at_least_two(series: &ReturnSeries, operation: &str) -> AnalyticsResult<Vec<f64>> {
    let values: Vec<f64> = series.observed().collect();
    if values.len() < 2 {
        return Err(AnalyticsError::insufficient_data(operation, 2, values.len()));
    }
    Ok(values)
}
