//! Benchmark composition.
//!
//! Benchmarks are added to a return table as ordinary columns so profiles and
//! benchmarks flow through the same metrics code.

use vantage_core::{
    BenchmarkComponent, BenchmarkDefinition, BenchmarkKind, ReturnTable, VantageError,
};

use crate::annualization::{annualize_from_levels, flat_period_rate, infer_periods_per_year};
use crate::error::{AnalyticsError, AnalyticsResult};

/// Appends one column per benchmark definition.
///
/// Definitions are applied in order, so a later definition may reference an
/// earlier benchmark by name.
///
/// # Errors
///
/// - `MissingColumn` if a definition references an absent column
/// - `Data(InvalidInput)` if a composite has no components
/// - `Data(DuplicateColumn)` if a definition's name is already a column
/// - `InsufficientData` if a flat benchmark's column has no observations
pub fn compose_benchmarks(
    returns: &ReturnTable,
    definitions: &[BenchmarkDefinition],
) -> AnalyticsResult<ReturnTable> {
    let mut table = returns.clone();
    for definition in definitions {
        let values = match &definition.kind {
            BenchmarkKind::Composite { components } => {
                composite_values(&table, &definition.name, components)?
            }
            BenchmarkKind::FlatAnnualized {
                column,
                periods_per_year,
            } => flat_values(&table, column, *periods_per_year)?,
        };
        table = table.with_column(definition.name.clone(), values)?;
        tracing::debug!(benchmark = %definition.name, "composed benchmark");
    }
    Ok(table)
}

/// `Σ coefficient · return` per period; `None` where any term is missing.
fn composite_values(
    table: &ReturnTable,
    name: &str,
    components: &[BenchmarkComponent],
) -> AnalyticsResult<Vec<Option<f64>>> {
    if components.is_empty() {
        let reason = format!("benchmark '{name}' has no components");
        return Err(VantageError::invalid_input(reason).into());
    }

    let terms = components
        .iter()
        .map(|c| {
            table
                .column_index(&c.column)
                .map(|idx| (idx, c.coefficient))
                .ok_or_else(|| AnalyticsError::missing_column(c.column.clone()))
        })
        .collect::<AnalyticsResult<Vec<_>>>()?;

    Ok(table
        .rows()
        .iter()
        .map(|row| {
            terms
                .iter()
                .map(|(idx, coeff)| row[*idx].map(|r| coeff * r))
                .sum::<Option<f64>>()
        })
        .collect())
}

/// Constant per-period rate matching the column's annualized level growth.
fn flat_values(
    table: &ReturnTable,
    column: &str,
    periods_per_year: Option<u32>,
) -> AnalyticsResult<Vec<Option<f64>>> {
    let series = table.column(column)?;
    let periods = series.observed_count();
    if periods == 0 {
        return Err(AnalyticsError::insufficient_data("flat benchmark", 1, 0));
    }

    let ppy = match periods_per_year {
        Some(ppy) if ppy > 0 => ppy,
        Some(_) => {
            return Err(AnalyticsError::calculation_failed(
                "periods per year must be positive",
            ))
        }
        None => infer_periods_per_year(table.dates())?,
    };

    let ratio: f64 = series.observed().map(|r| 1.0 + r).product();
    let annualized = annualize_from_levels(1.0, ratio, periods, ppy)?;
    let rate = flat_period_rate(annualized, ppy);

    tracing::debug!(column, annualized, rate, ppy, "flat benchmark rate");
    Ok(vec![Some(rate); table.len()])
}
