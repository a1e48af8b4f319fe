//! Date-indexed tables of price levels and periodic returns.

use serde::Serialize;
use std::collections::HashSet;

use super::{Date, MissingDataPolicy, ReturnSeries};
use crate::error::{VantageError, VantageResult};

/// A date-indexed table of price levels, one column per asset or index.
///
/// Invariants checked on construction:
///
/// - column names are unique
/// - dates are strictly increasing
/// - every row has one cell per column
/// - every present level is finite and non-negative
///
/// A `None` cell is an explicitly missing observation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceTable {
    columns: Vec<String>,
    dates: Vec<Date>,
    rows: Vec<Vec<Option<f64>>>,
}

impl PriceTable {
    /// Creates a validated price table.
    pub fn new(
        columns: Vec<String>,
        dates: Vec<Date>,
        rows: Vec<Vec<Option<f64>>>,
    ) -> VantageResult<Self> {
        validate_shape(&columns, &dates, &rows)?;

        for (date, row) in dates.iter().zip(&rows) {
            for (column, cell) in columns.iter().zip(row) {
                if let Some(value) = cell {
                    if !value.is_finite() || *value < 0.0 {
                        return Err(VantageError::InvalidValue {
                            column: column.clone(),
                            date: date.to_string(),
                            value: *value,
                        });
                    }
                }
            }
        }

        Ok(Self {
            columns,
            dates,
            rows,
        })
    }

    /// Returns the column names in table order.
    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Returns the observation dates.
    #[must_use]
    pub fn dates(&self) -> &[Date] {
        &self.dates
    }

    /// Returns the rows, each aligned with [`columns`](Self::columns).
    #[must_use]
    pub fn rows(&self) -> &[Vec<Option<f64>>] {
        &self.rows
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Returns true if the table has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Returns the position of a column.
    #[must_use]
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Returns one column's levels.
    pub fn column(&self, name: &str) -> VantageResult<Vec<Option<f64>>> {
        let idx = self
            .column_index(name)
            .ok_or_else(|| VantageError::missing_column(name))?;
        Ok(self.rows.iter().map(|row| row[idx]).collect())
    }

    /// Returns the earliest observation date.
    #[must_use]
    pub fn first_date(&self) -> Option<Date> {
        self.dates.first().copied()
    }

    /// Returns the latest observation date.
    #[must_use]
    pub fn last_date(&self) -> Option<Date> {
        self.dates.last().copied()
    }

    /// Returns the rows dated within `[start, end]`, inclusive.
    #[must_use]
    pub fn slice(&self, start: Date, end: Date) -> Self {
        let (dates, rows) = self
            .dates
            .iter()
            .zip(&self.rows)
            .filter(|(d, _)| **d >= start && **d <= end)
            .map(|(d, r)| (*d, r.clone()))
            .unzip();

        Self {
            columns: self.columns.clone(),
            dates,
            rows,
        }
    }

    /// Rescales every column so its first observed level equals `base`.
    ///
    /// A column whose first observed level is zero cannot be rescaled and
    /// becomes entirely missing.
    #[must_use]
    pub fn rebase(&self, base: f64) -> Self {
        let anchors: Vec<Option<f64>> = (0..self.columns.len())
            .map(|idx| self.rows.iter().find_map(|row| row[idx]))
            .collect();

        let rows = self
            .rows
            .iter()
            .map(|row| {
                row.iter()
                    .zip(&anchors)
                    .map(|(cell, anchor)| match (cell, anchor) {
                        (Some(v), Some(a)) if *a > 0.0 => Some(v / a * base),
                        _ => None,
                    })
                    .collect()
            })
            .collect();

        Self {
            columns: self.columns.clone(),
            dates: self.dates.clone(),
            rows,
        }
    }

    /// Applies a missing-data policy, producing a new table.
    #[must_use]
    pub fn apply_missing_policy(&self, policy: MissingDataPolicy) -> Self {
        match policy {
            MissingDataPolicy::Keep => self.clone(),
            MissingDataPolicy::ForwardFill => {
                let mut last: Vec<Option<f64>> = vec![None; self.columns.len()];
                let rows = self
                    .rows
                    .iter()
                    .map(|row| {
                        row.iter()
                            .enumerate()
                            .map(|(idx, cell)| {
                                if cell.is_some() {
                                    last[idx] = *cell;
                                }
                                last[idx]
                            })
                            .collect()
                    })
                    .collect();
                Self {
                    columns: self.columns.clone(),
                    dates: self.dates.clone(),
                    rows,
                }
            }
            MissingDataPolicy::DropAny => self.retain_rows(|row| row.iter().all(Option::is_some)),
            MissingDataPolicy::DropAll => self.retain_rows(|row| row.iter().any(Option::is_some)),
        }
    }

    fn retain_rows(&self, keep: impl Fn(&[Option<f64>]) -> bool) -> Self {
        let (dates, rows) = self
            .dates
            .iter()
            .zip(&self.rows)
            .filter(|(_, row)| keep(row))
            .map(|(d, r)| (*d, r.clone()))
            .unzip();

        Self {
            columns: self.columns.clone(),
            dates,
            rows,
        }
    }
}

/// A date-indexed table of simple periodic returns.
///
/// Built from a [`PriceTable`] by the return calculator, then extended with
/// benchmark columns. Cells are `None` where the return is undefined.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReturnTable {
    columns: Vec<String>,
    dates: Vec<Date>,
    rows: Vec<Vec<Option<f64>>>,
}

impl ReturnTable {
    /// Creates a validated return table.
    pub fn new(
        columns: Vec<String>,
        dates: Vec<Date>,
        rows: Vec<Vec<Option<f64>>>,
    ) -> VantageResult<Self> {
        validate_shape(&columns, &dates, &rows)?;
        Ok(Self {
            columns,
            dates,
            rows,
        })
    }

    /// Returns the column names in table order.
    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Returns the period end dates.
    #[must_use]
    pub fn dates(&self) -> &[Date] {
        &self.dates
    }

    /// Returns the rows, each aligned with [`columns`](Self::columns).
    #[must_use]
    pub fn rows(&self) -> &[Vec<Option<f64>>] {
        &self.rows
    }

    /// Returns the number of return periods.
    #[must_use]
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Returns true if the table has no periods.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Returns the position of a column.
    #[must_use]
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Returns true if the column exists.
    #[must_use]
    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Extracts one column as a named series.
    pub fn column(&self, name: &str) -> VantageResult<ReturnSeries> {
        let idx = self
            .column_index(name)
            .ok_or_else(|| VantageError::missing_column(name))?;
        ReturnSeries::new(
            name,
            self.dates.clone(),
            self.rows.iter().map(|row| row[idx]).collect(),
        )
    }

    /// Returns a new table with an extra column appended.
    pub fn with_column(
        &self,
        name: impl Into<String>,
        values: Vec<Option<f64>>,
    ) -> VantageResult<Self> {
        let name = name.into();
        if self.has_column(&name) {
            return Err(VantageError::duplicate_column(name));
        }
        if values.len() != self.len() {
            return Err(VantageError::invalid_input(format!(
                "column '{name}' has {} values for {} periods",
                values.len(),
                self.len()
            )));
        }

        let mut columns = self.columns.clone();
        columns.push(name);
        let rows = self
            .rows
            .iter()
            .zip(values)
            .map(|(row, value)| {
                let mut row = row.clone();
                row.push(value);
                row
            })
            .collect();

        Ok(Self {
            columns,
            dates: self.dates.clone(),
            rows,
        })
    }
}

fn validate_shape(
    columns: &[String],
    dates: &[Date],
    rows: &[Vec<Option<f64>>],
) -> VantageResult<()> {
    let mut seen = HashSet::with_capacity(columns.len());
    for column in columns {
        if !seen.insert(column.as_str()) {
            return Err(VantageError::duplicate_column(column.clone()));
        }
    }

    if dates.len() != rows.len() {
        return Err(VantageError::invalid_input(format!(
            "{} dates for {} rows",
            dates.len(),
            rows.len()
        )));
    }

    for pair in dates.windows(2) {
        if pair[1] <= pair[0] {
            return Err(VantageError::UnsortedDates {
                previous: pair[0].to_string(),
                next: pair[1].to_string(),
            });
        }
    }

    for (date, row) in dates.iter().zip(rows) {
        if row.len() != columns.len() {
            return Err(VantageError::invalid_input(format!(
                "row {date} has {} cells for {} columns",
                row.len(),
                columns.len()
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(m: u32) -> Date {
        Date::from_ymd(2024, m, 1).unwrap()
    }

    fn cols(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| (*s).to_string()).collect()
    }

    fn sample() -> PriceTable {
        PriceTable::new(
            cols(&["A", "B"]),
            vec![d(1), d(2), d(3), d(4)],
            vec![
                vec![Some(100.0), None],
                vec![Some(101.0), Some(50.0)],
                vec![None, Some(51.0)],
                vec![Some(103.0), Some(52.0)],
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_rejects_duplicate_columns() {
        let err = PriceTable::new(cols(&["A", "A"]), vec![d(1)], vec![vec![Some(1.0), Some(1.0)]])
            .unwrap_err();
        assert_eq!(err, VantageError::duplicate_column("A"));
    }

    #[test]
    fn test_rejects_unsorted_dates() {
        let err = PriceTable::new(
            cols(&["A"]),
            vec![d(2), d(1)],
            vec![vec![Some(1.0)], vec![Some(1.0)]],
        )
        .unwrap_err();
        assert!(matches!(err, VantageError::UnsortedDates { .. }));

        let err = PriceTable::new(
            cols(&["A"]),
            vec![d(1), d(1)],
            vec![vec![Some(1.0)], vec![Some(1.0)]],
        )
        .unwrap_err();
        assert!(matches!(err, VantageError::UnsortedDates { .. }));
    }

    #[test]
    fn test_rejects_negative_and_nan_levels() {
        let err = PriceTable::new(cols(&["A"]), vec![d(1)], vec![vec![Some(-1.0)]]).unwrap_err();
        assert!(matches!(err, VantageError::InvalidValue { .. }));

        let err =
            PriceTable::new(cols(&["A"]), vec![d(1)], vec![vec![Some(f64::NAN)]]).unwrap_err();
        assert!(matches!(err, VantageError::InvalidValue { .. }));
    }

    #[test]
    fn test_rejects_ragged_rows() {
        let err = PriceTable::new(cols(&["A", "B"]), vec![d(1)], vec![vec![Some(1.0)]]);
        assert!(err.is_err());
    }

    #[test]
    fn test_column_access() {
        let table = sample();
        assert_eq!(table.column("B").unwrap()[1], Some(50.0));
        assert_eq!(
            table.column("Z").unwrap_err(),
            VantageError::missing_column("Z")
        );
        assert_eq!(table.first_date(), Some(d(1)));
        assert_eq!(table.last_date(), Some(d(4)));
    }

    #[test]
    fn test_slice_is_inclusive() {
        let table = sample().slice(d(2), d(3));
        assert_eq!(table.dates(), &[d(2), d(3)]);
        assert_eq!(table.columns(), sample().columns());
    }

    #[test]
    fn test_rebase_to_100() {
        let table = sample().rebase(100.0);
        assert_eq!(table.rows()[0][0], Some(100.0));
        // B first observed at 50.0 on the second row
        assert_eq!(table.rows()[1][1], Some(100.0));
        assert!((table.rows()[3][1].unwrap() - 104.0).abs() < 1e-12);
        assert_eq!(table.rows()[0][1], None);
    }

    #[test]
    fn test_forward_fill() {
        let table = sample().apply_missing_policy(MissingDataPolicy::ForwardFill);
        assert_eq!(table.rows()[2][0], Some(101.0));
        // leading gap stays missing
        assert_eq!(table.rows()[0][1], None);
        assert_eq!(table.len(), 4);
    }

    #[test]
    fn test_drop_any_and_drop_all() {
        let dropped = sample().apply_missing_policy(MissingDataPolicy::DropAny);
        assert_eq!(dropped.dates(), &[d(2), d(4)]);

        let table = PriceTable::new(
            cols(&["A", "B"]),
            vec![d(1), d(2)],
            vec![vec![None, None], vec![Some(1.0), None]],
        )
        .unwrap();
        let dropped = table.apply_missing_policy(MissingDataPolicy::DropAll);
        assert_eq!(dropped.dates(), &[d(2)]);
    }

    #[test]
    fn test_return_table_with_column() {
        let returns = ReturnTable::new(
            cols(&["A"]),
            vec![d(2), d(3)],
            vec![vec![Some(0.01)], vec![Some(-0.02)]],
        )
        .unwrap();

        let extended = returns.with_column("B", vec![Some(0.0), None]).unwrap();
        assert_eq!(extended.columns(), &cols(&["A", "B"])[..]);
        assert_eq!(extended.column("B").unwrap().values(), &[Some(0.0), None]);

        // Input is untouched
        assert_eq!(returns.columns().len(), 1);

        assert!(matches!(
            extended.with_column("A", vec![None, None]),
            Err(VantageError::DuplicateColumn { .. })
        ));
        assert!(extended.with_column("C", vec![None]).is_err());
    }
}
