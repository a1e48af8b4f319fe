//! Named return series.

use serde::Serialize;

use super::Date;
use crate::error::{VantageError, VantageResult};

/// A named series of periodic returns, aligned with a date index.
///
/// Used for single asset columns, composed benchmarks and portfolio returns.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReturnSeries {
    name: String,
    dates: Vec<Date>,
    values: Vec<Option<f64>>,
}

impl ReturnSeries {
    /// Creates a series; `dates` and `values` must have equal length.
    pub fn new(
        name: impl Into<String>,
        dates: Vec<Date>,
        values: Vec<Option<f64>>,
    ) -> VantageResult<Self> {
        let name = name.into();
        if dates.len() != values.len() {
            return Err(VantageError::invalid_input(format!(
                "series '{name}' has {} dates and {} values",
                dates.len(),
                values.len()
            )));
        }
        Ok(Self {
            name,
            dates,
            values,
        })
    }

    /// Creates a series from fully observed values.
    pub fn from_values(
        name: impl Into<String>,
        dates: Vec<Date>,
        values: Vec<f64>,
    ) -> VantageResult<Self> {
        Self::new(name, dates, values.into_iter().map(Some).collect())
    }

    /// Returns the series name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the period dates.
    #[must_use]
    pub fn dates(&self) -> &[Date] {
        &self.dates
    }

    /// Returns the values, `None` where undefined.
    #[must_use]
    pub fn values(&self) -> &[Option<f64>] {
        &self.values
    }

    /// Iterates over the observed values, skipping gaps.
    pub fn observed(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().filter_map(|v| *v)
    }

    /// Returns the number of observed values.
    #[must_use]
    pub fn observed_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_some()).count()
    }

    /// Returns the number of periods, observed or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the series has no periods.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns a copy under another name.
    #[must_use]
    pub fn renamed(&self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            dates: self.dates.clone(),
            values: self.values.clone(),
        }
    }
}
