//! Named date-indexed curves for rendering.

use serde::Serialize;
use vantage_core::{Date, ReturnSeries};

use crate::returns::cumulative_growth;
use crate::risk::drawdown;

/// A named, fully populated curve aligned with a date index.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NamedCurve {
    /// Profile, benchmark or column name.
    pub name: String,

    /// Curve dates.
    pub dates: Vec<Date>,

    /// Curve values, one per date.
    pub values: Vec<f64>,
}

impl NamedCurve {
    /// Cumulative growth scaled to start from `base`.
    ///
    /// The first point is the level before the first return period, dated
    /// `start`, so a base-100 curve always begins at exactly 100.
    #[must_use]
    pub fn cumulative(series: &ReturnSeries, start: Date, base: f64) -> Self {
        let mut dates = Vec::with_capacity(series.len() + 1);
        dates.push(start);
        dates.extend_from_slice(series.dates());

        let mut values = Vec::with_capacity(series.len() + 1);
        values.push(base);
        values.extend(cumulative_growth(series).into_iter().map(|g| g * base));

        Self {
            name: series.name().to_string(),
            dates,
            values,
        }
    }

    /// Drawdown from the running peak, one point per return period.
    #[must_use]
    pub fn drawdown(series: &ReturnSeries) -> Self {
        Self {
            name: series.name().to_string(),
            dates: series.dates().to_vec(),
            values: drawdown(series),
        }
    }

    /// Returns the last value.
    #[must_use]
    pub fn last(&self) -> Option<f64> {
        self.values.last().copied()
    }

    /// Returns the number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the curve has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
