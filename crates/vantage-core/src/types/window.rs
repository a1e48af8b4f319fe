//! Analysis period selection.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::Date;
use crate::error::{VantageError, VantageResult};

/// Which slice of the price history an analysis covers.
///
/// Windows are anchored on the last available date. A start falling before
/// the first available date is clamped to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DateWindow {
    /// The full history.
    #[default]
    Max,
    /// From January 1st of the last date's year.
    YearToDate,
    /// The trailing `months` months.
    TrailingMonths {
        /// Window length in months.
        months: u32,
    },
    /// Explicit inclusive bounds.
    Custom {
        /// First date of the window.
        start: Date,
        /// Last date of the window.
        end: Date,
    },
}

impl DateWindow {
    /// Trailing twelve months.
    pub const TRAILING_12M: Self = Self::TrailingMonths { months: 12 };

    /// Trailing thirty-six months.
    pub const TRAILING_36M: Self = Self::TrailingMonths { months: 36 };

    /// Resolves the window to inclusive `(start, end)` dates for data spanning
    /// `first..=last`.
    ///
    /// # Errors
    ///
    /// `InvalidWindow` when a custom window is inverted or lies outside the data.
    pub fn resolve(&self, first: Date, last: Date) -> VantageResult<(Date, Date)> {
        if first > last {
            return Err(VantageError::invalid_window(format!(
                "data range {first}..{last} is inverted"
            )));
        }

        let (start, end) = match *self {
            Self::Max => (first, last),
            Self::YearToDate => (last.start_of_year(), last),
            Self::TrailingMonths { months } => {
                let months = i32::try_from(months).map_err(|_| {
                    VantageError::invalid_window(format!("{months} months is out of range"))
                })?;
                (last.add_months(-months)?, last)
            }
            Self::Custom { start, end } => {
                if start > end {
                    return Err(VantageError::invalid_window(format!(
                        "start {start} is after end {end}"
                    )));
                }
                if end < first || start > last {
                    return Err(VantageError::invalid_window(format!(
                        "{start}..{end} does not overlap data range {first}..{last}"
                    )));
                }
                (start, end.min(last))
            }
        };

        Ok((start.max(first), end))
    }
}

impl fmt::Display for DateWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Max => write!(f, "max"),
            Self::YearToDate => write!(f, "ytd"),
            Self::TrailingMonths { months } => write!(f, "{months}m"),
            Self::Custom { start, end } => write!(f, "{start}..{end}"),
        }
    }
}

impl FromStr for DateWindow {
    type Err = VantageError;

    /// Parses `max`, `ytd`, `<n>m` or `<start>..<end>`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_ascii_lowercase();
        match s.as_str() {
            "max" | "all" => Ok(Self::Max),
            "ytd" => Ok(Self::YearToDate),
            _ => {
                if let Some((start, end)) = s.split_once("..") {
                    return Ok(Self::Custom {
                        start: Date::parse(start)?,
                        end: Date::parse(end)?,
                    });
                }
                s.strip_suffix('m')
                    .and_then(|n| n.parse::<u32>().ok())
                    .filter(|n| *n > 0)
                    .map(|months| Self::TrailingMonths { months })
                    .ok_or_else(|| VantageError::invalid_window(format!("unrecognised window '{s}'")))
            }
        }
    }
}
