//! Sampling frequency and annualization factor types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sampling frequency of a price series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Frequency {
    /// Trading days (252 per year)
    Daily,
    /// Weekly observations (52 per year)
    Weekly,
    /// Monthly observations (12 per year)
    #[default]
    Monthly,
    /// Quarterly observations (4 per year)
    Quarterly,
    /// Annual observations (1 per year)
    Annual,
}

impl Frequency {
    /// Returns the number of return periods per year.
    #[must_use]
    pub fn periods_per_year(&self) -> u32 {
        match self {
            Frequency::Daily => 252,
            Frequency::Weekly => 52,
            Frequency::Monthly => 12,
            Frequency::Quarterly => 4,
            Frequency::Annual => 1,
        }
    }

    /// Maps a periods-per-year factor back to a named frequency, if one matches.
    #[must_use]
    pub fn from_periods_per_year(periods: u32) -> Option<Self> {
        match periods {
            252 => Some(Frequency::Daily),
            52 => Some(Frequency::Weekly),
            12 => Some(Frequency::Monthly),
            4 => Some(Frequency::Quarterly),
            1 => Some(Frequency::Annual),
            _ => None,
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Frequency::Daily => "Daily",
            Frequency::Weekly => "Weekly",
            Frequency::Monthly => "Monthly",
            Frequency::Quarterly => "Quarterly",
            Frequency::Annual => "Annual",
        };
        write!(f, "{name}")
    }
}

/// How the annualization factor of an analysis is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PeriodsPerYear {
    /// Inferred from the median spacing of the observation dates.
    #[default]
    Inferred,
    /// Supplied by the caller.
    Fixed(u32),
}

impl From<Frequency> for PeriodsPerYear {
    fn from(freq: Frequency) -> Self {
        PeriodsPerYear::Fixed(freq.periods_per_year())
    }
}
