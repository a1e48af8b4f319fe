//! Missing-data handling policy.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How missing price observations are treated before returns are computed.
///
/// Source spreadsheets mix series that start late, skip holidays or stop
/// early. The policy is chosen by the caller; the engine never guesses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MissingDataPolicy {
    /// Leave gaps in place; returns touching a gap are undefined.
    #[default]
    Keep,
    /// Carry the last observed level forward. Leading gaps stay missing.
    ForwardFill,
    /// Drop every row that has at least one missing value.
    DropAny,
    /// Drop rows in which every value is missing.
    DropAll,
}

impl MissingDataPolicy {
    /// Returns a short code for the policy.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Keep => "keep",
            Self::ForwardFill => "ffill",
            Self::DropAny => "drop-any",
            Self::DropAll => "drop-all",
        }
    }
}

impl fmt::Display for MissingDataPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
