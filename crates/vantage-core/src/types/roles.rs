//! Explicit column roles.
//!
//! The engine never searches column names for hints such as "TREASURY" or
//! "10Y". A caller states which column plays which role.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::error::{VantageError, VantageResult};

/// The part a column plays in an analysis.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ColumnRole {
    /// Risk-free reference rate (e.g. short treasury).
    RiskFree,
    /// Cash sleeve.
    Cash,
    /// Consumer price index level.
    Inflation,
    /// Global aggregate bond index.
    AggregateBond,
    /// Broad equity index.
    Equity,
    /// Any other caller-defined role.
    Custom(String),
}

impl ColumnRole {
    /// Returns the role's key as used in configuration files.
    #[must_use]
    pub fn key(&self) -> &str {
        match self {
            Self::RiskFree => "risk_free",
            Self::Cash => "cash",
            Self::Inflation => "inflation",
            Self::AggregateBond => "aggregate_bond",
            Self::Equity => "equity",
            Self::Custom(name) => name,
        }
    }
}

impl From<String> for ColumnRole {
    fn from(key: String) -> Self {
        match key.as_str() {
            "risk_free" => Self::RiskFree,
            "cash" => Self::Cash,
            "inflation" => Self::Inflation,
            "aggregate_bond" => Self::AggregateBond,
            "equity" => Self::Equity,
            _ => Self::Custom(key),
        }
    }
}

impl From<ColumnRole> for String {
    fn from(role: ColumnRole) -> Self {
        role.key().to_string()
    }
}

impl fmt::Display for ColumnRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Caller-supplied mapping from roles to column names.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoleMap {
    roles: BTreeMap<ColumnRole, String>,
}

impl RoleMap {
    /// Creates an empty mapping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Assigns a column to a role, replacing any previous assignment.
    #[must_use]
    pub fn with(mut self, role: ColumnRole, column: impl Into<String>) -> Self {
        self.roles.insert(role, column.into());
        self
    }

    /// Returns the column mapped to a role, if any.
    #[must_use]
    pub fn get(&self, role: &ColumnRole) -> Option<&str> {
        self.roles.get(role).map(String::as_str)
    }

    /// Returns the column mapped to a role.
    ///
    /// # Errors
    ///
    /// `MissingRole` when the role was never mapped.
    pub fn resolve(&self, role: &ColumnRole) -> VantageResult<&str> {
        self.get(role).ok_or_else(|| VantageError::MissingRole {
            role: role.to_string(),
        })
    }

    /// Iterates over the mapped roles.
    pub fn iter(&self) -> impl Iterator<Item = (&ColumnRole, &str)> + '_ {
        self.roles.iter().map(|(r, c)| (r, c.as_str()))
    }
}
