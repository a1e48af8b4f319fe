//! Benchmark definitions.

use serde::{Deserialize, Serialize};

/// One term of a composite benchmark.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkComponent {
    /// Return column the term reads.
    pub column: String,

    /// Coefficient applied to the column's return.
    pub coefficient: f64,
}

/// How a benchmark's return series is derived.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BenchmarkKind {
    /// Linear combination of existing return columns.
    ///
    /// Coefficients usually sum to one but this is not required.
    Composite {
        /// Terms of the combination.
        components: Vec<BenchmarkComponent>,
    },

    /// Constant per-period rate equivalent to the column's annualized growth
    /// over the whole window (CPI-style target).
    FlatAnnualized {
        /// Column whose growth is annualized.
        column: String,

        /// Annualization factor; inferred from the dates when absent.
        #[serde(default)]
        periods_per_year: Option<u32>,
    },
}

/// A named benchmark series to add to a return table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkDefinition {
    /// Name of the resulting column.
    pub name: String,

    /// Derivation rule.
    #[serde(flatten)]
    pub kind: BenchmarkKind,
}

impl BenchmarkDefinition {
    /// Creates a composite benchmark from `(column, coefficient)` pairs.
    #[must_use]
    pub fn composite<I, S>(name: impl Into<String>, components: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            kind: BenchmarkKind::Composite {
                components: components
                    .into_iter()
                    .map(|(column, coefficient)| BenchmarkComponent {
                        column: column.into(),
                        coefficient,
                    })
                    .collect(),
            },
        }
    }

    /// 100% of a single column, e.g. the global aggregate bond index.
    #[must_use]
    pub fn single(name: impl Into<String>, column: impl Into<String>) -> Self {
        let column: String = column.into();
        Self::composite(name, [(column, 1.0)])
    }

    /// `equity_share` of one column blended with the remainder of another.
    ///
    /// `hybrid("10/90", "Equity", "Global Agg", 0.10)` is 10% equity and 90%
    /// aggregate bonds.
    #[must_use]
    pub fn hybrid(
        name: impl Into<String>,
        equity_column: impl Into<String>,
        bond_column: impl Into<String>,
        equity_share: f64,
    ) -> Self {
        let equity_column: String = equity_column.into();
        let bond_column: String = bond_column.into();
        Self::composite(
            name,
            [
                (equity_column, equity_share),
                (bond_column, 1.0 - equity_share),
            ],
        )
    }

    /// Flat per-period rate from the column's annualized growth.
    #[must_use]
    pub fn flat_annualized(
        name: impl Into<String>,
        column: impl Into<String>,
        periods_per_year: Option<u32>,
    ) -> Self {
        Self {
            name: name.into(),
            kind: BenchmarkKind::FlatAnnualized {
                column: column.into(),
                periods_per_year,
            },
        }
    }

    /// Returns every column the definition reads.
    #[must_use]
    pub fn referenced_columns(&self) -> Vec<&str> {
        match &self.kind {
            BenchmarkKind::Composite { components } => {
                components.iter().map(|c| c.column.as_str()).collect()
            }
            BenchmarkKind::FlatAnnualized { column, .. } => vec![column.as_str()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_hybrid_coefficients() {
        let def = BenchmarkDefinition::hybrid("20/80", "Equity", "Agg", 0.2);
        match def.kind {
            BenchmarkKind::Composite { components } => {
                assert_eq!(components.len(), 2);
                assert_relative_eq!(components[0].coefficient, 0.2);
                assert_relative_eq!(components[1].coefficient, 0.8);
                assert_eq!(components[1].column, "Agg");
            }
            BenchmarkKind::FlatAnnualized { .. } => panic!("expected composite"),
        }
    }

    #[test]
    fn test_referenced_columns() {
        let def = BenchmarkDefinition::flat_annualized("CPI target", "CPI", Some(12));
        assert_eq!(def.referenced_columns(), vec!["CPI"]);
    }

    #[test]
    fn test_serde_tagged() {
        let json = r#"{"name": "Agg", "type": "composite",
                       "components": [{"column": "Global Agg", "coefficient": 1.0}]}"#;
        let def: BenchmarkDefinition = serde_json::from_str(json).unwrap();
        assert_eq!(def, BenchmarkDefinition::single("Agg", "Global Agg"));

        let json = r#"{"name": "CPI", "type": "flat_annualized", "column": "CPI"}"#;
        let def: BenchmarkDefinition = serde_json::from_str(json).unwrap();
        assert_eq!(def, BenchmarkDefinition::flat_annualized("CPI", "CPI", None));
    }
}
