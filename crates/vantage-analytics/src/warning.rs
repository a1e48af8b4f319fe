//! Non-fatal analytics conditions.
//!
//! These are reported alongside results instead of aborting a computation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A condition the caller must be able to see but that does not stop the
/// computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AnalyticsWarning {
    /// A metric has no defined value (e.g. Sharpe at zero volatility) and is NaN.
    UndefinedMetric {
        /// Name of the metric.
        metric: String,
        /// Why the value is undefined.
        reason: String,
    },

    /// Allocation weights do not sum to 100%; results use the weights as given.
    WeightSumMismatch {
        /// The realized sum of weights applied to existing columns.
        realized: f64,
    },

    /// A weight was given for an asset that is not a column of the return table.
    UnknownAsset {
        /// The asset name.
        asset: String,
    },
}

impl AnalyticsWarning {
    /// Creates an undefined metric warning.
    #[must_use]
    pub fn undefined(metric: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::UndefinedMetric {
            metric: metric.into(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for AnalyticsWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UndefinedMetric { metric, reason } => {
                write!(f, "{metric} is undefined: {reason}")
            }
            Self::WeightSumMismatch { realized } => {
                write!(f, "weights sum to {:.2}% instead of 100%", realized * 100.0)
            }
            Self::UnknownAsset { asset } => {
                write!(f, "weight given for unknown asset '{asset}' was ignored")
            }
        }
    }
}

/// A warning attributed to the profile, benchmark or step that raised it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportWarning {
    /// Profile, benchmark or pipeline step name.
    pub subject: String,

    /// The warning.
    #[serde(flatten)]
    pub warning: AnalyticsWarning,
}

impl fmt::Display for ReportWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.subject, self.warning)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let w = AnalyticsWarning::WeightSumMismatch { realized: 0.95 };
        assert_eq!(w.to_string(), "weights sum to 95.00% instead of 100%");

        let w = ReportWarning {
            subject: "Aggressive".to_string(),
            warning: AnalyticsWarning::UnknownAsset {
                asset: "Crypto".to_string(),
            },
        };
        assert!(w.to_string().starts_with("Aggressive: "));
        assert!(w.to_string().contains("'Crypto'"));
    }

    #[test]
    fn test_serde() {
        let w = AnalyticsWarning::undefined("sharpe_ratio", "zero volatility");
        let json = serde_json::to_string(&w).unwrap();
        assert!(json.contains("\"type\":\"undefined_metric\""));
        let parsed: AnalyticsWarning = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, w);
    }
}
