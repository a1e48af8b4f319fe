//! Analysis request files.
//!
//! A request file holds the profiles, benchmarks, reference rate, roles and
//! window of one analysis, plus an optional `[config]` section. TOML and JSON
//! are both accepted and chosen by file extension.
//!
//! ```toml
//! weight_units = "percent"
//! window = { type = "trailing_months", months = 36 }
//! periods_per_year = { fixed = 12 }
//! reference = { type = "role", role = "risk_free" }
//!
//! [roles]
//! risk_free = "Treasury 3M"
//!
//! [[profiles]]
//! name = "Balanced"
//! weights = { "Cash" = 10, "Global Agg" = 50, "Equity" = 40 }
//!
//! [[benchmarks]]
//! name = "CPI + 0"
//! type = "flat_annualized"
//! column = "CPI"
//!
//! [config]
//! missing_data = "forward_fill"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use vantage_analytics::{AnalysisRequest, AnalyticsConfig};
use vantage_core::{Profile, WeightVector};

use crate::error::{FileError, FileResult};

/// Units of the weights in a request file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightUnits {
    /// 0.25 means 25%.
    #[default]
    Fraction,
    /// 25 means 25%.
    Percent,
}

/// A parsed request file: the request plus engine settings.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AnalysisFile {
    /// The analysis to run, with weights converted to fractions.
    pub request: AnalysisRequest,

    /// Engine settings from the `config` section, defaults when absent.
    pub config: AnalyticsConfig,
}

#[derive(Debug, Deserialize)]
struct RawAnalysisFile {
    #[serde(default)]
    weight_units: WeightUnits,

    #[serde(default)]
    config: Option<AnalyticsConfig>,

    #[serde(flatten)]
    request: AnalysisRequest,
}

impl RawAnalysisFile {
    fn into_analysis(self) -> FileResult<AnalysisFile> {
        let mut request = self.request;
        if self.weight_units == WeightUnits::Percent {
            request.profiles = request
                .profiles
                .into_iter()
                .map(|profile| {
                    let weights = WeightVector::from_percentages(profile.weights.iter())?;
                    Ok(Profile::new(profile.name, weights))
                })
                .collect::<FileResult<_>>()?;
        }
        Ok(AnalysisFile {
            request,
            config: self.config.unwrap_or_default(),
        })
    }
}

/// Request file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestFormat {
    /// TOML document.
    Toml,
    /// JSON document.
    Json,
}

impl RequestFormat {
    /// Picks the format from a path's extension.
    pub fn from_path(path: &Path) -> FileResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match ext.as_str() {
            "toml" => Ok(Self::Toml),
            "json" => Ok(Self::Json),
            _ => Err(FileError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Parses request text in the given format.
pub fn parse_analysis(content: &str, format: RequestFormat) -> FileResult<AnalysisFile> {
    let raw: RawAnalysisFile = match format {
        RequestFormat::Toml => toml::from_str(content)?,
        RequestFormat::Json => serde_json::from_str(content)?,
    };
    raw.into_analysis()
}

/// Loads a request file and its `config` section.
pub fn load_analysis(path: impl AsRef<Path>) -> FileResult<AnalysisFile> {
    let path = path.as_ref();
    let format = RequestFormat::from_path(path)?;
    let content = std::fs::read_to_string(path)
        .map_err(|e| FileError::Io(format!("{}: {e}", path.display())))?;
    let analysis = parse_analysis(&content, format)?;
    tracing::debug!(
        path = %path.display(),
        profiles = analysis.request.profiles.len(),
        benchmarks = analysis.request.benchmarks.len(),
        "loaded analysis request"
    );
    Ok(analysis)
}

/// Loads only the request from a request file.
pub fn load_request(path: impl AsRef<Path>) -> FileResult<AnalysisRequest> {
    load_analysis(path).map(|analysis| analysis.request)
}
