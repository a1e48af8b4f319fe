//! Risk command implementation.
//!
//! Decomposes each profile's volatility into per-asset contributions.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use vantage_analytics::{AssetRiskContribution, RiskDecomposition};

use crate::cli::OutputFormat;
use crate::commands::{run_analysis, DataArgs};
use crate::error::CliError;
use crate::output::{
    format_percent, format_ratio, print_failures, print_header, print_json, print_output,
    print_warnings,
};

/// Arguments for the risk command.
#[derive(Args, Debug)]
pub struct RiskArgs {
    #[command(flatten)]
    pub data: DataArgs,

    /// Analysis request (.toml or .json)
    #[arg(short, long, env = "VANTAGE_REQUEST")]
    pub request: PathBuf,

    /// Only decompose this profile
    #[arg(long)]
    pub profile: Option<String>,

    /// Show only the largest contributors
    #[arg(long)]
    pub top: Option<usize>,
}

/// One asset of one profile.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct RiskRow {
    #[tabled(skip)]
    pub profile: String,
    #[tabled(rename = "Asset")]
    pub asset: String,
    #[tabled(rename = "Weight", display_with = "percent")]
    pub weight: f64,
    #[tabled(rename = "Marginal", display_with = "ratio")]
    pub marginal: f64,
    #[tabled(rename = "Contribution", display_with = "percent")]
    pub contribution: f64,
    #[tabled(rename = "Share of Risk", display_with = "percent")]
    pub share: f64,
}

impl RiskRow {
    fn new(profile: &str, contribution: &AssetRiskContribution) -> Self {
        Self {
            profile: profile.to_string(),
            asset: contribution.asset.clone(),
            weight: contribution.weight,
            marginal: contribution.marginal,
            contribution: contribution.contribution,
            share: contribution.share,
        }
    }
}

fn percent(value: &f64) -> String {
    format_percent(*value)
}

fn ratio(value: &f64) -> String {
    format_ratio(*value)
}

fn rows(risk: &RiskDecomposition, top: Option<usize>) -> Vec<RiskRow> {
    let contributions = match top {
        Some(n) => risk.top_contributors(n),
        None => risk.contributions.iter().collect(),
    };
    contributions
        .into_iter()
        .map(|c| RiskRow::new(&risk.name, c))
        .collect()
}

/// Execute the risk command.
pub fn execute(args: RiskArgs, format: OutputFormat, quiet: bool) -> Result<()> {
    let report = run_analysis(&args.data, &args.request)?;
    print_warnings(&report.warnings, quiet);
    print_failures(&report.failures);

    let selected: Vec<&RiskDecomposition> = match args.profile {
        Some(ref name) => vec![report
            .risk_for(name)
            .ok_or_else(|| CliError::UnknownSeries(name.clone()))?],
        None => report.risk.iter().collect(),
    };

    match format {
        OutputFormat::Json => print_json(&selected)?,
        OutputFormat::Csv => {
            let all: Vec<RiskRow> = selected.iter().flat_map(|r| rows(r, args.top)).collect();
            print_output(&all, format)?;
        }
        OutputFormat::Table => {
            for risk in selected {
                print_header(&format!(
                    "{}: volatility {}",
                    risk.name,
                    format_percent(risk.volatility)
                ));
                print_output(&rows(risk, args.top), format)?;
            }
        }
    }

    Ok(())
}
