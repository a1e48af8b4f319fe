//! Report command implementation.
//!
//! Runs a full analysis and prints one metrics row per profile and benchmark.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use vantage_analytics::{AnalysisReport, MetricsRecord, SeriesKind};

use crate::cli::OutputFormat;
use crate::commands::{run_analysis, DataArgs};
use crate::output::{
    format_percent, format_ratio, print_header, print_info, print_json, print_output,
    print_failures, print_warnings,
};

/// Arguments for the report command.
#[derive(Args, Debug)]
pub struct ReportArgs {
    #[command(flatten)]
    pub data: DataArgs,

    /// Analysis request (.toml or .json)
    #[arg(short, long, env = "VANTAGE_REQUEST")]
    pub request: PathBuf,

    /// Only show profiles
    #[arg(long, conflicts_with = "benchmarks_only")]
    pub profiles_only: bool,

    /// Only show benchmarks
    #[arg(long)]
    pub benchmarks_only: bool,
}

/// One metrics row.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct MetricsRow {
    #[tabled(rename = "Series")]
    pub name: String,
    #[tabled(rename = "Kind")]
    pub kind: SeriesKind,
    #[tabled(rename = "Ann. Return", display_with = "percent")]
    pub annualized_return: f64,
    #[tabled(rename = "Ann. Volatility", display_with = "percent")]
    pub annualized_volatility: f64,
    #[tabled(rename = "Sharpe", display_with = "ratio")]
    pub sharpe_ratio: f64,
    #[tabled(rename = "Max Drawdown", display_with = "percent")]
    pub max_drawdown: f64,
    #[tabled(rename = "Total Return", display_with = "percent")]
    pub total_return: f64,
    #[tabled(rename = "Obs")]
    pub observations: usize,
    /// Realized weight sum; blank for benchmarks.
    #[tabled(rename = "Weight Sum", display_with = "weight_sum")]
    pub weight_sum: Option<f64>,
}

impl From<&MetricsRecord> for MetricsRow {
    fn from(record: &MetricsRecord) -> Self {
        Self {
            name: record.name.clone(),
            kind: record.kind,
            annualized_return: record.annualized_return,
            annualized_volatility: record.annualized_volatility,
            sharpe_ratio: record.sharpe_ratio,
            max_drawdown: record.max_drawdown,
            total_return: record.total_return,
            observations: record.observations,
            weight_sum: record.weight_sum,
        }
    }
}

fn percent(value: &f64) -> String {
    format_percent(*value)
}

fn ratio(value: &f64) -> String {
    format_ratio(*value)
}

fn weight_sum(value: &Option<f64>) -> String {
    value.map(format_percent).unwrap_or_default()
}

/// Execute the report command.
pub fn execute(args: ReportArgs, format: OutputFormat, quiet: bool) -> Result<()> {
    let report = run_analysis(&args.data, &args.request)?;
    print_warnings(&report.warnings, quiet);
    print_failures(&report.failures);

    let rows: Vec<MetricsRow> = report
        .metrics
        .iter()
        .filter(|m| match m.kind {
            SeriesKind::Profile => !args.benchmarks_only,
            SeriesKind::Benchmark => !args.profiles_only,
            SeriesKind::Asset => true,
        })
        .map(MetricsRow::from)
        .collect();

    match format {
        OutputFormat::Json => print_json(&report)?,
        OutputFormat::Csv => print_output(&rows, format)?,
        OutputFormat::Table => {
            print_header(&title(&report));
            print_output(&rows, format)?;
            print_info(&format!(
                "Sharpe ratios net of a {} annual reference rate",
                format_percent(report.reference_rate)
            ));
        }
    }

    Ok(())
}

fn title(report: &AnalysisReport) -> String {
    format!(
        "Analysis {} to {} ({} periods/year)",
        report.start, report.end, report.periods_per_year
    )
}
