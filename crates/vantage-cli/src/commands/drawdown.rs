//! Drawdown command implementation.
//!
//! Summarizes the drawdown curve of every profile and benchmark, or prints
//! the curves themselves with `--curves`.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use vantage_analytics::NamedCurve;
use vantage_core::Date;

use crate::cli::OutputFormat;
use crate::commands::{run_analysis, DataArgs};
use crate::error::CliError;
use crate::output::{
    format_cell, format_percent, print_grid, print_header, print_json, print_output,
    print_failures, print_warnings,
};

/// Arguments for the drawdown command.
#[derive(Args, Debug)]
pub struct DrawdownArgs {
    #[command(flatten)]
    pub data: DataArgs,

    /// Analysis request (.toml or .json)
    #[arg(short, long, env = "VANTAGE_REQUEST")]
    pub request: PathBuf,

    /// Only show this profile or benchmark
    #[arg(long)]
    pub series: Option<String>,

    /// Print the full curves, one row per period
    #[arg(long)]
    pub curves: bool,
}

/// Drawdown summary of one series.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct DrawdownRow {
    #[tabled(rename = "Series")]
    pub name: String,
    #[tabled(rename = "Max Drawdown", display_with = "percent")]
    pub max_drawdown: f64,
    #[tabled(rename = "Trough", display_with = "date")]
    pub trough: Option<Date>,
    #[tabled(rename = "Current", display_with = "percent")]
    pub current: f64,
}

impl From<&NamedCurve> for DrawdownRow {
    fn from(curve: &NamedCurve) -> Self {
        let trough = curve
            .dates
            .iter()
            .zip(&curve.values)
            .filter(|(_, v)| **v < 0.0)
            .min_by(|a, b| a.1.total_cmp(b.1));
        Self {
            name: curve.name.clone(),
            max_drawdown: trough.map_or(0.0, |(_, v)| *v),
            trough: trough.map(|(d, _)| *d),
            current: curve.last().unwrap_or(0.0),
        }
    }
}

fn percent(value: &f64) -> String {
    format_percent(*value)
}

fn date(value: &Option<Date>) -> String {
    value.map_or_else(|| "-".to_string(), |d| d.to_string())
}

/// Execute the drawdown command.
pub fn execute(args: DrawdownArgs, format: OutputFormat, quiet: bool) -> Result<()> {
    let report = run_analysis(&args.data, &args.request)?;
    print_warnings(&report.warnings, quiet);
    print_failures(&report.failures);

    let curves: Vec<&NamedCurve> = match args.series {
        Some(ref name) => vec![report
            .drawdowns
            .iter()
            .find(|c| &c.name == name)
            .ok_or_else(|| CliError::UnknownSeries(name.clone()))?],
        None => report.drawdowns.iter().collect(),
    };

    if args.curves {
        return print_curves(&curves, format);
    }

    let rows: Vec<DrawdownRow> = curves.into_iter().map(DrawdownRow::from).collect();
    if format == OutputFormat::Table {
        print_header(&format!("Drawdowns {} to {}", report.start, report.end));
    }
    print_output(&rows, format)
}

/// All drawdown curves share the return dates of the window.
fn print_curves(curves: &[&NamedCurve], format: OutputFormat) -> Result<()> {
    if format == OutputFormat::Json {
        return print_json(curves);
    }

    let mut header = vec!["Date".to_string()];
    header.extend(curves.iter().map(|c| c.name.clone()));

    let dates = curves.first().map_or(&[][..], |c| c.dates.as_slice());
    let rows = dates
        .iter()
        .enumerate()
        .map(|(i, d)| {
            let mut row = vec![d.to_string()];
            row.extend(
                curves
                    .iter()
                    .map(|c| format_cell(c.values.get(i).copied(), format, format_percent)),
            );
            row
        })
        .collect();

    print_grid(header, rows, format)
}
