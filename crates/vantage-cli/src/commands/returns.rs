//! Returns command implementation.
//!
//! Prints the periodic returns of the price columns, their growth from a
//! base level with `--cumulative`, or the price levels rebased to that level
//! with `--levels`.

use std::collections::BTreeMap;

use anyhow::Result;
use clap::Args;

use vantage_analytics::NamedCurve;

use crate::cli::OutputFormat;
use crate::commands::{select_columns, windowed_prices, windowed_returns, DataArgs};
use crate::output::{format_cell, format_percent, format_ratio, print_grid, print_json};

/// Arguments for the returns command.
#[derive(Args, Debug)]
pub struct ReturnsArgs {
    #[command(flatten)]
    pub data: DataArgs,

    /// Columns to include (comma-separated). Defaults to all.
    #[arg(short, long, value_delimiter = ',')]
    pub columns: Vec<String>,

    /// Print cumulative growth instead of periodic returns
    #[arg(long, conflicts_with = "levels")]
    pub cumulative: bool,

    /// Print price levels rebased so each column starts at the base level
    #[arg(long)]
    pub levels: bool,

    /// Starting level of cumulative curves and rebased levels
    #[arg(long, default_value = "100")]
    pub base: f64,
}

/// Execute the returns command.
pub fn execute(args: ReturnsArgs, format: OutputFormat) -> Result<()> {
    if args.levels {
        return print_levels(&args, format);
    }

    let (start, returns) = windowed_returns(&args.data)?;
    let columns = select_columns(returns.columns(), &args.columns)?;
    let series = columns
        .iter()
        .map(|c| returns.column(c))
        .collect::<Result<Vec<_>, _>>()?;

    if args.cumulative {
        let curves: Vec<NamedCurve> = series
            .iter()
            .map(|s| NamedCurve::cumulative(s, start, args.base))
            .collect();
        return print_curves(&curves, format);
    }

    if format == OutputFormat::Json {
        return print_json(&series);
    }

    let mut header = vec!["Date".to_string()];
    header.extend(columns);
    let rows = returns
        .dates()
        .iter()
        .enumerate()
        .map(|(i, d)| {
            let mut row = vec![d.to_string()];
            row.extend(
                series
                    .iter()
                    .map(|s| format_cell(s.values()[i], format, format_percent)),
            );
            row
        })
        .collect();

    print_grid(header, rows, format)
}

fn print_levels(args: &ReturnsArgs, format: OutputFormat) -> Result<()> {
    let prices = windowed_prices(&args.data)?.rebase(args.base);
    let columns = select_columns(prices.columns(), &args.columns)?;
    let levels = columns
        .iter()
        .map(|c| prices.column(c))
        .collect::<Result<Vec<_>, _>>()?;

    if format == OutputFormat::Json {
        let named: BTreeMap<&str, &[Option<f64>]> = columns
            .iter()
            .map(String::as_str)
            .zip(levels.iter().map(Vec::as_slice))
            .collect();
        return print_json(&named);
    }

    let mut header = vec!["Date".to_string()];
    header.extend(columns);
    let rows = prices
        .dates()
        .iter()
        .enumerate()
        .map(|(i, d)| {
            let mut row = vec![d.to_string()];
            row.extend(levels.iter().map(|l| format_cell(l[i], format, format_ratio)));
            row
        })
        .collect();

    print_grid(header, rows, format)
}

fn print_curves(curves: &[NamedCurve], format: OutputFormat) -> Result<()> {
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
                    .map(|c| format_cell(c.values.get(i).copied(), format, format_ratio)),
            );
            row
        })
        .collect();

    print_grid(header, rows, format)
}
