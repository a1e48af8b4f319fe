//! Correlation command implementation.

use anyhow::Result;
use clap::Args;

use vantage_analytics::correlation_of;

use crate::cli::OutputFormat;
use crate::commands::{select_columns, windowed_returns, DataArgs};
use crate::output::{format_cell, format_ratio, print_grid, print_header, print_json};

/// Arguments for the correlation command.
#[derive(Args, Debug)]
pub struct CorrelationArgs {
    #[command(flatten)]
    pub data: DataArgs,

    /// Columns to include (comma-separated). Defaults to all.
    #[arg(short, long, value_delimiter = ',')]
    pub columns: Vec<String>,
}

/// Execute the correlation command.
pub fn execute(args: CorrelationArgs, format: OutputFormat) -> Result<()> {
    let (_, returns) = windowed_returns(&args.data)?;
    let columns = select_columns(returns.columns(), &args.columns)?;
    let names: Vec<&str> = columns.iter().map(String::as_str).collect();
    let matrix = correlation_of(&returns, &names)?;

    if format == OutputFormat::Json {
        return print_json(&matrix);
    }

    let mut header = vec![String::new()];
    header.extend(matrix.columns.iter().cloned());
    let rows = matrix
        .columns
        .iter()
        .zip(&matrix.values)
        .map(|(name, values)| {
            let mut row = vec![name.clone()];
            row.extend(
                values
                    .iter()
                    .map(|v| format_cell(Some(*v), format, format_ratio)),
            );
            row
        })
        .collect();

    if format == OutputFormat::Table {
        print_header(&format!(
            "Correlation over {} complete periods",
            matrix.observations
        ));
    }
    print_grid(header, rows, format)
}
