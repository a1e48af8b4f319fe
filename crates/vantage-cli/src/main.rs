//! Vantage CLI - risk/return analytics for model allocations.
//!
//! # Usage
//!
//! ```bash
//! # Metrics for every profile and benchmark
//! vantage report --prices demos/prices.csv --request demos/request.toml
//!
//! # Risk decomposition of one profile over the last year
//! vantage risk -p demos/prices.csv -r demos/request.toml --profile Balanced --window 12m
//!
//! # Asset correlations as CSV
//! vantage correlation -p demos/prices.csv --format csv
//!
//! # Cumulative growth from 100
//! vantage returns -p demos/prices.csv --cumulative --start 2024-12-31
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
mod commands;
mod error;
mod output;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Analytics warnings are printed by the commands; keep the log to stages.
    let filter = if cli.verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("info,vantage_analytics=error"))
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let format = cli.format;
    let quiet = cli.quiet;

    match cli.command {
        Commands::Report(args) => commands::report::execute(args, format, quiet)?,
        Commands::Risk(args) => commands::risk::execute(args, format, quiet)?,
        Commands::Correlation(args) => commands::correlation::execute(args, format)?,
        Commands::Drawdown(args) => commands::drawdown::execute(args, format, quiet)?,
        Commands::Returns(args) => commands::returns::execute(args, format)?,
    }

    Ok(())
}
