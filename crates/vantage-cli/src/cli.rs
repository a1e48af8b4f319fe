//! CLI argument definitions.

use clap::{Parser, Subcommand, ValueEnum};

use crate::commands::{CorrelationArgs, DrawdownArgs, ReportArgs, ReturnsArgs, RiskArgs};

/// Vantage - risk/return analytics for model allocations
#[derive(Parser)]
#[command(name = "vantage")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Suppress analytics warnings on stderr
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Log pipeline stages to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Metrics for every profile and benchmark in a request
    Report(ReportArgs),

    /// Volatility decomposition by asset for each profile
    Risk(RiskArgs),

    /// Correlation matrix of the asset return columns
    Correlation(CorrelationArgs),

    /// Drawdown summary or curves for profiles and benchmarks
    Drawdown(DrawdownArgs),

    /// Periodic or cumulative returns of the asset columns
    Returns(ReturnsArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
}
