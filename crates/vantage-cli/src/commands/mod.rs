//! CLI command implementations.

pub mod correlation;
pub mod drawdown;
pub mod report;
pub mod returns;
pub mod risk;

// Re-export submodules for convenience
pub use correlation::CorrelationArgs;
pub use drawdown::DrawdownArgs;
pub use report::ReportArgs;
pub use returns::ReturnsArgs;
pub use risk::RiskArgs;

use std::path::{Path, PathBuf};

use clap::{Args, ValueEnum};
use vantage_analytics::{analyze, compute_returns, AnalysisReport};
use vantage_core::{Date, DateWindow, MissingDataPolicy, PriceTable, ReturnTable};
use vantage_ext_file::{load_analysis, load_price_csv};

use crate::error::{CliError, CliResult};

/// Price data and window selection shared by every command.
#[derive(Args, Debug, Clone)]
pub struct DataArgs {
    /// Price table CSV: a Date column plus one column of levels per asset
    #[arg(short, long, env = "VANTAGE_PRICES")]
    pub prices: PathBuf,

    /// Analysis window: max, ytd, 12m, 36m, <n>m or <start>..<end>
    #[arg(short, long, conflicts_with_all = ["start", "end"])]
    pub window: Option<String>,

    /// Window start (YYYY-MM-DD). Defaults to the first price date.
    #[arg(long)]
    pub start: Option<String>,

    /// Window end (YYYY-MM-DD). Defaults to the last price date.
    #[arg(long)]
    pub end: Option<String>,

    /// Missing-data policy; overrides the request file
    #[arg(long, value_enum)]
    pub missing: Option<MissingArg>,
}

/// Missing-data policy options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MissingArg {
    /// Leave gaps; periods touching a gap are undefined
    Keep,
    /// Carry the last level forward
    ForwardFill,
    /// Drop dates where any column is missing
    DropAny,
    /// Drop dates where every column is missing
    DropAll,
}

impl From<MissingArg> for MissingDataPolicy {
    fn from(arg: MissingArg) -> Self {
        match arg {
            MissingArg::Keep => MissingDataPolicy::Keep,
            MissingArg::ForwardFill => MissingDataPolicy::ForwardFill,
            MissingArg::DropAny => MissingDataPolicy::DropAny,
            MissingArg::DropAll => MissingDataPolicy::DropAll,
        }
    }
}

impl DataArgs {
    /// Loads the price table.
    pub fn load_prices(&self) -> CliResult<PriceTable> {
        Ok(load_price_csv(&self.prices)?)
    }

    /// The window named by the flags, if any.
    pub fn window(&self, prices: &PriceTable) -> CliResult<Option<DateWindow>> {
        if let Some(ref text) = self.window {
            return text
                .parse()
                .map(Some)
                .map_err(|_| CliError::InvalidWindow(text.clone()));
        }
        if self.start.is_none() && self.end.is_none() {
            return Ok(None);
        }

        let (first, last) = prices
            .first_date()
            .zip(prices.last_date())
            .ok_or_else(|| CliError::InvalidWindow("price table is empty".to_string()))?;
        let start = self.start.as_deref().map(parse_date).transpose()?;
        let end = self.end.as_deref().map(parse_date).transpose()?;
        Ok(Some(DateWindow::Custom {
            start: start.unwrap_or(first),
            end: end.unwrap_or(last),
        }))
    }
}

/// Parses a date string in YYYY-MM-DD format.
pub fn parse_date(s: &str) -> CliResult<Date> {
    Date::parse(s).map_err(|_| CliError::InvalidDate(s.to_string()))
}

/// Loads prices and a request file, applies flag overrides, and analyzes.
pub fn run_analysis(data: &DataArgs, request: &Path) -> CliResult<AnalysisReport> {
    let prices = data.load_prices()?;
    let mut file = load_analysis(request)?;

    if let Some(window) = data.window(&prices)? {
        file.request.window = window;
    }
    if let Some(missing) = data.missing {
        file.config.missing_data = missing.into();
    }

    Ok(analyze(&prices, &file.request, &file.config)?)
}

/// Price levels over the selected window, after the missing-data policy.
pub fn windowed_prices(data: &DataArgs) -> CliResult<PriceTable> {
    let prices = data.load_prices()?;
    let window = data.window(&prices)?.unwrap_or_default();
    let policy = data.missing.map_or(MissingDataPolicy::Keep, Into::into);

    let (first, last) = prices
        .first_date()
        .zip(prices.last_date())
        .ok_or_else(|| CliError::InvalidWindow("price table is empty".to_string()))?;
    let (start, end) = window.resolve(first, last)?;
    let sliced = prices.slice(start, end).apply_missing_policy(policy);
    tracing::debug!(%window, %start, %end, rows = sliced.len(), "windowed price table");
    Ok(sliced)
}

/// Periodic returns of the price columns over the selected window, with the
/// date of the first price row.
pub fn windowed_returns(data: &DataArgs) -> CliResult<(Date, ReturnTable)> {
    let prices = windowed_prices(data)?;
    let start = prices
        .first_date()
        .ok_or_else(|| CliError::InvalidWindow("window holds no prices".to_string()))?;
    Ok((start, compute_returns(&prices)?))
}

/// Keeps the named columns, in the given order; all of `available` when none
/// are named.
pub fn select_columns(available: &[String], columns: &[String]) -> CliResult<Vec<String>> {
    if columns.is_empty() {
        return Ok(available.to_vec());
    }
    columns
        .iter()
        .map(|c| {
            if available.contains(c) {
                Ok(c.clone())
            } else {
                Err(CliError::UnknownSeries(c.clone()))
            }
        })
        .collect()
}
