//! # Vantage Analytics
//!
//! Return and risk analytics for multi-asset allocation profiles.
//!
//! This crate turns a table of price levels into per-profile performance and
//! risk statistics:
//! - **Returns**: Simple periodic returns, cumulative growth
//! - **Benchmarks**: Composite and hybrid blends, CPI-style flat targets
//! - **Annualization**: Compounded mean return, scaled volatility, frequency inference
//! - **Portfolio**: Weighted return series per profile
//! - **Risk**: Covariance, volatility, MCTR, Sharpe, drawdown, correlation
//! - **Report**: One-call pipeline producing a metrics table and curves
//!
//! ## Architecture
//!
//! Every stage is a pure function producing new values. Non-fatal conditions
//! (undefined Sharpe ratios, weight sums away from 100%, unknown assets) are
//! returned as [`AnalyticsWarning`]s next to the results; only data-shape
//! problems are errors.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use vantage_analytics::prelude::*;
//! use vantage_core::prelude::*;
//!
//! let request = AnalysisRequest::new(profiles)
//!     .with_benchmark(BenchmarkDefinition::hybrid("20/80", "Equity", "Global Agg", 0.2))
//!     .with_benchmark(BenchmarkDefinition::flat_annualized("CPI target", "CPI", None))
//!     .with_window(DateWindow::TRAILING_36M)
//!     .with_periods_per_year(Frequency::Monthly.into());
//!
//! let report = analyze(&prices, &request, &AnalyticsConfig::default())?;
//! for row in report.profiles() {
//!     println!("{}: {:.2}% / {:.2}%", row.name, row.annualized_return * 100.0, row.annualized_volatility * 100.0);
//! }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod annualization;
pub mod benchmark;
pub mod config;
pub mod curve;
pub mod error;
pub mod metrics;
pub mod parallel;
pub mod portfolio;
pub mod report;
pub mod returns;
pub mod risk;
pub mod warning;

pub use annualization::{
    annualize_from_levels, annualize_return, annualize_vol, annualized_return,
    annualized_volatility, flat_period_rate, infer_periods_per_year, resolve_periods_per_year,
};
pub use benchmark::compose_benchmarks;
pub use config::AnalyticsConfig;
pub use curve::NamedCurve;
pub use error::{AnalyticsError, AnalyticsResult};
pub use metrics::{metrics, MetricsOutcome, MetricsRecord, SeriesKind};
pub use portfolio::{compose_portfolio, PortfolioSeries, DEFAULT_WEIGHT_SUM_TOLERANCE};
pub use report::{analyze, AnalysisReport, AnalysisRequest, ProfileFailure};
pub use returns::{compute_returns, cumulative_growth, returns_from_growth};
pub use risk::{
    correlation, correlation_of, covariance_matrix, drawdown, max_drawdown, portfolio_volatility,
    risk_decomposition, sharpe_ratio, AssetRiskContribution, CorrelationMatrix, ReferenceRate,
    RiskDecomposition,
};
pub use warning::{AnalyticsWarning, ReportWarning};

/// Prelude module for convenient imports.
///
/// ```rust,ignore
/// use vantage_analytics::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::AnalyticsConfig;
    pub use crate::error::{AnalyticsError, AnalyticsResult};
    pub use crate::warning::{AnalyticsWarning, ReportWarning};

    // Pipeline
    pub use crate::benchmark::compose_benchmarks;
    pub use crate::portfolio::{compose_portfolio, PortfolioSeries};
    pub use crate::report::{analyze, AnalysisReport, AnalysisRequest, ProfileFailure};
    pub use crate::returns::{compute_returns, cumulative_growth};

    // Annualization
    pub use crate::annualization::{
        annualize_from_levels, annualize_return, annualize_vol, annualized_return,
        annualized_volatility, infer_periods_per_year,
    };

    // Metrics and curves
    pub use crate::curve::NamedCurve;
    pub use crate::metrics::{metrics, MetricsOutcome, MetricsRecord, SeriesKind};

    // Risk
    pub use crate::risk::{
        correlation, covariance_matrix, drawdown, max_drawdown, portfolio_volatility,
        risk_decomposition, sharpe_ratio, AssetRiskContribution, CorrelationMatrix,
        ReferenceRate, RiskDecomposition,
    };
}
