//! Risk analytics for allocation profiles.
//!
//! This module provides:
//!
//! - **Covariance**: Annualized sample covariance and portfolio volatility
//! - **Contribution**: Marginal contribution to total risk (MCTR) by asset
//! - **Sharpe**: Excess return per unit of volatility over a reference rate
//! - **Drawdown**: Running and maximum peak-to-trough decline
//! - **Correlation**: Pearson correlation matrix with listwise deletion
//!
//! # Example
//!
//! ```rust,ignore
//! use vantage_analytics::risk::prelude::*;
//!
//! let risk = risk_decomposition(&returns, &profile.weights, 12)?;
//! for (asset, share) in risk.shares() {
//!     println!("{asset}: {:.1}%", share * 100.0);
//! }
//! ```

pub mod contribution;
pub mod correlation;
pub mod covariance;
pub mod drawdown;
pub mod sharpe;

pub use contribution::{risk_decomposition, AssetRiskContribution, RiskDecomposition};
pub use correlation::{correlation, correlation_of, CorrelationMatrix};
pub use covariance::{complete_samples, covariance_matrix, portfolio_volatility, ZERO_VOLATILITY};
pub use drawdown::{drawdown, max_drawdown};
pub use sharpe::{sharpe_ratio, ReferenceRate};

/// Prelude for convenient imports
pub mod prelude {
    pub use super::contribution::*;
    pub use super::correlation::*;
    pub use super::covariance::*;
    pub use super::drawdown::*;
    pub use super::sharpe::*;
}
