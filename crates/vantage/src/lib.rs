//! # Vantage
//!
//! Risk/return analytics for model allocations: periodic returns from price
//! levels, composed benchmarks, annualized metrics, Sharpe ratios, drawdowns,
//! correlation and per-asset risk contribution.
//!
//! This crate re-exports the public API of the workspace crates:
//!
//! - [`vantage_core`]: dates, windows, price/return tables, weights, benchmarks
//! - [`vantage_math`]: sample statistics and covariance algebra
//! - [`vantage_analytics`]: the engine, ending in [`analyze`]
//! - `vantage_ext_file`: CSV and TOML/JSON loaders (feature `file`, on by default)
//!
//! ```rust
//! use vantage::prelude::*;
//!
//! let dates = (0..4)
//!     .map(|i| Date::from_ymd(2024, 1, 31).unwrap().add_months(i).unwrap())
//!     .collect();
//! let prices = PriceTable::new(
//!     vec!["Bonds".into(), "Equity".into()],
//!     dates,
//!     vec![
//!         vec![Some(100.0), Some(100.0)],
//!         vec![Some(100.5), Some(103.0)],
//!         vec![Some(100.9), Some(101.0)],
//!         vec![Some(101.2), Some(104.0)],
//!     ],
//! )
//! .unwrap();
//!
//! let balanced = WeightVector::new([("Bonds", 0.6), ("Equity", 0.4)]).unwrap();
//! let request = AnalysisRequest::new(vec![Profile::new("Balanced", balanced)])
//!     .with_periods_per_year(Frequency::Monthly.into());
//!
//! let report = analyze(&prices, &request, &AnalyticsConfig::default()).unwrap();
//! assert_eq!(report.record("Balanced").unwrap().observations, 3);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub use vantage_analytics;
pub use vantage_core;
#[cfg(feature = "file")]
#[cfg_attr(docsrs, doc(cfg(feature = "file")))]
pub use vantage_ext_file;
pub use vantage_math;

pub use vantage_analytics::{analyze, AnalysisReport, AnalysisRequest, AnalyticsConfig};
pub use vantage_core::{PriceTable, Profile, WeightVector};

/// Everything needed to build a request and run an analysis.
pub mod prelude {
    pub use vantage_analytics::prelude::*;
    pub use vantage_core::prelude::*;

    #[cfg(feature = "file")]
    pub use vantage_ext_file::{load_analysis, load_price_csv, load_request, AnalysisFile};
}
