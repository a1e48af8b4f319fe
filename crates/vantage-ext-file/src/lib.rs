//! # Vantage Ext File
//!
//! File-based inputs for the Vantage analytics engine.
//!
//! This crate provides:
//! - CSV price tables (one date column, one column per asset, blanks as gaps)
//! - TOML or JSON analysis requests with an optional engine `config` section
//!
//! ```rust,no_run
//! use vantage_analytics::analyze;
//! use vantage_ext_file::{load_analysis, load_price_csv};
//!
//! let prices = load_price_csv("prices.csv").unwrap();
//! let file = load_analysis("request.toml").unwrap();
//! let report = analyze(&prices, &file.request, &file.config).unwrap();
//! println!("{} series", report.metrics.len());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
mod prices;
mod request;

pub use error::{FileError, FileResult};
pub use prices::*;
pub use request::*;
