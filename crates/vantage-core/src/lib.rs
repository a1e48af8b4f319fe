//! # Vantage Core
//!
//! Core types for the Vantage allocation analytics library.
//!
//! This crate provides the value objects every other Vantage crate works on:
//!
//! - **Tables**: [`PriceTable`] of price levels and the derived [`ReturnTable`]
//! - **Series**: [`ReturnSeries`] for a single asset, benchmark or portfolio
//! - **Allocations**: [`WeightVector`] and named [`Profile`]s
//! - **Benchmarks**: [`BenchmarkDefinition`] as tagged data, never hardcoded names
//! - **Roles**: explicit [`RoleMap`] from roles (risk-free, inflation, …) to columns
//! - **Windows**: [`DateWindow`] selection of the analysis period
//!
//! ## Design Philosophy
//!
//! - **Value objects**: tables are validated on construction and never mutated
//! - **Explicit missing data**: a missing observation is `None`, never a sentinel
//! - **Caller-supplied configuration**: no column name is special to the engine
//!
//! ## Example
//!
//! ```rust
//! use vantage_core::prelude::*;
//!
//! let dates = vec![
//!     Date::from_ymd(2024, 1, 31).unwrap(),
//!     Date::from_ymd(2024, 2, 29).unwrap(),
//! ];
//! let prices = PriceTable::new(
//!     vec!["Equity".to_string(), "Treasury".to_string()],
//!     dates,
//!     vec![vec![Some(100.0), Some(100.0)], vec![Some(102.0), Some(99.5)]],
//! )
//! .unwrap();
//! assert_eq!(prices.len(), 2);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{VantageError, VantageResult};
    pub use crate::types::{
        BenchmarkDefinition, BenchmarkKind, ColumnRole, Date, DateWindow, Frequency,
        MissingDataPolicy, PeriodsPerYear, PriceTable, Profile, ReturnSeries, ReturnTable,
        RoleMap, WeightVector,
    };
}

pub use error::{VantageError, VantageResult};
pub use types::{
    BenchmarkComponent, BenchmarkDefinition, BenchmarkKind, ColumnRole, Date, DateWindow, Frequency,
    MissingDataPolicy, PeriodsPerYear, PriceTable, Profile, ReturnSeries, ReturnTable, RoleMap,
    WeightVector,
};
