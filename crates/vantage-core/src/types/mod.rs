//! Domain types for allocation analytics.
//!
//! - [`Date`]: observation date
//! - [`Frequency`], [`PeriodsPerYear`]: sampling frequency and annualization factor
//! - [`PriceTable`], [`ReturnTable`]: date-indexed tables of levels and returns
//! - [`ReturnSeries`]: a single named return series
//! - [`WeightVector`], [`Profile`]: allocations
//! - [`BenchmarkDefinition`]: benchmark composition rules
//! - [`ColumnRole`], [`RoleMap`]: explicit column roles
//! - [`DateWindow`]: analysis period
//! - [`MissingDataPolicy`]: treatment of gaps

mod benchmark;
mod date;
mod frequency;
mod missing;
mod roles;
mod series;
mod table;
mod weights;
mod window;

pub use benchmark::{BenchmarkComponent, BenchmarkDefinition, BenchmarkKind};
pub use date::Date;
pub use frequency::{Frequency, PeriodsPerYear};
pub use missing::MissingDataPolicy;
pub use roles::{ColumnRole, RoleMap};
pub use series::ReturnSeries;
pub use table::{PriceTable, ReturnTable};
pub use weights::{Profile, WeightVector};
pub use window::DateWindow;
