//! # Vantage Math
//!
//! Numerical kernels for the Vantage allocation analytics library.
//!
//! This crate provides:
//!
//! - **Statistics**: mean, sample variance and deviation, median
//! - **Linear Algebra**: covariance and correlation matrices, quadratic forms
//!
//! ## Design Philosophy
//!
//! - **Plain inputs**: slices of `f64` and `nalgebra` matrices, no domain types
//! - **Sample statistics**: variances use the `n - 1` denominator throughout
//! - **Explicit failure**: too few observations is an error, never a silent NaN

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::similar_names)]

pub mod error;
pub mod linear_algebra;
pub mod statistics;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MathError, MathResult};
    pub use crate::linear_algebra::{
        correlation_from_covariance, covariance_matrix, matrix_vector, quadratic_form,
    };
    pub use crate::statistics::{mean, median, sample_covariance, sample_std, sample_variance};
}

pub use error::{MathError, MathResult};
