//! Linear algebra utilities.
//!
//! Covariance algebra on `nalgebra` dense matrices.

use crate::error::{MathError, MathResult};
use crate::statistics::sample_covariance;
use nalgebra::{DMatrix, DVector};

/// Builds the sample covariance matrix of equally long samples.
///
/// `samples[i]` holds the observations of variable `i`. The result is
/// symmetric with variances on the diagonal.
pub fn covariance_matrix(samples: &[Vec<f64>]) -> MathResult<DMatrix<f64>> {
    let n = samples.len();
    if n == 0 {
        return Err(MathError::insufficient_data(1, 0));
    }

    let mut cov = DMatrix::zeros(n, n);
    for i in 0..n {
        for j in i..n {
            let c = sample_covariance(&samples[i], &samples[j])?;
            cov[(i, j)] = c;
            cov[(j, i)] = c;
        }
    }
    Ok(cov)
}

/// Converts a covariance matrix to a correlation matrix.
///
/// The diagonal is 1. Off-diagonal entries involving a zero-variance
/// variable are NaN.
pub fn correlation_from_covariance(cov: &DMatrix<f64>) -> MathResult<DMatrix<f64>> {
    let n = cov.nrows();
    if n != cov.ncols() {
        return Err(MathError::invalid_input("covariance matrix must be square"));
    }

    let std: Vec<f64> = (0..n).map(|i| cov[(i, i)].max(0.0).sqrt()).collect();
    let mut corr = DMatrix::from_element(n, n, f64::NAN);
    for i in 0..n {
        corr[(i, i)] = 1.0;
        for j in 0..n {
            if i != j && std[i] > 0.0 && std[j] > 0.0 {
                corr[(i, j)] = (cov[(i, j)] / (std[i] * std[j])).clamp(-1.0, 1.0);
            }
        }
    }
    Ok(corr)
}

/// Computes `m · v`.
pub fn matrix_vector(m: &DMatrix<f64>, v: &DVector<f64>) -> MathResult<DVector<f64>> {
    if m.ncols() != v.len() {
        return Err(MathError::DimensionMismatch {
            rows1: m.nrows(),
            cols1: m.ncols(),
            rows2: v.len(),
            cols2: 1,
        });
    }
    Ok(m * v)
}

/// Computes the quadratic form `vᵀ · m · v`.
pub fn quadratic_form(v: &DVector<f64>, m: &DMatrix<f64>) -> MathResult<f64> {
    if m.nrows() != m.ncols() {
        return Err(MathError::invalid_input("matrix must be square"));
    }
    let mv = matrix_vector(m, v)?;
    Ok(v.dot(&mv))
}
