//! Descriptive statistics on `f64` samples.

use crate::error::{MathError, MathResult};

/// Arithmetic mean.
pub fn mean(values: &[f64]) -> MathResult<f64> {
    if values.is_empty() {
        return Err(MathError::insufficient_data(1, 0));
    }
    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

/// Sample variance (`n - 1` denominator).
pub fn sample_variance(values: &[f64]) -> MathResult<f64> {
    sample_covariance(values, values)
}

/// Sample standard deviation (`n - 1` denominator).
pub fn sample_std(values: &[f64]) -> MathResult<f64> {
    Ok(sample_variance(values)?.max(0.0).sqrt())
}

/// Sample covariance of two equally long samples.
pub fn sample_covariance(x: &[f64], y: &[f64]) -> MathResult<f64> {
    if x.len() != y.len() {
        return Err(MathError::DimensionMismatch {
            rows1: x.len(),
            cols1: 1,
            rows2: y.len(),
            cols2: 1,
        });
    }
    if x.len() < 2 {
        return Err(MathError::insufficient_data(2, x.len()));
    }

    // A constant sample has exactly zero co-movement; the mean of repeated
    // values is not always representable exactly.
    if is_constant(x) || is_constant(y) {
        return Ok(0.0);
    }

    let mx = mean(x)?;
    let my = mean(y)?;
    let sum: f64 = x.iter().zip(y).map(|(a, b)| (a - mx) * (b - my)).sum();
    Ok(sum / (x.len() - 1) as f64)
}

fn is_constant(values: &[f64]) -> bool {
    values.windows(2).all(|w| w[0] == w[1])
}

/// Median of a sample. Non-finite values are rejected.
pub fn median(values: &[f64]) -> MathResult<f64> {
    if values.is_empty() {
        return Err(MathError::insufficient_data(1, 0));
    }
    if values.iter().any(|v| !v.is_finite()) {
        return Err(MathError::invalid_input("median of non-finite values"));
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Ok((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Ok(sorted[mid])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_mean() {
        assert_relative_eq!(mean(&[1.0, 2.0, 3.0, 4.0]).unwrap(), 2.5);
        assert!(mean(&[]).is_err());
    }

    #[test]
    fn test_sample_variance_and_std() {
        let x = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        // population variance is 4, sample variance 32/7
        assert_relative_eq!(sample_variance(&x).unwrap(), 32.0 / 7.0, epsilon = 1e-12);
        assert_relative_eq!(sample_std(&x).unwrap(), (32.0_f64 / 7.0).sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_constant_sample_has_zero_std() {
        assert_eq!(sample_std(&[0.01; 12]).unwrap(), 0.0);
    }

    #[test]
    fn test_variance_needs_two_points() {
        assert_eq!(
            sample_variance(&[1.0]).unwrap_err(),
            MathError::insufficient_data(2, 1)
        );
    }

    #[test]
    fn test_covariance_length_mismatch() {
        assert!(matches!(
            sample_covariance(&[1.0, 2.0], &[1.0]),
            Err(MathError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_median() {
        assert_relative_eq!(median(&[31.0, 28.0, 30.0]).unwrap(), 30.0);
        assert_relative_eq!(median(&[1.0, 3.0, 2.0, 4.0]).unwrap(), 2.5);
        assert!(median(&[1.0, f64::NAN]).is_err());
    }
}
