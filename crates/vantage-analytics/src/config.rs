//! Configuration for analytics computation.

use serde::{Deserialize, Serialize};
use vantage_core::MissingDataPolicy;

/// Configuration for analytics computation.
///
/// Controls parallelism, missing-data handling and reporting tolerances.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    /// Enable parallel processing (requires 'parallel' feature).
    pub parallel: bool,

    /// Minimum profile count to trigger parallel processing.
    /// Below this threshold, sequential is faster due to thread overhead.
    pub parallel_threshold: usize,

    /// Treatment of missing price observations before returns are computed.
    pub missing_data: MissingDataPolicy,

    /// Allowed distance of a profile's weight sum from 1.0 before a
    /// `WeightSumMismatch` warning is raised.
    pub weight_sum_tolerance: f64,

    /// Starting level of reported cumulative curves (100 = base-100 index).
    pub curve_base: f64,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            parallel: true,
            parallel_threshold: 8,
            missing_data: MissingDataPolicy::Keep,
            weight_sum_tolerance: 1e-6,
            curve_base: 100.0,
        }
    }
}

impl AnalyticsConfig {
    /// Creates a new config with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a config that always uses sequential processing.
    #[must_use]
    pub fn sequential() -> Self {
        Self {
            parallel: false,
            ..Self::default()
        }
    }

    /// Sets whether to use parallel processing.
    #[must_use]
    pub fn with_parallel(mut self, enabled: bool) -> Self {
        self.parallel = enabled;
        self
    }

    /// Sets the threshold for parallel processing.
    #[must_use]
    pub fn with_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Sets the missing-data policy.
    #[must_use]
    pub fn with_missing_data(mut self, policy: MissingDataPolicy) -> Self {
        self.missing_data = policy;
        self
    }

    /// Sets the weight sum tolerance.
    #[must_use]
    pub fn with_weight_sum_tolerance(mut self, tolerance: f64) -> Self {
        self.weight_sum_tolerance = tolerance;
        self
    }

    /// Sets the starting level of cumulative curves.
    #[must_use]
    pub fn with_curve_base(mut self, base: f64) -> Self {
        self.curve_base = base;
        self
    }

    /// Returns true if parallel processing should be used for the given count.
    #[must_use]
    pub fn should_parallelize(&self, count: usize) -> bool {
        cfg!(feature = "parallel") && self.parallel && count >= self.parallel_threshold
    }
}
