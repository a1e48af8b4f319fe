//! Allocation weights and named risk profiles.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{VantageError, VantageResult};

/// Allocation weights by asset column, as fractions (0.25 = 25%).
///
/// Weights must be finite and non-negative. They are not required to sum to
/// one: an under- or over-invested vector is kept as given and the analytics
/// layer reports the realized sum.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<String, f64>", into = "BTreeMap<String, f64>")]
pub struct WeightVector {
    weights: BTreeMap<String, f64>,
}

impl WeightVector {
    /// Creates a weight vector from `(asset, weight)` pairs.
    ///
    /// # Errors
    ///
    /// `InvalidWeight` for a negative or non-finite weight, `InvalidInput` for
    /// an asset listed twice.
    pub fn new<I, S>(entries: I) -> VantageResult<Self>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        let mut weights = BTreeMap::new();
        for (asset, weight) in entries {
            let asset = asset.into();
            if !weight.is_finite() || weight < 0.0 {
                return Err(VantageError::InvalidWeight {
                    asset,
                    value: weight,
                });
            }
            if weights.insert(asset.clone(), weight).is_some() {
                return Err(VantageError::invalid_input(format!(
                    "asset '{asset}' listed twice"
                )));
            }
        }
        Ok(Self { weights })
    }

    /// Creates a weight vector from percentages (25.0 = 25%).
    pub fn from_percentages<I, S>(entries: I) -> VantageResult<Self>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        Self::new(entries.into_iter().map(|(a, w)| (a, w / 100.0)))
    }

    /// Returns the weight for an asset, if present.
    #[must_use]
    pub fn get(&self, asset: &str) -> Option<f64> {
        self.weights.get(asset).copied()
    }

    /// Iterates over `(asset, weight)` pairs in asset order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.weights.iter().map(|(a, w)| (a.as_str(), *w))
    }

    /// Returns the asset names in order.
    pub fn assets(&self) -> impl Iterator<Item = &str> + '_ {
        self.weights.keys().map(String::as_str)
    }

    /// Returns the sum of all weights.
    #[must_use]
    pub fn sum(&self) -> f64 {
        self.weights.values().sum()
    }

    /// Returns the number of assets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Returns true if no asset is weighted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}

impl TryFrom<BTreeMap<String, f64>> for WeightVector {
    type Error = VantageError;

    fn try_from(map: BTreeMap<String, f64>) -> VantageResult<Self> {
        Self::new(map)
    }
}

impl From<WeightVector> for BTreeMap<String, f64> {
    fn from(weights: WeightVector) -> Self {
        weights.weights
    }
}

/// A named allocation, e.g. "Conservative" or "Aggressive".
///
/// Profile names carry no meaning to the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Display name of the profile.
    pub name: String,

    /// Allocation weights.
    pub weights: WeightVector,
}

impl Profile {
    /// Creates a profile.
    #[must_use]
    pub fn new(name: impl Into<String>, weights: WeightVector) -> Self {
        Self {
            name: name.into(),
            weights,
        }
    }
}
