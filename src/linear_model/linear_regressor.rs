//! Defines the regressor produced by [`Lasso`](super::Lasso).
use serde::{Serialize, Deserialize};

use crate::{Regressor, Sample};


/// A linear regressor over the feature columns of a sample.
/// The coefficient vector has one entry per feature column,
/// the intercept coefficient first.
/// You can read/write this struct by `Serde` trait.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearRegressor {
    weights: Vec<f64>,
}


impl From<Vec<f64>> for LinearRegressor {
    #[inline]
    fn from(weights: Vec<f64>) -> Self {
        Self { weights }
    }
}


impl LinearRegressor {
    /// The learned coefficients, intercept first.
    pub fn weights(&self) -> &[f64] {
        &self.weights[..]
    }


    /// The number of coefficients that are exactly zero.
    /// Soft-thresholding can zero coefficients out exactly,
    /// so this is the natural sparsity measure.
    pub fn zero_count(&self) -> usize {
        self.weights.iter()
            .filter(|w| **w == 0.0)
            .count()
    }


    /// A regressor for use on **un-normalized** data:
    /// every coefficient is divided by the norm its feature column
    /// was scaled by, see
    /// [`normalize_features`](super::normalize_features).
    pub fn rescale(&self, norms: &[f64]) -> Self {
        assert_eq!(
            self.weights.len(),
            norms.len(),
            "{} coefficients but {} norms",
            self.weights.len(),
            norms.len(),
        );
        let weights = self.weights.iter()
            .zip(norms)
            .map(|(w, z)| w / z)
            .collect::<Vec<_>>();

        Self { weights }
    }
}


impl Regressor for LinearRegressor {
    fn predict(&self, sample: &Sample, row: usize) -> f64 {
        assert_eq!(self.weights.len(), sample.shape().1);
        self.weights.iter()
            .zip(sample.features())
            .map(|(w, feature)| w * feature[row])
            .sum::<f64>()
    }
}
