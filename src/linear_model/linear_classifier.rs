//! Defines the classifier produced by
//! [`LogisticRegression`](super::LogisticRegression).
use serde::{Serialize, Deserialize};

use crate::{Classifier, Sample};


/// A linear classifier over the feature columns of a sample.
/// The coefficient vector has one entry per feature column,
/// the intercept coefficient first.
/// An example is labeled `+1` when its score `x · w` is positive
/// and `-1` otherwise.
/// You can read/write this struct by `Serde` trait.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearClassifier {
    weights: Vec<f64>,
}


impl From<Vec<f64>> for LinearClassifier {
    #[inline]
    fn from(weights: Vec<f64>) -> Self {
        Self { weights }
    }
}


impl LinearClassifier {
    /// The learned coefficients, intercept first.
    pub fn weights(&self) -> &[f64] {
        &self.weights[..]
    }


    /// The score `x · w` of the i'th row of the `sample`.
    pub fn score(&self, sample: &Sample, row: usize) -> f64 {
        assert_eq!(self.weights.len(), sample.shape().1);
        self.weights.iter()
            .zip(sample.features())
            .map(|(w, feature)| w * feature[row])
            .sum::<f64>()
    }


    /// The estimate of `P(y = +1 | x)` for the i'th row of the `sample`.
    pub fn probability(&self, sample: &Sample, row: usize) -> f64 {
        let score = self.score(sample, row);
        1.0 / (1.0 + (-score).exp())
    }
}


impl Classifier for LinearClassifier {
    /// The confidence is `2 P(y = +1 | x) - 1`,
    /// which lies in `(-1, 1)` and has the sign of the score.
    fn confidence(&self, sample: &Sample, row: usize) -> f64 {
        2.0 * self.probability(sample, row) - 1.0
    }
}
