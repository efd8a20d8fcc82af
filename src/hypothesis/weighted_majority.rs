use serde::{Serialize, Deserialize};
use crate::{
    Classifier,
    Regressor,
    Sample,
};


/// A struct that the boosting algorithms in this library return.
/// Pairs are kept in training order and the weights are the raw
/// confidence weights; nothing is normalized or filtered away,
/// so `weights[t]` is exactly the weight assigned at round `t`.
/// You can read/write this struct by `Serde` trait.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct WeightedMajority<H> {
    /// Weights on each hypothesis in `self.hypotheses`.
    pub weights: Vec<f64>,
    /// Set of hypotheses.
    pub hypotheses: Vec<H>,
}


impl<H: Clone> WeightedMajority<H> {
    /// Construct a new `WeightedMajority` from given slices.
    #[inline]
    pub fn from_slices(weights: &[f64], hypotheses: &[H]) -> Self {
        assert_eq!(weights.len(), hypotheses.len());
        Self {
            weights: weights.to_vec(),
            hypotheses: hypotheses.to_vec(),
        }
    }


    /// Returns the ensemble truncated to its first `len` members,
    /// which is the state of the ensemble after `len` boosting rounds.
    #[inline]
    pub fn prefix(&self, len: usize) -> Self {
        let len = len.min(self.weights.len());
        Self {
            weights: self.weights[..len].to_vec(),
            hypotheses: self.hypotheses[..len].to_vec(),
        }
    }
}

impl<H> WeightedMajority<H> {
    /// An empty ensemble. Predicts the negative class everywhere.
    #[inline]
    pub fn new() -> Self {
        Self { weights: Vec::new(), hypotheses: Vec::new(), }
    }


    /// Append a pair `(weight, h)` to the current combined hypothesis.
    #[inline]
    pub fn push(&mut self, weight: f64, hypothesis: H) {
        self.weights.push(weight);
        self.hypotheses.push(hypothesis);
    }


    /// The number of hypotheses in this ensemble.
    #[inline]
    pub fn len(&self) -> usize {
        self.hypotheses.len()
    }


    /// Returns `true` if the ensemble has no hypotheses.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.hypotheses.is_empty()
    }


    /// Decompose the combined hypothesis
    /// into the two vectors `Vec<f64>` and `Vec<H>`
    #[inline]
    pub fn decompose(self) -> (Vec<f64>, Vec<H>) {
        (self.weights, self.hypotheses)
    }
}


impl<H> Default for WeightedMajority<H> {
    fn default() -> Self {
        Self::new()
    }
}


impl<F> Classifier for WeightedMajority<F>
    where F: Classifier,
{
    fn confidence(&self, sample: &Sample, row: usize) -> f64 {
        self.weights.iter()
            .zip(&self.hypotheses[..])
            .map(|(w, h)| *w * h.confidence(sample, row))
            .sum::<f64>()
    }
}


impl<F> Regressor for WeightedMajority<F>
    where F: Regressor,
{
    fn predict(&self, sample: &Sample, row: usize) -> f64 {
        self.weights.iter()
            .zip(&self.hypotheses[..])
            .map(|(w, h)| *w * h.predict(sample, row))
            .sum::<f64>()
    }
}
