//! Provides `WeakLearner` trait.

use crate::Sample;


/// The trait [`WeakLearner`] defines the interface between
/// a boosting algorithm and the algorithm producing hypotheses.
///
/// Given a training sample and per-example weights,
/// a weak learner produces a hypothesis that performs
/// slightly better than random guessing
/// with respect to the weighted examples.
pub trait WeakLearner {
    /// The hypothesis this weak learner produces.
    type Hypothesis;

    /// Returns the name of the weak learner.
    fn name(&self) -> &str;

    /// Returns the information of the weak learner as `String`.
    fn info(&self) -> Option<Vec<(&str, String)>> {
        None
    }

    /// Produces a hypothesis for the given sample
    /// and per-example weights.
    fn produce(&self, sample: &Sample, dist: &[f64]) -> Self::Hypothesis;
}
