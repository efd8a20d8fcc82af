//! Objective functions reported by the boosting [`Logger`](crate::Logger).
use crate::{Sample, Classifier};


/// An objective value computed from a sample and a hypothesis.
/// `Logger` reports this value once per boosting round.
pub trait ObjectiveFunction<H> {
    /// The name of the objective function.
    fn name(&self) -> &str;

    /// Evaluate the objective at the given hypothesis.
    fn eval(&self, sample: &Sample, f: &H) -> f64;
}


/// The exponential loss `(1/n) Σ exp( -y f(x) )`,
/// the objective AdaBoost greedily minimizes.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExponentialLoss;


impl<H> ObjectiveFunction<H> for ExponentialLoss
    where H: Classifier,
{
    fn name(&self) -> &str {
        "Exponential Loss"
    }


    fn eval(&self, sample: &Sample, f: &H) -> f64 {
        let n_sample = sample.shape().0 as f64;
        let target = sample.target();

        target.iter()
            .enumerate()
            .map(|(i, y)| (- y * f.confidence(sample, i)).exp())
            .sum::<f64>()
            / n_sample
    }
}
