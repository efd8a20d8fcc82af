//! Binary logistic regression trained by batch gradient ascent
//! on the log-likelihood.
use colored::Colorize;

use crate::Sample;
use crate::sample::Feature;
use crate::common::{checker, utils};

use super::linear_classifier::LinearClassifier;
use super::scores;


const DEFAULT_STEP_SIZE: f64 = 1e-7;
const DEFAULT_MAX_ITER: usize = 301;

const LOG_WIDTH: usize = 8;


/// Produces the probabilistic estimates `P(y = +1 | x, w)`,
/// one per example:
/// `1 / (1 + exp(- x · w))`, applied row-wise.
pub fn predict_probability(sample: &Sample, weights: &[f64]) -> Vec<f64> {
    scores(sample, weights)
        .into_iter()
        .map(|score| 1.0 / (1.0 + (-score).exp()))
        .collect::<Vec<_>>()
}


/// The partial derivative of the log-likelihood
/// with respect to a single coefficient:
/// the inner product of the error vector
/// `1[y = +1] - P(y = +1 | x, w)` with the coefficient's feature column.
pub fn feature_derivative(errors: &[f64], feature: &Feature) -> f64 {
    utils::inner_product(errors, feature.values())
}


/// The log-likelihood of the observed labels:
/// `Σ ( (1[y = +1] - 1) score - ln(1 + exp(-score)) )`.
///
/// When `score` is so negative that `ln(1 + exp(-score))` overflows
/// to infinity, the term is replaced by `-score`,
/// its limit, which keeps the sum finite.
pub fn log_likelihood(sample: &Sample, weights: &[f64]) -> f64 {
    let target = sample.target();

    scores(sample, weights)
        .into_iter()
        .zip(target)
        .map(|(score, y)| {
            let indicator = if *y > 0.0 { 1.0 } else { 0.0 };

            let mut logexp = (1.0 + (-score).exp()).ln();
            if logexp.is_infinite() {
                logexp = -score;
            }

            (indicator - 1.0) * score - logexp
        })
        .sum::<f64>()
}


/// Defines the logistic regression trainer.
/// Maximizes the log-likelihood of the observed labels
/// by batch gradient **ascent**:
/// every iteration computes one error vector from the current
/// coefficients and then moves every coefficient along its partial
/// derivative with the same, fixed step size.
///
/// There is no convergence check;
/// the algorithm runs for exactly `max_iter` iterations
/// and the caller is responsible for choosing `max_iter` large enough.
/// For a well-chosen step size the log-likelihood is non-decreasing
/// from one iteration to the next.
///
/// # Example
/// ```no_run
/// use minilearn::prelude::*;
///
/// let features = vec![
///     Feature::new("great", vec![2.0, 0.0, 1.0]),
///     Feature::new("awful", vec![0.0, 3.0, 0.0]),
/// ];
/// let sample = Sample::from_columns(features, vec![1.0, -1.0, 1.0])
///     .with_intercept();
///
/// let f = LogisticRegression::init(&sample)
///     .step_size(1e-2)
///     .max_iter(500)
///     .run();
///
/// let predictions = f.predict_all(&sample);
/// println!("Accuracy: {}", accuracy(&sample, &f));
/// ```
pub struct LogisticRegression<'a> {
    // Training sample
    sample: &'a Sample,

    // Step size of gradient ascent.
    step_size: f64,

    // Number of iterations.
    max_iter: usize,

    // If `true`, print the log-likelihood on a thinning schedule.
    verbose: bool,
}


impl<'a> LogisticRegression<'a> {
    /// Initialize the `LogisticRegression` trainer.
    pub fn init(sample: &'a Sample) -> Self {
        Self {
            sample,
            step_size: DEFAULT_STEP_SIZE,
            max_iter: DEFAULT_MAX_ITER,
            verbose: false,
        }
    }


    /// Set the gradient-ascent step size.
    pub fn step_size(mut self, step_size: f64) -> Self {
        checker::check_step_size(step_size);
        self.step_size = step_size;
        self
    }


    /// Set the number of gradient-ascent iterations.
    pub fn max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }


    /// Print the log-likelihood while training.
    /// Early iterations are printed densely, later ones sparsely.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }


    /// Run gradient ascent starting from the all-zero coefficients.
    pub fn run(&self) -> LinearClassifier {
        let n_feature = self.sample.shape().1;
        self.run_from(vec![0.0; n_feature])
    }


    /// Run gradient ascent from the given initial coefficients.
    pub fn run_from(&self, initial_weights: Vec<f64>) -> LinearClassifier {
        checker::check_sample(self.sample);
        checker::check_weight_dimension(self.sample, &initial_weights);
        self.sample.is_valid_binary_instance();

        let target = self.sample.target();
        let mut weights = initial_weights;

        for iteration in 0..self.max_iter {
            let predictions = predict_probability(self.sample, &weights);

            let errors = target.iter()
                .zip(predictions)
                .map(|(y, p)| {
                    let indicator = if *y > 0.0 { 1.0 } else { 0.0 };
                    indicator - p
                })
                .collect::<Vec<_>>();

            // A synchronous update:
            // every coefficient moves along the derivative computed
            // from the same error vector.
            for (w, feature) in
                weights.iter_mut().zip(self.sample.features())
            {
                *w += self.step_size * feature_derivative(&errors, feature);
            }

            if self.verbose && on_log_schedule(iteration) {
                let ll = log_likelihood(self.sample, &weights);
                println!(
                    "{} {}\tlog likelihood = {}",
                    "[LOG]".bold().magenta(),
                    format!("{iteration:>LOG_WIDTH$}").red(),
                    format!("{ll:.8}").blue(),
                );
            }
        }

        LinearClassifier::from(weights)
    }
}


/// The thinning schedule for progress lines:
/// every iteration up to 15, every 10th up to 100,
/// every 100th up to 1000, and so on.
fn on_log_schedule(iteration: usize) -> bool {
    iteration <= 15
        || (iteration <= 100 && iteration % 10 == 0)
        || (iteration <= 1_000 && iteration % 100 == 0)
        || (iteration <= 10_000 && iteration % 1_000 == 0)
        || iteration % 10_000 == 0
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_schedule_thins_out() {
        assert!(on_log_schedule(0));
        assert!(on_log_schedule(15));
        assert!(!on_log_schedule(16));
        assert!(on_log_schedule(20));
        assert!(!on_log_schedule(101));
        assert!(on_log_schedule(200));
        assert!(on_log_schedule(20_000));
    }
}
