//! LASSO linear regression solved by cyclical coordinate descent
//! over L2-normalized features.
use crate::Sample;
use crate::sample::Feature;
use crate::common::{checker, utils};

use super::linear_regressor::LinearRegressor;
use super::scores;


const DEFAULT_L1_PENALTY: f64 = 1.0;
const DEFAULT_TOLERANCE: f64 = 1e-6;


/// Divide every feature column by its L2 norm and return
/// the normalized sample together with the norms.
///
/// Keep the norms:
/// coefficients learned on the normalized sample must be divided
/// by them before use on un-normalized data,
/// see [`LinearRegressor::rescale`].
pub fn normalize_features(sample: &Sample) -> (Sample, Vec<f64>) {
    checker::check_sample(sample);

    let norms = sample.features()
        .iter()
        .map(Feature::l2_norm)
        .collect::<Vec<_>>();

    let features = sample.features()
        .iter()
        .zip(&norms)
        .map(|(feature, z)| {
            assert!(
                *z > 0.0,
                "Feature `{}` is all-zero and cannot be normalized",
                feature.name(),
            );
            let values = feature.iter()
                .map(|x| x / z)
                .collect::<Vec<_>>();
            Feature::new(feature.name(), values)
        })
        .collect::<Vec<_>>();

    let normalized =
        Sample::from_columns(features, sample.target().to_vec());

    (normalized, norms)
}


/// One coordinate-descent step:
/// holding every coefficient but `weights[j]` fixed,
/// returns the value of `weights[j]` minimizing the LASSO objective.
///
/// With `ρ_j = Σ_i x_ij (y_i - ŷ_i + w_j x_ij)`,
/// the update is the soft-threshold
/// ```txt
///        ┌ ρ_j + λ/2    if ρ_j < -λ/2
/// w[j] = ├ 0            if -λ/2 ≤ ρ_j ≤ λ/2
///        └ ρ_j - λ/2    if ρ_j > λ/2
/// ```
/// except at `j = 0`, the intercept, which is never regularized:
/// there the update is `ρ_0` itself.
///
/// Assumes the columns of `sample` are L2-normalized.
pub fn coordinate_descent_step(
    j: usize,
    sample: &Sample,
    weights: &[f64],
    l1_penalty: f64,
) -> f64
{
    checker::check_weight_dimension(sample, weights);
    checker::check_penalty(l1_penalty);

    let prediction = scores(sample, weights);
    let feature = sample.feature(j);
    let target = sample.target();

    let partial_residual = target.iter()
        .zip(prediction)
        .zip(feature.iter())
        .map(|((y, p), x)| y - p + weights[j] * x)
        .collect::<Vec<_>>();
    let rho = utils::inner_product(feature.values(), &partial_residual);

    let threshold = l1_penalty / 2.0;
    if j == 0 {
        rho
    } else if rho < -threshold {
        rho + threshold
    } else if rho > threshold {
        rho - threshold
    } else {
        0.0
    }
}


/// Defines the LASSO trainer.
/// Minimizes
/// `Σ (y - x · w)^2 + λ (|w_1| + ... + |w_d|)`
/// (the intercept `w_0` is never penalized)
/// by cyclical coordinate descent:
/// sweep the coordinates `0, 1, ..., d-1` in order,
/// applying [`coordinate_descent_step`] in place so that every update
/// is immediately visible to the coordinates after it,
/// and stop once no coordinate moved more than `tolerance`
/// within a full sweep.
///
/// There is no iteration cap;
/// the caller must pick `l1_penalty` and `tolerance` so that
/// the sweeps settle.
///
/// The sample must be normalized with [`normalize_features`] first.
///
/// # Example
/// ```no_run
/// use minilearn::prelude::*;
///
/// let features = vec![
///     Feature::new("sqft_living", vec![1180.0, 2570.0, 770.0]),
///     Feature::new("bedrooms", vec![3.0, 3.0, 2.0]),
/// ];
/// let sample = Sample::from_columns(
///     features, vec![221900.0, 538000.0, 180000.0]
/// ).with_intercept();
///
/// let (normalized, norms) = normalize_features(&sample);
///
/// let f = Lasso::init(&normalized)
///     .l1_penalty(1e7)
///     .tolerance(1.0)
///     .run();
///
/// // Rescale before predicting on un-normalized data.
/// let f = f.rescale(&norms);
/// let rss = residual_sum_of_squares(&sample, &f);
/// println!("RSS: {rss}");
/// ```
pub struct Lasso<'a> {
    // Training sample with L2-normalized feature columns.
    sample: &'a Sample,

    // The L1 regularization strength λ.
    l1_penalty: f64,

    // Convergence threshold on the largest per-coordinate change
    // within one sweep.
    tolerance: f64,
}


impl<'a> Lasso<'a> {
    /// Initialize the `Lasso` trainer.
    pub fn init(sample: &'a Sample) -> Self {
        Self {
            sample,
            l1_penalty: DEFAULT_L1_PENALTY,
            tolerance: DEFAULT_TOLERANCE,
        }
    }


    /// Set the L1 penalty λ.
    pub fn l1_penalty(mut self, l1_penalty: f64) -> Self {
        checker::check_penalty(l1_penalty);
        self.l1_penalty = l1_penalty;
        self
    }


    /// Set the convergence tolerance.
    pub fn tolerance(mut self, tolerance: f64) -> Self {
        checker::check_tolerance(tolerance);
        self.tolerance = tolerance;
        self
    }


    /// Run coordinate descent from the all-zero coefficients.
    pub fn run(&self) -> LinearRegressor {
        let n_feature = self.sample.shape().1;
        self.run_from(vec![0.0; n_feature])
    }


    /// Run coordinate descent from the given initial coefficients.
    pub fn run_from(&self, initial_weights: Vec<f64>) -> LinearRegressor {
        checker::check_sample(self.sample);
        checker::check_weight_dimension(self.sample, &initial_weights);

        let n_feature = self.sample.shape().1;
        let mut weights = initial_weights;

        loop {
            let mut max_change: f64 = 0.0;

            for j in 0..n_feature {
                let old_weight = weights[j];
                weights[j] = coordinate_descent_step(
                    j, self.sample, &weights, self.l1_penalty
                );
                max_change = max_change.max((weights[j] - old_weight).abs());
            }

            if max_change < self.tolerance {
                break;
            }
        }

        LinearRegressor::from(weights)
    }
}
