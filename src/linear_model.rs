//! Linear models: logistic regression trained by gradient ascent
//! and LASSO regression solved by cyclical coordinate descent.
//!
//! Both trainers expect the intercept column (all ones) at position `0`
//! of the sample; see [`Sample::with_intercept`](crate::Sample::with_intercept).

/// Defines logistic regression.
pub mod logistic_regression;
/// Defines the classifier produced by `LogisticRegression`.
pub mod linear_classifier;

/// Defines the LASSO solver.
pub mod lasso;
/// Defines the regressor produced by `Lasso`.
pub mod linear_regressor;


pub use logistic_regression::{
    LogisticRegression,
    predict_probability,
    feature_derivative,
    log_likelihood,
};
pub use linear_classifier::LinearClassifier;

pub use lasso::{
    Lasso,
    normalize_features,
    coordinate_descent_step,
};
pub use linear_regressor::LinearRegressor;


use crate::Sample;
use crate::common::checker;


/// The score vector `X w`:
/// one weighted sum of feature values per example.
/// Accumulated column-by-column since features are stored as columns.
pub(crate) fn scores(sample: &Sample, weights: &[f64]) -> Vec<f64> {
    checker::check_weight_dimension(sample, weights);

    let n_sample = sample.shape().0;
    let mut scores = vec![0.0; n_sample];
    for (w, feature) in weights.iter().zip(sample.features()) {
        scores.iter_mut()
            .zip(feature.iter())
            .for_each(|(s, x)| { *s += w * x; });
    }

    scores
}
