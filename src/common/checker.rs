//! This file defines some functions that checks some pre-conditions
//! E.g., Shape of data

use crate::Sample;


/// Check whether the training sample is valid or not.
#[inline(always)]
pub(crate) fn check_sample(sample: &Sample) {
    let (n_sample, n_feature) = sample.shape();

    assert!(n_sample > 0, "The sample has no examples");
    assert!(n_feature > 0, "The sample has no features");
}


/// Check that a weight vector has one entry per feature column.
/// Dimension mismatches are programming errors, so fail fast.
#[inline(always)]
pub(crate) fn check_weight_dimension(sample: &Sample, weights: &[f64]) {
    let n_feature = sample.shape().1;
    assert_eq!(
        n_feature,
        weights.len(),
        "The sample has {n_feature} feature columns \
         but the weight vector has {} entries",
        weights.len(),
    );
}


/// Check that the per-example weights match the sample
/// and are all non-negative.
#[inline(always)]
pub(crate) fn check_distribution(sample: &Sample, dist: &[f64]) {
    let n_sample = sample.shape().0;
    assert_eq!(
        n_sample,
        dist.len(),
        "The sample has {n_sample} examples \
         but the weight vector has {} entries",
        dist.len(),
    );
    assert!(
        dist.iter().all(|d| *d >= 0.0),
        "Example weights must be non-negative. got {dist:?}",
    );
}


/// Check that every feature column takes values in `{0, 1}`.
/// The weighted decision tree only splits on such columns.
#[inline(always)]
pub(crate) fn check_binary_features(sample: &Sample) {
    for feature in sample.features() {
        assert!(
            feature.is_binary(),
            "Feature `{}` takes a value other than 0/1. \
             Binarize features before growing a tree.",
            feature.name(),
        );
    }
}


/// Check the stepsize.
#[inline(always)]
pub(crate) fn check_step_size(size: f64) {
    assert!(
        size > 0.0 && size.is_finite(),
        "step size must be positive and finite. got {size}."
    );
}


/// Check the regularization parameter.
#[inline(always)]
pub(crate) fn check_penalty(penalty: f64) {
    assert!(
        penalty >= 0.0 && penalty.is_finite(),
        "l1 penalty must be non-negative and finite. got {penalty}."
    );
}


/// Check the convergence tolerance.
#[inline(always)]
pub(crate) fn check_tolerance(tolerance: f64) {
    assert!(
        tolerance > 0.0,
        "tolerance must be positive. got {tolerance}."
    );
}
