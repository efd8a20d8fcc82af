use minilearn::prelude::*;
use minilearn::common::ExponentialLoss;
use minilearn::{CrossValidation, Logger};

use std::env;
use std::fs;


/// All eight rows over three binary features,
/// labeled by their majority vote.
/// Every single stump errs on 2 of the 8 rows;
/// three boosted stumps classify the sample perfectly.
fn majority_sample() -> Sample {
    let mut f0 = Vec::new();
    let mut f1 = Vec::new();
    let mut f2 = Vec::new();
    let mut target = Vec::new();
    for bits in 0..8u8 {
        let b0 = f64::from(bits & 1);
        let b1 = f64::from((bits >> 1) & 1);
        let b2 = f64::from((bits >> 2) & 1);
        f0.push(b0);
        f1.push(b1);
        f2.push(b2);
        target.push(if b0 + b1 + b2 >= 2.0 { 1.0 } else { -1.0 });
    }

    let features = vec![
        Feature::new("f0", f0),
        Feature::new("f1", f1),
        Feature::new("f2", f2),
    ];
    Sample::from_columns(features, target)
}


#[test]
fn boosting_solves_what_no_single_stump_can() {
    let sample = majority_sample();

    let mut booster = AdaBoost::init(&sample).num_rounds(3);
    let weak_learner = DecisionTree::stump();
    let f = booster.run(&weak_learner);

    assert_eq!(f.len(), 3);
    assert_eq!(zero_one_loss(&sample, &f), 0.0);

    // The single best stump errs on 2 of 8 rows.
    let dist = vec![1.0; 8];
    let stump = weak_learner.produce(&sample, &dist);
    assert_eq!(zero_one_loss(&sample, &stump), 0.25);
}


#[test]
fn confidence_weights_grow_with_the_reweighted_rounds() {
    // Weighted errors per round are 1/4, 1/6 and 1/10,
    // so the confidence weights are (ln 3)/2, (ln 5)/2 and (ln 9)/2.
    // A renormalization pass after the multiplicative update
    // would leave these values unchanged,
    // but the drifted absolute weights are what this run uses.
    let sample = majority_sample();

    let mut booster = AdaBoost::init(&sample).num_rounds(3);
    let f = booster.run(&DecisionTree::stump());

    let expected = [
        0.5 * 3.0f64.ln(),
        0.5 * 5.0f64.ln(),
        0.5 * 9.0f64.ln(),
    ];
    assert_eq!(f.weights.len(), 3);
    for (w, e) in f.weights.iter().zip(expected) {
        assert!((w - e).abs() < 1e-9, "weight {w} differs from {e}");
    }
}


#[test]
fn prefix_ensembles_trace_the_error_curve() {
    let sample = majority_sample();

    let mut booster = AdaBoost::init(&sample).num_rounds(3);
    let f = booster.run(&DecisionTree::stump());

    let errors = (1..=3)
        .map(|t| zero_one_loss(&sample, &f.prefix(t)))
        .collect::<Vec<_>>();
    assert_eq!(errors, vec![0.25, 0.25, 0.0]);

    // A prefix longer than the ensemble is the ensemble itself.
    assert_eq!(f.prefix(10).len(), 3);
}


#[test]
fn one_round_reproduces_the_unweighted_stump() {
    let features = vec![
        Feature::new("f0", vec![0.0, 0.0, 1.0, 1.0]),
        Feature::new("f1", vec![0.0, 1.0, 0.0, 1.0]),
    ];
    let sample = Sample::from_columns(
        features, vec![-1.0, 1.0, 1.0, 1.0]
    );

    let weak_learner = DecisionTree::stump();

    let dist = vec![1.0; 4];
    let stump = weak_learner.produce(&sample, &dist);

    let mut booster = AdaBoost::init(&sample).num_rounds(1);
    let f = booster.run(&weak_learner);

    assert_eq!(f.len(), 1);
    assert_eq!(f.predict_all(&sample), stump.predict_all(&sample));
    assert_eq!(
        zero_one_loss(&sample, &f),
        zero_one_loss(&sample, &stump),
    );
}


#[test]
fn perfect_stump_short_circuits_the_loop() {
    // `f0` alone separates the labels,
    // so round one finds a zero-error stump and the ensemble
    // is that single stump with weight one.
    let features = vec![
        Feature::new("f0", vec![0.0, 0.0, 1.0, 1.0]),
        Feature::new("f1", vec![1.0, 0.0, 1.0, 0.0]),
    ];
    let sample = Sample::from_columns(
        features, vec![-1.0, -1.0, 1.0, 1.0]
    );

    let mut booster = AdaBoost::init(&sample).num_rounds(10);
    let f = booster.run(&DecisionTree::stump());

    assert_eq!(f.len(), 1);
    assert_eq!(f.weights, vec![1.0]);
    assert_eq!(zero_one_loss(&sample, &f), 0.0);
}


#[test]
fn empty_ensemble_votes_negative() {
    // A score of exactly zero maps to the negative class.
    let sample = majority_sample();
    let f = WeightedMajority::<DecisionTreeClassifier>::new();

    assert!(f.is_empty());
    assert!(f.predict_all(&sample).into_iter().all(|y| y == -1));
}


#[test]
fn ensemble_survives_serde_round_trip() {
    let sample = majority_sample();

    let mut booster = AdaBoost::init(&sample).num_rounds(3);
    let f = booster.run(&DecisionTree::stump());

    let json = serde_json::to_string(&f).unwrap();
    let g: WeightedMajority<DecisionTreeClassifier> =
        serde_json::from_str(&json).unwrap();

    assert_eq!(f.weights, g.weights);
    assert_eq!(f.predict_all(&sample), g.predict_all(&sample));
}


#[test]
fn logger_writes_one_row_per_round() {
    let sample = majority_sample();

    let booster = AdaBoost::init(&sample).num_rounds(3);
    let weak_learner = DecisionTree::stump();

    let path = env::temp_dir().join("minilearn_adaboost_trace.csv");
    let f = Logger::new(
        booster,
        weak_learner,
        ExponentialLoss,
        zero_one_loss::<WeightedMajority<DecisionTreeClassifier>>,
        &sample,
        &sample,
    )
    .print_every(usize::MAX)
    .run(&path)
    .unwrap();

    assert_eq!(f.len(), 3);

    let trace = fs::read_to_string(&path).unwrap();
    let mut lines = trace.lines();
    assert_eq!(
        lines.next(),
        Some("ObjectiveValue,TrainLoss,TestLoss,Time"),
    );
    // Three boosting rounds plus the terminating round.
    assert_eq!(lines.count(), 4);

    fs::remove_file(&path).ok();
}


#[test]
fn cross_validation_folds_partition_the_sample() {
    let features = vec![
        Feature::new(
            "f0",
            vec![0.0, 1.0, 0.0, 1.0, 0.0, 1.0, 0.0, 1.0, 0.0, 1.0],
        ),
    ];
    let target = vec![
        -1.0, 1.0, -1.0, 1.0, -1.0, 1.0, -1.0, 1.0, -1.0, 1.0,
    ];
    let sample = Sample::from_columns(features, target.clone());

    let mut seen = Vec::new();
    for (train, test) in CrossValidation::new(&sample).n_folds(5) {
        assert_eq!(train.shape(), (8, 1));
        assert_eq!(test.shape(), (2, 1));
        seen.extend_from_slice(test.target());
    }

    // Without shuffling, the five test folds walk the rows in order.
    assert_eq!(seen, target);
}
