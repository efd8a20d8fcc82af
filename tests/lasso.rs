use minilearn::prelude::*;
use minilearn::linear_model::coordinate_descent_step;

use rand::prelude::*;
use rand_distr::StandardNormal;


/// Four houses, two features plus the intercept.
/// The least-squares fit is `-0.25 + 1.75 f1 + 0.25 f2`
/// with a residual sum of squares of `0.25`.
fn house_sample() -> Sample {
    let features = vec![
        Feature::new("f1", vec![1.0, 2.0, 3.0, 4.0]),
        Feature::new("f2", vec![1.0, 0.0, 1.0, 0.0]),
    ];
    Sample::from_columns(features, vec![2.0, 3.0, 5.0, 7.0])
        .with_intercept()
}


#[test]
fn normalize_features_checkpoint() {
    let features = vec![
        Feature::new("a", vec![3.0, 4.0]),
        Feature::new("b", vec![6.0, 8.0]),
        Feature::new("c", vec![9.0, 12.0]),
    ];
    let sample = Sample::from_columns(features, vec![0.0, 0.0]);

    let (normalized, norms) = normalize_features(&sample);

    assert_eq!(norms, vec![5.0, 10.0, 15.0]);
    for feature in normalized.features() {
        assert_eq!(feature.values(), &[0.6, 0.8]);
    }
}


#[test]
fn coordinate_step_checkpoint() {
    // The documented fixture:
    // feature matrix [[3/√13, 1/√10], [2/√13, 3/√10]],
    // output [1, 1], weights [1, 4], i = 1, λ = 0.1.
    let s13 = 13.0f64.sqrt();
    let s10 = 10.0f64.sqrt();
    let features = vec![
        Feature::new("a", vec![3.0 / s13, 2.0 / s13]),
        Feature::new("b", vec![1.0 / s10, 3.0 / s10]),
    ];
    let sample = Sample::from_columns(features, vec![1.0, 1.0]);

    let updated = coordinate_descent_step(1, &sample, &[1.0, 4.0], 0.1);
    assert!((updated - 0.425558846691).abs() < 1e-9);
}


#[test]
fn intercept_is_never_regularized() {
    let sample = house_sample();
    let (normalized, _) = normalize_features(&sample);

    // Even an enormous penalty leaves the intercept update at ρ_0.
    let small = coordinate_descent_step(0, &normalized, &[0.0; 3], 1e-3);
    let large = coordinate_descent_step(0, &normalized, &[0.0; 3], 1e12);
    // Parallel reductions may reassociate the ρ sum,
    // so compare up to numerical noise rather than bitwise.
    assert!((small - large).abs() < 1e-12);
    assert!(large != 0.0);
}


#[test]
fn unpenalized_descent_recovers_the_least_squares_fit() {
    let sample = house_sample();
    let (normalized, norms) = normalize_features(&sample);

    let f = Lasso::init(&normalized)
        .l1_penalty(0.0)
        .tolerance(1e-10)
        .run();
    let f = f.rescale(&norms);

    let expected = [-0.25, 1.75, 0.25];
    for (w, e) in f.weights().iter().zip(expected) {
        assert!((w - e).abs() < 1e-6, "weight {w} differs from {e}");
    }

    let rss = residual_sum_of_squares(&sample, &f);
    assert!((rss - 0.25).abs() < 1e-6);
}


#[test]
fn converged_weights_are_a_fixed_point() {
    let sample = house_sample();
    let (normalized, _) = normalize_features(&sample);

    let solver = Lasso::init(&normalized)
        .l1_penalty(2.0)
        .tolerance(1e-10);

    let f = solver.run();
    let g = solver.run_from(f.weights().to_vec());

    for (a, b) in f.weights().iter().zip(g.weights()) {
        assert!((a - b).abs() < 1e-8);
    }
}


#[test]
fn sparsity_is_non_increasing_in_the_penalty() {
    let sample = house_sample();
    let (normalized, _) = normalize_features(&sample);

    let nonzero_counts = [0.0, 2.0, 4.0, 1e4]
        .into_iter()
        .map(|l1_penalty| {
            let f = Lasso::init(&normalized)
                .l1_penalty(l1_penalty)
                .tolerance(1e-10)
                .run();
            f.weights().len() - f.zero_count()
        })
        .collect::<Vec<_>>();

    assert_eq!(nonzero_counts, vec![3, 2, 1, 1]);
    assert!(nonzero_counts.windows(2).all(|w| w[1] <= w[0]));
}


#[test]
fn heavy_penalty_zeroes_exactly_and_drops_features() {
    let sample = house_sample();
    let (normalized, norms) = normalize_features(&sample);

    let f = Lasso::init(&normalized)
        .l1_penalty(1e4)
        .tolerance(1e-10)
        .run();

    // Soft-thresholding produces exact zeros, not small values.
    assert_eq!(f.weights()[1], 0.0);
    assert_eq!(f.weights()[2], 0.0);
    assert!(f.weights()[0] != 0.0);

    // The rescaled intercept-only model predicts a constant.
    let f = f.rescale(&norms);
    let predictions = f.predict_all(&sample);
    for p in &predictions {
        assert!((p - predictions[0]).abs() < 1e-12);
    }
}


#[test]
fn recovers_a_noisy_linear_signal() {
    // y = 3 x + 1 + ε with small gaussian noise;
    // a light penalty should land near the true slope.
    let mut rng = StdRng::seed_from_u64(42);
    let n_sample = 50;

    let x = (0..n_sample)
        .map(|_| 10.0 * rng.gen::<f64>())
        .collect::<Vec<f64>>();
    let y = x.iter()
        .map(|xi| {
            let noise: f64 = rng.sample(StandardNormal);
            3.0 * xi + 1.0 + 0.1 * noise
        })
        .collect::<Vec<f64>>();

    let features = vec![Feature::new("x", x)];
    let sample = Sample::from_columns(features, y).with_intercept();
    let (normalized, norms) = normalize_features(&sample);

    let f = Lasso::init(&normalized)
        .l1_penalty(1e-2)
        .tolerance(1e-8)
        .run();
    let f = f.rescale(&norms);

    let slope = f.weights()[1];
    assert!(
        (slope - 3.0).abs() < 0.1,
        "slope {slope} strays from the true 3.0",
    );
}
