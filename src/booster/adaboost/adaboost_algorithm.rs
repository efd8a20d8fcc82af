//! Provides [`AdaBoost`](AdaBoost) by Freund & Schapire, 1995.
use crate::{
    Booster,
    WeakLearner,
    Classifier,
    WeightedMajority,
    Sample,

    research::Research,
};

use std::ops::ControlFlow;


const DEFAULT_ROUNDS: usize = 30;


/// Defines `AdaBoost`.
/// `AdaBoost` repeatedly trains a decision stump
/// (a depth-1 [`DecisionTree`](crate::DecisionTree))
/// on weighted examples and combines the stumps
/// into a [`WeightedMajority`] vote.
///
/// Example weights start at `1.0` for every example and are only ever
/// rescaled multiplicatively; no normalization pass is performed after
/// the update.
/// Only weight ratios enter the weighted error and the next split,
/// so the absolute drift across rounds is harmless.
///
/// # Example
/// The following code shows a small example
/// for running [`AdaBoost`](AdaBoost).
/// See also:
/// - [`DecisionTree`](crate::DecisionTree)
/// - [`DecisionTreeClassifier`](crate::DecisionTreeClassifier)
/// - [`WeightedMajority`]
///
/// ```no_run
/// use minilearn::prelude::*;
///
/// // A sample over binarized (0/1) feature columns,
/// // with labels in {-1.0, +1.0}.
/// let features = vec![
///     Feature::new("grade.A", vec![0.0, 1.0, 0.0, 1.0]),
///     Feature::new("term.36mo", vec![1.0, 1.0, 0.0, 0.0]),
/// ];
/// let sample = Sample::from_columns(
///     features, vec![1.0, 1.0, -1.0, -1.0]
/// );
///
/// // Initialize `AdaBoost` and run it for 10 rounds
/// // with a decision-stump weak learner.
/// let mut booster = AdaBoost::init(&sample)
///     .num_rounds(10);
/// let weak_learner = DecisionTree::stump();
///
/// let f = booster.run(&weak_learner);
///
/// // Get the predictions on the training set.
/// let predictions = f.predict_all(&sample);
///
/// let training_loss = zero_one_loss(&sample, &f);
/// println!("Training Loss is: {training_loss}");
/// ```
pub struct AdaBoost<'a, F> {
    // Training sample
    sample: &'a Sample,

    // Per-example weights. Initialized to all ones, never renormalized.
    dist: Vec<f64>,

    // Weights on hypotheses in `hypotheses`
    weights: Vec<f64>,

    // Hypotheses obtained by the weak-learner.
    hypotheses: Vec<F>,

    // Number of boosting rounds.
    n_rounds: usize,

    // Terminated iteration.
    // `AdaBoost` terminates in early step
    // if some stump classifies every example correctly (or wrongly).
    terminated: usize,
}


impl<'a, F> AdaBoost<'a, F> {
    /// Initialize the `AdaBoost`.
    /// This method sets some parameters `AdaBoost` holds.
    pub fn init(sample: &'a Sample) -> Self {
        let n_sample = sample.shape().0;

        AdaBoost {
            sample,

            dist: vec![1.0; n_sample],

            weights: Vec::new(),
            hypotheses: Vec::new(),

            n_rounds: DEFAULT_ROUNDS,
            terminated: usize::MAX,
        }
    }


    /// Set the number of boosting rounds,
    /// which equals the number of stumps in the returned ensemble
    /// unless a perfect stump terminates the run early.
    pub fn num_rounds(mut self, n_rounds: usize) -> Self {
        self.n_rounds = n_rounds;
        self
    }


    /// The iteration at which the algorithm stopped,
    /// or `usize::MAX` if it has not run yet.
    pub fn terminated(&self) -> usize {
        self.terminated
    }
}


impl<F> Booster<F> for AdaBoost<'_, F>
    where F: Classifier + Clone,
{
    type Output = WeightedMajority<F>;


    fn name(&self) -> &str {
        "AdaBoost"
    }


    fn info(&self) -> Option<Vec<(&str, String)>> {
        let info = Vec::from([
            ("# of rounds", format!("{}", self.n_rounds)),
        ]);
        Some(info)
    }


    fn preprocess(&mut self) {
        self.sample.is_valid_binary_instance();
        let n_sample = self.sample.shape().0;

        self.dist = vec![1.0; n_sample];
        self.weights = Vec::new();
        self.hypotheses = Vec::new();
        self.terminated = usize::MAX;
    }


    fn boost<W>(
        &mut self,
        weak_learner: &W,
        iteration: usize,
    ) -> ControlFlow<usize>
        where W: WeakLearner<Hypothesis = F>,
    {
        if self.n_rounds < iteration {
            self.terminated = self.n_rounds;
            return ControlFlow::Break(self.n_rounds);
        }


        // Get a new hypothesis for the current example weights.
        let h = weak_learner.produce(self.sample, &self.dist);


        let target = self.sample.target();
        let correct = h.predict_all(self.sample)
            .into_iter()
            .zip(target)
            .map(|(hx, y)| hx as f64 == *y)
            .collect::<Vec<bool>>();


        let total_weight = self.dist.iter().sum::<f64>();
        let mistake_weight = self.dist.iter()
            .zip(&correct)
            .map(|(d, c)| if *c { 0.0 } else { *d })
            .sum::<f64>();
        let weighted_error = mistake_weight / total_weight;


        // The confidence-weight formula is undefined at error 0 or 1.
        // Such a stump already classifies everything;
        // use it (or its negation) as the whole combined classifier.
        if weighted_error == 0.0 || weighted_error == 1.0 {
            self.terminated = iteration;
            let sign = if weighted_error == 0.0 { 1.0 } else { -1.0 };
            self.weights = vec![sign];
            self.hypotheses = vec![h];
            return ControlFlow::Break(iteration);
        }


        let confidence =
            0.5 * ((1.0 - weighted_error) / weighted_error).ln();


        // Rescale the example weights.
        // Correctly classified examples shrink, mistakes grow.
        let shrink = (-confidence).exp();
        let grow = confidence.exp();
        self.dist.iter_mut()
            .zip(&correct)
            .for_each(|(d, c)| {
                *d *= if *c { shrink } else { grow };
            });


        self.weights.push(confidence);
        self.hypotheses.push(h);

        ControlFlow::Continue(())
    }


    fn postprocess(&mut self) -> Self::Output {
        WeightedMajority::from_slices(
            &self.weights[..], &self.hypotheses[..]
        )
    }
}


impl<H> Research for AdaBoost<'_, H>
    where H: Classifier + Clone,
{
    type Output = WeightedMajority<H>;

    fn current_hypothesis(&self) -> Self::Output {
        WeightedMajority::from_slices(
            &self.weights[..], &self.hypotheses[..]
        )
    }
}
