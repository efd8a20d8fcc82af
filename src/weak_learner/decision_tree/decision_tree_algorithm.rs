use rayon::prelude::*;
use fixedbitset::FixedBitSet;


use crate::{Sample, WeakLearner};
use crate::sample::Feature;
use crate::common::checker;


use crate::weak_learner::common::{
    type_and_struct::*,
    split_rule::*,
};
use super::{
    node::*,
    decision_tree_classifier::DecisionTreeClassifier,
};


use std::fmt;


/// A node whose weighted-mistake total is at most this value
/// is treated as pure.
/// The slack absorbs floating-point noise in the weight sums.
const PURE_NODE_TOLERANCE: f64 = 1e-15;


/// The weighted Decision Tree algorithm.
/// Given a set of training examples with 0/1-valued features
/// and non-negative per-example weights,
/// [`DecisionTree`] greedily grows a binary tree that minimizes
/// the weighted classification error at every split,
/// and outputs it as a [`DecisionTreeClassifier`].
///
/// Each feature is used at most once per root-to-leaf path:
/// a chosen splitting feature is excluded from the candidate set
/// handed to both of its children.
///
/// # Example
/// ```no_run
/// use minilearn::prelude::*;
///
/// // Build a sample of binarized feature columns in memory.
/// let features = vec![
///     Feature::new("grade.A", vec![0.0, 1.0, 0.0, 1.0]),
///     Feature::new("term.36mo", vec![1.0, 1.0, 0.0, 0.0]),
/// ];
/// let sample = Sample::from_columns(
///     features, vec![1.0, 1.0, -1.0, -1.0]
/// );
///
/// // Grow a tree of depth at most 2 with uniform weights.
/// let tree = DecisionTree::new(2);
/// let dist = vec![1.0; 4];
/// let f = tree.produce(&sample, &dist);
///
/// let loss = zero_one_loss(&sample, &f);
/// println!("loss (train) is: {loss}");
/// ```
pub struct DecisionTree {
    max_depth: Depth,
}


impl DecisionTree {
    /// Construct a `DecisionTree` growing trees
    /// of depth at most `max_depth`.
    #[inline]
    pub fn new(max_depth: usize) -> Self {
        assert!(max_depth > 0, "max depth must be at least 1");
        Self { max_depth: Depth::from(max_depth) }
    }


    /// Construct a `DecisionTree` growing decision stumps,
    /// trees of depth `1`.
    #[inline]
    pub fn stump() -> Self {
        Self::new(1)
    }
}


impl WeakLearner for DecisionTree {
    type Hypothesis = DecisionTreeClassifier;


    fn name(&self) -> &str {
        "Decision Tree"
    }


    fn info(&self) -> Option<Vec<(&str, String)>> {
        let info = Vec::from([
            ("Max depth", format!("{}", self.max_depth)),
            ("Split criterion", "Weighted mistakes".to_string()),
        ]);
        Some(info)
    }


    fn produce(&self, sample: &Sample, dist: &[f64])
        -> Self::Hypothesis
    {
        checker::check_sample(sample);
        sample.is_valid_binary_instance();
        checker::check_binary_features(sample);
        checker::check_distribution(sample, dist);

        let n_sample = sample.shape().0;
        let n_feature = sample.shape().1;

        let indices = (0..n_sample).collect::<Vec<usize>>();
        let mut candidates = FixedBitSet::with_capacity(n_feature);
        candidates.insert_range(..);

        let root = grow(
            sample, dist, indices, candidates, 1, self.max_depth
        );

        DecisionTreeClassifier::from(root)
    }
}


/// Grow the subtree over the examples in `indices`.
/// `depth` counts the current level starting from `1` at the root.
fn grow(
    sample: &Sample,
    dist: &[f64],
    indices: Vec<usize>,
    mut candidates: FixedBitSet,
    depth: usize,
    max_depth: Depth,
) -> Node
{
    let target = sample.target();
    let (mistakes, prediction) =
        weighted_mistakes_at(target, dist, &indices);

    // Stopping condition 1: the node is pure.
    if mistakes <= PURE_NODE_TOLERANCE {
        return Node::leaf(prediction);
    }
    // Stopping condition 2: no features left to split on.
    if candidates.count_ones(..) == 0 {
        return Node::leaf(prediction);
    }
    // Stopping condition 3: the depth limit is reached.
    if max_depth < depth {
        return Node::leaf(prediction);
    }

    let feature = best_splitting_feature(sample, &candidates, dist, &indices)
        .expect("No candidate features to split on");

    // The chosen feature is excluded from the candidate set
    // handed to both children.
    candidates.set(feature, false);

    let column = sample.feature(feature);
    let rule = Splitter::new(feature, column.name());

    let (lindices, rindices): (Vec<usize>, Vec<usize>) = indices
        .into_iter()
        .partition(|&i| column[i] == 0.0);

    // A one-sided split cannot make progress; close the node.
    if lindices.is_empty() || rindices.is_empty() {
        return Node::leaf(prediction);
    }

    let depth = depth + 1;
    let left = grow(
        sample, dist, lindices, candidates.clone(), depth, max_depth
    );
    let right = grow(sample, dist, rindices, candidates, depth, max_depth);

    Node::branch(rule, left, right)
}


/// Returns the total weight of mistakes of the better
/// constant prediction over `target`,
/// together with that prediction.
/// Predicting all `+1` mistakes the weight of the negative examples
/// and vice versa; ties prefer `+1`.
pub fn weighted_mistakes(target: &[f64], dist: &[f64]) -> (f64, i8) {
    assert_eq!(
        target.len(),
        dist.len(),
        "{} labels but {} weights",
        target.len(),
        dist.len(),
    );
    let indices = (0..target.len()).collect::<Vec<usize>>();
    let (mistakes, prediction) =
        weighted_mistakes_at(target, dist, &indices);

    (mistakes, prediction.0)
}


fn weighted_mistakes_at(target: &[f64], dist: &[f64], indices: &[usize])
    -> (f64, Prediction)
{
    let mut weight_positive = 0.0;
    let mut weight_negative = 0.0;
    for &i in indices {
        if target[i] > 0.0 {
            weight_positive += dist[i];
        } else {
            weight_negative += dist[i];
        }
    }

    if weight_negative <= weight_positive {
        (weight_negative, Prediction::from(1))
    } else {
        (weight_positive, Prediction::from(-1))
    }
}


/// Returns the candidate feature whose 0/1 partition of `indices`
/// attains the smallest weighted classification error.
/// Candidates are scanned in parallel and reduced on the pair
/// `(error, feature index)`,
/// so exact ties go to the lowest feature index deterministically.
fn best_splitting_feature(
    sample: &Sample,
    candidates: &FixedBitSet,
    dist: &[f64],
    indices: &[usize],
) -> Option<usize>
{
    let target = sample.target();
    let candidates = candidates.ones().collect::<Vec<usize>>();

    candidates.into_par_iter()
        .map(|j| {
            let error = split_error(sample.feature(j), target, dist, indices);
            (error, j)
        })
        .min_by(|x, y| x.partial_cmp(y).unwrap())
        .map(|(_, j)| j)
}


/// The weighted classification error of splitting `indices`
/// on the given binary column:
/// the weighted mistakes of the best constant prediction on each side,
/// summed and divided by the total weight.
fn split_error(
    feature: &Feature,
    target: &[f64],
    dist: &[f64],
    indices: &[usize],
) -> f64
{
    let mut left_positive = 0.0;
    let mut left_negative = 0.0;
    let mut right_positive = 0.0;
    let mut right_negative = 0.0;

    for &i in indices {
        let weight = dist[i];
        if feature[i] == 0.0 {
            if target[i] > 0.0 {
                left_positive += weight;
            } else {
                left_negative += weight;
            }
        } else if target[i] > 0.0 {
            right_positive += weight;
        } else {
            right_negative += weight;
        }
    }

    let mistakes = left_positive.min(left_negative)
        + right_positive.min(right_negative);
    let total = left_positive + left_negative
        + right_positive + right_negative;

    mistakes / total
}


impl fmt::Display for DecisionTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\
            ----------\n\
            # Decision Tree Weak Learner\n\n\
            - Max depth: {}\n\
            - Splitting criterion: Weighted mistakes\n\
            ----------\
            ",
            self.max_depth,
        )
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weighted_mistakes_prefers_lighter_side() {
        let target = [-1.0, -1.0, 1.0, 1.0, 1.0];
        let dist = [1.0, 2.0, 0.5, 1.0, 1.0];
        assert_eq!(weighted_mistakes(&target, &dist), (2.5, -1));
    }

    #[test]
    fn weighted_mistakes_tie_prefers_positive() {
        let target = [-1.0, 1.0];
        let dist = [1.0, 1.0];
        assert_eq!(weighted_mistakes(&target, &dist), (1.0, 1));
    }

    #[test]
    fn weighted_mistakes_of_empty_slice_is_zero() {
        assert_eq!(weighted_mistakes(&[], &[]), (0.0, 1));
    }

    #[test]
    fn best_split_ignores_zero_weight_examples() {
        // Feature `a` is perfect on the weighted rows;
        // feature `b` errs on one of them
        // and is right only on the zero-weight row.
        let features = vec![
            Feature::new("a", vec![0.0, 1.0, 0.0]),
            Feature::new("b", vec![1.0, 1.0, 0.0]),
        ];
        let sample = Sample::from_columns(
            features, vec![-1.0, 1.0, 1.0]
        );
        let dist = [1.0, 1.0, 0.0];
        let indices = [0, 1, 2];

        let mut candidates = FixedBitSet::with_capacity(2);
        candidates.insert_range(..);

        let best = best_splitting_feature(
            &sample, &candidates, &dist, &indices
        );
        assert_eq!(best, Some(0));
    }

    #[test]
    fn best_split_tie_takes_first_feature() {
        // Both features split identically; the scan must pick index 0.
        let features = vec![
            Feature::new("a", vec![0.0, 1.0]),
            Feature::new("b", vec![0.0, 1.0]),
        ];
        let sample = Sample::from_columns(features, vec![-1.0, 1.0]);
        let dist = [1.0, 1.0];
        let indices = [0, 1];

        let mut candidates = FixedBitSet::with_capacity(2);
        candidates.insert_range(..);

        let best = best_splitting_feature(
            &sample, &candidates, &dist, &indices
        );
        assert_eq!(best, Some(0));
    }
}
