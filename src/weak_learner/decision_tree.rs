/// Defines the weighted decision tree weak learner.
pub mod decision_tree_algorithm;
/// Defines the classifier produced by `DecisionTree`.
pub mod decision_tree_classifier;

/// Defines the inner representations of `DecisionTreeClassifier`.
mod node;


pub use decision_tree_algorithm::{DecisionTree, weighted_mistakes};
pub use decision_tree_classifier::DecisionTreeClassifier;
