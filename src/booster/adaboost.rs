/// Defines the `AdaBoost` algorithm.
pub mod adaboost_algorithm;

pub use adaboost_algorithm::AdaBoost;
