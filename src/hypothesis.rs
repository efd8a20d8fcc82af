//! Defines the hypothesis traits and the weighted-majority ensemble.

mod hypothesis_traits;
mod weighted_majority;

pub use hypothesis_traits::{Classifier, Regressor};
pub use weighted_majority::WeightedMajority;
