#![warn(missing_docs)]

//!
//! A crate that provides some classical supervised-learning algorithms,
//! implemented from the update rules up.
//!
//! This crate includes two families of algorithms.
//!
//! - Boosting / weighted classification
//!     A weighted binary decision tree over 0/1-valued features,
//!     usable on its own or as the weak learner for `AdaBoost`,
//!     which combines depth-1 trees (decision stumps) into a
//!     weighted-majority vote.
//!
//! - Linear models
//!     Binary logistic regression trained by batch gradient ascent
//!     on the log-likelihood, and a LASSO linear regression solver
//!     based on cyclical coordinate descent with soft-thresholding.
//!
//! All algorithms consume the same in-memory [`Sample`] type:
//! named dense feature columns together with a target vector.
//! Data loading, categorical encoding, and train/test splitting are
//! the caller's business; [`Sample::from_dataframe`] is the boundary
//! for callers holding a `polars` dataframe.

pub mod sample;
pub mod hypothesis;
pub mod common;
pub mod weak_learner;
pub mod booster;
pub mod linear_model;
pub mod research;
pub mod prelude;


pub use sample::{Sample, Feature};

pub use hypothesis::{
    Classifier,
    Regressor,
    WeightedMajority,
};

pub use booster::{Booster, AdaBoost};

pub use weak_learner::{
    WeakLearner,
    DecisionTree,
    DecisionTreeClassifier,
};

pub use linear_model::{
    LogisticRegression,
    LinearClassifier,
    Lasso,
    LinearRegressor,
};

pub use research::{Logger, Research, CrossValidation};
