//! Exports the algorithms and traits of this crate.
//!
pub use crate::booster::{
    // Booster trait
    Booster,

    // Boosted ensemble of decision stumps
    AdaBoost,
};


pub use crate::weak_learner::{
    // Weak learner trait
    WeakLearner,

    // Weighted binary decision tree
    DecisionTree,
    DecisionTreeClassifier,
};


pub use crate::linear_model::{
    // Logistic regression via gradient ascent
    LogisticRegression,
    LinearClassifier,

    // LASSO via cyclical coordinate descent
    Lasso,
    LinearRegressor,
    normalize_features,
};


pub use crate::hypothesis::{
    Classifier,
    Regressor,
    WeightedMajority,
};


pub use crate::sample::{
    Sample,
    Feature,
};


pub use crate::common::loss_functions::{
    accuracy,
    zero_one_loss,
    weighted_loss,
    residual_sum_of_squares,
};
