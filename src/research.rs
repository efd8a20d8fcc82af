//! Instrumentation around training:
//! per-round logging and cross validation.

mod logger;
mod cross_validation;

pub use logger::{Logger, Research};
pub use cross_validation::CrossValidation;
