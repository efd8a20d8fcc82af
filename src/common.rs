//! Defines some common functions used in this library.

/// Defines loss functions over a trained hypothesis.
pub mod loss_functions;

/// Defines objective functions for logging boosting progress.
pub mod objective_functions;

/// Defines some useful functions such as inner products.
pub mod utils;

/// Defines some checker functions.
pub(crate) mod checker;

pub use objective_functions::{ObjectiveFunction, ExponentialLoss};
