//! Single-feature linear regression trained by stochastic gradient descent.
//!
//! Training pairs are extracted from free-form text, one pair per line.

pub mod logging;
pub mod opts;
pub mod prelude;
pub mod regression;

pub use crate::prelude::Result;
pub use crate::regression::{Regression, DEFAULT_STEP, DEFAULT_THRESHOLD};
