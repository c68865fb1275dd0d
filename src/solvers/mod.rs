//! Least-squares solvers.

mod ols;
mod traits;

pub use ols::{fit, predict, FittedOls, OlsRegressor, OlsRegressorBuilder};
pub use traits::{FittedRegressor, RegressionError, Regressor};
