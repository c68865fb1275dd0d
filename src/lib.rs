//! Least-squares regression of housing values.
//!
//! Loads a whitespace-delimited numeric matrix whose last column is the
//! target, fits an ordinary least squares model with a bias column, refits on
//! z-scored attributes to compare attribute significance, and renders the
//! results as PNG figures.
//!
//! # Example
//!
//! ```rust,ignore
//! use housing_regression::prelude::*;
//!
//! let dataset = Dataset::from_file("DATA/housing.data")?;
//! let design = dataset.design_matrix();
//! let target = dataset.target();
//!
//! let fitted = OlsRegressor::builder().build().fit(&design, &target)?;
//! println!("R² = {}", fitted.r_squared());
//!
//! let standardized = standardize(&design)?;
//! let significance = fit(&standardized, &target)?;
//! ```

pub mod core;
pub mod io;
pub mod pipeline;
pub mod render;
pub mod solvers;
pub mod utils;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::core::{Dataset, PipelineOptions, RegressionOptions, RegressionResult};
    pub use crate::io::{load_matrix, load_vector, LoadError};
    pub use crate::pipeline::{run, run_dataset, PipelineError, PipelineReport};
    pub use crate::solvers::{
        fit, predict, FittedOls, FittedRegressor, OlsRegressor, RegressionError, Regressor,
    };
    pub use crate::utils::{sort_by_key, standardize};
}

pub use crate::core::{Dataset, PipelineOptions, RegressionOptions, RegressionResult};
pub use crate::pipeline::{run, PipelineError, PipelineReport};
pub use crate::solvers::{FittedRegressor, OlsRegressor, RegressionError, Regressor};
