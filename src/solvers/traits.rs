//! Core traits for regression estimators.

use crate::core::RegressionResult;
use faer::{Col, Mat};
use thiserror::Error;

/// Errors that can occur during fitting and preprocessing.
#[derive(Debug, Error)]
pub enum RegressionError {
    #[error("dimension mismatch: X has {x_rows} rows but y has {y_len} elements")]
    DimensionMismatch { x_rows: usize, y_len: usize },

    #[error("insufficient observations: need at least {needed}, got {got}")]
    InsufficientObservations { needed: usize, got: usize },

    #[error("matrix is singular or nearly singular (rank {rank} of {columns} columns)")]
    SingularMatrix { rank: usize, columns: usize },

    #[error("column {column} has zero standard deviation")]
    DegenerateColumn { column: usize },

    #[error("invalid options: {0}")]
    InvalidOptions(#[from] crate::core::OptionsError),
}

/// A regression estimator that can be fit to data.
///
/// Fitting returns a separate fitted model that makes predictions.
pub trait Regressor {
    /// The type of the fitted model.
    type Fitted: FittedRegressor;

    /// Fit the model to the data.
    ///
    /// # Arguments
    /// * `x` - Design matrix of shape (n_samples, n_features), bias column included
    /// * `y` - Target vector of length n_samples
    fn fit(&self, x: &Mat<f64>, y: &Col<f64>) -> Result<Self::Fitted, RegressionError>;
}

/// A fitted regression model that can make predictions.
pub trait FittedRegressor {
    /// Make predictions on new data with the same column layout.
    fn predict(&self, x: &Mat<f64>) -> Col<f64>;

    /// Access the regression results (coefficients, statistics, etc.).
    fn result(&self) -> &RegressionResult;

    /// Get the coefficients (convenience method).
    fn coefficients(&self) -> &Col<f64> {
        &self.result().coefficients
    }

    /// Get R² (convenience method).
    fn r_squared(&self) -> f64 {
        self.result().r_squared
    }

    /// Calculate the score (R²) on new data.
    fn score(&self, x: &Mat<f64>, y: &Col<f64>) -> f64 {
        let predictions = self.predict(x);
        let n = y.nrows();

        let y_mean: f64 = y.iter().sum::<f64>() / n as f64;

        let tss: f64 = y.iter().map(|&yi| (yi - y_mean).powi(2)).sum();
        let rss: f64 = y
            .iter()
            .zip(predictions.iter())
            .map(|(&yi, &pi)| (yi - pi).powi(2))
            .sum();

        if tss == 0.0 {
            if rss == 0.0 {
                1.0
            } else {
                0.0
            }
        } else {
            1.0 - rss / tss
        }
    }
}
