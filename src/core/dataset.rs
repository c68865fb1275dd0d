//! The loaded data matrix and its regression views.

use crate::io::{load_matrix, LoadError};
use faer::{Col, Mat};
use std::path::Path;

/// A rectangular numeric dataset whose last column is the regression target.
///
/// Immutable once constructed; the design matrix and target vector are
/// derived copies.
#[derive(Debug, Clone)]
pub struct Dataset {
    data: Mat<f64>,
}

impl Dataset {
    /// Wrap a matrix. Requires at least one row and two columns
    /// (one attribute plus the target).
    pub fn new(data: Mat<f64>) -> Result<Self, LoadError> {
        if data.nrows() == 0 {
            return Err(LoadError::Empty {
                path: "<matrix>".into(),
            });
        }
        if data.ncols() < 2 {
            return Err(LoadError::TooFewColumns {
                found: data.ncols(),
            });
        }
        Ok(Self { data })
    }

    /// Load a dataset from a whitespace-delimited text file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        Self::new(load_matrix(path)?)
    }

    /// Number of rows (observations).
    pub fn n_rows(&self) -> usize {
        self.data.nrows()
    }

    /// Number of columns, target included.
    pub fn n_columns(&self) -> usize {
        self.data.ncols()
    }

    /// Number of attribute columns (everything but the target).
    pub fn n_attributes(&self) -> usize {
        self.data.ncols() - 1
    }

    /// The raw matrix.
    pub fn data(&self) -> &Mat<f64> {
        &self.data
    }

    /// Copy of the data with the target column overwritten by the constant
    /// bias column of 1.0.
    pub fn design_matrix(&self) -> Mat<f64> {
        let bias = self.n_columns() - 1;
        Mat::from_fn(self.n_rows(), self.n_columns(), |i, j| {
            if j == bias {
                1.0
            } else {
                self.data[(i, j)]
            }
        })
    }

    /// The last column, unmodified.
    pub fn target(&self) -> Col<f64> {
        let last = self.n_columns() - 1;
        Col::from_fn(self.n_rows(), |i| self.data[(i, last)])
    }
}
