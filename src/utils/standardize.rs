//! Z-score standardization of a design matrix.

use super::matrix::{column_means, column_std_devs, detect_constant_columns};
use crate::solvers::RegressionError;
use faer::Mat;

/// Rescale every column except the last to zero mean and unit sample standard
/// deviation, and set the last (bias) column to 1.0.
///
/// The input is not modified. Fails with [`RegressionError::DegenerateColumn`]
/// if a non-bias column holds a single repeated value, since its standard
/// deviation is zero.
pub fn standardize(x: &Mat<f64>) -> Result<Mat<f64>, RegressionError> {
    let n_rows = x.nrows();
    let n_cols = x.ncols();

    if n_rows < 2 {
        return Err(RegressionError::InsufficientObservations {
            needed: 2,
            got: n_rows,
        });
    }
    if n_cols == 0 {
        return Ok(Mat::zeros(n_rows, 0));
    }

    let bias = n_cols - 1;
    let constant = detect_constant_columns(x, 0.0);
    let means = column_means(x);
    let std_devs = column_std_devs(x);

    for j in 0..bias {
        let sd = std_devs[j];
        if constant[j] || !(sd > 0.0 && sd.is_finite()) {
            return Err(RegressionError::DegenerateColumn { column: j });
        }
    }

    Ok(Mat::from_fn(n_rows, n_cols, |i, j| {
        if j == bias {
            1.0
        } else {
            (x[(i, j)] - means[j]) / std_devs[j]
        }
    }))
}
