//! Matrix utility functions.

use faer::{Col, Mat};
use statrs::statistics::Statistics;

/// Detect columns that are constant (every value within `tolerance` of the
/// first row).
pub fn detect_constant_columns(x: &Mat<f64>, tolerance: f64) -> Vec<bool> {
    let n_cols = x.ncols();
    let n_rows = x.nrows();

    if n_rows == 0 {
        return vec![true; n_cols];
    }

    let mut constant = vec![false; n_cols];

    for j in 0..n_cols {
        let first = x[(0, j)];
        let all_same = (1..n_rows).all(|i| (x[(i, j)] - first).abs() <= tolerance);
        constant[j] = all_same;
    }

    constant
}

/// Copy column `j` out as a plain vector.
pub fn column(x: &Mat<f64>, j: usize) -> Vec<f64> {
    (0..x.nrows()).map(|i| x[(i, j)]).collect()
}

/// Column means.
pub fn column_means(x: &Mat<f64>) -> Col<f64> {
    Col::from_fn(x.ncols(), |j| column(x, j).mean())
}

/// Column sample standard deviations (n - 1 divisor).
///
/// NaN for columns of fewer than two rows.
pub fn column_std_devs(x: &Mat<f64>) -> Col<f64> {
    Col::from_fn(x.ncols(), |j| column(x, j).std_dev())
}

/// Copy a column vector into a `Vec`.
pub fn to_vec(v: &Col<f64>) -> Vec<f64> {
    v.iter().copied().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_constant_columns() {
        let mut x = Mat::zeros(5, 3);
        for i in 0..5 {
            x[(i, 0)] = 1.0;
            x[(i, 1)] = i as f64;
            x[(i, 2)] = 2.0;
        }

        let constant = detect_constant_columns(&x, 1e-10);
        assert!(constant[0]);
        assert!(!constant[1]);
        assert!(constant[2]);
    }

    #[test]
    fn test_detect_constant_columns_empty() {
        let x = Mat::<f64>::zeros(0, 3);
        let constant = detect_constant_columns(&x, 1e-10);
        assert_eq!(constant.len(), 3);
        assert!(constant.iter().all(|&c| c));
    }

    #[test]
    fn test_detect_constant_columns_exact() {
        let x = Mat::from_fn(3, 1, |i, _| if i == 1 { 1.000001 } else { 1.0 });

        assert!(!detect_constant_columns(&x, 0.0)[0]);
        assert!(detect_constant_columns(&x, 1e-5)[0]);
    }

    #[test]
    fn test_column_means() {
        let x = Mat::from_fn(4, 2, |i, j| ((i + 1) * if j == 0 { 1 } else { 10 }) as f64);
        let means = column_means(&x);

        assert!((means[0] - 2.5).abs() < 1e-10);
        assert!((means[1] - 25.0).abs() < 1e-10);
    }

    #[test]
    fn test_column_std_devs_sample() {
        // [2, 4, 4, 4, 5, 5, 7, 9]: population sd 2, sample sd sqrt(32/7)
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let x = Mat::from_fn(8, 1, |i, _| values[i]);
        let sd = column_std_devs(&x);

        assert!((sd[0] - (32.0f64 / 7.0).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_to_vec() {
        let v = Col::from_fn(3, |i| i as f64);
        assert_eq!(to_vec(&v), vec![0.0, 1.0, 2.0]);
    }
}
