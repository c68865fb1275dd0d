//! Parallel-array sorting.

use crate::solvers::RegressionError;

/// Stable ascending sort of `keys`, applying the same permutation to `values`.
///
/// Ties keep their input order. Keys are compared with `f64::total_cmp`.
pub fn sort_by_key(
    keys: &[f64],
    values: &[f64],
) -> Result<(Vec<f64>, Vec<f64>), RegressionError> {
    if keys.len() != values.len() {
        return Err(RegressionError::DimensionMismatch {
            x_rows: keys.len(),
            y_len: values.len(),
        });
    }

    let order = argsort(keys);
    let sorted_keys = order.iter().map(|&i| keys[i]).collect();
    let reordered = order.iter().map(|&i| values[i]).collect();
    Ok((sorted_keys, reordered))
}

/// Indices that stably sort `keys` ascending.
pub fn argsort(keys: &[f64]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..keys.len()).collect();
    order.sort_by(|&a, &b| keys[a].total_cmp(&keys[b]));
    order
}
