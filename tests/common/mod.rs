//! Common test utilities and data generators.
#![allow(dead_code)]

use faer::{Col, Mat};
use std::io::Write;
use tempfile::NamedTempFile;

/// Simple deterministic "random" for reproducibility.
fn next_rand(state: &mut u64) -> f64 {
    *state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
    ((*state >> 33) as f64) / (u32::MAX as f64) * 2.0 - 1.0
}

/// Generate y = X[:, ..p] * beta + bias + noise.
///
/// The returned design matrix has `n_features` random columns followed by a
/// bias column of ones; the returned coefficients are `[1, 2, ..., p, bias]`.
pub fn generate_linear_data(
    n_samples: usize,
    n_features: usize,
    bias: f64,
    noise_std: f64,
    seed: u64,
) -> (Mat<f64>, Col<f64>, Col<f64>) {
    let mut rng_state = seed;

    let mut x = Mat::zeros(n_samples, n_features + 1);
    let mut y = Col::zeros(n_samples);
    let true_coefficients =
        Col::from_fn(n_features + 1, |j| if j < n_features { (j + 1) as f64 } else { bias });

    for i in 0..n_samples {
        let mut yi = bias;
        for j in 0..n_features {
            x[(i, j)] = next_rand(&mut rng_state);
            yi += x[(i, j)] * true_coefficients[j];
        }
        x[(i, n_features)] = 1.0;
        yi += noise_std * next_rand(&mut rng_state);
        y[i] = yi;
    }

    (x, y, true_coefficients)
}

/// Design matrix with x1 = 2 * x0 plus a bias column.
pub fn generate_collinear_data(n_samples: usize) -> (Mat<f64>, Col<f64>) {
    let x = Mat::from_fn(n_samples, 3, |i, j| match j {
        0 => i as f64,
        1 => 2.0 * i as f64,
        _ => 1.0,
    });
    let y = Col::from_fn(n_samples, |i| 1.0 + 2.0 * i as f64);
    (x, y)
}

/// Text rows of a housing-like table: `n_attributes` noisy attributes and a
/// target that depends linearly on them.
pub fn housing_like_text(n_rows: usize, n_attributes: usize, seed: u64) -> String {
    let mut rng_state = seed;
    let mut out = String::new();

    for _ in 0..n_rows {
        let mut target = 22.5;
        let mut fields = Vec::with_capacity(n_attributes + 1);
        for j in 0..n_attributes {
            let scale = 10f64.powi(j as i32 % 3);
            let value = scale * (1.0 + next_rand(&mut rng_state));
            target += (j as f64 - 1.5) * value / scale;
            fields.push(format!("{value:.5}"));
        }
        target += 0.1 * next_rand(&mut rng_state);
        fields.push(format!("{target:.4}"));
        out.push_str(&fields.join("  "));
        out.push('\n');
    }

    out
}

/// Write `contents` to a fresh temporary file.
pub fn write_data_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write temp file");
    file.flush().expect("flush temp file");
    file
}
