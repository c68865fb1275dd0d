//! PNG figures for the fitted model.
//!
//! Two figures are produced: predicted-vs-actual values (raw row order and
//! sorted by actual value, side by side) and a bar chart of standardized
//! coefficients.

mod predictions;
mod significance;

pub use predictions::{render_predictions, Overlay};
pub use significance::render_significance;

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while rendering a figure.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to create output directory {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{0} series has no points")]
    EmptySeries(&'static str),

    #[error("series length mismatch: {actual} actual values, {predicted} predicted")]
    SeriesLengthMismatch { actual: usize, predicted: usize },

    #[error("failed to draw {figure} figure: {message}")]
    Drawing {
        figure: &'static str,
        message: String,
    },
}

/// Adapter for plotters errors, which are generic over the backend.
fn drawing<E: std::fmt::Display>(figure: &'static str) -> impl Fn(E) -> RenderError {
    move |err| RenderError::Drawing {
        figure,
        message: err.to_string(),
    }
}

fn ensure_parent(path: &Path) -> Result<(), RenderError> {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => {
            fs::create_dir_all(dir).map_err(|source| RenderError::Io {
                path: dir.to_path_buf(),
                source,
            })
        }
        _ => Ok(()),
    }
}

/// Axis range covering all finite values with a 5% pad on each side.
fn padded_range<'a>(values: impl IntoIterator<Item = &'a f64>, include_zero: bool) -> (f64, f64) {
    let (mut lo, mut hi) = if include_zero {
        (0.0, 0.0)
    } else {
        (f64::INFINITY, f64::NEG_INFINITY)
    };
    for &v in values {
        if v.is_finite() {
            lo = lo.min(v);
            hi = hi.max(v);
        }
    }
    if !lo.is_finite() || !hi.is_finite() {
        return (0.0, 1.0);
    }
    if hi - lo < f64::EPSILON {
        return (lo - 1.0, hi + 1.0);
    }
    let pad = 0.05 * (hi - lo);
    (lo - pad, hi + pad)
}
