//! Ordinary Least Squares regression solver.

use crate::core::{RegressionOptions, RegressionOptionsBuilder, RegressionResult};
use crate::solvers::traits::{FittedRegressor, RegressionError, Regressor};
use faer::linalg::solvers::ColPivQr;
use faer::{Col, Mat, MatRef};
use statrs::distribution::{ContinuousCDF, FisherSnedecor};

/// Ordinary Least Squares regression estimator.
///
/// Solves `min ‖Xβ − y‖₂` for a rectangular design matrix with at least as many
/// rows as columns. The design matrix is expected to carry its own bias column;
/// no intercept is added here. Rank-deficient design matrices are rejected
/// with [`RegressionError::SingularMatrix`].
///
/// # Example
///
/// ```rust,ignore
/// use housing_regression::solvers::{OlsRegressor, Regressor, FittedRegressor};
/// use faer::{Mat, Col};
///
/// let x = Mat::from_fn(100, 2, |i, j| if j == 1 { 1.0 } else { i as f64 });
/// let y = Col::from_fn(100, |i| 1.0 + 2.0 * i as f64);
///
/// let fitted = OlsRegressor::builder().build().fit(&x, &y)?;
///
/// println!("R² = {}", fitted.r_squared());
/// println!("Coefficients: {:?}", fitted.coefficients());
/// ```
#[derive(Debug, Clone, Default)]
pub struct OlsRegressor {
    options: RegressionOptions,
}

impl OlsRegressor {
    /// Create a new OLS regressor with the given options.
    pub fn new(options: RegressionOptions) -> Self {
        Self { options }
    }

    /// Create a builder for configuring the regressor.
    pub fn builder() -> OlsRegressorBuilder {
        OlsRegressorBuilder::default()
    }

    /// Numerical rank of `x` from the diagonal of its column-pivoted R factor,
    /// using the relative `tolerance` described on [`RegressionOptions`].
    pub fn rank(x: &Mat<f64>, tolerance: f64) -> usize {
        pivoted_rank(x.col_piv_qr().R(), tolerance)
    }

    /// Check if a matrix has full column rank.
    pub fn is_full_rank(x: &Mat<f64>, tolerance: f64) -> bool {
        Self::rank(x, tolerance) == x.ncols()
    }
}

impl Regressor for OlsRegressor {
    type Fitted = FittedOls;

    fn fit(&self, x: &Mat<f64>, y: &Col<f64>) -> Result<Self::Fitted, RegressionError> {
        self.options.validate()?;

        let n_samples = x.nrows();
        let n_params = x.ncols();

        if x.nrows() != y.nrows() {
            return Err(RegressionError::DimensionMismatch {
                x_rows: x.nrows(),
                y_len: y.nrows(),
            });
        }

        if n_params == 0 || n_samples < n_params {
            return Err(RegressionError::InsufficientObservations {
                needed: n_params.max(1),
                got: n_samples,
            });
        }

        let tolerance = self.options.rank_tolerance_for(n_samples, n_params);
        let qr = x.col_piv_qr();
        let rank = pivoted_rank(qr.R(), tolerance);
        if rank < n_params {
            return Err(RegressionError::SingularMatrix {
                rank,
                columns: n_params,
            });
        }

        let coefficients = solve_with_qr(&qr, y);
        let fitted_values = predict(x, &coefficients);
        let residuals = Col::from_fn(n_samples, |i| y[i] - fitted_values[i]);

        let mut result =
            self.compute_statistics(y, coefficients, residuals, fitted_values, rank);
        result.rank_tolerance = tolerance;

        Ok(FittedOls {
            options: self.options.clone(),
            result,
        })
    }
}

/// Count the pivots with `|R_ii| > tolerance * |R_00|`.
///
/// Column pivoting puts the largest column norm first, so `|R_00|` sets the
/// scale of the matrix and the count does not depend on the data's units.
fn pivoted_rank(r: MatRef<'_, f64>, tolerance: f64) -> usize {
    let k = r.nrows().min(r.ncols());
    if k == 0 {
        return 0;
    }

    let scale = r[(0, 0)].abs();
    if !(scale > 0.0 && scale.is_finite()) {
        return 0;
    }

    let cutoff = tolerance * scale;
    let mut rank = 0;
    for i in 0..k {
        if r[(i, i)].abs() > cutoff {
            rank += 1;
        } else {
            break;
        }
    }
    rank
}

/// Solve the full-rank least squares problem `R β = Qᵀ y` by back-substitution
/// on the pivoted factor, then map back to the original column order.
fn solve_with_qr(qr: &ColPivQr<f64>, y: &Col<f64>) -> Col<f64> {
    let q = qr.compute_Q();
    let r = qr.R();
    let n_params = r.ncols();

    // perm_fwd[j] = position of original column j in the pivoted order
    let perm_fwd = qr.P().arrays().0;

    let qty = q.transpose() * y;

    let mut beta_perm = Col::zeros(n_params);
    for i in (0..n_params).rev() {
        let mut sum = qty[i];
        for j in (i + 1)..n_params {
            sum -= r[(i, j)] * beta_perm[j];
        }
        beta_perm[i] = sum / r[(i, i)];
    }

    Col::from_fn(n_params, |j| beta_perm[perm_fwd[j]])
}

impl OlsRegressor {
    /// Compute fit statistics. The bias column is counted as a parameter but
    /// not as a model degree of freedom.
    fn compute_statistics(
        &self,
        y: &Col<f64>,
        coefficients: Col<f64>,
        residuals: Col<f64>,
        fitted_values: Col<f64>,
        rank: usize,
    ) -> RegressionResult {
        let n = y.nrows();
        let n_params = coefficients.nrows();

        let y_mean: f64 = y.iter().sum::<f64>() / n as f64;
        let tss: f64 = y.iter().map(|&yi| (yi - y_mean).powi(2)).sum();
        let rss: f64 = residuals.iter().map(|&r| r.powi(2)).sum();

        let r_squared = if tss > 0.0 {
            (1.0 - rss / tss).clamp(0.0, 1.0)
        } else if rss < 1e-10 {
            1.0
        } else {
            0.0
        };

        let df_total = (n - 1) as f64;
        let df_resid = (n - n_params) as f64;
        let adj_r_squared = if df_resid > 0.0 && df_total > 0.0 {
            1.0 - (1.0 - r_squared) * df_total / df_resid
        } else {
            f64::NAN
        };

        let mse = if df_resid > 0.0 {
            rss / df_resid
        } else {
            f64::NAN
        };
        let rmse = mse.sqrt();

        let df_model = n_params.saturating_sub(1) as f64;
        let f_statistic = if df_model > 0.0 && df_resid > 0.0 && mse > 0.0 {
            ((tss - rss) / df_model) / mse
        } else {
            f64::NAN
        };

        let f_pvalue = if f_statistic.is_finite() {
            FisherSnedecor::new(df_model, df_resid)
                .ok()
                .map_or(f64::NAN, |d| 1.0 - d.cdf(f_statistic))
        } else {
            f64::NAN
        };

        let mut result = RegressionResult::empty(n_params, n);
        result.coefficients = coefficients;
        result.residuals = residuals;
        result.fitted_values = fitted_values;
        result.rank = rank;
        result.r_squared = r_squared;
        result.adj_r_squared = adj_r_squared;
        result.mse = mse;
        result.rmse = rmse;
        result.f_statistic = f_statistic;
        result.f_pvalue = f_pvalue;
        result
    }
}

/// A fitted OLS regression model.
#[derive(Debug, Clone)]
pub struct FittedOls {
    options: RegressionOptions,
    result: RegressionResult,
}

impl FittedOls {
    /// Get the options used to fit this model.
    pub fn options(&self) -> &RegressionOptions {
        &self.options
    }
}

impl FittedRegressor for FittedOls {
    fn predict(&self, x: &Mat<f64>) -> Col<f64> {
        predict(x, &self.result.coefficients)
    }

    fn result(&self) -> &RegressionResult {
        &self.result
    }
}

/// Least-squares coefficients of `x · β ≈ y` with default options.
pub fn fit(x: &Mat<f64>, y: &Col<f64>) -> Result<Col<f64>, RegressionError> {
    let fitted = OlsRegressor::default().fit(x, y)?;
    Ok(fitted.result.coefficients)
}

/// Matrix-vector product `x · coefficients`.
///
/// # Panics
/// If `x` has fewer columns than `coefficients` has entries.
pub fn predict(x: &Mat<f64>, coefficients: &Col<f64>) -> Col<f64> {
    let n_features = coefficients.nrows();
    Col::from_fn(x.nrows(), |i| {
        (0..n_features)
            .map(|j| x[(i, j)] * coefficients[j])
            .sum::<f64>()
    })
}

/// Builder for `OlsRegressor`.
#[derive(Debug, Clone, Default)]
pub struct OlsRegressorBuilder {
    builder: RegressionOptionsBuilder,
}

impl OlsRegressorBuilder {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the relative rank tolerance for QR decomposition.
    pub fn rank_tolerance(mut self, tol: f64) -> Self {
        self.builder = self.builder.rank_tolerance(tol);
        self
    }

    /// Build the OLS regressor. Options are validated when fitting.
    pub fn build(self) -> OlsRegressor {
        OlsRegressor::new(self.builder.build_unchecked())
    }
}
