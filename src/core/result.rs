//! Regression result structures.

use faer::Col;

/// Complete result from a least-squares fit.
///
/// The design matrix carries its own bias column, so the intercept is one of
/// the `coefficients` rather than a separate field.
#[derive(Debug, Clone)]
pub struct RegressionResult {
    // ========== Core Results ==========
    /// Estimated coefficients, one per design matrix column.
    pub coefficients: Col<f64>,

    /// Residuals (y - fitted_values).
    pub residuals: Col<f64>,

    /// Fitted values (predictions on training data).
    pub fitted_values: Col<f64>,

    // ========== Rank Information ==========
    /// Numerical rank of the design matrix.
    pub rank: usize,

    /// Number of parameters (design matrix columns, bias included).
    pub n_parameters: usize,

    /// Number of observations.
    pub n_observations: usize,

    /// Relative tolerance used for rank determination.
    pub rank_tolerance: f64,

    // ========== Fit Statistics ==========
    /// Coefficient of determination (R²).
    pub r_squared: f64,

    /// Adjusted R².
    pub adj_r_squared: f64,

    /// Root mean squared error.
    pub rmse: f64,

    /// Mean squared error (RSS / residual df).
    pub mse: f64,

    /// F-statistic for overall model significance.
    pub f_statistic: f64,

    /// P-value for F-statistic.
    pub f_pvalue: f64,
}

impl RegressionResult {
    /// Create a new empty result (used internally by solvers).
    pub(crate) fn empty(n_parameters: usize, n_observations: usize) -> Self {
        Self {
            coefficients: Col::zeros(n_parameters),
            residuals: Col::zeros(n_observations),
            fitted_values: Col::zeros(n_observations),
            rank: 0,
            n_parameters,
            n_observations,
            rank_tolerance: 0.0,
            r_squared: 0.0,
            adj_r_squared: 0.0,
            rmse: 0.0,
            mse: 0.0,
            f_statistic: 0.0,
            f_pvalue: 1.0,
        }
    }

    /// Residual degrees of freedom (n - p).
    pub fn residual_df(&self) -> usize {
        self.n_observations.saturating_sub(self.n_parameters)
    }

    /// Model degrees of freedom (p - 1, the bias column is not counted).
    pub fn model_df(&self) -> usize {
        self.n_parameters.saturating_sub(1)
    }

    /// Total sum of squares (TSS).
    pub fn tss(&self) -> f64 {
        let n = self.n_observations as f64;
        let y_mean = (self.fitted_values.iter().sum::<f64>() + self.residuals.iter().sum::<f64>())
            / n;

        self.residuals
            .iter()
            .zip(self.fitted_values.iter())
            .map(|(&r, &f)| (f + r - y_mean).powi(2))
            .sum()
    }

    /// Residual sum of squares (RSS).
    pub fn rss(&self) -> f64 {
        self.residuals.iter().map(|&r| r.powi(2)).sum()
    }

    /// Explained sum of squares (ESS = TSS - RSS).
    pub fn ess(&self) -> f64 {
        self.tss() - self.rss()
    }

    /// Coefficients with the trailing bias coefficient dropped.
    pub fn attribute_coefficients(&self) -> Vec<f64> {
        let n = self.coefficients.nrows().saturating_sub(1);
        self.coefficients.iter().take(n).copied().collect()
    }

    /// The coefficient of the trailing bias column.
    pub fn bias(&self) -> Option<f64> {
        self.coefficients.iter().last().copied()
    }
}
