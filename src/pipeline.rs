//! End-to-end run: load, fit, standardize, refit, render.

use crate::core::{Dataset, OptionsError, PipelineOptions};
use crate::io::LoadError;
use crate::render::{render_predictions, render_significance, Overlay, RenderError};
use crate::solvers::{FittedRegressor, OlsRegressor, RegressionError, Regressor};
use crate::utils::{standardize, to_vec};
use log::{debug, info, warn};
use std::path::PathBuf;
use thiserror::Error;

/// Any failure of a run. Every variant is fatal.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Options(#[from] OptionsError),

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Regression(#[from] RegressionError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

/// What a run computed and wrote.
#[derive(Debug, Clone)]
pub struct PipelineReport {
    pub n_rows: usize,
    pub n_columns: usize,
    /// Raw coefficients, bias last.
    pub coefficients: Vec<f64>,
    /// Coefficients of the standardized fit, bias last.
    pub standardized_coefficients: Vec<f64>,
    /// Fitted values of the raw fit, in row order.
    pub fitted_values: Vec<f64>,
    pub r_squared: f64,
    pub rmse: f64,
    pub prediction_figure: Option<PathBuf>,
    pub significance_figure: Option<PathBuf>,
}

/// Load `options.data_path` and run the analysis on it.
pub fn run(options: &PipelineOptions) -> Result<PipelineReport, PipelineError> {
    options.validate()?;

    let dataset = Dataset::from_file(&options.data_path)?;
    info!(
        "loaded {} rows x {} columns from {}",
        dataset.n_rows(),
        dataset.n_columns(),
        options.data_path.display()
    );

    run_dataset(&dataset, options)
}

/// Run the analysis on an already loaded dataset.
pub fn run_dataset(
    dataset: &Dataset,
    options: &PipelineOptions,
) -> Result<PipelineReport, PipelineError> {
    options.validate()?;

    let design = dataset.design_matrix();
    let target = dataset.target();
    let regressor = OlsRegressor::new(options.regression.clone());

    let fitted = regressor.fit(&design, &target)?;
    let result = fitted.result();
    if !result.r_squared.is_finite() {
        warn!("fit produced a non-finite R²");
    }
    info!(
        "fit {} coefficients: R² = {:.4}, RMSE = {:.4}",
        result.coefficients.nrows(),
        result.r_squared,
        result.rmse
    );
    debug!("coefficients: {:?}", to_vec(&result.coefficients));

    let fitted_values = to_vec(&fitted.predict(&design));

    let standardized = standardize(&design)?;
    let fitted_std = regressor.fit(&standardized, &target)?;
    let std_result = fitted_std.result();
    debug!(
        "standardized coefficients: {:?}",
        to_vec(&std_result.coefficients)
    );

    let (prediction_figure, significance_figure) = if options.render {
        let raw = Overlay::new(to_vec(&target), fitted_values.clone())?;
        let sorted = raw.sorted();

        let prediction_path = options.prediction_path();
        render_predictions(&prediction_path, options.prediction_size, &raw, &sorted)?;
        info!("wrote {}", prediction_path.display());

        let significance_path = options.significance_path();
        render_significance(
            &significance_path,
            options.significance_size,
            &std_result.attribute_coefficients(),
        )?;
        info!("wrote {}", significance_path.display());

        (Some(prediction_path), Some(significance_path))
    } else {
        debug!("rendering disabled");
        (None, None)
    };

    Ok(PipelineReport {
        n_rows: dataset.n_rows(),
        n_columns: dataset.n_columns(),
        coefficients: to_vec(&result.coefficients),
        standardized_coefficients: to_vec(&std_result.coefficients),
        fitted_values,
        r_squared: result.r_squared,
        rmse: result.rmse,
        prediction_figure,
        significance_figure,
    })
}
