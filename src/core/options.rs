//! Regression and pipeline configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Configuration options for least-squares fits.
#[derive(Debug, Clone)]
pub struct RegressionOptions {
    /// Relative tolerance on the diagonal of the pivoted R factor. A pivot
    /// counts toward the rank when `|R_ii| > tol * |R_00|`. `None` uses
    /// `max(rows, cols) * f64::EPSILON` for the matrix being fitted.
    pub rank_tolerance: Option<f64>,
}

impl Default for RegressionOptions {
    fn default() -> Self {
        Self {
            rank_tolerance: None,
        }
    }
}

/// Errors that can occur when validating options.
#[derive(Debug, Error)]
pub enum OptionsError {
    #[error("rank_tolerance must be positive and finite, got {0}")]
    InvalidRankTolerance(f64),
    #[error("{0} file name must not be empty")]
    EmptyFileName(&'static str),
    #[error("{name} figure size must be non-zero, got {width}x{height}")]
    InvalidFigureSize {
        name: &'static str,
        width: u32,
        height: u32,
    },
}

impl RegressionOptions {
    /// Create a new builder for regression options.
    pub fn builder() -> RegressionOptionsBuilder {
        RegressionOptionsBuilder::default()
    }

    /// Validate the options and return an error if invalid.
    pub fn validate(&self) -> Result<(), OptionsError> {
        if let Some(tol) = self.rank_tolerance {
            if !(tol > 0.0 && tol.is_finite()) {
                return Err(OptionsError::InvalidRankTolerance(tol));
            }
        }
        Ok(())
    }

    /// Rank tolerance for an `nrows x ncols` design matrix.
    pub fn rank_tolerance_for(&self, nrows: usize, ncols: usize) -> f64 {
        self.rank_tolerance
            .unwrap_or_else(|| nrows.max(ncols) as f64 * f64::EPSILON)
    }
}

/// Builder for `RegressionOptions`.
#[derive(Debug, Clone, Default)]
pub struct RegressionOptionsBuilder {
    options: RegressionOptions,
}

impl RegressionOptionsBuilder {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the relative rank tolerance for QR decomposition.
    pub fn rank_tolerance(mut self, tol: f64) -> Self {
        self.options.rank_tolerance = Some(tol);
        self
    }

    /// Build and validate the options.
    pub fn build(self) -> Result<RegressionOptions, OptionsError> {
        self.options.validate()?;
        Ok(self.options)
    }

    /// Build the options without validation.
    pub fn build_unchecked(self) -> RegressionOptions {
        self.options
    }
}

/// Configuration for one end-to-end run: where the data lives, where the
/// figures go and how large they are.
#[derive(Debug, Clone)]
pub struct PipelineOptions {
    /// Whitespace-delimited input matrix; last column is the target.
    pub data_path: PathBuf,
    /// Directory receiving the rendered figures. Created if missing.
    pub output_dir: PathBuf,
    /// File name of the predicted-vs-actual figure.
    pub prediction_figure: String,
    /// File name of the standardized coefficient bar chart.
    pub significance_figure: String,
    /// Pixel size (width, height) of the prediction figure.
    pub prediction_size: (u32, u32),
    /// Pixel size (width, height) of the significance figure.
    pub significance_size: (u32, u32),
    /// Options shared by both fits.
    pub regression: RegressionOptions,
    /// Whether to write figures at all.
    pub render: bool,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("DATA/housing.data"),
            output_dir: PathBuf::from("."),
            prediction_figure: "housing_predictions.png".to_string(),
            significance_figure: "housing_significance.png".to_string(),
            // 18 x 15 cm and 12 x 8 cm at 96 dpi
            prediction_size: (680, 567),
            significance_size: (454, 302),
            regression: RegressionOptions::default(),
            render: true,
        }
    }
}

impl PipelineOptions {
    /// Create a new builder for pipeline options.
    pub fn builder() -> PipelineOptionsBuilder {
        PipelineOptionsBuilder::default()
    }

    /// Validate the options and return an error if invalid.
    pub fn validate(&self) -> Result<(), OptionsError> {
        self.regression.validate()?;
        if self.prediction_figure.trim().is_empty() {
            return Err(OptionsError::EmptyFileName("prediction"));
        }
        if self.significance_figure.trim().is_empty() {
            return Err(OptionsError::EmptyFileName("significance"));
        }
        check_size("prediction", self.prediction_size)?;
        check_size("significance", self.significance_size)?;
        Ok(())
    }

    /// Full path of the prediction figure.
    pub fn prediction_path(&self) -> PathBuf {
        self.output_dir.join(&self.prediction_figure)
    }

    /// Full path of the significance figure.
    pub fn significance_path(&self) -> PathBuf {
        self.output_dir.join(&self.significance_figure)
    }
}

fn check_size(name: &'static str, (width, height): (u32, u32)) -> Result<(), OptionsError> {
    if width == 0 || height == 0 {
        return Err(OptionsError::InvalidFigureSize {
            name,
            width,
            height,
        });
    }
    Ok(())
}

/// Builder for `PipelineOptions`.
#[derive(Debug, Clone, Default)]
pub struct PipelineOptionsBuilder {
    options: PipelineOptions,
}

impl PipelineOptionsBuilder {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the input data file.
    pub fn data_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.options.data_path = path.into();
        self
    }

    /// Set the directory figures are written to.
    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.options.output_dir = dir.into();
        self
    }

    /// Set the prediction figure file name.
    pub fn prediction_figure(mut self, name: impl Into<String>) -> Self {
        self.options.prediction_figure = name.into();
        self
    }

    /// Set the significance figure file name.
    pub fn significance_figure(mut self, name: impl Into<String>) -> Self {
        self.options.significance_figure = name.into();
        self
    }

    /// Set the prediction figure size in pixels.
    pub fn prediction_size(mut self, width: u32, height: u32) -> Self {
        self.options.prediction_size = (width, height);
        self
    }

    /// Set the significance figure size in pixels.
    pub fn significance_size(mut self, width: u32, height: u32) -> Self {
        self.options.significance_size = (width, height);
        self
    }

    /// Set the rank tolerance used by both fits.
    pub fn rank_tolerance(mut self, tol: f64) -> Self {
        self.options.regression.rank_tolerance = Some(tol);
        self
    }

    /// Enable or disable figure output.
    pub fn render(mut self, render: bool) -> Self {
        self.options.render = render;
        self
    }

    /// Build and validate the options.
    pub fn build(self) -> Result<PipelineOptions, OptionsError> {
        self.options.validate()?;
        Ok(self.options)
    }

    /// Build the options without validation.
    pub fn build_unchecked(self) -> PipelineOptions {
        self.options
    }
}
