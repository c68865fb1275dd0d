//! Core types for the housing regression.

mod dataset;
mod options;
mod result;

pub use dataset::Dataset;
pub use options::{
    OptionsError, PipelineOptions, PipelineOptionsBuilder, RegressionOptions,
    RegressionOptionsBuilder,
};
pub use result::RegressionResult;
