//! Matrix helpers, standardization and paired sorting.

mod matrix;
mod ranking;
mod standardize;

pub use matrix::{column, column_means, column_std_devs, detect_constant_columns, to_vec};
pub use ranking::{argsort, sort_by_key};
pub use standardize::standardize;
