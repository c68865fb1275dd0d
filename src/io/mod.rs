//! Reading numeric text input.

mod loader;

pub use loader::{load_matrix, load_vector, parse_matrix, parse_vector, LoadError};
