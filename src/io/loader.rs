//! Whitespace-delimited numeric matrix loader.

use faer::{Col, Mat};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::num::ParseFloatError;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while loading a numeric text file.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} contains no data rows", .path.display())]
    Empty { path: PathBuf },

    #[error("line {line}, column {column}: invalid number {token:?}: {source}")]
    Parse {
        line: usize,
        column: usize,
        token: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("line {line}: expected {expected} values, found {found}")]
    MalformedRow {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("need at least 2 columns (attributes and target), found {found}")]
    TooFewColumns { found: usize },
}

/// Read a whitespace-delimited matrix from a file.
///
/// Blank lines are skipped. Every other line is one row; all rows must have
/// the width of the first.
pub fn load_matrix(path: impl AsRef<Path>) -> Result<Mat<f64>, LoadError> {
    let path = path.as_ref();
    let rows = read_rows(path)?;
    into_matrix(rows, path)
}

/// Read one value per line: the first token of each non-blank line.
///
/// Remaining tokens are ignored and never parsed, so lines may differ in width.
pub fn load_vector(path: impl AsRef<Path>) -> Result<Col<f64>, LoadError> {
    let path = path.as_ref();
    parse_vector_from(BufReader::new(open(path)?), path)
}

/// Parse a matrix from any buffered reader.
pub fn parse_matrix<R: BufRead>(reader: R) -> Result<Mat<f64>, LoadError> {
    let path = Path::new("<input>");
    let rows = parse_rows(reader, path)?;
    into_matrix(rows, path)
}

/// Parse a vector (first token per non-blank line) from any buffered reader.
pub fn parse_vector<R: BufRead>(reader: R) -> Result<Col<f64>, LoadError> {
    parse_vector_from(reader, Path::new("<input>"))
}

fn open(path: &Path) -> Result<File, LoadError> {
    File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn read_rows(path: &Path) -> Result<Vec<Vec<f64>>, LoadError> {
    parse_rows(BufReader::new(open(path)?), path)
}

fn parse_vector_from<R: BufRead>(reader: R, path: &Path) -> Result<Col<f64>, LoadError> {
    let mut values = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let Some(token) = line.split_whitespace().next() else {
            continue;
        };
        let value = token.parse::<f64>().map_err(|source| LoadError::Parse {
            line: idx + 1,
            column: 1,
            token: token.to_string(),
            source,
        })?;
        values.push(value);
    }

    if values.is_empty() {
        return Err(LoadError::Empty {
            path: path.to_path_buf(),
        });
    }
    Ok(Col::from_fn(values.len(), |i| values[i]))
}

/// Tokenize and parse every non-blank line. Ragged rows are rejected here so
/// the error can name the offending line.
fn parse_rows<R: BufRead>(reader: R, path: &Path) -> Result<Vec<Vec<f64>>, LoadError> {
    let mut rows: Vec<Vec<f64>> = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let line_no = idx + 1;

        let row = line
            .split_whitespace()
            .enumerate()
            .map(|(col, token)| {
                token.parse::<f64>().map_err(|source| LoadError::Parse {
                    line: line_no,
                    column: col + 1,
                    token: token.to_string(),
                    source,
                })
            })
            .collect::<Result<Vec<f64>, _>>()?;

        if row.is_empty() {
            continue;
        }

        if let Some(first) = rows.first() {
            if row.len() != first.len() {
                return Err(LoadError::MalformedRow {
                    line: line_no,
                    expected: first.len(),
                    found: row.len(),
                });
            }
        }

        rows.push(row);
    }

    Ok(rows)
}

fn into_matrix(rows: Vec<Vec<f64>>, path: &Path) -> Result<Mat<f64>, LoadError> {
    let n_cols = match rows.first() {
        Some(first) => first.len(),
        None => {
            return Err(LoadError::Empty {
                path: path.to_path_buf(),
            })
        }
    };
    Ok(Mat::from_fn(rows.len(), n_cols, |i, j| rows[i][j]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_simple_matrix() {
        let m = parse_matrix(Cursor::new("1 2 3\n4 5 6\n")).unwrap();
        assert_eq!(m.nrows(), 2);
        assert_eq!(m.ncols(), 3);
        assert_eq!(m[(0, 0)], 1.0);
        assert_eq!(m[(1, 2)], 6.0);
    }

    #[test]
    fn test_parse_mixed_whitespace() {
        let m = parse_matrix(Cursor::new("  0.00632  18.00\t2.310\n\n0.02731 0.00   7.070  \n"))
            .unwrap();
        assert_eq!(m.nrows(), 2);
        assert_eq!(m.ncols(), 3);
        assert!((m[(0, 0)] - 0.00632).abs() < 1e-15);
        assert!((m[(1, 2)] - 7.07).abs() < 1e-15);
    }

    #[test]
    fn test_parse_scientific_notation() {
        let m = parse_matrix(Cursor::new("1e3 -2.5E-1\n")).unwrap();
        assert_eq!(m[(0, 0)], 1000.0);
        assert_eq!(m[(0, 1)], -0.25);
    }

    #[test]
    fn test_parse_empty_input() {
        let result = parse_matrix(Cursor::new(""));
        assert!(matches!(result, Err(LoadError::Empty { .. })));

        let result = parse_matrix(Cursor::new("\n   \n\t\n"));
        assert!(matches!(result, Err(LoadError::Empty { .. })));
    }

    #[test]
    fn test_parse_bad_token() {
        let result = parse_matrix(Cursor::new("1 2\n3 x4\n"));
        match result {
            Err(LoadError::Parse {
                line,
                column,
                token,
                ..
            }) => {
                assert_eq!(line, 2);
                assert_eq!(column, 2);
                assert_eq!(token, "x4");
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_ragged_rows() {
        let result = parse_matrix(Cursor::new("1 2 3\n4 5\n"));
        assert!(matches!(
            result,
            Err(LoadError::MalformedRow {
                line: 2,
                expected: 3,
                found: 2
            })
        ));
    }

    #[test]
    fn test_parse_vector_ignores_trailing_tokens() {
        let v = parse_vector(Cursor::new("1 x\n2\n")).unwrap();
        assert_eq!(v.nrows(), 2);
        assert_eq!(v[0], 1.0);
        assert_eq!(v[1], 2.0);

        let v = parse_vector(Cursor::new("1 2 3\n\n4\n")).unwrap();
        assert_eq!(v.nrows(), 2);
        assert_eq!(v[0], 1.0);
        assert_eq!(v[1], 4.0);
    }

    #[test]
    fn test_parse_vector_bad_first_token() {
        let result = parse_vector(Cursor::new("1\n\nabc 2\n"));
        assert!(matches!(
            result,
            Err(LoadError::Parse {
                line: 3,
                column: 1,
                ..
            })
        ));
    }

    #[test]
    fn test_parse_vector_empty() {
        assert!(matches!(
            parse_vector(Cursor::new(" \n")),
            Err(LoadError::Empty { .. })
        ));
    }

    #[test]
    fn test_ragged_row_line_counts_blank_lines() {
        let result = parse_matrix(Cursor::new("1 2\n\n3 4 5\n"));
        assert!(matches!(
            result,
            Err(LoadError::MalformedRow { line: 3, .. })
        ));
    }
}
