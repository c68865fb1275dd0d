//! Loader and dataset tests.

mod common;

use housing_regression::core::Dataset;
use housing_regression::io::{load_matrix, load_vector, LoadError};

#[test]
fn test_load_two_rows() {
    let file = common::write_data_file("1 2 3\n4 5 6\n");

    let m = load_matrix(file.path()).expect("load should succeed");

    assert_eq!((m.nrows(), m.ncols()), (2, 3));
    let expected = [[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]];
    for (i, row) in expected.iter().enumerate() {
        for (j, &v) in row.iter().enumerate() {
            assert_eq!(m[(i, j)], v);
        }
    }
}

#[test]
fn test_load_empty_file() {
    let file = common::write_data_file("");
    assert!(matches!(
        load_matrix(file.path()),
        Err(LoadError::Empty { .. })
    ));
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("does-not-exist.data");

    match load_matrix(&path) {
        Err(LoadError::Io { path: p, .. }) => assert_eq!(p, path),
        other => panic!("expected io error, got {other:?}"),
    }
}

#[test]
fn test_load_parse_error_message() {
    let file = common::write_data_file("1.0 2.0\n3.0 NA\n");

    let err = load_matrix(file.path()).unwrap_err();
    assert!(matches!(err, LoadError::Parse { line: 2, column: 2, .. }));
    assert!(err.to_string().contains("\"NA\""));
}

#[test]
fn test_load_ragged_rows() {
    let file = common::write_data_file("1 2 3\n4 5 6\n7 8\n");
    assert!(matches!(
        load_matrix(file.path()),
        Err(LoadError::MalformedRow {
            line: 3,
            expected: 3,
            found: 2
        })
    ));
}

#[test]
fn test_load_vector_takes_first_token() {
    let file = common::write_data_file("1.5 9\n2.5\n\n-3 4 5\n");

    let v = load_vector(file.path()).expect("load should succeed");
    assert_eq!(v.nrows(), 3);
    assert_eq!(v[0], 1.5);
    assert_eq!(v[1], 2.5);
    assert_eq!(v[2], -3.0);
}

#[test]
fn test_load_vector_ignores_unparsed_trailing_tokens() {
    let file = common::write_data_file("1 x\n2\n");
    let v = load_vector(file.path()).expect("trailing tokens are not parsed");
    assert_eq!(v.nrows(), 2);
    assert_eq!((v[0], v[1]), (1.0, 2.0));

    let file = common::write_data_file("1 2 3\n4\n");
    let v = load_vector(file.path()).expect("ragged lines are accepted");
    assert_eq!(v.nrows(), 2);
    assert_eq!((v[0], v[1]), (1.0, 4.0));
}

#[test]
fn test_load_vector_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(
        load_vector(dir.path().join("nope.txt")),
        Err(LoadError::Io { .. })
    ));
}

#[test]
fn test_load_vector_empty() {
    let file = common::write_data_file("\n\n");
    assert!(matches!(
        load_vector(file.path()),
        Err(LoadError::Empty { .. })
    ));
}

#[test]
fn test_dataset_from_housing_like_file() {
    let file = common::write_data_file(&common::housing_like_text(25, 13, 42));

    let ds = Dataset::from_file(file.path()).expect("load should succeed");
    assert_eq!(ds.n_rows(), 25);
    assert_eq!(ds.n_columns(), 14);
    assert_eq!(ds.n_attributes(), 13);

    let a = ds.design_matrix();
    let b = ds.target();
    assert_eq!(a.nrows(), b.nrows());
    for i in 0..ds.n_rows() {
        assert_eq!(a[(i, 13)], 1.0);
        assert_eq!(b[i], ds.data()[(i, 13)]);
    }
}

#[test]
fn test_dataset_single_column_file() {
    let file = common::write_data_file("1\n2\n3\n");
    assert!(matches!(
        Dataset::from_file(file.path()),
        Err(LoadError::TooFewColumns { found: 1 })
    ));
}
