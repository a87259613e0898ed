//! # Integration tests
//!
//! End-to-end translation of problem files, completely external to the crate. All code written
//! in this module could be written by an external user of the crate.
use std::fs;
use std::path::{Path, PathBuf};

use mps2lp::io::error::TranslateError;
use mps2lp::io::translate;

/// Relative path of the folder where the problem files are stored.
///
/// The path is relative to the project root folder.
fn problem_file_directory() -> PathBuf {
    Path::new(file!()).parent().unwrap().join("problem_files")
}

/// Expected LP rendition of `problem_files/small.mps`.
const SMALL_LP: &str = "\
Variables:
\tx_0 UP <= 4
\tx_1 LO <= 0.5
Objective:
\tmin 3.0*x_0 + 2.0*x_1
Constraints:
\tctr_0: 1.5*x_0 <= 10
\tctr_1: 1.0*x_1 >= 2.5
";

#[test]
fn translate_writes_the_sibling_lp_file() {
    let directory = tempfile::tempdir().unwrap();
    let input_path = directory.path().join("small.mps");
    fs::copy(problem_file_directory().join("small.mps"), &input_path).unwrap();

    let output_path = translate(&input_path).unwrap();

    assert_eq!(output_path, directory.path().join("lp_small.txt"));
    assert_eq!(fs::read_to_string(&output_path).unwrap(), SMALL_LP);
}

#[test]
fn translating_twice_produces_identical_output() {
    let directory = tempfile::tempdir().unwrap();
    let input_path = directory.path().join("small.mps");
    fs::copy(problem_file_directory().join("small.mps"), &input_path).unwrap();

    let first_path = translate(&input_path).unwrap();
    let first = fs::read(&first_path).unwrap();
    let second_path = translate(&input_path).unwrap();
    let second = fs::read(&second_path).unwrap();

    assert_eq!(first_path, second_path);
    assert_eq!(first, second);
}

#[test]
fn wrong_suffix_is_refused_before_reading() {
    let directory = tempfile::tempdir().unwrap();
    let input_path = directory.path().join("small.txt");
    fs::write(&input_path, "not even read").unwrap();

    let result = translate(&input_path);

    assert!(matches!(result, Err(TranslateError::Usage(_))));
    assert_eq!(fs::read_dir(directory.path()).unwrap().count(), 1);
}

#[test]
fn missing_row_reference_leaves_no_output() {
    let directory = tempfile::tempdir().unwrap();
    let input_path = directory.path().join("broken.mps");
    fs::write(&input_path, "\
ROWS
 N  OBJECTIF
COLUMNS
    X1        NOSUCHROW            3.0
ENDATA
").unwrap();

    let result = translate(&input_path);

    assert!(matches!(result, Err(TranslateError::Reference(_))));
    assert!(!directory.path().join("lp_broken.txt").exists());
}

#[test]
fn malformed_coefficient_leaves_no_output() {
    let directory = tempfile::tempdir().unwrap();
    let input_path = directory.path().join("broken.mps");
    fs::write(&input_path, "\
ROWS
 N  OBJECTIF
COLUMNS
    X1        OBJECTIF             not-a-number
ENDATA
").unwrap();

    let result = translate(&input_path);

    assert!(matches!(result, Err(TranslateError::Parse(_))));
    assert!(!directory.path().join("lp_broken.txt").exists());
}

#[test]
fn last_bound_per_variable_wins() {
    let directory = tempfile::tempdir().unwrap();
    let input_path = directory.path().join("bounds.mps");
    fs::write(&input_path, "\
ROWS
 N  OBJECTIF
COLUMNS
    X1        OBJECTIF             1.0
BOUNDS
 UP BND       X1                   4
 FX BND       X1                   2
ENDATA
").unwrap();

    let output_path = translate(&input_path).unwrap();

    assert_eq!(fs::read_to_string(&output_path).unwrap(), "\
Variables:
\tx_0 FX <= 2
Objective:
\tmin 1.0*x_0
Constraints:
");
}
