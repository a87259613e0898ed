//! # Command line tests
//!
//! Drive the installed binary the way an operator would.
use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;

/// Relative path of the folder where the problem files are stored.
fn problem_file_directory() -> PathBuf {
    Path::new(file!()).parent().unwrap().join("problem_files")
}

#[test]
fn missing_argument_is_a_usage_failure() {
    Command::cargo_bin("mps2lp").unwrap()
        .assert()
        .failure();
}

#[test]
fn wrong_suffix_is_a_usage_failure() {
    Command::cargo_bin("mps2lp").unwrap()
        .arg("problem.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains(".mps"));
}

#[test]
fn translates_a_problem_file() {
    let directory = tempfile::tempdir().unwrap();
    let input_path = directory.path().join("small.mps");
    fs::copy(problem_file_directory().join("small.mps"), &input_path).unwrap();

    Command::cargo_bin("mps2lp").unwrap()
        .arg(&input_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Reading problem file"));

    assert!(directory.path().join("lp_small.txt").exists());
}
