//! # Reading and writing of linear programs
//!
//! This module ties the translation together: it validates the input path, reads the MPS file,
//! parses it into a problem and writes the LP text rendition to a sibling file.
use std::fs;
use std::path::{Path, PathBuf};

use crate::io::error::{TranslateError, UsageError};
use crate::io::mps::token::FILE_SUFFIX;

pub mod error;
pub mod lp;
pub mod mps;

/// Translate an MPS problem file into its LP text rendition.
///
/// The output is written next to the input: for an input named `<stem>.mps`, the output is named
/// `lp_<stem>.txt`. The LP text is rendered completely in memory before the output file is
/// created, so a failed run never leaves a partial output file behind.
///
/// # Arguments
///
/// * `input_path` - Path of the problem file, which must end in `.mps`.
///
/// # Return value
///
/// The path of the written output file.
///
/// # Errors
///
/// A [`TranslateError`] when the path doesn't end in `.mps`, when the file can't be read or
/// written, or when its contents can't be parsed.
pub fn translate(input_path: &Path) -> Result<PathBuf, TranslateError> {
    let output_path = derive_output_path(input_path)?;

    let program = fs::read_to_string(input_path)?;
    let problem = mps::parse(&program)?;
    let text = lp::serialize(&problem);

    if let Err(error) = fs::write(&output_path, &text) {
        // An interrupted write may have created the file; a half-written output must not survive.
        let _ = fs::remove_file(&output_path);
        return Err(error.into());
    }

    Ok(output_path)
}

/// Compute the output path belonging to an input path.
///
/// The `.mps` suffix is replaced by the derived name `lp_<stem>.txt`, in the same directory.
///
/// # Errors
///
/// A [`UsageError`] when the file name doesn't end in `.mps`. This is a configuration error, not
/// a parse error: the run refuses to start.
fn derive_output_path(input_path: &Path) -> Result<PathBuf, UsageError> {
    let stem = input_path.file_name()
        .and_then(|name| name.to_str())
        .and_then(|name| name.strip_suffix(FILE_SUFFIX));

    match stem {
        Some(stem) => Ok(input_path.with_file_name(
            format!("{}{}{}", lp::FILE_PREFIX, stem, lp::FILE_EXTENSION),
        )),
        None => Err(UsageError::new(
            format!("you must specify a \"{}\" problem file, got: {:?}", FILE_SUFFIX, input_path),
        )),
    }
}
