//! # Error reporting for the translation
//!
//! A collection of enums and structures describing any problem encountered while reading,
//! parsing or writing. All failures are terminal for the invocation that produced them; nothing
//! is retried or recovered locally.
use std::error::Error;
use std::fmt;
use std::io;

use crate::io::mps::Section;

/// A `FileLocation` references a line in the input file by the line number of the file as
/// originally read from disk. It contains a reference to the line itself.
pub(crate) type FileLocation<'a> = (u64, &'a str);

/// A `TranslateError` is created when an error was encountered during IO, parsing or writing.
///
/// It is the highest error in the error hierarchy.
#[derive(Debug)]
pub enum TranslateError {
    /// The invocation was wrong before any input was read.
    ///
    /// The input path is missing the expected file extension. No run is started and no output
    /// is produced.
    Usage(UsageError),
    /// The input couldn't be read, or the output couldn't be written.
    Io(io::Error),
    /// A line of the input couldn't be interpreted in the section it appeared in.
    Parse(MalformedInput),
    /// The input referenced an entity that was never declared.
    ///
    /// For example, a right-hand side might be given for a row which is not known.
    Reference(MissingReference),
}

impl fmt::Display for TranslateError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TranslateError::Usage(error) => error.fmt(f),
            TranslateError::Io(error) => error.fmt(f),
            TranslateError::Parse(error) => error.fmt(f),
            TranslateError::Reference(error) => error.fmt(f),
        }
    }
}

impl Error for TranslateError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            TranslateError::Usage(_) => None,
            TranslateError::Io(error) => error.source(),
            TranslateError::Parse(_) => None,
            TranslateError::Reference(_) => None,
        }
    }
}

impl From<UsageError> for TranslateError {
    fn from(error: UsageError) -> Self {
        TranslateError::Usage(error)
    }
}

impl From<io::Error> for TranslateError {
    fn from(error: io::Error) -> Self {
        TranslateError::Io(error)
    }
}

impl From<MalformedInput> for TranslateError {
    fn from(error: MalformedInput) -> Self {
        TranslateError::Parse(error)
    }
}

impl From<MissingReference> for TranslateError {
    fn from(error: MissingReference) -> Self {
        TranslateError::Reference(error)
    }
}

/// A `UsageError` describes an invocation that is refused before the input is opened.
///
/// The contained message is meant for the operator.
#[derive(Debug)]
pub struct UsageError {
    description: String,
}

impl UsageError {
    /// Wrap a text in a `UsageError`.
    ///
    /// # Arguments
    ///
    /// * `description`: A human-readable text meant for the operator.
    pub(crate) fn new(description: impl Into<String>) -> UsageError {
        UsageError { description: description.into(), }
    }
}

impl fmt::Display for UsageError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "usage error: {}", self.description)
    }
}

impl Error for UsageError {
}

/// A `MalformedInput` error represents a line that couldn't be interpreted.
///
/// It carries the section that was active and the file location (line number and line contents)
/// at which interpretation failed.
#[derive(Debug)]
pub struct MalformedInput {
    description: String,
    section: Section,
    line_number: u64,
    line: String,
}

impl MalformedInput {
    /// Create a new `MalformedInput` error from a description and the place it was caused at.
    ///
    /// # Arguments
    ///
    /// * `description`: What's wrong at the moment of creation.
    /// * `section`: Section being interpreted.
    /// * `file_location`: Line number and line that caused the error.
    pub(crate) fn new(
        description: impl Into<String>,
        section: Section,
        file_location: FileLocation,
    ) -> MalformedInput {
        let (line_number, line) = file_location;
        MalformedInput {
            description: description.into(),
            section,
            line_number,
            line: line.to_string(),
        }
    }
}

impl fmt::Display for MalformedInput {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}, in the {} section at line {}: \"{}\"",
            self.description, self.section, self.line_number, self.line,
        )
    }
}

impl Error for MalformedInput {
}

/// A `MissingReference` error is created when a name is used in a position that requires it to
/// have been declared before, while it never was.
///
/// Rows must be introduced by the ROWS section before they can be referenced; only variables may
/// be introduced by use.
#[derive(Debug)]
pub struct MissingReference {
    description: String,
    section: Section,
    location: Option<(u64, String)>,
}

impl MissingReference {
    /// Create a new `MissingReference` error caused at a known file location.
    ///
    /// # Arguments
    ///
    /// * `description`: Which name was missing, and what it was used as.
    /// * `section`: Section being interpreted.
    /// * `file_location`: Line number and line that caused the error.
    pub(crate) fn new(
        description: impl Into<String>,
        section: Section,
        file_location: FileLocation,
    ) -> MissingReference {
        let (line_number, line) = file_location;
        MissingReference {
            description: description.into(),
            section,
            location: Some((line_number, line.to_string())),
        }
    }

    /// Create a new `MissingReference` error that can't be attributed to a single line.
    ///
    /// Used when a declaration is found to be missing only once the entire input was consumed.
    ///
    /// # Arguments
    ///
    /// * `description`: Which declaration was missing.
    /// * `section`: Section that should have declared it.
    pub(crate) fn undeclared(description: impl Into<String>, section: Section) -> MissingReference {
        MissingReference {
            description: description.into(),
            section,
            location: None,
        }
    }
}

impl fmt::Display for MissingReference {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.location {
            Some((line_number, line)) => write!(
                f,
                "{}, in the {} section at line {}: \"{}\"",
                self.description, self.section, line_number, line,
            ),
            None => write!(f, "{}, expected in the {} section", self.description, self.section),
        }
    }
}

impl Error for MissingReference {
}
