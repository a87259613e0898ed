//! # Parsing MPS files
//!
//! Section scanning and line interpretation. The problem is built incrementally while the
//! sections pass by; data flows strictly forward and no line is ever revisited.
use std::convert::TryFrom;

use crate::io::error::{FileLocation, MalformedInput, MissingReference, TranslateError};
use crate::io::mps::{Bound, Problem, Section, Sense};
use crate::io::mps::token::DEFAULT_BOUND_VALUE;

/// Scan a program line by line, tracking the active section.
///
/// A line exactly matching a section keyword switches the active section; `ENDATA` terminates
/// the scan. Any other line is forwarded to the interpreter for the active section. Lines
/// encountered before the first recognized keyword are discarded.
///
/// # Arguments
///
/// * `program` - The complete input, as read from disk.
///
/// # Return value
///
/// The problem built from all interpreted lines.
///
/// # Errors
///
/// A [`TranslateError`] from the first line that fails to be interpreted.
pub(super) fn scan(program: &str) -> Result<Problem, TranslateError> {
    let mut problem = Problem::new();
    let mut current_section = None;

    for (number, raw_line) in program.lines().enumerate() {
        let line = raw_line.strip_suffix('\r').unwrap_or(raw_line);
        if line.trim().is_empty() {
            continue;
        }

        if let Ok(section) = Section::try_from(line) {
            if section == Section::Endata {
                break;
            }
            current_section = Some(section);
            continue;
        }

        match current_section {
            None => {},
            Some(section) => {
                let location = (number as u64 + 1, line);
                interpret(&mut problem, section, location)?;
            },
        }
    }

    Ok(problem)
}

/// Interpret one data line in the context of the active section.
///
/// The line is split on whitespace runs, collapsing consecutive spaces and discarding empty
/// tokens, before being dispatched to the parser for the section.
fn interpret(
    problem: &mut Problem,
    section: Section,
    location: FileLocation,
) -> Result<(), TranslateError> {
    let (_, line) = location;
    let tokens = line.split_whitespace().collect::<Vec<_>>();

    match section {
        Section::Rows => parse_row_line(problem, &tokens, location),
        Section::Columns => parse_column_line(problem, &tokens, location),
        Section::Rhs => parse_rhs_line(problem, &tokens, location),
        Section::Bounds => parse_bound_line(problem, &tokens, location),
        Section::Endata => unreachable!("scanning stops at ENDATA"),
    }
}

/// Parse a line of the ROWS section and register the row.
///
/// # Arguments
///
/// * `tokens` - The tokens on the line: a row type code and the row name.
///
/// # Errors
///
/// A `MalformedInput` error when the row type code is not one of `N`, `G`, `L`, `E`, or when the
/// line doesn't have exactly two tokens.
fn parse_row_line(
    problem: &mut Problem,
    tokens: &[&str],
    location: FileLocation,
) -> Result<(), TranslateError> {
    match *tokens {
        [type_code, name] => {
            let sense = Sense::try_from(type_code).map_err(|()| MalformedInput::new(
                format!("unknown row type code \"{}\"", type_code),
                Section::Rows,
                location,
            ))?;
            problem.register_row(name, sense);
            Ok(())
        },
        _ => Err(MalformedInput::new(
            "expected a row type code and a row name",
            Section::Rows,
            location,
        ).into()),
    }
}

/// Parse a line of the COLUMNS section and store the coefficient.
///
/// Only the first (row, coefficient) pair on the line is consumed; MPS permits a second pair on
/// the same line, which is ignored.
///
/// # Arguments
///
/// * `tokens` - The tokens on the line: a column name, a row name and a coefficient.
///
/// # Errors
///
/// A `MissingReference` error when the row was never declared, a `MalformedInput` error when the
/// coefficient is not a number or tokens are missing.
fn parse_column_line(
    problem: &mut Problem,
    tokens: &[&str],
    location: FileLocation,
) -> Result<(), TranslateError> {
    match *tokens {
        [column, row, coefficient, ..] => {
            let row_index = problem.row_index(row).ok_or_else(|| MissingReference::new(
                format!("row \"{}\" was never declared", row),
                Section::Columns,
                location,
            ))?;
            let variable = resolve_variable(problem, column, Section::Columns, location)?;
            let value = coefficient.parse::<f64>().map_err(|_| MalformedInput::new(
                format!("cannot parse coefficient \"{}\"", coefficient),
                Section::Columns,
                location,
            ))?;

            problem.set_coefficient(row_index, variable, value);
            Ok(())
        },
        _ => Err(MalformedInput::new(
            "expected a column name, a row name and a coefficient",
            Section::Columns,
            location,
        ).into()),
    }
}

/// Parse a line of the RHS section and store the right-hand side value.
///
/// The value is validated as a number but kept as its original lexeme, so that the writer
/// reproduces it verbatim.
///
/// # Arguments
///
/// * `tokens` - The tokens on the line: the name of the right-hand side set, a row name and a
///   value.
///
/// # Errors
///
/// A `MissingReference` error when the row was never declared, a `MalformedInput` error when the
/// value is not a number or tokens are missing.
fn parse_rhs_line(
    problem: &mut Problem,
    tokens: &[&str],
    location: FileLocation,
) -> Result<(), TranslateError> {
    match *tokens {
        [_set_name, row, value, ..] => {
            let row_index = problem.row_index(row).ok_or_else(|| MissingReference::new(
                format!("row \"{}\" was never declared", row),
                Section::Rhs,
                location,
            ))?;
            value.parse::<f64>().map_err(|_| MalformedInput::new(
                format!("cannot parse right-hand side value \"{}\"", value),
                Section::Rhs,
                location,
            ))?;

            problem.set_rhs(row_index, value);
            Ok(())
        },
        _ => Err(MalformedInput::new(
            "expected a right-hand side set name, a row name and a value",
            Section::Rhs,
            location,
        ).into()),
    }
}

/// Parse a line of the BOUNDS section and store the bound.
///
/// The bound type code is kept verbatim. When the line carries no value, the literal `1` is
/// stored instead.
///
/// # Arguments
///
/// * `tokens` - The tokens on the line: a bound type code, the name of the bound set, a variable
///   name and optionally a value.
///
/// # Errors
///
/// A `MalformedInput` error when the value, if present, is not a number, or when tokens are
/// missing.
fn parse_bound_line(
    problem: &mut Problem,
    tokens: &[&str],
    location: FileLocation,
) -> Result<(), TranslateError> {
    let (type_code, column, value) = match *tokens {
        [type_code, _set_name, column] => (type_code, column, DEFAULT_BOUND_VALUE),
        [type_code, _set_name, column, value, ..] => {
            value.parse::<f64>().map_err(|_| MalformedInput::new(
                format!("cannot parse bound value \"{}\"", value),
                Section::Bounds,
                location,
            ))?;
            (type_code, column, value)
        },
        _ => return Err(MalformedInput::new(
            "expected a bound type code, a bound set name and a variable name",
            Section::Bounds,
            location,
        ).into()),
    };

    let variable = resolve_variable(problem, column, Section::Bounds, location)?;
    problem.set_bound(variable, Bound {
        type_code: type_code.to_string(),
        value: value.to_string(),
    });

    Ok(())
}

/// Resolve a variable name, minting a fresh identifier on first sight.
///
/// # Errors
///
/// A `MissingReference` error when the name was registered as a row: rows must pre-exist from the
/// ROWS section and only variables may be minted by use.
fn resolve_variable(
    problem: &mut Problem,
    name: &str,
    section: Section,
    location: FileLocation,
) -> Result<usize, MissingReference> {
    problem.variable_index(name).ok_or_else(|| MissingReference::new(
        format!("\"{}\" is used as a variable but names a row", name),
        section,
        location,
    ))
}
