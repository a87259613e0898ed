//! # Importing MPS files
//!
//! Reading of `.mps` files, or files of the Mathematical Programming System format, restricted to
//! the five-section subset written by the simulator: `ROWS`, `COLUMNS`, `RHS`, `BOUNDS` and
//! `ENDATA`.
//!
//! Parsing builds a [`Problem`] in a single forward pass; the problem is then handed, read-only,
//! to the writer in the [`lp`](crate::io::lp) module.
use std::collections::HashMap;
use std::convert::TryFrom;
use std::fmt;

use crate::io::error::{MissingReference, TranslateError};

mod parsing;
pub(crate) mod token;

/// Parse an MPS program, in string form, to a [`Problem`].
///
/// # Arguments
///
/// * `program` - The input in MPS format.
///
/// # Return value
///
/// A completed [`Problem`], ready for serialization.
///
/// # Errors
///
/// A [`TranslateError`] when a line can't be interpreted, when a row is referenced that was never
/// declared, or when no objective row was declared at all.
pub fn parse(program: &str) -> Result<Problem, TranslateError> {
    let problem = parsing::scan(program)?;

    match problem.objective() {
        Some(_) => Ok(problem),
        None => Err(MissingReference::undeclared(
            format!("no objective row \"{}\" was declared", token::OBJECTIVE_NAME),
            Section::Rows,
        ).into()),
    }
}

/// MPS files are divided into sections.
///
/// Section keywords are recognized case-sensitively, as a whole line, unindented. The `Endata`
/// variant (notice the odd spelling) denotes the end of the file and terminates the scan.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Section {
    /// Row declarations: a row type code and a row name per line.
    Rows,
    /// Constraint matrix coefficients, column by column.
    Columns,
    /// Right-hand side values for the declared rows.
    Rhs,
    /// Bounds on variables.
    Bounds,
    /// End of data.
    Endata,
}

impl<'a> TryFrom<&'a str> for Section {
    type Error = ();

    /// Try to read a `Section` from a line.
    ///
    /// # Arguments
    ///
    /// * `line` - The complete input line, with the line terminator stripped.
    ///
    /// # Return value
    ///
    /// A `Section` variant describing the section this line announces, if one is recognized.
    ///
    /// # Errors
    ///
    /// A `()` error if the line is not exactly a section keyword.
    fn try_from(line: &'a str) -> Result<Section, Self::Error> {
        match line {
            token::ROWS => Ok(Section::Rows),
            token::COLUMNS => Ok(Section::Columns),
            token::RHS => Ok(Section::Rhs),
            token::BOUNDS => Ok(Section::Bounds),
            token::ENDATA => Ok(Section::Endata),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let keyword = match self {
            Section::Rows => token::ROWS,
            Section::Columns => token::COLUMNS,
            Section::Rhs => token::RHS,
            Section::Bounds => token::BOUNDS,
            Section::Endata => token::ENDATA,
        };
        f.write_str(keyword)
    }
}

/// Relational classification of a row.
///
/// The objective row is marked `N` in the ROWS section and minimized; constraint rows carry one
/// of the relational operators.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Sense {
    /// The objective function, marked `N`.
    Minimize,
    /// A `G` row: left-hand side at least the right-hand side.
    Greater,
    /// An `L` row: left-hand side at most the right-hand side.
    Less,
    /// An `E` row: both sides equal.
    Equal,
}

impl<'a> TryFrom<&'a str> for Sense {
    type Error = ();

    /// Try to read a `Sense` from a row type code.
    ///
    /// # Arguments
    ///
    /// * `word` - The input string slice.
    ///
    /// # Return value
    ///
    /// A `Sense` variant if the slice matches either `N`, `G`, `L` or `E`.
    ///
    /// # Errors
    ///
    /// Any other slice fails to be parsed.
    fn try_from(word: &'a str) -> Result<Sense, Self::Error> {
        match word {
            "N" => Ok(Sense::Minimize),
            "G" => Ok(Sense::Greater),
            "L" => Ok(Sense::Less),
            "E" => Ok(Sense::Equal),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Sense {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let text = match self {
            Sense::Minimize => "min",
            Sense::Greater => ">=",
            Sense::Less => "<=",
            Sense::Equal => "=",
        };
        f.write_str(text)
    }
}

/// Internal identifier assigned to an original MPS name.
///
/// Tagged with the kind of entity the name was registered as, so that a name can never be
/// resolved as a row in one place and as a variable in another.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum Identifier {
    /// Index into the row table.
    Row(usize),
    /// Index into the variable table.
    Variable(usize),
}

/// A single row: the objective function or one constraint.
#[derive(Debug, PartialEq)]
pub(crate) struct Row {
    /// Relational sense derived from the row type code.
    pub sense: Sense,
    /// Variable index and coefficient pairs, in first-seen order.
    ///
    /// At most one entry per variable; a later coefficient for the same (row, variable) pair
    /// overwrites the earlier one.
    pub coefficients: Vec<(usize, f64)>,
    /// Right-hand side lexeme, once the RHS section supplied one.
    pub rhs: Option<String>,
}

/// Bound declared for one variable in the BOUNDS section.
///
/// Only the most recent bound per variable survives.
#[derive(Debug, Eq, PartialEq)]
pub(crate) struct Bound {
    /// Bound type code, verbatim from the file (e.g. `UP`, `LO`, `FX`).
    pub type_code: String,
    /// Bound value lexeme, or the literal `1` if the line carried none.
    pub value: String,
}

/// In-memory representation of a parsed problem.
///
/// All collections are insertion-ordered and are mutated only while scanning; a `Problem` is
/// constructed fresh per parse invocation and never shared between runs.
#[derive(Debug, PartialEq)]
pub struct Problem {
    /// Original MPS name to assigned internal identifier.
    ///
    /// Every original token maps to exactly one internal identifier for the lifetime of a parse;
    /// identifiers, once assigned, are never reassigned or reused.
    names: HashMap<String, Identifier>,
    /// Internal row identifiers, in first-seen order.
    row_ids: Vec<String>,
    /// Row data, parallel to `row_ids`.
    rows: Vec<Row>,
    /// Internal variable identifiers, in first-seen order.
    variable_ids: Vec<String>,
    /// Variable index and bound pairs, in first-seen order of the variable.
    bounds: Vec<(usize, Bound)>,
    /// Number of constraint identifiers minted so far.
    constraint_count: usize,
}

impl Problem {
    /// Create an empty problem, to be filled while scanning.
    pub(crate) fn new() -> Problem {
        Problem {
            names: HashMap::new(),
            row_ids: Vec::new(),
            rows: Vec::new(),
            variable_ids: Vec::new(),
            bounds: Vec::new(),
            constraint_count: 0,
        }
    }

    /// Register a row under its original name.
    ///
    /// The row named [`token::OBJECTIVE_NAME`] keeps that name as its identifier; any other row
    /// gets a minted `ctr_N` identifier.
    ///
    /// # Arguments
    ///
    /// * `name` - Original row name from the ROWS section.
    /// * `sense` - Relational sense derived from the row type code.
    pub(crate) fn register_row(&mut self, name: &str, sense: Sense) {
        let id = if name == token::OBJECTIVE_NAME {
            token::OBJECTIVE_NAME.to_string()
        } else {
            let id = format!("{}{}", token::CONSTRAINT_PREFIX, self.constraint_count);
            self.constraint_count += 1;
            id
        };

        self.names.insert(name.to_string(), Identifier::Row(self.rows.len()));
        self.row_ids.push(id);
        self.rows.push(Row { sense, coefficients: Vec::new(), rhs: None, });
    }

    /// Resolve a row reference by its original name.
    ///
    /// # Return value
    ///
    /// The row index, or `None` when the name is unknown or names a variable.
    pub(crate) fn row_index(&self, name: &str) -> Option<usize> {
        match self.names.get(name) {
            Some(&Identifier::Row(index)) => Some(index),
            _ => None,
        }
    }

    /// Resolve a variable by its original name, minting an `x_N` identifier on first sight.
    ///
    /// # Return value
    ///
    /// The variable index, or `None` when the name was already registered as a row.
    pub(crate) fn variable_index(&mut self, name: &str) -> Option<usize> {
        match self.names.get(name) {
            Some(&Identifier::Variable(index)) => Some(index),
            Some(&Identifier::Row(_)) => None,
            None => {
                let index = self.variable_ids.len();
                self.names.insert(name.to_string(), Identifier::Variable(index));
                self.variable_ids.push(format!("{}{}", token::VARIABLE_PREFIX, index));
                Some(index)
            },
        }
    }

    /// Store a constraint matrix coefficient. A later write for the same (row, variable) pair
    /// overwrites the earlier one.
    pub(crate) fn set_coefficient(&mut self, row: usize, variable: usize, value: f64) {
        let coefficients = &mut self.rows[row].coefficients;
        match coefficients.iter_mut().find(|&&mut (existing, _)| existing == variable) {
            Some(&mut (_, ref mut existing)) => *existing = value,
            None => coefficients.push((variable, value)),
        }
    }

    /// Store a right-hand side lexeme for a row, replacing any earlier one.
    pub(crate) fn set_rhs(&mut self, row: usize, value: &str) {
        self.rows[row].rhs = Some(value.to_string());
    }

    /// Store a bound for a variable, replacing any earlier one.
    ///
    /// The variable keeps its first-seen position in the bounds table.
    pub(crate) fn set_bound(&mut self, variable: usize, bound: Bound) {
        match self.bounds.iter_mut().find(|&&mut (existing, _)| existing == variable) {
            Some(&mut (_, ref mut existing)) => *existing = bound,
            None => self.bounds.push((variable, bound)),
        }
    }

    /// The objective row, if one was declared.
    pub(crate) fn objective(&self) -> Option<&Row> {
        self.row_ids.iter()
            .position(|id| id == token::OBJECTIVE_NAME)
            .map(|index| &self.rows[index])
    }

    /// Internal identifiers and row data of all constraint rows, in first-seen order.
    ///
    /// The objective row is excluded.
    pub(crate) fn constraints(&self) -> impl Iterator<Item = (&str, &Row)> {
        self.row_ids.iter()
            .zip(self.rows.iter())
            .filter(|&(id, _)| id != token::OBJECTIVE_NAME)
            .map(|(id, row)| (id.as_str(), row))
    }

    /// Internal identifier of a variable by index.
    pub(crate) fn variable_id(&self, index: usize) -> &str {
        &self.variable_ids[index]
    }

    /// Internal variable identifiers and bounds, in first-seen order of the variable.
    pub(crate) fn variable_bounds(&self) -> impl Iterator<Item = (&str, &Bound)> {
        self.bounds.iter().map(|&(variable, ref bound)| (self.variable_id(variable), bound))
    }
}
