//! # Writing LP text files
//!
//! Serialization of a completed [`Problem`](crate::io::mps::Problem) to the readable LP text
//! format: a `Variables:` block listing the declared bounds, an `Objective:` block and a
//! `Constraints:` block, each entry line indented with a single tab.
use itertools::Itertools;

use crate::io::mps::{Problem, Row};

/// Prefix of the produced LP text file name.
pub(crate) const FILE_PREFIX: &str = "lp_";

/// Extension of the produced LP text file.
pub(crate) const FILE_EXTENSION: &str = ".txt";

/// Serialize a problem to LP text.
///
/// # Arguments
///
/// * `problem` - A completed problem, as produced by [`parse`](crate::io::mps::parse).
///
/// # Return value
///
/// The complete file contents, ready to be written out in one step.
pub fn serialize(problem: &Problem) -> String {
    let mut out = String::new();

    out.push_str("Variables:\n");
    for (variable, bound) in problem.variable_bounds() {
        out.push('\t');
        out.push_str(variable);
        out.push(' ');
        out.push_str(&bound.type_code);
        out.push_str(" <= ");
        out.push_str(&bound.value);
        out.push('\n');
    }

    out.push_str("Objective:\n");
    if let Some(objective) = problem.objective() {
        out.push('\t');
        out.push_str(&objective.sense.to_string());
        let terms = render_terms(problem, objective);
        if !terms.is_empty() {
            out.push(' ');
            out.push_str(&terms);
        }
        out.push('\n');
    }

    out.push_str("Constraints:\n");
    for (id, constraint) in problem.constraints() {
        out.push('\t');
        out.push_str(id);
        out.push(':');
        let terms = render_terms(problem, constraint);
        if !terms.is_empty() {
            out.push(' ');
            out.push_str(&terms);
        }
        match &constraint.rhs {
            Some(value) => {
                out.push(' ');
                out.push_str(&constraint.sense.to_string());
                out.push(' ');
                out.push_str(value);
            },
            None => out.push(' '),
        }
        out.push('\n');
    }

    out
}

/// Render the coefficient terms of a row as `<coefficient>*<variable>`, joined by `" + "`.
fn render_terms(problem: &Problem, row: &Row) -> String {
    row.coefficients.iter()
        .map(|&(variable, coefficient)| {
            format!("{}*{}", render_coefficient(coefficient), problem.variable_id(variable))
        })
        .join(" + ")
}

/// Render a coefficient in its shortest form that parses back to the same value.
///
/// Integral values keep a trailing `.0`, so a coefficient read as `3.0` is written as `3.0`
/// rather than `3`.
fn render_coefficient(value: f64) -> String {
    format!("{:?}", value)
}

/// Testing the serialization functionality.
#[cfg(test)]
mod test {
    use crate::io::lp::{render_coefficient, serialize};
    use crate::io::mps::parse;
    use crate::io::mps::test::{lp_problem, MPS_STRING};

    #[test]
    fn test_render_coefficient() {
        macro_rules! test {
            ($value:expr, $expected:expr) => {
                assert_eq!(render_coefficient($value), $expected);
            }
        }

        test!(3f64, "3.0");
        test!(2.5f64, "2.5");
        test!(-1f64, "-1.0");
        test!(10f64, "10.0");
        test!(0.5f64, "0.5");
    }

    /// Serialize the reference problem and compare against the expected file contents.
    #[test]
    fn test_serialize() {
        let expected = "\
Variables:
\tx_0 UP <= 4
\tx_1 LO <= 0.5
Objective:
\tmin 3.0*x_0 + 2.0*x_1
Constraints:
\tctr_0: 1.5*x_0 <= 10
\tctr_1: 1.0*x_1 >= 2.5
";

        assert_eq!(serialize(&lp_problem()), expected);
    }

    /// Parsing and serializing the same input twice produces identical output.
    #[test]
    fn test_serialize_deterministic() {
        let first = serialize(&parse(MPS_STRING).unwrap());
        let second = serialize(&parse(MPS_STRING).unwrap());

        assert_eq!(first, second);
    }

    /// A constraint that never received a right-hand side ends in a dangling space.
    #[test]
    fn test_constraint_without_rhs() {
        let program = "\
ROWS
 N  OBJECTIF
 L  CTR1
COLUMNS
    X1        OBJECTIF             3.0
    X1        CTR1                 1.5
ENDATA";

        let text = serialize(&parse(program).unwrap());

        assert_eq!(text, "\
Variables:
Objective:
\tmin 3.0*x_0
Constraints:
\tctr_0: 1.5*x_0 \n");
    }
}
