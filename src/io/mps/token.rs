//! # Tokens used in MPS files
//!
//! Keywords and fixed literals of the five-section subset written by the simulator.

/// Opens the row declaration section.
pub const ROWS: &str = "ROWS";

/// Opens the constraint matrix section.
pub const COLUMNS: &str = "COLUMNS";

/// Opens the right-hand side section.
pub const RHS: &str = "RHS";

/// Opens the variable bound section.
pub const BOUNDS: &str = "BOUNDS";

/// Denotes the end of the file (notice the odd spelling).
pub const ENDATA: &str = "ENDATA";

/// Name of the objective row.
///
/// A row declared under this name is the objective function; it keeps this name as its internal
/// identifier. Every other row gets a minted identifier.
pub const OBJECTIVE_NAME: &str = "OBJECTIF";

/// Prefix of minted constraint identifiers: `ctr_0`, `ctr_1`, ... in first-seen order.
pub const CONSTRAINT_PREFIX: &str = "ctr_";

/// Prefix of minted variable identifiers: `x_0`, `x_1`, ... in first-seen order.
pub const VARIABLE_PREFIX: &str = "x_";

/// Bound value used when a BOUNDS line carries no explicit value.
///
/// Matches the MPS default upper bound semantics for binary-style entries.
pub const DEFAULT_BOUND_VALUE: &str = "1";

/// Extension expected on input problem files.
pub const FILE_SUFFIX: &str = ".mps";
