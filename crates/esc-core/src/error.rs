//! # Error Types: Structured Error Hierarchy
//!
//! Defines the error types used by the stiffness tensor container and the
//! tolerance setter. All errors use `thiserror` for derive-based `Display`
//! and `Error` implementations.
//!
//! ## Design
//!
//! - Shape errors name the offending row, column or length so a malformed
//!   input file can be fixed without re-reading it.
//! - Condition evaluation never produces an error: degenerate numbers
//!   surface as failed conditions, not as `Err`.
//! - A coarse tolerance (`|ε| > 1`) is a warning, logged through `tracing`,
//!   never an error.

use thiserror::Error;

/// Top-level error type for elastic stability checks.
#[derive(Error, Debug)]
pub enum EscError {
    /// The input is not a 6×6 matrix of finite reals.
    #[error("shape error: {0}")]
    Shape(#[from] ShapeError),

    /// The stiffness tensor cannot be inverted.
    #[error(transparent)]
    Singular(#[from] SingularMatrixError),

    /// A tolerance was rejected at the setter.
    #[error("invalid tolerance: {0}")]
    InvalidTolerance(#[from] InvalidToleranceError),

    /// A crystal system name did not match any supported system.
    #[error("unknown crystal system: {0:?}")]
    UnknownCrystalSystem(String),
}

/// The input does not coerce into exactly 36 finite reals arranged 6×6.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ShapeError {
    /// Wrong number of rows.
    #[error("expected 6 rows, found {found}")]
    RowCount {
        /// Number of rows supplied.
        found: usize,
    },

    /// A row has the wrong number of columns.
    #[error("expected 6 columns in row {row}, found {found}")]
    RowLength {
        /// Zero-based row index.
        row: usize,
        /// Number of columns supplied in that row.
        found: usize,
    },

    /// A flat buffer does not hold exactly 36 values.
    #[error("expected 36 values, found {found}")]
    FlatLength {
        /// Number of values supplied.
        found: usize,
    },

    /// An entry is NaN or infinite.
    #[error("entry ({row}, {col}) is not finite: {value}")]
    NonFinite {
        /// Zero-based row index.
        row: usize,
        /// Zero-based column index.
        col: usize,
        /// The rejected value.
        value: f64,
    },

    /// A token in the plain-text form is not a number.
    #[error("line {line}: cannot parse {token:?} as a number")]
    Parse {
        /// One-based line number in the source text.
        line: usize,
        /// The offending token.
        token: String,
    },
}

/// The stiffness tensor is not invertible.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("stiffness tensor is singular; compliance tensor is undefined")]
pub struct SingularMatrixError;

/// A tolerance value was rejected.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InvalidToleranceError {
    /// NaN is not a tolerance.
    #[error("tolerance must be a number, got NaN")]
    NotANumber,

    /// An infinite tolerance makes every comparison pass.
    #[error("tolerance must be finite, got {0}")]
    Infinite(f64),
}
