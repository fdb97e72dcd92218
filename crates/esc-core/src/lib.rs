//! # esc-core: Foundational Types for Elastic Stability Checks
//!
//! This crate is the leaf of the workspace. It defines the matrix container
//! every criterion reads from and the comparison rules every criterion
//! compares with. It depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Validated construction.** A [`StiffnessTensor`] is always exactly
//!    6×6 and finite. Shape problems are rejected once, at construction,
//!    with a [`ShapeError`] that names the offending row or entry.
//!
//! 2. **Immutable container.** There are no setters. The compliance tensor
//!    is recomputed on every call to [`StiffnessTensor::compliance`] and
//!    singular input is an error, never a matrix of infinities.
//!
//! 3. **One comparison flag.** Exact versus tolerance-based equality is a
//!    single [`Comparison`] value threaded through both criteria engines.
//!
//! ## Crate Policy
//!
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests (indexing past 5 in
//!   [`StiffnessTensor::entry`] panics like slice indexing; use
//!   [`StiffnessTensor::get`] for checked access).

pub mod error;
pub mod tensor;
pub mod tolerance;

// Re-export primary types for ergonomic imports.
pub use error::{EscError, InvalidToleranceError, ShapeError, SingularMatrixError};
pub use tensor::{ComplianceTensor, StiffnessTensor, VOIGT_DIM};
pub use tolerance::{Comparison, Tolerance};
