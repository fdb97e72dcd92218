//! # esc-criteria: Symmetry and Stability Criteria
//!
//! Decides whether a [`StiffnessTensor`](esc_core::StiffnessTensor) is
//! admissible for a crystal system, through two checks that share one
//! per-Laue-class rule table:
//!
//! - **Symmetry conformance.** The equalities and forced zeros each class
//!   imposes, plus the count of independent constants.
//! - **Born stability.** Closed-form necessary and sufficient conditions for
//!   positive definiteness.
//!
//! ## Flow
//!
//! ```text
//! Validator::symmetry(system) ─┐
//!                              ├─ resolve(tensor) ─► LaueClass ─► rules(criterion, class)
//! Validator::stability(system) ┘                                       │
//!                                                                      ▼
//!                                         Reporter::evaluate ◄── ConditionSet
//! ```
//!
//! Tetragonal and Rhombohedral split into I/II slots on whether `C_{16}`
//! (respectively `C_{15}`) vanishes. The split is recomputed for every
//! evaluation.
//!
//! ## Crate Policy
//!
//! - Rule predicates are pure; only the [`Reporter`] performs I/O.
//! - No evaluation raises. Degenerate input (NaN) makes conditions fail.
//! - One [`Comparison`](esc_core::Comparison) per validator decides every
//!   equality in both engines.

pub mod class;
pub mod classify;
pub mod condition;
pub mod report;
pub mod rule;
mod stability;
mod symmetry;
pub mod validator;

pub use class::{Criterion, CrystalSystem, LaueClass};
pub use classify::classify;
pub use condition::{Condition, ConditionSet};
pub use report::Reporter;
pub use rule::{rules, Rule};
pub use validator::Validator;
