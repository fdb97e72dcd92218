//! # Per-Laue-Class Rule Table
//!
//! One table serves both engines. A [`Rule`] pairs a display formula with a
//! pure predicate over the tensor entries; the table maps
//! `(Criterion, LaueClass)` to an ordered list of segments of rules.
//! Sub-variants are built by appending segments to their parent's, so a
//! condition shared by Tetragonal I and II is the same predicate, not a
//! copy of it.
//!
//! Formulas use conventional 1-based Voigt subscripts: `C_{11}` is entry
//! `(0, 0)`, `C_{16}` is entry `(0, 5)`.

use std::fmt;

use esc_core::{Comparison, StiffnessTensor};

use crate::class::{Criterion, LaueClass};
use crate::condition::Condition;
use crate::{stability, symmetry};

/// A pure test over tensor entries. The comparison decides equalities.
pub type Predicate = fn(&StiffnessTensor, &Comparison) -> bool;

/// Ordered segments of rules making up one rule set.
pub type Segments = &'static [&'static [Rule]];

/// One condition of a rule set.
#[derive(Clone, Copy)]
pub struct Rule {
    formula: &'static str,
    predicate: Predicate,
    independent_constants: Option<usize>,
}

impl Rule {
    /// Pair a display formula with its predicate.
    pub const fn new(formula: &'static str, predicate: Predicate) -> Self {
        Self {
            formula,
            predicate,
            independent_constants: None,
        }
    }

    /// Mark this rule as the independent-constant count `n` of its class.
    pub const fn with_independent_constants(self, n: usize) -> Self {
        Self {
            independent_constants: Some(n),
            ..self
        }
    }

    /// The count this rule demands, if it is a count rule.
    pub fn independent_constants(&self) -> Option<usize> {
        self.independent_constants
    }

    /// The display formula, e.g. `C_{11} > | C_{12} |`.
    pub fn formula(&self) -> &'static str {
        self.formula
    }

    /// Evaluate against `tensor`.
    pub fn evaluate(&self, tensor: &StiffnessTensor, comparison: &Comparison) -> Condition {
        Condition {
            holds: (self.predicate)(tensor, comparison),
            description: self.formula,
        }
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("formula", &self.formula)
            .field("independent_constants", &self.independent_constants)
            .finish_non_exhaustive()
    }
}

/// The ordered rules for one `(criterion, class)` slot.
pub fn rules(criterion: Criterion, class: LaueClass) -> impl Iterator<Item = &'static Rule> {
    let segments = match criterion {
        Criterion::Symmetry => symmetry::segments(class),
        Criterion::Stability => stability::segments(class),
    };
    segments.iter().flat_map(|segment| segment.iter())
}
