//! # Validators
//!
//! A [`Validator`] binds a [`Criterion`] to a [`CrystalSystem`] and owns the
//! [`Comparison`] used for every equality it evaluates. Symmetry and
//! stability validators are the same type over the same rule table; only
//! the criterion differs.
//!
//! The sub-variant slot is resolved on every call against the tensor being
//! evaluated. A validator is cheap to copy and holds no tensor state, so one
//! instance can be reused across tensors and threads.

use esc_core::{Comparison, InvalidToleranceError, StiffnessTensor};

use crate::class::{Criterion, CrystalSystem, LaueClass};
use crate::condition::ConditionSet;
use crate::report::Reporter;
use crate::rule::rules;

/// Evaluates one criterion for one crystal system.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Validator {
    criterion: Criterion,
    system: CrystalSystem,
    comparison: Comparison,
}

impl Validator {
    /// A validator for `criterion` with the default tolerant comparison.
    pub fn new(criterion: Criterion, system: CrystalSystem) -> Self {
        Self {
            criterion,
            system,
            comparison: Comparison::default(),
        }
    }

    /// Symmetry conformance for `system`.
    pub fn symmetry(system: CrystalSystem) -> Self {
        Self::new(Criterion::Symmetry, system)
    }

    /// Born stability for `system`.
    pub fn stability(system: CrystalSystem) -> Self {
        Self::new(Criterion::Stability, system)
    }

    /// Replace the comparison mode.
    pub fn with_comparison(mut self, comparison: Comparison) -> Self {
        self.comparison = comparison;
        self
    }

    /// Switch to tolerant comparison with tolerance `value`.
    ///
    /// On error the previous comparison is kept.
    pub fn set_tolerance(&mut self, value: f64) -> Result<(), InvalidToleranceError> {
        self.comparison = Comparison::tolerant(value)?;
        Ok(())
    }

    /// Switch to exact IEEE comparison.
    pub fn set_exact(&mut self) {
        self.comparison = Comparison::Exact;
    }

    pub fn comparison(&self) -> Comparison {
        self.comparison
    }

    pub fn criterion(&self) -> Criterion {
        self.criterion
    }

    pub fn system(&self) -> CrystalSystem {
        self.system
    }

    /// The slot that would be evaluated for `tensor`.
    pub fn resolve(&self, tensor: &StiffnessTensor) -> LaueClass {
        self.system.resolve(tensor, &self.comparison)
    }

    /// Evaluate every condition of the resolved slot.
    pub fn conditions(&self, tensor: &StiffnessTensor) -> ConditionSet {
        let class = self.resolve(tensor);
        let conditions = rules(self.criterion, class)
            .map(|rule| rule.evaluate(tensor, &self.comparison))
            .collect();
        let set = ConditionSet::new(self.criterion, class, conditions);
        tracing::debug!(
            criterion = %self.criterion,
            class = %class,
            total = set.len(),
            failed = set.failures().count(),
            "evaluated condition set"
        );
        set
    }

    /// Evaluate and report failures through `reporter`.
    pub fn check<W: std::io::Write>(
        &self,
        tensor: &StiffnessTensor,
        reporter: &mut Reporter<W>,
    ) -> bool {
        reporter.evaluate(&self.conditions(tensor))
    }
}
