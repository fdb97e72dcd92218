//! # Conditions and Condition Sets
//!
//! A [`Condition`] is one evaluated rule: whether it held and the formula it
//! stands for. A [`ConditionSet`] is the full, ordered evaluation of one
//! rule-set slot. Every condition is evaluated; there is no early exit, so a
//! set always carries the complete picture for reporting.

use serde::Serialize;

use crate::class::{Criterion, LaueClass};

/// One evaluated rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Condition {
    /// Whether the rule held.
    pub holds: bool,
    /// Display formula, e.g. `C_{11} = C_{22}`.
    pub description: &'static str,
}

/// The ordered evaluation of one `(criterion, class)` slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConditionSet {
    criterion: Criterion,
    class: LaueClass,
    conditions: Vec<Condition>,
}

impl ConditionSet {
    pub(crate) fn new(criterion: Criterion, class: LaueClass, conditions: Vec<Condition>) -> Self {
        Self {
            criterion,
            class,
            conditions,
        }
    }

    pub fn criterion(&self) -> Criterion {
        self.criterion
    }

    /// The slot that was evaluated, after sub-variant resolution.
    pub fn class(&self) -> LaueClass {
        self.class
    }

    /// Whether every condition held. Vacuously true for an empty set.
    pub fn all_hold(&self) -> bool {
        self.conditions.iter().all(|c| c.holds)
    }

    /// Conditions that did not hold, in rule order.
    pub fn failures(&self) -> impl Iterator<Item = &Condition> {
        self.conditions.iter().filter(|c| !c.holds)
    }

    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Condition> {
        self.conditions.iter()
    }
}

impl<'a> IntoIterator for &'a ConditionSet {
    type Item = &'a Condition;
    type IntoIter = std::slice::Iter<'a, Condition>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
