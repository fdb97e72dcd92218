//! # Classification
//!
//! Infers the most specific Laue class a tensor conforms to. Systems are
//! tried from highest to lowest symmetry; for each one the sub-variant slot
//! is resolved, and the tensor must both satisfy the slot's symmetry rules
//! and vanish outside the slot's structural pattern. Triclinic accepts
//! anything.
//!
//! The structural-pattern check matters because the higher-symmetry rule
//! sets only state their equalities. Without it a Rhombohedral tensor would
//! pass the Hexagonal rules, which say nothing about `C_{14}`.
//!
//! Independent-constant counts are read as upper bounds here. Two constants
//! that happen to coincide do not lower a tensor's symmetry, so an
//! orthorhombic tensor with `C_{44} = C_{55}` is still orthorhombic.

use esc_core::{Comparison, StiffnessTensor, VOIGT_DIM};

use crate::class::{Criterion, CrystalSystem, LaueClass};
use crate::rule::rules;

/// Trial order. Hexagonal precedes Rhombohedral and Tetragonal so that a
/// transversely isotropic tensor lands in the more specific class.
const ORDER: [CrystalSystem; 6] = [
    CrystalSystem::Cubic,
    CrystalSystem::Hexagonal,
    CrystalSystem::Rhombohedral,
    CrystalSystem::Tetragonal,
    CrystalSystem::Orthorhombic,
    CrystalSystem::Monoclinic,
];

const NORMAL_BLOCK: &[(usize, usize)] = &[(0, 1), (0, 2), (1, 2)];
const TETRAGONAL_II: &[(usize, usize)] = &[(0, 5), (1, 5)];
const RHOMBOHEDRAL_I: &[(usize, usize)] = &[(0, 3), (1, 3), (4, 5)];
const RHOMBOHEDRAL_II: &[(usize, usize)] = &[(0, 4), (1, 4), (3, 5)];
const MONOCLINIC: &[(usize, usize)] = &[(0, 4), (1, 4), (2, 4), (3, 5)];

/// Off-diagonal upper-triangle entries allowed to be nonzero in `class`.
/// `None` means unrestricted.
fn allowed_off_diagonal(class: LaueClass) -> Option<Vec<(usize, usize)>> {
    let extra: &[&[(usize, usize)]] = match class {
        LaueClass::Cubic
        | LaueClass::Hexagonal
        | LaueClass::TetragonalI
        | LaueClass::Orthorhombic => &[],
        LaueClass::TetragonalII => &[TETRAGONAL_II],
        LaueClass::RhombohedralI => &[RHOMBOHEDRAL_I],
        LaueClass::RhombohedralII => &[RHOMBOHEDRAL_I, RHOMBOHEDRAL_II],
        LaueClass::Monoclinic => &[MONOCLINIC],
        LaueClass::Triclinic => return None,
    };
    Some(
        std::iter::once(NORMAL_BLOCK)
            .chain(extra.iter().copied())
            .flatten()
            .copied()
            .collect(),
    )
}

/// Whether every entry outside `class`'s pattern is zero under `comparison`.
fn matches_pattern(class: LaueClass, tensor: &StiffnessTensor, comparison: &Comparison) -> bool {
    let Some(allowed) = allowed_off_diagonal(class) else {
        return true;
    };
    (0..VOIGT_DIM)
        .flat_map(|i| ((i + 1)..VOIGT_DIM).map(move |j| (i, j)))
        .filter(|pair| !allowed.contains(pair))
        .all(|(i, j)| {
            comparison.is_zero(tensor.entry(i, j)) && comparison.is_zero(tensor.entry(j, i))
        })
}

fn conforms(class: LaueClass, tensor: &StiffnessTensor, comparison: &Comparison) -> bool {
    matches_pattern(class, tensor, comparison)
        && rules(Criterion::Symmetry, class).all(|rule| match rule.independent_constants() {
            Some(limit) => comparison.distinct_nonzero(tensor.values()) <= limit,
            None => rule.evaluate(tensor, comparison).holds,
        })
}

/// The most specific Laue class `tensor` conforms to.
pub fn classify(tensor: &StiffnessTensor, comparison: &Comparison) -> LaueClass {
    let class = ORDER
        .iter()
        .map(|system| system.resolve(tensor, comparison))
        .find(|class| conforms(*class, tensor, comparison))
        .unwrap_or(LaueClass::Triclinic);
    tracing::debug!(class = %class, comparison = %comparison, "classified tensor");
    class
}
