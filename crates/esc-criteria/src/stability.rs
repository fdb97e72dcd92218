//! # Born Stability Rules
//!
//! Necessary and sufficient conditions for the stiffness tensor of each
//! Laue class to be positive definite, i.e. for the crystal to be
//! mechanically stable. The closed forms follow Mouhat & Coudert,
//! "Necessary and sufficient elastic stability conditions in various
//! crystal systems", Phys. Rev. B 90, 224104 (2014).
//!
//! Strict inequalities compare raw values. The caller's
//! [`Comparison`](esc_core::Comparison) is applied only to the
//! Rhombohedral equality `1/2 C_{44} (C_{11} - C_{12}) = C_{44} C_{66}`.
//!
//! Triclinic has no published closed form and an empty rule set; an empty
//! set holds vacuously.

use esc_core::StiffnessTensor;

use crate::class::LaueClass;
use crate::rule::{Rule, Segments};

/// `g = C11 C22 C33 - C11 C23^2 - C22 C13^2 - C33 C12^2 + 2 C12 C13 C23`,
/// the determinant of the normal-stress block.
fn normal_block_determinant(c: &StiffnessTensor) -> f64 {
    let (c11, c22, c33) = (c.entry(0, 0), c.entry(1, 1), c.entry(2, 2));
    let (c12, c13, c23) = (c.entry(0, 1), c.entry(0, 2), c.entry(1, 2));
    c11 * c22 * c33 - c11 * c23 * c23 - c22 * c13 * c13 - c33 * c12 * c12
        + 2.0 * c12 * c13 * c23
}

/// Monoclinic seventh criterion: the determinant of the
/// `{1, 2, 3, 5}` block, expanded around the `C_{i5}` couplings.
fn monoclinic_coupling(c: &StiffnessTensor) -> f64 {
    let (c11, c22, c33, c55) = (c.entry(0, 0), c.entry(1, 1), c.entry(2, 2), c.entry(4, 4));
    let (c12, c13, c23) = (c.entry(0, 1), c.entry(0, 2), c.entry(1, 2));
    let (c15, c25, c35) = (c.entry(0, 4), c.entry(1, 4), c.entry(2, 4));
    2.0 * (c15 * c25 * (c33 * c12 - c13 * c23)
        + c15 * c35 * (c22 * c13 - c12 * c23)
        + c25 * c35 * (c11 * c23 - c12 * c13))
        - (c15 * c15 * (c22 * c33 - c23 * c23)
            + c25 * c25 * (c11 * c33 - c13 * c13)
            + c35 * c35 * (c11 * c22 - c12 * c12))
        + c55 * normal_block_determinant(c)
}

const C11_EXCEEDS_C12: Rule = Rule::new("C_{11} > | C_{12} |", |c, _| {
    c.entry(0, 0) > c.entry(0, 1).abs()
});

const C44_POSITIVE: Rule = Rule::new("C_{44} > 0", |c, _| c.entry(3, 3) > 0.0);

static CUBIC: [Rule; 3] = [
    C11_EXCEEDS_C12,
    Rule::new("C_{11} + 2 C_{12} > 0", |c, _| {
        c.entry(0, 0) + 2.0 * c.entry(0, 1) > 0.0
    }),
    C44_POSITIVE,
];

// Hexagonal and both tetragonal classes.
static UNIAXIAL: [Rule; 3] = [
    C11_EXCEEDS_C12,
    Rule::new("2 C_{13}^2 < C_{33} (C_{11} + C_{12})", |c, _| {
        2.0 * c.entry(0, 2).powi(2) < c.entry(2, 2) * (c.entry(0, 0) + c.entry(0, 1))
    }),
    C44_POSITIVE,
];

static HEXAGONAL_SHEAR: [Rule; 1] = [Rule::new("C_{66} = 1/2 (C_{11} - C_{12}) > 0", |c, _| {
    0.5 * (c.entry(0, 0) - c.entry(0, 1)) > 0.0
})];

static TETRAGONAL_I_SHEAR: [Rule; 1] = [Rule::new("C_{66} > 0", |c, _| c.entry(5, 5) > 0.0)];

static TETRAGONAL_II_SHEAR: [Rule; 1] =
    [Rule::new("2 C_{16}^2 < C_{66} (C_{11} - C_{12})", |c, _| {
        2.0 * c.entry(0, 5).powi(2) < c.entry(5, 5) * (c.entry(0, 0) - c.entry(0, 1))
    })];

static RHOMBOHEDRAL_HEAD: [Rule; 3] = [
    C11_EXCEEDS_C12,
    C44_POSITIVE,
    Rule::new("C_{13}^2 < 1/2 C_{33} (C_{11} + C_{12})", |c, _| {
        c.entry(0, 2).powi(2) < 0.5 * c.entry(2, 2) * (c.entry(0, 0) + c.entry(0, 1))
    }),
];

static RHOMBOHEDRAL_I_COUPLING: [Rule; 1] =
    [Rule::new("C_{14}^2 < 1/2 C_{44} (C_{11} - C_{12})", |c, _| {
        c.entry(0, 3).powi(2) < 0.5 * c.entry(3, 3) * (c.entry(0, 0) - c.entry(0, 1))
    })];

static RHOMBOHEDRAL_II_COUPLING: [Rule; 1] = [Rule::new(
    "C_{14}^2 + C_{15}^2 < 1/2 C_{44} (C_{11} - C_{12})",
    |c, _| {
        c.entry(0, 3).powi(2) + c.entry(0, 4).powi(2)
            < 0.5 * c.entry(3, 3) * (c.entry(0, 0) - c.entry(0, 1))
    },
)];

static RHOMBOHEDRAL_TAIL: [Rule; 1] = [Rule::new(
    "1/2 C_{44} (C_{11} - C_{12}) = C_{44} C_{66}",
    |c, cmp| {
        cmp.equals(
            0.5 * c.entry(3, 3) * (c.entry(0, 0) - c.entry(0, 1)),
            c.entry(3, 3) * c.entry(5, 5),
        )
    },
)];

static ORTHORHOMBIC: [Rule; 6] = [
    Rule::new("C_{11} > 0", |c, _| c.entry(0, 0) > 0.0),
    Rule::new("C_{11} C_{22} > C_{12}^2", |c, _| {
        c.entry(0, 0) * c.entry(1, 1) > c.entry(0, 1).powi(2)
    }),
    Rule::new(
        "C_{11} C_{22} C_{33} + 2 C_{12} C_{13} C_{23} > C_{11} C_{23}^2 + C_{22} C_{13}^2 + C_{33} C_{12}^2",
        |c, _| {
            let (c11, c22, c33) = (c.entry(0, 0), c.entry(1, 1), c.entry(2, 2));
            let (c12, c13, c23) = (c.entry(0, 1), c.entry(0, 2), c.entry(1, 2));
            c11 * c22 * c33 + 2.0 * c12 * c13 * c23
                > c11 * c23 * c23 + c22 * c13 * c13 + c33 * c12 * c12
        },
    ),
    C44_POSITIVE,
    Rule::new("C_{55} > 0", |c, _| c.entry(4, 4) > 0.0),
    Rule::new("C_{66} > 0", |c, _| c.entry(5, 5) > 0.0),
];

static MONOCLINIC: [Rule; 7] = [
    Rule::new("C_{ii} > 0, i = 1..6", |c, _| {
        c.diagonal().iter().all(|&d| d > 0.0)
    }),
    Rule::new(
        "C_{11} + C_{22} + C_{33} + 2 (C_{12} + C_{13} + C_{23}) > 0",
        |c, _| {
            c.entry(0, 0)
                + c.entry(1, 1)
                + c.entry(2, 2)
                + 2.0 * (c.entry(0, 1) + c.entry(0, 2) + c.entry(1, 2))
                > 0.0
        },
    ),
    Rule::new("C_{33} C_{55} - C_{35}^2 > 0", |c, _| {
        c.entry(2, 2) * c.entry(4, 4) - c.entry(2, 4).powi(2) > 0.0
    }),
    Rule::new("C_{44} C_{66} - C_{46}^2 > 0", |c, _| {
        c.entry(3, 3) * c.entry(5, 5) - c.entry(3, 5).powi(2) > 0.0
    }),
    Rule::new("C_{22} + C_{33} - 2 C_{23} > 0", |c, _| {
        c.entry(1, 1) + c.entry(2, 2) - 2.0 * c.entry(1, 2) > 0.0
    }),
    Rule::new(
        "C_{22} (C_{33} C_{55} - C_{35}^2) + 2 C_{23} C_{25} C_{35} - C_{23}^2 C_{55} - C_{25}^2 C_{33} > 0",
        |c, _| {
            let (c22, c33, c55) = (c.entry(1, 1), c.entry(2, 2), c.entry(4, 4));
            let (c23, c25, c35) = (c.entry(1, 2), c.entry(1, 4), c.entry(2, 4));
            c22 * (c33 * c55 - c35 * c35) + 2.0 * c23 * c25 * c35
                - c23 * c23 * c55
                - c25 * c25 * c33
                > 0.0
        },
    ),
    Rule::new(
        "2 [C_{15} C_{25} (C_{33} C_{12} - C_{13} C_{23}) + C_{15} C_{35} (C_{22} C_{13} - C_{12} C_{23}) \
         + C_{25} C_{35} (C_{11} C_{23} - C_{12} C_{13})] - [C_{15}^2 (C_{22} C_{33} - C_{23}^2) \
         + C_{25}^2 (C_{11} C_{33} - C_{13}^2) + C_{35}^2 (C_{11} C_{22} - C_{12}^2)] + C_{55} g > 0",
        |c, _| monoclinic_coupling(c) > 0.0,
    ),
];

static CUBIC_SET: [&[Rule]; 1] = [&CUBIC];
static HEXAGONAL_SET: [&[Rule]; 2] = [&UNIAXIAL, &HEXAGONAL_SHEAR];
static TETRAGONAL_I_SET: [&[Rule]; 2] = [&UNIAXIAL, &TETRAGONAL_I_SHEAR];
static TETRAGONAL_II_SET: [&[Rule]; 2] = [&UNIAXIAL, &TETRAGONAL_II_SHEAR];
static RHOMBOHEDRAL_I_SET: [&[Rule]; 3] =
    [&RHOMBOHEDRAL_HEAD, &RHOMBOHEDRAL_I_COUPLING, &RHOMBOHEDRAL_TAIL];
static RHOMBOHEDRAL_II_SET: [&[Rule]; 3] =
    [&RHOMBOHEDRAL_HEAD, &RHOMBOHEDRAL_II_COUPLING, &RHOMBOHEDRAL_TAIL];
static ORTHORHOMBIC_SET: [&[Rule]; 1] = [&ORTHORHOMBIC];
static MONOCLINIC_SET: [&[Rule]; 1] = [&MONOCLINIC];
static TRICLINIC_SET: [&[Rule]; 0] = [];

/// Stability rule segments for `class`.
pub(crate) fn segments(class: LaueClass) -> Segments {
    match class {
        LaueClass::Cubic => &CUBIC_SET,
        LaueClass::Hexagonal => &HEXAGONAL_SET,
        LaueClass::TetragonalI => &TETRAGONAL_I_SET,
        LaueClass::TetragonalII => &TETRAGONAL_II_SET,
        LaueClass::RhombohedralI => &RHOMBOHEDRAL_I_SET,
        LaueClass::RhombohedralII => &RHOMBOHEDRAL_II_SET,
        LaueClass::Orthorhombic => &ORTHORHOMBIC_SET,
        LaueClass::Monoclinic => &MONOCLINIC_SET,
        LaueClass::Triclinic => &TRICLINIC_SET,
    }
}
