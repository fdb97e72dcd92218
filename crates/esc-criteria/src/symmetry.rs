//! # Symmetry Conformance Rules
//!
//! The algebraic pattern each Laue class imposes on a stiffness tensor:
//! which entries must be pairwise equal, which must vanish, and how many
//! independent constants remain. Every equality and zero test goes through
//! the caller's [`Comparison`](esc_core::Comparison).
//!
//! Independent-constant counts are taken over distinct *nonzero* entries of
//! the full 36-entry tensor. Zero is the structural pattern value and is
//! covered by the zero conditions.

use esc_core::{Comparison, StiffnessTensor};

use crate::class::LaueClass;
use crate::rule::{Rule, Segments};

fn independent_constants(c: &StiffnessTensor, comparison: &Comparison) -> usize {
    comparison.distinct_nonzero(c.values())
}

static CUBIC: [Rule; 3] = [
    Rule::new("C_{11} = C_{22} = C_{33}", |c, cmp| {
        cmp.all_equal(&[c.entry(0, 0), c.entry(1, 1), c.entry(2, 2)])
    }),
    Rule::new("C_{44} = C_{55} = C_{66}", |c, cmp| {
        cmp.all_equal(&[c.entry(3, 3), c.entry(4, 4), c.entry(5, 5)])
    }),
    Rule::new(
        "C_{12} = C_{13} = C_{23} = C_{21} = C_{31} = C_{32}",
        |c, cmp| {
            cmp.all_equal(&[
                c.entry(0, 1),
                c.entry(0, 2),
                c.entry(1, 2),
                c.entry(1, 0),
                c.entry(2, 0),
                c.entry(2, 1),
            ])
        },
    ),
];

// Shared by every system with a unique axis along x3.
static UNIAXIAL: [Rule; 3] = [
    Rule::new("C_{11} = C_{22}", |c, cmp| cmp.equals(c.entry(0, 0), c.entry(1, 1))),
    Rule::new("C_{44} = C_{55}", |c, cmp| cmp.equals(c.entry(3, 3), c.entry(4, 4))),
    Rule::new("C_{13} = C_{23}", |c, cmp| cmp.equals(c.entry(0, 2), c.entry(1, 2))),
];

static TRANSVERSE_ISOTROPY: [Rule; 1] = [Rule::new(
    "C_{66} = 1/2 (C_{11} - C_{12})",
    |c, cmp| cmp.equals(c.entry(5, 5), 0.5 * (c.entry(0, 0) - c.entry(0, 1))),
)];

static TETRAGONAL_COUPLING: [Rule; 1] = [Rule::new("C_{16} = -C_{26}", |c, cmp| {
    cmp.equals(c.entry(0, 5), -c.entry(1, 5))
})];

static RHOMBOHEDRAL_COUPLING: [Rule; 1] = [Rule::new("C_{14} = -C_{24} = -C_{56}", |c, cmp| {
    cmp.all_equal(&[c.entry(0, 3), -c.entry(1, 3), -c.entry(4, 5)])
})];

static RHOMBOHEDRAL_II_COUPLING: [Rule; 1] =
    [Rule::new("-C_{15} = C_{25} = C_{46}", |c, cmp| {
        cmp.all_equal(&[-c.entry(0, 4), c.entry(1, 4), c.entry(3, 5)])
    })];

static ORTHORHOMBIC: [Rule; 4] = [
    Rule::new("C_{14} = C_{24} = C_{34} = 0", |c, cmp| {
        cmp.all_zero(&[c.entry(0, 3), c.entry(1, 3), c.entry(2, 3)])
    }),
    Rule::new("C_{15} = C_{25} = C_{35} = C_{45} = 0", |c, cmp| {
        cmp.all_zero(&[c.entry(0, 4), c.entry(1, 4), c.entry(2, 4), c.entry(3, 4)])
    }),
    Rule::new("C_{16} = C_{26} = C_{36} = C_{46} = C_{56} = 0", |c, cmp| {
        cmp.all_zero(&[
            c.entry(0, 5),
            c.entry(1, 5),
            c.entry(2, 5),
            c.entry(3, 5),
            c.entry(4, 5),
        ])
    }),
    Rule::new("9 independent C_{ij}", |c, cmp| {
        independent_constants(c, cmp) == 9
    })
    .with_independent_constants(9),
];

static MONOCLINIC: [Rule; 4] = [
    Rule::new("C_{14} = C_{24} = C_{34} = 0", |c, cmp| {
        cmp.all_zero(&[c.entry(0, 3), c.entry(1, 3), c.entry(2, 3)])
    }),
    Rule::new("C_{45} = 0", |c, cmp| cmp.is_zero(c.entry(3, 4))),
    Rule::new("C_{16} = C_{26} = C_{36} = C_{56} = 0", |c, cmp| {
        cmp.all_zero(&[c.entry(0, 5), c.entry(1, 5), c.entry(2, 5), c.entry(4, 5)])
    }),
    Rule::new("13 independent C_{ij}", |c, cmp| {
        independent_constants(c, cmp) == 13
    })
    .with_independent_constants(13),
];

static TRICLINIC: [Rule; 1] = [Rule::new("21 independent C_{ij}", |c, cmp| {
    independent_constants(c, cmp) == 21
})
.with_independent_constants(21)];

static CUBIC_SET: [&[Rule]; 1] = [&CUBIC];
static HEXAGONAL_SET: [&[Rule]; 2] = [&UNIAXIAL, &TRANSVERSE_ISOTROPY];
static TETRAGONAL_I_SET: [&[Rule]; 1] = [&UNIAXIAL];
static TETRAGONAL_II_SET: [&[Rule]; 2] = [&UNIAXIAL, &TETRAGONAL_COUPLING];
static RHOMBOHEDRAL_I_SET: [&[Rule]; 3] = [&UNIAXIAL, &TRANSVERSE_ISOTROPY, &RHOMBOHEDRAL_COUPLING];
static RHOMBOHEDRAL_II_SET: [&[Rule]; 4] = [
    &UNIAXIAL,
    &TRANSVERSE_ISOTROPY,
    &RHOMBOHEDRAL_COUPLING,
    &RHOMBOHEDRAL_II_COUPLING,
];
static ORTHORHOMBIC_SET: [&[Rule]; 1] = [&ORTHORHOMBIC];
static MONOCLINIC_SET: [&[Rule]; 1] = [&MONOCLINIC];
static TRICLINIC_SET: [&[Rule]; 1] = [&TRICLINIC];

/// Symmetry rule segments for `class`.
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::class::Criterion;
    use crate::rule::rules;

    fn holds(class: LaueClass, tensor: &StiffnessTensor, cmp: &Comparison) -> Vec<bool> {
        rules(Criterion::Symmetry, class)
            .map(|r| r.evaluate(tensor, cmp).holds)
            .collect()
    }

    fn symmetric(upper: &[(usize, usize, f64)]) -> StiffnessTensor {
        let mut c = [[0.0; 6]; 6];
        for &(i, j, v) in upper {
            c[i][j] = v;
            c[j][i] = v;
        }
        StiffnessTensor::new(c).unwrap()
    }

    #[test]
    fn cubic_detects_unequal_off_diagonal() {
        let mut entries = vec![
            (0, 0, 200.0),
            (1, 1, 200.0),
            (2, 2, 200.0),
            (3, 3, 50.0),
            (4, 4, 50.0),
            (5, 5, 50.0),
            (0, 1, 90.0),
            (0, 2, 90.0),
            (1, 2, 90.0),
        ];
        let cmp = Comparison::default();
        assert_eq!(holds(LaueClass::Cubic, &symmetric(&entries), &cmp), [true; 3]);

        entries[8] = (1, 2, 91.0);
        assert_eq!(
            holds(LaueClass::Cubic, &symmetric(&entries), &cmp),
            [true, true, false]
        );
    }

    #[test]
    fn cubic_checks_lower_triangle_too() {
        let mut c = [[0.0; 6]; 6];
        for k in 0..3 {
            c[k][k] = 200.0;
            c[k + 3][k + 3] = 50.0;
        }
        for (i, j) in [(0, 1), (0, 2), (1, 2)] {
            c[i][j] = 90.0;
            c[j][i] = 90.0;
        }
        c[2][1] = 80.0;
        let t = StiffnessTensor::new(c).unwrap();
        assert!(!holds(LaueClass::Cubic, &t, &Comparison::default())[2]);
    }

    #[test]
    fn orthorhombic_counts_nine_constants() {
        let t = symmetric(&[
            (0, 0, 1.0),
            (1, 1, 2.0),
            (2, 2, 3.0),
            (3, 3, 4.0),
            (4, 4, 5.0),
            (5, 5, 6.0),
            (0, 1, 7.0),
            (0, 2, 8.0),
            (1, 2, 9.0),
        ]);
        let cmp = Comparison::Exact;
        assert_eq!(holds(LaueClass::Orthorhombic, &t, &cmp), [true; 4]);
        assert_eq!(
            holds(LaueClass::Monoclinic, &t, &cmp),
            [true, true, true, false]
        );
    }

    #[test]
    fn monoclinic_zero_pattern() {
        let t = symmetric(&[
            (0, 0, 1.0),
            (1, 1, 2.0),
            (2, 2, 3.0),
            (3, 3, 4.0),
            (4, 4, 5.0),
            (5, 5, 6.0),
            (0, 1, 7.0),
            (0, 2, 8.0),
            (1, 2, 9.0),
            (0, 4, 10.0),
            (1, 4, 11.0),
            (2, 4, 12.0),
            (3, 5, 13.0),
        ]);
        let cmp = Comparison::default();
        assert_eq!(holds(LaueClass::Monoclinic, &t, &cmp), [true; 4]);
        assert_eq!(
            holds(LaueClass::Orthorhombic, &t, &cmp),
            [true, false, false, false]
        );
    }

    #[test]
    fn triclinic_counts_twenty_one_constants() {
        let mut entries = Vec::new();
        let mut v = 1.0;
        for i in 0..6 {
            for j in i..6 {
                entries.push((i, j, v));
                v += 1.0;
            }
        }
        let t = symmetric(&entries);
        assert_eq!(holds(LaueClass::Triclinic, &t, &Comparison::Exact), [true]);

        entries[20] = (5, 5, 1.0);
        let t = symmetric(&entries);
        assert_eq!(holds(LaueClass::Triclinic, &t, &Comparison::Exact), [false]);
    }
}
