//! # Crystal Systems and Laue Class Slots
//!
//! [`CrystalSystem`] is what a caller selects: one of the seven systems.
//! [`LaueClass`] is the rule-set slot actually evaluated: the seven systems
//! plus the I/II splits of Tetragonal and Rhombohedral. The split is decided
//! by [`CrystalSystem::resolve`] against the tensor being evaluated, every
//! time conditions are requested, so there is no cached selection to go
//! stale.
//!
//! The remaining Laue classes share the elastic pattern of their parent
//! system and need no slot of their own.
//!
//! | System | Selector | Slot when zero | Slot otherwise |
//! |---|---|---|---|
//! | Tetragonal | `C_{16}` (`C[0,5]`) | `TetragonalI` | `TetragonalII` |
//! | Rhombohedral | `C_{15}` (`C[0,4]`) | `RhombohedralI` | `RhombohedralII` |

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use esc_core::{Comparison, EscError, StiffnessTensor};

/// Which family of conditions is evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Criterion {
    /// Algebraic symmetry pattern: equalities and forced zeros.
    Symmetry,
    /// Born mechanical stability: positive-definiteness inequalities.
    Stability,
}

impl Criterion {
    /// Returns the snake_case identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Symmetry => "symmetry",
            Self::Stability => "stability",
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The seven crystal systems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CrystalSystem {
    /// Three independent constants.
    Cubic,
    /// Five independent constants.
    Hexagonal,
    /// Six (I) or seven (II) independent constants.
    Tetragonal,
    /// Six (I) or seven (II) independent constants.
    Rhombohedral,
    /// Nine independent constants.
    Orthorhombic,
    /// Thirteen independent constants.
    Monoclinic,
    /// Twenty-one independent constants.
    Triclinic,
}

impl CrystalSystem {
    /// All seven systems, from highest to lowest symmetry.
    pub fn all() -> &'static [CrystalSystem] {
        &[
            Self::Cubic,
            Self::Hexagonal,
            Self::Tetragonal,
            Self::Rhombohedral,
            Self::Orthorhombic,
            Self::Monoclinic,
            Self::Triclinic,
        ]
    }

    /// Returns the snake_case identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cubic => "cubic",
            Self::Hexagonal => "hexagonal",
            Self::Tetragonal => "tetragonal",
            Self::Rhombohedral => "rhombohedral",
            Self::Orthorhombic => "orthorhombic",
            Self::Monoclinic => "monoclinic",
            Self::Triclinic => "triclinic",
        }
    }

    /// Pick the rule-set slot for `tensor`.
    ///
    /// Only Tetragonal and Rhombohedral have sub-variants; the selector
    /// entry is tested for zero with `comparison`.
    pub fn resolve(&self, tensor: &StiffnessTensor, comparison: &Comparison) -> LaueClass {
        let (selector, variant_i, variant_ii) = match self {
            Self::Cubic => return LaueClass::Cubic,
            Self::Hexagonal => return LaueClass::Hexagonal,
            Self::Orthorhombic => return LaueClass::Orthorhombic,
            Self::Monoclinic => return LaueClass::Monoclinic,
            Self::Triclinic => return LaueClass::Triclinic,
            Self::Tetragonal => (
                tensor.entry(0, 5),
                LaueClass::TetragonalI,
                LaueClass::TetragonalII,
            ),
            Self::Rhombohedral => (
                tensor.entry(0, 4),
                LaueClass::RhombohedralI,
                LaueClass::RhombohedralII,
            ),
        };
        let class = if comparison.is_zero(selector) {
            variant_i
        } else {
            variant_ii
        };
        tracing::debug!(system = %self, selector, class = %class, "resolved sub-variant");
        class
    }
}

impl fmt::Display for CrystalSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CrystalSystem {
    type Err = EscError;

    /// Parse a system name, case-insensitively. `trigonal` is accepted as
    /// an alias for `rhombohedral`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cubic" => Ok(Self::Cubic),
            "hexagonal" => Ok(Self::Hexagonal),
            "tetragonal" => Ok(Self::Tetragonal),
            "rhombohedral" | "trigonal" => Ok(Self::Rhombohedral),
            "orthorhombic" => Ok(Self::Orthorhombic),
            "monoclinic" => Ok(Self::Monoclinic),
            "triclinic" => Ok(Self::Triclinic),
            _ => Err(EscError::UnknownCrystalSystem(s.to_string())),
        }
    }
}

/// A rule-set slot: a crystal system, split into I/II where the system has
/// two elastic patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LaueClass {
    /// Cubic (m-3m, m-3).
    Cubic,
    /// Hexagonal (6/mmm, 6/m).
    Hexagonal,
    /// Tetragonal I (4/mmm), `C_{16} = 0`.
    #[serde(rename = "tetragonal_i")]
    TetragonalI,
    /// Tetragonal II (4/m), `C_{16} ≠ 0`.
    #[serde(rename = "tetragonal_ii")]
    TetragonalII,
    /// Rhombohedral I (-3m), `C_{15} = 0`.
    #[serde(rename = "rhombohedral_i")]
    RhombohedralI,
    /// Rhombohedral II (-3), `C_{15} ≠ 0`.
    #[serde(rename = "rhombohedral_ii")]
    RhombohedralII,
    /// Orthorhombic (mmm).
    Orthorhombic,
    /// Monoclinic (2/m).
    Monoclinic,
    /// Triclinic (-1).
    Triclinic,
}

impl LaueClass {
    /// All nine slots in canonical order.
    pub fn all() -> &'static [LaueClass] {
        &[
            Self::Cubic,
            Self::Hexagonal,
            Self::TetragonalI,
            Self::TetragonalII,
            Self::RhombohedralI,
            Self::RhombohedralII,
            Self::Orthorhombic,
            Self::Monoclinic,
            Self::Triclinic,
        ]
    }

    /// The crystal system this slot belongs to.
    pub fn system(&self) -> CrystalSystem {
        match self {
            Self::Cubic => CrystalSystem::Cubic,
            Self::Hexagonal => CrystalSystem::Hexagonal,
            Self::TetragonalI | Self::TetragonalII => CrystalSystem::Tetragonal,
            Self::RhombohedralI | Self::RhombohedralII => CrystalSystem::Rhombohedral,
            Self::Orthorhombic => CrystalSystem::Orthorhombic,
            Self::Monoclinic => CrystalSystem::Monoclinic,
            Self::Triclinic => CrystalSystem::Triclinic,
        }
    }

    /// Returns the snake_case identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cubic => "cubic",
            Self::Hexagonal => "hexagonal",
            Self::TetragonalI => "tetragonal_i",
            Self::TetragonalII => "tetragonal_ii",
            Self::RhombohedralI => "rhombohedral_i",
            Self::RhombohedralII => "rhombohedral_ii",
            Self::Orthorhombic => "orthorhombic",
            Self::Monoclinic => "monoclinic",
            Self::Triclinic => "triclinic",
        }
    }
}

impl fmt::Display for LaueClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_entry(i: usize, j: usize, value: f64) -> StiffnessTensor {
        let mut c = [[0.0; 6]; 6];
        for (k, row) in c.iter_mut().enumerate() {
            row[k] = 100.0;
        }
        c[i][j] = value;
        c[j][i] = value;
        StiffnessTensor::new(c).unwrap()
    }

    #[test]
    fn tetragonal_selector_reads_c16() {
        let cmp = Comparison::default();
        assert_eq!(
            CrystalSystem::Tetragonal.resolve(&with_entry(0, 5, 0.0), &cmp),
            LaueClass::TetragonalI
        );
        assert_eq!(
            CrystalSystem::Tetragonal.resolve(&with_entry(0, 5, 7.5), &cmp),
            LaueClass::TetragonalII
        );
    }

    #[test]
    fn rhombohedral_selector_reads_c15() {
        let cmp = Comparison::Exact;
        assert_eq!(
            CrystalSystem::Rhombohedral.resolve(&with_entry(0, 4, 0.0), &cmp),
            LaueClass::RhombohedralI
        );
        assert_eq!(
            CrystalSystem::Rhombohedral.resolve(&with_entry(0, 4, -1e-12), &cmp),
            LaueClass::RhombohedralII
        );
    }

    #[test]
    fn tolerant_selector_treats_tiny_entry_as_zero() {
        let cmp = Comparison::default();
        assert_eq!(
            CrystalSystem::Rhombohedral.resolve(&with_entry(0, 4, 1e-12), &cmp),
            LaueClass::RhombohedralI
        );
    }

    #[test]
    fn every_slot_maps_back_to_its_system() {
        for system in CrystalSystem::all() {
            let tensor = with_entry(0, 1, 1.0);
            let class = system.resolve(&tensor, &Comparison::default());
            assert_eq!(class.system(), *system);
        }
        assert_eq!(LaueClass::all().len(), 9);
    }

    #[test]
    fn from_str_accepts_names_and_alias() {
        for system in CrystalSystem::all() {
            assert_eq!(system.as_str().parse::<CrystalSystem>().unwrap(), *system);
        }
        assert_eq!(
            "Trigonal".parse::<CrystalSystem>().unwrap(),
            CrystalSystem::Rhombohedral
        );
        assert!(matches!(
            "quasicrystal".parse::<CrystalSystem>(),
            Err(EscError::UnknownCrystalSystem(_))
        ));
    }

    #[test]
    fn serde_matches_as_str() {
        for class in LaueClass::all() {
            let json = serde_json::to_string(class).unwrap();
            assert_eq!(json, format!("\"{}\"", class.as_str()));
        }
        assert_eq!(
            serde_json::to_string(&Criterion::Stability).unwrap(),
            "\"stability\""
        );
    }

    #[test]
    fn sub_variant_names_round_trip() {
        assert_eq!(
            serde_json::to_string(&LaueClass::TetragonalII).unwrap(),
            "\"tetragonal_ii\""
        );
        assert_eq!(
            serde_json::to_string(&LaueClass::RhombohedralII).unwrap(),
            "\"rhombohedral_ii\""
        );
        for class in LaueClass::all() {
            let parsed: LaueClass =
                serde_json::from_str(&format!("\"{}\"", class.as_str())).unwrap();
            assert_eq!(parsed, *class);
        }
        assert!(serde_json::from_str::<LaueClass>("\"tetragonal_i_i\"").is_err());
    }
}
