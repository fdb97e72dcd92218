//! # Stiffness and Compliance Tensors
//!
//! [`StiffnessTensor`] holds a validated 6×6 Voigt stiffness matrix `C`
//! with Voigt index pairs (11, 22, 33, 23, 13, 12) mapped to rows and
//! columns 0..6. It is immutable after construction. The compliance tensor
//! `S = C⁻¹` is computed on demand and never cached.
//!
//! Symmetry of `C` itself (`C[i,j] == C[j,i]`) is a physical convention, not
//! an invariant of the container. Asymmetric input is accepted and each
//! criterion reads only the entries it names.
//!
//! ## Accepted forms
//!
//! - `[[f64; 6]; 6]` via [`StiffnessTensor::new`].
//! - Any slice of rows via [`StiffnessTensor::from_rows`].
//! - 36 row-major values via [`StiffnessTensor::from_flat`].
//! - Plain text via [`FromStr`]: six rows of six whitespace-separated
//!   numbers, `#` comments and blank lines ignored.
//! - Serde: a nested array, validated through `from_rows`.

use std::fmt;
use std::str::FromStr;

use nalgebra::SMatrix;
use serde::{Deserialize, Serialize};

use crate::error::{ShapeError, SingularMatrixError};
use crate::tolerance::Comparison;

/// Voigt dimension.
pub const VOIGT_DIM: usize = 6;

type Matrix6 = SMatrix<f64, VOIGT_DIM, VOIGT_DIM>;

/// A validated 6×6 elastic stiffness tensor in Voigt notation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<f64>>", into = "[[f64; 6]; 6]")]
pub struct StiffnessTensor {
    matrix: Matrix6,
}

impl StiffnessTensor {
    /// Build from a fixed 6×6 array. Fails only on non-finite entries.
    pub fn new(values: [[f64; VOIGT_DIM]; VOIGT_DIM]) -> Result<Self, ShapeError> {
        for (row, line) in values.iter().enumerate() {
            for (col, &value) in line.iter().enumerate() {
                if !value.is_finite() {
                    return Err(ShapeError::NonFinite { row, col, value });
                }
            }
        }
        Ok(Self {
            matrix: Matrix6::from_fn(|i, j| values[i][j]),
        })
    }

    /// Build from a slice of rows, checking shape and finiteness.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self, ShapeError> {
        if rows.len() != VOIGT_DIM {
            return Err(ShapeError::RowCount { found: rows.len() });
        }
        let mut values = [[0.0; VOIGT_DIM]; VOIGT_DIM];
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != VOIGT_DIM {
                return Err(ShapeError::RowLength {
                    row: i,
                    found: row.len(),
                });
            }
            values[i].copy_from_slice(row);
        }
        Self::new(values)
    }

    /// Build from 36 values in row-major order.
    pub fn from_flat(values: &[f64]) -> Result<Self, ShapeError> {
        if values.len() != VOIGT_DIM * VOIGT_DIM {
            return Err(ShapeError::FlatLength {
                found: values.len(),
            });
        }
        let rows: Vec<&[f64]> = values.chunks(VOIGT_DIM).collect();
        Self::from_rows(&rows)
    }

    /// Entry `C[i, j]` with zero-based indices.
    ///
    /// # Panics
    ///
    /// Panics if `i` or `j` is not below 6, like slice indexing.
    pub fn entry(&self, i: usize, j: usize) -> f64 {
        self.matrix[(i, j)]
    }

    /// Entry `C[i, j]`, or `None` when out of range.
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        (i < VOIGT_DIM && j < VOIGT_DIM).then(|| self.matrix[(i, j)])
    }

    /// The six diagonal entries `C[k, k]`.
    pub fn diagonal(&self) -> [f64; VOIGT_DIM] {
        std::array::from_fn(|k| self.matrix[(k, k)])
    }

    /// All 36 entries as nested rows.
    pub fn rows(&self) -> [[f64; VOIGT_DIM]; VOIGT_DIM] {
        std::array::from_fn(|i| std::array::from_fn(|j| self.matrix[(i, j)]))
    }

    /// Iterate over all 36 entries in row-major order.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        (0..VOIGT_DIM).flat_map(move |i| (0..VOIGT_DIM).map(move |j| self.matrix[(i, j)]))
    }

    /// Whether `C[i, j] == C[j, i]` for every pair under `comparison`.
    ///
    /// Informational only; no criterion requires it.
    pub fn is_symmetric(&self, comparison: &Comparison) -> bool {
        (0..VOIGT_DIM).all(|i| {
            (i + 1..VOIGT_DIM).all(|j| comparison.equals(self.matrix[(i, j)], self.matrix[(j, i)]))
        })
    }

    /// The compliance tensor `S = C⁻¹`.
    ///
    /// Fails with [`SingularMatrixError`] if `C` is not invertible or if the
    /// inverse overflows; infinities are never returned.
    pub fn compliance(&self) -> Result<ComplianceTensor, SingularMatrixError> {
        let inverse = self.matrix.try_inverse().ok_or(SingularMatrixError)?;
        if inverse.iter().all(|v| v.is_finite()) {
            Ok(ComplianceTensor { matrix: inverse })
        } else {
            Err(SingularMatrixError)
        }
    }
}

impl TryFrom<Vec<Vec<f64>>> for StiffnessTensor {
    type Error = ShapeError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self, Self::Error> {
        Self::from_rows(&rows)
    }
}

impl From<StiffnessTensor> for [[f64; VOIGT_DIM]; VOIGT_DIM] {
    fn from(tensor: StiffnessTensor) -> Self {
        tensor.rows()
    }
}

impl FromStr for StiffnessTensor {
    type Err = ShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut rows = Vec::with_capacity(VOIGT_DIM);
        for (index, raw) in s.lines().enumerate() {
            let line = raw.split('#').next().unwrap_or_default().trim();
            if line.is_empty() {
                continue;
            }
            let row = line
                .split(|c: char| c.is_whitespace() || c == ',')
                .filter(|token| !token.is_empty())
                .map(|token| {
                    token.parse::<f64>().map_err(|_| ShapeError::Parse {
                        line: index + 1,
                        token: token.to_string(),
                    })
                })
                .collect::<Result<Vec<f64>, _>>()?;
            rows.push(row);
        }
        Self::from_rows(&rows)
    }
}

impl fmt::Display for StiffnessTensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_grid(f, &self.matrix)
    }
}

/// The compliance tensor `S = C⁻¹`, derived from a [`StiffnessTensor`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(into = "[[f64; 6]; 6]")]
pub struct ComplianceTensor {
    matrix: Matrix6,
}

impl ComplianceTensor {
    /// Entry `S[i, j]` with zero-based indices.
    ///
    /// # Panics
    ///
    /// Panics if `i` or `j` is not below 6.
    pub fn entry(&self, i: usize, j: usize) -> f64 {
        self.matrix[(i, j)]
    }

    /// All 36 entries as nested rows.
    pub fn rows(&self) -> [[f64; VOIGT_DIM]; VOIGT_DIM] {
        std::array::from_fn(|i| std::array::from_fn(|j| self.matrix[(i, j)]))
    }
}

impl From<ComplianceTensor> for [[f64; VOIGT_DIM]; VOIGT_DIM] {
    fn from(tensor: ComplianceTensor) -> Self {
        tensor.rows()
    }
}

impl fmt::Display for ComplianceTensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_grid(f, &self.matrix)
    }
}

fn write_grid(f: &mut fmt::Formatter<'_>, matrix: &Matrix6) -> fmt::Result {
    for i in 0..VOIGT_DIM {
        for j in 0..VOIGT_DIM {
            if j > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{:>14.6e}", matrix[(i, j)])?;
        }
        writeln!(f)?;
    }
    Ok(())
}
