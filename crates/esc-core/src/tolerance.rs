//! # Tolerance and Comparison Mode
//!
//! Every equality, zero test and distinct-value count in the criteria
//! engines goes through one [`Comparison`] value. It is either [`Exact`]
//! (IEEE `==`) or [`Tolerant`] with a single [`Tolerance`] ε, so the choice
//! between the two is an explicit configuration flag rather than a
//! per-rule accident.
//!
//! NaN never compares equal and is never zero, in either mode. A condition
//! computed from degenerate input therefore fails instead of passing.
//!
//! [`Exact`]: Comparison::Exact
//! [`Tolerant`]: Comparison::Tolerant

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::InvalidToleranceError;

/// Absolute tolerance ε for equality comparisons.
///
/// Stored as a non-negative finite magnitude.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Tolerance(f64);

impl Tolerance {
    /// Default tolerance, `1e-8`.
    pub const DEFAULT: Tolerance = Tolerance(1e-8);

    /// Validate and wrap a tolerance.
    ///
    /// NaN and infinities are rejected. A negative value is stored by
    /// magnitude. A magnitude above 1 is accepted but logged as a warning,
    /// since a tolerance that coarse makes comparisons physically
    /// meaningless for stiffness constants in GPa.
    pub fn new(value: f64) -> Result<Self, InvalidToleranceError> {
        if value.is_nan() {
            return Err(InvalidToleranceError::NotANumber);
        }
        if value.is_infinite() {
            return Err(InvalidToleranceError::Infinite(value));
        }
        let tolerance = Tolerance(value.abs());
        if tolerance.exceeds_unity() {
            tracing::warn!(
                tolerance = tolerance.0,
                "tolerance magnitude exceeds 1; equality checks are physically meaningless"
            );
        }
        Ok(tolerance)
    }

    /// The tolerance magnitude.
    pub fn value(self) -> f64 {
        self.0
    }

    /// Whether `|ε| > 1`.
    pub fn exceeds_unity(self) -> bool {
        self.0 > 1.0
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<f64> for Tolerance {
    type Error = InvalidToleranceError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl<'de> Deserialize<'de> for Tolerance {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = f64::deserialize(deserializer)?;
        Self::new(raw).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Tolerance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:e}", self.0)
    }
}

/// How equalities are decided.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "tolerance", rename_all = "snake_case")]
pub enum Comparison {
    /// Bitwise IEEE equality.
    Exact,
    /// `|a - b| <= ε`.
    Tolerant(Tolerance),
}

impl Comparison {
    /// Tolerant mode, validating `value` as a [`Tolerance`].
    pub fn tolerant(value: f64) -> Result<Self, InvalidToleranceError> {
        Tolerance::new(value).map(Self::Tolerant)
    }

    /// The active tolerance, or `None` in exact mode.
    pub fn tolerance(&self) -> Option<Tolerance> {
        match self {
            Self::Exact => None,
            Self::Tolerant(t) => Some(*t),
        }
    }

    /// Whether `a` and `b` are equal under this mode.
    pub fn equals(&self, a: f64, b: f64) -> bool {
        match self {
            Self::Exact => a == b,
            Self::Tolerant(t) => (a - b).abs() <= t.value(),
        }
    }

    /// Whether `a` is zero under this mode.
    pub fn is_zero(&self, a: f64) -> bool {
        self.equals(a, 0.0)
    }

    /// Whether every value lies within one tolerance band (`max - min <= ε`).
    ///
    /// An empty slice is vacuously equal. Any NaN makes the result false.
    pub fn all_equal(&self, values: &[f64]) -> bool {
        if values.iter().any(|v| v.is_nan()) {
            return false;
        }
        let (min, max) = values
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            });
        values.is_empty() || self.equals(max, min)
    }

    /// Whether every value is zero under this mode.
    pub fn all_zero(&self, values: &[f64]) -> bool {
        values.iter().all(|&v| self.is_zero(v))
    }

    /// Count distinct nonzero values.
    ///
    /// Values are sorted and split wherever the gap to the previous value
    /// exceeds ε, so a run of values chained within ε counts once. NaN
    /// entries are skipped.
    pub fn distinct_nonzero(&self, values: impl IntoIterator<Item = f64>) -> usize {
        let mut nonzero: Vec<f64> = values
            .into_iter()
            .filter(|v| !v.is_nan() && !self.is_zero(*v))
            .collect();
        nonzero.sort_by(f64::total_cmp);
        nonzero
            .windows(2)
            .filter(|pair| !self.equals(pair[0], pair[1]))
            .count()
            + usize::from(!nonzero.is_empty())
    }
}

impl Default for Comparison {
    fn default() -> Self {
        Self::Tolerant(Tolerance::DEFAULT)
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact => f.write_str("exact"),
            Self::Tolerant(t) => write!(f, "tolerant (ε = {t})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tolerance_is_1e_minus_8() {
        assert_eq!(Tolerance::default().value(), 1e-8);
        assert_eq!(
            Comparison::default(),
            Comparison::Tolerant(Tolerance::DEFAULT)
        );
    }

    #[test]
    fn nan_tolerance_rejected() {
        assert_eq!(
            Tolerance::new(f64::NAN),
            Err(InvalidToleranceError::NotANumber)
        );
    }

    #[test]
    fn infinite_tolerance_rejected() {
        assert!(matches!(
            Tolerance::new(f64::NEG_INFINITY),
            Err(InvalidToleranceError::Infinite(_))
        ));
    }

    #[test]
    fn negative_tolerance_stored_by_magnitude() {
        assert_eq!(Tolerance::new(-1e-3).unwrap().value(), 1e-3);
    }

    #[test]
    fn coarse_tolerance_is_accepted_with_flag() {
        let t = Tolerance::new(2.5).unwrap();
        assert!(t.exceeds_unity());
        assert!(!Tolerance::new(1.0).unwrap().exceeds_unity());
    }

    #[derive(Clone, Default)]
    struct Captured(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

    impl std::io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn logged_by(value: f64) -> String {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();
        tracing::subscriber::with_default(subscriber, || {
            Tolerance::new(value).unwrap();
        });
        let bytes = captured.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn coarse_tolerance_logs_a_warning() {
        let out = logged_by(2.5);
        assert!(out.contains("WARN"), "{out}");
        assert_eq!(out.matches("tolerance magnitude exceeds 1").count(), 1, "{out}");
        assert!(out.contains("tolerance=2.5"), "{out}");

        assert!(logged_by(-3.0).contains("tolerance magnitude exceeds 1"));
        assert!(logged_by(0.5).is_empty());
        assert!(logged_by(1.0).is_empty());
    }

    #[test]
    fn exact_mode_uses_ieee_equality() {
        let c = Comparison::Exact;
        assert!(c.equals(1.0, 1.0));
        assert!(!c.equals(1.0, 1.0 + 1e-12));
        assert!(c.is_zero(-0.0));
    }

    #[test]
    fn tolerant_mode_accepts_within_band() {
        let c = Comparison::tolerant(1e-6).unwrap();
        assert!(c.equals(1.0, 1.0 + 5e-7));
        assert!(!c.equals(1.0, 1.0 + 5e-6));
        assert!(c.is_zero(-1e-7));
    }

    #[test]
    fn nan_never_equal() {
        for c in [Comparison::Exact, Comparison::default()] {
            assert!(!c.equals(f64::NAN, f64::NAN));
            assert!(!c.is_zero(f64::NAN));
            assert!(!c.all_equal(&[1.0, f64::NAN]));
        }
    }

    #[test]
    fn all_equal_uses_full_spread() {
        let c = Comparison::tolerant(1e-3).unwrap();
        assert!(c.all_equal(&[1.0, 1.0005, 1.0009]));
        assert!(!c.all_equal(&[1.0, 1.0008, 1.0016]));
        assert!(c.all_equal(&[]));
    }

    #[test]
    fn distinct_nonzero_skips_zeros() {
        let c = Comparison::Exact;
        assert_eq!(c.distinct_nonzero([0.0, 1.0, 2.0, 2.0, 0.0, -1.0]), 3);
        assert_eq!(c.distinct_nonzero([0.0, 0.0]), 0);
        assert_eq!(c.distinct_nonzero(std::iter::empty()), 0);
    }

    #[test]
    fn distinct_nonzero_merges_within_tolerance() {
        let c = Comparison::tolerant(1e-6).unwrap();
        assert_eq!(c.distinct_nonzero([5.0, 5.0 + 1e-9, 7.0, 1e-9]), 2);
        assert_eq!(Comparison::Exact.distinct_nonzero([5.0, 5.0 + 1e-9, 7.0]), 3);
    }

    #[test]
    fn comparison_serde_shape() {
        let json = serde_json::to_string(&Comparison::Exact).unwrap();
        assert_eq!(json, r#"{"mode":"exact"}"#);
        let parsed: Comparison =
            serde_json::from_str(r#"{"mode":"tolerant","tolerance":0.001}"#).unwrap();
        assert_eq!(parsed, Comparison::tolerant(1e-3).unwrap());
    }

    #[test]
    fn tolerance_deserialize_rejects_nan_like_input() {
        assert!(serde_json::from_str::<Tolerance>("\"abc\"").is_err());
        assert_eq!(serde_json::from_str::<Tolerance>("-0.5").unwrap().value(), 0.5);
    }
}
