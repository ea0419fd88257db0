//! Gain primitives for PCM adjustment
//!
//! A gain can be specified either as a linear factor or in decibels. Both
//! forms are kept side by side in [`Gain`] so callers can record and compare
//! them without converting back and forth.
//!
//! # Examples
//!
//! ```
//! use pcm_primitives::{Gain, GainSpec};
//!
//! let gain = Gain::try_from(GainSpec::Db(-6.0))?;
//! assert!((gain.factor() - 0.5012).abs() < 1e-4);
//!
//! let unity = Gain::from_factor(1.0)?;
//! assert_eq!(unity.db(), 0.0);
//! # Ok::<(), pcm_primitives::GainError>(())
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Two gains are considered equal when both representations differ by less
/// than this.
pub const GAIN_TOLERANCE: f64 = 1e-6;

#[derive(Debug, Error, PartialEq)]
pub enum GainError {
    #[error("Gain factor must be finite, got {0}")]
    NonFiniteFactor(f64),

    #[error("Gain of {0} dB does not map to a finite factor")]
    UnusableDb(f64),
}

/// Convert decibels to a linear factor. `-inf` dB is silence.
pub fn db_to_factor(db: f64) -> f64 {
    10f64.powf(db / 20.0)
}

/// Convert a linear factor to decibels.
///
/// Factors at or below zero have no logarithm and map to `-inf`.
pub fn factor_to_db(factor: f64) -> f64 {
    if factor > 0.0 {
        20.0 * factor.log10()
    } else {
        f64::NEG_INFINITY
    }
}

/// Compare two values within [`GAIN_TOLERANCE`], treating equal infinities as equal.
pub fn approx_eq(a: f64, b: f64) -> bool {
    a == b || (a - b).abs() < GAIN_TOLERANCE
}

/// How a gain was requested
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GainSpec {
    Factor(f64),
    Db(f64),
}

/// A validated gain, carrying both its linear and its decibel form
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gain {
    factor: f64,
    db: f64,
}

impl Gain {
    pub const UNITY: Self = Self {
        factor: 1.0,
        db: 0.0,
    };

    /// Create from a linear factor. Zero and negative factors are legal.
    pub fn from_factor(factor: f64) -> Result<Self, GainError> {
        if !factor.is_finite() {
            return Err(GainError::NonFiniteFactor(factor));
        }
        Ok(Self {
            factor,
            db: factor_to_db(factor),
        })
    }

    /// Create from decibels. `-inf` is accepted and yields a factor of zero.
    pub fn from_db(db: f64) -> Result<Self, GainError> {
        if db.is_nan() {
            return Err(GainError::UnusableDb(db));
        }
        let factor = db_to_factor(db);
        if !factor.is_finite() {
            return Err(GainError::UnusableDb(db));
        }
        Ok(Self { factor, db })
    }

    pub fn factor(&self) -> f64 {
        self.factor
    }

    pub fn db(&self) -> f64 {
        self.db
    }

    /// True if both representations match the given pair within tolerance
    pub fn matches(&self, factor: f64, db: f64) -> bool {
        approx_eq(self.factor, factor) && approx_eq(self.db, db)
    }
}

impl TryFrom<GainSpec> for Gain {
    type Error = GainError;

    fn try_from(spec: GainSpec) -> Result<Self, Self::Error> {
        match spec {
            GainSpec::Factor(factor) => Gain::from_factor(factor),
            GainSpec::Db(db) => Gain::from_db(db),
        }
    }
}

impl fmt::Display for Gain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "factor {:.3}, {:+.2} dB", self.factor, self.db)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use rstest::rstest;

    mod conversion_tests {
        use super::*;

        #[rstest]
        #[case(0.0)]
        #[case(-3.0)]
        #[case(-6.0)]
        #[case(6.0)]
        #[case(-96.0)]
        #[case(12.5)]
        fn db_survives_round_trip(#[case] db: f64) {
            let back = factor_to_db(db_to_factor(db));
            assert!(
                (back - db).abs() < 1e-6,
                "{} dB came back as {} dB",
                db,
                back
            );
        }

        #[test]
        fn negative_infinity_db_is_silence() {
            assert_eq!(db_to_factor(f64::NEG_INFINITY), 0.0);
        }

        #[rstest]
        #[case(0.0)]
        #[case(-1.0)]
        #[case(-0.5)]
        fn non_positive_factor_has_no_db(#[case] factor: f64) {
            assert_eq!(factor_to_db(factor), f64::NEG_INFINITY);
        }

        #[test]
        fn minus_six_db_is_about_half() {
            let factor = db_to_factor(-6.0);
            assert!((factor - 0.501_187).abs() < 1e-6);
        }

        #[test]
        fn infinities_compare_equal() {
            assert!(approx_eq(f64::NEG_INFINITY, f64::NEG_INFINITY));
            assert!(!approx_eq(f64::NEG_INFINITY, -120.0));
            assert!(approx_eq(0.8, 0.8 + 1e-9));
            assert!(!approx_eq(0.8, 0.8001));
        }
    }

    mod gain_tests {
        use super::*;

        #[test]
        fn factor_derives_db() {
            let gain = Gain::from_factor(0.1).unwrap();
            assert!((gain.db() - -20.0).abs() < 1e-9);
        }

        #[test]
        fn zero_factor_is_legal() {
            let gain = Gain::from_factor(0.0).unwrap();
            assert_eq!(gain.db(), f64::NEG_INFINITY);
        }

        #[test]
        fn negative_factor_is_legal() {
            let gain = Gain::from_factor(-1.0).unwrap();
            assert_eq!(gain.factor(), -1.0);
            assert_eq!(gain.db(), f64::NEG_INFINITY);
        }

        #[test]
        fn rejects_non_finite_factor() {
            assert_matches!(
                Gain::from_factor(f64::INFINITY),
                Err(GainError::NonFiniteFactor(_))
            );
            assert_matches!(
                Gain::from_factor(f64::NAN),
                Err(GainError::NonFiniteFactor(_))
            );
        }

        #[rstest]
        #[case(f64::NAN)]
        #[case(f64::INFINITY)]
        #[case(10_000.0)]
        fn rejects_unusable_db(#[case] db: f64) {
            assert_matches!(Gain::from_db(db), Err(GainError::UnusableDb(_)));
        }

        #[test]
        fn silent_db_gives_zero_factor() {
            let gain = Gain::from_db(f64::NEG_INFINITY).unwrap();
            assert_eq!(gain.factor(), 0.0);
        }

        #[test]
        fn spec_resolves_both_ways() {
            let by_db = Gain::try_from(GainSpec::Db(-3.0)).unwrap();
            let by_factor = Gain::try_from(GainSpec::Factor(by_db.factor())).unwrap();
            assert!(by_factor.matches(by_db.factor(), by_db.db()));
        }

        #[test]
        fn matches_silence_against_silence() {
            let gain = Gain::from_factor(0.0).unwrap();
            assert!(gain.matches(0.0, f64::NEG_INFINITY));
        }

        #[test]
        fn display_shows_both_forms() {
            let gain = Gain::from_factor(1.0).unwrap();
            assert_eq!(gain.to_string(), "factor 1.000, +0.00 dB");
            assert_eq!(Gain::UNITY, gain);
        }

        #[test]
        fn spec_serialization() {
            let json = serde_json::to_string(&GainSpec::Db(-3.0)).unwrap();
            assert_eq!(json, r#"{"db":-3.0}"#);
            let decoded: GainSpec = serde_json::from_str(&json).unwrap();
            assert_eq!(decoded, GainSpec::Db(-3.0));
        }
    }
}
