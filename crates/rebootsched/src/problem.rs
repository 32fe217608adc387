//! Validated scheduling input: a capability profile and a rate profile of equal length.
//!
//! Purpose
//! - Reject malformed input once, at construction, so the solver can index
//!   freely and never fails on a `Problem` it was handed.
//!
//! Model
//! - `capability[t]` caps the data processed on absolute day `t`.
//! - `rate[k]` caps the data processed on the k-th day since the last reboot
//!   (or the horizon start). A day processes `min(capability[t], rate[k])`.

use std::fmt;

/// Absolute day index in the planning horizon.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Day(pub usize);

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which input profile a validation error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Series {
    Capability,
    Rate,
}

impl fmt::Display for Series {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Series::Capability => write!(f, "capability"),
            Series::Rate => write!(f, "rate"),
        }
    }
}

/// Precondition violations surfaced by `Problem::new` and the brute-force oracle.
#[derive(Clone, Debug, PartialEq)]
pub enum ProblemError {
    /// Both profiles are empty; the horizon needs at least one day.
    Empty,
    /// Profiles must have the same length.
    LengthMismatch { capability: usize, rate: usize },
    /// NaN or infinite entry.
    NonFinite { series: Series, day: usize },
    /// Negative entry.
    Negative { series: Series, day: usize },
    /// Exhaustive search was asked for a horizon it refuses to enumerate.
    TooLargeForBruteForce { days: usize, max: usize },
}

impl fmt::Display for ProblemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProblemError::Empty => write!(f, "planning horizon is empty (need at least one day)"),
            ProblemError::LengthMismatch { capability, rate } => write!(
                f,
                "capability has {} days but rate has {} (lengths must match)",
                capability, rate
            ),
            ProblemError::NonFinite { series, day } => {
                write!(f, "{} value on day {} is not finite", series, day)
            }
            ProblemError::Negative { series, day } => {
                write!(f, "{} value on day {} is negative", series, day)
            }
            ProblemError::TooLargeForBruteForce { days, max } => write!(
                f,
                "brute force over {} days refused (limit is {} days)",
                days, max
            ),
        }
    }
}

impl std::error::Error for ProblemError {}

/// Capability and rate profiles over an `n`-day horizon (`n ≥ 1`, entries finite and ≥ 0).
#[derive(Clone, Debug, PartialEq)]
pub struct Problem {
    capability: Vec<f64>,
    rate: Vec<f64>,
}

impl Problem {
    pub fn new(capability: Vec<f64>, rate: Vec<f64>) -> Result<Self, ProblemError> {
        if capability.len() != rate.len() {
            return Err(ProblemError::LengthMismatch {
                capability: capability.len(),
                rate: rate.len(),
            });
        }
        if capability.is_empty() {
            return Err(ProblemError::Empty);
        }
        check_series(Series::Capability, &capability)?;
        check_series(Series::Rate, &rate)?;
        Ok(Self { capability, rate })
    }

    /// Convenience for literals and borrowed buffers.
    pub fn from_slices(capability: &[f64], rate: &[f64]) -> Result<Self, ProblemError> {
        Self::new(capability.to_vec(), rate.to_vec())
    }

    /// Caller guarantees the invariants `new` checks (used by the sampler and literals).
    pub(crate) fn from_parts(capability: Vec<f64>, rate: Vec<f64>) -> Self {
        debug_assert!(Self::new(capability.clone(), rate.clone()).is_ok());
        Self { capability, rate }
    }

    /// Horizon length `n`.
    pub fn days(&self) -> usize {
        self.capability.len()
    }

    pub fn capability(&self) -> &[f64] {
        &self.capability
    }

    pub fn rate(&self) -> &[f64] {
        &self.rate
    }

    /// Data processed on `day` when it is the `offset`-th day since the last reboot.
    #[inline]
    pub fn processed(&self, day: usize, offset: usize) -> f64 {
        self.capability[day].min(self.rate[offset])
    }
}

fn check_series(series: Series, values: &[f64]) -> Result<(), ProblemError> {
    for (day, &v) in values.iter().enumerate() {
        if !v.is_finite() {
            return Err(ProblemError::NonFinite { series, day });
        }
        if v < 0.0 {
            return Err(ProblemError::Negative { series, day });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_equal_length_non_negative_profiles() {
        let p = Problem::from_slices(&[10.0, 1.0, 7.0], &[8.0, 4.0, 0.0]).unwrap();
        assert_eq!(p.days(), 3);
        assert_eq!(p.processed(0, 0), 8.0);
        assert_eq!(p.processed(1, 1), 1.0);
        assert_eq!(p.processed(2, 2), 0.0);
    }

    #[test]
    fn rejects_precondition_violations() {
        assert_eq!(Problem::new(vec![], vec![]), Err(ProblemError::Empty));
        assert_eq!(
            Problem::from_slices(&[1.0, 2.0], &[1.0]),
            Err(ProblemError::LengthMismatch {
                capability: 2,
                rate: 1
            })
        );
        assert_eq!(
            Problem::from_slices(&[1.0, f64::NAN], &[1.0, 1.0]),
            Err(ProblemError::NonFinite {
                series: Series::Capability,
                day: 1
            })
        );
        assert_eq!(
            Problem::from_slices(&[1.0, 1.0], &[f64::INFINITY, 1.0]),
            Err(ProblemError::NonFinite {
                series: Series::Rate,
                day: 0
            })
        );
        assert_eq!(
            Problem::from_slices(&[1.0, 1.0], &[1.0, -0.5]),
            Err(ProblemError::Negative {
                series: Series::Rate,
                day: 1
            })
        );
    }

    #[test]
    fn error_messages_name_the_offending_series() {
        let err = ProblemError::Negative {
            series: Series::Capability,
            day: 3,
        };
        assert_eq!(err.to_string(), "capability value on day 3 is negative");
    }
}
