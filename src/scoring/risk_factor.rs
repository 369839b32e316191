use crate::scoring::{Classification, classify, score};
use anyhow::{Result, bail};
use core::fmt::{Display, Formatter, Result as FmtResult};
use serde::Serialize;

/// Lowest valid likelihood or severity rating.
pub const MIN_RATING: i64 = 1;

/// Highest valid likelihood or severity rating.
pub const MAX_RATING: i64 = 5;

/// One hazard's likelihood and severity at a point in time.
///
/// Only the two ratings are held. The score and level are recomputed on every call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct RiskFactor {
    likelihood: u8,
    severity: u8,
}

impl RiskFactor {
    /// Create a risk factor, rejecting ratings outside `1..=5`.
    pub fn new(likelihood: i64, severity: i64) -> Result<Self> {
        Ok(Self {
            likelihood: check_rating("likelihood", likelihood)?,
            severity: check_rating("severity", severity)?,
        })
    }

    #[must_use]
    pub const fn likelihood(&self) -> u8 {
        self.likelihood
    }

    #[must_use]
    pub const fn severity(&self) -> u8 {
        self.severity
    }

    #[must_use]
    pub fn score(&self) -> i64 {
        score(i64::from(self.likelihood), i64::from(self.severity))
    }

    #[must_use]
    pub fn classification(&self) -> Classification {
        classify(self.score())
    }
}

fn check_rating(name: &str, value: i64) -> Result<u8> {
    if !(MIN_RATING..=MAX_RATING).contains(&value) {
        bail!("{name} must be between {MIN_RATING} and {MAX_RATING}, got {value}");
    }

    // in range, so the conversion cannot fail
    Ok(u8::try_from(value)?)
}

impl Display for RiskFactor {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "L{} x S{}", self.likelihood, self.severity)
    }
}
