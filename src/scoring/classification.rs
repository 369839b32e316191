use crate::scoring::{RiskColor, RiskLevel};
use core::fmt::{Display, Formatter, Result as FmtResult};
use serde::Serialize;

/// Highest score in each band. Bounds are inclusive.
const LOW_MAX: i64 = 4;
const MEDIUM_MAX: i64 = 9;
const HIGH_MAX: i64 = 16;

/// Multiply a likelihood rating by a severity rating.
///
/// Inputs are not validated; callers constrain them to `1..=5` first. The product
/// saturates at the `i64` bounds so the function is total.
#[must_use]
pub const fn score(likelihood: i64, severity: i64) -> i64 {
    likelihood.saturating_mul(severity)
}

/// Map a score onto its risk band.
///
/// Anything at or below 4 is [`RiskLevel::Low`], including zero and negative scores.
/// Anything above 16 is [`RiskLevel::VeryHigh`], including scores past 25.
#[must_use]
pub const fn classify(score: i64) -> Classification {
    let level = if score <= LOW_MAX {
        RiskLevel::Low
    } else if score <= MEDIUM_MAX {
        RiskLevel::Medium
    } else if score <= HIGH_MAX {
        RiskLevel::High
    } else {
        RiskLevel::VeryHigh
    };

    Classification {
        score,
        level,
        color: level.color(),
    }
}

/// A score together with the band and color it maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Classification {
    pub score: i64,
    pub level: RiskLevel,
    pub color: RiskColor,
}

impl Display for Classification {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "Risk: {} ({})", self.score, self.level)
    }
}
