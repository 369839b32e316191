use crate::scoring::{Classification, classify};
use serde::Serialize;

/// Before- and after-controls classifications for one hazard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MitigationOutcome {
    pub before: Classification,
    pub after: Classification,

    /// Set when residual risk is still High or Very High after controls.
    pub follow_up: bool,
}

impl MitigationOutcome {
    /// How far the score dropped once controls are applied. Negative if it rose.
    #[must_use]
    pub const fn risk_reduction(&self) -> i64 {
        self.before.score.saturating_sub(self.after.score)
    }

    /// Whether the controls moved the hazard into a lower band.
    #[must_use]
    pub fn level_improved(&self) -> bool {
        self.after.level < self.before.level
    }
}

/// Classify both scores and decide whether a corrective action is warranted.
///
/// Only the after-controls score drives the decision. The before-controls score is
/// kept for display.
#[must_use]
pub const fn assess_mitigation(before_score: i64, after_score: i64) -> MitigationOutcome {
    let before = classify(before_score);
    let after = classify(after_score);

    MitigationOutcome {
        before,
        after,
        follow_up: after.level.requires_follow_up(),
    }
}

#[must_use]
pub const fn needs_follow_up(before_score: i64, after_score: i64) -> bool {
    assess_mitigation(before_score, after_score).follow_up
}
