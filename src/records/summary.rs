use crate::records::RatedHazard;
use crate::scoring::RiskLevel;
use serde::Serialize;

/// Number of hazards in each risk band.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LevelCounts {
    pub low: usize,
    pub medium: usize,
    pub high: usize,
    pub very_high: usize,
}

impl LevelCounts {
    pub const fn add(&mut self, level: RiskLevel) {
        match level {
            RiskLevel::Low => self.low += 1,
            RiskLevel::Medium => self.medium += 1,
            RiskLevel::High => self.high += 1,
            RiskLevel::VeryHigh => self.very_high += 1,
        }
    }

    #[must_use]
    pub const fn get(&self, level: RiskLevel) -> usize {
        match level {
            RiskLevel::Low => self.low,
            RiskLevel::Medium => self.medium,
            RiskLevel::High => self.high,
            RiskLevel::VeryHigh => self.very_high,
        }
    }
}

/// Register-wide totals for the dashboard view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RegisterSummary {
    pub total: usize,
    pub before_controls: LevelCounts,
    pub after_controls: LevelCounts,
    pub follow_up: usize,
    pub improved: usize,
}

impl RegisterSummary {
    #[must_use]
    pub fn from_hazards<'a>(hazards: impl IntoIterator<Item = &'a RatedHazard>) -> Self {
        let mut summary = Self::default();
        for hazard in hazards {
            let outcome = &hazard.outcome;
            summary.total += 1;
            summary.before_controls.add(outcome.before.level);
            summary.after_controls.add(outcome.after.level);
            if outcome.follow_up {
                summary.follow_up += 1;
            }
            if outcome.level_improved() {
                summary.improved += 1;
            }
        }
        summary
    }
}
