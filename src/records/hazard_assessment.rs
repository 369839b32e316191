use crate::config::DueDays;
use crate::records::{CorrectiveAction, HazardRecord, LOG_TARGET};
use crate::scoring::{MitigationOutcome, RiskFactor, assess_mitigation};
use chrono::{Days, NaiveDate};

/// A hazard's risk before and after controls, with both ratings validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HazardAssessment {
    pub before_controls: RiskFactor,
    pub after_controls: RiskFactor,
}

impl HazardAssessment {
    #[must_use]
    pub fn mitigation(&self) -> MitigationOutcome {
        assess_mitigation(self.before_controls.score(), self.after_controls.score())
    }
}

/// A record paired with the classifications derived from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RatedHazard {
    pub record: HazardRecord,
    pub outcome: MitigationOutcome,
}

impl RatedHazard {
    #[must_use]
    pub fn label(&self) -> &str {
        self.record.label()
    }

    /// Draft a corrective action when residual risk is still High or Very High.
    ///
    /// The action text comes from the record's additional controls. A flagged hazard with
    /// no such text yields nothing and a warning.
    #[must_use]
    pub fn corrective_action(&self, due_days: &DueDays, today: NaiveDate) -> Option<CorrectiveAction> {
        if !self.outcome.follow_up {
            return None;
        }

        let priority = self.outcome.after.level;
        let Some(action) = self
            .record
            .additional_controls
            .as_deref()
            .map(str::trim)
            .filter(|text| !text.is_empty())
        else {
            log::warn!(
                target: LOG_TARGET,
                "Hazard '{}' is still {priority} after controls but has no additional controls to act on",
                self.label()
            );
            return None;
        };

        let days = due_days.for_level(priority)?;
        let due = today.checked_add_days(Days::new(u64::from(days)))?;

        Some(CorrectiveAction {
            hazard_id: self.record.id.clone(),
            hazard: self.record.hazard.clone(),
            action: action.to_string(),
            priority,
            residual_score: self.outcome.after.score,
            due,
        })
    }
}
