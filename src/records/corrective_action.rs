use crate::scoring::RiskLevel;
use chrono::NaiveDate;
use core::fmt::{Display, Formatter, Result as FmtResult};
use serde::Serialize;

/// A remediation task drafted for a hazard whose residual risk is still High or Very High.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CorrectiveAction {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hazard_id: Option<String>,
    pub hazard: String,
    pub action: String,
    pub priority: RiskLevel,
    pub residual_score: i64,
    pub due: NaiveDate,
}

impl Display for CorrectiveAction {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        if let Some(id) = &self.hazard_id {
            write!(f, "[{id}] ")?;
        }
        write!(f, "{} ({}, due {}): {}", self.hazard, self.priority, self.due, self.action)
    }
}
