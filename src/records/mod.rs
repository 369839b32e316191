//! Hazard records as they arrive from storage or forms, and what is derived from them.

mod corrective_action;
mod hazard_assessment;
mod hazard_record;
mod rating;
mod register;
mod summary;

pub use corrective_action::CorrectiveAction;
pub use hazard_assessment::{HazardAssessment, RatedHazard};
pub use hazard_record::HazardRecord;
pub use register::{RegisterFormat, RejectedRecord, load_register, parse_register, rate_register};
pub use summary::{LevelCounts, RegisterSummary};

const LOG_TARGET: &str = "records";
