use crate::records::{CorrectiveAction, RatedHazard, RegisterSummary};
use crate::scoring::Classification;
use anyhow::{Context, Result};
use serde::Serialize;
use std::io::Write;

/// The `{score, level, color}` view of one hazard handed to display code.
#[derive(Debug, Serialize)]
pub struct HazardReport<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<&'a str>,
    pub hazard: &'a str,
    pub before: Classification,
    pub after: Classification,
    pub risk_reduction: i64,
    pub follow_up: bool,
}

impl<'a> From<&'a RatedHazard> for HazardReport<'a> {
    fn from(hazard: &'a RatedHazard) -> Self {
        Self {
            id: hazard.record.id.as_deref(),
            hazard: &hazard.record.hazard,
            before: hazard.outcome.before,
            after: hazard.outcome.after,
            risk_reduction: hazard.outcome.risk_reduction(),
            follow_up: hazard.outcome.follow_up,
        }
    }
}

pub fn generate<W: Write>(writer: W, hazards: &[RatedHazard]) -> Result<()> {
    let reports: Vec<HazardReport<'_>> = hazards.iter().map(HazardReport::from).collect();
    write_pretty(writer, &reports)
}

pub fn generate_summary<W: Write>(writer: W, summary: &RegisterSummary) -> Result<()> {
    write_pretty(writer, summary)
}

pub fn generate_actions<W: Write>(writer: W, actions: &[CorrectiveAction]) -> Result<()> {
    write_pretty(writer, actions)
}

fn write_pretty<W: Write, T: Serialize + ?Sized>(mut writer: W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, value).context("writing JSON output")?;
    writeln!(writer)?;
    Ok(())
}
