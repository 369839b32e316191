use crate::records::{CorrectiveAction, RatedHazard, RegisterSummary};
use crate::scoring::{RiskColor, RiskLevel};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::Serialize;
use std::io::Write;
use strum::IntoEnumIterator;

#[derive(Debug, Serialize)]
struct HazardRow<'a> {
    id: &'a str,
    hazard: &'a str,
    likelihood_before: i64,
    severity_before: i64,
    score_before: i64,
    level_before: RiskLevel,
    color_before: RiskColor,
    likelihood_after: i64,
    severity_after: i64,
    score_after: i64,
    level_after: RiskLevel,
    color_after: RiskColor,
    risk_reduction: i64,
    follow_up: bool,
}

#[derive(Debug, Serialize)]
struct ActionRow<'a> {
    hazard_id: &'a str,
    hazard: &'a str,
    action: &'a str,
    priority: RiskLevel,
    residual_score: i64,
    due: NaiveDate,
}

#[derive(Debug, Serialize)]
struct SummaryRow {
    level: RiskLevel,
    before_controls: usize,
    after_controls: usize,
}

/// Write the register with derived columns, one hazard per row.
pub fn generate<W: Write>(writer: W, hazards: &[RatedHazard]) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    for hazard in hazards {
        let record = &hazard.record;
        let outcome = &hazard.outcome;
        csv_writer
            .serialize(HazardRow {
                id: record.id.as_deref().unwrap_or_default(),
                hazard: &record.hazard,
                likelihood_before: record.likelihood_before,
                severity_before: record.severity_before,
                score_before: outcome.before.score,
                level_before: outcome.before.level,
                color_before: outcome.before.color,
                likelihood_after: record.likelihood_after,
                severity_after: record.severity_after,
                score_after: outcome.after.score,
                level_after: outcome.after.level,
                color_after: outcome.after.color,
                risk_reduction: outcome.risk_reduction(),
                follow_up: outcome.follow_up,
            })
            .with_context(|| format!("writing CSV row for hazard '{}'", hazard.label()))?;
    }

    csv_writer.flush().context("flushing CSV output")?;
    Ok(())
}

pub fn generate_actions<W: Write>(writer: W, actions: &[CorrectiveAction]) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    for action in actions {
        csv_writer
            .serialize(ActionRow {
                hazard_id: action.hazard_id.as_deref().unwrap_or_default(),
                hazard: &action.hazard,
                action: &action.action,
                priority: action.priority,
                residual_score: action.residual_score,
                due: action.due,
            })
            .with_context(|| format!("writing CSV row for corrective action on '{}'", action.hazard))?;
    }

    csv_writer.flush().context("flushing CSV output")?;
    Ok(())
}

/// Write per-level counts, one level per row.
pub fn generate_summary<W: Write>(writer: W, summary: &RegisterSummary) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    for level in RiskLevel::iter() {
        csv_writer
            .serialize(SummaryRow {
                level,
                before_controls: summary.before_controls.get(level),
                after_controls: summary.after_controls.get(level),
            })
            .context("writing CSV summary row")?;
    }

    csv_writer.flush().context("flushing CSV output")?;
    Ok(())
}
