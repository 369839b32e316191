use crate::config::LevelColors;
use crate::records::{CorrectiveAction, RatedHazard, RegisterSummary};
use crate::scoring::{Classification, RiskLevel};
use anyhow::Result;
use owo_colors::OwoColorize;
use std::io::Write;
use strum::IntoEnumIterator;

/// How badges are painted on the console.
#[derive(Debug, Clone, Copy)]
pub struct ConsoleStyle<'a> {
    pub colors: &'a LevelColors,
    pub use_colors: bool,
}

/// Render a classification as `Risk: 12 (High)`, painted in the level's color.
#[must_use]
pub fn badge(classification: &Classification, style: &ConsoleStyle<'_>) -> String {
    let text = classification.to_string();
    if !style.use_colors {
        return text;
    }

    let (r, g, b) = style.colors.for_level(classification.level).rgb();
    text.truecolor(r, g, b).bold().to_string()
}

fn paint_level(level: RiskLevel, style: &ConsoleStyle<'_>) -> String {
    let text = level.as_uppercase_str();
    if !style.use_colors {
        return text.to_string();
    }

    let (r, g, b) = style.colors.for_level(level).rgb();
    text.truecolor(r, g, b).bold().to_string()
}

pub fn generate<W: Write + ?Sized>(writer: &mut W, hazards: &[RatedHazard], style: &ConsoleStyle<'_>) -> Result<()> {
    for (index, hazard) in hazards.iter().enumerate() {
        if index > 0 {
            writeln!(writer)?;
        }

        let record = &hazard.record;
        let outcome = &hazard.outcome;

        match &record.id {
            Some(id) => writeln!(writer, "{id}: {}", record.hazard)?,
            None => writeln!(writer, "{}", record.hazard)?,
        }

        writeln!(
            writer,
            "  Before controls: {}  [L{} x S{}]",
            badge(&outcome.before, style),
            record.likelihood_before,
            record.severity_before
        )?;
        writeln!(
            writer,
            "  After controls:  {}  [L{} x S{}]",
            badge(&outcome.after, style),
            record.likelihood_after,
            record.severity_after
        )?;
        writeln!(writer, "  Risk reduction:  {}", outcome.risk_reduction())?;

        if outcome.follow_up {
            writeln!(writer, "  Follow-up:       corrective action required")?;
        } else {
            writeln!(writer, "  Follow-up:       none")?;
        }
    }

    Ok(())
}

pub fn generate_summary<W: Write + ?Sized>(writer: &mut W, summary: &RegisterSummary, style: &ConsoleStyle<'_>) -> Result<()> {
    writeln!(writer, "{:<12} {:>8} {:>8}", "LEVEL", "BEFORE", "AFTER")?;
    for level in RiskLevel::iter() {
        // pad before painting so escapes don't skew the columns
        let name = format!("{:<12}", level.as_uppercase_str());
        let name = if style.use_colors {
            name.replace(level.as_uppercase_str(), &paint_level(level, style))
        } else {
            name
        };
        writeln!(
            writer,
            "{name} {:>8} {:>8}",
            summary.before_controls.get(level),
            summary.after_controls.get(level)
        )?;
    }

    writeln!(writer)?;
    writeln!(writer, "{:<22}{}", "Hazards:", summary.total)?;
    writeln!(writer, "{:<22}{}", "Improved by controls:", summary.improved)?;
    writeln!(writer, "{:<22}{}", "Needing follow-up:", summary.follow_up)?;
    Ok(())
}

pub fn generate_actions<W: Write + ?Sized>(writer: &mut W, actions: &[CorrectiveAction], style: &ConsoleStyle<'_>) -> Result<()> {
    if actions.is_empty() {
        writeln!(writer, "No corrective actions required")?;
        return Ok(());
    }

    for action in actions {
        let label = action.hazard_id.as_deref().unwrap_or(&action.hazard);
        writeln!(
            writer,
            "{:<9} due {}  {label}: {}",
            paint_level(action.priority, style),
            action.due,
            action.action
        )?;
    }

    Ok(())
}
