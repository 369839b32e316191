//! Loading a hazard register from disk.

use crate::config::RangePolicy;
use crate::records::{HazardRecord, LOG_TARGET, RatedHazard};
use anyhow::{Context, Result, anyhow};
use camino::Utf8Path;
use core::fmt::{Display, Formatter, Result as FmtResult};
use std::fs;
use std::io::Read;

/// On-disk register formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterFormat {
    /// Header row naming the record fields, one hazard per line.
    Csv,

    /// A JSON array of hazard objects.
    Json,
}

impl RegisterFormat {
    /// Pick the format from a file extension.
    pub fn from_path(path: &Utf8Path) -> Result<Self> {
        match path.extension().map(str::to_ascii_lowercase).as_deref() {
            Some("csv") => Ok(Self::Csv),
            Some("json") => Ok(Self::Json),
            _ => Err(anyhow!("unsupported register format for '{path}' (expected a .csv or .json file)")),
        }
    }
}

/// Read every record in a register file.
pub fn load_register(path: &Utf8Path) -> Result<Vec<HazardRecord>> {
    let start_time = std::time::Instant::now();
    let format = RegisterFormat::from_path(path)?;
    let file = fs::File::open(path).with_context(|| format!("opening hazard register '{path}'"))?;
    let records = parse_register(file, format).with_context(|| format!("reading hazard register '{path}'"))?;

    log::info!(
        target: LOG_TARGET,
        "Loaded {} hazard(s) from '{path}' in {:.3}s",
        records.len(),
        start_time.elapsed().as_secs_f64()
    );

    Ok(records)
}

/// Parse register content already opened by the caller.
pub fn parse_register(reader: impl Read, format: RegisterFormat) -> Result<Vec<HazardRecord>> {
    match format {
        RegisterFormat::Csv => parse_csv(reader),
        RegisterFormat::Json => serde_json::from_reader(reader).context("parsing JSON hazard records"),
    }
}

fn parse_csv(reader: impl Read) -> Result<Vec<HazardRecord>> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::Headers).from_reader(reader);

    csv_reader
        .deserialize::<HazardRecord>()
        .enumerate()
        .map(|(index, row)| row.with_context(|| format!("parsing record {}", index + 1)))
        .collect()
}

/// A record that could not be classified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedRecord {
    /// 1-based position in the register.
    pub position: usize,
    pub label: String,
    pub reason: String,
}

impl Display for RejectedRecord {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "record {} ('{}'): {}", self.position, self.label, self.reason)
    }
}

/// Classify every record, keeping going past the ones that fail.
pub fn rate_register<'a>(
    records: impl IntoIterator<Item = &'a HazardRecord>,
    policy: RangePolicy,
) -> (Vec<RatedHazard>, Vec<RejectedRecord>) {
    let mut rated = Vec::new();
    let mut rejected = Vec::new();

    for (index, record) in records.into_iter().enumerate() {
        match record.rate(policy) {
            Ok(hazard) => rated.push(hazard),
            Err(e) => {
                log::debug!(target: LOG_TARGET, "Rejected hazard '{}': {e:#}", record.label());
                rejected.push(RejectedRecord {
                    position: index + 1,
                    label: record.label().to_string(),
                    reason: format!("{e:#}"),
                });
            }
        }
    }

    (rated, rejected)
}
