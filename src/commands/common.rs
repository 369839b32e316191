use crate::commands::Host;
use crate::config::{Config, LevelColors, RangePolicy};
use crate::misc::ColorMode;
use crate::records::{RatedHazard, load_register, rate_register};
use crate::reports::ConsoleStyle;
use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Args, ValueEnum};
use std::fs;
use std::io::{BufWriter, Write};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Console,
    Csv,
    Json,
}

#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Configuration file [default: hazard-score.yml in the current directory, if present]
    #[arg(long, value_name = "PATH")]
    pub config: Option<Utf8PathBuf>,

    /// When to color console output
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,

    /// Score ratings outside 1..=5 instead of rejecting the record
    #[arg(long)]
    pub permit_out_of_range: bool,
}

impl CommonArgs {
    pub fn load_config(&self) -> Result<Config> {
        let search_dir = current_dir()?;
        let mut config = Config::load(&search_dir, self.config.as_deref())?;
        if self.permit_out_of_range {
            config.out_of_range = RangePolicy::Permit;
        }
        log::debug!("Out-of-range ratings policy: {}", config.out_of_range);
        Ok(config)
    }

    pub fn console_style<'a, H: Host>(&self, host: &H, colors: &'a LevelColors, to_file: bool) -> ConsoleStyle<'a> {
        ConsoleStyle {
            colors,
            use_colors: self.color.enabled(!to_file && host.output_is_terminal()),
        }
    }
}

pub fn current_dir() -> Result<Utf8PathBuf> {
    let dir = std::env::current_dir().context("determining the current directory")?;
    Utf8PathBuf::try_from(dir).context("current directory is not valid UTF-8")
}

/// Load and classify a register, printing every rejected record to the error stream.
///
/// Returns the classified hazards and whether any record was rejected.
pub fn load_rated<H: Host>(host: &mut H, register: &Utf8Path, policy: RangePolicy) -> Result<(Vec<RatedHazard>, bool)> {
    let records = load_register(register)?;
    let (rated, rejected) = rate_register(&records, policy);

    if !rejected.is_empty() {
        let mut err = host.error();
        for r in &rejected {
            writeln!(err, "error: {r}")?;
        }
        writeln!(
            err,
            "{} of {} record(s) rejected (pass --permit-out-of-range to score them anyway)",
            rejected.len(),
            records.len()
        )?;
    }

    Ok((rated, !rejected.is_empty()))
}

/// Send rendered output to a file when one is given, else to the host's output stream.
pub fn write_output<H, F>(host: &mut H, path: Option<&Utf8Path>, render: F) -> Result<()>
where
    H: Host,
    F: FnOnce(&mut dyn Write) -> Result<()>,
{
    if let Some(path) = path {
        let file = fs::File::create(path).with_context(|| format!("creating output file '{path}'"))?;
        let mut writer = BufWriter::new(file);
        render(&mut writer)?;
        writer.flush().with_context(|| format!("writing output file '{path}'"))?;
        log::info!("Wrote report to '{path}'");
    } else {
        let mut out = host.output();
        render(&mut out)?;
        out.flush()?;
    }

    Ok(())
}
