use crate::config::{Color, RangePolicy};
use crate::scoring::RiskLevel;
use anyhow::{Context, Result, bail};
use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;

/// The default configuration YAML content, embedded from `default_config.yml`
pub const DEFAULT_CONFIG_YAML: &str = include_str!("../../default_config.yml");

/// File name looked up in the search directory when no explicit path is given.
pub const CONFIG_FILE_NAME: &str = "hazard-score.yml";

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// How likelihood/severity values outside 1..=5 are handled when loading records
    #[serde(default)]
    pub out_of_range: RangePolicy,

    /// Badge colors used by the console report
    #[serde(default)]
    pub colors: LevelColors,

    /// Days until a drafted corrective action falls due
    #[serde(default)]
    pub due_days: DueDays,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LevelColors {
    pub low: Color,
    pub medium: Color,
    pub high: Color,
    pub very_high: Color,
}

impl LevelColors {
    #[must_use]
    pub const fn for_level(&self, level: RiskLevel) -> Color {
        match level {
            RiskLevel::Low => self.low,
            RiskLevel::Medium => self.medium,
            RiskLevel::High => self.high,
            RiskLevel::VeryHigh => self.very_high,
        }
    }
}

impl Default for LevelColors {
    fn default() -> Self {
        Config::default().colors
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct DueDays {
    pub high: u32,
    pub very_high: u32,
}

impl DueDays {
    /// Due period for a residual level, or `None` when the level needs no follow-up.
    #[must_use]
    pub const fn for_level(&self, level: RiskLevel) -> Option<u32> {
        match level {
            RiskLevel::Low | RiskLevel::Medium => None,
            RiskLevel::High => Some(self.high),
            RiskLevel::VeryHigh => Some(self.very_high),
        }
    }
}

impl Default for DueDays {
    fn default() -> Self {
        Self { high: 30, very_high: 7 }
    }
}

impl Config {
    /// Load configuration from a file or use defaults
    ///
    /// Without an explicit path, `hazard-score.yml` in `search_dir` is used if present.
    pub fn load(search_dir: &Utf8Path, config_path: Option<&Utf8Path>) -> Result<Self> {
        let (final_path, text) = if let Some(path) = config_path {
            let text = fs::read_to_string(path).with_context(|| format!("reading configuration file '{path}'"))?;
            (path.to_path_buf(), text)
        } else {
            let path: Utf8PathBuf = search_dir.join(CONFIG_FILE_NAME);
            match fs::read_to_string(&path) {
                Ok(text) => (path, text),
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    log::debug!("No '{path}' found, using default configuration");
                    return Ok(Self::default());
                }
                Err(e) => return Err(e).with_context(|| format!("reading configuration file '{path}'")),
            }
        };

        let config: Self = serde_yaml::from_str(&text).with_context(|| format!("parsing configuration file '{final_path}'"))?;
        config
            .validate()
            .with_context(|| format!("validating configuration file '{final_path}'"))?;

        log::debug!("Loaded configuration from '{final_path}'");
        Ok(config)
    }

    /// Save the default configuration to a YAML file
    pub fn save_default(output_path: &Utf8Path) -> Result<()> {
        fs::write(output_path, DEFAULT_CONFIG_YAML).with_context(|| format!("writing default configuration to '{output_path}'"))?;
        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.due_days.high == 0 {
            bail!("due_days.high must be at least 1");
        }

        if self.due_days.very_high == 0 {
            bail!("due_days.very_high must be at least 1");
        }

        if self.due_days.very_high > self.due_days.high {
            bail!(
                "due_days.very_high ({}) must not be longer than due_days.high ({})",
                self.due_days.very_high,
                self.due_days.high
            );
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        serde_yaml::from_str(DEFAULT_CONFIG_YAML).expect("default_config.yml should be valid YAML that deserializes to Config")
    }
}
