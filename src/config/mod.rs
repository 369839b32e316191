mod color;
#[expect(clippy::module_inception, reason = "I like it this way")]
mod config;
mod range_policy;

pub use color::Color;
pub use config::{CONFIG_FILE_NAME, Config, DEFAULT_CONFIG_YAML, DueDays, LevelColors};
pub use range_policy::RangePolicy;
