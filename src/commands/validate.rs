use crate::commands::Host;
use crate::commands::common::current_dir;
use crate::config::{CONFIG_FILE_NAME, Config};
use anyhow::{Result, bail};
use camino::Utf8PathBuf;
use clap::Args;
use std::io::Write;

#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Configuration file to check [default: hazard-score.yml in the current directory]
    #[arg(long, value_name = "PATH")]
    pub config: Option<Utf8PathBuf>,
}

pub fn validate_config<H: Host>(host: &mut H, args: &ValidateArgs) -> Result<i32> {
    let search_dir = current_dir()?;
    let path = args.config.clone().unwrap_or_else(|| search_dir.join(CONFIG_FILE_NAME));

    if !path.exists() {
        bail!("could not find configuration file '{path}'");
    }

    let config = Config::load(&search_dir, Some(path.as_path()))?;
    log::debug!("Validated configuration: {config:?}");
    writeln!(host.output(), "Configuration file '{path}' is valid")?;
    Ok(0)
}
