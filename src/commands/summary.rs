use crate::commands::common::{CommonArgs, OutputFormat, load_rated, write_output};
use crate::commands::Host;
use crate::records::RegisterSummary;
use crate::reports::{generate_console_summary, generate_csv_summary, generate_json_summary};
use anyhow::Result;
use camino::Utf8PathBuf;
use clap::Args;

#[derive(Debug, Args)]
pub struct SummaryArgs {
    /// Hazard register to read (.csv or .json)
    pub register: Utf8PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Console)]
    pub format: OutputFormat,

    /// Write the summary to this file instead of standard output
    #[arg(long, short, value_name = "PATH")]
    pub output: Option<Utf8PathBuf>,

    #[command(flatten)]
    pub common: CommonArgs,
}

pub fn summarize_register<H: Host>(host: &mut H, args: &SummaryArgs) -> Result<i32> {
    let config = args.common.load_config()?;
    let (hazards, any_rejected) = load_rated(host, &args.register, config.out_of_range)?;
    let summary = RegisterSummary::from_hazards(&hazards);
    let style = args.common.console_style(host, &config.colors, args.output.is_some());

    write_output(host, args.output.as_deref(), |w| match args.format {
        OutputFormat::Console => generate_console_summary(w, &summary, &style),
        OutputFormat::Csv => generate_csv_summary(w, &summary),
        OutputFormat::Json => generate_json_summary(w, &summary),
    })?;

    Ok(i32::from(any_rejected))
}
