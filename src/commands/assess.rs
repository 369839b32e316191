use crate::commands::common::{CommonArgs, OutputFormat, load_rated, write_output};
use crate::commands::Host;
use crate::records::CorrectiveAction;
use crate::reports::{generate_console, generate_console_actions, generate_csv, generate_csv_actions, generate_json, generate_json_actions};
use anyhow::Result;
use camino::Utf8PathBuf;
use chrono::{Local, NaiveDate};
use clap::Args;

/// Exit code used by `--fail-on-follow-up` when a hazard still needs a corrective action.
pub const FOLLOW_UP_EXIT_CODE: i32 = 2;

#[derive(Debug, Args)]
pub struct AssessArgs {
    /// Hazard register to read (.csv or .json)
    pub register: Utf8PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Console)]
    pub format: OutputFormat,

    /// Write the report to this file instead of standard output
    #[arg(long, short, value_name = "PATH")]
    pub output: Option<Utf8PathBuf>,

    /// Report drafted corrective actions instead of the hazard list
    #[arg(long)]
    pub actions: bool,

    /// Date corrective action due dates are counted from [default: today]
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub as_of: Option<NaiveDate>,

    /// Exit with code 2 when any hazard still needs a corrective action
    #[arg(long)]
    pub fail_on_follow_up: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

pub fn assess_register<H: Host>(host: &mut H, args: &AssessArgs) -> Result<i32> {
    let config = args.common.load_config()?;
    let (hazards, any_rejected) = load_rated(host, &args.register, config.out_of_range)?;
    let style = args.common.console_style(host, &config.colors, args.output.is_some());

    if args.actions {
        let today = args.as_of.unwrap_or_else(|| Local::now().date_naive());
        let actions: Vec<CorrectiveAction> = hazards
            .iter()
            .filter_map(|h| h.corrective_action(&config.due_days, today))
            .collect();

        log::info!("Drafted {} corrective action(s) for {} hazard(s)", actions.len(), hazards.len());

        write_output(host, args.output.as_deref(), |w| match args.format {
            OutputFormat::Console => generate_console_actions(w, &actions, &style),
            OutputFormat::Csv => generate_csv_actions(w, &actions),
            OutputFormat::Json => generate_json_actions(w, &actions),
        })?;
    } else {
        write_output(host, args.output.as_deref(), |w| match args.format {
            OutputFormat::Console => generate_console(w, &hazards, &style),
            OutputFormat::Csv => generate_csv(w, &hazards),
            OutputFormat::Json => generate_json(w, &hazards),
        })?;
    }

    if any_rejected {
        return Ok(1);
    }

    if args.fail_on_follow_up && hazards.iter().any(|h| h.outcome.follow_up) {
        return Ok(FOLLOW_UP_EXIT_CODE);
    }

    Ok(0)
}
