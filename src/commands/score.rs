use crate::commands::common::{CommonArgs, OutputFormat, write_output};
use crate::commands::Host;
use crate::config::RangePolicy;
use crate::reports::badge;
use crate::scoring::{Classification, MAX_RATING, MIN_RATING, RiskFactor, classify, score};
use anyhow::{Context, Result};
use clap::Args;

#[derive(Debug, Args)]
pub struct ScoreArgs {
    /// Likelihood rating (1-5)
    #[arg(allow_negative_numbers = true)]
    pub likelihood: i64,

    /// Severity rating (1-5)
    #[arg(allow_negative_numbers = true)]
    pub severity: i64,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Console)]
    pub format: OutputFormat,

    #[command(flatten)]
    pub common: CommonArgs,
}

pub fn score_pair<H: Host>(host: &mut H, args: &ScoreArgs) -> Result<i32> {
    let config = args.common.load_config()?;

    let classification = match config.out_of_range {
        RangePolicy::Reject => RiskFactor::new(args.likelihood, args.severity)?.classification(),
        RangePolicy::Permit => {
            let in_range = |v: i64| (MIN_RATING..=MAX_RATING).contains(&v);
            if !in_range(args.likelihood) || !in_range(args.severity) {
                log::warn!(
                    "Scoring out-of-range ratings as-is: likelihood {}, severity {}",
                    args.likelihood,
                    args.severity
                );
            }
            classify(score(args.likelihood, args.severity))
        }
    };

    let style = args.common.console_style(host, &config.colors, false);
    write_output(host, None, |w| render(w, &classification, args.format, &badge(&classification, &style)))?;
    Ok(0)
}

fn render(w: &mut dyn std::io::Write, classification: &Classification, format: OutputFormat, badge: &str) -> Result<()> {
    match format {
        OutputFormat::Console => writeln!(w, "{badge}")?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *w, classification).context("writing JSON output")?;
            writeln!(w)?;
        }
        OutputFormat::Csv => {
            let mut csv_writer = csv::Writer::from_writer(w);
            csv_writer.serialize(classification).context("writing CSV output")?;
            csv_writer.flush().context("flushing CSV output")?;
        }
    }
    Ok(())
}
