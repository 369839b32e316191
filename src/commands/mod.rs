//! Command-line parsing and dispatch.

mod assess;
mod common;
mod init;
mod score;
mod summary;
mod validate;

pub use assess::{AssessArgs, assess_register};
pub use common::{CommonArgs, OutputFormat};
pub use init::{InitArgs, init_config};
pub use score::{ScoreArgs, score_pair};
pub use summary::{SummaryArgs, summarize_register};
pub use validate::{ValidateArgs, validate_config};

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::ffi::OsString;
use std::io::Write;

/// The environment commands run against.
///
/// The binary wires this to the real standard streams; tests capture into buffers.
pub trait Host {
    fn output(&mut self) -> impl Write;
    fn error(&mut self) -> impl Write;
    fn exit(&mut self, code: i32);

    /// Whether the output stream is an interactive terminal.
    fn output_is_terminal(&self) -> bool {
        false
    }
}

#[derive(Debug, Parser)]
#[command(name = "hazard-score", version, about = "Score and classify hazards on a 5x5 risk matrix")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score a single likelihood/severity pair
    Score(ScoreArgs),

    /// Classify every hazard in a register, before and after controls
    Assess(AssessArgs),

    /// Count hazards per risk level across a register
    Summary(SummaryArgs),

    /// Write the default configuration file
    Init(InitArgs),

    /// Check a configuration file for errors
    Validate(ValidateArgs),
}

/// Parse `args` and run the selected command.
///
/// Failures are reported on the host's error stream and turned into a non-zero exit code.
pub fn run<H, I, T>(host: &mut H, args: I)
where
    H: Host,
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(e) => {
            let code = e.exit_code();
            let rendered = e.render().to_string();
            if e.use_stderr() {
                let _ = write!(host.error(), "{rendered}");
            } else {
                let _ = write!(host.output(), "{rendered}");
            }
            host.exit(code);
            return;
        }
    };

    match dispatch(host, cli.command) {
        Ok(code) => {
            if code != 0 {
                host.exit(code);
            }
        }
        Err(e) => {
            log::debug!("Command failed: {e:?}");
            let _ = writeln!(host.error(), "error: {e:#}");
            host.exit(1);
        }
    }
}

fn dispatch<H: Host>(host: &mut H, command: Command) -> Result<i32> {
    match command {
        Command::Score(args) => score_pair(host, &args),
        Command::Assess(args) => assess_register(host, &args),
        Command::Summary(args) => summarize_register(host, &args),
        Command::Init(args) => init_config(host, &args),
        Command::Validate(args) => validate_config(host, &args),
    }
}
