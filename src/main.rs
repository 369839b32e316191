//! Command line tool that scores and classifies workplace hazards.

use env_logger::Env;
use hazard_score::{Host, run};
use std::io::{IsTerminal, Write, stderr, stdout};

/// Default host that talks to the real standard streams.
#[derive(Debug, Clone, Default)]
pub struct RealHost;

impl Host for RealHost {
    fn output(&mut self) -> impl Write {
        stdout()
    }

    fn error(&mut self) -> impl Write {
        stderr()
    }

    fn exit(&mut self, code: i32) {
        std::process::exit(code);
    }

    fn output_is_terminal(&self) -> bool {
        stdout().is_terminal()
    }
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    run(&mut RealHost, std::env::args());
}
