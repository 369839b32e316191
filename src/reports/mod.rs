//! Renderers for rated hazards, register summaries, and corrective action drafts.

mod console;
mod csv;
mod json;

pub use console::{ConsoleStyle, badge, generate as generate_console, generate_actions as generate_console_actions, generate_summary as generate_console_summary};
pub use self::csv::{generate as generate_csv, generate_actions as generate_csv_actions, generate_summary as generate_csv_summary};
pub use json::{HazardReport, generate as generate_json, generate_actions as generate_json_actions, generate_summary as generate_json_summary};
