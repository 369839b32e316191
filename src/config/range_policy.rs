use serde::{Deserialize, Serialize};
use strum::Display;

/// What to do with a likelihood or severity rating outside `1..=5`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum RangePolicy {
    /// Treat the record as invalid.
    #[default]
    Reject,

    /// Log a warning and score the raw values anyway.
    Permit,
}
