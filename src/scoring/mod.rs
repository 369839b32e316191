//! Likelihood/severity scoring and the fixed four-band classification.

mod classification;
mod mitigation;
mod risk_factor;
mod risk_level;

pub use classification::{Classification, classify, score};
pub use mitigation::{MitigationOutcome, assess_mitigation, needs_follow_up};
pub use risk_factor::{MAX_RATING, MIN_RATING, RiskFactor};
pub use risk_level::{RiskColor, RiskLevel};
