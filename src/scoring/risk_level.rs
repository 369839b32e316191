use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// The band a risk score falls into.
///
/// Variants are declared in increasing order of severity, so the derived `Ord`
/// can be used to compare levels directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display, EnumIter)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    #[serde(rename = "Very High")]
    #[strum(serialize = "Very High")]
    VeryHigh,
}

impl RiskLevel {
    /// The presentation color token for this level.
    #[must_use]
    pub const fn color(self) -> RiskColor {
        match self {
            Self::Low => RiskColor::Green,
            Self::Medium => RiskColor::Yellow,
            Self::High => RiskColor::Orange,
            Self::VeryHigh => RiskColor::Red,
        }
    }

    /// Whether residual risk at this level calls for a corrective action.
    #[must_use]
    pub const fn requires_follow_up(self) -> bool {
        matches!(self, Self::High | Self::VeryHigh)
    }

    #[must_use]
    pub const fn as_uppercase_str(self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::VeryHigh => "VERY HIGH",
        }
    }
}

/// Color token paired with each [`RiskLevel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum RiskColor {
    Green,
    Yellow,
    Orange,
    Red,
}
