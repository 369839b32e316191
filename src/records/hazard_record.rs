use crate::config::RangePolicy;
use crate::records::hazard_assessment::{HazardAssessment, RatedHazard};
use crate::records::rating::deserialize_rating;
use crate::records::LOG_TARGET;
use crate::scoring::{MAX_RATING, MIN_RATING, RiskFactor, assess_mitigation, score};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// A hazard as stored in the register.
///
/// Only the four raw ratings are kept. Scores and levels are derived on demand and never
/// written back.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct HazardRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    pub hazard: String,

    #[serde(deserialize_with = "deserialize_rating")]
    pub likelihood_before: i64,

    #[serde(deserialize_with = "deserialize_rating")]
    pub severity_before: i64,

    #[serde(deserialize_with = "deserialize_rating")]
    pub likelihood_after: i64,

    #[serde(deserialize_with = "deserialize_rating")]
    pub severity_after: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub existing_controls: Option<String>,

    /// Free text describing further controls; becomes the corrective action text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_controls: Option<String>,
}

impl HazardRecord {
    /// A short name for messages: the id when there is one, else the hazard text.
    #[must_use]
    pub fn label(&self) -> &str {
        self.id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .unwrap_or(&self.hazard)
    }

    /// Build the strict before/after risk factors, failing on any rating outside `1..=5`.
    pub fn assessment(&self) -> Result<HazardAssessment> {
        let label = self.label();
        Ok(HazardAssessment {
            before_controls: RiskFactor::new(self.likelihood_before, self.severity_before)
                .with_context(|| format!("hazard '{label}' before controls"))?,
            after_controls: RiskFactor::new(self.likelihood_after, self.severity_after)
                .with_context(|| format!("hazard '{label}' after controls"))?,
        })
    }

    /// Classify the record under the given range policy.
    ///
    /// With [`RangePolicy::Permit`] this never fails: out-of-range ratings are logged and
    /// scored as they are.
    pub fn rate(&self, policy: RangePolicy) -> Result<RatedHazard> {
        let outcome = match policy {
            RangePolicy::Reject => self.assessment()?.mitigation(),
            RangePolicy::Permit => {
                self.warn_out_of_range();
                assess_mitigation(
                    score(self.likelihood_before, self.severity_before),
                    score(self.likelihood_after, self.severity_after),
                )
            }
        };

        Ok(RatedHazard {
            record: self.clone(),
            outcome,
        })
    }

    fn warn_out_of_range(&self) {
        let fields = [
            ("likelihood_before", self.likelihood_before),
            ("severity_before", self.severity_before),
            ("likelihood_after", self.likelihood_after),
            ("severity_after", self.severity_after),
        ];

        for (name, value) in fields {
            if !(MIN_RATING..=MAX_RATING).contains(&value) {
                log::warn!(
                    target: LOG_TARGET,
                    "Hazard '{}': {name} = {value} is outside {MIN_RATING}..={MAX_RATING}, scoring it as-is",
                    self.label()
                );
            }
        }
    }
}
