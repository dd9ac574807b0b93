//! AI narrative insights

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{null_as_default, unwrap_envelope};

pub const NARRATIVE_FALLBACK: &str = "Your League story is being written...";
pub const PLAYSTYLE_FALLBACK: &str = "A dedicated League player";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InsightsResult {
    pub narrative: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub strengths: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub areas_for_growth: Vec<String>,
    pub playstyle_description: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub highlights: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub recommendations: Vec<String>,
}

impl InsightsResult {
    /// Decode an `/api/insights` body, wrapped in `{insights}` or bare
    pub fn from_response(value: Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(unwrap_envelope(value, "insights"))
    }

    /// Canned insights shown in demo mode
    pub fn demo() -> Self {
        let lines = |items: &[&str]| items.iter().map(|s| s.to_string()).collect();
        Self {
            narrative: Some(
                "Across 150 games you climbed with a mid-lane pool built on Yasuo and Ahri, \
                 turning early pressure into map control and finishing the season on an \
                 upswing."
                    .to_string(),
            ),
            strengths: lines(&[
                "Consistent laning phase with strong CS numbers",
                "High kill participation in skirmishes",
            ]),
            areas_for_growth: lines(&[
                "Ward more during the mid game",
                "Fewer deaths when behind",
            ]),
            playstyle_description: Some("An aggressive playmaker who lives for the outplay".to_string()),
            highlights: lines(&["2 pentakills", "58% recent win rate"]),
            recommendations: lines(&["Expand the champion pool with one control mage"]),
        }
    }

    pub fn narrative(&self) -> &str {
        text_or(&self.narrative, NARRATIVE_FALLBACK)
    }

    pub fn playstyle(&self) -> &str {
        text_or(&self.playstyle_description, PLAYSTYLE_FALLBACK)
    }
}

pub(crate) fn text_or<'a>(value: &'a Option<String>, fallback: &'a str) -> &'a str {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(fallback)
}
