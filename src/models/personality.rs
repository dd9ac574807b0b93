//! Personality profile

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::insights::text_or;
use super::{null_as_default, unwrap_envelope};

pub const TYPE_FALLBACK: &str = "The Player";
pub const PLAYSTYLE_FALLBACK: &str = "Your unique League personality";
pub const DESCRIPTION_FALLBACK: &str =
    "A dedicated League of Legends player with a unique approach to the game.";
pub const ARCHETYPE_FALLBACK: &str = "You bring a unique blend of skills and playstyle to every match, making you an unpredictable and valuable teammate.";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonalityProfile {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub playstyle: Option<String>,
    pub description: Option<String>,
    pub celebrity: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub traits: Vec<PersonalityTrait>,
    #[serde(deserialize_with = "null_as_default")]
    pub strengths: Vec<String>,
    pub archetype: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonalityTrait {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub value: f64,
}

impl PersonalityTrait {
    pub fn new(name: &str, value: f64) -> Self {
        Self {
            name: name.to_string(),
            value,
        }
    }

    /// Value clamped to 0-100 and rounded for display
    pub fn percent(&self) -> u8 {
        if self.value.is_finite() {
            self.value.clamp(0.0, 100.0).round() as u8
        } else {
            0
        }
    }

    /// Gradient class for the trait bar
    pub fn bar_color(&self) -> &'static str {
        match self.percent() {
            80..=100 => "from-green-500 to-emerald-500",
            60..=79 => "from-blue-500 to-cyan-500",
            40..=59 => "from-yellow-500 to-orange-500",
            _ => "from-red-500 to-pink-500",
        }
    }

    /// Classes for the filled part of the trait bar
    pub fn bar_class(&self) -> String {
        format!("h-full rounded-full bg-gradient-to-r {}", self.bar_color())
    }

    pub fn icon(&self) -> &'static str {
        match self.name.as_str() {
            "Aggression" => "⚔️",
            "Teamwork" => "🤝",
            "Mechanics" => "🎯",
            "Strategy" => "🧠",
            "Adaptability" => "⚡",
            "Consistency" => "🛡️",
            _ => "✨",
        }
    }
}

impl PersonalityProfile {
    /// Decode an `/api/personality` body, wrapped in `{personality}` or bare
    pub fn from_response(value: Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(unwrap_envelope(value, "personality"))
    }

    /// Shown in demo mode and when nothing could be fetched
    pub fn fallback() -> Self {
        Self {
            kind: Some("The Strategist".to_string()),
            playstyle: Some("Macro-focused team player".to_string()),
            description: Some(
                "You're a calculated player who thinks three steps ahead. You value map control \
                 and objective play over flashy mechanical outplays."
                    .to_string(),
            ),
            celebrity: Some("Faker".to_string()),
            traits: vec![
                PersonalityTrait::new("Aggression", 65.0),
                PersonalityTrait::new("Teamwork", 80.0),
                PersonalityTrait::new("Mechanics", 70.0),
                PersonalityTrait::new("Strategy", 85.0),
                PersonalityTrait::new("Adaptability", 75.0),
                PersonalityTrait::new("Consistency", 72.0),
            ],
            strengths: vec![
                "Excellent map awareness and objective control".to_string(),
                "Strong team fighting presence".to_string(),
                "Adapts well to different team compositions".to_string(),
            ],
            archetype: None,
        }
    }

    pub fn kind(&self) -> &str {
        text_or(&self.kind, TYPE_FALLBACK)
    }

    pub fn playstyle(&self) -> &str {
        text_or(&self.playstyle, PLAYSTYLE_FALLBACK)
    }

    pub fn description(&self) -> &str {
        text_or(&self.description, DESCRIPTION_FALLBACK)
    }

    pub fn archetype(&self) -> &str {
        text_or(&self.archetype, ARCHETYPE_FALLBACK)
    }

    pub fn celebrity(&self) -> Option<&str> {
        self.celebrity.as_deref().filter(|c| !c.trim().is_empty())
    }

    fn trait_value(&self, name: &str) -> Option<f64> {
        self.traits
            .iter()
            .find(|t| t.name == name)
            .map(|t| t.percent() as f64)
    }

    /// Position on the solo/team (x) by passive/aggressive (y) matrix.
    ///
    /// Returned as (left %, top %). Missing traits sit at the midpoint.
    pub fn matrix_position(&self) -> (f64, f64) {
        let teamwork = self.trait_value("Teamwork").unwrap_or(50.0);
        let aggression = self.trait_value("Aggression").unwrap_or(50.0);
        (50.0 + (teamwork - 50.0) * 0.8, 100.0 - aggression * 0.8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_wrapped_profile() {
        let profile = PersonalityProfile::from_response(json!({
            "summoner": "Faker",
            "personality": {
                "type": "The Maestro",
                "traits": [{"name": "Aggression", "value": 120}, {"name": "Teamwork", "value": 90}]
            }
        }))
        .unwrap();

        assert_eq!(profile.kind(), "The Maestro");
        assert_eq!(profile.traits[0].percent(), 100);
        assert_eq!(profile.playstyle(), PLAYSTYLE_FALLBACK);
        assert_eq!(profile.celebrity(), None);
    }

    #[test]
    fn test_backend_text_fallback_shape() {
        // {"type": "The Player", "description": <raw model text>}
        let profile = PersonalityProfile::from_response(json!({
            "personality": {"type": "The Player", "description": "You like to farm."}
        }))
        .unwrap();
        assert_eq!(profile.description(), "You like to farm.");
        assert!(profile.traits.is_empty());
        assert_eq!(profile.archetype(), ARCHETYPE_FALLBACK);
    }

    #[test]
    fn test_matrix_position() {
        let profile = PersonalityProfile::fallback();
        let (left, top) = profile.matrix_position();
        assert!((left - 74.0).abs() < 1e-9);
        assert!((top - 48.0).abs() < 1e-9);

        assert_eq!(PersonalityProfile::default().matrix_position(), (50.0, 60.0));
    }

    #[test]
    fn test_trait_colors() {
        assert_eq!(PersonalityTrait::new("x", 85.0).bar_color(), "from-green-500 to-emerald-500");
        assert_eq!(PersonalityTrait::new("x", 59.6).bar_color(), "from-blue-500 to-cyan-500");
        assert_eq!(PersonalityTrait::new("x", f64::NAN).percent(), 0);
    }

    #[test]
    fn test_trait_bar_is_a_gradient_fill() {
        let class = PersonalityTrait::new("Teamwork", 80.0).bar_class();
        assert_eq!(class, "h-full rounded-full bg-gradient-to-r from-green-500 to-emerald-500");

        let t: PersonalityTrait = serde_json::from_value(json!({"name": "Mechanics", "value": null})).unwrap();
        assert!(t.bar_class().ends_with("from-red-500 to-pink-500"));
    }
}
