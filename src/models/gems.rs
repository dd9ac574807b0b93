//! Hidden gems: backend-surfaced patterns framed as discoveries

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Gradient classes cycled through when a gem carries no color
const DEFAULT_COLORS: [&str; 6] = [
    "from-blue-500 to-cyan-500",
    "from-purple-500 to-pink-500",
    "from-green-500 to-emerald-500",
    "from-yellow-500 to-orange-500",
    "from-red-500 to-rose-500",
    "from-indigo-500 to-violet-500",
];

const DEFAULT_ICON: &str = "💎";
const DEFAULT_RARITY: u8 = 4;
const DESCRIPTION_FALLBACK: &str = "An interesting pattern was discovered";

/// A normalized discovery, ready to render
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gem {
    pub title: String,
    pub description: String,
    /// 1-5 stars
    pub rarity: u8,
    pub color: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HiddenGemsResult {
    pub gems: Vec<Gem>,
    /// True when nothing usable came back and placeholder gems are shown
    pub is_fallback: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawGem {
    title: Option<String>,
    #[serde(alias = "insight")]
    description: Option<String>,
    rarity: Option<f64>,
    color: Option<String>,
    icon: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawEntry {
    Text(String),
    Detailed(RawGem),
}

impl HiddenGemsResult {
    /// Decode an `/api/hidden-gems` body.
    ///
    /// The list may sit under `discoveries` or `gems`, possibly nested one
    /// level (`{"gems": {"gems": [...]}}`). Entries may be plain strings.
    pub fn from_response(value: Value) -> Self {
        match find_entries(&value) {
            Some(entries) => Self {
                gems: entries
                    .iter()
                    .enumerate()
                    .filter_map(|(index, entry)| normalize(index, entry))
                    .collect(),
                is_fallback: false,
            },
            None => {
                tracing::debug!("Hidden gems response carried no list; using placeholders");
                Self::fallback()
            }
        }
    }

    pub fn fallback() -> Self {
        let gem = |title: &str, description: &str, color: &str, icon: &str| Gem {
            title: title.to_string(),
            description: description.to_string(),
            rarity: DEFAULT_RARITY,
            color: color.to_string(),
            icon: icon.to_string(),
        };

        Self {
            gems: vec![
                gem(
                    "Peak Performance Time",
                    "You tend to perform best during evening hours (6-10 PM). Your win rate is 8% higher during this time!",
                    DEFAULT_COLORS[0],
                    "🕒",
                ),
                gem(
                    "Weekend Warrior",
                    "Your Saturday games have a 12% higher win rate than weekdays. Maybe you're more relaxed?",
                    DEFAULT_COLORS[1],
                    "📅",
                ),
                gem(
                    "Comeback King",
                    "You have a 67% win rate in games where you were behind at 15 minutes. Never give up!",
                    DEFAULT_COLORS[2],
                    "📈",
                ),
                gem(
                    "Role Flexibility",
                    "You play 3+ roles regularly. Flex players have 15% better adaptation to meta changes!",
                    DEFAULT_COLORS[3],
                    "⚡",
                ),
            ],
            is_fallback: true,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.gems.is_empty()
    }
}

fn find_entries(value: &Value) -> Option<&Vec<Value>> {
    match value {
        Value::Array(items) => Some(items),
        Value::Object(map) => ["discoveries", "gems"]
            .iter()
            .filter_map(|key| map.get(*key))
            .find_map(find_entries),
        _ => None,
    }
}

fn normalize(index: usize, entry: &Value) -> Option<Gem> {
    let raw = match serde_json::from_value::<RawEntry>(entry.clone()) {
        Ok(RawEntry::Text(text)) => RawGem {
            description: Some(text),
            ..RawGem::default()
        },
        Ok(RawEntry::Detailed(raw)) => raw,
        Err(e) => {
            tracing::debug!("Skipping malformed gem #{}: {}", index + 1, e);
            return None;
        }
    };

    let present = |s: Option<String>| s.filter(|s| !s.trim().is_empty());

    Some(Gem {
        title: present(raw.title).unwrap_or_else(|| format!("Insight #{}", index + 1)),
        description: present(raw.description).unwrap_or_else(|| DESCRIPTION_FALLBACK.to_string()),
        rarity: raw
            .rarity
            .filter(|r| r.is_finite())
            .map(|r| r.round().clamp(1.0, 5.0) as u8)
            .unwrap_or(DEFAULT_RARITY),
        color: present(raw.color)
            .unwrap_or_else(|| DEFAULT_COLORS[index % DEFAULT_COLORS.len()].to_string()),
        icon: present(raw.icon).unwrap_or_else(|| DEFAULT_ICON.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_nested_gems_list() {
        let result = HiddenGemsResult::from_response(json!({
            "summoner": "Faker",
            "gems": {"gems": [
                {"title": "Baron Hunter", "description": "You secure 70% of barons.", "rarity": 5},
                "Night owl: 60% of games after midnight"
            ]}
        }));

        assert!(!result.is_fallback);
        assert_eq!(result.gems.len(), 2);
        assert_eq!(result.gems[0].rarity, 5);
        assert_eq!(result.gems[1].title, "Insight #2");
        assert_eq!(result.gems[1].description, "Night owl: 60% of games after midnight");
        assert_eq!(result.gems[1].color, DEFAULT_COLORS[1]);
        assert_eq!(result.gems[1].rarity, DEFAULT_RARITY);
    }

    #[test]
    fn test_discoveries_key_and_insight_alias() {
        let result = HiddenGemsResult::from_response(json!({
            "discoveries": [{"insight": "Wins more on blue side", "rarity": 9}]
        }));
        assert_eq!(result.gems[0].description, "Wins more on blue side");
        assert_eq!(result.gems[0].rarity, 5);
    }

    #[test]
    fn test_missing_list_uses_placeholders() {
        let result = HiddenGemsResult::from_response(json!({"summoner": "Faker"}));
        assert!(result.is_fallback);
        assert_eq!(result.gems.len(), 4);
    }

    #[test]
    fn test_empty_list_is_not_replaced_by_placeholders() {
        let result = HiddenGemsResult::from_response(json!({"gems": {"gems": []}}));
        assert!(!result.is_fallback);
        assert!(result.is_empty());
    }

    #[test]
    fn test_malformed_entries_skipped() {
        let result = HiddenGemsResult::from_response(json!({"gems": [42, {"title": "Ok"}]}));
        assert_eq!(result.gems.len(), 1);
        assert_eq!(result.gems[0].title, "Ok");
        assert_eq!(result.gems[0].description, DESCRIPTION_FALLBACK);
    }
}
