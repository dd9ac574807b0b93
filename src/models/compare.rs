//! Two-player comparison

use serde::{Deserialize, Serialize};

use super::{null_as_default, PlayerStats};

/// Body of `/api/compare`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ComparisonResult {
    #[serde(deserialize_with = "null_as_default")]
    pub player1: ComparedPlayer,
    #[serde(deserialize_with = "null_as_default")]
    pub player2: ComparedPlayer,
    /// 0-100
    pub synergy_score: Option<f64>,
    pub synergy_description: Option<String>,
    /// AI narrative comparing both playstyles
    pub comparison: Option<String>,
}

/// One side of a comparison: the player's name and whatever stats came back
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComparedPlayer {
    pub name: Option<String>,
    #[serde(flatten)]
    pub stats: PlayerStats,
}

impl ComparedPlayer {
    /// Rows shown side by side: win rate, KDA, games and role
    pub fn stat_rows(&self) -> [(&'static str, String); 4] {
        [
            ("Win Rate", format!("{}%", finite_or_zero(self.stats.win_rate))),
            ("KDA", finite_or_zero(self.stats.avg_kda).to_string()),
            ("Games", self.stats.total_games.to_string()),
            ("Role", self.stats.role().to_string()),
        ]
    }
}

impl ComparisonResult {
    /// Synergy score label, `N/A` when missing or zero
    pub fn synergy_label(&self) -> String {
        match self.synergy_score {
            Some(score) if score.is_finite() && score != 0.0 => format!("{}%", score),
            _ => "N/A".to_string(),
        }
    }

    pub fn synergy_description(&self) -> &str {
        self.synergy_description.as_deref().unwrap_or("")
    }

    /// AI analysis, when the backend produced one
    pub fn narrative(&self) -> Option<&str> {
        self.comparison.as_deref().filter(|c| !c.trim().is_empty())
    }
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_decodes_flattened_players() {
        let result: ComparisonResult = serde_json::from_value(json!({
            "player1": {"name": "Faker", "winRate": 62.5, "avgKDA": 4.1, "totalGames": 15, "mostPlayedRole": "MIDDLE"},
            "player2": {"name": "Keria", "winRate": 58.0, "avgKDA": 5.3, "totalGames": 15, "mostPlayedRole": "UTILITY"},
            "synergyScore": 70.8,
            "synergyDescription": "Good duo potential!",
            "comparison": "A mid-support duo with map control.",
            "model_used": "amazon.nova-lite-v1:0"
        }))
        .unwrap();

        assert_eq!(result.player1.name.as_deref(), Some("Faker"));
        assert_eq!(
            result.player1.stat_rows(),
            [
                ("Win Rate", "62.5%".to_string()),
                ("KDA", "4.1".to_string()),
                ("Games", "15".to_string()),
                ("Role", "MIDDLE".to_string()),
            ]
        );
        assert_eq!(result.synergy_label(), "70.8%");
        assert_eq!(result.narrative(), Some("A mid-support duo with map control."));
    }

    #[test]
    fn test_missing_stats_fall_back() {
        let result: ComparisonResult =
            serde_json::from_value(json!({"player1": null, "synergyScore": 0})).unwrap();

        assert_eq!(
            result.player2.stat_rows(),
            [
                ("Win Rate", "0%".to_string()),
                ("KDA", "0".to_string()),
                ("Games", "0".to_string()),
                ("Role", "Unknown".to_string()),
            ]
        );
        assert_eq!(result.synergy_label(), "N/A");
        assert_eq!(result.narrative(), None);
    }
}
