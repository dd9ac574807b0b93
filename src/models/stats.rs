//! Player statistics as computed by the backend

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::null_as_default;

/// Envelope returned by `/api/player/{region}/{name}` and `/api/demo/player`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlayerResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub summoner: SummonerInfo,
    #[serde(deserialize_with = "null_as_default")]
    pub stats: PlayerStats,
    pub match_count: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SummonerInfo {
    pub name: Option<String>,
    pub level: Option<u32>,
    pub profile_icon_id: Option<u32>,
}

/// Aggregate statistics over the analysed matches
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlayerStats {
    #[serde(deserialize_with = "null_as_default")]
    pub total_games: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub wins: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub losses: u32,
    /// Percentage 0-100
    #[serde(deserialize_with = "null_as_default")]
    pub win_rate: f64,
    #[serde(rename = "avgKDA", deserialize_with = "null_as_default")]
    pub avg_kda: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub avg_kills: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub avg_deaths: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub avg_assists: f64,
    pub most_played_role: Option<String>,

    /// Ordered by the backend; consumed as-is
    #[serde(alias = "championStats", deserialize_with = "null_as_default")]
    pub top_champions: Vec<ChampionStats>,
    /// Keyed by `YYYY-MM`
    #[serde(deserialize_with = "null_as_default")]
    pub monthly_performance: BTreeMap<String, MonthlyRecord>,
    #[serde(deserialize_with = "null_as_default")]
    pub role_distribution: BTreeMap<String, u32>,

    pub recent_trend: Option<String>,
    pub recent_win_rate: Option<f64>,

    #[serde(deserialize_with = "null_as_default")]
    pub pentakills: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub quadrakills: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub triplekills: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub perfect_games: u32,
    #[serde(rename = "bestGameKDA")]
    pub best_game_kda: Option<f64>,
    /// Nested achievement counters, as sent by the demo dataset
    pub achievements: Option<Achievements>,

    #[serde(rename = "avgCS")]
    pub avg_cs: Option<f64>,
    pub avg_gold: Option<f64>,
    pub avg_vision_score: Option<f64>,
    #[serde(alias = "avgDamage")]
    pub avg_damage_dealt: Option<f64>,
    pub avg_kill_participation: Option<f64>,
    /// Seconds
    pub avg_game_duration: Option<f64>,
    pub longest_win_streak: Option<u32>,
    pub longest_loss_streak: Option<u32>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Achievements {
    #[serde(deserialize_with = "null_as_default")]
    pub pentakills: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub quadrakills: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub triplekills: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub perfect_games: u32,
}

impl PlayerStats {
    /// Achievement counters, merging the flat and nested layouts
    pub fn achievement_counts(&self) -> Achievements {
        let nested = self.achievements.unwrap_or_default();
        Achievements {
            pentakills: self.pentakills.max(nested.pentakills),
            quadrakills: self.quadrakills.max(nested.quadrakills),
            triplekills: self.triplekills.max(nested.triplekills),
            perfect_games: self.perfect_games.max(nested.perfect_games),
        }
    }

    /// Whether the "Epic Moments" panel has anything to show
    pub fn has_epic_moments(&self) -> bool {
        let counts = self.achievement_counts();
        counts.pentakills > 0
            || counts.quadrakills > 0
            || self.best_game_kda.map_or(false, |kda| kda > 10.0)
    }

    /// Role label, `Unknown` when the backend did not determine one
    pub fn role(&self) -> &str {
        self.most_played_role
            .as_deref()
            .filter(|r| !r.trim().is_empty())
            .unwrap_or("Unknown")
    }

    /// First `n` champion names, in backend order
    pub fn top_champion_names(&self, n: usize) -> Vec<&str> {
        self.top_champions
            .iter()
            .take(n)
            .map(|c| c.champion_name.as_str())
            .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChampionStats {
    #[serde(deserialize_with = "null_as_default")]
    pub champion_name: String,
    #[serde(alias = "games", deserialize_with = "null_as_default")]
    pub games_played: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub wins: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub losses: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub win_rate: f64,
    #[serde(rename = "avgKDA", deserialize_with = "null_as_default")]
    pub avg_kda: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub avg_kills: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub avg_deaths: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub avg_assists: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonthlyRecord {
    #[serde(deserialize_with = "null_as_default")]
    pub games: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub wins: u32,
}

impl MonthlyRecord {
    /// Win rate for the month, `None` when no games were played
    pub fn win_rate(&self) -> Option<f64> {
        (self.games > 0).then(|| self.wins as f64 / self.games as f64 * 100.0)
    }
}

/// A selectable server cluster
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub code: String,
    pub name: String,
}

impl Region {
    pub fn new(code: &str, name: &str) -> Self {
        Self {
            code: code.to_string(),
            name: name.to_string(),
        }
    }

    /// Used when `/api/regions` is unreachable
    pub fn fallback_list() -> Vec<Region> {
        vec![
            Region::new("na1", "North America"),
            Region::new("euw1", "Europe West"),
            Region::new("kr", "Korea"),
        ]
    }
}

/// Body of `/api/regions`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RegionList {
    #[serde(deserialize_with = "null_as_default")]
    pub regions: Vec<Region>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_player_response_decodes_backend_shape() {
        let value = json!({
            "summoner": {"name": "Faker", "level": 600, "profileIconId": 6, "puuid": "abc"},
            "stats": {
                "totalGames": 20,
                "winRate": 65.0,
                "avgKDA": 4.25,
                "mostPlayedRole": "MIDDLE",
                "topChampions": [
                    {"championName": "Azir", "gamesPlayed": 8, "wins": 6, "losses": 2,
                     "winRate": 75.0, "avgKDA": 5.1, "avgKills": 6, "avgDeaths": 2, "avgAssists": 4.2}
                ],
                "monthlyPerformance": {"2024-11": {"games": 12, "wins": 8}},
                "roleDistribution": {"MIDDLE": 18, "TOP": 2}
            },
            "matchCount": 20,
            "enhanced_analytics": {"ranked": null}
        });

        let response: PlayerResponse = serde_json::from_value(value).unwrap();
        assert_eq!(response.summoner.name.as_deref(), Some("Faker"));
        assert_eq!(response.stats.total_games, 20);
        assert_eq!(response.stats.top_champions[0].champion_name, "Azir");
        assert_eq!(response.stats.top_champions[0].avg_kills, 6.0);
        assert_eq!(response.stats.role_distribution["MIDDLE"], 18);
        assert_eq!(response.match_count, Some(20));
    }

    #[test]
    fn test_demo_layout_aliases() {
        let value = json!({
            "totalGames": 150,
            "avgDamage": 18500,
            "achievements": {"pentakills": 2, "quadrakills": 8, "perfectGames": 12},
            "championStats": [{"championName": "Yasuo", "games": 28}]
        });

        let stats: PlayerStats = serde_json::from_value(value).unwrap();
        assert_eq!(stats.top_champions[0].games_played, 28);
        assert_eq!(stats.avg_damage_dealt, Some(18500.0));
        assert_eq!(stats.achievement_counts().pentakills, 2);
        assert_eq!(stats.achievement_counts().perfect_games, 12);
        assert!(stats.has_epic_moments());
    }

    #[test]
    fn test_nulls_decode_as_defaults() {
        let value = json!({"topChampions": null, "roleDistribution": null, "mostPlayedRole": null});
        let stats: PlayerStats = serde_json::from_value(value).unwrap();
        assert!(stats.top_champions.is_empty());
        assert_eq!(stats.role(), "Unknown");
    }

    #[test]
    fn test_null_scalars_decode_as_zero() {
        let value = json!({
            "stats": {
                "totalGames": 0,
                "wins": null,
                "winRate": null,
                "avgKDA": null,
                "avgKills": null,
                "pentakills": null,
                "topChampions": [{"championName": null, "gamesPlayed": null, "winRate": null}],
                "monthlyPerformance": {"2024-11": {"games": null, "wins": null}}
            }
        });

        let response: PlayerResponse = serde_json::from_value(value).unwrap();
        let stats = &response.stats;
        assert_eq!(stats.win_rate, 0.0);
        assert_eq!(stats.avg_kda, 0.0);
        assert_eq!(stats.achievement_counts().pentakills, 0);
        assert_eq!(stats.top_champions[0].games_played, 0);
        assert_eq!(stats.top_champions[0].champion_name, "");
        assert_eq!(stats.monthly_performance["2024-11"].win_rate(), None);
    }

    #[test]
    fn test_monthly_win_rate_without_games() {
        assert_eq!(MonthlyRecord { games: 0, wins: 0 }.win_rate(), None);
        assert_eq!(MonthlyRecord { games: 4, wins: 3 }.win_rate(), Some(75.0));
    }
}
