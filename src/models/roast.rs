//! Roast text
//!
//! The backend has shipped several shapes for the roast payload over time.
//! [`RoastResult::from_response`] accepts all of them and keeps only the
//! text; when none can be found, a roast is derived from the player's stats.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::PlayerStats;

/// Separator between individual roast lines
const ROAST_SEPARATOR: &str = "\n\n";

const NO_STATS_ROAST: &str = "You played League. That's roast-worthy enough.";
const GENERIC_ROAST: &str =
    "You're so good, I can't even roast you. Just kidding, you're average at best. 😏";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoastResult {
    /// Extracted roast text, `None` when the payload carried nothing usable
    pub text: Option<String>,
}

impl RoastResult {
    /// Extract the roast text from an `/api/roast` body.
    ///
    /// Accepted under the `roast` key: `{"roasts": [..]}`, a bare string,
    /// `{"content": ".."}` and `{"roast": ".."}`. A body without the `roast`
    /// key is inspected directly.
    pub fn from_response(value: &Value) -> Self {
        let payload = value.get("roast").unwrap_or(value);
        let text = extract_text(payload);
        if text.is_none() {
            tracing::debug!("Roast payload carried no text");
        }
        Self { text }
    }

    /// The roast to display, generated from `stats` when nothing came back
    pub fn text_or_fallback(&self, stats: Option<&PlayerStats>) -> String {
        match &self.text {
            Some(text) => text.clone(),
            None => fallback_roast(stats),
        }
    }
}

fn extract_text(payload: &Value) -> Option<String> {
    match payload {
        Value::String(s) => present(s),
        Value::Array(lines) => {
            let lines: Vec<&str> = lines
                .iter()
                .filter_map(Value::as_str)
                .map(str::trim)
                .filter(|l| !l.is_empty())
                .collect();
            (!lines.is_empty()).then(|| lines.join(ROAST_SEPARATOR))
        }
        Value::Object(map) => ["roasts", "roast", "content"]
            .iter()
            .filter_map(|key| map.get(*key))
            .find_map(extract_text),
        _ => None,
    }
}

fn present(s: &str) -> Option<String> {
    let s = s.trim();
    (!s.is_empty()).then(|| s.to_string())
}

/// Stats-derived roast used when the backend produced none
pub fn fallback_roast(stats: Option<&PlayerStats>) -> String {
    let Some(stats) = stats else {
        return NO_STATS_ROAST.to_string();
    };

    let mut roasts = Vec::new();

    if stats.avg_deaths > 7.0 {
        roasts.push(format!(
            "With {} deaths per game, you're feeding more than a soup kitchen! 🍲",
            stats.avg_deaths
        ));
    }
    if stats.win_rate < 45.0 {
        roasts.push(format!(
            "{}% win rate? Even a coin flip would perform better! 🪙",
            stats.win_rate
        ));
    }
    if stats.avg_kda < 2.0 {
        roasts.push(format!(
            "Your KDA is {}. My grandmother has a better KDA in Candy Crush! 👵",
            stats.avg_kda
        ));
    }
    if stats.recent_trend.as_deref() == Some("Declining") {
        roasts.push("Your recent performance is declining faster than your LP! 📉".to_string());
    }
    if stats.total_games > 500 {
        roasts.push(format!(
            "{} games? Touch grass! Go outside! See the sun! ☀️",
            stats.total_games
        ));
    }

    if roasts.is_empty() {
        roasts.push(GENERIC_ROAST.to_string());
    }

    roasts.join(ROAST_SEPARATOR)
}

/// One bar of the roast intensity meter
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntensityLevel {
    pub label: &'static str,
    /// 0-100
    pub level: u8,
}

/// Bars for the roast intensity meter; at most one is lit
pub fn intensity_meter(stats: &PlayerStats) -> [IntensityLevel; 4] {
    let wr = stats.win_rate;
    let kda = stats.avg_kda;
    let lit = |on: bool, level: u8| if on { level } else { 0 };

    [
        IntensityLevel { label: "Mild", level: lit(wr > 50.0, 20) },
        IntensityLevel { label: "Medium", level: lit(wr < 50.0 && wr > 45.0, 50) },
        IntensityLevel { label: "Spicy", level: lit(wr < 45.0 && kda > 2.0, 70) },
        IntensityLevel { label: "NUCLEAR 🔥", level: lit(wr < 45.0 && kda < 2.0, 100) },
    ]
}
