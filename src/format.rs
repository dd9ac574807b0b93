//! Formatter Utilities
//!
//! Pure functions mapping already-computed stats to display strings, color
//! classes and emoji. Every division is guarded: a zero denominator renders
//! `0%` or `N/A`, never `NaN`.

use chrono::{DateTime, NaiveDate, Utc};

use crate::models::PlayerStats;

/// Shown for metrics that cannot be computed
pub const NOT_AVAILABLE: &str = "N/A";

/// Default game length assumed when estimating time played, in minutes
pub const DEFAULT_GAME_MINUTES: u64 = 30;

// ============ Colors & Emoji ============

pub fn kda_color(kda: f64) -> &'static str {
    if kda >= 5.0 {
        "text-green-400"
    } else if kda >= 3.0 {
        "text-blue-400"
    } else if kda >= 2.0 {
        "text-yellow-400"
    } else {
        "text-red-400"
    }
}

pub fn win_rate_color(win_rate: f64) -> &'static str {
    if win_rate >= 55.0 {
        "text-green-400"
    } else if win_rate >= 50.0 {
        "text-blue-400"
    } else if win_rate >= 45.0 {
        "text-yellow-400"
    } else {
        "text-red-400"
    }
}

/// Color class for a ranked tier name, case-insensitive
pub fn rank_color(tier: &str) -> &'static str {
    match tier.trim().to_ascii_uppercase().as_str() {
        "IRON" => "text-gray-500",
        "BRONZE" => "text-league-bronze",
        "SILVER" => "text-league-silver",
        "GOLD" => "text-league-gold",
        "PLATINUM" => "text-league-platinum",
        "DIAMOND" => "text-league-diamond",
        "MASTER" => "text-league-master",
        "GRANDMASTER" => "text-league-grandmaster",
        "CHALLENGER" => "text-league-challenger",
        _ => "text-gray-400",
    }
}

pub fn trend_emoji(trend: Option<&str>) -> &'static str {
    match trend {
        Some("Improving") => "📈",
        Some("Declining") => "📉",
        _ => "➡️",
    }
}

// ============ Numbers, Dates & Durations ============

/// `1234567.5` -> `1,234,567.5`, at most three fraction digits
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return NOT_AVAILABLE.to_string();
    }

    let fixed = format!("{:.3}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if value < 0.0 && (int_part != "0" || !frac_part.is_empty()) {
        "-"
    } else {
        ""
    };

    if frac_part.is_empty() {
        format!("{}{}", sign, grouped)
    } else {
        format!("{}{}.{}", sign, grouped, frac_part)
    }
}

/// Unix milliseconds -> `Mar 5, 2024`
pub fn format_date(timestamp_ms: i64) -> Option<String> {
    DateTime::<Utc>::from_timestamp_millis(timestamp_ms).map(|dt| dt.format("%b %-d, %Y").to_string())
}

/// `YYYY-MM` month key -> `Mar 24`; unparseable keys pass through
pub fn month_label(key: &str) -> String {
    key.split_once('-')
        .and_then(|(year, month)| {
            let year = year.parse().ok()?;
            let month = month.parse().ok()?;
            NaiveDate::from_ymd_opt(year, month, 1)
        })
        .map(|date| date.format("%b %y").to_string())
        .unwrap_or_else(|| key.to_string())
}

/// Rough time played: `2d 5h`, `7h 30m` or `45m`
pub fn estimate_time_played(games: u32, avg_game_minutes: u64) -> String {
    let minutes = games as u64 * avg_game_minutes;
    let hours = minutes / 60;
    let days = hours / 24;

    if days > 0 {
        format!("{}d {}h", days, hours % 24)
    } else if hours > 0 {
        format!("{}h {}m", hours, minutes % 60)
    } else {
        format!("{}m", minutes)
    }
}

/// Seconds -> `m:ss`
pub fn format_duration(seconds: Option<f64>) -> String {
    match seconds.filter(|s| s.is_finite() && *s > 0.0) {
        Some(s) => {
            let total = s.floor() as u64;
            format!("{}:{:02}", total / 60, total % 60)
        }
        None => NOT_AVAILABLE.to_string(),
    }
}

/// `18500` -> `18.5k`
pub fn format_thousands(value: Option<f64>) -> String {
    match present(value) {
        Some(v) => format!("{:.1}k", v / 1000.0),
        None => NOT_AVAILABLE.to_string(),
    }
}

fn present(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite() && *v != 0.0)
}

fn minutes(stats: &PlayerStats) -> Option<f64> {
    stats
        .avg_game_duration
        .filter(|d| d.is_finite() && *d > 0.0)
        .map(|d| d / 60.0)
}

// ============ Stat Labels ============

/// Win rate label; `0%` whenever no games were played
pub fn win_rate_label(stats: &PlayerStats) -> String {
    if stats.total_games == 0 || !stats.win_rate.is_finite() {
        "0%".to_string()
    } else {
        format!("{}%", stats.win_rate)
    }
}

/// Win rate computed from raw counts, `None` without games
pub fn win_rate(wins: u32, games: u32) -> Option<f64> {
    (games > 0).then(|| wins as f64 / games as f64 * 100.0)
}

pub fn kda_label(kda: f64) -> String {
    if kda.is_finite() {
        format!("{:.2}", kda)
    } else {
        "0.00".to_string()
    }
}

pub fn cs_per_minute(stats: &PlayerStats) -> String {
    match (present(stats.avg_cs), minutes(stats)) {
        (None, _) => "0.0".to_string(),
        (Some(cs), Some(m)) => format!("{:.1}", cs / m),
        (Some(_), None) => NOT_AVAILABLE.to_string(),
    }
}

pub fn gold_per_minute(stats: &PlayerStats) -> String {
    match (present(stats.avg_gold), minutes(stats)) {
        (None, _) => "0".to_string(),
        (Some(gold), Some(m)) => format!("{:.0}", gold / m),
        (Some(_), None) => NOT_AVAILABLE.to_string(),
    }
}

pub fn vision_score_label(stats: &PlayerStats) -> String {
    present(stats.avg_vision_score)
        .map(|v| format!("{:.1}", v))
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

pub fn kill_participation_label(stats: &PlayerStats) -> String {
    present(stats.avg_kill_participation)
        .map(|v| format!("{:.1}%", v))
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

pub fn damage_per_gold(stats: &PlayerStats) -> String {
    match (present(stats.avg_damage_dealt), present(stats.avg_gold)) {
        (Some(damage), Some(gold)) => format!("{:.2}", damage / gold),
        _ => NOT_AVAILABLE.to_string(),
    }
}

/// Label/value pairs for the secondary metrics row
pub fn secondary_metrics(stats: &PlayerStats) -> Vec<(&'static str, String)> {
    vec![
        ("Avg CS/min", cs_per_minute(stats)),
        ("Vision Score", vision_score_label(stats)),
        ("Gold/min", gold_per_minute(stats)),
        ("Damage Dealt", format_thousands(stats.avg_damage_dealt)),
        ("Kill Participation", kill_participation_label(stats)),
    ]
}

// ============ Derived Profiles & Series ============

#[derive(Debug, Clone, PartialEq)]
pub struct ProfileBar {
    pub name: &'static str,
    /// 0-100
    pub value: u8,
    pub color: &'static str,
    pub icon: &'static str,
}

/// Playstyle bars scaled from per-game averages
pub fn playstyle_profile(stats: &PlayerStats) -> Vec<ProfileBar> {
    let scale = |v: f64| -> u8 {
        if v.is_finite() {
            v.clamp(0.0, 100.0).round() as u8
        } else {
            0
        }
    };

    let farming = match (present(stats.avg_cs), minutes(stats)) {
        (Some(cs), Some(m)) => cs / m / 7.0 * 100.0,
        _ => 0.0,
    };
    let vision = present(stats.avg_vision_score).map_or(0.0, |v| v / 50.0 * 100.0);

    let bar = |name, value, color, icon| ProfileBar {
        name,
        value: scale(value),
        color,
        icon,
    };

    vec![
        bar("Aggression", stats.avg_kills / 8.0 * 100.0, "bg-red-500", "⚔️"),
        bar("Teamwork", stats.avg_assists / 10.0 * 100.0, "bg-blue-500", "🤝"),
        bar("Survival", 100.0 - stats.avg_deaths / 6.0 * 100.0, "bg-green-500", "🛡️"),
        bar("Farming", farming, "bg-yellow-500", "🌾"),
        bar("Vision", vision, "bg-cyan-500", "👁️"),
    ]
}

#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyPoint {
    pub month: String,
    pub label: String,
    pub win_rate: f64,
    pub games: u32,
}

/// Monthly win-rate series in chronological order
pub fn monthly_series(stats: &PlayerStats) -> Vec<MonthlyPoint> {
    stats
        .monthly_performance
        .iter()
        .map(|(month, record)| MonthlyPoint {
            month: month.clone(),
            label: month_label(month),
            win_rate: record.win_rate().map_or(0.0, |wr| (wr * 10.0).round() / 10.0),
            games: record.games,
        })
        .collect()
}

/// Roles with their share of games, largest first
pub fn role_shares(stats: &PlayerStats) -> Vec<(String, u32, f64)> {
    let total: u32 = stats.role_distribution.values().sum();
    let mut shares: Vec<(String, u32, f64)> = stats
        .role_distribution
        .iter()
        .filter(|(_, count)| **count > 0)
        .map(|(role, count)| {
            let share = win_rate(*count, total).unwrap_or(0.0);
            (role.clone(), *count, share)
        })
        .collect();
    shares.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    shares
}
