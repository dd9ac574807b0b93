//! Share Utilities
//!
//! Deterministic share text and social intent URLs. Capturing the share card
//! as an image is done by the dashboard through `html-to-image`; the options
//! and file naming it uses live here so both front-ends agree.

use crate::models::PlayerStats;

pub const TWITTER_INTENT_URL: &str = "https://twitter.com/intent/tweet";

/// Background painted behind the captured share card
pub const EXPORT_BACKGROUND: &str = "#0A1428";
pub const EXPORT_PIXEL_RATIO: f64 = 2.0;
pub const EXPORT_QUALITY: f64 = 1.0;

/// Champions shown in the share text and on the share card
const SHARED_CHAMPIONS: usize = 3;

/// Tweet body for a player's recap
pub fn format_stats_for_share(stats: &PlayerStats, summoner_name: &str) -> String {
    let champions = stats.top_champion_names(SHARED_CHAMPIONS);
    let top_picks = if champions.is_empty() {
        "Unknown".to_string()
    } else {
        champions.join(", ")
    };

    format!(
        "🎮 {name}'s Rift Rewind 2024/25!\n\
         \n\
         📊 Stats:\n\
         • {games} games played\n\
         • {win_rate}% win rate\n\
         • {kda} KDA\n\
         • Top picks: {top_picks}\n\
         • Role: {role}\n\
         \n\
         Check out yours at [Your URL]!\n\
         #RiftRewind #LeagueOfLegends",
        name = summoner_name,
        games = stats.total_games,
        win_rate = stats.win_rate,
        kda = stats.avg_kda,
        top_picks = top_picks,
        role = stats.role(),
    )
}

/// Champion line on the share card
pub fn share_card_champions(stats: &PlayerStats) -> String {
    let champions = stats.top_champion_names(SHARED_CHAMPIONS);
    if champions.is_empty() {
        "Various champions".to_string()
    } else {
        champions.join(", ")
    }
}

/// Twitter/X compose URL prefilled with `text` and a link back to `url`
pub fn twitter_intent_url(text: &str, url: &str) -> String {
    format!(
        "{}?text={}&url={}",
        TWITTER_INTENT_URL,
        urlencoding::encode(text),
        urlencoding::encode(url)
    )
}

/// File name for the downloaded share card
pub fn export_filename(summoner_name: &str) -> String {
    format!("{}-recap.png", summoner_name)
}
