//! Stats Overview Component
//!
//! Headline cards, secondary metrics, epic moments and the playstyle
//! profile for one player.

use leptos::*;
use rift_rewind::format;
use rift_rewind::{PlayerResponse, PlayerStats};

#[component]
pub fn StatsOverview(response: PlayerResponse) -> impl IntoView {
    let stats = response.stats;
    let role_shares = format::role_shares(&stats);

    view! {
        <div class="space-y-8">
            <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                <StatCard label="Total Games" value=stats.total_games.to_string() icon="🎮" />
                <StatCard
                    label="Win Rate"
                    value=format::win_rate_label(&stats)
                    icon="🏆"
                    color=format::win_rate_color(stats.win_rate)
                />
                <StatCard
                    label="Average KDA"
                    value=format::kda_label(stats.avg_kda)
                    icon="⚔️"
                    color=format::kda_color(stats.avg_kda)
                />
                <StatCard label="Most Played" value=stats.role().to_string() icon="🧭" />
            </div>

            <div class="grid grid-cols-1 md:grid-cols-3 gap-4 text-sm">
                <div class="bg-gray-800 rounded-lg p-4">
                    <span class="text-gray-400">"Recent Trend "</span>
                    <span>
                        {format::trend_emoji(stats.recent_trend.as_deref())}" "
                        {stats.recent_trend.clone().unwrap_or_else(|| "Stable".to_string())}
                    </span>
                </div>
                <div class="bg-gray-800 rounded-lg p-4">
                    <span class="text-gray-400">"Time Played "</span>
                    <span>
                        "~"{format::estimate_time_played(stats.total_games, format::DEFAULT_GAME_MINUTES)}
                    </span>
                </div>
                <div class="bg-gray-800 rounded-lg p-4">
                    <span class="text-gray-400">"Avg Game "</span>
                    <span>{format::format_duration(stats.avg_game_duration)}</span>
                </div>
            </div>

            <div class="grid grid-cols-2 md:grid-cols-5 gap-4">
                {format::secondary_metrics(&stats).into_iter().map(|(label, value)| view! {
                    <div class="bg-gray-800/70 rounded-lg p-3 text-center">
                        <div class="text-lg font-semibold">{value}</div>
                        <div class="text-xs text-gray-400">{label}</div>
                    </div>
                }).collect_view()}
            </div>

            <EpicMoments stats=stats.clone() />

            <div class="grid md:grid-cols-2 gap-6">
                <PlaystyleProfile stats=stats.clone() />

                {(!role_shares.is_empty()).then(|| view! {
                    <div class="bg-gray-800 rounded-xl p-6">
                        <h3 class="font-semibold mb-4">"Role Distribution"</h3>
                        <div class="space-y-2">
                            {role_shares.into_iter().map(|(role, games, share)| view! {
                                <div class="flex items-center space-x-3 text-sm">
                                    <span class="w-20">{role}</span>
                                    <div class="flex-1 h-2 bg-gray-700 rounded-full overflow-hidden">
                                        <div class="h-full bg-blue-500" style=format!("width: {}%", share) />
                                    </div>
                                    <span class="w-16 text-right text-gray-400">{format!("{} games", games)}</span>
                                </div>
                            }).collect_view()}
                        </div>
                    </div>
                })}
            </div>
        </div>
    }
}

#[component]
fn StatCard(
    label: &'static str,
    value: String,
    icon: &'static str,
    #[prop(default = "text-white")]
    color: &'static str,
) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-xl p-5">
            <div class="text-2xl mb-2">{icon}</div>
            <div class=format!("text-2xl font-bold {}", color)>{value}</div>
            <div class="text-sm text-gray-400">{label}</div>
        </div>
    }
}

#[component]
fn EpicMoments(stats: PlayerStats) -> impl IntoView {
    if !stats.has_epic_moments() {
        return view! {}.into_view();
    }

    let counts = stats.achievement_counts();
    let best_kda = stats.best_game_kda.filter(|k| *k > 10.0);

    view! {
        <div class="bg-gradient-to-r from-[#C89B3C]/20 to-transparent rounded-xl p-6">
            <h3 class="font-semibold mb-4">"🌟 Epic Moments"</h3>
            <div class="flex flex-wrap gap-4">
                {(counts.pentakills > 0).then(|| view! {
                    <div class="px-4 py-2 bg-gray-800 rounded-lg">"⭐ "{counts.pentakills}" Pentakills"</div>
                })}
                {(counts.quadrakills > 0).then(|| view! {
                    <div class="px-4 py-2 bg-gray-800 rounded-lg">"💥 "{counts.quadrakills}" Quadrakills"</div>
                })}
                {best_kda.map(|kda| view! {
                    <div class="px-4 py-2 bg-gray-800 rounded-lg">{format!("🔥 {:.1} Best KDA", kda)}</div>
                })}
            </div>
        </div>
    }
    .into_view()
}

#[component]
fn PlaystyleProfile(stats: PlayerStats) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-xl p-6">
            <h3 class="font-semibold mb-4">"Playstyle Profile"</h3>
            <div class="space-y-3">
                {format::playstyle_profile(&stats).into_iter().map(|bar| view! {
                    <div>
                        <div class="flex justify-between text-sm mb-1">
                            <span>{bar.icon}" "{bar.name}</span>
                            <span class="text-gray-400">{format!("{}%", bar.value)}</span>
                        </div>
                        <div class="h-2 bg-gray-700 rounded-full overflow-hidden">
                            <div
                                class=format!("h-full rounded-full {}", bar.color)
                                style=format!("width: {}%", bar.value)
                            />
                        </div>
                    </div>
                }).collect_view()}
            </div>
        </div>
    }
}
