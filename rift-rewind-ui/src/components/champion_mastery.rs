//! Champion Pool Component

use leptos::*;
use rift_rewind::format::{kda_color, kda_label, win_rate_color};
use rift_rewind::ChampionStats;

/// Top champions in backend order
#[component]
pub fn ChampionMastery(champions: Vec<ChampionStats>) -> impl IntoView {
    if champions.is_empty() {
        return view! {
            <div class="bg-gray-800 rounded-xl p-6 text-center text-gray-400">
                "No champion data available"
            </div>
        }
        .into_view();
    }

    view! {
        <div class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"🏅 Champion Pool"</h2>
            <div class="space-y-3">
                {champions.into_iter().enumerate().map(|(rank, champ)| view! {
                    <div class="flex items-center justify-between bg-gray-900/50 rounded-lg px-4 py-3">
                        <div class="flex items-center space-x-4">
                            <span class="text-gray-500 w-6">{format!("#{}", rank + 1)}</span>
                            <div>
                                <div class="font-semibold">{champ.champion_name.clone()}</div>
                                <div class="text-xs text-gray-400">
                                    {format!("{} games · {}W {}L", champ.games_played, champ.wins, champ.losses)}
                                </div>
                            </div>
                        </div>
                        <div class="flex items-center space-x-6 text-sm">
                            <span class=win_rate_color(champ.win_rate)>{format!("{}% WR", champ.win_rate)}</span>
                            <span class=kda_color(champ.avg_kda)>{format!("{} KDA", kda_label(champ.avg_kda))}</span>
                        </div>
                    </div>
                }).collect_view()}
            </div>
        </div>
    }
    .into_view()
}
