//! Share Card Component
//!
//! The recap card captured by "Download Image".

use leptos::*;
use rift_rewind::format::{kda_label, win_rate_label};
use rift_rewind::share::share_card_champions;
use rift_rewind::PlayerStats;

#[component]
pub fn ShareCard(
    summoner_name: String,
    stats: PlayerStats,
    card_ref: NodeRef<html::Div>,
) -> impl IntoView {
    view! {
        <div
            node_ref=card_ref
            class="bg-gradient-to-br from-[#0A1428] via-[#091428] to-[#1E2328] border-2 border-[#C89B3C] rounded-2xl p-8 max-w-xl mx-auto"
        >
            <div class="text-center mb-6">
                <div class="text-sm uppercase tracking-widest text-[#C89B3C]">"Rift Rewind"</div>
                <h2 class="text-3xl font-bold mt-1">{summoner_name}</h2>
            </div>

            <div class="grid grid-cols-3 gap-4 text-center mb-6">
                <div>
                    <div class="text-2xl font-bold">{stats.total_games}</div>
                    <div class="text-xs text-gray-400">"Games"</div>
                </div>
                <div>
                    <div class="text-2xl font-bold">{win_rate_label(&stats)}</div>
                    <div class="text-xs text-gray-400">"Win Rate"</div>
                </div>
                <div>
                    <div class="text-2xl font-bold">{kda_label(stats.avg_kda)}</div>
                    <div class="text-xs text-gray-400">"KDA"</div>
                </div>
            </div>

            <div class="text-center text-sm">
                <span class="text-gray-400">"Main: "</span>
                <span>{stats.role().to_string()}</span>
                <span class="text-gray-400">" · Champions: "</span>
                <span>{share_card_champions(&stats)}</span>
            </div>

            <div class="text-center text-xs text-gray-500 mt-6">"riftrewind.gg"</div>
        </div>
    }
}
