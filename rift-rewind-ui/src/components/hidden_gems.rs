//! Hidden Gems Widget

use leptos::*;
use rift_rewind::models::Gem;
use rift_rewind::{FetchRequest, HiddenGemsResult};

use crate::components::SectionPanel;
use crate::state::use_section;

#[component]
pub fn HiddenGems(
    request: FetchRequest,
    preloaded: Option<HiddenGemsResult>,
) -> impl IntoView {
    let handle = use_section::<HiddenGemsResult>(request, preloaded);

    view! {
        <section class="bg-gray-900/60 border border-purple-500/30 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"💎 Hidden Gems"</h2>
            <SectionPanel handle=handle render=gems_view />
        </section>
    }
}

fn gems_view(result: HiddenGemsResult) -> impl IntoView {
    if result.is_empty() {
        return view! {
            <p class="text-gray-400 text-center py-6">"No hidden gems discovered yet"</p>
        }
        .into_view();
    }

    view! {
        <div class="space-y-4">
            {result.is_fallback.then(|| view! {
                <p class="text-xs text-gray-500">"Sample discoveries shown while your data is analysed"</p>
            })}
            <div class="grid md:grid-cols-2 gap-4">
                {result.gems.into_iter().map(|gem| view! { <GemCard gem=gem /> }).collect_view()}
            </div>
        </div>
    }
    .into_view()
}

#[component]
fn GemCard(gem: Gem) -> impl IntoView {
    let stars = "★".repeat(gem.rarity as usize);

    view! {
        <div class="bg-gray-800 rounded-lg p-4">
            <div class="flex items-center justify-between mb-2">
                <span class=format!(
                    "w-10 h-10 rounded-lg bg-gradient-to-br {} flex items-center justify-center text-2xl",
                    gem.color
                )>
                    {gem.icon}
                </span>
                <span class="text-yellow-400 text-sm" title="Rarity">{stars}</span>
            </div>
            <h3 class="font-semibold">{gem.title}</h3>
            <p class="text-gray-400 text-sm mt-1">{gem.description}</p>
        </div>
    }
}
