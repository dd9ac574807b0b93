//! Roast Widget
//!
//! Never fetches on mount; the user has to ask for it.

use leptos::*;
use rift_rewind::models::roast::intensity_meter;
use rift_rewind::{FetchRequest, PlayerStats, RoastResult};

use crate::components::SectionPanel;
use crate::export::copy_to_clipboard;
use crate::state::{use_global_state, use_section};

#[component]
pub fn RoastPanel(
    request: FetchRequest,
    stats: PlayerStats,
    preloaded: Option<RoastResult>,
) -> impl IntoView {
    let handle = use_section::<RoastResult>(request, preloaded);
    let (visible, set_visible) = create_signal(true);
    let stats = store_value(stats);

    let render = move |roast: RoastResult| {
        let text = stats.with_value(|s| roast.text_or_fallback(Some(s)));
        view! { <RoastText text=text /> }
    };

    view! {
        <section class="bg-gray-900/60 border border-red-500/30 rounded-xl p-6 space-y-6">
            <div class="flex items-center justify-between">
                <h2 class="text-xl font-semibold">"⚠️ Roast Zone ⚠️"</h2>
                <button
                    class="text-sm text-gray-400 hover:text-white"
                    on:click=move |_| set_visible.update(|v| *v = !*v)
                >
                    {move || if visible.get() { "Hide" } else { "Show" }}
                </button>
            </div>

            <Show when=move || visible.get()>
                <SectionPanel handle=handle render=render />
            </Show>

            <IntensityMeter stats=stats.get_value() />
        </section>
    }
}

#[component]
fn RoastText(text: String) -> impl IntoView {
    let state = use_global_state();
    let copied = text.clone();

    let on_copy = move |_| {
        let text = copied.clone();
        spawn_local(async move {
            match copy_to_clipboard(&text).await {
                Ok(()) => state.show_success("Roast copied to clipboard!"),
                Err(e) => state.show_error(&e),
            }
        });
    };

    view! {
        <div class="space-y-4">
            <p class="text-gray-200 leading-relaxed whitespace-pre-line">{text}</p>
            <button
                class="px-4 py-2 bg-red-600 hover:bg-red-700 rounded-lg text-sm transition-colors"
                on:click=on_copy
            >
                "📋 Copy Roast"
            </button>
        </div>
    }
}

#[component]
fn IntensityMeter(stats: PlayerStats) -> impl IntoView {
    view! {
        <div>
            <h3 class="text-sm uppercase tracking-wide text-gray-400 mb-3">"Roast Intensity Meter"</h3>
            <div class="space-y-2">
                {intensity_meter(&stats).into_iter().map(|level| view! {
                    <div class="flex items-center space-x-3">
                        <span class="w-28 text-sm">{level.label}</span>
                        <div class="flex-1 h-2 bg-gray-700 rounded-full overflow-hidden">
                            <div
                                class="h-full bg-gradient-to-r from-yellow-500 to-red-600"
                                style=format!("width: {}%", level.level)
                            />
                        </div>
                    </div>
                }).collect_view()}
            </div>
        </div>
    }
}
