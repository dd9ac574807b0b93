//! Landing Page
//!
//! Summoner search, demo entry point and a link to the compare page.

use leptos::*;
use leptos_router::*;
use rift_rewind::config::DEFAULT_REGION;
use rift_rewind::routes::submit_lookup;
use rift_rewind::{Region, RiftApi, Route};

use crate::api::mount_client;
use crate::pages::RegionSelect;
use crate::state::use_global_state;

#[component]
pub fn Landing() -> impl IntoView {
    let state = use_global_state();
    let navigate = use_navigate();

    let (regions, set_regions) = create_signal(Region::fallback_list());
    let region = create_rw_signal(DEFAULT_REGION.to_string());
    let summoner = create_rw_signal(String::new());

    // Region list, falling back to the built-in list
    let client = mount_client(&state.client_config());
    spawn_local(async move {
        match client.get_regions().await {
            Ok(list) if !list.is_empty() => set_regions.set(list),
            Ok(_) => {}
            Err(e) => {
                web_sys::console::warn_1(&format!("Failed to fetch regions: {}", e).into());
            }
        }
    });

    let search = {
        let navigate = navigate.clone();
        move || match submit_lookup(&region.get_untracked(), &summoner.get_untracked()) {
            Ok(route) => navigate(&route.to_path(), Default::default()),
            Err(e) => state.show_error(&e.user_message()),
        }
    };
    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        search();
    };

    let on_demo = move |_| navigate(&Route::demo().to_path(), Default::default());

    view! {
        <div class="flex flex-col items-center justify-center min-h-[80vh] text-center space-y-10">
            <div>
                <h1 class="text-5xl md:text-6xl font-bold text-[#C89B3C]">"Rift Rewind"</h1>
                <p class="text-gray-400 mt-4 text-lg">"Your League of Legends season, rewound by AI"</p>
            </div>

            <form class="w-full max-w-xl flex flex-col md:flex-row gap-3" on:submit=on_submit>
                <RegionSelect regions=regions region=region />
                <input
                    type="text"
                    class="flex-1 bg-gray-800 border border-gray-600 rounded-lg px-4 py-3 focus:outline-none focus:border-[#C89B3C]"
                    placeholder="Summoner name"
                    prop:value=move || summoner.get()
                    on:input=move |ev| summoner.set(event_target_value(&ev))
                />
                <button
                    type="submit"
                    class="px-6 py-3 bg-[#C89B3C] hover:bg-[#F0E6D2] text-[#0A1428] rounded-lg font-semibold transition-colors"
                >
                    "Rewind"
                </button>
            </form>

            <div class="flex items-center space-x-6 text-sm">
                <button class="text-gray-400 hover:text-white underline" on:click=on_demo>
                    "Try the demo"
                </button>
                <A href=Route::Compare.to_path() class="text-gray-400 hover:text-white underline">
                    "Compare two players"
                </A>
            </div>
        </div>
    }
}
