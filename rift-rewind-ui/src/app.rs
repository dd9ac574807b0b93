//! Router and app-wide providers.

use leptos::*;
use leptos_router::*;
use rift_rewind::ClientConfig;

use crate::components::Toast;
use crate::pages::{Compare, Dashboard, Landing, Loading};
use crate::state::global::provide_global_state;

#[component]
pub fn App(config: ClientConfig) -> impl IntoView {
    provide_global_state(config);

    view! {
        <Router>
            <div class="min-h-screen bg-[#0A1428] text-white flex flex-col">
                <main class="flex-1 container mx-auto px-4 py-8">
                    <Routes>
                        <Route path="/" view=Landing />
                        <Route path="/loading" view=Loading />
                        <Route path="/dashboard/:region/:summoner_name" view=Dashboard />
                        <Route path="/compare" view=Compare />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>

                <Toast />
            </div>
        </Router>
    }
}

/// Unknown paths, e.g. a dashboard link missing its summoner segment
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="max-w-md mx-auto mt-24 bg-[#1E2328] border border-[#C89B3C]/40 rounded-2xl p-10 text-center space-y-4">
            <div class="text-5xl">"🗺️"</div>
            <h1 class="text-2xl font-bold text-[#C89B3C]">"Lost in the jungle"</h1>
            <p class="text-gray-400">"Nothing lives at this path. Look up a summoner instead."</p>
            <A
                href=rift_rewind::Route::Landing.to_path()
                class="inline-block px-6 py-3 bg-[#C89B3C] hover:bg-[#F0E6D2] text-[#0A1428] rounded-lg font-semibold"
            >
                "Search a summoner"
            </A>
        </div>
    }
}
