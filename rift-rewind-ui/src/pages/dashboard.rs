//! Dashboard Page
//!
//! Tabs over the stats handed off by the loading page. Opened directly
//! (bookmark, reload) it fetches the stats itself.

use leptos::*;
use leptos_router::*;
use rift_rewind::format::monthly_series;
use rift_rewind::share::{format_stats_for_share, twitter_intent_url};
use rift_rewind::{
    ClientError, DashboardTransfer, FetchRequest, RiftApi, Route, SectionKind, TabCache, TabId,
};

use crate::api::mount_client;
use crate::components::{
    AiInsights, ChampionMastery, HiddenGems, Loading, PerformanceChart, Personality, RoastPanel,
    ShareCard, StatsOverview, TabBar, TabPanel,
};
use crate::export::{download_png, open_in_new_tab};
use crate::state::use_global_state;

#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_global_state();
    let navigate = use_navigate();
    let location = use_location();

    // The raw path, decoded the same way the loading page encoded it
    let (region, summoner_name) = match Route::parse(&location.pathname.get_untracked()) {
        Ok(Route::Dashboard { region, summoner_name }) => (region, summoner_name),
        _ => {
            let navigate = navigate.clone();
            request_animation_frame(move || navigate(&Route::Landing.to_path(), Default::default()));
            return view! { <Loading /> }.into_view();
        }
    };
    let route = Route::dashboard(&region, &summoner_name);
    let transfer = create_rw_signal(state.take_transfer(&route));

    if transfer.with_untracked(Option::is_none) {
        let client = mount_client(&state.client_config());
        let match_count = state.match_count();
        let (region, summoner_name) = (region.clone(), summoner_name.clone());

        spawn_local(async move {
            match client
                .get_player_stats(&region, &summoner_name, match_count)
                .await
            {
                Ok(stats) => {
                    transfer.try_set(Some(DashboardTransfer::new(stats)));
                }
                Err(ClientError::Cancelled) => {}
                Err(e) => {
                    state.show_error(&e.user_message());
                    navigate(&Route::Landing.to_path(), Default::default());
                }
            }
        });
    }

    (move || {
        transfer.with(|t| match t {
            None => view! { <Loading message="Fetching match history..." /> }.into_view(),
            Some(t) => view! {
                <DashboardView
                    region=region.clone()
                    summoner_name=summoner_name.clone()
                    transfer=t.clone()
                />
            }
            .into_view(),
        })
    })
    .into_view()
}

#[component]
fn DashboardView(region: String, summoner_name: String, transfer: DashboardTransfer) -> impl IntoView {
    let state = use_global_state();
    let cache = create_rw_signal(TabCache::default());
    let share_ref = create_node_ref::<html::Div>();

    let match_count = state.match_count();
    let request = {
        let (region, summoner_name) = (region.clone(), summoner_name.clone());
        move |kind| FetchRequest::new(kind, &region, &summoner_name, match_count)
    };
    let stats = transfer.stats.stats.clone();
    let level = transfer.stats.summoner.level;
    let transfer = store_value(transfer);

    let on_download = {
        let name = summoner_name.clone();
        move |_| {
            let name = name.clone();
            spawn_local(async move {
                let Some(node) = share_ref.get_untracked() else {
                    return;
                };
                match download_png(&node, &name).await {
                    Ok(()) => state.show_success("Image downloaded!"),
                    Err(e) => state.show_error(&e),
                }
            });
        }
    };

    let on_share = {
        let text = format_stats_for_share(&stats, &summoner_name);
        move |_| {
            let url = web_sys::window()
                .and_then(|w| w.location().href().ok())
                .unwrap_or_default();
            if let Err(e) = open_in_new_tab(&twitter_intent_url(&text, &url)) {
                state.show_error(&e);
            }
        }
    };

    let overview = {
        let summoner_name = summoner_name.clone();
        move || {
            let response = transfer.with_value(|t| t.stats.clone());
            let series = monthly_series(&response.stats);
            let stats = response.stats.clone();
            view! {
                <div class="space-y-8">
                    <StatsOverview response=response />
                    <PerformanceChart series=series />
                    <ShareCard summoner_name=summoner_name.clone() stats=stats card_ref=share_ref />
                </div>
            }
        }
    };

    let insights = {
        let request = request.clone();
        move || {
            let (insights, gems, personality) = transfer.with_value(|t| {
                (t.insights.clone(), t.hidden_gems.clone(), t.personality.clone())
            });
            view! {
                <div class="space-y-8">
                    <AiInsights request=request(SectionKind::Insights) preloaded=insights />
                    <HiddenGems request=request(SectionKind::HiddenGems) preloaded=gems />
                    <Personality request=request(SectionKind::Personality) preloaded=personality />
                </div>
            }
        }
    };

    let special = move || {
        let (roast, stats) = transfer.with_value(|t| (t.roast.clone(), t.stats.stats.clone()));
        view! {
            <div class="space-y-8">
                <RoastPanel request=request(SectionKind::Roast) stats=stats preloaded=roast />
                <div class="text-center">
                    <A
                        href=Route::Compare.to_path()
                        class="inline-block px-6 py-3 bg-gray-800 hover:bg-gray-700 rounded-lg transition-colors"
                    >
                        "⚔️ Compare with a friend"
                    </A>
                </div>
            </div>
        }
    };

    let champions = move || {
        let champions = transfer.with_value(|t| t.stats.stats.top_champions.clone());
        view! { <ChampionMastery champions=champions /> }
    };

    view! {
        <div class="space-y-6">
            <div class="flex flex-col md:flex-row md:items-center md:justify-between gap-4">
                <div>
                    <h1 class="text-3xl font-bold">{summoner_name.clone()}</h1>
                    <p class="text-gray-400">
                        {region.to_uppercase()}
                        {level.map(|l| format!(" · Level {}", l))}
                        {transfer.with_value(|t| t.demo).then_some(" · Demo")}
                    </p>
                </div>
                <div class="flex space-x-3">
                    <button
                        class="px-4 py-2 bg-gray-800 hover:bg-gray-700 rounded-lg text-sm transition-colors"
                        on:click=on_download
                    >
                        "📸 Download Image"
                    </button>
                    <button
                        class="px-4 py-2 bg-[#1DA1F2] hover:bg-[#1a8cd8] rounded-lg text-sm transition-colors"
                        on:click=on_share
                    >
                        "🐦 Share"
                    </button>
                </div>
            </div>

            <TabBar cache=cache />

            <TabPanel id=TabId::Overview cache=cache>{overview.clone()}</TabPanel>
            <TabPanel id=TabId::Insights cache=cache>{insights.clone()}</TabPanel>
            <TabPanel id=TabId::Champions cache=cache>{champions}</TabPanel>
            <TabPanel id=TabId::Special cache=cache>{special.clone()}</TabPanel>
        </div>
    }
}
