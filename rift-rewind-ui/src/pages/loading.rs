//! Loading Page
//!
//! Runs the lean orchestrator for the query string, shows its progress,
//! then hands the result to the dashboard.

use leptos::*;
use leptos_router::*;
use rift_rewind::{LoadEvent, LoadOutcome, LoadingQuery, MountGuard, Orchestrator};

use crate::api::{mount_client, GlooDelay};
use crate::components::LoadingSteps;
use crate::state::use_global_state;

#[component]
pub fn Loading() -> impl IntoView {
    let state = use_global_state();
    let navigate = use_navigate();
    let query_map = use_query_map();

    let query = query_map.with_untracked(|q| LoadingQuery {
        region: q.get("region").cloned(),
        summoner: q.get("summoner").cloned(),
        demo: q.get("demo").is_some_and(|d| d == "true" || d == "1"),
    });
    let headline = match query.target() {
        Some((_, summoner)) => format!("Rewinding {}'s season", summoner),
        None if query.demo => "Loading the demo".to_string(),
        None => String::new(),
    };

    let step = create_rw_signal(0usize);
    let percent = create_rw_signal(0u8);

    let guard = MountGuard::new();
    let on_unmount = guard.clone();
    on_cleanup(move || on_unmount.cancel());

    let client = mount_client(&state.client_config());
    let match_count = state.match_count();

    spawn_local(async move {
        let outcome = Orchestrator::new(&*client, &GlooDelay, match_count)
            .run(&query, &mut |event| {
                if guard.is_cancelled() {
                    return;
                }
                match event {
                    LoadEvent::Progress { step: s, percent: p } => {
                        step.try_set(s);
                        percent.try_set(p);
                    }
                    LoadEvent::Failed { message } => state.show_error(&message),
                }
            })
            .await;

        if guard.is_cancelled() {
            return;
        }

        match outcome {
            LoadOutcome::Navigate { route, transfer } => {
                let path = route.to_path();
                state.hand_off(route, *transfer);
                navigate(&path, Default::default());
            }
            LoadOutcome::Redirect(route) => navigate(&route.to_path(), Default::default()),
        }
    });

    view! {
        <div class="flex flex-col items-center justify-center min-h-[70vh] space-y-8">
            <h1 class="text-3xl font-bold text-[#C89B3C]">{headline}</h1>
            <LoadingSteps step=step percent=percent />
        </div>
    }
}
