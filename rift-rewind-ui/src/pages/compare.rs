//! Compare Page
//!
//! Two summoners side by side with the duo synergy narrative.

use leptos::*;
use leptos_router::*;
use rift_rewind::compare::{self as flow, CompareForm, COMPARE_SUCCESS_MESSAGE};
use rift_rewind::config::DEFAULT_REGION;
use rift_rewind::{ComparisonResult, Region, Route};

use crate::api::mount_client;
use crate::components::Loading;
use crate::pages::RegionSelect;
use crate::state::use_global_state;

#[component]
pub fn Compare() -> impl IntoView {
    let state = use_global_state();
    let client = store_value(mount_client(&state.client_config()));
    let match_count = state.match_count();

    let (regions, _) = create_signal(Region::fallback_list());
    let player1 = create_rw_signal(String::new());
    let player2 = create_rw_signal(String::new());
    let region = create_rw_signal(DEFAULT_REGION.to_string());
    let submitting = create_rw_signal(false);
    let result = create_rw_signal(None::<(CompareForm, ComparisonResult)>);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }

        let form = CompareForm::new(
            &player1.get_untracked(),
            &player2.get_untracked(),
            &region.get_untracked(),
        );
        let form = match form.validate() {
            Ok(form) => form,
            Err(e) => {
                state.show_error(&flow::failure_message(&e));
                return;
            }
        };

        submitting.set(true);
        let client = client.get_value();
        spawn_local(async move {
            match flow::compare(&*client, &form, match_count).await {
                Ok(comparison) => {
                    state.show_success(COMPARE_SUCCESS_MESSAGE);
                    result.try_set(Some((form, comparison)));
                }
                Err(e) => state.show_error(&flow::failure_message(&e)),
            }
            submitting.try_set(false);
        });
    };

    view! {
        <div class="space-y-8 max-w-4xl mx-auto">
            <div class="flex items-center justify-between">
                <h1 class="text-3xl font-bold">"⚔️ Compare Players"</h1>
                <A href=Route::Landing.to_path() class="text-gray-400 hover:text-white text-sm">"← Back"</A>
            </div>

            <form class="grid md:grid-cols-4 gap-3" on:submit=on_submit>
                <NameInput value=player1 placeholder="First summoner" />
                <NameInput value=player2 placeholder="Second summoner" />
                <RegionSelect regions=regions region=region />
                <button
                    type="submit"
                    class="px-6 py-3 bg-[#C89B3C] hover:bg-[#F0E6D2] text-[#0A1428] rounded-lg font-semibold transition-colors disabled:opacity-50"
                    prop:disabled=move || submitting.get()
                >
                    "Compare"
                </button>
            </form>

            {move || {
                if submitting.get() {
                    view! { <Loading message="Comparing players..." /> }.into_view()
                } else {
                    result.get().map(|(form, comparison)| view! {
                        <ComparisonView form=form result=comparison />
                    }).into_view()
                }
            }}
        </div>
    }
}

#[component]
fn NameInput(value: RwSignal<String>, placeholder: &'static str) -> impl IntoView {
    view! {
        <input
            type="text"
            class="bg-gray-800 border border-gray-600 rounded-lg px-4 py-3 focus:outline-none focus:border-[#C89B3C]"
            placeholder=placeholder
            prop:value=move || value.get()
            on:input=move |ev| value.set(event_target_value(&ev))
        />
    }
}

#[component]
fn ComparisonView(form: CompareForm, result: ComparisonResult) -> impl IntoView {
    let left = result.player1.stat_rows();
    let right = result.player2.stat_rows();
    let description = result.synergy_description().to_string();

    view! {
        <div class="space-y-6">
            <div class="bg-gray-800 rounded-xl p-6 text-center">
                <div class="text-sm uppercase tracking-wide text-gray-400">"Duo Synergy Score"</div>
                <div class="text-5xl font-bold text-[#C89B3C] mt-2">{result.synergy_label()}</div>
                {(!description.is_empty()).then(|| view! {
                    <p class="text-gray-300 mt-3">{description}</p>
                })}
            </div>

            <div class="grid grid-cols-3 gap-4 bg-gray-800 rounded-xl p-6">
                <div />
                <div class="text-center font-semibold">{form.player1}</div>
                <div class="text-center font-semibold">{form.player2}</div>
                {left.into_iter().zip(right).map(|((label, a), (_, b))| view! {
                    <div class="text-gray-400">{label}</div>
                    <div class="text-center">{a}</div>
                    <div class="text-center">{b}</div>
                }).collect_view()}
            </div>

            {result.narrative().map(|text| {
                let text = text.to_string();
                view! {
                    <div class="bg-gray-800 rounded-xl p-6">
                        <h2 class="font-semibold mb-2">"🤖 AI Analysis"</h2>
                        <p class="text-gray-300 leading-relaxed whitespace-pre-line">{text}</p>
                    </div>
                }
            })}
        </div>
    }
}
