//! Section Panel
//!
//! The four views every AI widget shares: call-to-action, spinner, error
//! with retry, and the loaded content.

use leptos::*;
use rift_rewind::{FetchState, Section};

use crate::components::Loading;
use crate::state::SectionHandle;

#[component]
pub fn SectionPanel<T, F, IV>(handle: SectionHandle<T>, render: F) -> impl IntoView
where
    T: Section + Clone + 'static,
    F: Fn(T) -> IV + 'static,
    IV: IntoView,
{
    let kind = T::KIND;

    move || {
        handle.with_state(|state| match state {
            FetchState::Idle => view! {
                <div class="flex flex-col items-center py-8 space-y-4">
                    <button
                        class="px-6 py-3 bg-[#C89B3C] hover:bg-[#F0E6D2] text-[#0A1428] rounded-lg font-semibold transition-colors"
                        on:click=move |_| handle.run()
                    >
                        {kind.call_to_action()}
                    </button>
                </div>
            }
            .into_view(),
            FetchState::Loading => view! { <Loading message=kind.loading_message() /> }.into_view(),
            FetchState::Error(message) => {
                let message = message.clone();
                view! {
                    <div class="flex flex-col items-center py-8 space-y-4 text-center">
                        <div class="text-4xl">"⚠️"</div>
                        <p class="text-red-400">{message}</p>
                        <button
                            class="px-4 py-2 bg-gray-700 hover:bg-gray-600 rounded-lg text-sm transition-colors"
                            on:click=move |_| handle.run()
                        >
                            "Try Again"
                        </button>
                    </div>
                }
                .into_view()
            }
            FetchState::Loaded(value) => render(value.clone()).into_view(),
        })
    }
}
