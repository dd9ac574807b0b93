//! Toasts for fetch outcomes, bottom right.

use leptos::*;

use crate::state::use_global_state;

/// Success and error toasts, each dismissable before its timer runs out
#[component]
pub fn Toast() -> impl IntoView {
    let state = use_global_state();

    view! {
        <div class="fixed bottom-4 right-4 z-50 flex flex-col gap-2 max-w-sm">
            <Notice slot=state.success tone=Tone::Success />
            <Notice slot=state.error tone=Tone::Error />
        </div>
    }
}

#[derive(Clone, Copy, PartialEq)]
enum Tone {
    Success,
    Error,
}

impl Tone {
    fn style(self) -> (&'static str, &'static str) {
        match self {
            Tone::Success => ("🏆", "border-[#C89B3C] bg-[#0A1428]"),
            Tone::Error => ("⚠️", "border-red-500 bg-[#1E2328]"),
        }
    }
}

#[component]
fn Notice(slot: RwSignal<Option<String>>, tone: Tone) -> impl IntoView {
    let (icon, palette) = tone.style();

    move || {
        slot.get().map(|message| {
            view! {
                <div
                    class=format!("flex items-start gap-3 border-l-4 {} text-[#F0E6D2] px-4 py-3 rounded-lg shadow-xl", palette)
                    role=if tone == Tone::Error { "alert" } else { "status" }
                >
                    <span>{icon}</span>
                    <span class="text-sm flex-1">{message}</span>
                    <button
                        class="text-gray-500 hover:text-white text-xs"
                        on:click=move |_| slot.set(None)
                    >
                        "✕"
                    </button>
                </div>
            }
        })
    }
}
