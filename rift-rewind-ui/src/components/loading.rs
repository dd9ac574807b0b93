//! Loading Component
//!
//! Spinners and the loading page's step list.

use leptos::*;
use rift_rewind::orchestrator::{step_status, StepStatus, STEPS};

/// Spinner with an optional caption
#[component]
pub fn Loading(
    #[prop(optional, into)]
    message: Option<String>,
) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center py-12 space-y-4">
            <div class="loading-spinner w-8 h-8" />
            {message.map(|m| view! { <p class="text-gray-400 text-sm">{m}</p> })}
        </div>
    }
}

/// Progress bar plus the ordered list of orchestrator steps
#[component]
pub fn LoadingSteps(
    #[prop(into)]
    step: Signal<usize>,
    #[prop(into)]
    percent: Signal<u8>,
) -> impl IntoView {
    view! {
        <div class="w-full max-w-md space-y-6">
            <div class="h-2 bg-gray-800 rounded-full overflow-hidden">
                <div
                    class="h-full bg-[#C89B3C] transition-all duration-500"
                    style=move || format!("width: {}%", percent.get())
                />
            </div>

            <ul class="space-y-3">
                {STEPS
                    .iter()
                    .enumerate()
                    .map(|(index, label)| {
                        let status = move || step_status(index, step.get());
                        view! {
                            <li class=move || match status() {
                                StepStatus::Done => "flex items-center space-x-3 text-green-400",
                                StepStatus::Current => "flex items-center space-x-3 text-[#F0E6D2]",
                                StepStatus::Pending => "flex items-center space-x-3 text-gray-600",
                            }>
                                <span class="w-5 text-center">
                                    {move || match status() {
                                        StepStatus::Done => "✓".into_view(),
                                        StepStatus::Current => view! {
                                            <span class="inline-block loading-spinner w-4 h-4" />
                                        }.into_view(),
                                        StepStatus::Pending => "•".into_view(),
                                    }}
                                </span>
                                <span>{*label}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}
