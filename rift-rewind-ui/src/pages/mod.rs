//! Page Components
//!
//! Top-level route components.

pub mod compare;
pub mod dashboard;
pub mod landing;
pub mod loading;

pub use compare::Compare;
pub use dashboard::Dashboard;
pub use landing::Landing;
pub use loading::Loading;

use leptos::*;
use rift_rewind::Region;

/// Region picker bound to `region`
#[component]
pub fn RegionSelect(regions: ReadSignal<Vec<Region>>, region: RwSignal<String>) -> impl IntoView {
    view! {
        <select
            class="bg-gray-800 border border-gray-600 rounded-lg px-3 py-3 focus:outline-none focus:border-[#C89B3C]"
            prop:value=move || region.get()
            on:change=move |ev| region.set(event_target_value(&ev))
        >
            {move || regions.get().into_iter().map(|r| {
                let code = r.code.clone();
                let selected = move || region.get() == code;
                view! {
                    <option value=r.code.clone() selected=selected>{r.name}</option>
                }
            }).collect_view()}
        </select>
    }
}
