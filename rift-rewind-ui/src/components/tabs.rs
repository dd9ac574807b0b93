//! Dashboard Tabs
//!
//! A panel's subtree is created the first time its tab is activated and is
//! then only hidden, never unmounted, so widget state survives tab switches.

use leptos::*;
use rift_rewind::{TabCache, TabId};

#[component]
pub fn TabBar(cache: RwSignal<TabCache>) -> impl IntoView {
    view! {
        <nav class="flex space-x-2 border-b border-gray-700 mb-6 overflow-x-auto">
            {TabId::ALL.into_iter().map(|tab| {
                let active = move || cache.with(|c| c.active() == tab);
                view! {
                    <button
                        class=move || if active() {
                            "px-4 py-3 border-b-2 border-[#C89B3C] text-[#C89B3C] font-semibold whitespace-nowrap"
                        } else {
                            "px-4 py-3 border-b-2 border-transparent text-gray-400 hover:text-white whitespace-nowrap"
                        }
                        on:click=move |_| {
                            cache.update(|c| {
                                c.activate(tab);
                            });
                        }
                    >
                        {tab.icon()}" "{tab.label()}
                    </button>
                }
            }).collect_view()}
        </nav>
    }
}

#[component]
pub fn TabPanel(id: TabId, cache: RwSignal<TabCache>, children: ChildrenFn) -> impl IntoView {
    let mounted = create_memo(move |_| cache.with(|c| c.is_mounted(id)));
    let visible = move || cache.with(|c| c.is_visible(id));

    view! {
        <div style=move || if visible() { "" } else { "display: none" }>
            <Show when=move || mounted.get()>
                {children()}
            </Show>
        </div>
    }
}
