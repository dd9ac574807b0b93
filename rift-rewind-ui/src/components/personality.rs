//! Personality Profile Widget

use leptos::*;
use rift_rewind::{FetchRequest, PersonalityProfile};

use crate::components::SectionPanel;
use crate::state::use_section;

#[component]
pub fn Personality(
    request: FetchRequest,
    preloaded: Option<PersonalityProfile>,
) -> impl IntoView {
    let handle = use_section::<PersonalityProfile>(request, preloaded);

    view! {
        <section class="bg-gray-900/60 border border-blue-500/30 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"🧠 Personality Profile"</h2>
            <SectionPanel handle=handle render=profile_view />
        </section>
    }
}

fn profile_view(profile: PersonalityProfile) -> impl IntoView {
    let (left, top) = profile.matrix_position();

    view! {
        <div class="space-y-6">
            <div class="text-center">
                <h3 class="text-2xl font-bold text-[#C89B3C]">{profile.kind().to_string()}</h3>
                <p class="text-gray-400">{profile.playstyle().to_string()}</p>
            </div>

            <p class="text-gray-300 leading-relaxed">{profile.description().to_string()}</p>

            {profile.celebrity().map(|celebrity| {
                let celebrity = celebrity.to_string();
                view! {
                    <p class="text-sm">
                        <span class="text-gray-400">"Plays like: "</span>
                        <span class="font-semibold">{celebrity}</span>
                    </p>
                }
            })}

            <div class="space-y-3">
                {profile.traits.iter().map(|t| {
                    let percent = t.percent();
                    view! {
                        <div>
                            <div class="flex justify-between text-sm mb-1">
                                <span>{t.icon()}" "{t.name.clone()}</span>
                                <span class="text-gray-400">{format!("{}%", percent)}</span>
                            </div>
                            <div class="h-2 bg-gray-700 rounded-full overflow-hidden">
                                <div
                                    class=t.bar_class()
                                    style=format!("width: {}%", percent)
                                />
                            </div>
                        </div>
                    }
                }).collect_view()}
            </div>

            // Solo/team by passive/aggressive matrix
            <div class="relative h-48 bg-gray-800 rounded-lg border border-gray-700">
                <span class="absolute top-1 left-1/2 -translate-x-1/2 text-xs text-gray-500">"Aggressive"</span>
                <span class="absolute bottom-1 left-1/2 -translate-x-1/2 text-xs text-gray-500">"Passive"</span>
                <span class="absolute left-1 top-1/2 -translate-y-1/2 text-xs text-gray-500">"Solo"</span>
                <span class="absolute right-1 top-1/2 -translate-y-1/2 text-xs text-gray-500">"Team"</span>
                <div
                    class="absolute w-4 h-4 bg-[#C89B3C] rounded-full -translate-x-1/2 -translate-y-1/2 shadow-lg"
                    style=format!("left: {}%; top: {}%", left, top)
                />
            </div>

            {(!profile.strengths.is_empty()).then(|| view! {
                <div class="flex flex-wrap gap-2">
                    {profile.strengths.iter().map(|s| view! {
                        <span class="px-3 py-1 bg-gray-800 rounded-full text-sm">{s.clone()}</span>
                    }).collect_view()}
                </div>
            })}

            <p class="text-center text-sm text-gray-400">{profile.archetype().to_string()}</p>
        </div>
    }
}
