//! AI Insights Widget

use leptos::*;
use rift_rewind::{FetchRequest, InsightsResult};

use crate::components::SectionPanel;
use crate::state::use_section;

#[component]
pub fn AiInsights(
    request: FetchRequest,
    preloaded: Option<InsightsResult>,
) -> impl IntoView {
    let handle = use_section::<InsightsResult>(request, preloaded);

    view! {
        <section class="bg-gray-900/60 border border-[#C89B3C]/30 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"🤖 AI Insights"</h2>
            <SectionPanel handle=handle render=insights_view />
        </section>
    }
}

fn insights_view(insights: InsightsResult) -> impl IntoView {
    let playstyle = insights.playstyle().to_string();

    view! {
        <div class="space-y-6">
            <div>
                <h3 class="text-lg font-semibold text-[#C89B3C] mb-2">"Your League Journey"</h3>
                <p class="text-gray-300 leading-relaxed whitespace-pre-line">
                    {insights.narrative().to_string()}
                </p>
            </div>

            <div class="grid md:grid-cols-2 gap-4">
                <InsightList title="💪 Your Strengths" items=insights.strengths accent="text-green-400" />
                <InsightList title="📈 Growth Opportunities" items=insights.areas_for_growth accent="text-yellow-400" />
            </div>

            <div class="bg-gray-800 rounded-lg p-4">
                <h3 class="text-sm uppercase tracking-wide text-gray-400">"Your Playstyle"</h3>
                <p class="text-lg italic mt-1">{format!("\"{}\"", playstyle)}</p>
            </div>

            <InsightList title="⭐ Season Highlights" items=insights.highlights accent="text-[#C89B3C]" />
            <InsightList title="🎯 Recommendations" items=insights.recommendations accent="text-blue-400" />
        </div>
    }
}

/// Titled bullet list; renders nothing when empty
#[component]
fn InsightList(title: &'static str, items: Vec<String>, accent: &'static str) -> impl IntoView {
    if items.is_empty() {
        return view! {}.into_view();
    }

    view! {
        <div>
            <h4 class=format!("font-semibold mb-2 {}", accent)>{title}</h4>
            <ul class="space-y-1 text-gray-300">
                {items.into_iter().map(|item| view! { <li>"• "{item}</li> }).collect_view()}
            </ul>
        </div>
    }
    .into_view()
}
