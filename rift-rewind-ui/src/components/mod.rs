//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod ai_insights;
pub mod champion_mastery;
pub mod hidden_gems;
pub mod loading;
pub mod performance_chart;
pub mod personality;
pub mod roast;
pub mod section_panel;
pub mod share_card;
pub mod stats_overview;
pub mod tabs;
pub mod toast;

pub use ai_insights::AiInsights;
pub use champion_mastery::ChampionMastery;
pub use hidden_gems::HiddenGems;
pub use loading::{Loading, LoadingSteps};
pub use performance_chart::PerformanceChart;
pub use personality::Personality;
pub use roast::RoastPanel;
pub use section_panel::SectionPanel;
pub use share_card::ShareCard;
pub use stats_overview::StatsOverview;
pub use tabs::{TabBar, TabPanel};
pub use toast::Toast;
