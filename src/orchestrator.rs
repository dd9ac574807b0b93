//! Loading-Page Orchestrator
//!
//! Runs the ordered backend calls behind the loading page, reporting
//! progress through an observer, and ends in either a hand-off to the
//! dashboard or a redirect back to the landing page.

use async_trait::async_trait;
use futures_util::future::join;
use std::time::Duration;

use crate::api::RiftApi;
use crate::config::DEFAULT_REGION;
use crate::error::ClientError;
use crate::models::{
    HiddenGemsResult, InsightsResult, PersonalityProfile, PlayerResponse, RoastResult,
};
use crate::routes::{LoadingQuery, Route};

/// Progress step labels, in order
pub const STEPS: [&str; 5] = [
    "Fetching match history...",
    "Analyzing statistics...",
    "Generating AI insights...",
    "Discovering hidden patterns...",
    "Calculating achievements...",
];

/// Pause between the final progress update and the hand-off
pub const HANDOFF_DELAY: Duration = Duration::from_millis(300);

/// How long the failure notification stays up before redirecting
pub const FAILURE_REDIRECT_DELAY: Duration = Duration::from_secs(2);

/// Artificial pause between demo steps
pub const DEMO_STEP_DELAY: Duration = Duration::from_millis(500);

/// Summoner shown when the demo dataset carries no name
pub const DEMO_SUMMONER: &str = "DemoPlayer";

pub const STATS_FAILURE_MESSAGE: &str = "Failed to fetch player data";

/// Which backend calls run before the dashboard opens
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FetchPolicy {
    /// Stats only; every AI widget fetches its own data on demand
    #[default]
    Lean,
    /// Stats, insights, gems + personality, then roast, all before the
    /// hand-off.
    ///
    /// Deprecated: keeps the loading page up for the slowest AI call.
    /// Retained for the CLI recap and for comparison with `Lean`.
    Eager,
}

/// Sleeps on whatever executor the caller runs on
#[async_trait(?Send)]
pub trait Delay {
    async fn sleep(&self, duration: Duration);
}

#[cfg(feature = "native")]
pub struct TokioDelay;

#[cfg(feature = "native")]
#[async_trait(?Send)]
impl Delay for TokioDelay {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Observer notifications
#[derive(Debug, Clone, PartialEq)]
pub enum LoadEvent {
    /// `step` indexes [`STEPS`]; `percent` is 0-100
    Progress { step: usize, percent: u8 },
    /// The mandatory stats step failed
    Failed { message: String },
}

impl LoadEvent {
    fn progress(step: usize, percent: u8) -> Self {
        LoadEvent::Progress { step, percent }
    }
}

/// State carried from the loading page to the dashboard
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardTransfer {
    pub stats: PlayerResponse,
    pub insights: Option<InsightsResult>,
    pub hidden_gems: Option<HiddenGemsResult>,
    pub personality: Option<PersonalityProfile>,
    pub roast: Option<RoastResult>,
    /// Widgets must not fetch: everything is preloaded
    pub demo: bool,
}

impl DashboardTransfer {
    pub fn new(stats: PlayerResponse) -> Self {
        Self {
            stats,
            ..Default::default()
        }
    }

    /// Demo hand-off with canned content for every widget
    pub fn demo(stats: PlayerResponse) -> Self {
        Self {
            stats,
            insights: Some(InsightsResult::demo()),
            hidden_gems: Some(HiddenGemsResult::fallback()),
            personality: Some(PersonalityProfile::fallback()),
            roast: Some(RoastResult::default()),
            demo: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    /// Open the dashboard with the fetched state
    Navigate {
        route: Route,
        transfer: Box<DashboardTransfer>,
    },
    /// Go back to the landing page
    Redirect(Route),
}

/// Where a step stands relative to the current one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    Done,
    Current,
    Pending,
}

pub fn step_status(index: usize, current: usize) -> StepStatus {
    match index.cmp(&current) {
        std::cmp::Ordering::Less => StepStatus::Done,
        std::cmp::Ordering::Equal => StepStatus::Current,
        std::cmp::Ordering::Greater => StepStatus::Pending,
    }
}

pub struct Orchestrator<'a> {
    api: &'a dyn RiftApi,
    delay: &'a dyn Delay,
    policy: FetchPolicy,
    match_count: u32,
}

impl<'a> Orchestrator<'a> {
    pub fn new(api: &'a dyn RiftApi, delay: &'a dyn Delay, match_count: u32) -> Self {
        Self {
            api,
            delay,
            policy: FetchPolicy::default(),
            match_count,
        }
    }

    pub fn with_policy(mut self, policy: FetchPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> FetchPolicy {
        self.policy
    }

    /// Run the sequence for a loading-page query
    pub async fn run(&self, query: &LoadingQuery, on_event: &mut dyn FnMut(LoadEvent)) -> LoadOutcome {
        if query.demo {
            return self.run_demo(query, on_event).await;
        }

        let Some((region, summoner)) = query.target() else {
            tracing::warn!("Loading page opened without region or summoner");
            return LoadOutcome::Redirect(Route::Landing);
        };

        let result = match self.policy {
            FetchPolicy::Lean => self.run_lean(region, summoner, on_event).await,
            FetchPolicy::Eager => self.run_eager(region, summoner, on_event).await,
        };

        match result {
            Ok(transfer) => self.hand_off(region, summoner, transfer).await,
            Err(e) => self.fail(e, on_event).await,
        }
    }

    async fn run_lean(
        &self,
        region: &str,
        summoner: &str,
        on_event: &mut dyn FnMut(LoadEvent),
    ) -> Result<DashboardTransfer, ClientError> {
        on_event(LoadEvent::progress(0, 30));
        let stats = self.fetch_stats(region, summoner).await?;

        on_event(LoadEvent::progress(1, 80));
        on_event(LoadEvent::progress(4, 100));
        Ok(DashboardTransfer::new(stats))
    }

    async fn run_eager(
        &self,
        region: &str,
        summoner: &str,
        on_event: &mut dyn FnMut(LoadEvent),
    ) -> Result<DashboardTransfer, ClientError> {
        let n = self.match_count;

        on_event(LoadEvent::progress(0, 10));
        let stats = self.fetch_stats(region, summoner).await?;
        on_event(LoadEvent::progress(1, 30));

        on_event(LoadEvent::progress(2, 50));
        let insights = optional(
            "insights",
            self.api.generate_insights(region, summoner, n).await,
        );

        on_event(LoadEvent::progress(3, 70));
        let (gems, personality) = join(
            self.api.discover_hidden_gems(region, summoner, n),
            self.api.analyze_personality(region, summoner, n),
        )
        .await;

        on_event(LoadEvent::progress(4, 90));
        let roast = self.api.generate_roast(region, summoner, n).await.ok();

        on_event(LoadEvent::progress(4, 100));
        Ok(DashboardTransfer {
            stats,
            insights,
            hidden_gems: optional("hidden gems", gems),
            personality: optional("personality", personality),
            roast,
            demo: false,
        })
    }

    async fn run_demo(&self, query: &LoadingQuery, on_event: &mut dyn FnMut(LoadEvent)) -> LoadOutcome {
        on_event(LoadEvent::progress(0, 20));
        let stats = match self.api.get_demo_data().await {
            Ok(stats) => stats,
            Err(e) => return self.fail(e, on_event).await,
        };

        for (step, percent) in [(1, 40), (2, 60), (3, 80), (4, 100)] {
            self.delay.sleep(DEMO_STEP_DELAY).await;
            on_event(LoadEvent::progress(step, percent));
        }

        let region = query
            .region
            .as_deref()
            .filter(|r| !r.trim().is_empty())
            .unwrap_or(DEFAULT_REGION)
            .to_string();
        let summoner = stats
            .summoner
            .name
            .clone()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| DEMO_SUMMONER.to_string());

        self.hand_off(&region, &summoner, DashboardTransfer::demo(stats))
            .await
    }

    async fn fetch_stats(&self, region: &str, summoner: &str) -> Result<PlayerResponse, ClientError> {
        tracing::info!(%region, %summoner, match_count = self.match_count, "Fetching player stats");
        self.api
            .get_player_stats(region, summoner, self.match_count)
            .await
    }

    async fn hand_off(&self, region: &str, summoner: &str, transfer: DashboardTransfer) -> LoadOutcome {
        self.delay.sleep(HANDOFF_DELAY).await;
        LoadOutcome::Navigate {
            route: Route::dashboard(region, summoner),
            transfer: Box::new(transfer),
        }
    }

    async fn fail(&self, e: ClientError, on_event: &mut dyn FnMut(LoadEvent)) -> LoadOutcome {
        tracing::error!("Stats fetch failed: {}", e);
        let message = match e.to_string().trim() {
            "" => STATS_FAILURE_MESSAGE.to_string(),
            _ => e.user_message(),
        };
        on_event(LoadEvent::Failed { message });
        self.delay.sleep(FAILURE_REDIRECT_DELAY).await;
        LoadOutcome::Redirect(Route::Landing)
    }
}

fn optional<T>(step: &str, result: Result<T, ClientError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!("Optional {} step failed: {}", step, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::tests::ScriptedApi;
    use crate::models::{PlayerStats, SummonerInfo};
    use crate::routes::submit_lookup;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingDelay {
        slept: RefCell<Vec<Duration>>,
    }

    #[async_trait(?Send)]
    impl Delay for RecordingDelay {
        async fn sleep(&self, duration: Duration) {
            self.slept.borrow_mut().push(duration);
        }
    }

    fn faker() -> PlayerResponse {
        PlayerResponse {
            summoner: SummonerInfo {
                name: Some("Faker".into()),
                ..Default::default()
            },
            stats: PlayerStats {
                total_games: 15,
                ..Default::default()
            },
            match_count: Some(15),
        }
    }

    fn query_for(region: &str, summoner: &str) -> LoadingQuery {
        match submit_lookup(region, summoner).unwrap() {
            Route::Loading(query) => query,
            other => panic!("unexpected route {:?}", other),
        }
    }

    async fn run(
        api: &ScriptedApi,
        policy: FetchPolicy,
        query: &LoadingQuery,
    ) -> (LoadOutcome, Vec<LoadEvent>, Vec<Duration>) {
        let delay = RecordingDelay::default();
        let mut events = Vec::new();
        let outcome = Orchestrator::new(api, &delay, 15)
            .with_policy(policy)
            .run(query, &mut |event| events.push(event))
            .await;
        let slept = delay.slept.into_inner();
        (outcome, events, slept)
    }

    #[tokio::test]
    async fn test_lean_fetches_stats_only() {
        let api = ScriptedApi {
            player: Some(faker()),
            ..Default::default()
        };
        let query = query_for("kr", "Faker");

        let (outcome, events, slept) = run(&api, FetchPolicy::Lean, &query).await;

        assert_eq!(
            outcome,
            LoadOutcome::Navigate {
                route: Route::dashboard("kr", "Faker"),
                transfer: Box::new(DashboardTransfer::new(faker())),
            }
        );
        assert_eq!(*api.calls.borrow(), vec!["player kr Faker 15".to_string()]);
        assert_eq!(
            events,
            vec![
                LoadEvent::progress(0, 30),
                LoadEvent::progress(1, 80),
                LoadEvent::progress(4, 100),
            ]
        );
        assert_eq!(slept, vec![HANDOFF_DELAY]);
    }

    #[tokio::test]
    async fn test_missing_params_redirect_without_request() {
        let api = ScriptedApi::default();
        let query = LoadingQuery {
            region: Some("kr".into()),
            summoner: Some("   ".into()),
            demo: false,
        };

        let (outcome, events, slept) = run(&api, FetchPolicy::Lean, &query).await;

        assert_eq!(outcome, LoadOutcome::Redirect(Route::Landing));
        assert!(api.calls.borrow().is_empty());
        assert!(events.is_empty());
        assert!(slept.is_empty());
    }

    #[tokio::test]
    async fn test_stats_failure_notifies_then_redirects() {
        let api = ScriptedApi::failing_first(vec![ClientError::from_response(
            404,
            r#"{"detail": "Summoner not found"}"#,
        )]);

        let (outcome, events, slept) =
            run(&api, FetchPolicy::Eager, &query_for("na1", "Nobody")).await;

        assert_eq!(outcome, LoadOutcome::Redirect(Route::Landing));
        assert_eq!(
            events.last(),
            Some(&LoadEvent::Failed {
                message: "Summoner not found".into()
            })
        );
        assert_eq!(slept, vec![FAILURE_REDIRECT_DELAY]);
        assert_eq!(api.calls.borrow().len(), 1);
    }

    #[tokio::test]
    async fn test_eager_fetches_every_section() {
        let api = ScriptedApi {
            player: Some(faker()),
            ..Default::default()
        };

        let (outcome, _, _) = run(&api, FetchPolicy::Eager, &query_for("kr", "Faker")).await;

        let LoadOutcome::Navigate { transfer, .. } = outcome else {
            panic!("expected navigation");
        };
        assert!(transfer.insights.is_some());
        assert!(transfer.hidden_gems.is_some());
        assert!(transfer.personality.is_some());
        assert!(transfer.roast.is_some());
        assert_eq!(api.calls_to("insights"), 1);
        assert_eq!(api.calls_to("gems"), 1);
        assert_eq!(api.calls_to("personality"), 1);
        assert_eq!(api.calls_to("roast"), 1);
    }

    #[tokio::test]
    async fn test_eager_optional_failure_becomes_none() {
        struct FailingInsights(ScriptedApi);

        #[async_trait(?Send)]
        impl RiftApi for FailingInsights {
            async fn get_regions(&self) -> Result<Vec<crate::models::Region>, ClientError> {
                self.0.get_regions().await
            }
            async fn get_demo_data(&self) -> Result<PlayerResponse, ClientError> {
                self.0.get_demo_data().await
            }
            async fn get_player_stats(&self, r: &str, s: &str, n: u32) -> Result<PlayerResponse, ClientError> {
                self.0.get_player_stats(r, s, n).await
            }
            async fn generate_insights(&self, _: &str, _: &str, _: u32) -> Result<InsightsResult, ClientError> {
                Err(ClientError::Timeout(180_000))
            }
            async fn generate_roast(&self, _: &str, _: &str, _: u32) -> Result<RoastResult, ClientError> {
                Err(ClientError::Network("Network Error".into()))
            }
            async fn discover_hidden_gems(&self, r: &str, s: &str, n: u32) -> Result<HiddenGemsResult, ClientError> {
                self.0.discover_hidden_gems(r, s, n).await
            }
            async fn analyze_personality(&self, _: &str, _: &str, _: u32) -> Result<PersonalityProfile, ClientError> {
                Err(ClientError::from_response(500, "{}"))
            }
            async fn compare_players(
                &self,
                a: &str,
                b: &str,
                r: &str,
                n: u32,
            ) -> Result<crate::models::ComparisonResult, ClientError> {
                self.0.compare_players(a, b, r, n).await
            }
        }

        let api = FailingInsights(ScriptedApi {
            player: Some(faker()),
            ..Default::default()
        });
        let delay = RecordingDelay::default();
        let outcome = Orchestrator::new(&api, &delay, 15)
            .with_policy(FetchPolicy::Eager)
            .run(&query_for("kr", "Faker"), &mut |_| {})
            .await;

        let LoadOutcome::Navigate { route, transfer } = outcome else {
            panic!("expected navigation");
        };
        assert_eq!(route, Route::dashboard("kr", "Faker"));
        assert_eq!(transfer.insights, None);
        assert!(transfer.hidden_gems.is_some());
        assert_eq!(transfer.personality, None);
        assert_eq!(transfer.roast, None);
    }

    #[tokio::test]
    async fn test_demo_makes_single_call() {
        let mut demo = faker();
        demo.summoner.name = None;
        let api = ScriptedApi {
            player: Some(demo),
            ..Default::default()
        };

        let (outcome, events, slept) = run(&api, FetchPolicy::Lean, &LoadingQuery {
            demo: true,
            ..Default::default()
        })
        .await;

        assert_eq!(*api.calls.borrow(), vec!["demo".to_string()]);
        assert_eq!(events.len(), 5);
        assert_eq!(slept.len(), 5);

        let LoadOutcome::Navigate { route, transfer } = outcome else {
            panic!("expected navigation");
        };
        assert_eq!(route, Route::dashboard(DEFAULT_REGION, DEMO_SUMMONER));
        assert!(transfer.demo);
        assert!(transfer.insights.is_some());
    }

    #[test]
    fn test_step_status() {
        assert_eq!(step_status(0, 1), StepStatus::Done);
        assert_eq!(step_status(1, 1), StepStatus::Current);
        assert_eq!(step_status(4, 1), StepStatus::Pending);
    }
}
