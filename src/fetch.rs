//! Per-Widget Fetch State
//!
//! Each AI widget owns a [`SectionFetch`]: the exact [`FetchRequest`] it
//! issues and a [`FetchState`] moving `Idle -> Loading -> Loaded | Error`.
//! Retrying from `Error` re-issues the same request. In-flight work is tied
//! to a [`MountGuard`]; completions that arrive after the guard is cancelled
//! are dropped.

use async_trait::async_trait;
use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::api::RiftApi;
use crate::error::ClientError;
use crate::models::{HiddenGemsResult, InsightsResult, PersonalityProfile, RoastResult};

/// The AI sections a widget can fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Insights,
    Roast,
    HiddenGems,
    Personality,
}

impl SectionKind {
    pub const ALL: [SectionKind; 4] = [
        SectionKind::Insights,
        SectionKind::HiddenGems,
        SectionKind::Personality,
        SectionKind::Roast,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            SectionKind::Insights => "AI Insights",
            SectionKind::Roast => "Roast Master 3000",
            SectionKind::HiddenGems => "Hidden Gems",
            SectionKind::Personality => "Personality Profile",
        }
    }

    /// Widgets without preloaded data start on mount, except the roast
    pub fn auto_start(&self) -> bool {
        !matches!(self, SectionKind::Roast)
    }

    pub fn loading_message(&self) -> &'static str {
        match self {
            SectionKind::Insights => "Generating AI insights...",
            SectionKind::Roast => "Preparing your roast...",
            SectionKind::HiddenGems => "Discovering hidden patterns...",
            SectionKind::Personality => "Analyzing your personality...",
        }
    }

    pub fn success_message(&self) -> &'static str {
        match self {
            SectionKind::Insights => "AI insights ready!",
            SectionKind::Roast => "Roast served 🔥",
            SectionKind::HiddenGems => "Hidden gems discovered!",
            SectionKind::Personality => "Personality profile ready!",
        }
    }

    /// Call-to-action label while nothing has been requested
    pub fn call_to_action(&self) -> &'static str {
        match self {
            SectionKind::Insights => "Generate AI Insights",
            SectionKind::Roast => "Show Me The Roast",
            SectionKind::HiddenGems => "Discover Hidden Gems",
            SectionKind::Personality => "Analyze My Personality",
        }
    }
}

impl std::fmt::Display for SectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}

/// Parameters of one section fetch, kept so a retry is identical
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub kind: SectionKind,
    pub region: String,
    pub summoner_name: String,
    pub match_count: u32,
}

impl FetchRequest {
    pub fn new(kind: SectionKind, region: &str, summoner_name: &str, match_count: u32) -> Self {
        Self {
            kind,
            region: region.to_string(),
            summoner_name: summoner_name.to_string(),
            match_count,
        }
    }
}

/// Widget-local fetch lifecycle
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    Idle,
    Loading,
    Loaded(T),
    Error(String),
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        FetchState::Idle
    }
}

impl<T> FetchState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            FetchState::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FetchState::Error(message) => Some(message),
            _ => None,
        }
    }
}

/// Ties a widget's fetch state to the request that produces it
#[derive(Debug, Clone, PartialEq)]
pub struct SectionFetch<T> {
    request: FetchRequest,
    state: FetchState<T>,
    attempts: u32,
}

impl<T> SectionFetch<T> {
    pub fn new(request: FetchRequest) -> Self {
        Self {
            request,
            state: FetchState::Idle,
            attempts: 0,
        }
    }

    /// Data handed down by an ancestor; no request will be made
    pub fn preloaded(request: FetchRequest, value: T) -> Self {
        Self {
            request,
            state: FetchState::Loaded(value),
            attempts: 0,
        }
    }

    pub fn request(&self) -> &FetchRequest {
        &self.request
    }

    pub fn state(&self) -> &FetchState<T> {
        &self.state
    }

    pub fn into_state(self) -> FetchState<T> {
        self.state
    }

    /// Requests issued so far
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Whether mounting the widget should start the fetch
    pub fn should_auto_start(&self) -> bool {
        matches!(self.state, FetchState::Idle) && self.request.kind.auto_start()
    }

    /// `Idle -> Loading`. Returns the request to issue, or `None` if the
    /// state does not allow starting.
    pub fn start(&mut self) -> Option<FetchRequest> {
        match self.state {
            FetchState::Idle => Some(self.begin()),
            _ => None,
        }
    }

    /// `Error -> Loading` with the original parameters
    pub fn retry(&mut self) -> Option<FetchRequest> {
        match self.state {
            FetchState::Error(_) => Some(self.begin()),
            _ => None,
        }
    }

    fn begin(&mut self) -> FetchRequest {
        self.state = FetchState::Loading;
        self.attempts += 1;
        self.request.clone()
    }

    /// `Loading -> Loaded | Error`. Ignored in any other state.
    pub fn finish(&mut self, result: Result<T, ClientError>) {
        if !self.state.is_loading() {
            tracing::debug!(kind = ?self.request.kind, "Ignoring completion outside Loading");
            return;
        }

        self.state = match result {
            Ok(value) => FetchState::Loaded(value),
            Err(ClientError::Cancelled) => FetchState::Idle,
            Err(e) => {
                tracing::warn!(kind = ?self.request.kind, "Section fetch failed: {}", e);
                FetchState::Error(e.user_message())
            }
        };
    }
}

/// A fetchable AI section
#[async_trait(?Send)]
pub trait Section: Sized {
    const KIND: SectionKind;

    async fn fetch(api: &dyn RiftApi, request: &FetchRequest) -> Result<Self, ClientError>;
}

#[async_trait(?Send)]
impl Section for InsightsResult {
    const KIND: SectionKind = SectionKind::Insights;

    async fn fetch(api: &dyn RiftApi, request: &FetchRequest) -> Result<Self, ClientError> {
        api.generate_insights(&request.region, &request.summoner_name, request.match_count)
            .await
    }
}

#[async_trait(?Send)]
impl Section for RoastResult {
    const KIND: SectionKind = SectionKind::Roast;

    async fn fetch(api: &dyn RiftApi, request: &FetchRequest) -> Result<Self, ClientError> {
        api.generate_roast(&request.region, &request.summoner_name, request.match_count)
            .await
    }
}

#[async_trait(?Send)]
impl Section for HiddenGemsResult {
    const KIND: SectionKind = SectionKind::HiddenGems;

    async fn fetch(api: &dyn RiftApi, request: &FetchRequest) -> Result<Self, ClientError> {
        api.discover_hidden_gems(&request.region, &request.summoner_name, request.match_count)
            .await
    }
}

#[async_trait(?Send)]
impl Section for PersonalityProfile {
    const KIND: SectionKind = SectionKind::Personality;

    async fn fetch(api: &dyn RiftApi, request: &FetchRequest) -> Result<Self, ClientError> {
        api.analyze_personality(&request.region, &request.summoner_name, request.match_count)
            .await
    }
}

/// Cancellation flag owned by a mounted widget
#[derive(Debug, Clone, Default)]
pub struct MountGuard {
    cancelled: Arc<AtomicBool>,
}

impl MountGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Called on unmount
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Await `fut`, resolving to `Cancelled` if the guard was cancelled
    /// before or while it ran
    pub async fn guard<T, F>(&self, fut: F) -> Result<T, ClientError>
    where
        F: Future<Output = Result<T, ClientError>>,
    {
        if self.is_cancelled() {
            return Err(ClientError::Cancelled);
        }
        let result = fut.await;
        if self.is_cancelled() {
            tracing::debug!("Dropping completion for unmounted widget");
            return Err(ClientError::Cancelled);
        }
        result
    }
}

/// Run one section fetch from whatever state the widget is in.
///
/// Starts from `Idle` or retries from `Error`; a `Loaded` section is left
/// untouched.
pub async fn run_section<T: Section>(
    api: &dyn RiftApi,
    section: &mut SectionFetch<T>,
    guard: &MountGuard,
) {
    let request = match section.start() {
        Some(request) => request,
        None => match section.retry() {
            Some(request) => request,
            None => return,
        },
    };
    tracing::debug!(kind = ?T::KIND, summoner = %request.summoner_name, "Fetching section");
    let result = guard.guard(T::fetch(api, &request)).await;
    section.finish(result);
}

/// Fetch a section, retrying failures up to `retries` more times
pub async fn fetch_with_retries<T: Section>(
    api: &dyn RiftApi,
    request: FetchRequest,
    retries: u32,
) -> SectionFetch<T> {
    let guard = MountGuard::new();
    let mut section = SectionFetch::new(request);

    run_section(api, &mut section, &guard).await;
    while section.state().error().is_some() && section.attempts() <= retries {
        tracing::info!(
            kind = ?T::KIND,
            attempt = section.attempts() + 1,
            "Retrying section fetch"
        );
        run_section(api, &mut section, &guard).await;
    }

    section
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::models::{ComparisonResult, PlayerResponse, Region};
    use std::cell::RefCell;
    use std::collections::VecDeque;

    /// Scripted [`RiftApi`]: answers queued per call name, records every call
    #[derive(Default)]
    pub(crate) struct ScriptedApi {
        pub calls: RefCell<Vec<String>>,
        pub failures: RefCell<VecDeque<ClientError>>,
        pub player: Option<PlayerResponse>,
        /// Cancelled from inside the next call, before it resolves
        pub cancel_on_call: Option<MountGuard>,
    }

    impl ScriptedApi {
        pub fn failing_first(errors: Vec<ClientError>) -> Self {
            Self {
                failures: RefCell::new(errors.into()),
                ..Default::default()
            }
        }

        pub fn calls_to(&self, name: &str) -> usize {
            self.calls.borrow().iter().filter(|c| c.starts_with(name)).count()
        }

        fn record(&self, call: String) -> Result<(), ClientError> {
            self.calls.borrow_mut().push(call);
            if let Some(guard) = &self.cancel_on_call {
                guard.cancel();
            }
            match self.failures.borrow_mut().pop_front() {
                Some(err) => Err(err),
                None => Ok(()),
            }
        }
    }

    #[async_trait(?Send)]
    impl RiftApi for ScriptedApi {
        async fn get_regions(&self) -> Result<Vec<Region>, ClientError> {
            self.record("regions".into())?;
            Ok(Region::fallback_list())
        }

        async fn get_demo_data(&self) -> Result<PlayerResponse, ClientError> {
            self.record("demo".into())?;
            Ok(self.player.clone().unwrap_or_default())
        }

        async fn get_player_stats(
            &self,
            region: &str,
            summoner_name: &str,
            match_count: u32,
        ) -> Result<PlayerResponse, ClientError> {
            self.record(format!("player {} {} {}", region, summoner_name, match_count))?;
            Ok(self.player.clone().unwrap_or_default())
        }

        async fn generate_insights(
            &self,
            region: &str,
            summoner_name: &str,
            match_count: u32,
        ) -> Result<InsightsResult, ClientError> {
            self.record(format!("insights {} {} {}", region, summoner_name, match_count))?;
            Ok(InsightsResult {
                narrative: Some(format!("{}'s story", summoner_name)),
                ..Default::default()
            })
        }

        async fn generate_roast(
            &self,
            region: &str,
            summoner_name: &str,
            match_count: u32,
        ) -> Result<RoastResult, ClientError> {
            self.record(format!("roast {} {} {}", region, summoner_name, match_count))?;
            Ok(RoastResult {
                text: Some("You flash into walls.".into()),
            })
        }

        async fn discover_hidden_gems(
            &self,
            region: &str,
            summoner_name: &str,
            match_count: u32,
        ) -> Result<HiddenGemsResult, ClientError> {
            self.record(format!("gems {} {} {}", region, summoner_name, match_count))?;
            Ok(HiddenGemsResult::fallback())
        }

        async fn analyze_personality(
            &self,
            region: &str,
            summoner_name: &str,
            match_count: u32,
        ) -> Result<PersonalityProfile, ClientError> {
            self.record(format!("personality {} {} {}", region, summoner_name, match_count))?;
            Ok(PersonalityProfile::fallback())
        }

        async fn compare_players(
            &self,
            player1: &str,
            player2: &str,
            region: &str,
            match_count: u32,
        ) -> Result<ComparisonResult, ClientError> {
            self.record(format!("compare {} {} {} {}", player1, player2, region, match_count))?;
            Ok(ComparisonResult::default())
        }
    }

    fn request(kind: SectionKind) -> FetchRequest {
        FetchRequest::new(kind, "kr", "Faker", 15)
    }

    #[test]
    fn test_transitions() {
        let mut section: SectionFetch<InsightsResult> =
            SectionFetch::new(request(SectionKind::Insights));
        assert!(section.should_auto_start());
        assert_eq!(section.retry(), None);

        assert_eq!(section.start(), Some(request(SectionKind::Insights)));
        assert!(section.state().is_loading());
        assert_eq!(section.start(), None);

        section.finish(Err(ClientError::Timeout(180_000)));
        assert_eq!(section.state().error(), Some("timeout of 180000ms exceeded"));

        assert_eq!(section.retry(), Some(request(SectionKind::Insights)));
        section.finish(Ok(InsightsResult::default()));
        assert!(section.state().loaded().is_some());

        // Loaded is terminal
        assert_eq!(section.start(), None);
        assert_eq!(section.retry(), None);
        section.finish(Err(ClientError::Network("late".into())));
        assert!(section.state().loaded().is_some());
        assert_eq!(section.attempts(), 2);
    }

    #[test]
    fn test_roast_and_preloaded_do_not_auto_start() {
        let roast: SectionFetch<RoastResult> = SectionFetch::new(request(SectionKind::Roast));
        assert!(!roast.should_auto_start());

        let gems = SectionFetch::preloaded(
            request(SectionKind::HiddenGems),
            HiddenGemsResult::fallback(),
        );
        assert!(!gems.should_auto_start());
    }

    #[tokio::test]
    async fn test_retry_reissues_same_request() {
        let api = ScriptedApi::failing_first(vec![ClientError::from_response(
            500,
            r#"{"detail": "Error generating insights"}"#,
        )]);
        let guard = MountGuard::new();
        let mut section: SectionFetch<InsightsResult> =
            SectionFetch::new(request(SectionKind::Insights));

        run_section(&api, &mut section, &guard).await;
        assert_eq!(section.state().error(), Some("Error generating insights"));

        run_section(&api, &mut section, &guard).await;
        assert_eq!(
            section.state().loaded().map(|i| i.narrative()),
            Some("Faker's story")
        );
        assert_eq!(
            *api.calls.borrow(),
            vec!["insights kr Faker 15".to_string(), "insights kr Faker 15".to_string()]
        );
    }

    #[tokio::test]
    async fn test_cancelled_guard_drops_completion() {
        let api = ScriptedApi::default();
        let guard = MountGuard::new();
        let mut section: SectionFetch<PersonalityProfile> =
            SectionFetch::new(request(SectionKind::Personality));

        guard.cancel();
        run_section(&api, &mut section, &guard).await;

        assert_eq!(section.state(), &FetchState::Idle);
        assert_eq!(api.calls_to("personality"), 0);
    }

    #[tokio::test]
    async fn test_unmount_during_request_drops_completion() {
        let guard = MountGuard::new();
        let api = ScriptedApi {
            cancel_on_call: Some(guard.clone()),
            ..Default::default()
        };
        let mut section: SectionFetch<InsightsResult> =
            SectionFetch::new(request(SectionKind::Insights));

        run_section(&api, &mut section, &guard).await;

        assert_eq!(api.calls_to("insights"), 1);
        assert_eq!(section.state(), &FetchState::Idle);
        assert!(section.state().loaded().is_none());
    }

    #[tokio::test]
    async fn test_fetch_with_retries() {
        let api = ScriptedApi::failing_first(vec![
            ClientError::Network("Network Error".into()),
            ClientError::Network("Network Error".into()),
        ]);

        let section: SectionFetch<RoastResult> =
            fetch_with_retries(&api, request(SectionKind::Roast), 1).await;
        assert_eq!(section.state().error(), Some("Network Error"));
        assert_eq!(api.calls_to("roast"), 2);

        let api = ScriptedApi::failing_first(vec![ClientError::Network("Network Error".into())]);
        let section: SectionFetch<RoastResult> =
            fetch_with_retries(&api, request(SectionKind::Roast), 2).await;
        assert!(section.state().loaded().is_some());
        assert_eq!(section.attempts(), 2);
    }
}
