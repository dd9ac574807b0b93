//! Backend API Client
//!
//! [`RiftApi`] is the single point of access to the Rift Rewind backend.
//! [`RiftClient`] implements it over any [`Transport`]: the native
//! [`http::HttpTransport`] (reqwest) here, or the browser transport built on
//! `gloo-net` in the dashboard crate.

pub mod client;
#[cfg(feature = "native")]
pub mod http;

pub use client::{RiftClient, Transport};
#[cfg(feature = "native")]
pub use http::HttpTransport;

use async_trait::async_trait;
use serde::Serialize;

use crate::error::ClientError;
use crate::models::{
    ComparisonResult, HiddenGemsResult, InsightsResult, PersonalityProfile, PlayerResponse,
    Region, RoastResult,
};

/// Endpoint paths, relative to the configured base URL
pub mod paths {
    pub const REGIONS: &str = "/api/regions";
    pub const DEMO_PLAYER: &str = "/api/demo/player";
    pub const PLAYER: &str = "/api/player";
    pub const INSIGHTS: &str = "/api/insights";
    pub const ROAST: &str = "/api/roast";
    pub const HIDDEN_GEMS: &str = "/api/hidden-gems";
    pub const PERSONALITY: &str = "/api/personality";
    pub const COMPARE: &str = "/api/compare";
}

/// Body shared by every player-scoped AI endpoint
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerSearchRequest<'a> {
    pub region: &'a str,
    pub summoner_name: &'a str,
    pub match_count: u32,
}

/// Body of `/api/compare`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompareRequest<'a> {
    pub player1: &'a str,
    pub player2: &'a str,
    pub region: &'a str,
    pub match_count: u32,
}

/// Path for the primary stats lookup, with the summoner name URL-encoded
pub fn player_path(region: &str, summoner_name: &str, match_count: u32) -> String {
    format!(
        "{}/{}/{}?match_count={}",
        paths::PLAYER,
        urlencoding::encode(region),
        urlencoding::encode(summoner_name),
        match_count
    )
}

/// Typed contract of the backend.
///
/// Futures are `?Send` so the same orchestration runs on the browser's
/// single-threaded executor and on tokio.
#[async_trait(?Send)]
pub trait RiftApi {
    async fn get_regions(&self) -> Result<Vec<Region>, ClientError>;

    async fn get_demo_data(&self) -> Result<PlayerResponse, ClientError>;

    async fn get_player_stats(
        &self,
        region: &str,
        summoner_name: &str,
        match_count: u32,
    ) -> Result<PlayerResponse, ClientError>;

    async fn generate_insights(
        &self,
        region: &str,
        summoner_name: &str,
        match_count: u32,
    ) -> Result<InsightsResult, ClientError>;

    async fn generate_roast(
        &self,
        region: &str,
        summoner_name: &str,
        match_count: u32,
    ) -> Result<RoastResult, ClientError>;

    async fn discover_hidden_gems(
        &self,
        region: &str,
        summoner_name: &str,
        match_count: u32,
    ) -> Result<HiddenGemsResult, ClientError>;

    async fn analyze_personality(
        &self,
        region: &str,
        summoner_name: &str,
        match_count: u32,
    ) -> Result<PersonalityProfile, ClientError>;

    async fn compare_players(
        &self,
        player1: &str,
        player2: &str,
        region: &str,
        match_count: u32,
    ) -> Result<ComparisonResult, ClientError>;
}
