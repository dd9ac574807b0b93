//! Typed client over a JSON transport

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::{paths, player_path, CompareRequest, PlayerSearchRequest, RiftApi};
use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::models::{
    ComparisonResult, HiddenGemsResult, InsightsResult, PersonalityProfile, PlayerResponse,
    Region, RegionList, RoastResult,
};

/// Moves JSON to and from the backend.
///
/// Implementations apply the base URL and the request timeout, and map
/// non-2xx responses through [`ClientError::from_response`].
#[async_trait(?Send)]
pub trait Transport {
    /// GET `path` (which may carry a query string)
    async fn get(&self, path: &str) -> Result<Value, ClientError>;

    /// POST `body` as JSON to `path`
    async fn post(&self, path: &str, body: Value) -> Result<Value, ClientError>;
}

/// [`RiftApi`] implementation shared by every transport
pub struct RiftClient<T> {
    transport: T,
    config: ClientConfig,
}

impl<T: Transport> RiftClient<T> {
    pub fn new(transport: T, config: ClientConfig) -> Self {
        Self { transport, config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    async fn post_player(
        &self,
        path: &str,
        region: &str,
        summoner_name: &str,
        match_count: u32,
    ) -> Result<Value, ClientError> {
        let body = to_body(&PlayerSearchRequest {
            region,
            summoner_name,
            match_count,
        })?;
        self.transport.post(path, body).await
    }
}

fn to_body<S: serde::Serialize>(body: &S) -> Result<Value, ClientError> {
    serde_json::to_value(body).map_err(|e| ClientError::Decode(e.to_string()))
}

fn decode<D: DeserializeOwned>(value: Value) -> Result<D, ClientError> {
    serde_json::from_value(value).map_err(|e| ClientError::Decode(e.to_string()))
}

#[async_trait(?Send)]
impl<T: Transport> RiftApi for RiftClient<T> {
    async fn get_regions(&self) -> Result<Vec<Region>, ClientError> {
        let list: RegionList = decode(self.transport.get(paths::REGIONS).await?)?;
        Ok(list.regions)
    }

    async fn get_demo_data(&self) -> Result<PlayerResponse, ClientError> {
        decode(self.transport.get(paths::DEMO_PLAYER).await?)
    }

    async fn get_player_stats(
        &self,
        region: &str,
        summoner_name: &str,
        match_count: u32,
    ) -> Result<PlayerResponse, ClientError> {
        let path = player_path(region, summoner_name, match_count);
        decode(self.transport.get(&path).await?)
    }

    async fn generate_insights(
        &self,
        region: &str,
        summoner_name: &str,
        match_count: u32,
    ) -> Result<InsightsResult, ClientError> {
        let value = self
            .post_player(paths::INSIGHTS, region, summoner_name, match_count)
            .await?;
        InsightsResult::from_response(value).map_err(|e| ClientError::Decode(e.to_string()))
    }

    async fn generate_roast(
        &self,
        region: &str,
        summoner_name: &str,
        match_count: u32,
    ) -> Result<RoastResult, ClientError> {
        let value = self
            .post_player(paths::ROAST, region, summoner_name, match_count)
            .await?;
        Ok(RoastResult::from_response(&value))
    }

    async fn discover_hidden_gems(
        &self,
        region: &str,
        summoner_name: &str,
        match_count: u32,
    ) -> Result<HiddenGemsResult, ClientError> {
        let value = self
            .post_player(paths::HIDDEN_GEMS, region, summoner_name, match_count)
            .await?;
        Ok(HiddenGemsResult::from_response(value))
    }

    async fn analyze_personality(
        &self,
        region: &str,
        summoner_name: &str,
        match_count: u32,
    ) -> Result<PersonalityProfile, ClientError> {
        let value = self
            .post_player(paths::PERSONALITY, region, summoner_name, match_count)
            .await?;
        PersonalityProfile::from_response(value).map_err(|e| ClientError::Decode(e.to_string()))
    }

    async fn compare_players(
        &self,
        player1: &str,
        player2: &str,
        region: &str,
        match_count: u32,
    ) -> Result<ComparisonResult, ClientError> {
        let body = to_body(&CompareRequest {
            player1,
            player2,
            region,
            match_count,
        })?;
        decode(self.transport.post(paths::COMPARE, body).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::cell::RefCell;

    /// Records every call and answers from a fixed route table
    #[derive(Default)]
    struct RecordingTransport {
        calls: RefCell<Vec<(String, String, Option<Value>)>>,
        responses: Vec<(&'static str, Result<Value, ClientError>)>,
    }

    impl RecordingTransport {
        fn answer(&self, path: &str) -> Result<Value, ClientError> {
            self.responses
                .iter()
                .find(|(prefix, _)| path.starts_with(prefix))
                .map(|(_, response)| response.clone())
                .unwrap_or_else(|| Err(ClientError::from_response(404, "{}")))
        }
    }

    #[async_trait(?Send)]
    impl Transport for RecordingTransport {
        async fn get(&self, path: &str) -> Result<Value, ClientError> {
            self.calls
                .borrow_mut()
                .push(("GET".into(), path.to_string(), None));
            self.answer(path)
        }

        async fn post(&self, path: &str, body: Value) -> Result<Value, ClientError> {
            self.calls
                .borrow_mut()
                .push(("POST".into(), path.to_string(), Some(body)));
            self.answer(path)
        }
    }

    fn client(responses: Vec<(&'static str, Result<Value, ClientError>)>) -> RiftClient<RecordingTransport> {
        RiftClient::new(
            RecordingTransport {
                responses,
                ..Default::default()
            },
            ClientConfig::with_base_url("http://localhost:8000"),
        )
    }

    #[tokio::test]
    async fn test_player_stats_request() {
        let client = client(vec![(
            "/api/player",
            Ok(json!({"summoner": {"name": "Faker"}, "stats": {"totalGames": 15}})),
        )]);

        let response = client.get_player_stats("kr", "Faker", 15).await.unwrap();
        assert_eq!(response.stats.total_games, 15);

        let calls = client.transport().calls.borrow();
        assert_eq!(calls[0].0, "GET");
        assert_eq!(calls[0].1, "/api/player/kr/Faker?match_count=15");
    }

    #[tokio::test]
    async fn test_ai_endpoints_post_search_body() {
        let client = client(vec![("/api/roast", Ok(json!({"roast": "gg"})))]);

        let roast = client.generate_roast("na1", "Doublelift", 20).await.unwrap();
        assert_eq!(roast.text.as_deref(), Some("gg"));

        let calls = client.transport().calls.borrow();
        assert_eq!(calls[0].1, "/api/roast");
        assert_eq!(
            calls[0].2,
            Some(json!({"region": "na1", "summonerName": "Doublelift", "matchCount": 20}))
        );
    }

    #[tokio::test]
    async fn test_backend_error_propagates() {
        let client = client(vec![(
            "/api/insights",
            Err(ClientError::from_response(500, r#"{"detail": "Error generating insights"}"#)),
        )]);

        let err = client.generate_insights("kr", "Faker", 15).await.unwrap_err();
        assert_eq!(err.user_message(), "Error generating insights");
    }

    #[tokio::test]
    async fn test_regions_decode() {
        let client = client(vec![(
            "/api/regions",
            Ok(json!({"regions": [{"code": "kr", "name": "Korea"}]})),
        )]);

        let regions = client.get_regions().await.unwrap();
        assert_eq!(regions, vec![Region::new("kr", "Korea")]);
    }

    #[tokio::test]
    async fn test_malformed_stats_is_decode_error() {
        let client = client(vec![("/api/demo/player", Ok(json!({"stats": "oops"})))]);
        let err = client.get_demo_data().await.unwrap_err();
        assert!(matches!(err, ClientError::Decode(_)));
    }
}
