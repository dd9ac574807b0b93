//! End-to-end tests of the native client against an in-process backend

use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use rift_rewind::api::http::REQUEST_ID_HEADER;
use rift_rewind::compare::{self, CompareForm};
use rift_rewind::orchestrator::{LoadOutcome, Orchestrator, TokioDelay};
use rift_rewind::routes::{submit_lookup, Route};
use rift_rewind::{ClientConfig, ClientError, FetchPolicy, RiftApi, RiftClient};

#[derive(Clone, Default)]
struct Backend {
    hits: Arc<Mutex<Vec<String>>>,
    bodies: Arc<Mutex<Vec<Value>>>,
    request_ids: Arc<Mutex<Vec<String>>>,
}

impl Backend {
    fn record(&self, hit: String, headers: &HeaderMap) {
        self.hits.lock().unwrap().push(hit);
        if let Some(id) = headers.get(REQUEST_ID_HEADER).and_then(|v| v.to_str().ok()) {
            self.request_ids.lock().unwrap().push(id.to_string());
        }
    }

    fn hits(&self) -> Vec<String> {
        self.hits.lock().unwrap().clone()
    }
}

fn player_body(name: &str) -> Value {
    json!({
        "summoner": {"name": name, "level": 512},
        "stats": {
            "totalGames": 20,
            "wins": 13,
            "losses": 7,
            "winRate": 65.0,
            "avgKDA": 4.2,
            "mostPlayedRole": "MIDDLE",
            "topChampions": [{"championName": "Ahri", "gamesPlayed": 8, "winRate": 75.0}]
        },
        "matchCount": 15
    })
}

async fn regions(State(backend): State<Backend>, headers: HeaderMap) -> Json<Value> {
    backend.record("GET /api/regions".to_string(), &headers);
    Json(json!({"regions": [{"code": "kr", "name": "Korea"}, {"code": "na1", "name": "North America"}]}))
}

async fn demo_player(State(backend): State<Backend>, headers: HeaderMap) -> Json<Value> {
    backend.record("GET /api/demo/player".to_string(), &headers);
    Json(player_body("DemoPlayer"))
}

async fn player(
    State(backend): State<Backend>,
    Path((region, name)): Path<(String, String)>,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> impl IntoResponse {
    let match_count = query.get("match_count").cloned().unwrap_or_default();
    backend.record(format!("GET /api/player/{}/{}?{}", region, name, match_count), &headers);

    match name.as_str() {
        "Missing" => (
            StatusCode::NOT_FOUND,
            Json(json!({"detail": "Summoner not found"})),
        ),
        "Slow" => {
            tokio::time::sleep(Duration::from_secs(2)).await;
            (StatusCode::OK, Json(player_body(&name)))
        }
        _ => (StatusCode::OK, Json(player_body(&name))),
    }
}

async fn ai_section(
    backend: Backend,
    endpoint: &str,
    headers: HeaderMap,
    body: Value,
    response: Value,
) -> Json<Value> {
    backend.record(format!("POST {}", endpoint), &headers);
    backend.bodies.lock().unwrap().push(body);
    Json(response)
}

fn app(backend: Backend) -> Router {
    Router::new()
        .route("/api/regions", get(regions))
        .route("/api/demo/player", get(demo_player))
        .route("/api/player/:region/:name", get(player))
        .route(
            "/api/insights",
            post(|State(b): State<Backend>, h: HeaderMap, Json(body): Json<Value>| async move {
                ai_section(b, "/api/insights", h, body, json!({"insights": {"narrative": "A season of calculated aggression."}})).await
            }),
        )
        .route(
            "/api/roast",
            post(|State(b): State<Backend>, h: HeaderMap, Json(body): Json<Value>| async move {
                ai_section(b, "/api/roast", h, body, json!({"roast": ["Line one", "Line two"]})).await
            }),
        )
        .route(
            "/api/hidden-gems",
            post(|State(b): State<Backend>, h: HeaderMap, Json(body): Json<Value>| async move {
                ai_section(b, "/api/hidden-gems", h, body, json!({"gems": {"gems": [{"title": "Night Owl", "rarity": 5}]}})).await
            }),
        )
        .route(
            "/api/personality",
            post(|State(b): State<Backend>, h: HeaderMap, Json(body): Json<Value>| async move {
                ai_section(b, "/api/personality", h, body, json!({"personality": {"type": "The Strategist"}})).await
            }),
        )
        .route(
            "/api/compare",
            post(|State(b): State<Backend>, h: HeaderMap, Json(body): Json<Value>| async move {
                ai_section(
                    b,
                    "/api/compare",
                    h,
                    body,
                    json!({
                        "player1": {"name": "Faker", "winRate": 60.0, "avgKDA": 5.0, "totalGames": 15},
                        "player2": {"name": "Keria", "winRate": 55.0, "avgKDA": 4.0, "totalGames": 15},
                        "synergyScore": 88,
                        "comparison": "A lethal duo."
                    }),
                )
                .await
            }),
        )
        .with_state(backend)
}

/// Serve the mock backend on an ephemeral port
async fn spawn_backend() -> (Backend, String) {
    let backend = Backend::default();
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let router = app(backend.clone());
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    (backend, format!("http://{}", addr))
}

fn client(base_url: &str) -> RiftClient<rift_rewind::HttpTransport> {
    RiftClient::http(ClientConfig::with_base_url(base_url)).unwrap()
}

#[tokio::test]
async fn test_lean_loading_calls_stats_only() {
    let (backend, url) = spawn_backend().await;
    let client = client(&url);

    let Route::Loading(query) = submit_lookup("kr", "Faker").unwrap() else {
        panic!("lookup should route to the loading page");
    };
    let outcome = Orchestrator::new(&client, &TokioDelay, 15)
        .run(&query, &mut |_| {})
        .await;

    match outcome {
        LoadOutcome::Navigate { route, transfer } => {
            assert_eq!(route, Route::dashboard("kr", "Faker"));
            assert_eq!(transfer.stats.stats.total_games, 20);
            assert!(transfer.insights.is_none());
            assert!(transfer.roast.is_none());
        }
        other => panic!("expected navigation, got {:?}", other),
    }
    assert_eq!(backend.hits(), vec!["GET /api/player/kr/Faker?15".to_string()]);
}

#[tokio::test]
async fn test_eager_loading_fetches_sections() {
    let (backend, url) = spawn_backend().await;
    let client = client(&url);

    let Route::Loading(query) = submit_lookup("kr", "Faker").unwrap() else {
        panic!("lookup should route to the loading page");
    };
    let outcome = Orchestrator::new(&client, &TokioDelay, 15)
        .with_policy(FetchPolicy::Eager)
        .run(&query, &mut |_| {})
        .await;

    let LoadOutcome::Navigate { transfer, .. } = outcome else {
        panic!("expected navigation");
    };
    assert_eq!(
        transfer.insights.as_ref().map(|i| i.narrative().to_string()),
        Some("A season of calculated aggression.".to_string())
    );
    assert_eq!(transfer.hidden_gems.as_ref().map(|g| g.gems.len()), Some(1));
    assert_eq!(backend.hits().len(), 5);
}

#[tokio::test]
async fn test_demo_loading_skips_player_lookup() {
    let (backend, url) = spawn_backend().await;
    let client = client(&url);

    let outcome = Orchestrator::new(&client, &TokioDelay, 15)
        .run(&Default::default(), &mut |_| {})
        .await;
    assert!(matches!(outcome, LoadOutcome::Redirect(Route::Landing)));
    assert!(backend.hits().is_empty());

    let Route::Loading(query) = Route::demo() else {
        panic!("demo route should be a loading route");
    };
    let outcome = Orchestrator::new(&client, &TokioDelay, 15)
        .run(&query, &mut |_| {})
        .await;
    let LoadOutcome::Navigate { transfer, .. } = outcome else {
        panic!("expected navigation");
    };
    assert!(transfer.demo);
    assert_eq!(backend.hits(), vec!["GET /api/demo/player".to_string()]);
}

#[tokio::test]
async fn test_compare_posts_once() {
    let (backend, url) = spawn_backend().await;
    let client = client(&url);

    let result = compare::compare(&client, &CompareForm::new("Faker ", " Keria", "kr"), 15)
        .await
        .unwrap();

    assert_eq!(result.synergy_label(), "88%");
    assert_eq!(backend.hits(), vec!["POST /api/compare".to_string()]);
    assert_eq!(
        backend.bodies.lock().unwrap()[0],
        json!({"player1": "Faker", "player2": "Keria", "region": "kr", "matchCount": 15})
    );
}

#[tokio::test]
async fn test_ai_sections_send_search_body() {
    let (backend, url) = spawn_backend().await;
    let client = client(&url);

    let roast = client.generate_roast("euw1", "Caps", 15).await.unwrap();
    assert_eq!(roast.text.as_deref(), Some("Line one\n\nLine two"));

    let profile = client.analyze_personality("euw1", "Caps", 15).await.unwrap();
    assert_eq!(profile.kind(), "The Strategist");

    let bodies = backend.bodies.lock().unwrap().clone();
    assert_eq!(bodies.len(), 2);
    for body in bodies {
        assert_eq!(body, json!({"region": "euw1", "summonerName": "Caps", "matchCount": 15}));
    }
}

#[tokio::test]
async fn test_backend_detail_is_surfaced() {
    let (_backend, url) = spawn_backend().await;
    let client = client(&url);

    let err = client.get_player_stats("na1", "Missing", 15).await.unwrap_err();

    assert_eq!(
        err,
        ClientError::Backend {
            status: 404,
            message: "Summoner not found".to_string()
        }
    );
    assert_eq!(err.user_message(), "Summoner not found");
}

#[tokio::test]
async fn test_encoded_name_and_request_ids() {
    let (backend, url) = spawn_backend().await;
    let client = client(&url);

    client.get_player_stats("kr", "Hide on bush", 20).await.unwrap();
    client.get_regions().await.unwrap();

    assert_eq!(
        backend.hits(),
        vec![
            "GET /api/player/kr/Hide on bush?20".to_string(),
            "GET /api/regions".to_string()
        ]
    );
    let ids = backend.request_ids.lock().unwrap().clone();
    assert_eq!(ids.len(), 2);
    assert_ne!(ids[0], ids[1]);
}

#[tokio::test]
async fn test_slow_backend_times_out() {
    let (_backend, url) = spawn_backend().await;
    let mut config = ClientConfig::with_base_url(&url);
    config.request_timeout = Duration::from_millis(200);
    let client = RiftClient::http(config).unwrap();

    let err = client.get_player_stats("kr", "Slow", 15).await.unwrap_err();

    assert_eq!(err, ClientError::Timeout(200));
}

#[tokio::test]
async fn test_unreachable_backend_is_network_error() {
    let client = client("http://127.0.0.1:9");

    let err = client.get_regions().await.unwrap_err();

    assert!(matches!(err, ClientError::Network(_)));
    assert!(err.is_retryable());
}
