//! # Rift Rewind
//!
//! Client side of the Rift Rewind League of Legends season recap: a REST
//! client for the recap backend, per-widget fetch state, the loading-page
//! orchestrator and the view-model formatting shared by the browser
//! dashboard (`rift-rewind-ui`) and the `rift-rewind` CLI.
//!
//! ## Modules
//!
//! - [`api`]: `RiftApi` contract, typed client and the native transport
//! - [`config`]: base URL resolution and TOML configuration
//! - [`models`]: lenient view models decoded from backend responses
//! - [`fetch`]: per-widget fetch state machine and mount guards
//! - [`orchestrator`]: lean/eager/demo loading sequences
//! - [`format`], [`share`]: display helpers and share text
//! - [`routes`], [`tabs`], [`compare`]: navigation, tab keep-alive, compare flow
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use rift_rewind::api::RiftClient;
//! use rift_rewind::orchestrator::{LoadOutcome, Orchestrator, TokioDelay};
//! use rift_rewind::routes::{submit_lookup, Route};
//! use rift_rewind::ClientConfig;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ClientConfig::with_base_url("http://localhost:8000");
//!     let match_count = config.match_count;
//!     let client = RiftClient::http(config)?;
//!
//!     let Route::Loading(query) = submit_lookup("kr", "Faker")? else {
//!         unreachable!()
//!     };
//!     let outcome = Orchestrator::new(&client, &TokioDelay, match_count)
//!         .run(&query, &mut |event| println!("{:?}", event))
//!         .await;
//!
//!     if let LoadOutcome::Navigate { route, transfer } = outcome {
//!         println!("{} -> {} games", route, transfer.stats.stats.total_games);
//!     }
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod compare;
pub mod config;
pub mod error;
pub mod fetch;
pub mod format;
pub mod models;
pub mod orchestrator;
pub mod routes;
pub mod share;
pub mod tabs;

pub use api::{RiftApi, RiftClient, Transport};
#[cfg(feature = "native")]
pub use api::HttpTransport;

pub use config::{ClientConfig, Config, ConfigError};
pub use error::ClientError;

pub use fetch::{FetchRequest, FetchState, MountGuard, Section, SectionFetch, SectionKind};

pub use orchestrator::{DashboardTransfer, Delay, FetchPolicy, LoadEvent, LoadOutcome, Orchestrator};

pub use routes::{LoadingQuery, Route, RouteError};
pub use tabs::{TabCache, TabId};

pub use models::{
    ChampionStats, ComparisonResult, Gem, HiddenGemsResult, InsightsResult, PersonalityProfile,
    PlayerResponse, PlayerStats, Region, RoastResult,
};
