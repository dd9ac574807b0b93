//! Client and CLI configuration
//!
//! Resolves the backend base URL and the client-wide request settings.
//! The browser dashboard builds a [`ClientConfig`] once in `main`; the CLI
//! loads a TOML [`Config`] with environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Backend used when the page is served from a loopback host
pub const DEFAULT_LOCAL_API_URL: &str = "http://localhost:8000";

/// Backend used everywhere else
pub const DEFAULT_PROD_API_URL: &str = "http://3.144.196.0:8000";

/// Sized for worst-case AI generation latency
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 180;

/// Matches analysed per request unless configured otherwise
pub const DEFAULT_MATCH_COUNT: u32 = 15;

/// Region preselected on the entry forms
pub const DEFAULT_REGION: &str = "na1";

const LOOPBACK_HOSTS: [&str; 4] = ["localhost", "127.0.0.1", "::1", "[::1]"];

/// Whether `host` names the local machine
pub fn is_loopback_host(host: &str) -> bool {
    LOOPBACK_HOSTS.contains(&host.trim())
}

/// Pick the backend base URL.
///
/// A non-empty override wins verbatim. Otherwise a loopback `host` selects
/// the local development backend, and anything else (including no host at
/// all) selects production.
pub fn resolve_api_base_url(override_url: Option<&str>, host: Option<&str>) -> String {
    if let Some(url) = override_url.map(str::trim).filter(|u| !u.is_empty()) {
        return url.to_string();
    }

    match host {
        Some(h) if is_loopback_host(h) => DEFAULT_LOCAL_API_URL.to_string(),
        _ => DEFAULT_PROD_API_URL.to_string(),
    }
}

/// Settings shared by every API call, fixed for the lifetime of the app
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Base URL without a trailing slash
    pub base_url: String,
    /// Blanket cutoff applied to each request
    pub request_timeout: Duration,
    /// Match count sent with every player-scoped call
    pub match_count: u32,
}

impl ClientConfig {
    /// Resolve once from an optional override and the current host
    pub fn resolve(override_url: Option<&str>, host: Option<&str>) -> Self {
        Self::with_base_url(resolve_api_base_url(override_url, host))
    }

    /// Use an explicit base URL with default timeout and match count
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            match_count: DEFAULT_MATCH_COUNT,
        }
    }

    /// Timeout in milliseconds, as reported in timeout errors
    pub fn timeout_ms(&self) -> u64 {
        self.request_timeout.as_millis() as u64
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::resolve(None, None)
    }
}

/// CLI configuration file, every section optional
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub ui: UiConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Backend access configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Overrides host-based resolution when set
    #[serde(default)]
    pub base_url: Option<String>,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    #[serde(default = "default_match_count")]
    pub match_count: u32,
}

fn default_request_timeout() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

fn default_match_count() -> u32 {
    DEFAULT_MATCH_COUNT
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            request_timeout_secs: default_request_timeout(),
            match_count: default_match_count(),
        }
    }
}

/// Presentation defaults
#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_region")]
    pub default_region: String,
}

fn default_region() -> String {
    DEFAULT_REGION.to_string()
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            default_region: default_region(),
        }
    }
}

/// `[logging]` section
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    /// `pretty` or `json`
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Read and parse `path`
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::from_toml_str(&content).map_err(|error| ConfigError::Parse {
            path: path.to_path_buf(),
            error,
        })
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, String> {
        let config: Config = toml::from_str(content).map_err(|e| e.to_string())?;
        config.validate()?;
        Ok(config)
    }

    /// [`Config::load`] followed by the `RIFT_REWIND_*` overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Defaults plus `RIFT_REWIND_*` overrides
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// First readable file among the user config dir and `./config.toml`,
    /// else [`Config::from_env`]
    #[cfg(feature = "native")]
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("rift-rewind").join("config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path in config_paths.iter().flatten() {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var("RIFT_REWIND_API_URL") {
            if !url.trim().is_empty() {
                self.api.base_url = Some(url);
            }
        }
        if let Ok(count) = std::env::var("RIFT_REWIND_MATCH_COUNT") {
            match count.parse() {
                Ok(n) if n > 0 => self.api.match_count = n,
                _ => tracing::warn!("Ignoring invalid RIFT_REWIND_MATCH_COUNT={:?}", count),
            }
        }
        if let Ok(level) = std::env::var("RIFT_REWIND_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("RIFT_REWIND_LOG_FORMAT") {
            self.logging.format = format;
        }
    }

    fn validate(&self) -> Result<(), String> {
        if self.api.match_count == 0 {
            return Err("api.match_count must be at least 1".to_string());
        }
        if self.api.request_timeout_secs == 0 {
            return Err("api.request_timeout_secs must be at least 1".to_string());
        }
        Ok(())
    }

    /// Client settings derived from this configuration
    pub fn client_config(&self) -> ClientConfig {
        let mut client = ClientConfig::resolve(self.api.base_url.as_deref(), None);
        client.request_timeout = Duration::from_secs(self.api.request_timeout_secs);
        client.match_count = self.api.match_count;
        client
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Commented TOML printed by `rift-rewind init-config`
pub fn generate_default_config() -> String {
    format!(
        r#"# Rift Rewind Configuration
#
# Environment variables override these settings:
# - RIFT_REWIND_API_URL
# - RIFT_REWIND_MATCH_COUNT
# - RIFT_REWIND_LOG_LEVEL
# - RIFT_REWIND_LOG_FORMAT

[api]
# Backend base URL. Leave unset to use the production backend.
# base_url = "{local}"

# Applies to every request; AI generation can take minutes
request_timeout_secs = {timeout}

# Matches analysed per request
match_count = {matches}

[ui]
default_region = "{region}"

[logging]
# trace, debug, info, warn, error
level = "info"

# pretty or json
format = "pretty"
"#,
        local = DEFAULT_LOCAL_API_URL,
        timeout = DEFAULT_REQUEST_TIMEOUT_SECS,
        matches = DEFAULT_MATCH_COUNT,
        region = DEFAULT_REGION,
    )
}
