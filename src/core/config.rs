//! Configuration management for the places service.
//!
//! This module handles loading configuration from TOML files and
//! environment variables, with sensible defaults for all settings.

use crate::core::error::{PlacesError, Result};
use crate::core::xdg::XdgDirs;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Secret used when nothing else is configured. Only fit for local runs.
pub const DEFAULT_JWT_SECRET: &str = "JWT_SECRET_KEY";

/// Longest accepted token lifetime, one year
pub const MAX_TOKEN_TTL_MINUTES: u64 = 365 * 24 * 60;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub pagination: PaginationConfig,
}

/// HTTP listener configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

/// Search engine connection configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EngineConfig {
    /// Base URL of the engine, e.g. http://localhost:9200
    #[serde(default = "default_engine_url")]
    pub url: String,

    /// Index queried by the list and nearest routes
    #[serde(default = "default_index")]
    pub index: String,

    /// Value written to index.max_result_window after a bulk load
    #[serde(default = "default_max_result_window")]
    pub max_result_window: u64,

    /// Per-request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_sec: u64,
}

/// Token signing configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    #[serde(default = "default_secret")]
    pub secret: String,

    #[serde(default = "default_token_ttl")]
    pub token_ttl_minutes: u64,
}

/// Local files the service reads
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PathsConfig {
    /// Handlebars template for the HTML listing
    #[serde(default = "default_template")]
    pub template: PathBuf,

    /// Index mapping sent on index creation
    #[serde(default = "default_schema")]
    pub schema: PathBuf,

    /// Tab-separated dataset used for bulk loading
    #[serde(default = "default_dataset")]
    pub dataset: PathBuf,

    /// Whether the dataset's first row is a header
    #[serde(default = "default_dataset_has_headers")]
    pub dataset_has_headers: bool,
}

/// Page sizes
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PaginationConfig {
    #[serde(default = "default_list_page_size")]
    pub list_page_size: u64,

    #[serde(default = "default_nearest_size")]
    pub nearest_size: u64,
}

// Default value functions
fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8888
}

fn default_engine_url() -> String {
    "http://localhost:9200".to_string()
}

fn default_index() -> String {
    "places".to_string()
}

fn default_max_result_window() -> u64 {
    15000
}

fn default_request_timeout() -> u64 {
    30
}

fn default_secret() -> String {
    DEFAULT_JWT_SECRET.to_string()
}

fn default_token_ttl() -> u64 {
    30
}

fn default_template() -> PathBuf {
    PathBuf::from("templates/index.html")
}

fn default_schema() -> PathBuf {
    PathBuf::from("config/schema.json")
}

fn default_dataset() -> PathBuf {
    PathBuf::from("data/data.csv")
}

fn default_dataset_has_headers() -> bool {
    true
}

fn default_list_page_size() -> u64 {
    10
}

fn default_nearest_size() -> u64 {
    3
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            url: default_engine_url(),
            index: default_index(),
            max_result_window: default_max_result_window(),
            request_timeout_sec: default_request_timeout(),
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            secret: default_secret(),
            token_ttl_minutes: default_token_ttl(),
        }
    }
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            template: default_template(),
            schema: default_schema(),
            dataset: default_dataset(),
            dataset_has_headers: default_dataset_has_headers(),
        }
    }
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            list_page_size: default_list_page_size(),
            nearest_size: default_nearest_size(),
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| PlacesError::ConfigError(format!("Failed to read config file: {e}")))?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load config with priority: env vars > TOML > defaults
    pub fn load() -> Result<Self> {
        let xdg = XdgDirs::new();
        Self::load_with_xdg(&xdg)
    }

    /// Load config with explicit XDG directories
    ///
    /// Priority order:
    /// 1. PLACES_CONFIG env var
    /// 2. XDG config file (~/.config/places/config.toml)
    /// 3. ./places.toml
    /// 4. Defaults
    pub fn load_with_xdg(xdg: &XdgDirs) -> Result<Self> {
        let mut config = if let Ok(config_path) = env::var("PLACES_CONFIG") {
            Self::from_file(config_path)?
        } else {
            let xdg_config = xdg.config_file();
            if xdg_config.exists() {
                Self::from_file(xdg_config)?
            } else if Path::new("places.toml").exists() {
                Self::from_file("places.toml")?
            } else {
                Self::default()
            }
        };

        config.merge_env();
        config.validate()?;

        Ok(config)
    }

    /// Merge configuration with environment variables
    pub fn merge_env(&mut self) {
        // Legacy deployment variables first so the PLACES_* ones win
        if let Ok(port) = env::var("APP_PORT") {
            if let Ok(p) = port.parse() {
                self.server.port = p;
            }
        }
        if let (Ok(host), Ok(port)) = (env::var("DB_HOST"), env::var("DB_PORT")) {
            self.engine.url = format!("http://{host}:{port}");
        }

        // Server configuration
        if let Ok(host) = env::var("PLACES_HOST") {
            self.server.host = host;
        }
        if let Ok(port) = env::var("PLACES_PORT") {
            if let Ok(p) = port.parse() {
                self.server.port = p;
            }
        }

        // Engine configuration
        if let Ok(url) = env::var("PLACES_ENGINE_URL") {
            self.engine.url = url;
        }
        if let Ok(index) = env::var("PLACES_INDEX") {
            self.engine.index = index;
        }
        if let Ok(window) = env::var("PLACES_MAX_RESULT_WINDOW") {
            if let Ok(w) = window.parse() {
                self.engine.max_result_window = w;
            }
        }
        if let Ok(timeout) = env::var("PLACES_REQUEST_TIMEOUT_SEC") {
            if let Ok(t) = timeout.parse() {
                self.engine.request_timeout_sec = t;
            }
        }

        // Auth configuration
        if let Ok(secret) = env::var("PLACES_JWT_SECRET") {
            self.auth.secret = secret;
        }
        if let Ok(ttl) = env::var("PLACES_TOKEN_TTL_MINUTES") {
            if let Ok(t) = ttl.parse() {
                self.auth.token_ttl_minutes = t;
            }
        }

        // Paths
        if let Ok(template) = env::var("PLACES_TEMPLATE") {
            self.paths.template = PathBuf::from(template);
        }
        if let Ok(schema) = env::var("PLACES_SCHEMA") {
            self.paths.schema = PathBuf::from(schema);
        }
        if let Ok(dataset) = env::var("PLACES_DATASET") {
            self.paths.dataset = PathBuf::from(dataset);
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if reqwest::Url::parse(&self.engine.url).is_err() {
            return Err(PlacesError::ConfigError(format!(
                "Engine URL is not a valid URL: {}",
                self.engine.url
            )));
        }

        if self.engine.index.trim().is_empty() {
            return Err(PlacesError::ConfigError(
                "Engine index must be non-empty".to_string(),
            ));
        }

        if self.engine.max_result_window == 0 {
            return Err(PlacesError::ConfigError(
                "Max result window must be non-zero".to_string(),
            ));
        }

        if self.engine.request_timeout_sec == 0 {
            return Err(PlacesError::ConfigError(
                "Request timeout must be non-zero".to_string(),
            ));
        }

        if self.auth.secret.is_empty() {
            return Err(PlacesError::ConfigError(
                "JWT secret must be non-empty".to_string(),
            ));
        }

        if self.auth.token_ttl_minutes == 0 {
            return Err(PlacesError::ConfigError(
                "Token TTL must be non-zero".to_string(),
            ));
        }

        if self.auth.token_ttl_minutes > MAX_TOKEN_TTL_MINUTES {
            return Err(PlacesError::ConfigError(format!(
                "Token TTL must be at most {MAX_TOKEN_TTL_MINUTES} minutes, got {}",
                self.auth.token_ttl_minutes
            )));
        }

        if self.pagination.list_page_size == 0 || self.pagination.nearest_size == 0 {
            return Err(PlacesError::ConfigError(
                "Page sizes must be non-zero".to_string(),
            ));
        }

        Ok(())
    }

    /// Log configuration (redacting the secret)
    pub fn log_config(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen: {}:{}", self.server.host, self.server.port);
        tracing::info!("  Engine: {}", self.engine.url);
        tracing::info!("  Index: {}", self.engine.index);
        tracing::info!("  Max result window: {}", self.engine.max_result_window);
        tracing::info!("  Request timeout: {}s", self.engine.request_timeout_sec);
        tracing::info!("  Token TTL: {} min", self.auth.token_ttl_minutes);
        tracing::info!("  Template: {:?}", self.paths.template);
        tracing::info!("  Schema: {:?}", self.paths.schema);
        tracing::info!("  Dataset: {:?}", self.paths.dataset);
        tracing::info!(
            "  Page sizes: list={} nearest={}",
            self.pagination.list_page_size,
            self.pagination.nearest_size
        );
        if self.auth.secret == DEFAULT_JWT_SECRET {
            tracing::warn!("Using the built-in JWT secret; set PLACES_JWT_SECRET");
        }
    }
}
