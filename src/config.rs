//! Configuration System
//!
//! Loads settings from a TOML document and applies key/value overrides.
//! Natively the overrides come from environment variables; the browser
//! front-end feeds them from `localStorage` instead.

use serde::Deserialize;
use std::path::PathBuf;

use crate::notify::DEFAULT_NOTIFICATION_TIMEOUT_MS;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub identity: IdentityConfig,

    #[serde(default)]
    pub ui: UiConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// REST API location
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "http://127.0.0.1:8000/api/".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Identity provider tenant
#[derive(Debug, Clone, Deserialize)]
pub struct IdentityConfig {
    /// Tenant domain, e.g. `example.us.auth0.com`
    #[serde(default)]
    pub domain: String,

    #[serde(default)]
    pub client_id: String,

    /// Where the provider sends the browser back; the page origin when unset
    #[serde(default)]
    pub redirect_uri: Option<String>,

    #[serde(default = "default_scope")]
    pub scope: String,
}

fn default_scope() -> String {
    "openid profile email".to_string()
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            domain: String::new(),
            client_id: String::new(),
            redirect_uri: None,
            scope: default_scope(),
        }
    }
}

impl IdentityConfig {
    pub fn is_configured(&self) -> bool {
        !self.domain.is_empty() && !self.client_id.is_empty()
    }
}

/// View behavior knobs
#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_notification_timeout")]
    pub notification_timeout_ms: u32,

    /// Subject whose recommendations the dashboard shows
    #[serde(default = "default_recommendation_subject")]
    pub recommendation_subject: String,
}

fn default_notification_timeout() -> u32 {
    DEFAULT_NOTIFICATION_TIMEOUT_MS
}

fn default_recommendation_subject() -> String {
    "1".to_string()
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            notification_timeout_ms: default_notification_timeout(),
            recommendation_subject: default_recommendation_subject(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// Override keys understood by [`Config::apply_overrides`]
pub const OVERRIDE_KEYS: [&str; 7] = [
    "BOOKHIVE_API_URL",
    "BOOKHIVE_AUTH_DOMAIN",
    "BOOKHIVE_AUTH_CLIENT_ID",
    "BOOKHIVE_AUTH_REDIRECT_URI",
    "BOOKHIVE_RECOMMEND_SUBJECT",
    "BOOKHIVE_NOTIFY_TIMEOUT_MS",
    "BOOKHIVE_LOG_LEVEL",
];

impl Config {
    /// Parse a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: None,
            error: e.to_string(),
        })
    }

    /// Apply overrides from any key/value source
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("BOOKHIVE_API_URL") {
            self.api.base_url = url;
        }
        if let Some(domain) = lookup("BOOKHIVE_AUTH_DOMAIN") {
            self.identity.domain = domain;
        }
        if let Some(client_id) = lookup("BOOKHIVE_AUTH_CLIENT_ID") {
            self.identity.client_id = client_id;
        }
        if let Some(uri) = lookup("BOOKHIVE_AUTH_REDIRECT_URI") {
            self.identity.redirect_uri = Some(uri);
        }
        if let Some(subject) = lookup("BOOKHIVE_RECOMMEND_SUBJECT") {
            self.ui.recommendation_subject = subject;
        }
        if let Some(timeout) = lookup("BOOKHIVE_NOTIFY_TIMEOUT_MS") {
            match timeout.parse() {
                Ok(ms) => self.ui.notification_timeout_ms = ms,
                Err(_) => tracing::warn!(%timeout, "Ignoring invalid BOOKHIVE_NOTIFY_TIMEOUT_MS"),
            }
        }
        if let Some(level) = lookup("BOOKHIVE_LOG_LEVEL") {
            self.logging.level = level;
        }
    }

    /// Check values that would otherwise fail later at request time
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = reqwest::Url::parse(&self.api.base_url).map_err(|e| ConfigError::Invalid {
            field: "api.base_url",
            reason: e.to_string(),
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::Invalid {
                field: "api.base_url",
                reason: format!("unsupported scheme '{}'", url.scheme()),
            });
        }
        if self.ui.notification_timeout_ms == 0 {
            return Err(ConfigError::Invalid {
                field: "ui.notification_timeout_ms",
                reason: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl Config {
    /// Load configuration from a file
    pub fn load(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: Some(path.to_path_buf()),
            error: e.to_string(),
        })
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_overrides(|key| std::env::var(key).ok());
        config
    }

    /// Load from default locations, falling back to the environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("bookhive").join("config.toml")),
            Some(PathBuf::from("./bookhive.toml")),
        ];

        for path in config_paths.iter().flatten() {
            if path.exists() {
                match Self::load(path) {
                    Ok(mut config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        config.apply_overrides(|key| std::env::var(key).ok());
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
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config {path:?}: {error}")]
    Parse {
        path: Option<PathBuf>,
        error: String,
    },

    #[error("Invalid value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# BookHive Configuration
#
# Overrides (environment variables natively, localStorage keys in the browser):
# - BOOKHIVE_API_URL
# - BOOKHIVE_AUTH_DOMAIN
# - BOOKHIVE_AUTH_CLIENT_ID
# - BOOKHIVE_AUTH_REDIRECT_URI
# - BOOKHIVE_RECOMMEND_SUBJECT
# - BOOKHIVE_NOTIFY_TIMEOUT_MS
# - BOOKHIVE_LOG_LEVEL

[api]
# Base URL of the catalog REST API
base_url = "http://127.0.0.1:8000/api/"

[identity]
# Identity provider tenant and application
domain = ""
client_id = ""
# redirect_uri = "http://localhost:8080"
scope = "openid profile email"

[ui]
# Auto-dismiss delay for notifications (ms)
notification_timeout_ms = 3000

# Subject id used for dashboard recommendations
recommendation_subject = "1"

[logging]
# trace, debug, info, warn, error
level = "info"
"#
    .to_string()
}
