//! Server Settings
//!
//! Layered configuration: built-in defaults, then an optional settings file,
//! then `CHATBOT__SECTION__KEY` environment overrides.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Settings file looked up when `CHATBOT_CONFIG` is unset (any supported extension)
pub const DEFAULT_CONFIG_FILE: &str = "config/chatbot";

/// Environment variable naming an explicit settings file
pub const CONFIG_PATH_VAR: &str = "CHATBOT_CONFIG";

/// Prefix for environment overrides
pub const ENV_PREFIX: &str = "CHATBOT";

/// Top-level settings
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub rules: RulesSettings,
    pub logging: LoggingSettings,
    pub metrics: MetricsSettings,
}

/// HTTP listener settings
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    /// Directory served under `/static`
    pub static_dir: PathBuf,
}

impl ServerSettings {
    /// `host:port` string for binding
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Rule table location
#[derive(Debug, Clone, Deserialize)]
pub struct RulesSettings {
    pub path: PathBuf,
}

/// Log output settings
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    /// One of trace, debug, info, warn, error
    pub level: String,
    /// Emit JSON lines instead of human-readable output
    pub json: bool,
}

/// Prometheus exporter settings
#[derive(Debug, Clone, Deserialize)]
pub struct MetricsSettings {
    pub enabled: bool,
}

impl Settings {
    /// Load settings from the default sources
    pub fn load() -> Result<Self, ConfigError> {
        match std::env::var(CONFIG_PATH_VAR) {
            Ok(path) => Self::build(Some(Path::new(&path)), ENV_PREFIX),
            Err(_) => Self::build(None, ENV_PREFIX),
        }
    }

    /// Build settings from an explicit file (required) or the default file
    /// (optional), with environment overrides under `env_prefix`
    pub fn build(file: Option<&Path>, env_prefix: &str) -> Result<Self, ConfigError> {
        let file_source = match file {
            Some(path) => File::from(path).required(true),
            None => File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 5000)?
            .set_default("server.static_dir", "static")?
            .set_default("rules.path", "data/responses.json")?
            .set_default("logging.level", "info")?
            .set_default("logging.json", false)?
            .set_default("metrics.enabled", true)?
            .add_source(file_source)
            .add_source(
                Environment::with_prefix(env_prefix)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}
