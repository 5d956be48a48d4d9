//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `hubkit.toml` in the working directory. The file is optional,
//! but the installation id and access token must come from somewhere.
//! Environment variables take precedence over file values.

use hubkit_adapter_hub_http::HubConfig;
use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Hub connection settings.
    pub hub: HubConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "hubkitd=info,hubkit_app=info,hubkit_adapter_hub_http=info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from `hubkit.toml` (if present), apply
    /// environment-variable overrides, then validate.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is unreadable or malformed, or if the
    /// resulting configuration is incomplete.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("hubkit.toml")?;
        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(val) = var("HUBKIT_BASE_URL") {
            self.hub.base_url = val;
        }
        if let Some(val) = var("HUBKIT_APP_ID") {
            self.hub.app_id = val;
        }
        if let Some(val) = var("HUBKIT_ACCESS_TOKEN") {
            self.hub.access_token = val;
        }
        if let Some(secs) = var("HUBKIT_TIMEOUT_SECS").and_then(|val| val.parse().ok()) {
            self.hub.timeout_secs = secs;
        }
        if let Some(val) = var("HUBKIT_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.hub.app_id.trim().is_empty() {
            return Err(ConfigError::Validation("hub.app_id must be set".to_string()));
        }
        if self.hub.access_token.trim().is_empty() {
            return Err(ConfigError::Validation(
                "hub.access_token must be set".to_string(),
            ));
        }
        if self.hub.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "hub.timeout_secs must be non-zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
