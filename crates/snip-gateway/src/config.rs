use serde::Deserialize;
use snip_core::{Application, TenantRegistry};
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Top-level service configuration, loaded once at startup.
///
/// The file dialect matches the original service's `config.json`:
/// a list of applications plus the listen port and log level.
#[derive(Debug, Clone, Deserialize)]
pub struct Configuration {
    pub applications: Vec<Application>,
    pub port: u16,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Configuration {
    /// Reads and validates the configuration file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Self::parse(&raw)
    }

    /// Parses and validates a raw JSON configuration document.
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        let config: Configuration = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.applications.is_empty() {
            return Err(ConfigError::Invalid(
                "at least one application must be configured".to_string(),
            ));
        }

        let mut ids = HashSet::new();
        for app in &self.applications {
            if !ids.insert(app.id.as_str()) {
                return Err(ConfigError::Invalid(format!(
                    "duplicate application id '{}'",
                    app.id
                )));
            }
            if app.characters.is_empty() {
                return Err(ConfigError::Invalid(format!(
                    "application '{}' has an empty alphabet",
                    app.id
                )));
            }
            if app.max_length == 0 {
                return Err(ConfigError::Invalid(format!(
                    "application '{}' has a zero identifier length",
                    app.id
                )));
            }
        }

        Ok(())
    }

    /// Logs every loaded application and its keyspace size.
    pub fn announce(&self) {
        for app in &self.applications {
            info!(
                application = app.display_name(),
                "loaded application from configuration"
            );
            debug!(
                application = app.display_name(),
                combinations = app.keyspace_size(),
                "possible identifier combinations"
            );
        }
    }

    /// Builds the tenant registry backing request-time lookups.
    pub fn registry(&self) -> TenantRegistry {
        TenantRegistry::new(self.applications.clone())
    }
}
