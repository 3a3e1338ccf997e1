//! Configuration for the Task Manager client
//!
//! Supports loading configuration from:
//! 1. CLI --config argument
//! 2. ~/.config/pulse/config.{PULSE_ENV}.json
//! 3. Default values
//!
//! Where PULSE_ENV can be: production (default), development, test
//!
//! Environment variables override config file values:
//! - TASK_MANAGER_HOST
//! - TASK_MANAGER_PORT
//! - TASK_MANAGER_TIMEOUT
//! - USE_MOCK_CLIENT

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse config JSON: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Connection settings for the remote Task Manager service, plus the flag
/// selecting the in-memory client for test runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Task Manager host
    #[serde(default = "default_host")]
    pub host: String,

    /// Task Manager port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Use the in-memory mock client instead of HTTP
    #[serde(default)]
    pub use_mock: bool,
}

fn default_host() -> String {
    "localhost".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_timeout() -> u64 {
    30
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            timeout_secs: default_timeout(),
            use_mock: false,
        }
    }
}

/// Truthy string values accepted for boolean flags
pub fn is_truthy(value: &str) -> bool {
    value.eq_ignore_ascii_case("true") || value == "1" || value.eq_ignore_ascii_case("yes")
}

impl ClientConfig {
    /// Load configuration from file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: ClientConfig = serde_json::from_str(&content)?;

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Load configuration with standard priority:
    /// 1. Explicit path
    /// 2. ~/.config/pulse/config.{PULSE_ENV}.json
    /// 3. Defaults
    pub fn load(explicit_path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit_path {
            if path.exists() {
                tracing::info!("Loading config from: {:?}", path);
                return Self::from_file(path);
            } else {
                return Err(ConfigError::ValidationError(format!(
                    "Config file not found: {:?}",
                    path
                )));
            }
        }

        let env = std::env::var("PULSE_ENV").unwrap_or_else(|_| "production".to_string());

        if let Some(config_dir) = dirs::config_dir() {
            let config_path = config_dir.join("pulse").join(format!("config.{}.json", env));

            if config_path.exists() {
                tracing::info!("Loading config from: {:?}", config_path);
                return Self::from_file(&config_path);
            }
        }

        tracing::info!("Using default configuration with environment overrides");
        let mut config = Self::default();
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(&mut self) {
        if let Ok(host) = std::env::var("TASK_MANAGER_HOST") {
            self.host = host;
        }

        if let Ok(port) = std::env::var("TASK_MANAGER_PORT") {
            if let Ok(port) = port.parse() {
                self.port = port;
            } else {
                tracing::warn!("Ignoring non-numeric TASK_MANAGER_PORT: {}", port);
            }
        }

        if let Ok(timeout) = std::env::var("TASK_MANAGER_TIMEOUT") {
            if let Ok(timeout) = timeout.parse() {
                self.timeout_secs = timeout;
            } else {
                tracing::warn!("Ignoring non-numeric TASK_MANAGER_TIMEOUT: {}", timeout);
            }
        }

        if let Ok(use_mock) = std::env::var("USE_MOCK_CLIENT") {
            self.use_mock = is_truthy(&use_mock);
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.host.is_empty() {
            return Err(ConfigError::ValidationError(
                "Host cannot be empty".to_string(),
            ));
        }

        if self.port == 0 {
            return Err(ConfigError::ValidationError(
                "Port must be greater than 0".to_string(),
            ));
        }

        if self.timeout_secs == 0 {
            return Err(ConfigError::ValidationError(
                "timeout_secs must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Base URL of the Task Manager service
    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }

    /// Get the config directory path
    pub fn config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("pulse"))
    }
}
