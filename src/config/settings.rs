//! Client configuration settings
//!
//! Defines configuration structures and loading logic from the environment or a JSON file

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

/// Address of a locally running Ollama server
pub const DEFAULT_BASE_URL: &str = "http://localhost:11434";

/// Main client configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// HTTP client configuration
    #[serde(default)]
    pub client: ClientConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP client configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Ollama server base URL
    #[serde(rename = "baseUrl", default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds, `None` waits indefinitely
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u64>,

    /// Send absent optional payload fields as explicit JSON nulls
    #[serde(rename = "includeNullFields", default = "default_true")]
    pub include_null_fields: bool,

    /// User-Agent header value
    #[serde(rename = "userAgent", default = "default_user_agent")]
    pub user_agent: String,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level
    #[serde(default = "default_level")]
    pub level: String,
    /// Log format (text/json)
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_true() -> bool {
    true
}

fn default_user_agent() -> String {
    format!("{}/{}", crate::NAME, crate::VERSION)
}

fn default_level() -> String {
    "info".to_string()
}

fn default_format() -> String {
    "text".to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout: None,
            include_null_fields: true,
            user_agent: default_user_agent(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: default_format(),
        }
    }
}

impl ClientConfig {
    /// Timeout as a `Duration`
    pub fn timeout_duration(&self) -> Option<Duration> {
        self.timeout.map(Duration::from_secs)
    }
}

impl Settings {
    /// Create a configuration from environment variables
    ///
    /// Reads a `.env` file first if one exists.
    pub fn new() -> Result<Self> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create a configuration from an arbitrary key lookup
    pub fn from_lookup<F>(get: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get_or = |key: &str, default: String| get(key).unwrap_or(default);

        // Unset or blank timeout waits indefinitely
        let timeout = match get("OLLAMA_TIMEOUT") {
            Some(value) if !value.trim().is_empty() => Some(
                value
                    .trim()
                    .parse::<u64>()
                    .context("Invalid timeout value")?,
            ),
            _ => None,
        };

        let settings = Self {
            client: ClientConfig {
                base_url: get_or("OLLAMA_BASE_URL", default_base_url()),
                timeout,
                include_null_fields: get_or("OLLAMA_INCLUDE_NULL_FIELDS", "true".to_string())
                    .parse()
                    .context("Invalid include null fields flag")?,
                user_agent: get_or("OLLAMA_USER_AGENT", default_user_agent()),
            },
            logging: LoggingConfig {
                level: get_or("RUST_LOG", default_level()),
                format: get_or("LOG_FORMAT", default_format()),
            },
        };

        settings.validate()?;

        Ok(settings)
    }

    /// Load configuration from JSON file
    pub fn load(path: &Path) -> Result<Self> {
        info!("Loading configuration from: {:?}", path);

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        let settings: Settings =
            serde_json::from_str(&content).with_context(|| "Failed to parse config JSON")?;

        settings.validate()?;

        debug!("Loaded client configuration for {}", settings.client.base_url);
        Ok(settings)
    }

    /// Validate configuration validity
    pub fn validate(&self) -> Result<()> {
        // Validate URL format
        let url = Url::parse(&self.client.base_url)
            .with_context(|| format!("Invalid base URL: {}", self.client.base_url))?;

        if !matches!(url.scheme(), "http" | "https") {
            anyhow::bail!("Invalid base URL scheme '{}', should be http or https", url.scheme());
        }

        // Validate timeout value
        if self.client.timeout == Some(0) {
            anyhow::bail!("Timeout value cannot be 0");
        }

        // Validate log level
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            anyhow::bail!("Invalid log level: {}", self.logging.level);
        }

        // Validate log format
        let valid_formats = ["text", "json"];
        if !valid_formats.contains(&self.logging.format.as_str()) {
            anyhow::bail!("Invalid log format: {}", self.logging.format);
        }

        Ok(())
    }
}
