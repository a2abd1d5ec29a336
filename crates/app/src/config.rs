//! Configuration loading — JSON document with per-field defaults.
//!
//! The host page may embed the document; every field has a sensible default
//! so it is optional, and so is each section within it.

use std::time::Duration;

use gpro_domain::run::{DEFAULT_FRESH_THRESHOLD, DEFAULT_SOFT_THRESHOLD, Thresholds};
use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Backend endpoint paths.
    pub api: ApiConfig,
    /// Status poll settings.
    pub polling: PollingConfig,
    /// Fallback thresholds for forms that omit them.
    pub thresholds: ThresholdConfig,
    /// Theme preference settings.
    pub theme: ThemeConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// Backend endpoint paths, relative to the page origin.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub start: String,
    pub stop: String,
    pub status: String,
    pub plot: String,
    pub download: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PollingConfig {
    /// Delay between two status fetches, in milliseconds.
    pub interval_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ThresholdConfig {
    pub soft: u32,
    pub fresh: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// `localStorage` key holding `"true"` or `"false"`.
    pub storage_key: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Most verbose level emitted (`trace`, `debug`, `info`, `warn`, `error`).
    pub level: String,
}

impl DashboardConfig {
    /// Parse and validate a JSON configuration document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the document is malformed, or
    /// [`ConfigError::Validation`] if a value is out of range.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.polling.interval_ms == 0 {
            return Err(ConfigError::Validation(
                "polling interval must be non-zero".to_string(),
            ));
        }
        if self.logging.level.parse::<tracing::Level>().is_err() {
            return Err(ConfigError::Validation(format!(
                "unknown log level {:?}",
                self.logging.level
            )));
        }
        Ok(())
    }
}

impl PollingConfig {
    #[must_use]
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

impl ThresholdConfig {
    #[must_use]
    pub fn defaults(&self) -> Thresholds {
        Thresholds {
            soft: self.soft,
            fresh: self.fresh,
        }
    }
}

impl LoggingConfig {
    /// Parsed level, falling back to `INFO` for unknown names.
    #[must_use]
    pub fn max_level(&self) -> tracing::Level {
        self.level.parse().unwrap_or(tracing::Level::INFO)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            start: "/api/start".to_string(),
            stop: "/api/stop".to_string(),
            status: "/api/status".to_string(),
            plot: "/api/plot_img".to_string(),
            download: "/api/download_csv".to_string(),
        }
    }
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self { interval_ms: 1000 }
    }
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            soft: DEFAULT_SOFT_THRESHOLD,
            fresh: DEFAULT_FRESH_THRESHOLD,
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: "dark-mode".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// JSON parse failure.
    #[error("failed to parse configuration")]
    Parse(#[from] serde_json::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
