//! Runtime configuration.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::fixtures::SIMULATED_DELAY;

/// Application name.
pub const APP_NAME: &str = "CareSync";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Log filter used when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "info,caresync_core=debug";

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid reference date (expected YYYY-MM-DD): {0}")]
    InvalidDate(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Settings for one dashboard session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    /// Artificial latency of each fixture fetch
    pub fetch_delay_ms: u64,
    /// Date treated as "today" by the views; the current UTC date when unset
    pub reference_date: Option<String>,
    /// `tracing` filter directive
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            fetch_delay_ms: SIMULATED_DELAY.as_millis() as u64,
            reference_date: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl AppConfig {
    /// Read and validate a JSON config file.
    pub fn load<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Parse and validate a JSON config document. Missing keys take defaults.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if let Some(date) = &self.reference_date {
            let parsed = chrono::NaiveDate::parse_from_str(date, "%Y-%m-%d")
                .map_err(|_| ConfigError::InvalidDate(date.clone()))?;
            // Reject unpadded forms like 2024-8-5, which would break string ordering.
            if parsed.format("%Y-%m-%d").to_string() != *date {
                return Err(ConfigError::InvalidDate(date.clone()));
            }
        }
        Ok(())
    }

    pub fn fetch_delay(&self) -> Duration {
        Duration::from_millis(self.fetch_delay_ms)
    }

    /// The reference date for "today" views.
    pub fn today(&self) -> String {
        self.reference_date
            .clone()
            .unwrap_or_else(crate::views::today_iso)
    }
}
