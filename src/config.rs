//! Configuration handling for the TUI

use crate::order::DEFAULT_ENDPOINT;
use crate::state::HOME_PATH;
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Environment variable overriding the order endpoint
pub const ENDPOINT_ENV_VAR: &str = "PIZZA_ORDER_ENDPOINT";

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Order service endpoint
    pub order_endpoint: Option<String>,
    /// Route shown at startup
    pub start_path: Option<String>,
    /// Request timeout in seconds; unset keeps the HTTP client default
    pub request_timeout_secs: Option<u64>,
}

impl TuiConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("dev", "pizza", "pizza-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: TuiConfig = serde_json::from_str(&content)?;
                tracing::debug!("Loaded config from {}", path.display());
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Endpoint to post orders to: env var, then config file, then default
    pub fn endpoint(&self) -> String {
        self.endpoint_with_override(std::env::var(ENDPOINT_ENV_VAR).ok())
    }

    fn endpoint_with_override(&self, env_value: Option<String>) -> String {
        env_value
            .filter(|v| !v.trim().is_empty())
            .or_else(|| self.order_endpoint.clone())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string())
    }

    pub fn start_path(&self) -> &str {
        self.start_path.as_deref().unwrap_or(HOME_PATH)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}
