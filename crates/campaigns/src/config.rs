//! Runtime settings for the campaign services
//!
//! Settings are loaded from (in order of priority):
//! 1. JSON file (~/.config/harbor/harbor.json)
//! 2. Runtime environment variables
//! 3. Built-in defaults

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::storage::SESSION_FILE;

/// Settings filename in the Harbor config directory
const CONFIG_FILE: &str = "harbor.json";

/// Simulated backend latency applied before every store mutation
pub const DEFAULT_LATENCY_MS: u64 = 800;

const LATENCY_ENV: &str = "HARBOR_LATENCY_MS";
const SESSION_ENV: &str = "HARBOR_SESSION_FILE";

/// Settings shared by the campaign and user services
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HarborConfig {
    /// Milliseconds to wait before each simulated backend operation
    pub latency_ms: u64,
    /// Where the signed-in profile is persisted; defaults to the config dir
    pub session_file: Option<PathBuf>,
}

impl Default for HarborConfig {
    fn default() -> Self {
        Self {
            latency_ms: DEFAULT_LATENCY_MS,
            session_file: None,
        }
    }
}

impl HarborConfig {
    /// Load settings using the following priority:
    /// 1. JSON file (~/.config/harbor/harbor.json)
    /// 2. Runtime environment variables
    /// 3. Defaults
    pub fn load() -> Result<Self> {
        if config::config_exists(CONFIG_FILE) {
            return config::load_json(CONFIG_FILE);
        }
        Self::from_env()
    }

    /// Load settings from a specific JSON file
    pub fn from_file(path: &Path) -> Result<Self> {
        config::load_json_file(path)
    }

    /// Parse settings from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse settings JSON")
    }

    /// Load settings from environment variables, falling back to defaults
    pub fn from_env() -> Result<Self> {
        Self::from_vars(
            std::env::var(LATENCY_ENV).ok(),
            std::env::var(SESSION_ENV).ok(),
        )
    }

    fn from_vars(latency: Option<String>, session_file: Option<String>) -> Result<Self> {
        let mut settings = Self::default();
        if let Some(latency) = latency {
            settings.latency_ms = latency
                .trim()
                .parse()
                .with_context(|| format!("{} is not a number: {:?}", LATENCY_ENV, latency))?;
        }
        if let Some(path) = session_file.filter(|p| !p.is_empty()) {
            settings.session_file = Some(PathBuf::from(path));
        }
        Ok(settings)
    }

    /// Settings with no simulated latency
    pub fn immediate() -> Self {
        Self {
            latency_ms: 0,
            ..Self::default()
        }
    }

    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }

    /// Resolved session file path (configured, else the config dir default)
    pub fn session_path(&self) -> Option<PathBuf> {
        self.session_file
            .clone()
            .or_else(|| config::config_path(SESSION_FILE))
    }
}
