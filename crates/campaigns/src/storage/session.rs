//! File-backed session persistence
//!
//! The signed-in profile is written as a JSON blob, by default to
//! ~/.config/harbor/session.json.

use anyhow::{Context, Result};
use log::debug;
use std::path::{Path, PathBuf};

use super::SessionStore;
use crate::config::HarborConfig;
use crate::models::User;

/// Session filename in the Harbor config directory
pub const SESSION_FILE: &str = "session.json";

/// SessionStore that keeps the signed-in profile in a JSON file
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    /// Use a specific file for the session
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Use the configured session file, or session.json in the Harbor
    /// config directory
    pub fn from_settings(settings: &HarborConfig) -> Result<Self> {
        let path = settings
            .session_path()
            .context("Could not determine config directory")?;
        Ok(Self::new(path))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> Result<Option<User>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let user: User = config::load_json_file(&self.path)?;
        debug!("Restored session for {}", user.id.as_str());
        Ok(Some(user))
    }

    fn save(&self, user: &User) -> Result<()> {
        config::save_json_file(&self.path, user)
    }

    fn clear(&self) -> Result<()> {
        if self.path.exists() {
            std::fs::remove_file(&self.path).with_context(|| {
                format!("Failed to remove session file: {}", self.path.display())
            })?;
        }
        Ok(())
    }
}
