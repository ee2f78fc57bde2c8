//! Remembered fetch parameters

use pws_core::error::{PwsError, Result};
use pws_core::Unit;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Base parameters remembered between runs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub api_key: Option<String>,
    pub station_id: Option<String>,
    pub unit: Option<Unit>,
    pub remember_me: bool,
}

/// TOML file holding [`Preferences`]
pub struct PreferenceStore {
    path: PathBuf,
}

impl PreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `preferences.toml` inside the default data directory
    pub fn default_location() -> Self {
        Self::new(crate::default_data_dir().join("preferences.toml"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load preferences; a missing or unreadable file yields defaults
    pub fn load(&self) -> Preferences {
        let content = match fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(_) => return Preferences::default(),
        };
        match toml::from_str(&content) {
            Ok(prefs) => prefs,
            Err(e) => {
                warn!("Ignoring unreadable preferences {:?}: {}", self.path, e);
                Preferences::default()
            }
        }
    }

    pub fn save(&self, prefs: &Preferences) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        let content = toml::to_string_pretty(prefs)
            .map_err(|e| PwsError::Config(format!("Failed to encode preferences: {}", e)))?;
        fs::write(&self.path, content)?;
        debug!("Saved preferences to {:?}", self.path);
        Ok(())
    }

    /// Remove stored preferences; succeeds when nothing was stored
    pub fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                debug!("Cleared preferences at {:?}", self.path);
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// Save when remember-me is set, clear otherwise
    pub fn sync(&self, prefs: &Preferences) -> Result<()> {
        if prefs.remember_me {
            self.save(prefs)
        } else {
            self.clear()
        }
    }
}
