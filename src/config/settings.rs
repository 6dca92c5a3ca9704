//! Host configuration file

use anyhow::Result;
use jellyfin_nowplaying_core::{MeasureConfig, DEFAULT_TIMEOUT_SECS};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration of the polling host
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostConfig {
    /// Polling period in milliseconds
    #[serde(default = "default_update_interval")]
    pub update_interval_ms: u64,
    /// HTTP timeout for the session query, in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    /// Measure groups; names resolve within a scope only
    #[serde(default)]
    pub scopes: Vec<ScopeConfig>,
}

fn default_update_interval() -> u64 {
    1000
}

fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

/// A named group of measures (a skin)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScopeConfig {
    pub name: String,
    #[serde(default)]
    pub measures: Vec<MeasureEntry>,
}

/// One measure of a scope, with its host options inline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasureEntry {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(flatten)]
    pub options: MeasureConfig,
}

impl HostConfig {
    /// Load configuration from the default location, or defaults if absent
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            return Ok(Self::default());
        }

        Self::load_from_path(&config_path)
    }

    /// Load configuration from a specific file path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a specific file path
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get the default configuration file path
    pub fn config_path() -> Result<PathBuf> {
        let dirs = directories::ProjectDirs::from("org", "jellyfin-nowplaying", "nowplaying")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        Ok(dirs.config_dir().join("config.json"))
    }
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            update_interval_ms: default_update_interval(),
            timeout_secs: default_timeout(),
            scopes: Vec::new(),
        }
    }
}
