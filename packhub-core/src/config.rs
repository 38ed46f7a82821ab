//! Packhub configuration (config.yaml)
//!
//! Loaded from the platform config directory, falling back to defaults
//! when no file exists.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::search::DEFAULT_FACET_LIMIT;

/// Config file name inside the config directory
pub const CONFIG_FILE: &str = "config.yaml";

/// User configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HubConfig {
    /// Index file used when none is given on the command line
    pub index_path: Option<PathBuf>,

    /// Facet checkboxes shown before the list collapses
    pub facet_limit: usize,

    /// Warn about version groups that are not ordered newest-first
    pub check_version_order: bool,
}

impl Default for HubConfig {
    fn default() -> Self {
        Self {
            index_path: None,
            facet_limit: DEFAULT_FACET_LIMIT,
            check_version_order: true,
        }
    }
}

impl HubConfig {
    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        Self::load_from_path(&Self::default_config_path()?)
    }

    /// Load configuration from a specific path, or defaults if it is missing
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;

        serde_yaml_ng::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))
    }

    /// Save configuration to a specific path
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let content = serde_yaml_ng::to_string(self).context("Failed to serialize config")?;

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config: {}", path.display()))?;

        Ok(())
    }

    /// Get the default config file path
    pub fn default_config_path() -> Result<PathBuf> {
        let dirs = directories::ProjectDirs::from("org", "packhub", "packhub")
            .context("Could not determine config directory")?;
        Ok(dirs.config_dir().join(CONFIG_FILE))
    }
}
