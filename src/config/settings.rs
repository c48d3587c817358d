//! Application configuration

use anyhow::{Context, Result};
use log::warn;
use serde::{Deserialize, Serialize};
use simtelemetry_types::Query;
use std::path::{Path, PathBuf};

/// Current config format version
pub const CONFIG_VERSION: u32 = 1;

fn default_version() -> u32 {
    CONFIG_VERSION
}

fn default_datasource_uid() -> String {
    "simtelemetry".to_string()
}

fn default_query_defaults() -> Query {
    Query::default_query()
}

/// Application-wide configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Version of the config format
    #[serde(default = "default_version")]
    pub version: u32,
    /// Datasource instance that live stream channels are scoped to
    #[serde(default = "default_datasource_uid")]
    pub datasource_uid: String,
    /// Defaults merged under every query before it is resolved
    #[serde(default = "default_query_defaults")]
    pub defaults: Query,
}

impl AppConfig {
    /// Load configuration from disk
    pub fn load() -> Result<Self> {
        Self::load_or_default(&Self::config_path()?)
    }

    /// Load configuration from disk, falling back to built-in settings on any error
    pub fn load_or_warn() -> Self {
        match Self::config_path() {
            Ok(path) => Self::load_or_warn_from(&path),
            Err(e) => {
                warn!("{}, using built-in config", e);
                Self::default()
            }
        }
    }

    /// Load `path`, or built-in settings when the file does not exist
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        Self::load_from_path(path)
    }

    /// Like [`AppConfig::load_or_default`], but a bad file is logged and ignored
    pub fn load_or_warn_from(path: &Path) -> Self {
        Self::load_or_default(path).unwrap_or_else(|e| {
            warn!("Failed to load config, using built-in config: {:#}", e);
            Self::default()
        })
    }

    /// Save configuration to disk
    pub fn save(&self) -> Result<()> {
        self.save_to_path(&Self::config_path()?)
    }

    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        let dirs = directories::ProjectDirs::from("io", "simtelemetry", "simtelemetry")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        Ok(dirs.config_dir().join("config.json"))
    }

    /// Load configuration from a specific file path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config = serde_json::from_str(&content)
            .with_context(|| format!("parsing config {}", path.display()))?;
        Ok(config)
    }

    /// Save configuration to a specific file path
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("writing config {}", path.display()))?;
        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            datasource_uid: default_datasource_uid(),
            defaults: default_query_defaults(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: AppConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.defaults.telemetry.as_deref(), Some("Time"));
        assert_eq!(config.defaults.with_streaming, Some(false));
    }

    #[test]
    fn test_save_and_load_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let mut config = AppConfig::default();
        config.datasource_uid = "P1809F7CD0C75ACF3".to_string();
        config.defaults.graph = Some(true);
        config.save_to_path(&path).unwrap();

        let loaded = AppConfig::load_from_path(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_file_gives_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        assert_eq!(AppConfig::load_or_default(&path).unwrap(), AppConfig::default());
        assert!(!path.exists());
    }

    #[test]
    fn test_corrupt_file_falls_back_with_warning() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ bad").unwrap();

        assert!(AppConfig::load_or_default(&path).is_err());
        assert_eq!(AppConfig::load_or_warn_from(&path), AppConfig::default());
    }

    #[test]
    fn test_load_reports_bad_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = AppConfig::load_from_path(&path).unwrap_err();
        assert!(err.to_string().starts_with("parsing config"));
    }
}
