//! File-based logger configuration (YAML)
//!
//! The user-level file lives at `<config dir>/daylog/config.yaml`
//! (`~/.config/daylog/config.yaml` on Linux).

use std::fs;
use std::path::{Path, PathBuf};

use super::settings::{LoggerConfig, PartialConfig};
use crate::error::{LogError, LogResult};

/// A YAML configuration file holding a [`PartialConfig`]
///
/// Keys may be written in `snake_case` or `camelCase`. Any key left out falls
/// back to its default when the file is resolved.
///
/// ```yaml
/// name: billing
/// date_format: "dd/MM/yyyy HH:mm:ss.SSS"
/// displayed_levels: [info, warn, error]
/// persisted_levels: [warn, error]
/// base_path: /var/log/billing
/// ```
#[derive(Debug, Clone)]
pub struct ConfigFile {
    path: PathBuf,
}

impl ConfigFile {
    /// Use the config file at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The user-level config file
    pub fn user() -> Self {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")).join(".config"));
        Self::new(config_dir.join("daylog").join("config.yaml"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Read the partial configuration; a missing file reads as empty
    pub fn load(&self) -> LogResult<PartialConfig> {
        if !self.exists() {
            return Ok(PartialConfig::default());
        }

        let content = fs::read_to_string(&self.path).map_err(|source| LogError::ConfigRead {
            path: self.path.clone(),
            source,
        })?;

        if content.trim().is_empty() {
            return Ok(PartialConfig::default());
        }

        serde_yaml::from_str(&content)
            .map_err(|e| LogError::ConfigParse(format!("Failed to parse YAML {}: {}", self.path.display(), e)))
    }

    /// Read and resolve against the defaults
    pub fn resolve(&self) -> LogResult<LoggerConfig> {
        Ok(self.load()?.resolve())
    }

    /// Write a partial configuration, creating parent directories
    pub fn save(&self, config: &PartialConfig) -> LogResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| LogError::ConfigWrite {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let content = serde_yaml::to_string(config)
            .map_err(|e| LogError::ConfigParse(format!("Failed to serialize YAML: {}", e)))?;

        fs::write(&self.path, content).map_err(|source| LogError::ConfigWrite {
            path: self.path.clone(),
            source,
        })
    }

    /// Export the resolved configuration as pretty JSON
    pub fn export_json(&self) -> LogResult<String> {
        self.resolve()?.to_json()
    }
}
