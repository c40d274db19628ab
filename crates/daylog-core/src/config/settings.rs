//! Logger configuration and partial-configuration merging

use std::path::PathBuf;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{LogError, LogResult};
use crate::format::DEFAULT_DATE_FORMAT;
use crate::types::{Level, LevelSet};

/// Name used when none is configured
pub const DEFAULT_NAME: &str = "App";

/// Log root used when none is configured
pub const DEFAULT_BASE_PATH: &str = "./logs";

/// Effective configuration of a logger
///
/// A logger never changes its configuration; build a new logger to switch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerConfig {
    /// Source label, embedded in every line and in the file path
    pub name: String,
    /// Timestamp pattern, see [`crate::format::render_date`]
    pub date_format: String,
    /// Levels written to the console
    pub displayed_levels: LevelSet,
    /// Levels appended to the log file
    pub persisted_levels: LevelSet,
    /// Root directory for log files
    pub base_path: PathBuf,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            displayed_levels: LevelSet::all(),
            persisted_levels: LevelSet::from([Level::Info, Level::Warn, Level::Error]),
            base_path: PathBuf::from(DEFAULT_BASE_PATH),
        }
    }
}

impl LoggerConfig {
    /// Pretty JSON rendering of this configuration
    pub fn to_json(&self) -> LogResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| LogError::ConfigParse(format!("Failed to serialize JSON: {}", e)))
    }
}

/// Configuration where every field may be left unset
///
/// Unset fields fall back to the defaults one by one when resolved. A level set
/// that is set but empty stays empty. In YAML or JSON an explicit `null` for a
/// level set also means "no levels"; only an absent key means "default".
///
/// # Example
///
/// ```
/// use daylog_core::config::PartialConfig;
/// use daylog_core::{Level, LevelSet};
///
/// let config = PartialConfig::new()
///     .with_name("billing")
///     .with_persisted_levels(LevelSet::empty())
///     .resolve();
///
/// assert_eq!(config.name, "billing");
/// assert!(config.persisted_levels.is_empty());
/// assert!(config.displayed_levels.contains(Level::Verbose));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartialConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, alias = "dateFormat", skip_serializing_if = "Option::is_none")]
    pub date_format: Option<String>,

    #[serde(
        default,
        alias = "displayedLevels",
        alias = "showLevel",
        deserialize_with = "null_as_empty",
        skip_serializing_if = "Option::is_none"
    )]
    pub displayed_levels: Option<LevelSet>,

    #[serde(
        default,
        alias = "persistedLevels",
        alias = "writeLevel",
        deserialize_with = "null_as_empty",
        skip_serializing_if = "Option::is_none"
    )]
    pub persisted_levels: Option<LevelSet>,

    #[serde(default, alias = "basePath", alias = "path", skip_serializing_if = "Option::is_none")]
    pub base_path: Option<PathBuf>,
}

// Only called when the key is present, so `null` is a deliberate empty set.
fn null_as_empty<'de, D>(deserializer: D) -> Result<Option<LevelSet>, D::Error>
where
    D: Deserializer<'de>,
{
    let levels = Option::<LevelSet>::deserialize(deserializer)?;
    Ok(Some(levels.unwrap_or_default()))
}

impl PartialConfig {
    /// An empty partial configuration (resolves to all defaults)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the source name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the timestamp pattern
    pub fn with_date_format(mut self, date_format: impl Into<String>) -> Self {
        self.date_format = Some(date_format.into());
        self
    }

    /// Set the console levels
    pub fn with_displayed_levels(mut self, levels: impl Into<LevelSet>) -> Self {
        self.displayed_levels = Some(levels.into());
        self
    }

    /// Set the file levels
    pub fn with_persisted_levels(mut self, levels: impl Into<LevelSet>) -> Self {
        self.persisted_levels = Some(levels.into());
        self
    }

    /// Set the log root directory
    pub fn with_base_path(mut self, base_path: impl Into<PathBuf>) -> Self {
        self.base_path = Some(base_path.into());
        self
    }

    /// Overlay `other` on top of `self`; fields set in `other` win
    pub fn merge(self, other: PartialConfig) -> PartialConfig {
        PartialConfig {
            name: other.name.or(self.name),
            date_format: other.date_format.or(self.date_format),
            displayed_levels: other.displayed_levels.or(self.displayed_levels),
            persisted_levels: other.persisted_levels.or(self.persisted_levels),
            base_path: other.base_path.or(self.base_path),
        }
    }

    /// Fill unset fields from the defaults
    pub fn resolve(self) -> LoggerConfig {
        let defaults = LoggerConfig::default();
        LoggerConfig {
            name: self.name.unwrap_or(defaults.name),
            date_format: self.date_format.unwrap_or(defaults.date_format),
            displayed_levels: self.displayed_levels.unwrap_or(defaults.displayed_levels),
            persisted_levels: self.persisted_levels.unwrap_or(defaults.persisted_levels),
            base_path: self.base_path.unwrap_or(defaults.base_path),
        }
    }
}

impl From<PartialConfig> for LoggerConfig {
    fn from(partial: PartialConfig) -> Self {
        partial.resolve()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = LoggerConfig::default();
        assert_eq!(config.name, "App");
        assert_eq!(config.date_format, "yyyy-MM-dd HH:mm:ss.SSS");
        assert_eq!(config.displayed_levels, LevelSet::all());
        assert!(!config.persisted_levels.contains(Level::Verbose));
        assert_eq!(config.persisted_levels.len(), 3);
        assert_eq!(config.base_path, PathBuf::from("./logs"));
    }

    #[test]
    fn test_empty_partial_resolves_to_defaults() {
        assert_eq!(PartialConfig::new().resolve(), LoggerConfig::default());
    }

    #[test]
    fn test_field_by_field_merge() {
        let config = PartialConfig::new()
            .with_name("jest-test")
            .with_displayed_levels([Level::Info])
            .resolve();

        assert_eq!(config.name, "jest-test");
        assert_eq!(config.displayed_levels, LevelSet::from([Level::Info]));
        assert_eq!(config.date_format, DEFAULT_DATE_FORMAT);
        assert_eq!(config.persisted_levels, LoggerConfig::default().persisted_levels);
    }

    #[test]
    fn test_explicit_empty_sets_are_kept() {
        let config = PartialConfig::new()
            .with_displayed_levels(LevelSet::empty())
            .with_persisted_levels(LevelSet::empty())
            .resolve();

        assert!(config.displayed_levels.is_empty());
        assert!(config.persisted_levels.is_empty());
    }

    #[test]
    fn test_full_config_round_trips_through_partial() {
        let config = PartialConfig::new()
            .with_name("jest-test")
            .with_date_format("dd/MM/yyyy HH:mm:ss.SSS")
            .with_displayed_levels([Level::Info])
            .with_persisted_levels(LevelSet::empty())
            .with_base_path("./pathtest")
            .resolve();

        assert_eq!(config.name, "jest-test");
        assert_eq!(config.date_format, "dd/MM/yyyy HH:mm:ss.SSS");
        assert_eq!(config.base_path, PathBuf::from("./pathtest"));
    }

    #[test]
    fn test_merge_prefers_overlay() {
        let base = PartialConfig::new().with_name("base").with_base_path("/var/log");
        let overlay = PartialConfig::new().with_name("overlay");

        let merged = base.merge(overlay);
        assert_eq!(merged.name.as_deref(), Some("overlay"));
        assert_eq!(merged.base_path, Some(PathBuf::from("/var/log")));
        assert!(merged.date_format.is_none());
    }

    #[test]
    fn test_missing_key_versus_null() {
        let missing: PartialConfig = serde_json::from_str(r#"{"name": "svc"}"#).unwrap();
        assert!(missing.persisted_levels.is_none());
        assert_eq!(missing.resolve().persisted_levels.len(), 3);

        let null: PartialConfig = serde_json::from_str(r#"{"persisted_levels": null}"#).unwrap();
        assert_eq!(null.persisted_levels, Some(LevelSet::empty()));

        let empty: PartialConfig = serde_json::from_str(r#"{"persistedLevels": []}"#).unwrap();
        assert!(empty.resolve().persisted_levels.is_empty());
    }

    #[test]
    fn test_legacy_key_aliases() {
        let partial: PartialConfig = serde_json::from_str(
            r#"{"showLevel": ["info"], "writeLevel": ["error"], "path": "./pathtest", "dateFormat": "yyyy"}"#,
        )
        .unwrap();

        let config = partial.resolve();
        assert_eq!(config.displayed_levels, LevelSet::from([Level::Info]));
        assert_eq!(config.persisted_levels, LevelSet::from([Level::Error]));
        assert_eq!(config.base_path, PathBuf::from("./pathtest"));
        assert_eq!(config.date_format, "yyyy");
    }
}
