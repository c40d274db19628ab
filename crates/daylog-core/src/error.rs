//! Error types

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while configuring or logging
#[derive(Error, Debug)]
pub enum LogError {
    /// Creating the log directory failed
    #[error("failed to create log directory {}: {}", .path.display(), .source)]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Opening, writing or flushing the log file failed
    #[error("failed to append to {}: {}", .path.display(), .source)]
    Append {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A configuration file could not be read
    #[error("failed to read config {}: {}", .path.display(), .source)]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A configuration file could not be written
    #[error("failed to write config {}: {}", .path.display(), .source)]
    ConfigWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A configuration file could not be parsed or serialized
    #[error("Configuration error: {0}")]
    ConfigParse(String),

    /// A level name outside info, warn, error and verbose
    #[error("Unknown level: {0}")]
    UnknownLevel(String),

    /// The global logger was already installed
    #[error("Global logger already initialized")]
    AlreadyInitialized,
}

impl LogError {
    /// Whether this error came from the file sink
    pub fn is_io(&self) -> bool {
        matches!(self, Self::CreateDir { .. } | Self::Append { .. })
    }
}

pub type LogResult<T> = Result<T, LogError>;
