//! Process-wide logger
//!
//! Install one logger with [`init`] early in `main`, then log from anywhere
//! with the free functions. Without `init` the first call installs a logger
//! with the default configuration.

use once_cell::sync::OnceCell;

use crate::config::LoggerConfig;
use crate::error::{LogError, LogResult};
use crate::logger::{Log, Logger};
use crate::types::Level;

static GLOBAL: OnceCell<Logger> = OnceCell::new();

/// Install `config` as the global logger
///
/// Fails with [`LogError::AlreadyInitialized`] once a global logger exists,
/// including one created implicitly by an earlier log call.
pub fn init(config: impl Into<LoggerConfig>) -> LogResult<()> {
    install(Logger::with_config(config))
}

/// Install an already built logger (custom clock or console sink)
pub fn install(logger: Logger) -> LogResult<()> {
    GLOBAL.set(logger).map_err(|_| LogError::AlreadyInitialized)
}

/// The global logger
pub fn logger() -> &'static Logger {
    GLOBAL.get_or_init(Logger::new)
}

/// Whether a global logger exists yet
pub fn is_initialized() -> bool {
    GLOBAL.get().is_some()
}

/// Log a message at the specified level
pub fn log(level: Level, message: &str) -> LogResult<()> {
    logger().log(level, message)
}

/// Log an info message
pub fn info(message: &str) -> LogResult<()> {
    log(Level::Info, message)
}

/// Log a warning message
pub fn warn(message: &str) -> LogResult<()> {
    log(Level::Warn, message)
}

/// Log an error message
pub fn error(message: &str) -> LogResult<()> {
    log(Level::Error, message)
}

/// Log a verbose message
pub fn verbose(message: &str) -> LogResult<()> {
    log(Level::Verbose, message)
}
