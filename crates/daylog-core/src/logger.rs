//! The logger: routes each call to the console and the daily log file

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use chrono::NaiveDateTime;
use parking_lot::Mutex;

use crate::clock::{SharedClock, SystemClock};
use crate::config::LoggerConfig;
use crate::daily_file::{append_line, log_file_path};
use crate::error::LogResult;
use crate::format::{render_date, render_line};
use crate::sink::{SharedSink, StdoutSink};
use crate::types::Level;

/// Leveled logging operations
///
/// Implementations:
/// - `Logger`: console plus daily log file
pub trait Log: Send + Sync {
    /// Log `message` at `level`
    fn log(&self, level: Level, message: &str) -> LogResult<()>;

    /// Log an info message
    fn info(&self, message: &str) -> LogResult<()> {
        self.log(Level::Info, message)
    }

    /// Log a warning message
    fn warn(&self, message: &str) -> LogResult<()> {
        self.log(Level::Warn, message)
    }

    /// Log an error message
    fn error(&self, message: &str) -> LogResult<()> {
        self.log(Level::Error, message)
    }

    /// Log a verbose message
    fn verbose(&self, message: &str) -> LogResult<()> {
        self.log(Level::Verbose, message)
    }
}

/// Extension trait for logging with format arguments
pub trait LogExt: Log {
    fn info_fmt(&self, args: fmt::Arguments<'_>) -> LogResult<()> {
        self.info(&args.to_string())
    }

    fn warn_fmt(&self, args: fmt::Arguments<'_>) -> LogResult<()> {
        self.warn(&args.to_string())
    }

    fn error_fmt(&self, args: fmt::Arguments<'_>) -> LogResult<()> {
        self.error(&args.to_string())
    }

    fn verbose_fmt(&self, args: fmt::Arguments<'_>) -> LogResult<()> {
        self.verbose(&args.to_string())
    }
}

impl<T: Log + ?Sized> LogExt for T {}

/// Format and log at info level, returning the `LogResult`
#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($arg:tt)*) => {
        $crate::Log::info(&$logger, &format!($($arg)*))
    };
}

/// Format and log at warn level, returning the `LogResult`
#[macro_export]
macro_rules! log_warn {
    ($logger:expr, $($arg:tt)*) => {
        $crate::Log::warn(&$logger, &format!($($arg)*))
    };
}

/// Format and log at error level, returning the `LogResult`
#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($arg:tt)*) => {
        $crate::Log::error(&$logger, &format!($($arg)*))
    };
}

/// Format and log at verbose level, returning the `LogResult`
#[macro_export]
macro_rules! log_verbose {
    ($logger:expr, $($arg:tt)*) => {
        $crate::Log::verbose(&$logger, &format!($($arg)*))
    };
}

/// Routes leveled messages to the console and to a log file per calendar day
///
/// Every call reads the clock once, so the console line and the file line
/// carry the same timestamp, and the file is chosen from that same instant.
/// Calls on one logger are serialized: file lines and console writes keep
/// call order even when the logger is shared between threads.
///
/// # Example
///
/// ```no_run
/// use daylog_core::{Level, Log, Logger, PartialConfig};
///
/// let logger = Logger::with_config(
///     PartialConfig::new()
///         .with_name("billing")
///         .with_persisted_levels([Level::Warn, Level::Error]),
/// );
///
/// logger.info("started")?;      // console only
/// logger.error("card declined")?; // console and ./logs/billing/<today>.log
/// # Ok::<(), daylog_core::LogError>(())
/// ```
pub struct Logger {
    config: LoggerConfig,
    clock: SharedClock,
    console: SharedSink,
    call_lock: Mutex<()>,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// Create a logger with the default configuration
    pub fn new() -> Self {
        Self::with_config(LoggerConfig::default())
    }

    /// Create a logger from a full or partial configuration
    pub fn with_config(config: impl Into<LoggerConfig>) -> Self {
        Self {
            config: config.into(),
            clock: Arc::new(SystemClock),
            console: Arc::new(StdoutSink),
            call_lock: Mutex::new(()),
        }
    }

    /// Replace the clock
    pub fn with_clock(mut self, clock: SharedClock) -> Self {
        self.clock = clock;
        self
    }

    /// Replace the console sink
    pub fn with_console(mut self, console: SharedSink) -> Self {
        self.console = console;
        self
    }

    /// The effective configuration
    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }

    /// Log file that a line captured at `instant` goes to
    pub fn file_path_at(&self, instant: &NaiveDateTime) -> PathBuf {
        log_file_path(&self.config.base_path, &self.config.name, instant)
    }

    fn route(&self, level: Level, message: &str) -> LogResult<()> {
        let _guard = self.call_lock.lock();

        let instant = self.clock.now();
        let timestamp = render_date(&self.config.date_format, &instant);
        let line = render_line(level, message, &self.config.name, &timestamp);

        if self.config.persisted_levels.contains(level) {
            append_line(&self.file_path_at(&instant), &line.file)?;
        }

        if self.config.displayed_levels.contains(level) {
            self.console.write_line(&line.console);
        }

        Ok(())
    }
}

impl Log for Logger {
    fn log(&self, level: Level, message: &str) -> LogResult<()> {
        self.route(level, message)
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
