//! Daylog Core
//!
//! Small synchronous logger with two independent sinks: a colorized console
//! stream and an append-only log file per name and calendar day.
//!
//! ```rust,no_run
//! use daylog_core::{Log, Logger, PartialConfig};
//!
//! let logger = Logger::with_config(
//!     PartialConfig::new()
//!         .with_name("worker")
//!         .with_base_path("/var/log/app"),
//! );
//!
//! // Console and /var/log/app/worker/<yyyy-MM-dd>.log
//! logger.warn("queue is backing up")?;
//! // Console only: verbose is not persisted by default
//! logger.verbose("tick")?;
//! # Ok::<(), daylog_core::LogError>(())
//! ```
//!
//! Every call is synchronous: when it returns, the file line (if any) has been
//! written and synced, and any I/O failure is returned to the caller.

pub mod types;
pub mod error;
pub mod format;
pub mod config;
pub mod clock;
pub mod sink;
pub mod daily_file;
pub mod logger;
pub mod global;

// Re-export commonly used types
pub use types::{Level, LevelSet};

pub use error::{LogError, LogResult};

pub use format::{render_date, render_line, RenderedLine};

pub use config::{ConfigFile, LoggerConfig, PartialConfig};

pub use clock::{Clock, FixedClock, SequenceClock, SystemClock};

pub use sink::{ConsoleSink, MemorySink, NoOpSink, StdoutSink};

pub use logger::{Log, LogExt, Logger};
