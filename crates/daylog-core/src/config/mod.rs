//! Logger configuration
//!
//! - `LoggerConfig`: the effective, immutable configuration of a logger
//! - `PartialConfig`: optional fields merged over the defaults one by one
//! - `ConfigFile`: YAML file holding a partial configuration

mod settings;
mod file;

pub use settings::{LoggerConfig, PartialConfig, DEFAULT_BASE_PATH, DEFAULT_NAME};
pub use file::ConfigFile;
