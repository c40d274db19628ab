//! Log line rendering

use crate::types::Level;

/// ANSI sequence that restores the default color
pub const RESET_COLOR: &str = "\x1b[0m";

impl Level {
    /// ANSI color sequence for this level
    pub fn color_code(&self) -> &'static str {
        match self {
            Level::Error => "\x1b[31m",
            Level::Warn => "\x1b[33m",
            Level::Info => "\x1b[34m",
            Level::Verbose => "\x1b[35m",
        }
    }
}

/// The two renderings of one log line
///
/// Both carry the same text; `console` additionally wraps the header in the
/// level's color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedLine {
    /// Colorized form for the console sink
    pub console: String,
    /// Plain form for the log file
    pub file: String,
}

/// Render a line for both sinks
///
/// The plain form is `<timestamp> [<name>] - <level>: <message>`. The console
/// form colors everything up to and including the colon and leaves the
/// message uncolored. The message is never escaped.
pub fn render_line(level: Level, message: &str, name: &str, timestamp: &str) -> RenderedLine {
    let header = format!("{} [{}] - {}:", timestamp, name, level);

    RenderedLine {
        console: format!("{}{}{} {}", level.color_code(), header, RESET_COLOR, message),
        file: format!("{} {}", header, message),
    }
}
