//! No-op sink implementation

use super::traits::ConsoleSink;

/// A sink that does nothing
///
/// Useful when only the log file matters.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpSink;

impl NoOpSink {
    pub fn new() -> Self {
        Self
    }
}

impl ConsoleSink for NoOpSink {
    fn write_line(&self, _line: &str) {}
}
