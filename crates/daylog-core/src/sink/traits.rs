//! Console sink trait definition

use std::sync::Arc;

/// Destination for colorized console lines
///
/// Implementations:
/// - `StdoutSink`: writes to the process's standard output
/// - `MemorySink`: keeps lines in memory, for tests
/// - `NoOpSink`: discards everything
pub trait ConsoleSink: Send + Sync {
    /// Write one rendered line
    ///
    /// `line` carries no trailing newline. Each call must reach the
    /// underlying stream as a single write.
    fn write_line(&self, line: &str);
}

/// Type alias for an Arc-wrapped sink
pub type SharedSink = Arc<dyn ConsoleSink>;

impl<T: ConsoleSink + ?Sized> ConsoleSink for Arc<T> {
    fn write_line(&self, line: &str) {
        (**self).write_line(line)
    }
}
