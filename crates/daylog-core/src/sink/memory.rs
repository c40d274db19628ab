//! In-memory sink

use parking_lot::Mutex;

use super::traits::ConsoleSink;

/// In-memory sink for tests and capture
///
/// Every call to `write_line` is recorded as one entry, in call order.
///
/// # Example
///
/// ```
/// use daylog_core::sink::{ConsoleSink, MemorySink};
///
/// let sink = MemorySink::new();
/// sink.write_line("hello");
/// assert_eq!(sink.lines(), vec!["hello".to_string()]);
/// ```
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all recorded writes
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    /// Number of recorded writes
    pub fn len(&self) -> usize {
        self.lines.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.lines.lock().clear();
    }
}

impl ConsoleSink for MemorySink {
    fn write_line(&self, line: &str) {
        self.lines.lock().push(line.to_string());
    }
}
