//! Standard output sink

use std::io::{self, Write};

use super::traits::ConsoleSink;

/// A sink that writes to stdout
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl StdoutSink {
    pub fn new() -> Self {
        Self
    }
}

impl ConsoleSink for StdoutSink {
    fn write_line(&self, line: &str) {
        let mut buf = String::with_capacity(line.len() + 1);
        buf.push_str(line);
        buf.push('\n');

        // Console output is best effort.
        let mut stdout = io::stdout().lock();
        let _ = stdout.write_all(buf.as_bytes());
        let _ = stdout.flush();
    }
}
