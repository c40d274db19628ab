//! Console sinks

mod traits;
mod console;
mod memory;
mod noop;

pub use traits::{ConsoleSink, SharedSink};
pub use console::StdoutSink;
pub use memory::MemorySink;
pub use noop::NoOpSink;
