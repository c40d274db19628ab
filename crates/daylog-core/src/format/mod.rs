//! Pure rendering of timestamps and log lines
//!
//! Nothing in this module touches the clock, the console or the filesystem.

mod date;
mod line;

pub use date::{render_date, DEFAULT_DATE_FORMAT, FILE_DATE_FORMAT};
pub use line::{render_line, RenderedLine, RESET_COLOR};
