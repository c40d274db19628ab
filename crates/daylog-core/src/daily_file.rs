//! Date-partitioned, append-only log files
//!
//! Layout: `<base_path>/<name>/<yyyy-MM-dd>.log`. A file is created by the
//! first line of its day and only ever appended to afterwards.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Component, Path, PathBuf};

use chrono::NaiveDateTime;

use crate::error::{LogError, LogResult};
use crate::format::{render_date, FILE_DATE_FORMAT};

/// Line terminator used in log files
pub const LINE_ENDING: &str = "\r\n";

/// Extension of log files
pub const LOG_EXTENSION: &str = "log";

/// Path of the log file for `name` on the calendar day of `instant`
///
/// The file always lands under `base_path`: roots, prefixes and `.`/`..`
/// segments in `name` are dropped.
pub fn log_file_path(base_path: &Path, name: &str, instant: &NaiveDateTime) -> PathBuf {
    let mut path = base_path.to_path_buf();
    for component in Path::new(name).components() {
        if let Component::Normal(segment) = component {
            path.push(segment);
        }
    }
    path.push(render_date(FILE_DATE_FORMAT, instant));
    path.set_extension(LOG_EXTENSION);
    path
}

/// Append `line` plus CRLF to `path`
///
/// Parent directories are created as needed. The line goes out as one write
/// and is synced to disk before this returns. A write that fails partway is
/// truncated away, so the file holds either the whole line or none of it.
pub fn append_line(path: &Path, line: &str) -> LogResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| LogError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let mut record = String::with_capacity(line.len() + LINE_ENDING.len());
    record.push_str(line);
    record.push_str(LINE_ENDING);

    let append_err = |source| LogError::Append {
        path: path.to_path_buf(),
        source,
    };

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(append_err)?;
    write_record(&mut file, record.as_bytes()).map_err(append_err)?;
    file.sync_data().map_err(append_err)
}

/// An append target that can be cut back to an earlier length
trait AppendTarget: Write {
    fn end(&self) -> io::Result<u64>;

    fn truncate_to(&mut self, len: u64) -> io::Result<()>;
}

impl AppendTarget for File {
    fn end(&self) -> io::Result<u64> {
        Ok(self.metadata()?.len())
    }

    fn truncate_to(&mut self, len: u64) -> io::Result<()> {
        self.set_len(len)
    }
}

// Assumes a single writer process: another appender between `end` and the
// rollback would lose its bytes too.
fn write_record<T: AppendTarget>(target: &mut T, record: &[u8]) -> io::Result<()> {
    let start = target.end()?;
    if let Err(e) = target.write_all(record) {
        let _ = target.truncate_to(start);
        return Err(e);
    }
    target.flush()
}
