//! Sink appending lines to a size-rotated file.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::FileSinkError;
use crate::level::LogLevel;
use crate::sink::LogSink;

/// File name used when no log path is configured.
pub const DEFAULT_LOG_FILE: &str = "seatlink.log";

/// Size past which the active log file is rotated out (1 MiB).
pub const LOG_FILE_SIZE_LIMIT: u64 = 1024 * 1024;

/// Sink appending one line per message to a file.
///
/// No handle is held between writes: each write opens the file in
/// append mode, writes one line, and closes it. After a write that
/// pushes the file past [`LOG_FILE_SIZE_LIMIT`], the file is renamed
/// to `<path>.1`, overwriting the previous backup. Only one backup
/// generation is kept.
pub struct RotatingFileSink {
    path: Option<PathBuf>,
}

impl RotatingFileSink {
    pub fn new(path: &str) -> Self {
        let mut sink = Self { path: None };
        sink.set_log_filename(path);
        sink
    }

    /// Re-resolve the active path; callable at runtime to redirect
    /// output. An empty or whitespace-only `path` falls back to
    /// [`DEFAULT_LOG_FILE`] under the home directory. When that
    /// fallback is also unavailable the path is left unset and
    /// subsequent writes fail.
    pub fn set_log_filename(&mut self, path: &str) {
        match resolve_path(path, home_dir().as_deref()) {
            Some(resolved) => self.path = Some(resolved),
            None => warn!("empty log filename specified"),
        }
    }

    /// Currently resolved path, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Append one line, rotating afterwards if the file outgrew the
    /// limit. Structured counterpart to the boolean [`LogSink::write`]
    /// contract; rotation failures are still only logged.
    pub fn try_write(&mut self, text: &str) -> Result<(), FileSinkError> {
        let path = self.path.clone().ok_or(FileSinkError::NoPath)?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                // Best effort: a failure here surfaces as the open error.
                let _ = fs::create_dir_all(parent);
            }
        }

        let mut file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&path)
            .map_err(|source| FileSinkError::Open {
                path: path.clone(),
                source,
            })?;
        writeln!(file, "{text}").map_err(|source| FileSinkError::Write {
            path: path.clone(),
            source,
        })?;
        drop(file);

        let size = fs::metadata(&path).map(|m| m.len()).unwrap_or(0);
        if size > LOG_FILE_SIZE_LIMIT {
            rotate(&path);
        }
        Ok(())
    }
}

impl LogSink for RotatingFileSink {
    fn open(&mut self, _title: &str) {}

    fn close(&mut self) {}

    fn write(&mut self, _level: LogLevel, text: &str) -> bool {
        match self.try_write(text) {
            Ok(()) => true,
            Err(FileSinkError::NoPath) => false,
            Err(err) => {
                debug!(error = %err, "log file write failed");
                false
            }
        }
    }
}

/// Trim, then substitute the home-directory default for an empty path.
fn resolve_path(path: &str, home: Option<&Path>) -> Option<PathBuf> {
    let trimmed = path.trim();
    if !trimmed.is_empty() {
        return Some(PathBuf::from(trimmed));
    }
    home.filter(|h| !h.as_os_str().is_empty())
        .map(|h| h.join(DEFAULT_LOG_FILE))
}

fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME").map(PathBuf::from)
}

/// Rename the active file to `<path>.1`, replacing the previous
/// backup. The next write recreates the active file.
fn rotate(path: &Path) {
    let mut backup = path.as_os_str().to_os_string();
    backup.push(".1");
    match fs::rename(path, &backup) {
        Ok(()) => debug!(path = %path.display(), "log file rotated"),
        Err(err) => warn!(path = %path.display(), error = %err, "log rotation failed"),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
