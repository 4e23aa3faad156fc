//! Control-state persistence.
//!
//! Whenever the local instance gains or loses input control, the
//! application records the new state in a one-line file: `"1"` when
//! this instance is active, `"0"` otherwise. Each call is an
//! independent transaction — configuration lookup, path resolution,
//! directory creation, file write — and nothing is retained between
//! calls.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, error, trace};

use crate::error::StateFileError;
use crate::settings::{default_state_file_path, Settings};

/// Outcome of a state-write request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateWrite {
    /// State mirroring is disabled in the configuration; the
    /// filesystem was not touched.
    Disabled,
    /// The file at this path now holds the requested state.
    Written(PathBuf),
}

/// Record `active` in the configured state file.
///
/// Failures are reported through the diagnostic channel only and are
/// terminal for this call; callers that need to distinguish outcomes
/// use [`try_write_state`].
pub fn write_state(settings: &Settings, active: bool) {
    match try_write_state(settings, active) {
        Ok(StateWrite::Disabled) => debug!("state file writing is disabled"),
        Ok(StateWrite::Written(path)) => {
            trace!(path = %path.display(), "state file written");
        }
        Err(err) => error!(error = %err, "failed to write state file"),
    }
}

/// Structured counterpart of [`write_state`]. `Ok(StateWrite::Disabled)`
/// is not an error: the feature is simply off.
pub fn try_write_state(settings: &Settings, active: bool) -> Result<StateWrite, StateFileError> {
    if !settings.state.to_file {
        return Ok(StateWrite::Disabled);
    }

    let configured = settings.state.file.trim();
    let path = if configured.is_empty() {
        default_state_file_path()
    } else {
        PathBuf::from(configured)
    };

    debug!(state = active as u8, path = %path.display(), "writing state to file");
    write_to_file(&path, active)?;
    Ok(StateWrite::Written(path))
}

/// Truncate-and-rewrite `path` with `"1"` or `"0"` plus a newline,
/// creating missing parent directories first. A full overwrite, not an
/// append — the file never holds more than one line.
pub fn write_to_file(path: &Path, active: bool) -> Result<(), StateFileError> {
    if path.as_os_str().is_empty() {
        return Err(StateFileError::EmptyPath);
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!(dir = %parent.display(), "creating directory for state file");
            fs::create_dir_all(parent).map_err(|source| StateFileError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }

    fs::write(path, if active { "1\n" } else { "0\n" }).map_err(|source| {
        StateFileError::Write {
            path: path.to_path_buf(),
            source,
        }
    })?;

    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
