//! Structured error kinds layered on the log-and-swallow contract.
//!
//! Sinks and the state writer never raise: the trait surface keeps the
//! boolean `accepted` signal and reports trouble through the crate's
//! own diagnostics. These kinds exist for callers that want
//! programmatic handling via the `try_*` entry points.

use std::path::PathBuf;
use thiserror::Error;

/// Failure writing through [`RotatingFileSink`](crate::sinks::RotatingFileSink).
#[derive(Debug, Error)]
pub enum FileSinkError {
    #[error("no log file path is configured")]
    NoPath,

    #[error("failed to open log file {path}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to append to log file {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Failure writing the control-state file.
#[derive(Debug, Error)]
pub enum StateFileError {
    #[error("state file path is empty")]
    EmptyPath,

    #[error("failed to create directory {path} for state file")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write state file {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
