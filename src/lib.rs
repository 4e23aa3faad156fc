//! seatlink-log — logging outputs and control-state persistence for
//! Seatlink, a keyboard and mouse sharing utility.
//!
//! This crate is the delivery end of the logging pipeline plus the
//! small state-file writer that records whether the local instance
//! currently holds input control.
//!
//! # Architecture
//!
//! ```text
//! formatter ──► LogDispatcher ──► SystemSink / DiscardSink /
//!                                 ConsoleSink / RotatingFileSink
//!
//! control change ──► state::write_state ──► Settings ──► state file
//! ```
//!
//! The upstream formatter decides *what* text and level reach the
//! dispatcher; the sinks here turn that pair into console output, OS
//! log entries, or file bytes. Everything is synchronous and
//! single-threaded; callers provide their own mutual exclusion.

pub mod dispatch;
pub mod error;
pub mod facility;
pub mod guard;
pub mod level;
pub mod settings;
pub mod sink;
pub mod sinks;
pub mod state;

pub use dispatch::{LogDispatcher, SinkId};
pub use error::{FileSinkError, StateFileError};
pub use facility::SystemLog;
pub use guard::SystemLoggerGuard;
pub use level::LogLevel;
pub use settings::Settings;
pub use sink::LogSink;
pub use sinks::{
    ConsoleSink, DiscardSink, RotatingFileSink, SystemSink, DEFAULT_LOG_FILE, LOG_FILE_SIZE_LIMIT,
};
pub use state::{try_write_state, write_state, StateWrite};
