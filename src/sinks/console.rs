//! Sink writing to the process's standard streams.

use std::io::{self, Write};

use crate::level::LogLevel;
use crate::sink::LogSink;

/// Sink routing messages to stdout or stderr by severity.
///
/// Everything in `[Fatal, Warning]` goes to the error stream, the rest
/// to standard output. Output is best effort: a broken stream is not
/// detected here. Streams are injectable so routing can be observed in
/// tests; default construction binds the process's stdout and stderr.
pub struct ConsoleSink {
    out: Box<dyn Write + Send>,
    err: Box<dyn Write + Send>,
}

impl ConsoleSink {
    pub fn new() -> Self {
        Self {
            out: Box::new(io::stdout()),
            err: Box::new(io::stderr()),
        }
    }

    /// Bind explicit streams instead of the process's stdout/stderr.
    pub fn with_streams(out: Box<dyn Write + Send>, err: Box<dyn Write + Send>) -> Self {
        Self { out, err }
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl LogSink for ConsoleSink {
    fn open(&mut self, _title: &str) {}

    fn close(&mut self) {}

    fn write(&mut self, level: LogLevel, text: &str) -> bool {
        if level.uses_error_stream() {
            let _ = writeln!(self.err, "{text}");
        } else {
            let _ = writeln!(self.out, "{text}");
        }
        // stdout is flushed on every message; `flush` stays a no-op.
        let _ = self.out.flush();
        true
    }
}
