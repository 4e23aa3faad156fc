//! Sink delegating to the OS-native logging facility.

use crate::facility::SystemLog;
use crate::level::LogLevel;
use crate::sink::LogSink;

/// Sink forwarding every message to an injected [`SystemLog`] binding.
///
/// Writes are always reported as accepted; the OS facility is trusted
/// to surface its own errors.
pub struct SystemSink {
    facility: Box<dyn SystemLog>,
}

impl SystemSink {
    pub fn new(facility: Box<dyn SystemLog>) -> Self {
        Self { facility }
    }
}

impl LogSink for SystemSink {
    fn open(&mut self, title: &str) {
        self.facility.open_log(title);
    }

    fn close(&mut self) {
        self.facility.close_log();
    }

    fn write(&mut self, level: LogLevel, text: &str) -> bool {
        self.facility.write_log(level, text);
        true
    }
}
