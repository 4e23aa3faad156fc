//! Boundary to the OS-native logging facility.

use crate::level::LogLevel;

/// OS-native log destination (syslog, the Windows event log, os_log).
///
/// Injected into [`SystemSink`](crate::sinks::SystemSink) rather than
/// reached as a process-wide singleton, so the sink can be exercised
/// against a fake. The hosting application supplies the real binding;
/// this crate treats the facility as opaque and never inspects its
/// failures.
pub trait SystemLog {
    fn open_log(&mut self, title: &str);
    fn write_log(&mut self, level: LogLevel, text: &str);
    fn close_log(&mut self);
}
