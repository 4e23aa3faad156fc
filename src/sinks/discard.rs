//! Sink that rejects everything.

use crate::level::LogLevel;
use crate::sink::LogSink;

/// Sink that accepts nothing and produces no output.
///
/// Registering one occupies a dispatcher slot: while present, its
/// rejection stops delivery to every sink registered before it, which
/// temporarily silences those delivery paths.
pub struct DiscardSink;

impl LogSink for DiscardSink {
    fn open(&mut self, _title: &str) {}

    fn close(&mut self) {}

    fn write(&mut self, _level: LogLevel, _text: &str) -> bool {
        false
    }
}
