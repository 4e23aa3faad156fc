//! The sink capability consumed by the log dispatcher.

use crate::level::LogLevel;

/// Capability contract implemented by every log output variant.
///
/// Lifecycle: constructed, optionally [`open`](LogSink::open)ed with a
/// title, handed zero or more [`write`](LogSink::write) calls,
/// [`close`](LogSink::close)d, dropped. Sinks share no mutable state
/// with each other; whoever registered a sink in the dispatcher owns
/// it and is responsible for removing it again.
pub trait LogSink {
    /// Prepare the sink for output. `title` identifies the process to
    /// destinations that label their streams, such as the system log.
    fn open(&mut self, title: &str);

    /// Release whatever `open` acquired.
    fn close(&mut self);

    /// Deliver one formatted message. Returns `true` when the message
    /// was accepted. A `false` return stops delivery to sinks
    /// registered earlier (see
    /// [`LogDispatcher::dispatch`](crate::dispatch::LogDispatcher::dispatch)).
    fn write(&mut self, level: LogLevel, text: &str) -> bool;

    /// Push buffered output to its destination. Most sinks write
    /// unbuffered and keep the default no-op.
    fn flush(&mut self) {}
}
