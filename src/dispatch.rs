//! Ordered sink registry.
//!
//! The dispatcher is an explicit collaborator owned by the
//! application's composition root, passed to whoever registers sinks.
//! It performs no locking; construction, registration, and dispatch
//! all happen on one logical owner.

use crate::level::LogLevel;
use crate::sink::LogSink;

/// Opaque handle to a registered sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SinkId(u64);

/// Ordered collection of registered sinks.
///
/// The newest sink is consulted first: [`insert`](Self::insert)
/// registers at the front of the delivery order, and
/// [`dispatch`](Self::dispatch) stops at the first sink whose `write`
/// rejects the message. A rejecting sink therefore shadows everything
/// registered before it, which is how
/// [`DiscardSink`](crate::sinks::DiscardSink) mutes the console.
#[derive(Default)]
pub struct LogDispatcher {
    sinks: Vec<(SinkId, Box<dyn LogSink>)>,
    next_id: u64,
}

impl LogDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a sink at the front of the delivery order. The caller
    /// keeps ownership responsibility: the dispatcher never drops a
    /// sink except through [`remove`](Self::remove).
    pub fn insert(&mut self, sink: Box<dyn LogSink>) -> SinkId {
        let id = SinkId(self.next_id);
        self.next_id += 1;
        self.sinks.insert(0, (id, sink));
        id
    }

    /// Unregister a sink, returning it to the caller. Returns `None`
    /// when `id` is not (or no longer) registered.
    pub fn remove(&mut self, id: SinkId) -> Option<Box<dyn LogSink>> {
        let pos = self.sinks.iter().position(|(sid, _)| *sid == id)?;
        Some(self.sinks.remove(pos).1)
    }

    /// Deliver one message to the sinks in order, newest first,
    /// stopping at the first rejection.
    pub fn dispatch(&mut self, level: LogLevel, text: &str) {
        for (_, sink) in &mut self.sinks {
            if !sink.write(level, text) {
                break;
            }
        }
    }

    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
