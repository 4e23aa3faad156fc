//! Scoped redirection of log traffic into the system log.

use std::cell::RefCell;
use std::rc::Rc;

use crate::dispatch::{LogDispatcher, SinkId};
use crate::facility::SystemLog;
use crate::sink::LogSink;
use crate::sinks::{DiscardSink, SystemSink};

/// Sends dispatcher traffic to the OS system log for the guard's
/// lifetime, optionally muting the console while it lives.
///
/// Construction registers a [`SystemSink`] opened with `title` and,
/// when `block_console` is set, a [`DiscardSink`] ahead of every
/// previously registered sink — while the discard sink occupies that
/// slot, nothing dispatched reaches the console. Dropping the guard
/// unregisters and closes both sinks, restoring console delivery on
/// every exit path, unwinding included.
///
/// Dispatcher registration is not synchronized; the `Rc` handle keeps
/// the guard on the owner that created it.
pub struct SystemLoggerGuard {
    dispatcher: Rc<RefCell<LogDispatcher>>,
    discard: Option<SinkId>,
    system: SinkId,
}

impl SystemLoggerGuard {
    pub fn new(
        dispatcher: Rc<RefCell<LogDispatcher>>,
        facility: Box<dyn SystemLog>,
        title: &str,
        block_console: bool,
    ) -> Self {
        let discard =
            block_console.then(|| dispatcher.borrow_mut().insert(Box::new(DiscardSink)));

        let mut system_sink = SystemSink::new(facility);
        system_sink.open(title);
        let system = dispatcher.borrow_mut().insert(Box::new(system_sink));

        Self {
            dispatcher,
            discard,
            system,
        }
    }
}

impl Drop for SystemLoggerGuard {
    fn drop(&mut self) {
        let mut dispatcher = self.dispatcher.borrow_mut();
        if let Some(mut sink) = dispatcher.remove(self.system) {
            sink.close();
        }
        if let Some(id) = self.discard {
            dispatcher.remove(id);
        }
    }
}
