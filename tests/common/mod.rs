#![allow(dead_code)]
//! Shared test utilities for seatlink-log integration harnesses.
//!
//! Import what you need via `mod common; use common::*;` at the top of
//! each harness file. The fakes record every call so harnesses can
//! assert on delivery order and lifecycle, not just final file state.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use seatlink_log::{LogLevel, LogSink, SystemLog};

/// In-memory stream for `ConsoleSink::with_streams`. Clones share the
/// same buffer, so a harness can keep one handle and hand the other to
/// the sink.
#[derive(Clone, Default)]
pub struct SharedBuf(Arc<Mutex<Vec<u8>>>);

impl SharedBuf {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// One call observed at the OS-log boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum SystemLogCall {
    Open(String),
    Write(LogLevel, String),
    Close,
}

/// Records every call made against the OS-log boundary. Clones share
/// the call log.
#[derive(Clone, Default)]
pub struct FakeSystemLog {
    calls: Arc<Mutex<Vec<SystemLogCall>>>,
}

impl FakeSystemLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<SystemLogCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl SystemLog for FakeSystemLog {
    fn open_log(&mut self, title: &str) {
        self.calls
            .lock()
            .unwrap()
            .push(SystemLogCall::Open(title.to_string()));
    }

    fn write_log(&mut self, level: LogLevel, text: &str) {
        self.calls
            .lock()
            .unwrap()
            .push(SystemLogCall::Write(level, text.to_string()));
    }

    fn close_log(&mut self) {
        self.calls.lock().unwrap().push(SystemLogCall::Close);
    }
}

/// Sink that accepts and records every message. Clones share the log.
#[derive(Clone, Default)]
pub struct RecordingSink {
    messages: Arc<Mutex<Vec<(LogLevel, String)>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<(LogLevel, String)> {
        self.messages.lock().unwrap().clone()
    }
}

impl LogSink for RecordingSink {
    fn open(&mut self, _title: &str) {}

    fn close(&mut self) {}

    fn write(&mut self, level: LogLevel, text: &str) -> bool {
        self.messages
            .lock()
            .unwrap()
            .push((level, text.to_string()));
        true
    }
}
