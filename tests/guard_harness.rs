//! System logger guard harness.
//!
//! # What this covers
//!
//! - **Console muting**: while a guard created with
//!   `block_console = true` is alive, dispatched messages reach the
//!   system log but never the console; writes made directly to the
//!   console sink (bypassing the dispatcher) are unaffected.
//! - **Teardown**: dropping the guard closes the system sink, removes
//!   both registered sinks, and restores console delivery; no OS-log
//!   calls happen after the close.
//! - **Pass-through**: with `block_console = false` the console keeps
//!   receiving dispatched messages alongside the system log.
//!
//! # Running
//!
//! ```sh
//! cargo test --test guard_harness
//! ```

mod common;
use common::*;

use std::cell::RefCell;
use std::rc::Rc;

use seatlink_log::{ConsoleSink, LogDispatcher, LogLevel, LogSink, SystemLoggerGuard};

fn dispatcher_with_console() -> (Rc<RefCell<LogDispatcher>>, SharedBuf, SharedBuf) {
    let out = SharedBuf::new();
    let err = SharedBuf::new();
    let console = ConsoleSink::with_streams(Box::new(out.clone()), Box::new(err.clone()));

    let dispatcher = Rc::new(RefCell::new(LogDispatcher::new()));
    dispatcher.borrow_mut().insert(Box::new(console));
    (dispatcher, out, err)
}

#[test]
fn blocking_guard_mutes_dispatched_console_output() {
    let (dispatcher, out, err) = dispatcher_with_console();
    let facility = FakeSystemLog::new();

    let guard = SystemLoggerGuard::new(
        Rc::clone(&dispatcher),
        Box::new(facility.clone()),
        "seatlink",
        true,
    );

    dispatcher.borrow_mut().dispatch(LogLevel::Info, "hidden");
    dispatcher.borrow_mut().dispatch(LogLevel::Error, "also hidden");

    // Nothing on the console, everything in the system log.
    assert_eq!(out.contents(), "");
    assert_eq!(err.contents(), "");
    assert_eq!(
        facility.calls(),
        vec![
            SystemLogCall::Open("seatlink".to_string()),
            SystemLogCall::Write(LogLevel::Info, "hidden".to_string()),
            SystemLogCall::Write(LogLevel::Error, "also hidden".to_string()),
        ]
    );

    drop(guard);
}

#[test]
fn direct_console_writes_bypass_the_guard() {
    let out = SharedBuf::new();
    let err = SharedBuf::new();
    let mut console = ConsoleSink::with_streams(Box::new(out.clone()), Box::new(err.clone()));

    let dispatcher = Rc::new(RefCell::new(LogDispatcher::new()));
    let _guard = SystemLoggerGuard::new(
        Rc::clone(&dispatcher),
        Box::new(FakeSystemLog::new()),
        "seatlink",
        true,
    );

    // A write that never goes through the dispatcher is unaffected.
    console.write(LogLevel::Print, "direct");
    assert_eq!(out.contents(), "direct\n");
}

#[test]
fn dropping_the_guard_restores_console_and_closes_system_log() {
    let (dispatcher, out, _err) = dispatcher_with_console();
    let facility = FakeSystemLog::new();

    {
        let _guard = SystemLoggerGuard::new(
            Rc::clone(&dispatcher),
            Box::new(facility.clone()),
            "seatlink",
            true,
        );
        dispatcher.borrow_mut().dispatch(LogLevel::Info, "while alive");
    }

    // Both guard-owned sinks are gone; only the console remains.
    assert_eq!(dispatcher.borrow().len(), 1);
    assert_eq!(facility.calls().last(), Some(&SystemLogCall::Close));

    let calls_after_drop = facility.calls().len();
    dispatcher.borrow_mut().dispatch(LogLevel::Info, "visible again");

    assert_eq!(out.contents(), "visible again\n");
    assert_eq!(facility.calls().len(), calls_after_drop);
}

#[test]
fn non_blocking_guard_keeps_console_delivery() {
    let (dispatcher, out, _err) = dispatcher_with_console();
    let facility = FakeSystemLog::new();

    let _guard = SystemLoggerGuard::new(
        Rc::clone(&dispatcher),
        Box::new(facility.clone()),
        "seatlink",
        false,
    );

    dispatcher.borrow_mut().dispatch(LogLevel::Info, "everywhere");

    assert_eq!(out.contents(), "everywhere\n");
    assert!(facility
        .calls()
        .contains(&SystemLogCall::Write(LogLevel::Info, "everywhere".to_string())));
}
