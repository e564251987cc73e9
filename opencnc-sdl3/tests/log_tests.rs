mod common;

use std::sync::{Arc, Mutex};

use common::require_sdl;
use opencnc_sdl3::log;
use opencnc_sdl3::{LogCategory, LogPriority};
use pretty_assertions::assert_eq;
use serial_test::serial;

type Captured = Arc<Mutex<Vec<(LogCategory, LogPriority, String)>>>;

fn capture() -> Captured {
    let captured: Captured = Arc::default();
    let sink = Arc::clone(&captured);
    log::set_output_function(move |category, priority, message| {
        sink.lock().unwrap().push((category, priority, message.to_string()));
    })
    .unwrap();
    captured
}

#[test]
#[serial]
fn messages_reach_rust_output() {
    require_sdl!();
    log::reset_priorities().unwrap();
    let captured = capture();

    log::info(LogCategory::APPLICATION, "spindle at 100% load").unwrap();
    log::error(LogCategory::custom(2), "limit switch %s %d").unwrap();

    let got = captured.lock().unwrap().clone();
    assert_eq!(
        got,
        vec![
            (LogCategory::APPLICATION, LogPriority::Info, "spindle at 100% load".to_string()),
            (LogCategory::custom(2), LogPriority::Error, "limit switch %s %d".to_string()),
        ]
    );
    log::reset_output_function().unwrap();
}

#[test]
#[serial]
fn priorities_filter_messages() {
    require_sdl!();
    let captured = capture();

    log::set_priority(LogCategory::TEST, LogPriority::Warn).unwrap();
    assert_eq!(log::priority(LogCategory::TEST).unwrap(), LogPriority::Warn);
    log::info(LogCategory::TEST, "dropped").unwrap();
    log::warn(LogCategory::TEST, "kept").unwrap();
    log::message(LogCategory::TEST, LogPriority::Critical, "also kept").unwrap();

    let texts: Vec<String> = captured.lock().unwrap().iter().map(|m| m.2.clone()).collect();
    assert_eq!(texts, vec!["kept".to_string(), "also kept".to_string()]);

    log::set_priorities(LogPriority::Trace).unwrap();
    assert_eq!(log::priority(LogCategory::VIDEO).unwrap(), LogPriority::Trace);
    log::reset_priorities().unwrap();
    log::reset_output_function().unwrap();
}

#[test]
#[serial]
fn output_function_can_be_swapped_back() {
    require_sdl!();
    let _captured = capture();
    let current = log::output_function().unwrap().unwrap();
    assert!(current.is_rust_closure());

    log::reset_output_function().unwrap();
    let restored = log::output_function().unwrap().unwrap();
    assert!(!restored.is_rust_closure());
    assert!(!log::default_output_function().unwrap().is_rust_closure());
}

#[test]
#[serial]
fn panicking_output_does_not_unwind_into_sdl() {
    require_sdl!();
    log::set_output_function(|_, _, _| panic!("boom")).unwrap();
    log::log("still alive").unwrap();
    log::reset_output_function().unwrap();
}

#[test]
#[serial]
fn prefixes_can_be_set_and_cleared() {
    require_sdl!();
    log::set_prefix(LogPriority::Warn, Some("[warn] ")).unwrap();
    log::set_prefix(LogPriority::Warn, None).unwrap();
}
