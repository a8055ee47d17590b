//! Integration tests for cooperative cancellation
//!
//! Tests that a flag raised anywhere stops a parse at the next item boundary.

use ndf_foundation::CancellationFlag;
use ndf_language::{ParseOptions, parse_with_options};

#[test]
fn uncancelled_parse_completes() {
    let flag = CancellationFlag::new();
    let options = ParseOptions::new().with_cancellation(flag);
    let parse = parse_with_options("A is 1\nB is 2", &options).unwrap();
    assert_eq!(parse.document.items.len(), 2);
}

#[test]
fn cancelled_parse_returns_error() {
    let flag = CancellationFlag::new();
    let options = ParseOptions::new().with_cancellation(flag.clone());
    flag.cancel();
    let err = parse_with_options("A is 1\nB is 2", &options).unwrap_err();
    assert!(err.is_cancelled());
}

#[test]
fn cancel_from_another_thread_is_seen() {
    let flag = CancellationFlag::new();
    let remote = flag.clone();
    std::thread::spawn(move || remote.cancel()).join().unwrap();

    let options = ParseOptions::new().with_cancellation(flag);
    assert!(parse_with_options("A is 1", &options).unwrap_err().is_cancelled());
}

#[test]
fn empty_input_never_checks_flag() {
    let flag = CancellationFlag::new();
    flag.cancel();
    let options = ParseOptions::new().with_cancellation(flag);
    // No items means no safe point was reached.
    assert!(parse_with_options("// nothing", &options).is_ok());
}
