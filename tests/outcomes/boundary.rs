//! Integration tests for the panic boundary: try_run and expect

use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use outcome_core::{
    Cause, Empty, Fault, Outcome, try_run, try_run_action, try_run_fallible, try_run_outcome,
};

fn raised(outcome: Outcome<i32>) -> String {
    let payload = panic::catch_unwind(AssertUnwindSafe(|| outcome.expect())).unwrap_err();
    *payload.downcast::<String>().unwrap()
}

// =============================================================================
// try_run
// =============================================================================

#[test]
fn try_run_value() {
    assert_eq!(try_run(|| 42), Outcome::success(42));
}

#[test]
fn try_run_panic_becomes_failure() {
    let outcome = try_run(|| -> i32 { panic!("x") });
    assert!(outcome.is_error());
    assert_eq!(outcome.message(), Some("x"));
}

#[test]
fn try_run_outcome_passes_failure_through() {
    let outcome = try_run_outcome(|| Outcome::<i32>::failure("reported"));
    assert_eq!(outcome, Outcome::failure("reported"));
}

#[test]
fn try_run_action_is_empty_success() {
    let counter = std::cell::Cell::new(0);
    let outcome: Outcome<Empty> = try_run_action(|| counter.set(counter.get() + 1));
    assert_eq!(counter.get(), 1);
    assert!(outcome.is_ok());
}

#[test]
fn try_run_fallible_keeps_error_as_cause() {
    let outcome = try_run_fallible(|| std::fs::read_to_string("/definitely/not/here"));
    assert!(outcome.is_error());
    assert!(outcome.failure_ref().unwrap().cause_as::<std::io::Error>().is_some());
}

// =============================================================================
// expect
// =============================================================================

#[test]
fn expect_success_is_identity() {
    assert_eq!(Outcome::success(5).expect().value(), 5);
}

#[test]
fn expect_failure_panics_with_message_text() {
    assert_eq!(raised(Outcome::failure("database unreachable")), "database unreachable");
}

#[test]
fn expect_failure_with_cause_panics_with_message_text() {
    let original: Cause = Arc::new(std::io::Error::other("root"));
    assert_eq!(raised(Outcome::failure_with("wrapped", original)), "wrapped");
}

// =============================================================================
// Round trip through the boundary
// =============================================================================

#[test]
fn expect_inside_try_run_restores_failure() {
    let original: Cause = Arc::new(Fault::generic("lost connection"));
    let failed = Outcome::<i32>::failure_with("lost connection", Arc::clone(&original));

    let outcome = try_run_outcome(|| failed.expect());
    assert!(outcome.is_error());
    assert_eq!(outcome.message(), Some("lost connection"));
    assert!(Arc::ptr_eq(outcome.cause().unwrap(), &original));
}

#[test]
fn expect_inside_try_run_restores_io_cause() {
    let original: Cause = Arc::new(std::io::Error::other("root"));
    let failed = Outcome::<i32>::failure_with("wrapped", Arc::clone(&original));

    let outcome = try_run_outcome(|| failed.expect());
    assert_eq!(outcome.message(), Some("root"));
    assert!(Arc::ptr_eq(outcome.cause().unwrap(), &original));
}

#[test]
fn expect_without_cause_inside_try_run_keeps_message() {
    let outcome = try_run_outcome(|| Outcome::<i32>::failure("bad").expect());
    assert_eq!(outcome.message(), Some("bad"));
    assert_eq!(
        outcome.failure_ref().unwrap().cause_as::<Fault>(),
        Some(&Fault::generic("bad"))
    );
}
