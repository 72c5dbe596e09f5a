//! Integration tests for inspection taps

use std::cell::RefCell;

use outcome_core::{Failure, Outcome};

fn cases() -> Vec<Outcome<i32>> {
    vec![
        Outcome::success(4),
        Outcome::failure("bad"),
        Outcome::default(),
        Outcome::from_failure(Failure::default()),
    ]
}

// =============================================================================
// Pass-through
// =============================================================================

#[test]
fn taps_never_change_the_outcome() {
    for outcome in cases() {
        let expected = outcome.clone();
        let tapped = outcome
            .on_any(|_| {})
            .on_ok(|_| {})
            .on_error(|_| {});
        assert_eq!(tapped.is_ok(), expected.is_ok());
        assert_eq!(tapped.is_error(), expected.is_error());
        assert_eq!(tapped.value(), expected.value());
        assert_eq!(tapped, expected);
    }
}

// =============================================================================
// Invocation
// =============================================================================

#[test]
fn taps_fire_by_state() {
    let log = RefCell::new(Vec::new());
    for outcome in cases() {
        let _ = outcome
            .on_any(|o| log.borrow_mut().push(format!("any {o}")))
            .on_ok(|v| log.borrow_mut().push(format!("ok {v}")))
            .on_error(|f| log.borrow_mut().push(format!("error {}", f.message)));
    }
    assert_eq!(
        log.into_inner(),
        [
            "any Ok: 4",
            "ok 4",
            "any Error: bad",
            "error bad",
            "any None",
            "any None",
        ]
    );
}

#[test]
fn on_any_sees_failures_after_short_circuit() {
    let seen = RefCell::new(None);
    let _ = Outcome::<i32>::failure("early")
        .map(|n| n + 1)
        .on_any(|o| *seen.borrow_mut() = o.message().map(str::to_string));
    assert_eq!(seen.into_inner().as_deref(), Some("early"));
}
