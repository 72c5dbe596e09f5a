//! Running operations at the panic-catching boundary.
//!
//! These functions are the only place where a panic is turned into a
//! failure. Nothing panics out of them. Each runs the operation
//! synchronously on the calling thread.
//!
//! The operation is wrapped in [`AssertUnwindSafe`]: state it captured by
//! reference may be observed half-updated after a panic. With
//! `panic = "abort"` there is nothing to catch.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use crate::empty::Empty;
use crate::error::{FALLBACK_MESSAGE, Failure, Fault};
use crate::expect;
use crate::outcome::Outcome;

/// Runs an operation that produces a plain value.
///
/// ```
/// use outcome_core::{Outcome, try_run};
///
/// assert_eq!(try_run(|| 42), Outcome::success(42));
/// assert!(try_run(|| -> i32 { panic!("x") }).is_error());
/// ```
pub fn try_run<T, F>(operation: F) -> Outcome<T>
where
    F: FnOnce() -> T,
{
    try_run_outcome(|| Outcome::success(operation()))
}

/// Runs an operation that already produces an outcome, passing it through.
pub fn try_run_outcome<T, F>(operation: F) -> Outcome<T>
where
    F: FnOnce() -> Outcome<T>,
{
    expect::clear_raised();
    match panic::catch_unwind(AssertUnwindSafe(operation)) {
        Ok(outcome) => outcome,
        Err(payload) => captured(failure_from_panic(payload), "panic"),
    }
}

/// Runs a side effect, producing an [`Empty`] success when it completes.
pub fn try_run_action<F>(operation: F) -> Outcome<Empty>
where
    F: FnOnce(),
{
    try_run_outcome(|| {
        operation();
        Outcome::success_empty()
    })
}

/// Runs an operation that reports errors through a std result.
///
/// `Err(e)` becomes a failure caused by `e`; a panic is captured as usual.
pub fn try_run_fallible<T, E, F>(operation: F) -> Outcome<T>
where
    E: std::error::Error + Send + Sync + 'static,
    F: FnOnce() -> Result<T, E>,
{
    try_run_outcome(|| match operation() {
        Ok(value) => Outcome::success(value),
        Err(error) => captured(Failure::from_cause(error), "error"),
    })
}

fn captured<T>(failure: Failure, origin: &'static str) -> Outcome<T> {
    tracing::debug!(
        reason = %failure.message,
        origin,
        "operation failed; captured as failure"
    );
    Outcome::from_failure(failure)
}

/// A panic raised by `expect` gets its stashed cause back.
fn failure_from_panic(payload: Box<dyn Any + Send>) -> Failure {
    let text = panic_text(&*payload);
    match expect::take_raised(text.as_deref()) {
        Some(cause) => Failure::from_shared_cause(cause),
        None => Failure::from_cause(Fault::Panic(
            text.unwrap_or_else(|| FALLBACK_MESSAGE.to_string()),
        )),
    }
}

fn panic_text(payload: &(dyn Any + Send)) -> Option<String> {
    if let Some(text) = payload.downcast_ref::<&str>() {
        Some((*text).to_string())
    } else {
        payload.downcast_ref::<String>().cloned()
    }
}
