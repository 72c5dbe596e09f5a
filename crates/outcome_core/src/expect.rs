//! Unwrap-or-raise.
//!
//! `expect` panics with the failure message as a plain `String`, so the
//! default panic hook prints it. The cause travels beside the panic in a
//! thread-local slot, tagged with that message; the `try_run` functions take
//! it back out when they catch the matching panic.

use std::cell::RefCell;
use std::sync::Arc;

use crate::error::{Cause, Fault};
use crate::outcome::Outcome;

thread_local! {
    static RAISED: RefCell<Option<(String, Cause)>> = const { RefCell::new(None) };
}

/// Takes the cause stashed by the last `expect` on this thread, if its
/// message matches `panic_text`. The slot is emptied either way.
pub(crate) fn take_raised(panic_text: Option<&str>) -> Option<Cause> {
    let (message, cause) = RAISED.with(|slot| slot.borrow_mut().take())?;
    (panic_text == Some(message.as_str())).then_some(cause)
}

/// Drops a cause left behind by an `expect` panic that nobody reclaimed.
pub(crate) fn clear_raised() {
    RAISED.with(|slot| slot.borrow_mut().take());
}

impl<T> Outcome<T> {
    /// Returns the outcome unchanged unless it is an error, in which case it
    /// panics.
    ///
    /// The panic payload is the failure message as a `String`. When the panic
    /// is caught by one of the `try_run` functions, the failure is rebuilt
    /// around the raised cause: the failure's own cause when it has one,
    /// otherwise a new [`Fault::Generic`] carrying the message.
    ///
    /// # Panics
    ///
    /// Panics when the outcome is an error.
    #[track_caller]
    pub fn expect(self) -> Self {
        match self {
            Self::Failure(failure) if failure.is_set => {
                tracing::error!(
                    reason = %failure.message,
                    has_cause = failure.has_cause(),
                    "expect called on a failed outcome"
                );
                let cause: Cause = match failure.cause {
                    Some(cause) => cause,
                    None => Arc::new(Fault::Generic(failure.message.clone())),
                };
                RAISED.with(|slot| *slot.borrow_mut() = Some((failure.message.clone(), cause)));
                panic!("{}", failure.message)
            }
            other => other,
        }
    }
}
