//! Side-effect taps that observe an outcome without changing it.

use crate::error::Failure;
use crate::outcome::Outcome;

impl<T> Outcome<T> {
    /// Calls `action` with the outcome, whatever its state.
    pub fn on_any<F>(self, action: F) -> Self
    where
        F: FnOnce(&Self),
    {
        action(&self);
        self
    }

    /// Calls `action` with the value when ok.
    pub fn on_ok<F>(self, action: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Some(value) = self.value_ref() {
            action(value);
        }
        self
    }

    /// Calls `action` with the failure when this is an error.
    pub fn on_error<F>(self, action: F) -> Self
    where
        F: FnOnce(&Failure),
    {
        if let Self::Failure(failure @ Failure { is_set: true, .. }) = &self {
            action(failure);
        }
        self
    }
}
