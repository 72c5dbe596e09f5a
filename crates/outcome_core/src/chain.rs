//! Chaining combinators.
//!
//! `retag`, `and_then` and `map` short-circuit: a failure is carried into the
//! new outcome and the continuation never runs. `map_outcome` and
//! `map_outcome_value` hand the whole outcome to the continuation instead.

use crate::outcome::Outcome;
use crate::success::Success;

impl<T> Outcome<T> {
    /// Changes the value type, discarding the value.
    ///
    /// A failure propagates. A success becomes a success holding
    /// `U::default()`, with `is_set` mirrored from the source.
    pub fn retag<U: Default>(self) -> Outcome<U> {
        match self {
            Self::Success(success) => Outcome::Success(Success::defaulted(success.is_set)),
            Self::Failure(failure) => Outcome::Failure(failure),
        }
    }

    /// Continues with a step that may itself fail.
    ///
    /// The step's outcome is returned as-is; a failure inside it is the
    /// step's own to report.
    pub fn and_then<U, F>(self, step: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Outcome<U>,
    {
        match self {
            Self::Success(success) => step(success.value),
            Self::Failure(failure) => Outcome::Failure(failure),
        }
    }

    /// Transforms the success value.
    pub fn map<U, F>(self, mapper: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        self.and_then(|value| Outcome::success(mapper(value)))
    }

    /// Hands the whole outcome, failures included, to `step`.
    pub fn map_outcome<U, F>(self, step: F) -> Outcome<U>
    where
        F: FnOnce(Self) -> Outcome<U>,
    {
        step(self)
    }

    /// Hands the whole outcome to `resolve` and wraps what it returns as a
    /// success.
    pub fn map_outcome_value<U, F>(self, resolve: F) -> Outcome<U>
    where
        F: FnOnce(Self) -> U,
    {
        Outcome::success(resolve(self))
    }
}
