//! The outcome type: construction, queries, and value access.

use std::fmt;

use crate::empty::Empty;
use crate::error::{Cause, Failure};
use crate::success::Success;

/// The outcome of a fallible operation, held as a value.
///
/// Exactly one alternative is active. A default-constructed outcome is an
/// unset success, which is neither ok nor error. The success and failure
/// constructors never produce one; only `Outcome::default()` or an unset
/// record passed to `Outcome::from_failure` do.
///
/// Outcomes are immutable: every combinator returns a new outcome.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use]
pub enum Outcome<T> {
    /// The ok alternative.
    Success(Success<T>),
    /// The error alternative.
    Failure(Failure),
}

// =============================================================================
// Construction
// =============================================================================

impl<T> Outcome<T> {
    /// Creates an ok outcome holding `value`.
    pub const fn success(value: T) -> Self {
        Self::Success(Success::new(value))
    }

    /// Creates an ok outcome with nothing meaningful to report.
    ///
    /// The value slot holds `T::default()` but the outcome is still ok.
    pub fn success_default() -> Self
    where
        T: Default,
    {
        Self::Success(Success::defaulted(true))
    }

    /// Creates an error outcome with `message` and no cause.
    pub fn failure(message: impl Into<String>) -> Self {
        Self::Failure(Failure::new(message))
    }

    /// Creates an error outcome with `message` and an underlying `cause`.
    pub fn failure_with(message: impl Into<String>, cause: Cause) -> Self {
        Self::Failure(Failure::with_cause(message, cause))
    }

    /// Creates an error outcome from an error object.
    ///
    /// The message is the error's text, or `"Exception"` if it has none.
    pub fn from_cause<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Failure(Failure::from_cause(error))
    }

    /// Wraps an existing failure record.
    pub const fn from_failure(failure: Failure) -> Self {
        Self::Failure(failure)
    }
}

impl Outcome<Empty> {
    /// Creates an ok outcome over [`Empty`].
    pub const fn success_empty() -> Self {
        Self::success(Empty)
    }
}

impl<T: Default> Default for Outcome<T> {
    fn default() -> Self {
        Self::Success(Success::defaulted(false))
    }
}

// =============================================================================
// Queries
// =============================================================================

impl<T> Outcome<T> {
    /// Returns true if this is a set success.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Success(Success { is_set: true, .. }))
    }

    /// Returns true if this is a set failure.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Failure(Failure { is_set: true, .. }))
    }

    /// Returns true if the value slot is meaningful.
    ///
    /// Mirrors the active alternative's own flag, so a set failure also
    /// reports true here.
    #[must_use]
    pub const fn is_set(&self) -> bool {
        match self {
            Self::Success(success) => success.is_set,
            Self::Failure(failure) => failure.is_set,
        }
    }

    /// Returns the success alternative, if active.
    #[must_use]
    pub const fn success_ref(&self) -> Option<&Success<T>> {
        match self {
            Self::Success(success) => Some(success),
            Self::Failure(_) => None,
        }
    }

    /// Returns the failure alternative, if active.
    #[must_use]
    pub const fn failure_ref(&self) -> Option<&Failure> {
        match self {
            Self::Success(_) => None,
            Self::Failure(failure) => Some(failure),
        }
    }

    /// Returns the failure message when this is an error.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Failure(failure) if failure.is_set => Some(&failure.message),
            _ => None,
        }
    }

    /// Returns the failure cause when this is an error that has one.
    #[must_use]
    pub fn cause(&self) -> Option<&Cause> {
        match self {
            Self::Failure(failure) if failure.is_set => failure.cause.as_ref(),
            _ => None,
        }
    }
}

// =============================================================================
// Value Access
// =============================================================================

impl<T> Outcome<T> {
    /// Borrows the value when ok.
    #[must_use]
    pub const fn value_ref(&self) -> Option<&T> {
        match self {
            Self::Success(Success {
                value,
                is_set: true,
            }) => Some(value),
            _ => None,
        }
    }

    /// Returns a copy of the value, or `T::default()` when not ok.
    ///
    /// Never panics. A default returned for a non-ok outcome cannot be told
    /// apart from a legitimately defaulted success, so debug builds log it.
    #[must_use]
    pub fn value(&self) -> T
    where
        T: Default + Clone,
    {
        if let Some(value) = self.value_ref() {
            return value.clone();
        }
        #[cfg(debug_assertions)]
        tracing::warn!(
            is_error = self.is_error(),
            "value read from a non-ok outcome; returning default"
        );
        T::default()
    }

    /// Consumes the outcome and returns the value when ok.
    #[must_use]
    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Success(Success {
                value,
                is_set: true,
            }) => Some(value),
            _ => None,
        }
    }

    /// Consumes the outcome and returns the failure when it is an error.
    #[must_use]
    pub fn into_failure(self) -> Option<Failure> {
        match self {
            Self::Failure(failure) if failure.is_set => Some(failure),
            _ => None,
        }
    }
}

impl<T: fmt::Display> fmt::Display for Outcome<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(success) => fmt::Display::fmt(success, f),
            Self::Failure(failure) => fmt::Display::fmt(failure, f),
        }
    }
}
