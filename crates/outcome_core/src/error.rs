//! Error types for failed outcomes.
//!
//! Uses `thiserror` for the faults this crate raises itself. The failure
//! record is flat: a message plus an optional underlying cause.

use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

use thiserror::Error;

/// The underlying error object a [`Failure`] may carry.
///
/// Cloning an outcome shares its cause; a cause raised by `expect` and caught
/// by `try_run` is the same object.
pub type Cause = Arc<dyn StdError + Send + Sync + 'static>;

/// Message used when a cause has no text of its own.
pub(crate) const FALLBACK_MESSAGE: &str = "Exception";

/// Faults raised or captured by this crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Fault {
    /// Raised by `expect` on a failure that has no cause.
    #[error("{0}")]
    Generic(String),

    /// A panic captured by one of the `try_run` functions.
    #[error("{0}")]
    Panic(String),
}

impl Fault {
    /// Creates a generic fault carrying `message`.
    #[must_use]
    pub fn generic(message: impl Into<String>) -> Self {
        Self::Generic(message.into())
    }

    /// Returns the fault's message.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Generic(message) | Self::Panic(message) => message,
        }
    }
}

/// The error alternative of an [`Outcome`](crate::Outcome).
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Failure {
    /// Human-readable description of what went wrong.
    pub message: String,
    /// The error object this failure originated from, if any.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub cause: Option<Cause>,
    /// Whether this record is the active alternative.
    pub is_set: bool,
}

impl Failure {
    /// Creates a set failure with no cause.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            cause: None,
            is_set: true,
        }
    }

    /// Creates a set failure with an explicit message and cause.
    #[must_use]
    pub fn with_cause(message: impl Into<String>, cause: Cause) -> Self {
        Self {
            message: message.into(),
            cause: Some(cause),
            is_set: true,
        }
    }

    /// Creates a failure from an error, taking the error's text as the message.
    #[must_use]
    pub fn from_cause<E>(error: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::from_shared_cause(Arc::new(error))
    }

    /// Like [`Failure::from_cause`], for a cause that is already shared.
    ///
    /// An empty error text falls back to `"Exception"`.
    #[must_use]
    pub fn from_shared_cause(cause: Cause) -> Self {
        let text = cause.to_string();
        let message = if text.is_empty() {
            FALLBACK_MESSAGE.to_string()
        } else {
            text
        };
        Self::with_cause(message, cause)
    }

    /// Returns true if the failure carries a cause.
    #[must_use]
    pub fn has_cause(&self) -> bool {
        self.cause.is_some()
    }

    /// Attempts to view the cause as a concrete error type.
    #[must_use]
    pub fn cause_as<E: StdError + 'static>(&self) -> Option<&E> {
        self.cause.as_deref().and_then(|cause| cause.downcast_ref())
    }
}

impl Default for Failure {
    fn default() -> Self {
        Self {
            message: String::new(),
            cause: None,
            is_set: false,
        }
    }
}

impl PartialEq for Failure {
    fn eq(&self, other: &Self) -> bool {
        let same_cause = match (&self.cause, &other.cause) {
            (None, None) => true,
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            _ => false,
        };
        self.is_set == other.is_set && self.message == other.message && same_cause
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_set {
            write!(f, "Error: {}", self.message)
        } else {
            f.write_str("None")
        }
    }
}

impl StdError for Failure {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.cause
            .as_deref()
            .map(|cause| cause as &(dyn StdError + 'static))
    }
}
