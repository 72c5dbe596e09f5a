//! Conversions between typed and empty outcomes, bare values, and std results.

use crate::empty::Empty;
use crate::error::Failure;
use crate::outcome::Outcome;
use crate::success::Success;

/// Message of the failure an unset outcome turns into when leaving the crate.
const UNSET_MESSAGE: &str = "None";

impl<T> Outcome<T> {
    /// Drops the value, keeping only ok/error-ness.
    ///
    /// A failure passes through verbatim. A success becomes an [`Empty`]
    /// success whose `is_set` mirrors the source.
    pub fn to_empty(self) -> Outcome<Empty> {
        self.retag()
    }

    /// Wraps a bare value as a success.
    pub const fn from_value(value: T) -> Self {
        Self::success(value)
    }

    /// Returns the value when ok, or `T::default()` otherwise.
    ///
    /// Lossy on purpose: a failure silently becomes the default.
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        self.into_value().unwrap_or_default()
    }

    /// Converts a std result, turning `Err(e)` into a failure caused by `e`.
    pub fn from_std<E>(result: Result<T, E>) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        match result {
            Ok(value) => Self::success(value),
            Err(error) => Self::from_cause(error),
        }
    }

    /// Converts into a std result so the outcome can be propagated with `?`.
    ///
    /// # Errors
    ///
    /// Returns the failure when this is not a set success. An unset outcome
    /// becomes a failure with the message `"None"`.
    pub fn into_std(self) -> Result<T, Failure> {
        match self {
            Self::Success(Success {
                value,
                is_set: true,
            }) => Ok(value),
            Self::Failure(failure) if failure.is_set => Err(failure),
            _ => Err(Failure::new(UNSET_MESSAGE)),
        }
    }
}

impl Outcome<Empty> {
    /// Re-types an empty outcome.
    ///
    /// A failure passes through verbatim. A success becomes a success holding
    /// `U::default()` whose `is_set` mirrors the source.
    pub fn to_typed<U: Default>(self) -> Outcome<U> {
        self.retag()
    }
}

impl<T> From<T> for Outcome<T> {
    fn from(value: T) -> Self {
        Self::from_value(value)
    }
}
