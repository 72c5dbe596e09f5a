//! The success alternative of an outcome.

use std::fmt;

/// The ok alternative of an [`Outcome`](crate::Outcome).
///
/// `is_set` distinguishes a meaningful value from the placeholder held by a
/// default-constructed outcome.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Success<T> {
    /// The carried value.
    pub value: T,
    /// Whether `value` is meaningful.
    pub is_set: bool,
}

impl<T> Success<T> {
    /// Creates a set success holding `value`.
    #[must_use]
    pub const fn new(value: T) -> Self {
        Self {
            value,
            is_set: true,
        }
    }

    /// Creates a success holding `T::default()` with the given flag.
    #[must_use]
    pub fn defaulted(is_set: bool) -> Self
    where
        T: Default,
    {
        Self {
            value: T::default(),
            is_set,
        }
    }
}

impl<T: fmt::Display> fmt::Display for Success<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_set {
            write!(f, "Ok: {}", self.value)
        } else {
            f.write_str("None")
        }
    }
}
