//! The unit payload of a successful operation with nothing to report.

use std::fmt;

/// Marker for "the operation succeeded and produced nothing".
///
/// `Outcome<Empty>` is the canonical result of a fallible procedure.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Empty;

impl fmt::Display for Empty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Empty")
    }
}

impl From<()> for Empty {
    fn from((): ()) -> Self {
        Self
    }
}
