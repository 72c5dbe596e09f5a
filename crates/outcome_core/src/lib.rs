//! Value-based outcomes for fallible operations.
//!
//! This crate provides:
//! - [`Outcome`] - Either a [`Success`] carrying a value or a [`Failure`]
//! - [`Empty`] - The payload of an operation that succeeds with nothing to report
//! - [`Cause`] and [`Fault`] - The underlying error objects a failure may carry
//! - [`try_run`] and friends - The one boundary where panics become failures
//!
//! Combinators ([`Outcome::map`], [`Outcome::and_then`], [`Outcome::on_error`], ...)
//! are inherent methods, so chains read left to right:
//!
//! ```
//! use outcome_core::{Outcome, try_run};
//!
//! let doubled = try_run(|| 21)
//!     .map(|n| n * 2)
//!     .on_error(|failure| eprintln!("{failure}"));
//! assert_eq!(doubled, Outcome::success(42));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod chain;
mod convert;
mod empty;
mod error;
mod exec;
mod expect;
mod outcome;
mod success;
mod tap;

pub use empty::Empty;
pub use error::{Cause, Failure, Fault};
pub use exec::{try_run, try_run_action, try_run_fallible, try_run_outcome};
pub use outcome::Outcome;
pub use success::Success;
