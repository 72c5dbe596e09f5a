//! Outcome - value-based results for fallible operations
//!
//! This crate re-exports the outcome layers for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 0: outcome_core — Outcome, Success, Failure, Empty, try_run, combinators
//! ```

pub use outcome_core;
pub use outcome_core::{
    Cause, Empty, Failure, Fault, Outcome, Success, try_run, try_run_action, try_run_fallible,
    try_run_outcome,
};
