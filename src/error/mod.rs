//! Typed errors raised by failed checks.
//!
//! Two kinds exist: [`IllegalArgumentError`] for caller-supplied invalid
//! values and [`IllegalStateError`] for violated internal invariants. Both
//! implement [`PreconditionError`], the base of the hierarchy, and lift
//! into [`CheckError`] for `Result` propagation.

mod base;
mod kinds;

pub use base::{ErrorKind, PreconditionError};
pub use kinds::{CheckError, IllegalArgumentError, IllegalStateError};
