//! Concrete error types raised by failed checks.

use super::base::{ErrorKind, PreconditionError};
// Aliased so thiserror's derive does not detect a `Backtrace`-typed field,
// which would generate nightly-only `Error::provide` code.
use std::backtrace::Backtrace as Trace;
use std::backtrace::Backtrace;
use thiserror::Error;

/// Raised when a caller supplies an invalid value.
///
/// Constructed from a fully resolved message; the backtrace is captured
/// inside the constructor, before the value is returned.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct IllegalArgumentError {
    message: String,
    trace: Trace,
}

impl IllegalArgumentError {
    pub fn new(message: impl Into<String>) -> Self {
        IllegalArgumentError {
            message: message.into(),
            trace: Backtrace::capture(),
        }
    }
}

impl PreconditionError for IllegalArgumentError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::IllegalArgument
    }

    fn message(&self) -> &str {
        &self.message
    }

    fn trace(&self) -> &Backtrace {
        &self.trace
    }
}

/// Raised when an internal invariant is violated independent of arguments.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct IllegalStateError {
    message: String,
    trace: Trace,
}

impl IllegalStateError {
    pub fn new(message: impl Into<String>) -> Self {
        IllegalStateError {
            message: message.into(),
            trace: Backtrace::capture(),
        }
    }
}

impl PreconditionError for IllegalStateError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::IllegalState
    }

    fn message(&self) -> &str {
        &self.message
    }

    fn trace(&self) -> &Backtrace {
        &self.trace
    }
}

/// Either failure kind, as returned by every check.
///
/// The `From` conversions are the upcast relation: each concrete error
/// lifts into `CheckError` with `?` or `.into()`.
///
/// # Example
///
/// ```rust
/// use precond::error::{CheckError, ErrorKind, IllegalStateError};
///
/// let err: CheckError = IllegalStateError::new("connection closed").into();
/// assert_eq!(err.kind(), ErrorKind::IllegalState);
/// assert_eq!(err.message(), "connection closed");
/// ```
#[derive(Debug, Error)]
pub enum CheckError {
    #[error(transparent)]
    IllegalArgument(#[from] IllegalArgumentError),
    #[error(transparent)]
    IllegalState(#[from] IllegalStateError),
}

impl CheckError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CheckError::IllegalArgument(e) => e.kind(),
            CheckError::IllegalState(e) => e.kind(),
        }
    }

    pub fn message(&self) -> &str {
        match self {
            CheckError::IllegalArgument(e) => e.message(),
            CheckError::IllegalState(e) => e.message(),
        }
    }

    pub fn trace(&self) -> &Backtrace {
        match self {
            CheckError::IllegalArgument(e) => e.trace(),
            CheckError::IllegalState(e) => e.trace(),
        }
    }
}
