//! Base behavior shared across the contract error hierarchy.
//!
//! The hierarchy is expressed as a trait with an `std::error::Error`
//! supertrait: implementing [`PreconditionError`] makes a type a subtype of
//! the base contract error and, transitively, of the platform error type.
//! `downcast_ref` on a `dyn Error` recovers the concrete kind, and the
//! trait's provided methods are inherited by every implementor without a
//! local definition.

use std::backtrace::Backtrace;
use std::error::Error as StdError;
use std::fmt;

/// Identity of a contract error within the hierarchy.
///
/// Plays the role of constructor identity: each concrete error type reports
/// its own kind, never its parent's.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum ErrorKind {
    IllegalArgument,
    IllegalState,
}

impl ErrorKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::IllegalArgument => "IllegalArgumentError",
            Self::IllegalState => "IllegalStateError",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Behavior shared by every contract error.
///
/// # Example
///
/// ```rust
/// use precond::error::{ErrorKind, IllegalArgumentError, PreconditionError};
/// use std::error::Error;
///
/// let err = IllegalArgumentError::new("index out of range");
///
/// // Upcast: every contract error is a platform error.
/// let platform: &dyn Error = &err;
/// assert!(platform.downcast_ref::<IllegalArgumentError>().is_some());
///
/// // Identity and inherited behavior.
/// assert_eq!(err.kind(), ErrorKind::IllegalArgument);
/// assert_eq!(err.describe(), "IllegalArgumentError: index out of range");
/// ```
pub trait PreconditionError: StdError + Send + Sync + 'static {
    /// This error's own identity.
    fn kind(&self) -> ErrorKind;

    /// The fully resolved message. Never a template: substitution happens
    /// before the error is constructed.
    fn message(&self) -> &str;

    /// Backtrace captured when the error was constructed.
    ///
    /// Capture honors `RUST_BACKTRACE`; with capture disabled the error
    /// still constructs and carries a disabled trace.
    fn trace(&self) -> &Backtrace;

    /// Single-line rendering of kind and message.
    fn describe(&self) -> String {
        format!("{}: {}", self.kind(), self.message())
    }

    /// Whether this error reports a caller-supplied invalid value.
    fn is_argument_error(&self) -> bool {
        self.kind() == ErrorKind::IllegalArgument
    }

    /// Whether this error reports a violated internal invariant.
    fn is_state_error(&self) -> bool {
        self.kind() == ErrorKind::IllegalState
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{IllegalArgumentError, IllegalStateError};

    #[test]
    fn kind_names_match_error_class_names() {
        assert_eq!(ErrorKind::IllegalArgument.to_string(), "IllegalArgumentError");
        assert_eq!(ErrorKind::IllegalState.to_string(), "IllegalStateError");
    }

    #[test]
    fn children_upcast_to_platform_error() {
        let argument = IllegalArgumentError::new("bad index");
        let state = IllegalStateError::new("not initialized");

        let platform: &dyn StdError = &argument;
        assert!(platform.downcast_ref::<IllegalArgumentError>().is_some());
        assert!(platform.downcast_ref::<IllegalStateError>().is_none());

        let platform: &dyn StdError = &state;
        assert!(platform.downcast_ref::<IllegalStateError>().is_some());
    }

    #[test]
    fn children_report_their_own_identity() {
        assert_eq!(
            IllegalArgumentError::new("x").kind(),
            ErrorKind::IllegalArgument
        );
        assert_eq!(IllegalStateError::new("x").kind(), ErrorKind::IllegalState);
    }

    #[test]
    fn provided_methods_are_inherited_by_children() {
        let argument = IllegalArgumentError::new("bad index");
        assert!(argument.is_argument_error());
        assert!(!argument.is_state_error());
        assert_eq!(argument.describe(), "IllegalArgumentError: bad index");

        let state = IllegalStateError::new("not initialized");
        assert!(state.is_state_error());
        assert_eq!(state.describe(), "IllegalStateError: not initialized");
    }

    #[test]
    fn children_are_usable_as_trait_objects() {
        let errors: Vec<Box<dyn PreconditionError>> = vec![
            Box::new(IllegalArgumentError::new("a")),
            Box::new(IllegalStateError::new("b")),
        ];

        let kinds: Vec<ErrorKind> = errors.iter().map(|e| e.kind()).collect();
        assert_eq!(kinds, vec![ErrorKind::IllegalArgument, ErrorKind::IllegalState]);
    }
}
