//! Precond: design-by-contract runtime guards
//!
//! A small set of guard functions that validate arguments and object state
//! and fail fast with typed, diagnosable errors. Callers place a check at
//! the top of a function; a passing check is a no-op (narrowing checks
//! return the validated value for inline use), a failing check yields an
//! [`IllegalArgumentError`] or [`IllegalStateError`] with a fully formatted
//! message and a backtrace captured at construction.
//!
//! # Core Concepts
//!
//! - **Plain assertions**: [`check_argument`] / [`check_state`] over any
//!   [`Truthy`] condition
//! - **Narrowing checks**: `check_is_*` validate a dynamic [`Value`]
//!   against one [`TypeTag`] constraint and pass it through
//! - **Error hierarchy**: both failure kinds implement
//!   [`PreconditionError`] and lift into [`CheckError`]
//!
//! # Example
//!
//! ```rust
//! use precond::error::CheckError;
//! use precond::guard::{check_argument, check_is_string_not_empty};
//! use precond::value::Value;
//!
//! fn register(name: Value, age: f64) -> Result<String, CheckError> {
//!     let name = check_is_string_not_empty(name, Some("name is required"), &[])?;
//!     check_argument(age >= 0.0, Some("age must be non-negative, got %d"), &[age.into()])?;
//!     Ok(name.to_string())
//! }
//!
//! assert_eq!(register(Value::from("ada"), 36.0).unwrap(), "ada");
//!
//! let err = register(Value::from(""), 36.0).unwrap_err();
//! assert_eq!(err.message(), "name is required");
//! ```

pub mod error;
pub mod fmt;
pub mod guard;
pub mod value;

// Re-export commonly used types
pub use error::{CheckError, ErrorKind, IllegalArgumentError, IllegalStateError, PreconditionError};
pub use guard::{check_argument, check_state};
pub use value::{Truthy, TypeTag, Value};
