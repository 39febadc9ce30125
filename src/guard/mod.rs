//! The guard engine: plain assertions and narrowing checks.
//!
//! Callers invoke a check inline at the top of a function. On success the
//! call is a no-op (or passes the validated value through); on failure it
//! returns a typed [`CheckError`](crate::error::CheckError) carrying a
//! fully formatted message and a backtrace captured at construction.

mod checks;
mod macros;

pub use checks::{
    check_argument, check_is_array, check_is_array_not_empty, check_is_boolean, check_is_def,
    check_is_def_and_not_null, check_is_function, check_is_number, check_is_object,
    check_is_object_not_empty, check_is_string, check_is_string_not_empty, check_state,
};
