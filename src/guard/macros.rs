//! Macros for ergonomic inline checks.
//!
//! The macros forward to the engine functions, converting each variadic
//! substitution argument through `Value::from`.

/// Check a caller-supplied condition, failing with `IllegalArgument`.
///
/// # Example
///
/// ```
/// use precond::check_argument;
/// use precond::error::CheckError;
///
/// fn rename(name: &str) -> Result<(), CheckError> {
///     check_argument!(!name.is_empty(), "name must not be empty")?;
///     check_argument!(name.len() <= 64, "name %s exceeds %d chars", name, 64)?;
///     Ok(())
/// }
///
/// assert!(rename("ada").is_ok());
/// assert!(rename("").is_err());
/// ```
#[macro_export]
macro_rules! check_argument {
    ($value:expr) => {
        $crate::guard::check_argument($value, ::core::option::Option::None, &[])
    };
    ($value:expr, $message:expr) => {
        $crate::guard::check_argument($value, ::core::option::Option::Some($message), &[])
    };
    ($value:expr, $message:expr, $($arg:expr),+ $(,)?) => {
        $crate::guard::check_argument(
            $value,
            ::core::option::Option::Some($message),
            &[$($crate::value::Value::from($arg)),+],
        )
    };
}

/// Check an internal invariant, failing with `IllegalState`.
///
/// Same shape as [`check_argument!`].
#[macro_export]
macro_rules! check_state {
    ($value:expr) => {
        $crate::guard::check_state($value, ::core::option::Option::None, &[])
    };
    ($value:expr, $message:expr) => {
        $crate::guard::check_state($value, ::core::option::Option::Some($message), &[])
    };
    ($value:expr, $message:expr, $($arg:expr),+ $(,)?) => {
        $crate::guard::check_state(
            $value,
            ::core::option::Option::Some($message),
            &[$($crate::value::Value::from($arg)),+],
        )
    };
}

#[cfg(test)]
mod tests {
    use crate::error::ErrorKind;

    #[test]
    fn bare_condition_uses_empty_message() {
        assert!(check_argument!(true).is_ok());

        let err = check_argument!(false).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::IllegalArgument);
        assert_eq!(err.message(), "");
    }

    #[test]
    fn message_only_form() {
        let err = check_state!(false, "not connected").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::IllegalState);
        assert_eq!(err.message(), "not connected");
    }

    #[test]
    fn variadic_args_are_converted_and_substituted() {
        let err = check_argument!(false, "bad value: %s", "x").unwrap_err();
        assert_eq!(err.message(), "bad value: x");

        let err = check_state!(false, "%s took %d retries", "sync", 3).unwrap_err();
        assert_eq!(err.message(), "sync took 3 retries");
    }

    #[test]
    fn trailing_comma_is_accepted() {
        let err = check_argument!(false, "%s/%s", "a", "b",).unwrap_err();
        assert_eq!(err.message(), "a/b");
    }
}
