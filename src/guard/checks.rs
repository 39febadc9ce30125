//! Plain assertions and narrowing checks.
//!
//! Every check is a single-shot, stateless operation with two outcomes:
//! pass-through or a typed failure. Plain assertions return `Ok(())`;
//! narrowing checks return the validated value unchanged so they can be
//! used inline as expressions.

use crate::error::{CheckError, IllegalArgumentError, IllegalStateError};
use crate::fmt::sprintf;
use crate::value::{Truthy, TypeTag, Value};

fn fail_argument(message: Option<&str>, default: &str, args: &[Value]) -> CheckError {
    IllegalArgumentError::new(sprintf(message.unwrap_or(default), args)).into()
}

fn fail_state(message: Option<&str>, default: &str, args: &[Value]) -> CheckError {
    IllegalStateError::new(sprintf(message.unwrap_or(default), args)).into()
}

/// Check that a caller-supplied condition holds.
///
/// Fails with [`IllegalArgumentError`] when `value` is falsy. The optional
/// `message` is a template resolved against `args`; omitted, the message is
/// empty.
///
/// # Example
///
/// ```rust
/// use precond::guard::check_argument;
/// use precond::error::CheckError;
///
/// fn nth(items: &[i64], index: usize) -> Result<i64, CheckError> {
///     check_argument(index < items.len(), Some("index %d out of range"), &[(index as i64).into()])?;
///     Ok(items[index])
/// }
///
/// assert_eq!(nth(&[10, 20], 1).unwrap(), 20);
/// let err = nth(&[10, 20], 5).unwrap_err();
/// assert_eq!(err.message(), "index 5 out of range");
/// ```
pub fn check_argument<C: Truthy>(
    value: C,
    message: Option<&str>,
    args: &[Value],
) -> Result<(), CheckError> {
    if value.is_truthy() {
        Ok(())
    } else {
        Err(fail_argument(message, "", args))
    }
}

/// Check that an internal invariant holds, independent of arguments.
///
/// Fails with [`IllegalStateError`] when `value` is falsy.
pub fn check_state<C: Truthy>(
    value: C,
    message: Option<&str>,
    args: &[Value],
) -> Result<(), CheckError> {
    if value.is_truthy() {
        Ok(())
    } else {
        Err(fail_state(message, "", args))
    }
}

/// Check that `value` is defined, passing `Null` through.
///
/// Fails only for the `Undefined` sentinel; a defined null is accepted and
/// returned unchanged.
pub fn check_is_def(
    value: Value,
    message: Option<&str>,
    args: &[Value],
) -> Result<Value, CheckError> {
    if value.tag() != TypeTag::Undefined {
        return Ok(value);
    }

    Err(fail_argument(
        message,
        "Expected value to be defined but was undefined.",
        args,
    ))
}

/// Check that `value` is neither `Undefined` nor `Null`.
///
/// The two sentinels collapse into one failure, mirroring a loose null
/// comparison.
pub fn check_is_def_and_not_null(
    value: Value,
    message: Option<&str>,
    args: &[Value],
) -> Result<Value, CheckError> {
    match value.tag() {
        TypeTag::Undefined | TypeTag::Null => {
            let default = format!(
                "Expected value to be defined and not null but got \"{}\".",
                value.tag()
            );
            Err(fail_argument(message, &default, args))
        }
        _ => Ok(value),
    }
}

fn check_is_type(
    value: Value,
    expected: TypeTag,
    message: Option<&str>,
    args: &[Value],
) -> Result<Value, CheckError> {
    let got = value.tag();
    if got == expected {
        return Ok(value);
    }

    let default = format!("Expected \"{expected}\" but got \"{got}\".");
    Err(fail_argument(message, &default, args))
}

fn check_is_type_not_empty(
    value: Value,
    expected: TypeTag,
    message: Option<&str>,
    args: &[Value],
) -> Result<Value, CheckError> {
    let value = check_is_type(value, expected, message, args)?;

    if value.is_empty() {
        return Err(fail_argument(
            message,
            "Expected value to not be empty.",
            args,
        ));
    }

    Ok(value)
}

/// Check that `value` resolves to the `string` tag.
///
/// # Example
///
/// ```rust
/// use precond::guard::check_is_string;
/// use precond::value::Value;
///
/// let name = check_is_string(Value::from("ada"), None, &[]).unwrap();
/// assert_eq!(name, Value::from("ada"));
///
/// let err = check_is_string(Value::Number(7.0), None, &[]).unwrap_err();
/// assert_eq!(err.message(), "Expected \"string\" but got \"number\".");
/// ```
pub fn check_is_string(
    value: Value,
    message: Option<&str>,
    args: &[Value],
) -> Result<Value, CheckError> {
    check_is_type(value, TypeTag::String, message, args)
}

/// Check that `value` resolves to the `string` tag and is non-empty.
pub fn check_is_string_not_empty(
    value: Value,
    message: Option<&str>,
    args: &[Value],
) -> Result<Value, CheckError> {
    check_is_type_not_empty(value, TypeTag::String, message, args)
}

/// Check that `value` resolves to the `array` tag.
pub fn check_is_array(
    value: Value,
    message: Option<&str>,
    args: &[Value],
) -> Result<Value, CheckError> {
    check_is_type(value, TypeTag::Array, message, args)
}

/// Check that `value` resolves to the `array` tag and has at least one item.
pub fn check_is_array_not_empty(
    value: Value,
    message: Option<&str>,
    args: &[Value],
) -> Result<Value, CheckError> {
    check_is_type_not_empty(value, TypeTag::Array, message, args)
}

/// Check that `value` resolves to the `number` tag.
pub fn check_is_number(
    value: Value,
    message: Option<&str>,
    args: &[Value],
) -> Result<Value, CheckError> {
    check_is_type(value, TypeTag::Number, message, args)
}

/// Check that `value` resolves to the `boolean` tag.
pub fn check_is_boolean(
    value: Value,
    message: Option<&str>,
    args: &[Value],
) -> Result<Value, CheckError> {
    check_is_type(value, TypeTag::Boolean, message, args)
}

/// Check that `value` resolves to the `function` tag.
pub fn check_is_function(
    value: Value,
    message: Option<&str>,
    args: &[Value],
) -> Result<Value, CheckError> {
    check_is_type(value, TypeTag::Function, message, args)
}

/// Check that `value` resolves to the `object` tag.
///
/// Null and arrays resolve to their own tags and fail this check.
pub fn check_is_object(
    value: Value,
    message: Option<&str>,
    args: &[Value],
) -> Result<Value, CheckError> {
    check_is_type(value, TypeTag::Object, message, args)
}

/// Check that `value` resolves to the `object` tag and has at least one entry.
pub fn check_is_object_not_empty(
    value: Value,
    message: Option<&str>,
    args: &[Value],
) -> Result<Value, CheckError> {
    check_is_type_not_empty(value, TypeTag::Object, message, args)
}
