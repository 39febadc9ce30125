//! Host truthiness rules as a trait, so plain assertions accept both
//! native Rust conditions and dynamic values.

use super::dynamic::Value;

/// Types that can stand in for a boolean condition.
///
/// The falsy set mirrors the host rules used by [`Value`]: `false`, zero,
/// `NaN`, the empty string, `None`, and the null/undefined sentinels.
///
/// # Example
///
/// ```rust
/// use precond::value::{Truthy, Value};
///
/// assert!(true.is_truthy());
/// assert!(!0.0_f64.is_truthy());
/// assert!(!"".is_truthy());
/// assert!(!Value::Null.is_truthy());
/// assert!(Some(1).is_truthy());
/// ```
pub trait Truthy {
    fn is_truthy(&self) -> bool;
}

impl Truthy for bool {
    fn is_truthy(&self) -> bool {
        *self
    }
}

impl Truthy for Value {
    fn is_truthy(&self) -> bool {
        Value::is_truthy(self)
    }
}

impl Truthy for f64 {
    fn is_truthy(&self) -> bool {
        *self != 0.0 && !self.is_nan()
    }
}

impl Truthy for i64 {
    fn is_truthy(&self) -> bool {
        *self != 0
    }
}

impl Truthy for str {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for String {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

// None maps to the missing-value sentinel; a present value of any kind is
// truthy, matching "any object is truthy".
impl<T> Truthy for Option<T> {
    fn is_truthy(&self) -> bool {
        self.is_some()
    }
}

impl<T: Truthy + ?Sized> Truthy for &T {
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}
