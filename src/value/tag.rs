//! Type tags produced by dynamic value resolution.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The resolved semantic type of a [`Value`](super::Value).
///
/// Resolution applies two corrections over a naive "typeof": a null value
/// resolves to [`TypeTag::Null`] rather than `Object`, and an array resolves
/// to [`TypeTag::Array`] rather than `Object`. Every dynamic value resolves
/// to exactly one of the eight tags.
///
/// # Example
///
/// ```rust
/// use precond::value::{TypeTag, Value};
///
/// assert_eq!(Value::Null.tag(), TypeTag::Null);
/// assert_eq!(Value::Array(vec![]).tag(), TypeTag::Array);
/// assert_eq!(TypeTag::Boolean.to_string(), "boolean");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeTag {
    Undefined,
    Null,
    Boolean,
    Number,
    String,
    Array,
    Object,
    Function,
}

impl TypeTag {
    /// Lowercase tag name, as interpolated into default failure messages.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Undefined => "undefined",
            Self::Null => "null",
            Self::Boolean => "boolean",
            Self::Number => "number",
            Self::String => "string",
            Self::Array => "array",
            Self::Object => "object",
            Self::Function => "function",
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
