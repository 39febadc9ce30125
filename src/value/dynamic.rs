//! The closed tagged union of dynamic host values.
//!
//! Untyped values entering the guard engine are represented as [`Value`],
//! a discriminated union with one variant per [`TypeTag`]. This keeps type
//! resolution exhaustive: every value resolves to exactly one tag, with
//! null and arrays distinguished from plain objects.

use super::tag::TypeTag;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// A host function carried inside a [`Value`].
///
/// Wraps a thread-safe callable; clones share the same function and two
/// handles compare equal only when they point at the same function.
#[derive(Clone)]
pub struct NativeFn(Arc<dyn Fn(&[Value]) -> Value + Send + Sync>);

impl NativeFn {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&[Value]) -> Value + Send + Sync + 'static,
    {
        NativeFn(Arc::new(f))
    }

    /// Invoke the wrapped function.
    pub fn call(&self, args: &[Value]) -> Value {
        (self.0)(args)
    }
}

impl fmt::Debug for NativeFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("NativeFn(<fn>)")
    }
}

impl PartialEq for NativeFn {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

/// A dynamic value checked by the guard engine.
///
/// # Example
///
/// ```rust
/// use precond::value::{TypeTag, Value};
///
/// let v = Value::from("hello");
/// assert_eq!(v.tag(), TypeTag::String);
/// assert!(v.is_truthy());
/// assert!(!v.is_empty());
/// ```
#[derive(Clone, PartialEq, Debug)]
pub enum Value {
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Array(Vec<Value>),
    Object(BTreeMap<String, Value>),
    Function(NativeFn),
}

impl Value {
    /// Wrap a host function.
    pub fn function<F>(f: F) -> Self
    where
        F: Fn(&[Value]) -> Value + Send + Sync + 'static,
    {
        Value::Function(NativeFn::new(f))
    }

    /// Resolve this value's type tag.
    ///
    /// Null resolves to [`TypeTag::Null`] and arrays to [`TypeTag::Array`];
    /// only plain key/value maps resolve to [`TypeTag::Object`].
    pub fn tag(&self) -> TypeTag {
        match self {
            Value::Undefined => TypeTag::Undefined,
            Value::Null => TypeTag::Null,
            Value::Bool(_) => TypeTag::Boolean,
            Value::Number(_) => TypeTag::Number,
            Value::String(_) => TypeTag::String,
            Value::Array(_) => TypeTag::Array,
            Value::Object(_) => TypeTag::Object,
            Value::Function(_) => TypeTag::Function,
        }
    }

    /// Host truthiness: `Undefined`, `Null`, `false`, `0`, `NaN` and the
    /// empty string are falsy; everything else, including empty arrays and
    /// objects, is truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Undefined | Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => *n != 0.0 && !n.is_nan(),
            Value::String(s) => !s.is_empty(),
            Value::Array(_) | Value::Object(_) | Value::Function(_) => true,
        }
    }

    /// Emptiness as used by the `*_not_empty` checks: a zero-length string,
    /// a zero-length array, or an object with no entries. Every other
    /// variant is never empty.
    pub fn is_empty(&self) -> bool {
        match self {
            Value::String(s) => s.is_empty(),
            Value::Array(items) => items.is_empty(),
            Value::Object(map) => map.is_empty(),
            _ => false,
        }
    }

    /// Numeric coercion used by the `%d` placeholder. Booleans coerce to
    /// 0/1, null to 0, and numeric strings parse; anything else has no
    /// numeric form.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            Value::Null => Some(0.0),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Convert to a JSON value for the `%j` placeholder.
    ///
    /// Lossy at the edges: `Undefined` and `Function` have no JSON form and
    /// map to JSON null, as does a non-finite number.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Value::Undefined | Value::Null | Value::Function(_) => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::Number(n) => serde_json::Number::from_f64(*n)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Value::String(s) => serde_json::Value::String(s.clone()),
            Value::Array(items) => {
                serde_json::Value::Array(items.iter().map(Value::to_json).collect())
            }
            Value::Object(map) => serde_json::Value::Object(
                map.iter().map(|(k, v)| (k.clone(), v.to_json())).collect(),
            ),
        }
    }
}

impl fmt::Display for Value {
    /// Substitution form used by the `%s` placeholder: strings render bare,
    /// integral numbers without a fractional part, functions as `<fn>`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => f.write_str("undefined"),
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Number(n) => {
                if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
                    write!(f, "{}", *n as i64)
                } else {
                    write!(f, "{n}")
                }
            }
            Value::String(s) => f.write_str(s),
            Value::Array(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Value::Object(map) => {
                f.write_str("{")?;
                for (i, (key, value)) in map.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                f.write_str("}")
            }
            Value::Function(_) => f.write_str("<fn>"),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl From<BTreeMap<String, Value>> for Value {
    fn from(map: BTreeMap<String, Value>) -> Self {
        Value::Object(map)
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => {
                Value::Object(map.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn object(entries: &[(&str, Value)]) -> Value {
        Value::Object(
            entries
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect(),
        )
    }

    #[test]
    fn every_variant_resolves_to_its_own_tag() {
        assert_eq!(Value::Undefined.tag(), TypeTag::Undefined);
        assert_eq!(Value::Null.tag(), TypeTag::Null);
        assert_eq!(Value::Bool(true).tag(), TypeTag::Boolean);
        assert_eq!(Value::Number(1.5).tag(), TypeTag::Number);
        assert_eq!(Value::from("x").tag(), TypeTag::String);
        assert_eq!(Value::Array(vec![]).tag(), TypeTag::Array);
        assert_eq!(object(&[]).tag(), TypeTag::Object);
        assert_eq!(Value::function(|_| Value::Null).tag(), TypeTag::Function);
    }

    #[test]
    fn null_and_array_do_not_resolve_to_object() {
        assert_ne!(Value::Null.tag(), TypeTag::Object);
        assert_ne!(Value::Array(vec![Value::Number(1.0)]).tag(), TypeTag::Object);
    }

    #[test]
    fn truthiness_follows_host_rules() {
        assert!(!Value::Undefined.is_truthy());
        assert!(!Value::Null.is_truthy());
        assert!(!Value::Bool(false).is_truthy());
        assert!(!Value::Number(0.0).is_truthy());
        assert!(!Value::Number(f64::NAN).is_truthy());
        assert!(!Value::from("").is_truthy());

        assert!(Value::Bool(true).is_truthy());
        assert!(Value::Number(-1.0).is_truthy());
        assert!(Value::from("0").is_truthy());
        assert!(Value::Array(vec![]).is_truthy());
        assert!(object(&[]).is_truthy());
        assert!(Value::function(|_| Value::Null).is_truthy());
    }

    #[test]
    fn emptiness_covers_string_array_object_only() {
        assert!(Value::from("").is_empty());
        assert!(Value::Array(vec![]).is_empty());
        assert!(object(&[]).is_empty());

        assert!(!Value::from("a").is_empty());
        assert!(!Value::Array(vec![Value::Null]).is_empty());
        assert!(!object(&[("a", Value::Number(1.0))]).is_empty());
        assert!(!Value::Number(0.0).is_empty());
        assert!(!Value::Null.is_empty());
    }

    #[test]
    fn display_renders_substitution_forms() {
        assert_eq!(Value::from("plain").to_string(), "plain");
        assert_eq!(Value::Number(42.0).to_string(), "42");
        assert_eq!(Value::Number(1.5).to_string(), "1.5");
        assert_eq!(Value::Null.to_string(), "null");
        assert_eq!(Value::Undefined.to_string(), "undefined");
        assert_eq!(
            Value::Array(vec![Value::Number(1.0), Value::from("a")]).to_string(),
            "[1, a]"
        );
        assert_eq!(
            object(&[("k", Value::Bool(true))]).to_string(),
            "{k: true}"
        );
        assert_eq!(Value::function(|_| Value::Null).to_string(), "<fn>");
    }

    #[test]
    fn numeric_coercion() {
        assert_eq!(Value::Number(3.0).as_number(), Some(3.0));
        assert_eq!(Value::Bool(true).as_number(), Some(1.0));
        assert_eq!(Value::Null.as_number(), Some(0.0));
        assert_eq!(Value::from("  12.5 ").as_number(), Some(12.5));
        assert_eq!(Value::from("twelve").as_number(), None);
        assert_eq!(Value::Undefined.as_number(), None);
        assert_eq!(Value::Array(vec![]).as_number(), None);
    }

    #[test]
    fn json_boundary_round_trips_plain_data() {
        let json: serde_json::Value =
            serde_json::from_str(r#"{"a": [1, "two", null], "b": true}"#).unwrap();
        let value = Value::from(json.clone());

        assert_eq!(value.tag(), TypeTag::Object);
        assert_eq!(value.to_json(), json);
    }

    #[test]
    fn undefined_and_functions_have_no_json_form() {
        assert_eq!(Value::Undefined.to_json(), serde_json::Value::Null);
        assert_eq!(
            Value::function(|_| Value::Null).to_json(),
            serde_json::Value::Null
        );
    }

    #[test]
    fn native_fn_is_callable_and_compares_by_identity() {
        let double = NativeFn::new(|args| match args.first() {
            Some(Value::Number(n)) => Value::Number(n * 2.0),
            _ => Value::Undefined,
        });

        assert_eq!(double.call(&[Value::Number(4.0)]), Value::Number(8.0));

        let same = double.clone();
        let other = NativeFn::new(|_| Value::Null);
        assert_eq!(double, same);
        assert_ne!(double, other);
    }
}
