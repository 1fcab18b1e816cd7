//! Dynamic values.
//!
//! [`Value`] is the currency of the accessor: reading a property yields one, assigning a
//! property takes one. Transports only ever store *plain* values, that is values without the
//! [`Value::Enum`] and [`Value::Object`] variants (see [`Value::into_plain`]).

mod json;
mod object;
pub use object::Object;
mod raw;
pub use raw::{EnumValue, RawValue};
mod serialize;

use std::collections::BTreeMap;

/// A dynamically typed property value.
#[derive(Debug, Clone, Default)]
pub enum Value {
    /// Absent value (`None`).
    #[default]
    Null,
    /// Boolean.
    Bool(bool),
    /// Signed integer.
    Int(i64),
    /// Unsigned integer beyond the range of [`Value::Int`].
    ///
    /// Integers that fit an `i64` are always [`Value::Int`], equality and hashing treat both
    /// variants as one number line.
    UInt(u64),
    /// Floating point number.
    Float(f64),
    /// UTF-8 string.
    String(String),
    /// Ordered elements.
    Array(Vec<Value>),
    /// String keyed entries.
    Map(BTreeMap<String, Value>),
    /// An enum case with its raw value.
    Enum(EnumValue),
    /// A snapshot of a nested mapped object.
    Object(Object),
}

impl Value {
    /// A short name of the value's kind, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) | Value::UInt(_) => "int",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Map(_) => "map",
            Value::Enum(_) => "enum",
            Value::Object(_) => "object",
        }
    }

    /// Whether this is [`Value::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// The boolean, if this is one.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// The integer, if this is one.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// The integer, if this is a non-negative one.
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Value::Int(i) => u64::try_from(*i).ok(),
            Value::UInt(u) => Some(*u),
            _ => None,
        }
    }

    /// The number as a float, if this is an integer or a float.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(i) => Some(*i as f64),
            Value::UInt(u) => Some(*u as f64),
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// The string, if this is one.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// The elements, if this is an array.
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    /// The entries, if this is a map.
    pub fn as_map(&self) -> Option<&BTreeMap<String, Value>> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    /// The object snapshot, if this is one.
    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(object) => Some(object),
            _ => None,
        }
    }

    /// Whether the value (recursively) contains no enum or object.
    pub fn is_plain(&self) -> bool {
        match self {
            Value::Enum(_) | Value::Object(_) => false,
            Value::Array(items) => items.iter().all(Value::is_plain),
            Value::Map(map) => map.values().all(Value::is_plain),
            _ => true,
        }
    }

    /// Converts into the plain form stored by transports.
    ///
    /// Enums become their raw value and objects become maps keyed by the external key of each
    /// property. `Null` elements of arrays are kept, so positions survive.
    pub fn into_plain(self) -> Value {
        match self {
            Value::Enum(value) => value.into_raw().into_value(),
            Value::Object(object) => Value::Map(
                object
                    .into_properties()
                    .map(|(descriptor, value)| (descriptor.key().to_owned(), value.into_plain()))
                    .collect(),
            ),
            Value::Array(items) => Value::Array(items.into_iter().map(Value::into_plain).collect()),
            Value::Map(map) => Value::Map(
                map.into_iter()
                    .map(|(key, value)| (key, value.into_plain()))
                    .collect(),
            ),
            plain => plain,
        }
    }
}

/// Float equality under which every value equals itself.
pub(crate) fn float_eq(a: f64, b: f64) -> bool {
    a == b || (a.is_nan() && b.is_nan())
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::UInt(a), Value::UInt(b)) => a == b,
            (Value::Int(i), Value::UInt(u)) | (Value::UInt(u), Value::Int(i)) => {
                u64::try_from(*i).is_ok_and(|i| i == *u)
            }
            (Value::Float(a), Value::Float(b)) => float_eq(*a, *b),
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::Map(a), Value::Map(b)) => a == b,
            (Value::Enum(a), Value::Enum(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i.into())
    }
}

impl From<u64> for Value {
    fn from(u: u64) -> Self {
        i64::try_from(u).map_or(Value::UInt(u), Value::Int)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl From<BTreeMap<String, Value>> for Value {
    fn from(map: BTreeMap<String, Value>) -> Self {
        Value::Map(map)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn float_equality_is_reflexive() {
        assert_eq!(Value::Float(f64::NAN), Value::Float(f64::NAN));
        assert_eq!(Value::Float(0.0), Value::Float(-0.0));
        assert_ne!(Value::Float(1.0), Value::Int(1));
    }

    #[test]
    fn nested_equality() {
        let a = Value::Array(vec![Value::Int(1), Value::Null, Value::from("x")]);
        let b = Value::Array(vec![Value::Int(1), Value::Null, Value::from("x")]);
        let c = Value::Array(vec![Value::Int(1), Value::from("x"), Value::Null]);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn into_plain_unboxes_enums() {
        let value = Value::Array(vec![
            Value::Enum(EnumValue::new("Status", "Active", RawValue::Int(1))),
            Value::Null,
        ]);
        assert!(!value.is_plain());

        let plain = value.into_plain();
        assert!(plain.is_plain());
        assert_eq!(plain, Value::Array(vec![Value::Int(1), Value::Null]));
    }

    #[test]
    fn accessors() {
        assert_eq!(Value::Int(3).as_f64(), Some(3.0));
        assert_eq!(Value::Float(2.5).as_i64(), None);
        assert_eq!(Value::from("a").as_str(), Some("a"));
        assert_eq!(Value::from(Some(true)), Value::Bool(true));
        assert_eq!(Value::from(None::<bool>), Value::Null);
        assert_eq!(Value::Null.kind(), "null");
    }

    #[test]
    fn unsigned_integers() {
        assert_eq!(Value::from(7u64), Value::Int(7));
        assert_eq!(Value::from(u64::MAX), Value::UInt(u64::MAX));
        assert_eq!(Value::UInt(7), Value::Int(7));
        assert_ne!(Value::UInt(u64::MAX), Value::Int(-1));
        assert_ne!(Value::UInt(1 << 63), Value::UInt((1 << 63) + 1));
        assert_eq!(Value::UInt(u64::MAX).as_u64(), Some(u64::MAX));
        assert_eq!(Value::Int(-1).as_u64(), None);
        assert_eq!(Value::UInt(u64::MAX).as_i64(), None);
    }
}
