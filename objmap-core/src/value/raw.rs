//! Raw values backing enum cases.

use core::fmt;

use super::Value;

/// The raw value backing an enum case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawValue {
    /// Integer raw value.
    Int(i64),
    /// String raw value.
    String(String),
    /// Raw value of any other kind (e.g. a float or a bool).
    Other(Box<Value>),
}

impl RawValue {
    /// The raw value a plain value stands for.
    ///
    /// An enum value yields its own raw value.
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Int(i) => RawValue::Int(*i),
            Value::String(s) => RawValue::String(s.clone()),
            Value::Enum(value) => value.raw().clone(),
            other => RawValue::Other(Box::new(other.clone())),
        }
    }

    /// Converts into the plain value written by transports.
    pub fn into_value(self) -> Value {
        match self {
            RawValue::Int(i) => Value::Int(i),
            RawValue::String(s) => Value::String(s),
            RawValue::Other(value) => value.into_plain(),
        }
    }

    /// The float raw value an integer stands for, `None` if this is not an integer.
    ///
    /// Transports do not tell `1` and `1.0` apart, so enums backed by floats look their cases
    /// up with the widened value.
    pub fn widen_to_float(&self) -> Option<Self> {
        let float = match self {
            RawValue::Int(i) => *i as f64,
            RawValue::Other(value) => match **value {
                Value::Int(i) => i as f64,
                Value::UInt(u) => u as f64,
                _ => return None,
            },
            RawValue::String(_) => return None,
        };

        Some(RawValue::Other(Box::new(Value::Float(float))))
    }
}

impl From<i64> for RawValue {
    fn from(i: i64) -> Self {
        RawValue::Int(i)
    }
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self {
        RawValue::String(s.to_owned())
    }
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawValue::Int(i) => write!(f, "{i}"),
            RawValue::String(s) => write!(f, "{s:?}"),
            RawValue::Other(value) => write!(f, "{value}"),
        }
    }
}

/// An enum case as seen through the accessor.
#[derive(Debug, Clone)]
pub struct EnumValue {
    enum_name: &'static str,
    case: &'static str,
    raw: RawValue,
}

impl EnumValue {
    /// Creates a new enum value.
    pub fn new(enum_name: &'static str, case: &'static str, raw: RawValue) -> Self {
        Self {
            enum_name,
            case,
            raw,
        }
    }

    /// The name of the enum type.
    pub fn enum_name(&self) -> &'static str {
        self.enum_name
    }

    /// The name of the case.
    pub fn case(&self) -> &'static str {
        self.case
    }

    /// The raw value of the case.
    pub fn raw(&self) -> &RawValue {
        &self.raw
    }

    /// Consumes the value, returning the raw value.
    pub fn into_raw(self) -> RawValue {
        self.raw
    }
}

impl PartialEq for EnumValue {
    fn eq(&self, other: &Self) -> bool {
        self.enum_name == other.enum_name && self.raw == other.raw
    }
}

impl Eq for EnumValue {}
