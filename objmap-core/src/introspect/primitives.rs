//! Property implementations for primitive types.

use super::Property;
use crate::{schema::TypeTag, Diagnostics, Error, Result, Value};

// Integer types - all map to a 64-bit signed integer, or an unsigned one beyond its range.
// Integral floats within range are accepted too.
macro_rules! impl_int_property {
    ($($ty:ty),*) => {
        $(
            impl Property for $ty {
                const TYPE: &'static TypeTag = &TypeTag::Int;

                fn to_value(&self) -> Value {
                    match i64::try_from(*self) {
                        Ok(i) => Value::Int(i),
                        // Only unsigned values exceed `i64`.
                        Err(_) => Value::UInt(*self as u64),
                    }
                }

                fn from_value(value: &Value, _: &mut Diagnostics) -> Result<Self> {
                    match value {
                        Value::Int(i) => {
                            <$ty>::try_from(*i).map_err(|_| Error::invalid_value(Self::TYPE, value))
                        }
                        Value::UInt(u) => {
                            <$ty>::try_from(*u).map_err(|_| Error::invalid_value(Self::TYPE, value))
                        }
                        Value::Float(f)
                            if f.fract() == 0.0
                                && *f >= <$ty>::MIN as f64
                                && *f <= <$ty>::MAX as f64 =>
                        {
                            Ok(*f as $ty)
                        }
                        _ => Err(Error::invalid_value(Self::TYPE, value)),
                    }
                }
            }
        )*
    };
}

impl_int_property!(i8, i16, i32, i64, isize);
impl_int_property!(u8, u16, u32, u64, usize);

impl Property for bool {
    const TYPE: &'static TypeTag = &TypeTag::Bool;

    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }

    fn from_value(value: &Value, _: &mut Diagnostics) -> Result<Self> {
        value
            .as_bool()
            .ok_or_else(|| Error::invalid_value(Self::TYPE, value))
    }
}

// Floating-point types accept integers too, since many transports do not tell `1` and `1.0`
// apart.
impl Property for f64 {
    const TYPE: &'static TypeTag = &TypeTag::Float;

    fn to_value(&self) -> Value {
        Value::Float(*self)
    }

    fn from_value(value: &Value, _: &mut Diagnostics) -> Result<Self> {
        value
            .as_f64()
            .ok_or_else(|| Error::invalid_value(Self::TYPE, value))
    }
}

impl Property for f32 {
    const TYPE: &'static TypeTag = &TypeTag::Float;

    fn to_value(&self) -> Value {
        Value::Float((*self).into())
    }

    fn from_value(value: &Value, _: &mut Diagnostics) -> Result<Self> {
        value
            .as_f64()
            .map(|f| f as f32)
            .ok_or_else(|| Error::invalid_value(Self::TYPE, value))
    }
}

impl Property for String {
    const TYPE: &'static TypeTag = &TypeTag::String;

    fn to_value(&self) -> Value {
        Value::String(self.clone())
    }

    fn from_value(value: &Value, _: &mut Diagnostics) -> Result<Self> {
        value
            .as_str()
            .map(str::to_owned)
            .ok_or_else(|| Error::invalid_value(Self::TYPE, value))
    }
}

impl Property for char {
    const TYPE: &'static TypeTag = &TypeTag::String;

    fn to_value(&self) -> Value {
        Value::String(self.to_string())
    }

    fn from_value(value: &Value, _: &mut Diagnostics) -> Result<Self> {
        let mut chars = value.as_str().unwrap_or_default().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(c),
            _ => Err(Error::invalid_value(Self::TYPE, value)),
        }
    }
}
