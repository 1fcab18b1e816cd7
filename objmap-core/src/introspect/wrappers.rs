//! Property implementations for wrapper types.

use super::Property;
use crate::{
    schema::{TypeRef, TypeTag},
    Diagnostics, Result, Value,
};

// ============================================================================
// Optional type
// ============================================================================

impl<T: Property> Property for Option<T> {
    const TYPE: &'static TypeTag = &TypeTag::Optional(TypeRef::new(T::TYPE));

    fn to_value(&self) -> Value {
        match self {
            Some(value) => value.to_value(),
            None => Value::Null,
        }
    }

    fn from_value(value: &Value, diagnostics: &mut Diagnostics) -> Result<Self> {
        match value {
            Value::Null => Ok(None),
            value => T::from_value(value, diagnostics).map(Some),
        }
    }
}

// ============================================================================
// Smart pointer types - transparent wrappers
// ============================================================================

impl<T: Property> Property for Box<T> {
    const TYPE: &'static TypeTag = T::TYPE;

    fn to_value(&self) -> Value {
        T::to_value(self)
    }

    fn from_value(value: &Value, diagnostics: &mut Diagnostics) -> Result<Self> {
        T::from_value(value, diagnostics).map(Box::new)
    }
}
