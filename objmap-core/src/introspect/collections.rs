//! Property implementations for collection types.
//!
//! Collections convert element-wise; if any element fails to convert, the whole collection
//! does.

use std::collections::{BTreeMap, BTreeSet, HashMap, VecDeque};

use super::Property;
use crate::{
    schema::{TypeRef, TypeTag},
    Diagnostics, Error, Result, Value,
};

fn elements<T, C>(value: &Value, ty: &'static TypeTag, diagnostics: &mut Diagnostics) -> Result<C>
where
    T: Property,
    C: FromIterator<T>,
{
    match value {
        Value::Array(items) => items
            .iter()
            .map(|item| T::from_value(item, diagnostics))
            .collect(),
        _ => Err(Error::invalid_value(ty, value)),
    }
}

fn entries<V, C>(value: &Value, ty: &'static TypeTag, diagnostics: &mut Diagnostics) -> Result<C>
where
    V: Property,
    C: FromIterator<(String, V)>,
{
    match value {
        Value::Map(map) => map
            .iter()
            .map(|(key, value)| V::from_value(value, diagnostics).map(|value| (key.clone(), value)))
            .collect(),
        _ => Err(Error::invalid_value(ty, value)),
    }
}

// ============================================================================
// Array types
// ============================================================================

impl<T: Property> Property for Vec<T> {
    const TYPE: &'static TypeTag = &TypeTag::Array(TypeRef::new(T::TYPE));

    fn to_value(&self) -> Value {
        Value::Array(self.iter().map(T::to_value).collect())
    }

    fn from_value(value: &Value, diagnostics: &mut Diagnostics) -> Result<Self> {
        elements::<T, _>(value, Self::TYPE, diagnostics)
    }
}

impl<T: Property> Property for VecDeque<T> {
    const TYPE: &'static TypeTag = &TypeTag::Array(TypeRef::new(T::TYPE));

    fn to_value(&self) -> Value {
        Value::Array(self.iter().map(T::to_value).collect())
    }

    fn from_value(value: &Value, diagnostics: &mut Diagnostics) -> Result<Self> {
        elements::<T, _>(value, Self::TYPE, diagnostics)
    }
}

// ============================================================================
// Set types - represented as arrays. Only ordered sets are supported so that equal sets
// produce equal arrays.
// ============================================================================

impl<T: Property + Ord> Property for BTreeSet<T> {
    const TYPE: &'static TypeTag = &TypeTag::Array(TypeRef::new(T::TYPE));

    fn to_value(&self) -> Value {
        Value::Array(self.iter().map(T::to_value).collect())
    }

    fn from_value(value: &Value, diagnostics: &mut Diagnostics) -> Result<Self> {
        elements::<T, _>(value, Self::TYPE, diagnostics)
    }
}

// ============================================================================
// Map types - string keys only
// ============================================================================

impl<V: Property> Property for BTreeMap<String, V> {
    const TYPE: &'static TypeTag = &TypeTag::Map(TypeRef::new(V::TYPE));

    fn to_value(&self) -> Value {
        Value::Map(
            self.iter()
                .map(|(key, value)| (key.clone(), value.to_value()))
                .collect(),
        )
    }

    fn from_value(value: &Value, diagnostics: &mut Diagnostics) -> Result<Self> {
        entries::<V, _>(value, Self::TYPE, diagnostics)
    }
}

impl<V: Property, S> Property for HashMap<String, V, S>
where
    S: core::hash::BuildHasher + Default,
{
    const TYPE: &'static TypeTag = &TypeTag::Map(TypeRef::new(V::TYPE));

    fn to_value(&self) -> Value {
        // The value map is ordered, so iteration order of the hash map does not leak out.
        Value::Map(
            self.iter()
                .map(|(key, value)| (key.clone(), value.to_value()))
                .collect(),
        )
    }

    fn from_value(value: &Value, diagnostics: &mut Diagnostics) -> Result<Self> {
        entries::<V, _>(value, Self::TYPE, diagnostics)
    }
}
