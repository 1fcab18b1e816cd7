//! Type introspection.
//!
//! This module provides the [`Property`] trait, which maps Rust types to their [`TypeTag`] and
//! converts their values to and from [`Value`], and the introspector producing the ordered
//! [`PropertyDescriptor`] list of a mapped type.
//!
//! # Organization
//!
//! The [`Property`] implementations are organized into logical categories:
//! - `primitives`: Basic Rust types (bool, integers, floats, strings)
//! - `collections`: Container types (Vec, BTreeMap, BTreeSet, etc.)
//! - `wrappers`: Transparent wrapper types (Box, Option)
//! - `special`: Special standard library types (paths, network addresses)
//! - `external`: Third-party crate integrations (uuid, chrono)

#![deny(missing_docs)]

mod cache;
mod descriptor;
pub use descriptor::PropertyDescriptor;

use crate::{
    schema::{Schema, TypeTag},
    Diagnostics, Error, Mapped, MappedObject, RawRepresentable, Result, Value,
};

/// A type that can be the type of a mapped property.
///
/// # Usage
///
/// Mapped structs and raw-value enums get this through the `Mapped` and `MappedEnum` derive
/// macros. Implementing it by hand lets any other type be used as a property:
///
/// ```rust
/// use objmap_core::{schema::TypeTag, Diagnostics, Error, Property, Result, Value};
///
/// struct Celsius(f64);
///
/// impl Property for Celsius {
///     const TYPE: &'static TypeTag = &TypeTag::Float;
///
///     fn to_value(&self) -> Value {
///         Value::Float(self.0)
///     }
///
///     fn from_value(value: &Value, _: &mut Diagnostics) -> Result<Self> {
///         value
///             .as_f64()
///             .map(Celsius)
///             .ok_or_else(|| Error::invalid_value(Self::TYPE, value))
///     }
/// }
///
/// let mut diagnostics = Diagnostics::new();
/// let celsius = Celsius::from_value(&Value::Int(21), &mut diagnostics).unwrap();
/// assert_eq!(celsius.to_value(), Value::Float(21.0));
/// ```
pub trait Property: Sized {
    /// The type information.
    const TYPE: &'static TypeTag;

    /// The value of `self` as seen through the accessor.
    fn to_value(&self) -> Value;

    /// Converts `value` back, reporting issues inside nested objects to `diagnostics`.
    fn from_value(value: &Value, diagnostics: &mut Diagnostics) -> Result<Self>;
}

/// The mapped properties of `T`.
///
/// Inherited properties come first, starting from the root ancestor, followed by the
/// properties declared on `T` in declaration order. A declared property shadows an inherited
/// one of the same name in place. The property mapping override of each type is applied to
/// the list built so far. The result is computed once per type and cached for the lifetime of
/// the process.
pub fn introspect<T: Mapped>() -> &'static [PropertyDescriptor] {
    introspect_schema(T::SCHEMA)
}

/// The mapped properties of the type described by `schema`.
pub fn introspect_schema(schema: &'static Schema) -> &'static [PropertyDescriptor] {
    cache::properties(schema)
}

/// The mapped properties of `object`'s type.
pub fn properties(object: &dyn MappedObject) -> &'static [PropertyDescriptor] {
    introspect_schema(object.schema())
}

/// The accessor value of a raw-value enum case.
pub fn enum_to_value<E: RawRepresentable>(value: &E) -> Value {
    Value::Enum(crate::value::EnumValue::new(
        E::NAME,
        value.case_name(),
        value.raw_value(),
    ))
}

/// Converts an enum value or a plain raw value to the enum case with that raw value.
pub fn enum_from_value<E: RawRepresentable>(value: &Value) -> Result<E> {
    let raw = match value {
        Value::Null | Value::Array(_) | Value::Map(_) | Value::Object(_) => {
            return Err(Error::InvalidValue {
                expected: E::NAME.into(),
                found: value.kind(),
            })
        }
        value => crate::value::RawValue::from_value(value),
    };

    match E::from_raw_value(&raw) {
        Some(case) => Ok(case),
        None => Err(Error::UnmatchedRawValue {
            enum_name: E::NAME,
            raw,
        }),
    }
}

// Implementation modules.
mod collections;
mod external;
mod primitives;
mod special;
mod wrappers;
