//! The mapping contract implemented by user types.

use crate::{
    schema::{KeyMapping, Schema},
    value::RawValue,
    Diagnostics, Result, Value,
};

/// An object whose properties can be enumerated and accessed by name.
///
/// This is the dynamic half of the mapping contract: the engine's free functions
/// ([`crate::equals`], [`crate::hash`], [`crate::describe`], [`crate::encode`], ...) operate on
/// `&dyn MappedObject`. Use the `Mapped` derive macro rather than implementing it by hand.
pub trait MappedObject {
    /// The schema of the object's type.
    fn schema(&self) -> &'static Schema;

    /// The value of the property `key`, or `None` if there is no such property.
    fn value_for_key(&self, key: &str) -> Option<Value>;

    /// Assigns `value` to the property `key`.
    ///
    /// Fails with [`crate::Error::UndefinedKey`] if there is no such property or the property
    /// cannot accept the value, and with [`crate::Error::UnmatchedRawValue`] if an enum property
    /// receives a raw value none of its cases has. The property is left unchanged on failure.
    /// Issues hit inside nested objects go to `diagnostics`.
    fn set_value_for_key(
        &mut self,
        key: &str,
        value: &Value,
        diagnostics: &mut Diagnostics,
    ) -> Result<()>;

    /// The undefined-key hook, if the type provides one.
    fn key_value_coding(&mut self) -> Option<&mut dyn GenericKeyValueCoding> {
        None
    }

    /// The property mapping override of the object's type.
    fn property_mapping(&self) -> &'static [KeyMapping] {
        self.schema().mapping()
    }
}

/// The static half of the mapping contract.
///
/// The `Default` bound is the zero-argument constructor the decoder uses to instantiate types
/// it only knows through their schema.
pub trait Mapped: MappedObject + Default {
    /// The schema of the type.
    const SCHEMA: &'static Schema;
}

/// Custom assignment for properties the generic accessor cannot set.
///
/// Enabled on a derived type with `#[objmap(key_value_coding)]`. The accessor calls
/// [`GenericKeyValueCoding::set_value_for_undefined_key`] whenever a key is unknown or its
/// value cannot be converted to the property's type, e.g. when a JSON document carries a
/// number as a string.
pub trait GenericKeyValueCoding {
    /// Assigns `value` to `key`, or fails if the type cannot handle it either.
    fn set_value_for_undefined_key(&mut self, key: &str, value: Value) -> Result<()>;
}

/// An enum whose cases are backed by raw values.
///
/// Use the `MappedEnum` derive macro to implement this.
pub trait RawRepresentable: Sized {
    /// The name of the enum type.
    const NAME: &'static str;

    /// The raw value of this case.
    fn raw_value(&self) -> RawValue;

    /// The case whose raw value is `raw`.
    fn from_raw_value(raw: &RawValue) -> Option<Self>;

    /// The name of this case.
    fn case_name(&self) -> &'static str;
}
