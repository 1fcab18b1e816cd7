//! Structural equality and hashing of mapped objects.

use core::hash::{Hash, Hasher};

use rustc_hash::FxHasher;

use crate::{
    introspect,
    value::{Object, RawValue},
    MappedObject, Value,
};

/// The initial accumulator of [`hash`].
pub const HASH_SEED: u64 = 17;
const HASH_FACTOR: u64 = 31;

/// Whether `a` and `b` are of the same type and all their mapped properties are equal.
///
/// Properties are compared in introspection order and the comparison stops at the first
/// difference. Objects of different types are never equal.
pub fn equals(a: &dyn MappedObject, b: &dyn MappedObject) -> bool {
    let schema = a.schema();
    if schema.type_id() != b.schema().type_id() {
        return false;
    }

    introspect::introspect_schema(schema)
        .iter()
        .all(|descriptor| a.value_for_key(descriptor.name()) == b.value_for_key(descriptor.name()))
}

/// A hash of all mapped properties of `object`, consistent with [`equals`].
///
/// Starting from [`HASH_SEED`], the hash of every property value is folded in introspection
/// order as `acc * 31 + hash`, wrapping on overflow. The result does not depend on the process
/// or the platform.
pub fn hash(object: &dyn MappedObject) -> u64 {
    introspect::properties(object)
        .iter()
        .fold(HASH_SEED, |acc, descriptor| {
            let value = object.value_for_key(descriptor.name()).unwrap_or_default();
            combine(acc, hash_value(&value))
        })
}

/// The hash of a single value, consistent with `Value`'s equality.
pub fn hash_value(value: &Value) -> u64 {
    match value {
        Value::Null => 0,
        Value::Bool(true) => 1231,
        Value::Bool(false) => 1237,
        // Equal integers share their bits across both variants.
        Value::Int(i) => *i as u64,
        Value::UInt(u) => *u,
        Value::Float(f) => hash_float(*f),
        Value::String(s) => hash_str(s),
        Value::Array(items) => items
            .iter()
            .fold(HASH_SEED, |acc, item| combine(acc, hash_value(item))),
        Value::Map(map) => map.iter().fold(HASH_SEED, |acc, (key, value)| {
            combine(combine(acc, hash_str(key)), hash_value(value))
        }),
        Value::Enum(e) => hash_raw(e.raw()),
        Value::Object(object) => hash_object(object),
    }
}

fn hash_object(object: &Object) -> u64 {
    object
        .properties()
        .fold(HASH_SEED, |acc, (_, value)| combine(acc, hash_value(value)))
}

fn hash_raw(raw: &RawValue) -> u64 {
    match raw {
        RawValue::Int(i) => *i as u64,
        RawValue::String(s) => hash_str(s),
        RawValue::Other(value) => hash_value(value),
    }
}

fn hash_str(s: &str) -> u64 {
    let mut hasher = FxHasher::default();
    s.hash(&mut hasher);
    hasher.finish()
}

fn hash_float(f: f64) -> u64 {
    // Values equal under `float_eq` must share their bits.
    if f == 0.0 {
        0
    } else if f.is_nan() {
        f64::NAN.to_bits()
    } else {
        f.to_bits()
    }
}

fn combine(acc: u64, hash: u64) -> u64 {
    acc.wrapping_mul(HASH_FACTOR).wrapping_add(hash)
}
