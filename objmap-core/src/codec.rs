//! Encoding mapped objects to a [`Transport`] and decoding them back.

use std::collections::BTreeMap;

use crate::{
    accessor, introspect,
    schema::{Schema, TypeTag},
    transport::Transport,
    value::Object,
    Diagnostics, Mapped, MappedObject, Value,
};

/// Writes every mapped property of `object` to `transport` under its external key.
///
/// Nested objects are written to a nested scope. Everything else is written as a plain value:
/// enums as their raw value, `None` as [`Value::Null`], and objects inside collections as maps
/// keyed by external keys.
pub fn encode<T: Transport>(object: &dyn MappedObject, transport: &mut T) {
    trace!("Encoding `{}`", object.schema().name());
    encode_snapshot(Object::snapshot(object), transport);
}

fn encode_snapshot<T: Transport>(object: Object, transport: &mut T) {
    for (descriptor, value) in object.into_properties() {
        match value {
            Value::Object(nested) => encode_snapshot(nested, transport.scope_mut(descriptor.key())),
            value => transport.write(descriptor.key(), value.into_plain()),
        }
    }
}

/// Creates a `T` from the content of `transport`.
///
/// Properties whose key is missing keep their default value. Values that cannot be assigned
/// are logged and skipped; use [`decode_with_diagnostics`] to inspect them.
pub fn decode<T: Mapped, S: Transport>(transport: &S) -> T {
    decode_with_diagnostics(transport).0
}

/// Like [`decode`], also returning the issues hit while decoding.
pub fn decode_with_diagnostics<T: Mapped, S: Transport>(transport: &S) -> (T, Diagnostics) {
    let mut object = T::default();
    let mut diagnostics = Diagnostics::new();
    decode_into(&mut object, transport, &mut diagnostics);

    (object, diagnostics)
}

/// Assigns every mapped property of `object` present in `transport`.
///
/// A nested object is read from its scope, decoded into a fresh instance of the property's
/// type and then assigned.
pub fn decode_into<S: Transport>(
    object: &mut dyn MappedObject,
    transport: &S,
    diagnostics: &mut Diagnostics,
) {
    trace!("Decoding `{}`", object.schema().name());
    for descriptor in introspect::properties(object) {
        let Some(value) = read_property(descriptor.ty(), descriptor.key(), transport) else {
            continue;
        };
        // Failures are already in the diagnostics.
        let _ = accessor::set(object, descriptor.name(), value, diagnostics);
    }
}

fn read_property<S: Transport>(ty: &TypeTag, key: &str, transport: &S) -> Option<Value> {
    let scope = ty
        .object_schema()
        .and_then(|schema| Some((schema, transport.scope(key)?)));
    match scope {
        Some((schema, scope)) => Some(Value::Map(read_scope(schema, scope))),
        None => transport.read(key),
    }
}

fn read_scope<S: Transport>(schema: &'static Schema, transport: &S) -> BTreeMap<String, Value> {
    introspect::introspect_schema(schema)
        .iter()
        .filter_map(|descriptor| {
            read_property(descriptor.ty(), descriptor.key(), transport)
                .map(|value| (descriptor.key().to_owned(), value))
        })
        .collect()
}
