//! Conversion of mapped objects to and from string-keyed maps and JSON.

use std::collections::BTreeMap;

use crate::{
    accessor, introspect, value::Object, Diagnostics, Error, Mapped, MappedObject, Result, Value,
};

/// The plain map of `object`'s mapped properties, keyed by external key.
pub fn to_map(object: &dyn MappedObject) -> BTreeMap<String, Value> {
    Object::snapshot(object)
        .into_properties()
        .map(|(descriptor, value)| (descriptor.key().to_owned(), value.into_plain()))
        .collect()
}

/// Creates a `T` from a map keyed by external keys.
///
/// Issues are logged and skipped; use [`from_map_with_diagnostics`] to inspect them.
pub fn from_map<T: Mapped>(map: &BTreeMap<String, Value>) -> T {
    from_map_with_diagnostics(map).0
}

/// Like [`from_map`], also returning the issues hit while applying the map.
pub fn from_map_with_diagnostics<T: Mapped>(map: &BTreeMap<String, Value>) -> (T, Diagnostics) {
    let mut object = T::default();
    let mut diagnostics = Diagnostics::new();
    apply_map(&mut object, map, &mut diagnostics);

    (object, diagnostics)
}

/// Assigns every entry of `map` to the property of `object` with that external key.
///
/// Keys ignored by the type's property mapping override are skipped silently. Other keys
/// without a matching property go to the undefined-key hook, or are reported to `diagnostics`
/// if the type has none.
pub fn apply_map(
    object: &mut dyn MappedObject,
    map: &BTreeMap<String, Value>,
    diagnostics: &mut Diagnostics,
) {
    let schema = object.schema();
    let properties = introspect::introspect_schema(schema);

    // Failures below are already in the diagnostics.
    for (key, value) in map {
        match properties.iter().find(|descriptor| descriptor.key() == key) {
            Some(descriptor) => {
                let _ = accessor::set(object, descriptor.name(), value.clone(), diagnostics);
            }
            None if schema.ignores_key(key) => {
                trace!("Ignoring key `{}` of `{}`", key, schema.name());
            }
            None => {
                let _ = accessor::set_undefined(object, key, value.clone(), diagnostics);
            }
        }
    }
}

/// The JSON object of `object`'s mapped properties, keyed by external key.
pub fn to_json(object: &dyn MappedObject) -> serde_json::Value {
    Value::Map(to_map(object)).into()
}

/// Serializes `object` to a JSON string.
pub fn to_json_string(object: &dyn MappedObject) -> Result<String> {
    serde_json::to_string(&to_json(object)).map_err(Into::into)
}

/// Serializes `object` to a pretty-printed JSON string.
pub fn to_json_string_pretty(object: &dyn MappedObject) -> Result<String> {
    serde_json::to_string_pretty(&to_json(object)).map_err(Into::into)
}

/// Creates a `T` from a JSON object document.
///
/// Fails only if `json` is malformed or not an object. Keys that cannot be assigned are
/// handled as in [`apply_map`].
pub fn from_json_str<T: Mapped>(json: &str) -> Result<T> {
    from_json_str_with_diagnostics(json).map(|(object, _)| object)
}

/// Like [`from_json_str`], also returning the issues hit while applying the document.
pub fn from_json_str_with_diagnostics<T: Mapped>(json: &str) -> Result<(T, Diagnostics)> {
    let document: serde_json::Value = serde_json::from_str(json)?;
    match Value::from(document) {
        Value::Map(map) => Ok(from_map_with_diagnostics(&map)),
        other => Err(Error::InvalidValue {
            expected: T::SCHEMA.name().into(),
            found: other.kind(),
        }),
    }
}
