//! Per-type memoization of introspection results.

use core::any::TypeId;

use dashmap::{mapref::entry::Entry, DashMap};
use once_cell::sync::Lazy;

use super::PropertyDescriptor;
use crate::schema::Schema;

static PROPERTIES: Lazy<DashMap<TypeId, &'static [PropertyDescriptor]>> = Lazy::new(DashMap::new);

/// The cached property list of `schema`'s type, building it on first access.
///
/// The list is built without holding a map lock since building recurses into the base
/// schema. Concurrent first accesses may both build it; the first insert wins and everyone
/// gets that slice.
pub(super) fn properties(schema: &'static Schema) -> &'static [PropertyDescriptor] {
    let type_id = schema.type_id();
    if let Some(properties) = PROPERTIES.get(&type_id) {
        return *properties;
    }

    let built = build(schema);
    match PROPERTIES.entry(type_id) {
        Entry::Occupied(entry) => *entry.get(),
        Entry::Vacant(entry) => {
            trace!(
                "Introspected {} properties of `{}`",
                built.len(),
                schema.name()
            );
            *entry.insert(Vec::leak(built))
        }
    }
}

fn build(schema: &'static Schema) -> Vec<PropertyDescriptor> {
    let mut list = match schema.base() {
        Some(base) => properties(base).to_vec(),
        None => Vec::new(),
    };

    for field in schema.fields() {
        let descriptor = PropertyDescriptor::new(field.name(), field.ty());
        match list.iter_mut().find(|d| d.name() == field.name()) {
            Some(inherited) => *inherited = descriptor,
            None => list.push(descriptor),
        }
    }

    for mapping in schema.mapping() {
        match (mapping.property(), mapping.key()) {
            (Some(property), Some(key)) => {
                match list.iter_mut().find(|d| d.name() == property) {
                    Some(descriptor) => descriptor.set_key(key),
                    None => debug!(
                        "`{}` maps unknown property `{}` to `{}`",
                        schema.name(),
                        property,
                        key
                    ),
                }
            }
            (Some(property), None) => list.retain(|d| d.name() != property),
            // Ignored keys only matter when a dictionary is applied.
            (None, _) => (),
        }
    }

    // Each external key must address a single property; the first one keeps it.
    let mut index = 0;
    while index < list.len() {
        let (name, key) = (list[index].name(), list[index].key());
        match list[..index].iter().find(|d| d.key() == key).map(|d| d.name()) {
            Some(kept) => {
                warn!(
                    "`{}` maps both `{}` and `{}` to key `{}`, dropping `{}`",
                    schema.name(),
                    kept,
                    name,
                    key,
                    name
                );
                list.remove(index);
            }
            None => index += 1,
        }
    }

    list
}
