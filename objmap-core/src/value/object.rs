use core::any::TypeId;

use super::Value;
use crate::{introspect, schema::Schema, MappedObject, PropertyDescriptor};

/// A snapshot of a mapped object's properties.
///
/// Holds every mapped property's value, in introspection order, together with the object's
/// schema so two snapshots can be checked for type identity.
#[derive(Debug, Clone)]
pub struct Object {
    schema: &'static Schema,
    properties: Vec<(&'static PropertyDescriptor, Value)>,
}

impl Object {
    /// Takes a snapshot of `object`.
    ///
    /// A property the accessor cannot read is captured as [`Value::Null`].
    pub fn snapshot(object: &dyn MappedObject) -> Self {
        let schema = object.schema();
        let properties = introspect::introspect_schema(schema)
            .iter()
            .map(|descriptor| {
                let value = object.value_for_key(descriptor.name()).unwrap_or_default();
                (descriptor, value)
            })
            .collect();

        Self { schema, properties }
    }

    /// The schema of the captured object.
    pub fn schema(&self) -> &'static Schema {
        self.schema
    }

    /// The name of the captured object's type.
    pub fn type_name(&self) -> &'static str {
        self.schema.name()
    }

    /// The identity of the captured object's type.
    pub fn type_id(&self) -> TypeId {
        self.schema.type_id()
    }

    /// The captured properties, in introspection order.
    pub fn properties(
        &self,
    ) -> impl ExactSizeIterator<Item = (&'static PropertyDescriptor, &Value)> {
        self.properties
            .iter()
            .map(|(descriptor, value)| (*descriptor, value))
    }

    /// The captured value of the property `name`.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.properties
            .iter()
            .find(|(descriptor, _)| descriptor.name() == name)
            .map(|(_, value)| value)
    }

    /// The number of captured properties.
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Whether the object has no mapped properties.
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Consumes the snapshot, returning the captured properties.
    pub fn into_properties(
        self,
    ) -> impl ExactSizeIterator<Item = (&'static PropertyDescriptor, Value)> {
        self.properties.into_iter()
    }
}

impl PartialEq for Object {
    fn eq(&self, other: &Self) -> bool {
        self.type_id() == other.type_id()
            && self.properties.len() == other.properties.len()
            && self
                .properties
                .iter()
                .zip(&other.properties)
                .all(|((a, a_value), (b, b_value))| a.name() == b.name() && a_value == b_value)
    }
}

impl Eq for Object {}
