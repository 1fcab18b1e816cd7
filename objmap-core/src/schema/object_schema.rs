//! Schemas of mapped types.

use core::{any::TypeId, fmt};

use super::{Field, KeyMapping};

/// The static description of a mapped type.
///
/// A schema lists the fields declared directly on the type, in declaration order. Inherited
/// properties come from the optional base schema, which plays the role of the ancestor type;
/// a schema without a base is a root.
///
/// # Examples
///
/// ```rust
/// use core::any::TypeId;
/// use objmap_core::schema::{Field, KeyMapping, Schema, TypeTag};
///
/// struct Point;
///
/// static FIELD_X: Field = Field::new("x", &TypeTag::Float);
/// static FIELD_Y: Field = Field::new("y", &TypeTag::Float);
/// static FIELDS: &[&Field] = &[&FIELD_X, &FIELD_Y];
/// static MAPPING: &[KeyMapping] = &[KeyMapping::rename("x", "left")];
///
/// static POINT: Schema = Schema::new("Point", TypeId::of::<Point>, FIELDS).with_mapping(MAPPING);
///
/// assert_eq!(POINT.name(), "Point");
/// assert_eq!(POINT.fields().count(), 2);
/// assert_eq!(POINT.type_id(), TypeId::of::<Point>());
/// ```
pub struct Schema {
    name: &'static str,
    type_id: fn() -> TypeId,
    fields: &'static [&'static Field],
    base: Option<SchemaRef>,
    mapping: &'static [KeyMapping],
}

impl Schema {
    /// Creates a root schema with the given name, type identity and own fields.
    pub const fn new(
        name: &'static str,
        type_id: fn() -> TypeId,
        fields: &'static [&'static Field],
    ) -> Self {
        Self {
            name,
            type_id,
            fields,
            base: None,
            mapping: &[],
        }
    }

    /// Sets the schema the type inherits properties from.
    pub const fn with_base(self, base: SchemaRef) -> Self {
        Self {
            base: Some(base),
            ..self
        }
    }

    /// Sets the property mapping override.
    pub const fn with_mapping(self, mapping: &'static [KeyMapping]) -> Self {
        Self { mapping, ..self }
    }

    /// The type name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The identity of the described type.
    pub fn type_id(&self) -> TypeId {
        (self.type_id)()
    }

    /// The fields declared directly on the type.
    pub fn fields(&self) -> impl Iterator<Item = &'static Field> {
        let fields: &'static [&'static Field] = self.fields;
        fields.iter().copied()
    }

    /// The schema of the type's ancestor, if any.
    pub fn base(&self) -> Option<&'static Schema> {
        self.base.map(|base| base.get())
    }

    /// The property mapping override declared on this type.
    pub fn mapping(&self) -> &'static [KeyMapping] {
        self.mapping
    }

    /// Whether `key` is ignored by this type's or an ancestor's mapping override.
    pub fn ignores_key(&self, key: &str) -> bool {
        let ignored = self
            .mapping
            .iter()
            .any(|mapping| mapping.property().is_none() && mapping.key() == Some(key));

        ignored || self.base().is_some_and(|base| base.ignores_key(key))
    }
}

impl fmt::Debug for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Schema")
            .field("name", &self.name)
            .field("fields", &self.fields)
            .field("base", &self.base().map(Schema::name))
            .field("mapping", &self.mapping)
            .finish()
    }
}

/// A lazily resolved reference to a [`Schema`].
///
/// Type tags refer to nested object schemas through this indirection so that self-referential
/// types (a node holding a list of nodes) do not form a cycle in const evaluation.
#[derive(Clone, Copy)]
pub struct SchemaRef(fn() -> &'static Schema);

impl SchemaRef {
    /// Creates a reference resolved by calling `resolve`.
    pub const fn new(resolve: fn() -> &'static Schema) -> Self {
        Self(resolve)
    }

    /// A reference to the schema of `T`.
    pub const fn of<T: crate::Mapped>() -> Self {
        Self(schema_of::<T>)
    }

    /// Resolves the schema.
    pub fn get(&self) -> &'static Schema {
        (self.0)()
    }
}

fn schema_of<T: crate::Mapped>() -> &'static Schema {
    T::SCHEMA
}

impl PartialEq for SchemaRef {
    fn eq(&self, other: &Self) -> bool {
        self.get().type_id() == other.get().type_id()
    }
}

impl Eq for SchemaRef {}

impl fmt::Debug for SchemaRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SchemaRef").field(&self.get().name()).finish()
    }
}
