//! Declared fields of a mapped type.

use core::fmt;

use super::TypeTag;

/// A field declared directly on a mapped type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// The name of the field.
    name: &'static str,
    /// The type of the field.
    ty: &'static TypeTag,
}

impl Field {
    /// Creates a new field with the given name and type.
    pub const fn new(name: &'static str, ty: &'static TypeTag) -> Self {
        Self { name, ty }
    }

    /// Returns the name of the field.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the type of the field.
    pub fn ty(&self) -> &'static TypeTag {
        self.ty
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.ty)
    }
}
