use core::fmt;

use crate::schema::TypeTag;

/// A mapped property as produced by the introspector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyDescriptor {
    name: &'static str,
    key: &'static str,
    ty: &'static TypeTag,
}

impl PropertyDescriptor {
    pub(crate) fn new(name: &'static str, ty: &'static TypeTag) -> Self {
        Self { name, key: name, ty }
    }

    pub(crate) fn set_key(&mut self, key: &'static str) {
        self.key = key;
    }

    /// The property name, as used by the accessor.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The external key the property is persisted under.
    pub fn key(&self) -> &'static str {
        self.key
    }

    /// The declared type.
    pub fn ty(&self) -> &'static TypeTag {
        self.ty
    }

    /// Whether the declared type is optional.
    pub fn is_optional(&self) -> bool {
        self.ty.is_optional()
    }
}

impl fmt::Display for PropertyDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.key == self.name {
            write!(f, "{}: {}", self.name, self.ty)
        } else {
            write!(f, "{} ({}): {}", self.name, self.key, self.ty)
        }
    }
}
