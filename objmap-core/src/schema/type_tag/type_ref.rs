use super::TypeTag;
use core::{fmt, ops::Deref};

/// A reference to the inner tag of a composite [`TypeTag`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeRef(&'static TypeTag);

impl TypeRef {
    /// Creates a new type reference.
    pub const fn new(inner: &'static TypeTag) -> Self {
        Self(inner)
    }

    /// Returns a reference to the inner type.
    pub fn inner(&self) -> &'static TypeTag {
        self.0
    }
}

impl Deref for TypeRef {
    type Target = TypeTag;

    fn deref(&self) -> &Self::Target {
        self.0
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl PartialEq<TypeTag> for TypeRef {
    fn eq(&self, other: &TypeTag) -> bool {
        self.0 == other
    }
}
