//! Type tags of mapped properties.

mod type_ref;
pub use type_ref::TypeRef;

use core::fmt;

use super::{Schema, SchemaRef};

/// The declared type of a mapped property.
///
/// The tag drives which compare, hash, describe, encode and decode rule the engine applies to
/// the property's value.
#[derive(Debug, Clone, Copy)]
pub enum TypeTag {
    /// Boolean type.
    Bool,
    /// 64-bit signed integer.
    Int,
    /// 64-bit floating point.
    Float,
    /// UTF-8 string.
    String,
    /// Enum backed by integer raw values.
    IntEnum(&'static str),
    /// Enum backed by string raw values.
    StringEnum(&'static str),
    /// Enum backed by raw values of any other kind.
    RawEnum(&'static str),
    /// Nested mapped object.
    Object(SchemaRef),
    /// Array type.
    Array(TypeRef),
    /// Optional/nullable type.
    Optional(TypeRef),
    /// Map type with string keys.
    Map(TypeRef),
}

impl TypeTag {
    /// Whether the property may be absent.
    pub fn is_optional(&self) -> bool {
        matches!(self, TypeTag::Optional(_))
    }

    /// Whether this is one of the primitive tags.
    pub fn is_primitive(&self) -> bool {
        matches!(
            self,
            TypeTag::Bool | TypeTag::Int | TypeTag::Float | TypeTag::String
        )
    }

    /// Whether this is one of the enum tags.
    pub fn is_enum(&self) -> bool {
        matches!(
            self,
            TypeTag::IntEnum(_) | TypeTag::StringEnum(_) | TypeTag::RawEnum(_)
        )
    }

    /// The schema of the nested object, looking through optionals.
    pub fn object_schema(&self) -> Option<&'static Schema> {
        match self {
            TypeTag::Object(schema) => Some(schema.get()),
            TypeTag::Optional(inner) => inner.object_schema(),
            _ => None,
        }
    }
}

impl PartialEq for TypeTag {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (TypeTag::Bool, TypeTag::Bool)
            | (TypeTag::Int, TypeTag::Int)
            | (TypeTag::Float, TypeTag::Float)
            | (TypeTag::String, TypeTag::String) => true,
            (TypeTag::IntEnum(a), TypeTag::IntEnum(b))
            | (TypeTag::StringEnum(a), TypeTag::StringEnum(b))
            | (TypeTag::RawEnum(a), TypeTag::RawEnum(b)) => a == b,
            (TypeTag::Object(a), TypeTag::Object(b)) => a == b,
            (TypeTag::Array(a), TypeTag::Array(b))
            | (TypeTag::Optional(a), TypeTag::Optional(b))
            | (TypeTag::Map(a), TypeTag::Map(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for TypeTag {}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeTag::Bool => write!(f, "bool"),
            TypeTag::Int => write!(f, "int"),
            TypeTag::Float => write!(f, "float"),
            TypeTag::String => write!(f, "string"),
            TypeTag::IntEnum(name) => write!(f, "{name}(int)"),
            TypeTag::StringEnum(name) => write!(f, "{name}(string)"),
            TypeTag::RawEnum(name) => write!(f, "{name}(raw)"),
            TypeTag::Object(schema) => write!(f, "{}", schema.get().name()),
            TypeTag::Optional(optional) => write!(f, "?{optional}"),
            TypeTag::Array(array) => write!(f, "[]{array}"),
            TypeTag::Map(map) => write!(f, "[string]{map}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_names() {
        assert_eq!(TypeTag::Bool.to_string(), "bool");
        assert_eq!(TypeTag::Int.to_string(), "int");
        assert_eq!(TypeTag::Float.to_string(), "float");
        assert_eq!(TypeTag::String.to_string(), "string");
        assert_eq!(TypeTag::IntEnum("Status").to_string(), "Status(int)");
        assert_eq!(TypeTag::StringEnum("Color").to_string(), "Color(string)");
        assert_eq!(TypeTag::RawEnum("Ratio").to_string(), "Ratio(raw)");
    }

    #[test]
    fn complex_type_names() {
        const INT_TYPE: TypeTag = TypeTag::Int;
        const STRING_TYPE: TypeTag = TypeTag::String;
        const OPTIONAL_STRING: TypeTag = TypeTag::Optional(TypeRef::new(&STRING_TYPE));

        assert_eq!(TypeTag::Optional(TypeRef::new(&INT_TYPE)).to_string(), "?int");
        assert_eq!(TypeTag::Array(TypeRef::new(&STRING_TYPE)).to_string(), "[]string");
        assert_eq!(TypeTag::Map(TypeRef::new(&INT_TYPE)).to_string(), "[string]int");
        assert_eq!(
            TypeTag::Array(TypeRef::new(&OPTIONAL_STRING)).to_string(),
            "[]?string"
        );
    }

    #[test]
    fn classification() {
        const INT_TYPE: TypeTag = TypeTag::Int;

        assert!(TypeTag::Float.is_primitive());
        assert!(!TypeTag::IntEnum("Status").is_primitive());
        assert!(TypeTag::StringEnum("Color").is_enum());
        assert!(TypeTag::Optional(TypeRef::new(&INT_TYPE)).is_optional());
        assert!(!TypeTag::Array(TypeRef::new(&INT_TYPE)).is_optional());
        assert!(TypeTag::Array(TypeRef::new(&INT_TYPE))
            .object_schema()
            .is_none());
    }

    #[test]
    fn equality() {
        const INT_TYPE: TypeTag = TypeTag::Int;
        const FLOAT_TYPE: TypeTag = TypeTag::Float;

        assert_eq!(
            TypeTag::Array(TypeRef::new(&INT_TYPE)),
            TypeTag::Array(TypeRef::new(&INT_TYPE))
        );
        assert_ne!(
            TypeTag::Array(TypeRef::new(&INT_TYPE)),
            TypeTag::Array(TypeRef::new(&FLOAT_TYPE))
        );
        assert_ne!(TypeTag::IntEnum("A"), TypeTag::StringEnum("A"));
        assert_ne!(TypeTag::IntEnum("A"), TypeTag::IntEnum("B"));
    }
}
