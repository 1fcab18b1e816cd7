//! Static type metadata for mapped types.
//!
//! This module provides the building blocks the derive macros emit in const context: the
//! [`TypeTag`] of every property, the declared [`Field`]s of a type, its [`Schema`] and the
//! [`KeyMapping`] override.

#![deny(missing_docs)]

mod type_tag;
pub use type_tag::{TypeRef, TypeTag};

mod field;
pub use field::Field;

mod mapping;
pub use mapping::KeyMapping;

mod object_schema;
pub use object_schema::{Schema, SchemaRef};
