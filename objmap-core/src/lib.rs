#![deny(
    missing_debug_implementations,
    nonstandard_style,
    rust_2018_idioms,
    missing_docs
)]
#![warn(unreachable_pub, clippy::std_instead_of_core)]
#![doc = include_str!("../README.md")]

#[macro_use]
mod log;

mod error;
pub use error::{Error, Result};
mod diagnostics;
pub use diagnostics::Diagnostics;
pub mod schema;
pub mod introspect;
pub use introspect::{introspect, Property, PropertyDescriptor};
pub mod value;
pub use value::{EnumValue, Object, RawValue, Value};
mod object;
pub use object::{GenericKeyValueCoding, Mapped, MappedObject, RawRepresentable};
pub mod accessor;
mod equality;
pub use equality::{equals, hash, hash_value, HASH_SEED};
mod describe;
pub use describe::describe;
pub mod codec;
pub use codec::{decode, decode_with_diagnostics, encode};
pub mod dictionary;
pub use dictionary::{
    apply_map, from_json_str, from_json_str_with_diagnostics, from_map, from_map_with_diagnostics,
    to_json, to_json_string, to_json_string_pretty, to_map,
};
pub mod transport;
pub use transport::{MemoryTransport, Transport};

pub use objmap_macros::{Mapped, MappedEnum};
