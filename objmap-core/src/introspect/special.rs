//! Property implementations for special standard library types.
//!
//! These have a canonical string form and travel as strings.

use core::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use super::Property;
use crate::{schema::TypeTag, Diagnostics, Error, Result, Value};

macro_rules! impl_string_property {
    ($($ty:ty),*) => {
        $(
            impl Property for $ty {
                const TYPE: &'static TypeTag = &TypeTag::String;

                fn to_value(&self) -> Value {
                    Value::String(self.to_string())
                }

                fn from_value(value: &Value, _: &mut Diagnostics) -> Result<Self> {
                    value
                        .as_str()
                        .and_then(|s| s.parse().ok())
                        .ok_or_else(|| Error::invalid_value(Self::TYPE, value))
                }
            }
        )*
    };
}

impl_string_property!(IpAddr, SocketAddr);

impl Property for PathBuf {
    const TYPE: &'static TypeTag = &TypeTag::String;

    fn to_value(&self) -> Value {
        Value::String(self.to_string_lossy().into_owned())
    }

    fn from_value(value: &Value, _: &mut Diagnostics) -> Result<Self> {
        value
            .as_str()
            .map(PathBuf::from)
            .ok_or_else(|| Error::invalid_value(Self::TYPE, value))
    }
}
