use std::sync::Arc;

use crate::{schema::TypeTag, value::RawValue, Value};

/// The Error type for the objmap crate.
///
/// None of these are fatal to the engine: decoding and dictionary application report them to a
/// [`crate::Diagnostics`] sink and carry on with the next property.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub enum Error {
    /// The accessor could not assign a value to the named property.
    ///
    /// Either the type has no property with that name or the property's storage cannot accept
    /// the given value. In the latter case `cause` holds the conversion failure.
    UndefinedKey {
        /// Name of the type the assignment was attempted on.
        type_name: &'static str,
        /// The property name (or external key) that could not be assigned.
        key: String,
        /// Why the generic assignment failed, if the property exists.
        cause: Option<Box<Error>>,
    },
    /// A raw value that has no matching enum case.
    UnmatchedRawValue {
        /// Name of the enum type.
        enum_name: &'static str,
        /// The raw value that was looked up.
        raw: RawValue,
    },
    /// A value of the wrong shape for the requested type.
    InvalidValue {
        /// The expected type signature.
        expected: String,
        /// The kind of value that was found instead.
        found: &'static str,
    },
    /// Error serializing or deserializing to/from JSON.
    Json(Arc<serde_json::Error>),
}

/// The Result type for the objmap crate.
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// An [`Error::UndefinedKey`] without a cause.
    pub fn undefined_key(type_name: &'static str, key: &str) -> Self {
        Error::UndefinedKey {
            type_name,
            key: key.into(),
            cause: None,
        }
    }

    /// An [`Error::InvalidValue`] for `found` not fitting `expected`.
    pub fn invalid_value(expected: &TypeTag, found: &Value) -> Self {
        Error::InvalidValue {
            expected: expected.to_string(),
            found: found.kind(),
        }
    }

    /// If this is an [`Error::UndefinedKey`].
    pub fn is_undefined_key(&self) -> bool {
        matches!(self, Error::UndefinedKey { .. })
    }

    /// If this is an [`Error::UnmatchedRawValue`].
    pub fn is_unmatched_raw_value(&self) -> bool {
        matches!(self, Error::UnmatchedRawValue { .. })
    }
}

impl core::error::Error for Error {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Error::UndefinedKey {
                cause: Some(cause), ..
            } => Some(cause.as_ref()),
            Error::Json(e) => Some(e.as_ref()),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Json(Arc::new(e))
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::UndefinedKey {
                type_name,
                key,
                cause,
            } => {
                write!(
                    f,
                    "The type '{type_name}' is not key value coding-compliant for the key '{key}'"
                )?;
                match cause {
                    Some(cause) => write!(f, ": {cause}"),
                    None => Ok(()),
                }
            }
            Error::UnmatchedRawValue { enum_name, raw } => {
                write!(f, "No case of enum '{enum_name}' has the raw value {raw}")
            }
            Error::InvalidValue { expected, found } => {
                write!(f, "Expected a value of type '{expected}', found {found}")
            }
            Error::Json(e) => write!(f, "Error serializing or deserializing to/from JSON: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::error::Error as _;

    #[test]
    fn undefined_key_display() {
        let error = Error::undefined_key("Person", "nickname");
        assert_eq!(
            error.to_string(),
            "The type 'Person' is not key value coding-compliant for the key 'nickname'"
        );
        assert!(error.is_undefined_key());
        assert!(error.source().is_none());
    }

    #[test]
    fn undefined_key_with_cause() {
        let cause = Error::invalid_value(&TypeTag::Int, &Value::String("42".into()));
        let error = Error::UndefinedKey {
            type_name: "Person",
            key: "age".into(),
            cause: Some(Box::new(cause)),
        };
        assert_eq!(
            error.to_string(),
            "The type 'Person' is not key value coding-compliant for the key 'age': \
             Expected a value of type 'int', found string"
        );
        assert!(error.source().is_some());
    }

    #[test]
    fn unmatched_raw_value_display() {
        let error = Error::UnmatchedRawValue {
            enum_name: "Status",
            raw: RawValue::Int(99),
        };
        assert_eq!(error.to_string(), "No case of enum 'Status' has the raw value 99");
        assert!(error.is_unmatched_raw_value());
    }
}
