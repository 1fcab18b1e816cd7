//! Property implementations for external third-party crates.
//!
//! This module provides Property trait implementations for commonly used external crates,
//! gated behind their respective feature flags. All of them travel as strings.

// ============================================================================
// UUID support
// ============================================================================

#[cfg(feature = "uuid")]
impl super::Property for uuid::Uuid {
    const TYPE: &'static crate::schema::TypeTag = &crate::schema::TypeTag::String;

    fn to_value(&self) -> crate::Value {
        crate::Value::String(self.hyphenated().to_string())
    }

    fn from_value(value: &crate::Value, _: &mut crate::Diagnostics) -> crate::Result<Self> {
        value
            .as_str()
            .and_then(|s| uuid::Uuid::parse_str(s).ok())
            .ok_or_else(|| crate::Error::invalid_value(Self::TYPE, value))
    }
}

// ============================================================================
// Chrono support
// ============================================================================

#[cfg(feature = "chrono")]
macro_rules! impl_chrono_property {
    ($($ty:ty),*) => {
        $(
            impl super::Property for $ty {
                const TYPE: &'static crate::schema::TypeTag = &crate::schema::TypeTag::String;

                fn to_value(&self) -> crate::Value {
                    crate::Value::String(self.to_string())
                }

                fn from_value(
                    value: &crate::Value,
                    _: &mut crate::Diagnostics,
                ) -> crate::Result<Self> {
                    value
                        .as_str()
                        .and_then(|s| s.parse().ok())
                        .ok_or_else(|| crate::Error::invalid_value(Self::TYPE, value))
                }
            }
        )*
    };
}

#[cfg(feature = "chrono")]
impl_chrono_property!(chrono::NaiveDate, chrono::NaiveTime, chrono::NaiveDateTime);

#[cfg(feature = "chrono")]
impl super::Property for chrono::DateTime<chrono::Utc> {
    const TYPE: &'static crate::schema::TypeTag = &crate::schema::TypeTag::String;

    fn to_value(&self) -> crate::Value {
        crate::Value::String(self.to_rfc3339())
    }

    fn from_value(value: &crate::Value, _: &mut crate::Diagnostics) -> crate::Result<Self> {
        value
            .as_str()
            .and_then(|s| chrono::DateTime::parse_from_rfc3339(s).ok())
            .map(|date_time| date_time.with_timezone(&chrono::Utc))
            .ok_or_else(|| crate::Error::invalid_value(Self::TYPE, value))
    }
}
