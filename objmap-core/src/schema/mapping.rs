//! Property mapping override.

/// One entry of a type's property mapping override.
///
/// | property  | key       | meaning                                                  |
/// |-----------|-----------|----------------------------------------------------------|
/// | `Some(p)` | `Some(k)` | property `p` is read from and written to external key `k` |
/// | `Some(p)` | `None`    | property `p` is not a mapped property                    |
/// | `None`    | `Some(k)` | external key `k` is ignored when a dictionary is applied |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyMapping {
    property: Option<&'static str>,
    key: Option<&'static str>,
}

impl KeyMapping {
    /// Creates a mapping entry from its raw parts.
    pub const fn new(property: Option<&'static str>, key: Option<&'static str>) -> Self {
        Self { property, key }
    }

    /// Maps `property` to the external key `key`.
    pub const fn rename(property: &'static str, key: &'static str) -> Self {
        Self::new(Some(property), Some(key))
    }

    /// Removes `property` from the mapped properties.
    pub const fn suppress(property: &'static str) -> Self {
        Self::new(Some(property), None)
    }

    /// Ignores the external `key` when applying a dictionary.
    pub const fn ignore(key: &'static str) -> Self {
        Self::new(None, Some(key))
    }

    /// The source property name.
    pub fn property(&self) -> Option<&'static str> {
        self.property
    }

    /// The external key.
    pub fn key(&self) -> Option<&'static str> {
        self.key
    }
}
