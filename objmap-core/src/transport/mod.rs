//! Key-value persistence transports.
//!
//! A [`Transport`] is the storage the encode/decode engine writes to and reads from. It stores
//! plain values under string keys and nested scopes for nested objects.

mod json;
mod memory;
pub use memory::MemoryTransport;

use crate::Value;

/// A key-value store with nested scopes.
///
/// Transports only ever receive plain values, i.e. values without the [`Value::Enum`] and
/// [`Value::Object`] variants.
pub trait Transport {
    /// The value stored under `key`.
    ///
    /// A nested scope is read back as a [`Value::Map`].
    fn read(&self, key: &str) -> Option<Value>;

    /// Stores `value` under `key`, replacing whatever was there.
    fn write(&mut self, key: &str, value: Value);

    /// The nested scope stored under `key`, if there is one.
    fn scope(&self, key: &str) -> Option<&Self>;

    /// The nested scope under `key`, replacing any plain value stored there with an empty one.
    fn scope_mut(&mut self, key: &str) -> &mut Self;
}
