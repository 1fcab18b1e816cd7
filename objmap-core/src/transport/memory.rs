use std::collections::BTreeMap;

use super::Transport;
use crate::Value;

/// An in-memory transport.
///
/// Keeps plain values and nested scopes in key order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryTransport {
    entries: BTreeMap<String, Slot>,
}

#[derive(Debug, Clone, PartialEq)]
enum Slot {
    Value(Value),
    Scope(MemoryTransport),
}

impl MemoryTransport {
    /// Creates an empty transport.
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of entries at this level.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no entries at this level.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The keys at this level, in order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// The whole content as a plain map, with nested scopes as nested maps.
    pub fn to_map(&self) -> BTreeMap<String, Value> {
        self.entries
            .iter()
            .map(|(key, slot)| (key.clone(), slot.to_value()))
            .collect()
    }
}

impl Slot {
    fn to_value(&self) -> Value {
        match self {
            Slot::Value(value) => value.clone(),
            Slot::Scope(scope) => Value::Map(scope.to_map()),
        }
    }
}

impl Transport for MemoryTransport {
    fn read(&self, key: &str) -> Option<Value> {
        self.entries.get(key).map(Slot::to_value)
    }

    fn write(&mut self, key: &str, value: Value) {
        self.entries.insert(key.to_owned(), Slot::Value(value));
    }

    fn scope(&self, key: &str) -> Option<&Self> {
        match self.entries.get(key)? {
            Slot::Scope(scope) => Some(scope),
            Slot::Value(_) => None,
        }
    }

    fn scope_mut(&mut self, key: &str) -> &mut Self {
        let slot = self
            .entries
            .entry(key.to_owned())
            .or_insert_with(|| Slot::Scope(Self::default()));
        if let Slot::Value(_) = slot {
            *slot = Slot::Scope(Self::default());
        }

        match slot {
            Slot::Scope(scope) => scope,
            Slot::Value(_) => unreachable!("slot was just made a scope"),
        }
    }
}

impl From<BTreeMap<String, Value>> for MemoryTransport {
    /// Nested maps become nested scopes.
    fn from(map: BTreeMap<String, Value>) -> Self {
        let entries = map
            .into_iter()
            .map(|(key, value)| {
                let slot = match value {
                    Value::Map(map) => Slot::Scope(map.into()),
                    value => Slot::Value(value.into_plain()),
                };
                (key, slot)
            })
            .collect();

        Self { entries }
    }
}
