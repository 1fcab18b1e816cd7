use serde_json::{Map, Value as JsonValue};

use super::Transport;
use crate::Value;

/// JSON objects are transports with nested objects as scopes.
impl Transport for Map<String, JsonValue> {
    fn read(&self, key: &str) -> Option<Value> {
        self.get(key).map(Value::from)
    }

    fn write(&mut self, key: &str, value: Value) {
        self.insert(key.to_owned(), value.into());
    }

    fn scope(&self, key: &str) -> Option<&Self> {
        self.get(key).and_then(JsonValue::as_object)
    }

    fn scope_mut(&mut self, key: &str) -> &mut Self {
        let entry = self
            .entry(key)
            .or_insert_with(|| JsonValue::Object(Map::new()));
        if !entry.is_object() {
            *entry = JsonValue::Object(Map::new());
        }

        match entry {
            JsonValue::Object(scope) => scope,
            _ => unreachable!("entry was just made an object"),
        }
    }
}
