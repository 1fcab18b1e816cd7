//! Conversions between [`Value`] and [`serde_json::Value`].

use super::Value;

impl From<&serde_json::Value> for Value {
    fn from(json: &serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(*b),
            serde_json::Value::Number(n) => number(n),
            serde_json::Value::String(s) => Value::String(s.clone()),
            serde_json::Value::Array(items) => Value::Array(items.iter().map(Value::from).collect()),
            serde_json::Value::Object(map) => Value::Map(
                map.iter()
                    .map(|(key, value)| (key.clone(), Value::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => number(&n),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => Value::Map(
                map.into_iter()
                    .map(|(key, value)| (key, Value::from(value)))
                    .collect(),
            ),
        }
    }
}

fn number(n: &serde_json::Number) -> Value {
    n.as_i64()
        .map(Value::Int)
        .or_else(|| n.as_u64().map(Value::UInt))
        .or_else(|| n.as_f64().map(Value::Float))
        .unwrap_or(Value::Null)
}

impl From<Value> for serde_json::Value {
    fn from(value: Value) -> Self {
        match value.into_plain() {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(b),
            Value::Int(i) => serde_json::Value::Number(i.into()),
            Value::UInt(u) => serde_json::Value::Number(u.into()),
            // JSON has no representation for non-finite numbers.
            Value::Float(f) => serde_json::Number::from_f64(f)
                .map_or(serde_json::Value::Null, serde_json::Value::Number),
            Value::String(s) => serde_json::Value::String(s),
            Value::Array(items) => {
                serde_json::Value::Array(items.into_iter().map(Into::into).collect())
            }
            Value::Map(map) => serde_json::Value::Object(
                map.into_iter()
                    .map(|(key, value)| (key, value.into()))
                    .collect(),
            ),
            // `into_plain` leaves no enums or objects behind.
            Value::Enum(_) | Value::Object(_) => serde_json::Value::Null,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn from_json() {
        let json = json!({
            "name": "Ann",
            "age": 42,
            "ratio": 0.5,
            "tags": ["a", null],
            "active": true,
        });
        let value = Value::from(&json);
        let map = value.as_map().unwrap();
        assert_eq!(map["name"], Value::from("Ann"));
        assert_eq!(map["age"], Value::Int(42));
        assert_eq!(map["ratio"], Value::Float(0.5));
        assert_eq!(map["tags"], Value::Array(vec![Value::from("a"), Value::Null]));
        assert_eq!(map["active"], Value::Bool(true));

        assert_eq!(Value::from(json.clone()), value);
    }

    #[test]
    fn to_json() {
        let value = Value::Array(vec![Value::Int(1), Value::Float(f64::NAN), Value::Null]);
        assert_eq!(serde_json::Value::from(value), json!([1, null, null]));
    }

    #[test]
    fn large_unsigned_numbers_stay_exact() {
        let json = json!(u64::MAX - 1);
        let value = Value::from(&json);
        assert_eq!(value, Value::UInt(u64::MAX - 1));
        assert_eq!(serde_json::Value::from(value), json);
    }
}
