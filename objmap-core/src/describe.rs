//! Human-readable descriptions of mapped objects.

use core::fmt::{self, Write};

use crate::{introspect, value::Object, MappedObject, Value};

const INDENT: &str = "    ";

/// A multi-line description of `object` listing every mapped property.
///
/// ```text
/// Person {
///     name: "Ann",
///     nickname: nil,
///     address: Address {
///         city: "Oslo",
///     },
/// }
/// ```
///
/// The output only depends on the property values, so equal objects describe identically.
pub fn describe(object: &dyn MappedObject) -> String {
    let properties: Vec<_> = introspect::properties(object)
        .iter()
        .map(|descriptor| (descriptor.name(), object.value_for_key(descriptor.name())))
        .collect();

    let mut out = String::new();
    let properties = properties.iter().map(|(name, value)| (*name, value.as_ref()));
    // Writing to a `String` never fails.
    let _ = write_object(&mut out, object.schema().name(), properties, 0);

    out
}

fn write_object<'a, W>(
    w: &mut W,
    type_name: &str,
    properties: impl ExactSizeIterator<Item = (&'a str, Option<&'a Value>)>,
    level: usize,
) -> fmt::Result
where
    W: Write + ?Sized,
{
    if properties.len() == 0 {
        return write!(w, "{type_name} {{}}");
    }

    w.write_str(type_name)?;
    w.write_str(" {\n")?;
    for (name, value) in properties {
        indent(w, level + 1)?;
        write!(w, "{name}: ")?;
        match value {
            Some(value) => write_value(w, value, level + 1)?,
            None => w.write_str("<unknown>")?,
        }
        w.write_str(",\n")?;
    }
    indent(w, level)?;
    w.write_char('}')
}

fn write_value<W>(w: &mut W, value: &Value, level: usize) -> fmt::Result
where
    W: Write + ?Sized,
{
    match value {
        Value::Null => w.write_str("nil"),
        Value::Bool(b) => write!(w, "{b}"),
        Value::Int(i) => write!(w, "{i}"),
        Value::UInt(u) => write!(w, "{u}"),
        Value::Float(f) => write!(w, "{f:?}"),
        Value::String(s) => write!(w, "{s:?}"),
        Value::Array(items) if items.is_empty() => w.write_str("[]"),
        Value::Array(items) => {
            w.write_str("[\n")?;
            for item in items {
                indent(w, level + 1)?;
                write_value(w, item, level + 1)?;
                w.write_str(",\n")?;
            }
            indent(w, level)?;
            w.write_char(']')
        }
        Value::Map(map) if map.is_empty() => w.write_str("{}"),
        Value::Map(map) => {
            w.write_str("{\n")?;
            for (key, value) in map {
                indent(w, level + 1)?;
                write!(w, "{key:?}: ")?;
                write_value(w, value, level + 1)?;
                w.write_str(",\n")?;
            }
            indent(w, level)?;
            w.write_char('}')
        }
        Value::Enum(e) => write!(w, "{}({})", e.case(), e.raw()),
        Value::Object(object) => write_snapshot(w, object, level),
    }
}

fn write_snapshot<W>(w: &mut W, object: &Object, level: usize) -> fmt::Result
where
    W: Write + ?Sized,
{
    let properties = object
        .properties()
        .map(|(descriptor, value)| (descriptor.name(), Some(value)));
    write_object(w, object.type_name(), properties, level)
}

fn indent<W>(w: &mut W, level: usize) -> fmt::Result
where
    W: Write + ?Sized,
{
    (0..level).try_for_each(|_| w.write_str(INDENT))
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_value(f, self, 0)
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_snapshot(f, self, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::BTreeMap;

    #[derive(Debug, Default, PartialEq, crate::MappedEnum)]
    #[objmap(crate = "crate")]
    enum Role {
        #[default]
        #[objmap(raw = "admin")]
        Admin,
        #[objmap(raw = "guest")]
        Guest,
    }

    #[derive(Debug, Default, crate::Mapped)]
    #[objmap(crate = "crate")]
    struct Address {
        city: String,
    }

    #[derive(Debug, Default, crate::Mapped)]
    #[objmap(crate = "crate")]
    struct Person {
        name: String,
        nickname: Option<String>,
        age: i32,
        score: f64,
        role: Role,
        address: Address,
        tags: Vec<String>,
        extra: BTreeMap<String, i64>,
    }

    #[derive(Debug, Default, crate::Mapped)]
    #[objmap(crate = "crate")]
    struct Empty {}

    #[test]
    fn describes_all_properties() {
        let person = Person {
            name: "Ann \"A\"".into(),
            nickname: None,
            age: 33,
            score: 1.0,
            role: Role::Guest,
            address: Address {
                city: "Oslo".into(),
            },
            tags: vec!["a".into(), "b".into()],
            extra: BTreeMap::new(),
        };

        let expected = r#"Person {
    name: "Ann \"A\"",
    nickname: nil,
    age: 33,
    score: 1.0,
    role: Guest("guest"),
    address: Address {
        city: "Oslo",
    },
    tags: [
        "a",
        "b",
    ],
    extra: {},
}"#;
        assert_eq!(describe(&person), expected);
        assert_eq!(describe(&person), describe(&person));
    }

    #[test]
    fn describes_empty_object() {
        assert_eq!(describe(&Empty {}), "Empty {}");
    }

    #[test]
    fn value_display() {
        let mut map = BTreeMap::new();
        map.insert("k".to_owned(), Value::Array(vec![]));
        assert_eq!(Value::Map(map).to_string(), "{\n    \"k\": [],\n}");
        assert_eq!(Value::Null.to_string(), "nil");
        assert_eq!(Value::Float(f64::NAN).to_string(), "NaN");
    }
}
