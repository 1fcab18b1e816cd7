//! Generic property access.
//!
//! [`get`] and [`set`] read and assign properties of any mapped object by name. Assignment
//! falls back to the object's [`GenericKeyValueCoding`](crate::GenericKeyValueCoding) hook when
//! the generic path cannot handle a key, and reports everything else to a [`Diagnostics`] sink
//! instead of failing the surrounding operation.

use crate::{dictionary, Diagnostics, Error, Mapped, MappedObject, Property, Result, Value};

/// The value of the property `name`, or `None` if `object` has no such property.
pub fn get(object: &dyn MappedObject, name: &str) -> Option<Value> {
    object.value_for_key(name)
}

/// Assigns `value` to the property `name` of `object`.
///
/// If the generic assignment fails with [`Error::UndefinedKey`] and the object provides the
/// undefined-key hook, the hook gets the original value and its outcome is returned. Any
/// other failure is reported to `diagnostics` and returned, leaving the property unchanged.
pub fn set(
    object: &mut dyn MappedObject,
    name: &str,
    value: Value,
    diagnostics: &mut Diagnostics,
) -> Result<()> {
    match object.set_value_for_key(name, &value, diagnostics) {
        Ok(()) => Ok(()),
        Err(e) if e.is_undefined_key() => {
            if object.key_value_coding().is_none() {
                diagnostics.report(e.clone());
                return Err(e);
            }
            set_undefined(object, name, value, diagnostics)
        }
        Err(e) => {
            diagnostics.report(e.clone());
            Err(e)
        }
    }
}

/// Hands `value` to the undefined-key hook without trying the generic assignment first.
///
/// Used for external keys that match no mapped property.
pub(crate) fn set_undefined(
    object: &mut dyn MappedObject,
    key: &str,
    value: Value,
    diagnostics: &mut Diagnostics,
) -> Result<()> {
    let type_name = object.schema().name();
    let result = match object.key_value_coding() {
        Some(hook) => {
            trace!("Passing `{}` to the undefined-key hook of `{}`", key, type_name);
            hook.set_value_for_undefined_key(key, value)
        }
        None => Err(Error::undefined_key(type_name, key)),
    };

    if let Err(e) = &result {
        diagnostics.report(e.clone());
    }
    result
}

/// Converts `value` to the type of the property `key` declared on `type_name`.
///
/// This is the conversion step of generated `set_value_for_key` implementations. A failed
/// conversion becomes an [`Error::UndefinedKey`] carrying the failure as its cause, except for
/// [`Error::UnmatchedRawValue`], which is passed through.
pub fn convert<T: Property>(
    type_name: &'static str,
    key: &str,
    value: &Value,
    diagnostics: &mut Diagnostics,
) -> Result<T> {
    T::from_value(value, diagnostics).map_err(|e| match e {
        e @ Error::UnmatchedRawValue { .. } => e,
        cause => Error::UndefinedKey {
            type_name,
            key: key.into(),
            cause: Some(Box::new(cause)),
        },
    })
}

/// Builds a fresh `T` from an object snapshot of the same type or from a map keyed by
/// external keys.
///
/// The new instance starts from `T::default()` and is assigned property by property; the
/// properties that cannot be assigned keep their default and are reported to `diagnostics`.
pub fn object_from_value<T: Mapped>(value: &Value, diagnostics: &mut Diagnostics) -> Result<T> {
    let mut object = T::default();
    match value {
        Value::Object(snapshot) if snapshot.type_id() == T::SCHEMA.type_id() => {
            for (descriptor, value) in snapshot.properties() {
                // Failures are already in the diagnostics.
                let _ = set(&mut object, descriptor.name(), value.clone(), diagnostics);
            }
        }
        Value::Map(map) => dictionary::apply_map(&mut object, map, diagnostics),
        _ => {
            return Err(Error::InvalidValue {
                expected: T::SCHEMA.name().into(),
                found: value.kind(),
            })
        }
    }

    Ok(object)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GenericKeyValueCoding, RawRepresentable};

    #[derive(Debug, Clone, Copy, PartialEq, Default, crate::MappedEnum)]
    #[objmap(crate = "crate")]
    enum Mood {
        #[default]
        Calm = 1,
        Angry = 2,
    }

    #[derive(Debug, Default, crate::Mapped)]
    #[objmap(crate = "crate")]
    struct Pet {
        name: String,
        age: u8,
        nickname: Option<String>,
        mood: Mood,
    }

    #[derive(Debug, Default, crate::Mapped)]
    #[objmap(crate = "crate", key_value_coding)]
    struct Lenient {
        count: i64,
        #[objmap(skip)]
        unknown: Vec<(String, Value)>,
    }

    impl GenericKeyValueCoding for Lenient {
        fn set_value_for_undefined_key(&mut self, key: &str, value: Value) -> Result<()> {
            match (key, &value) {
                ("count", Value::String(s)) => {
                    self.count = s
                        .parse()
                        .map_err(|_| Error::undefined_key("Lenient", key))?;
                }
                ("reject", _) => return Err(Error::undefined_key("Lenient", key)),
                _ => self.unknown.push((key.to_owned(), value)),
            }
            Ok(())
        }
    }

    #[test]
    fn get_known_and_unknown() {
        let pet = Pet {
            name: "Rex".into(),
            ..Pet::default()
        };
        assert_eq!(get(&pet, "name"), Some(Value::from("Rex")));
        assert_eq!(get(&pet, "nickname"), Some(Value::Null));
        assert_eq!(get(&pet, "owner"), None);
    }

    #[test]
    fn set_converts() {
        let mut pet = Pet::default();
        let mut diagnostics = Diagnostics::new();

        set(&mut pet, "age", Value::Int(3), &mut diagnostics).unwrap();
        set(&mut pet, "nickname", Value::from("R"), &mut diagnostics).unwrap();
        set(&mut pet, "mood", Value::Int(2), &mut diagnostics).unwrap();

        assert_eq!(pet.age, 3);
        assert_eq!(pet.nickname.as_deref(), Some("R"));
        assert_eq!(pet.mood, Mood::Angry);
        assert!(diagnostics.is_empty());

        set(&mut pet, "nickname", Value::Null, &mut diagnostics).unwrap();
        assert_eq!(pet.nickname, None);
    }

    #[test_log::test]
    fn undefined_key_is_reported() {
        let mut pet = Pet::default();
        let mut diagnostics = Diagnostics::new();

        let e = set(&mut pet, "owner", Value::from("Ann"), &mut diagnostics).unwrap_err();
        assert!(matches!(&e, Error::UndefinedKey { key, cause: None, .. } if key == "owner"));
        assert_eq!(diagnostics.len(), 1);
    }

    #[test_log::test]
    fn unconvertible_value_leaves_property_unchanged() {
        let mut pet = Pet {
            age: 4,
            ..Pet::default()
        };
        let mut diagnostics = Diagnostics::new();

        let e = set(&mut pet, "age", Value::Int(1000), &mut diagnostics).unwrap_err();
        assert!(matches!(e, Error::UndefinedKey { cause: Some(_), .. }));
        assert_eq!(pet.age, 4);

        set(&mut pet, "age", Value::from("four"), &mut diagnostics).unwrap_err();
        assert_eq!(pet.age, 4);
        assert_eq!(diagnostics.len(), 2);
    }

    #[test_log::test]
    fn unmatched_raw_value_is_reported() {
        let mut pet = Pet::default();
        let mut diagnostics = Diagnostics::new();

        let e = set(&mut pet, "mood", Value::Int(99), &mut diagnostics).unwrap_err();
        assert!(e.is_unmatched_raw_value());
        assert_eq!(pet.mood, Mood::Calm);
        assert!(diagnostics.issues()[0].is_unmatched_raw_value());
    }

    #[test_log::test]
    fn hook_handles_undefined_keys() {
        let mut lenient = Lenient::default();
        let mut diagnostics = Diagnostics::new();

        set(&mut lenient, "count", Value::from("42"), &mut diagnostics).unwrap();
        assert_eq!(lenient.count, 42);

        set(&mut lenient, "extra", Value::Bool(true), &mut diagnostics).unwrap();
        assert_eq!(lenient.unknown, [("extra".to_owned(), Value::Bool(true))]);
        assert!(diagnostics.is_empty());

        set(&mut lenient, "reject", Value::Null, &mut diagnostics).unwrap_err();
        assert_eq!(diagnostics.len(), 1);
    }

    #[test]
    fn convert_wraps_failures() {
        let mut diagnostics = Diagnostics::new();

        let e = convert::<i32>("Pet", "age", &Value::from("x"), &mut diagnostics).unwrap_err();
        match e {
            Error::UndefinedKey {
                type_name,
                key,
                cause: Some(cause),
            } => {
                assert_eq!(type_name, "Pet");
                assert_eq!(key, "age");
                assert!(matches!(*cause, Error::InvalidValue { .. }));
            }
            other => panic!("Expected undefined key, got {other:?}"),
        }

        let e = convert::<Mood>("Pet", "mood", &Value::Int(7), &mut diagnostics).unwrap_err();
        assert!(e.is_unmatched_raw_value());
    }

    #[test]
    fn object_from_snapshot_and_map() {
        let mut diagnostics = Diagnostics::new();
        let pet = Pet {
            name: "Rex".into(),
            age: 2,
            nickname: None,
            mood: Mood::Angry,
        };

        let snapshot = pet.to_value();
        let copy: Pet = object_from_value(&snapshot, &mut diagnostics).unwrap();
        assert_eq!(copy.name, "Rex");
        assert_eq!(copy.mood, Mood::Angry);

        let mut map = std::collections::BTreeMap::new();
        map.insert("name".to_owned(), Value::from("Tom"));
        map.insert("mood".to_owned(), Mood::Angry.raw_value().into_value());
        let from_map: Pet = object_from_value(&Value::Map(map), &mut diagnostics).unwrap();
        assert_eq!(from_map.name, "Tom");
        assert_eq!(from_map.age, 0);
        assert!(diagnostics.is_empty());

        let e = object_from_value::<Pet>(&Value::Int(1), &mut diagnostics).unwrap_err();
        assert!(matches!(e, Error::InvalidValue { found: "int", .. }));
    }

    #[test]
    fn object_from_foreign_snapshot_fails() {
        let mut diagnostics = Diagnostics::new();
        let snapshot = Lenient::default().to_value();
        assert!(object_from_value::<Pet>(&snapshot, &mut diagnostics).is_err());
    }
}
