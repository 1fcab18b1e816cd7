use objmap::{
    accessor, from_json_str, introspect,
    schema::{TypeRef, TypeTag},
    Diagnostics, Error, GenericKeyValueCoding, Mapped, MappedObject, Property, Result, Value,
};

/// A property type the generic accessor cannot fill from anything.
#[derive(Debug, Default, Clone, PartialEq)]
struct Opaque(Option<u8>);

impl Property for Opaque {
    const TYPE: &'static TypeTag = &TypeTag::Optional(TypeRef::new(&TypeTag::Int));

    fn to_value(&self) -> Value {
        self.0.map(i64::from).into()
    }

    fn from_value(value: &Value, _: &mut Diagnostics) -> Result<Self> {
        Err(Error::invalid_value(Self::TYPE, value))
    }
}

#[derive(Debug, Default, Mapped)]
struct Strict {
    wrapped: Opaque,
    age: u8,
}

#[derive(Debug, Default, Mapped)]
#[objmap(key_value_coding)]
struct Forgiving {
    wrapped: Opaque,
    age: u8,
    #[objmap(skip)]
    extras: Vec<String>,
}

impl GenericKeyValueCoding for Forgiving {
    fn set_value_for_undefined_key(&mut self, key: &str, value: Value) -> Result<()> {
        match key {
            "wrapped" => {
                self.wrapped = Opaque(value.as_i64().and_then(|i| u8::try_from(i).ok()));
            }
            "age" => {
                self.age = value
                    .as_str()
                    .and_then(|s| s.parse().ok())
                    .ok_or_else(|| Error::undefined_key("Forgiving", key))?;
            }
            _ => self.extras.push(key.to_owned()),
        }
        Ok(())
    }
}

#[test_log::test]
fn unsettable_property_keeps_default_and_is_reported() {
    let mut strict = Strict::default();
    let mut diagnostics = Diagnostics::new();

    let result = accessor::set(&mut strict, "wrapped", Value::Int(4), &mut diagnostics);
    assert!(result.is_err());
    assert_eq!(strict.wrapped, Opaque(None));
    assert_eq!(diagnostics.len(), 1);
    assert!(diagnostics.issues()[0].is_undefined_key());
}

#[test]
fn hook_sets_what_the_accessor_cannot() {
    let mut forgiving = Forgiving::default();
    let mut diagnostics = Diagnostics::new();

    accessor::set(&mut forgiving, "wrapped", Value::Int(4), &mut diagnostics).unwrap();
    accessor::set(&mut forgiving, "age", Value::from("31"), &mut diagnostics).unwrap();
    assert_eq!(forgiving.wrapped, Opaque(Some(4)));
    assert_eq!(forgiving.age, 31);
    assert!(diagnostics.is_empty());
}

#[test]
fn hook_receives_unknown_json_keys() {
    let forgiving: Forgiving =
        from_json_str(r#"{ "age": "7", "wrapped": 1, "color": "red", "shape": null }"#).unwrap();
    assert_eq!(forgiving.age, 7);
    assert_eq!(forgiving.wrapped, Opaque(Some(1)));
    assert_eq!(forgiving.extras, ["color", "shape"]);
}

#[test_log::test]
fn decoding_never_fails() {
    let strict: Strict = from_json_str(r#"{ "wrapped": 1, "age": "old", "x": [] }"#).unwrap();
    assert_eq!(strict.age, 0);
    assert!(from_json_str::<Strict>("42").is_err());
}

#[test]
fn missing_optional_reads_as_null() {
    let strict = Strict::default();
    assert_eq!(strict.value_for_key("wrapped"), Some(Value::Null));
    assert!(introspect::<Strict>()[0].is_optional());
}
