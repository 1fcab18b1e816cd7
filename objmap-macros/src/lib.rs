#![deny(
    missing_debug_implementations,
    nonstandard_style,
    rust_2018_idioms,
    missing_docs
)]
#![warn(unreachable_pub)]
#![doc = include_str!("../README.md")]

use proc_macro::TokenStream;

mod mapped;
mod mapped_enum;
mod utils;

/// Derives `Mapped`, `MappedObject` and `Property` for structs.
///
/// Every named field becomes a mapped property, in declaration order. The type must implement
/// `Default`, which the decoder uses to create fresh instances.
///
/// # Attributes
///
/// On the struct:
///
/// - `#[objmap(ignore_key = "key")]`: the external key is skipped silently when a dictionary
///   or JSON document is applied. Repeatable.
/// - `#[objmap(suppress = "property")]`: the property (own or inherited) is not mapped.
///   Repeatable.
/// - `#[objmap(key_value_coding)]`: the type implements `GenericKeyValueCoding`, which gets
///   the keys the generic accessor cannot assign.
/// - `#[objmap(std_traits)]`: also implements `PartialEq`, `Eq`, `Hash` and `Display` through
///   the mapping engine.
/// - `#[objmap(crate = "path")]`: the path of the objmap crate, `::objmap` by default.
///
/// On fields:
///
/// - `#[objmap(rename = "key")]`: the external key the property is encoded under.
/// - `#[objmap(skip)]`: the field is not a property at all.
/// - `#[objmap(base)]`: the field's type is the ancestor type whose properties are inherited.
///   At most one field can be the base.
///
/// # Limitations
///
/// Tuple structs, enums, unions and generic types are not supported.
///
/// ```rust,compile_fail
/// # use objmap::Mapped;
/// #[derive(Default, Mapped)]  // This will fail to compile
/// struct Point(f32, f32, f32);
/// ```
///
/// Two properties cannot share an external key.
///
/// ```rust,compile_fail
/// # use objmap::Mapped;
/// #[derive(Default, Mapped)]  // This will fail to compile
/// struct Clash {
///     #[objmap(rename = "b")]
///     a: i32,
///     b: i32,
/// }
/// ```
///
/// # Examples
///
/// ```rust
/// use objmap::{introspect, Mapped, MappedObject, Value};
///
/// #[derive(Debug, Default, Mapped)]
/// struct Entity {
///     id: u64,
/// }
///
/// #[derive(Debug, Default, Mapped)]
/// #[objmap(ignore_key = "legacy", std_traits)]
/// struct Person {
///     #[objmap(base)]
///     entity: Entity,
///     #[objmap(rename = "full_name")]
///     name: String,
///     age: Option<u8>,
///     #[objmap(skip)]
///     cache: Vec<u8>,
/// }
///
/// let keys: Vec<_> = introspect::<Person>().iter().map(|p| p.key()).collect();
/// assert_eq!(keys, ["id", "full_name", "age"]);
///
/// let person = Person {
///     entity: Entity { id: 1 },
///     name: "Ann".into(),
///     ..Person::default()
/// };
/// assert_eq!(person.value_for_key("id"), Some(Value::Int(1)));
/// assert_eq!(person.value_for_key("cache"), None);
///
/// // `cache` is not a property, so it plays no part in equality.
/// let other = Person {
///     entity: Entity { id: 1 },
///     name: "Ann".into(),
///     age: None,
///     cache: vec![1],
/// };
/// assert_eq!(person, other);
/// assert_eq!(objmap::hash(&person), objmap::hash(&other));
/// ```
#[proc_macro_derive(Mapped, attributes(objmap))]
pub fn derive_mapped(input: TokenStream) -> TokenStream {
    mapped::derive_mapped(input)
}

/// Derives `RawRepresentable` and `Property` for enums with unit variants.
///
/// Each case is backed by a raw value, which is what transports store:
///
/// - integer discriminants, or `#[objmap(raw = 1)]`, make an integer enum. Cases without one
///   continue from the previous case, starting at 0, like discriminants do.
/// - `#[objmap(raw = "value")]` makes a string enum. Cases without one use their name, as do
///   all cases with `#[objmap(string)]` on the enum.
/// - float and bool raw values make a raw enum, where every case needs one.
///
/// Mixing kinds or repeating a raw value is a compile error.
///
/// ```rust,compile_fail
/// # use objmap::MappedEnum;
/// #[derive(MappedEnum)]  // This will fail to compile
/// enum Mixed {
///     #[objmap(raw = 1)]
///     One,
///     #[objmap(raw = "two")]
///     Two,
/// }
/// ```
///
/// # Examples
///
/// ```rust
/// use objmap::{MappedEnum, RawRepresentable, RawValue};
///
/// #[derive(Debug, PartialEq, MappedEnum)]
/// enum Status {
///     Active = 1,
///     Inactive,
///     Banned = 10,
/// }
///
/// #[derive(Debug, PartialEq, MappedEnum)]
/// #[objmap(string)]
/// enum Color {
///     Red,
///     #[objmap(raw = "GRN")]
///     Green,
/// }
///
/// assert_eq!(Status::Inactive.raw_value(), RawValue::Int(2));
/// assert_eq!(Status::from_raw_value(&RawValue::Int(10)), Some(Status::Banned));
/// assert_eq!(Status::from_raw_value(&RawValue::Int(3)), None);
///
/// assert_eq!(Color::Red.raw_value(), RawValue::from("Red"));
/// assert_eq!(Color::from_raw_value(&RawValue::from("GRN")), Some(Color::Green));
/// assert_eq!(Color::Green.case_name(), "Green");
/// ```
#[proc_macro_derive(MappedEnum, attributes(objmap))]
pub fn derive_mapped_enum(input: TokenStream) -> TokenStream {
    mapped_enum::derive_mapped_enum(input)
}
