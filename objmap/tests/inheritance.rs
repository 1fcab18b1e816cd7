use std::thread;

use objmap::{
    accessor, decode, describe, encode, equals, introspect, to_map, Diagnostics,
    GenericKeyValueCoding, Mapped, MappedObject, MemoryTransport, Result, Value,
};

#[derive(Debug, Default, Clone, Mapped)]
#[objmap(ignore_key = "etag", key_value_coding)]
struct Resource {
    id: String,
    #[objmap(rename = "rev")]
    revision: u32,
    #[objmap(skip)]
    unknown: Vec<String>,
}

impl GenericKeyValueCoding for Resource {
    fn set_value_for_undefined_key(&mut self, key: &str, _: Value) -> Result<()> {
        self.unknown.push(key.to_owned());
        Ok(())
    }
}

#[derive(Debug, Default, Clone, Mapped)]
#[objmap(suppress = "revision")]
struct Document {
    #[objmap(base)]
    resource: Resource,
    title: String,
}

#[derive(Debug, Default, Clone, Mapped)]
struct Report {
    #[objmap(base)]
    document: Document,
    pages: u16,
    // Shadows the inherited property.
    title: Option<String>,
}

fn report() -> Report {
    Report {
        document: Document {
            resource: Resource {
                id: "r-1".into(),
                revision: 9,
                unknown: vec![],
            },
            title: "ignored".into(),
        },
        pages: 12,
        title: Some("Q3".into()),
    }
}

#[test]
fn inherited_properties_come_first() {
    let names: Vec<_> = introspect::<Report>().iter().map(|p| p.name()).collect();
    assert_eq!(names, ["id", "title", "pages"]);

    let names: Vec<_> = introspect::<Document>().iter().map(|p| p.name()).collect();
    assert_eq!(names, ["id", "title"]);

    let keys: Vec<_> = introspect::<Resource>().iter().map(|p| p.key()).collect();
    assert_eq!(keys, ["id", "rev"]);
}

#[test]
fn shadowing_property_has_the_derived_type() {
    let title = &introspect::<Report>()[1];
    assert!(title.is_optional());

    let report = report();
    assert_eq!(report.value_for_key("title"), Some(Value::from("Q3")));
    assert_eq!(report.value_for_key("id"), Some(Value::from("r-1")));
}

#[test]
fn accessor_delegates_to_the_base() {
    let mut report = Report::default();
    let mut diagnostics = Diagnostics::new();

    accessor::set(&mut report, "id", Value::from("x"), &mut diagnostics).unwrap();
    assert_eq!(report.document.resource.id, "x");

    // Unknown keys reach the hook inherited from the root type.
    accessor::set(&mut report, "colour", Value::Null, &mut diagnostics).unwrap();
    assert_eq!(report.document.resource.unknown, ["colour"]);
    assert!(diagnostics.is_empty());
}

#[test]
fn inherited_round_trip() {
    let original = report();
    let mut transport = MemoryTransport::new();
    encode(&original, &mut transport);
    let decoded: Report = decode(&transport);

    assert!(equals(&original, &decoded));
    assert_eq!(decoded.document.resource.id, "r-1");
    // `revision` is suppressed below `Resource` and `Document::title` is shadowed.
    assert_eq!(decoded.document.resource.revision, 0);
    assert_eq!(decoded.document.title, "");
    assert_eq!(
        to_map(&original).keys().map(String::as_str).collect::<Vec<_>>(),
        ["id", "pages", "title"]
    );
}

#[test]
fn inherited_description() {
    assert_eq!(
        describe(&report()),
        "Report {\n    id: \"r-1\",\n    title: \"Q3\",\n    pages: 12,\n}"
    );
}

#[test]
fn introspection_is_shared_across_threads() {
    let first = introspect::<Report>();
    let addresses: Vec<usize> = thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| introspect::<Report>().as_ptr() as usize))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert!(addresses.iter().all(|a| *a == first.as_ptr() as usize));
    assert!(std::ptr::eq(first, introspect::<Report>()));
}
