use objmap::{
    decode, encode, from_map_with_diagnostics, introspect, to_map, Mapped, MappedObject,
    MemoryTransport, Transport, Value,
};

#[derive(Debug, Default, Mapped)]
#[objmap(ignore_key = "_links", suppress = "cached")]
struct Record {
    #[objmap(rename = "ext")]
    internal_name: String,
    count: i64,
    cached: bool,
}

#[test]
fn renamed_property_uses_external_key() {
    let record = Record {
        internal_name: "value".into(),
        count: 2,
        cached: true,
    };

    let mut transport = MemoryTransport::new();
    encode(&record, &mut transport);
    assert_eq!(transport.read("ext"), Some(Value::from("value")));
    assert_eq!(transport.read("internal_name"), None);
    assert_eq!(transport.keys().collect::<Vec<_>>(), ["count", "ext"]);

    let decoded: Record = decode(&transport);
    assert_eq!(decoded.internal_name, "value");
}

#[test]
fn suppressed_property_is_not_mapped() {
    let names: Vec<_> = introspect::<Record>().iter().map(|p| p.name()).collect();
    assert_eq!(names, ["internal_name", "count"]);

    let record = Record {
        cached: true,
        ..Record::default()
    };
    assert!(!to_map(&record).contains_key("cached"));
    // Still reachable through the accessor.
    assert_eq!(record.value_for_key("cached"), Some(Value::Bool(true)));
    assert_eq!(record.property_mapping().len(), 3);
}

#[test_log::test]
fn ignored_keys_produce_no_diagnostics() {
    let mut map = to_map(&Record::default());
    map.insert("_links".into(), Value::Array(vec![]));
    map.insert("unknown".into(), Value::Null);

    let (_, diagnostics) = from_map_with_diagnostics::<Record>(&map);
    assert_eq!(diagnostics.len(), 1);
    match &diagnostics.issues()[0] {
        objmap::Error::UndefinedKey { key, .. } => assert_eq!(key, "unknown"),
        other => panic!("Expected undefined key, got {other:?}"),
    }
}
