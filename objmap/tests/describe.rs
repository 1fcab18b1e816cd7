use objmap::{describe, Mapped, MappedEnum};
use pretty_assertions::assert_eq;

#[derive(Debug, Default, MappedEnum)]
#[objmap(string)]
enum Kind {
    #[default]
    File,
    Directory,
}

#[derive(Debug, Default, Mapped)]
struct Owner {
    name: String,
    uid: u32,
}

#[derive(Debug, Default, Mapped)]
#[objmap(std_traits)]
struct Entry {
    path: String,
    kind: Kind,
    size: Option<u64>,
    owner: Owner,
    children: Vec<Entry>,
}

fn entry() -> Entry {
    Entry {
        path: "/srv".into(),
        kind: Kind::Directory,
        size: None,
        owner: Owner {
            name: "root".into(),
            uid: 0,
        },
        children: vec![Entry {
            path: "/srv/a.txt".into(),
            kind: Kind::File,
            size: Some(12),
            owner: Owner {
                name: "web".into(),
                uid: 33,
            },
            children: vec![],
        }],
    }
}

#[test]
fn nested_description() {
    let expected = r#"Entry {
    path: "/srv",
    kind: Directory("Directory"),
    size: nil,
    owner: Owner {
        name: "root",
        uid: 0,
    },
    children: [
        Entry {
            path: "/srv/a.txt",
            kind: File("File"),
            size: 12,
            owner: Owner {
                name: "web",
                uid: 33,
            },
            children: [],
        },
    ],
}"#;
    let entry = entry();
    assert_eq!(describe(&entry), expected);
    assert_eq!(entry.to_string(), expected);
}

#[test]
fn description_is_deterministic() {
    let entry = entry();
    let first = describe(&entry);
    assert_eq!(describe(&entry), first);
    assert_eq!(describe(&self::entry()), first);
}
