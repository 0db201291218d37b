use homeboard::storage::{KvStore, StoreScope};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Nested {
    label: String,
    counts: Vec<u32>,
    child: Option<Box<Nested>>,
}

fn session_store() -> KvStore {
    KvStore::in_memory().expect("in-memory store opens")
}

#[test]
fn round_trips_representative_values() {
    let store = session_store();

    assert!(store.set("text", &"hello".to_string()));
    assert_eq!(store.get::<String>("text"), Some("hello".to_string()));

    assert!(store.set("number", &42i64));
    assert_eq!(store.get::<i64>("number"), Some(42));

    assert!(store.set("empty", &Vec::<String>::new()));
    assert_eq!(store.get::<Vec<String>>("empty"), Some(vec![]));

    let nested = Nested {
        label: "root".to_string(),
        counts: vec![1, 2, 3],
        child: Some(Box::new(Nested {
            label: "leaf".to_string(),
            counts: vec![],
            child: None,
        })),
    };
    assert!(store.set("nested", &nested));
    assert_eq!(store.get::<Nested>("nested"), Some(nested));
}

#[test]
fn missing_and_mistyped_entries_read_as_absent() {
    let store = session_store();

    assert_eq!(store.get::<String>("never-written"), None);

    // A value of the wrong shape is "no data", not an error.
    assert!(store.set("shape", &"not a number".to_string()));
    assert_eq!(store.get::<u32>("shape"), None);
    assert_eq!(
        store.get::<String>("shape"),
        Some("not a number".to_string())
    );
}

#[test]
fn overwrite_replaces_and_remove_deletes() {
    let store = session_store();

    assert!(store.set("k", &1u32));
    assert!(store.set("k", &2u32));
    assert_eq!(store.get::<u32>("k"), Some(2));

    store.remove("k");
    assert_eq!(store.get::<u32>("k"), None);

    // Removing again is a no-op.
    store.remove("k");

    assert!(store.set("a", &1u32));
    assert!(store.set("b", &2u32));
    store.clear();
    assert_eq!(store.get::<u32>("a"), None);
    assert_eq!(store.get::<u32>("b"), None);
}

#[test]
fn durable_store_survives_reopen() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("kv.db");

    {
        let store = KvStore::open(&path).expect("durable store opens");
        assert_eq!(store.scope(), StoreScope::Durable);
        assert!(store.set("persisted", &"still here".to_string()));
    }

    let reopened = KvStore::open(&path).expect("durable store reopens");
    assert_eq!(
        reopened.get::<String>("persisted"),
        Some("still here".to_string())
    );
}

#[test]
fn session_scope_is_reported() {
    assert_eq!(session_store().scope(), StoreScope::Session);
}
