mod common;
use crate::common::init_tracing;

use proptest::prelude::*;
use serde_json::{Value, json};

use automgr::errors::AutomgrError;
use automgr::store::{self, deep_get, deep_set};

#[test]
fn get_addresses_nested_fields() {
    init_tracing();

    let doc = json!({"task": {"entry": {"name": "Daily"}}});
    assert_eq!(
        deep_get(&doc, "task/entry/name"),
        Some(&Value::String("Daily".to_string()))
    );
    assert_eq!(deep_get(&doc, "task/entry"), Some(&json!({"name": "Daily"})));
    assert_eq!(deep_get(&doc, "task/missing"), None);
    assert_eq!(deep_get(&doc, "task/entry/name/deeper"), None);
}

#[test]
fn get_accepts_array_indices() {
    let doc = json!({"stages": [{"id": "wakeup"}, {"id": "combat"}]});
    assert_eq!(
        deep_get(&doc, "stages/1/id"),
        Some(&Value::String("combat".to_string()))
    );
    assert_eq!(deep_get(&doc, "stages/7/id"), None);
    assert_eq!(deep_get(&doc, "stages/one/id"), None);
}

#[test]
fn empty_segments_are_ignored() {
    let doc = json!({"a": {"b": 1}});
    assert_eq!(deep_get(&doc, "a//b"), deep_get(&doc, "a/b"));
}

#[test]
fn set_creates_intermediate_objects() {
    let mut doc = json!({});
    deep_set(&mut doc, "client/device/serial", json!("emulator-5554"));
    assert_eq!(
        doc,
        json!({"client": {"device": {"serial": "emulator-5554"}}})
    );
}

#[test]
fn set_replaces_scalars_along_the_path() {
    let mut doc = json!({"client": 5});
    deep_set(&mut doc, "client/device", json!("adb"));
    assert_eq!(doc, json!({"client": {"device": "adb"}}));
}

#[test]
fn set_with_empty_key_leaves_document_untouched() {
    let mut doc = json!({"a": 1});
    deep_set(&mut doc, "", json!("x"));
    deep_set(&mut doc, "///", json!("x"));
    assert_eq!(doc, json!({"a": 1}));
}

#[test]
fn update_is_a_shallow_top_level_merge() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("doc.json");
    store::dump(&path, &json!({"a": 1, "b": {"x": 1}})).unwrap();

    let partial = json!({"b": 2, "c": 3});
    let Value::Object(partial) = partial else {
        unreachable!()
    };
    store::update(&path, &partial).unwrap();

    assert_eq!(store::load(&path).unwrap(), json!({"a": 1, "b": 2, "c": 3}));
}

#[test]
fn update_rejects_a_non_object_root() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("doc.json");
    store::dump(&path, &json!([1, 2, 3])).unwrap();

    let err = store::update(&path, &serde_json::Map::new()).unwrap_err();
    assert!(matches!(err, AutomgrError::ConfigError(_)));
}

fn key_segment() -> &'static str {
    "[a-z][a-z0-9_]{0,6}"
}

proptest! {
    /// Whatever path we set, getting it back returns the value we stored.
    #[test]
    fn set_then_get_roundtrips(segments in prop::collection::vec(key_segment(), 1..5), value in "[ -~]{0,16}") {
        let key = segments.join("/");
        let mut doc = json!({});
        deep_set(&mut doc, &key, Value::String(value.clone()));
        prop_assert_eq!(deep_get(&doc, &key), Some(&Value::String(value)));
    }
}
