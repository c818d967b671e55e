// src/store/deep.rs

//! Slash-delimited deep access into JSON documents.
//!
//! A deep key like `"task/entry/name"` addresses `doc["task"]["entry"]["name"]`.
//! Empty segments are ignored, so `"a//b"` and `"a/b"` address the same field.

use serde_json::{Map, Value};

/// Look up a nested value. Array segments are accepted as numeric indices.
pub fn deep_get<'a>(doc: &'a Value, key: &str) -> Option<&'a Value> {
    let mut current = doc;
    for segment in key.split('/').filter(|s| !s.is_empty()) {
        current = match current {
            Value::Object(map) => map.get(segment)?,
            Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }
    Some(current)
}

/// Write a nested value, creating intermediate objects as needed.
///
/// Non-object values along the path are replaced by fresh objects; this
/// mirrors the overwrite-on-conflict behaviour callers expect from a patch
/// operation. An empty key leaves the document untouched.
pub fn deep_set(doc: &mut Value, key: &str, value: Value) {
    let segments: Vec<&str> = key.split('/').filter(|s| !s.is_empty()).collect();
    let Some((last, parents)) = segments.split_last() else {
        return;
    };

    let mut current = doc;
    for segment in parents {
        current = ensure_object(current)
            .entry(segment.to_string())
            .or_insert(Value::Null);
    }
    ensure_object(current).insert(last.to_string(), value);
}

fn ensure_object(slot: &mut Value) -> &mut Map<String, Value> {
    if !slot.is_object() {
        *slot = Value::Object(Map::new());
    }
    match slot {
        Value::Object(map) => map,
        _ => unreachable!("slot was just replaced with an object"),
    }
}
