// src/store/mod.rs

//! JSON document store.
//!
//! Load/dump whole documents, shallow-merge partial documents at the top
//! level, and address nested fields with slash-delimited deep keys via
//! [`deep`].

pub mod deep;

pub use deep::{deep_get, deep_set};

use std::fs;
use std::path::Path;

use serde_json::{Map, Value};

use crate::errors::{AutomgrError, Result};

/// Load a JSON document from disk.
pub fn load(path: &Path) -> Result<Value> {
    let contents = fs::read_to_string(path)?;
    let doc: Value = serde_json::from_str(&contents)?;
    Ok(doc)
}

/// Write a document back to disk, pretty-printed.
pub fn dump(path: &Path, doc: &Value) -> Result<()> {
    let text = serde_json::to_string_pretty(doc)?;
    fs::write(path, text)?;
    Ok(())
}

/// Shallow-merge `partial` into the document stored at `path`.
///
/// Top-level keys of `partial` overwrite the stored document's keys; nested
/// precision is the deep-key utilities' job, not this one's.
pub fn update(path: &Path, partial: &Map<String, Value>) -> Result<()> {
    let mut doc = load(path)?;
    let Value::Object(map) = &mut doc else {
        return Err(AutomgrError::ConfigError(format!(
            "{} is not a JSON object at the top level",
            path.display()
        )));
    };
    for (key, value) in partial {
        map.insert(key.clone(), value.clone());
    }
    dump(path, &doc)
}
