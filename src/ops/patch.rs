// src/ops/patch.rs

//! Deep-key patching of JSON config files.

use std::path::PathBuf;

use serde_json::Value;
use tracing::info;

use crate::errors::{AutomgrError, Result};
use crate::instance::Instance;
use crate::store;

/// Apply `k/e/y=value` assignments to a config file.
///
/// `file` is resolved relative to the instance root and must already exist;
/// when absent, the canonical config file is patched. With `must_have_key`,
/// an assignment whose key does not already exist is rejected before
/// anything is written. Values are stored as JSON strings.
pub fn patch(
    instance: &Instance,
    file: Option<PathBuf>,
    parts: &[String],
    must_have_key: bool,
) -> Result<()> {
    if parts.is_empty() {
        return Ok(());
    }

    let path = match file {
        None => instance.config_file(),
        Some(rel) => {
            let path = instance.root().join(rel);
            if !path.exists() {
                return Err(AutomgrError::ConfigError(format!(
                    "patch target {} not found",
                    path.display()
                )));
            }
            path
        }
    };

    let mut doc = store::load(&path)?;
    for part in parts {
        let (key, value) = part.split_once('=').ok_or_else(|| {
            AutomgrError::ConfigError(format!(
                "invalid patch assignment '{part}' (expected k/e/y=value)"
            ))
        })?;
        if must_have_key && store::deep_get(&doc, key).is_none() {
            return Err(AutomgrError::KeyNotFound(key.to_string()));
        }
        store::deep_set(&mut doc, key, Value::String(value.to_string()));
    }
    store::dump(&path, &doc)?;

    info!(path = ?path, assignments = parts.len(), "patched config file");
    Ok(())
}
