// src/ops/transfer.rs

//! Export and import of instance configuration documents.

use std::fs;
use std::path::PathBuf;

use serde_json::Value;
use tracing::info;

use crate::backup;
use crate::errors::{AutomgrError, Result};
use crate::instance::Instance;
use crate::store;

/// Where an exported snapshot should go.
#[derive(Debug, Clone)]
pub enum ExportTarget {
    /// Timestamped file in the instance's backup directory.
    BackupDir,
    /// Explicit file path.
    File(PathBuf),
    /// No file; hand the parsed document back instead.
    Document,
}

/// Snapshot the canonical config file.
///
/// Returns the parsed document for [`ExportTarget::Document`], `None`
/// otherwise.
pub fn export(instance: &Instance, target: ExportTarget) -> Result<Option<Value>> {
    let source = instance.config_file();
    match target {
        ExportTarget::Document => Ok(Some(store::load(&source)?)),
        ExportTarget::File(path) => {
            fs::copy(&source, &path)?;
            info!(from = ?source, to = ?path, "exported config snapshot");
            Ok(None)
        }
        ExportTarget::BackupDir => {
            let dir = instance.backup_dir();
            fs::create_dir_all(&dir)?;
            let path = dir.join(backup::snapshot_name());
            fs::copy(&source, &path)?;
            info!(from = ?source, to = ?path, "exported config snapshot");
            Ok(None)
        }
    }
}

/// Where an imported document comes from.
#[derive(Debug, Clone)]
pub enum ImportSource {
    File(PathBuf),
    /// Most recent snapshot in the instance's backup directory.
    LatestBackup,
}

/// Merge a previously exported document back into the canonical config file.
///
/// With `keys` empty, the source document's top-level entries shallow-
/// overwrite the target. Otherwise only the named slash-delimited keys are
/// copied, at the same deep location; a key missing from the source is an
/// error and nothing is written.
pub fn import(instance: &Instance, source: ImportSource, keys: &[String]) -> Result<()> {
    let source_path = match source {
        ImportSource::File(path) => path,
        ImportSource::LatestBackup => backup::list_snapshots(&instance.backup_dir())?
            .into_iter()
            .next()
            .ok_or_else(|| {
                AutomgrError::ConfigError(format!(
                    "no backups found for instance '{}'",
                    instance.name()
                ))
            })?,
    };

    let keys = split_keys(keys);
    let source_doc = store::load(&source_path)?;
    let target_path = instance.config_file();

    if keys.is_empty() {
        let Value::Object(map) = source_doc else {
            return Err(AutomgrError::ConfigError(format!(
                "{} is not a JSON object at the top level",
                source_path.display()
            )));
        };
        store::update(&target_path, &map)?;
    } else {
        let mut target_doc = store::load(&target_path)?;
        for key in &keys {
            let value = store::deep_get(&source_doc, key)
                .cloned()
                .ok_or_else(|| AutomgrError::KeyNotFound(key.clone()))?;
            store::deep_set(&mut target_doc, key, value);
        }
        store::dump(&target_path, &target_doc)?;
    }

    info!(from = ?source_path, to = ?target_path, keys = keys.len(), "imported config document");
    Ok(())
}

/// Selectors may arrive comma-joined from the CLI; flatten them.
fn split_keys(keys: &[String]) -> Vec<String> {
    keys.iter()
        .flat_map(|k| k.split(','))
        .map(|k| k.trim().to_string())
        .filter(|k| !k.is_empty())
        .collect()
}
