// src/backup.rs

//! Snapshot naming, listing and rotation for exported configuration files.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use chrono::Local;
use tracing::{debug, info};

use crate::errors::Result;

/// Filename for a snapshot taken now: `YYYYmmddHHMMSS.json`.
pub fn snapshot_name() -> String {
    format!("{}.json", Local::now().format("%Y%m%d%H%M%S"))
}

/// List the `.json` snapshots in `dir`, most recently modified first.
///
/// The directory is created when missing, so a fresh install lists as empty
/// instead of erroring.
pub fn list_snapshots(dir: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir)?;

    let mut entries: Vec<(PathBuf, SystemTime)> = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some("json") {
            continue;
        }
        let modified = entry.metadata()?.modified()?;
        entries.push((path, modified));
    }

    entries.sort_by(|a, b| b.1.cmp(&a.1));
    Ok(entries.into_iter().map(|(path, _)| path).collect())
}

/// Delete everything but the `keep` most recent snapshots.
///
/// Returns how many files were removed.
pub fn rotate(dir: &Path, keep: usize) -> Result<usize> {
    let snapshots = list_snapshots(dir)?;

    let mut removed = 0;
    for stale in snapshots.iter().skip(keep) {
        debug!(path = ?stale, "removing stale snapshot");
        fs::remove_file(stale)?;
        removed += 1;
    }

    if removed > 0 {
        info!(dir = ?dir, kept = keep.min(snapshots.len()), removed, "rotated snapshot directory");
    }
    Ok(removed)
}
