// src/instance/resolver.rs

//! Logical-name to install-root resolution.

use std::path::PathBuf;

use tracing::debug;

use crate::config::ManagerConfig;
use crate::errors::{AutomgrError, Result};

/// Resolve the install root for `name`.
///
/// Order: explicit path, manager config override, then the package-manager
/// install layout under the home directory (`~/scoop/apps/<name>/current`).
/// An explicit path is taken on trust here; required-path validation catches
/// a bad one right after.
pub fn resolve_root(
    name: &str,
    explicit: Option<PathBuf>,
    config: &ManagerConfig,
) -> Result<PathBuf> {
    if let Some(path) = explicit {
        debug!(name, path = ?path, "install root given explicitly");
        return Ok(path);
    }

    if let Some(entry) = config.instance.get(name) {
        debug!(name, path = ?entry.path, "install root from manager config");
        return Ok(entry.path.clone());
    }

    let home = dirs::home_dir().ok_or_else(|| {
        AutomgrError::ConfigError("cannot determine the home directory".to_string())
    })?;
    let root = home.join("scoop").join("apps").join(name).join("current");
    if !root.exists() {
        return Err(AutomgrError::InstanceNotFound(name.to_string()));
    }
    debug!(name, path = ?root, "install root from package-manager layout");
    Ok(root)
}
