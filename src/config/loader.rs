// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::model::ManagerConfig;
use crate::errors::Result;

/// Load a manager configuration file from a given path.
///
/// The file must exist; use [`load_or_default`] when the config is optional
/// (which it is for the CLI).
pub fn load_from_path(path: impl AsRef<Path>) -> Result<ManagerConfig> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let config: ManagerConfig = toml::from_str(&contents)?;

    Ok(config)
}

/// Load the manager configuration, falling back to defaults when the file
/// does not exist.
///
/// This is the recommended entry point for the rest of the application: the
/// config is an optional convenience, not a requirement.
pub fn load_or_default(path: impl AsRef<Path>) -> Result<ManagerConfig> {
    let path = path.as_ref();
    if !path.exists() {
        debug!(path = ?path, "no manager config file; using defaults");
        return Ok(ManagerConfig::default());
    }
    load_from_path(path)
}

/// Helper to resolve the default config path.
///
/// Currently this just returns `Automgr.toml` in the current working
/// directory; it exists so config discovery can later grow (env var,
/// home-directory fallback) without touching callers.
pub fn default_config_path() -> PathBuf {
    PathBuf::from("Automgr.toml")
}
