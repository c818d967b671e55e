// src/config/model.rs

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Deserialize;

/// Top-level manager configuration.
///
/// ```toml
/// [settings]
/// backup_root = "/srv/automgr-backups"
///
/// [instance.mychecker]
/// path = "/opt/runners/mychecker"
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ManagerConfig {
    #[serde(default)]
    pub settings: SettingsSection,

    #[serde(default)]
    pub instance: BTreeMap<String, InstanceOverride>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SettingsSection {
    /// Root directory for configuration snapshots (default `~/.automgr`).
    pub backup_root: Option<PathBuf>,
}

/// Per-name install root override.
#[derive(Debug, Clone, Deserialize)]
pub struct InstanceOverride {
    pub path: PathBuf,
}
