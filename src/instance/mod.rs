// src/instance/mod.rs

//! Instance model: one named install of an automation runner application.
//!
//! - [`kind`] holds the tagged kind variants and their static path tables.
//! - [`resolver`] maps a logical name to an install root.

pub mod kind;
pub mod resolver;

pub use kind::{InstanceKind, KindLayout};

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::ManagerConfig;
use crate::errors::{AutomgrError, Result};

/// One installed automation runner application.
///
/// Constructed only through [`Instance::resolve`], which validates the
/// kind's enumerated required-path list, so every `Instance` in circulation
/// points at a usable install.
#[derive(Debug, Clone)]
pub struct Instance {
    name: String,
    root: PathBuf,
    kind: InstanceKind,
    backup_root: PathBuf,
}

impl Instance {
    /// Resolve and validate the instance called `name`.
    pub fn resolve(
        name: &str,
        explicit_path: Option<PathBuf>,
        config: &ManagerConfig,
    ) -> Result<Self> {
        let root = resolver::resolve_root(name, explicit_path, config)?;
        let kind = InstanceKind::for_name(name);
        let backup_root = config
            .settings
            .backup_root
            .clone()
            .or_else(default_backup_root)
            .ok_or_else(|| {
                AutomgrError::ConfigError(
                    "cannot determine a home directory for the backup root".to_string(),
                )
            })?;

        let instance = Self {
            name: name.to_string(),
            root,
            kind,
            backup_root,
        };
        instance.assert_paths_exist()?;
        debug!(name = %instance.name, root = ?instance.root, kind = ?instance.kind, "resolved instance");
        Ok(instance)
    }

    /// Check the enumerated list of paths this kind requires.
    fn assert_paths_exist(&self) -> Result<()> {
        let layout = self.kind.layout();

        let mut required: Vec<PathBuf> =
            vec![self.root.clone(), self.config_dir(), self.config_file()];
        for rel in layout.required {
            required.push(self.root.join(rel));
        }
        if let Some(exe) = layout.executable {
            required.push(self.root.join(exe));
        }

        for path in required {
            if !path.exists() {
                return Err(AutomgrError::ConfigError(format!(
                    "required path {} is missing; the install of '{}' is not ready",
                    path.display(),
                    self.name,
                )));
            }
        }
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn kind(&self) -> InstanceKind {
        self.kind
    }

    pub fn config_dir(&self) -> PathBuf {
        self.root.join("config")
    }

    /// Canonical configuration file for this instance's kind.
    pub fn config_file(&self) -> PathBuf {
        self.root.join(self.kind.layout().config_file)
    }

    /// Runner executable, when the kind defines one.
    pub fn executable(&self) -> Option<PathBuf> {
        self.kind.layout().executable.map(|exe| self.root.join(exe))
    }

    /// Per-instance snapshot directory (created on demand by [`crate::backup`]).
    pub fn backup_dir(&self) -> PathBuf {
        self.backup_root.join(&self.name)
    }
}

fn default_backup_root() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".automgr"))
}
