// src/config/mod.rs

//! The manager's own configuration (`Automgr.toml`).
//!
//! Entirely optional: a missing file means defaults everywhere. The config
//! can pin instance names to explicit install roots and relocate the backup
//! root.

pub mod loader;
pub mod model;

pub use loader::{default_config_path, load_from_path, load_or_default};
pub use model::{InstanceOverride, ManagerConfig, SettingsSection};
