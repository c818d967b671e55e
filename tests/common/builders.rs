#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use automgr::config::{ManagerConfig, SettingsSection};
use automgr::instance::Instance;

/// A scratch install tree for one instance, plus a sibling backup root.
///
/// Lays the files out the way the real applications do, so `Instance::resolve`
/// accepts it without any special-casing in the code under test.
pub struct InstanceTree {
    pub name: String,
    pub root: PathBuf,
    pub backup_root: PathBuf,
}

impl InstanceTree {
    /// CLI-runner layout: interface definition, daemon executable, pi config.
    pub fn pi_cli(base: &Path, name: &str) -> Self {
        let root = base.join(name);
        fs::create_dir_all(root.join("config")).unwrap();
        fs::write(root.join("interface.json"), "{}").unwrap();
        fs::write(root.join("MaaPiCli.exe"), "").unwrap();
        fs::write(
            root.join("config/maa_pi_config.json"),
            r#"{"task": {"entry": "Daily"}, "mode": "fast"}"#,
        )
        .unwrap();

        Self {
            name: name.to_string(),
            root,
            backup_root: base.join("backups"),
        }
    }

    /// GUI layout: config only, no runner executable. The name is fixed to
    /// `maa` because that is what selects the GUI kind.
    pub fn gui(base: &Path) -> Self {
        let root = base.join("maa");
        fs::create_dir_all(root.join("config")).unwrap();
        fs::write(
            root.join("config/gui.json"),
            r#"{"Configurations": {"Default": {"theme": "dark"}}}"#,
        )
        .unwrap();

        Self {
            name: "maa".to_string(),
            root,
            backup_root: base.join("backups"),
        }
    }

    /// Manager config pointing the backup root at this tree's scratch dir.
    pub fn manager_config(&self) -> ManagerConfig {
        ManagerConfig {
            settings: SettingsSection {
                backup_root: Some(self.backup_root.clone()),
            },
            instance: Default::default(),
        }
    }

    pub fn resolve(&self) -> Instance {
        Instance::resolve(&self.name, Some(self.root.clone()), &self.manager_config())
            .expect("scratch tree should resolve")
    }

    pub fn config_file(&self) -> PathBuf {
        self.resolve().config_file()
    }
}
