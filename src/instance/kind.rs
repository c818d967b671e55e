// src/instance/kind.rs

//! Instance kinds and their static path tables.

/// The two supported runner application layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstanceKind {
    /// CLI-driven runner: interface definition plus a daemon-mode executable.
    PiCli,
    /// Desktop GUI build: config only, no directly runnable executable.
    Gui,
}

/// Path layout for one instance kind, relative to the install root.
#[derive(Debug, Clone, Copy)]
pub struct KindLayout {
    /// Canonical configuration file.
    pub config_file: &'static str,
    /// Runner executable, when the kind has one.
    pub executable: Option<&'static str>,
    /// Additional files that must exist for the install to be usable.
    pub required: &'static [&'static str],
}

impl InstanceKind {
    /// Select the kind for a logical instance name.
    ///
    /// The historical `maa` package ships the GUI layout; every other
    /// package uses the CLI runner layout.
    pub fn for_name(name: &str) -> Self {
        if name == "maa" {
            InstanceKind::Gui
        } else {
            InstanceKind::PiCli
        }
    }

    pub fn layout(&self) -> KindLayout {
        match self {
            InstanceKind::PiCli => KindLayout {
                config_file: "config/maa_pi_config.json",
                executable: Some("MaaPiCli.exe"),
                required: &["interface.json"],
            },
            InstanceKind::Gui => KindLayout {
                config_file: "config/gui.json",
                executable: None,
                required: &[],
            },
        }
    }
}
