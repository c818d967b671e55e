// src/ops/mod.rs

//! Instance-level operations behind the CLI subcommands.
//!
//! - [`transfer`] covers export and import of configuration documents.
//! - [`patch`] applies deep-key assignments to a config file.
//! - [`run`] drives the bounded supervisor and desktop integration.

pub mod patch;
pub mod run;
pub mod transfer;

pub use patch::patch;
pub use run::{auto, open_root};
pub use transfer::{ExportTarget, ImportSource, export, import};
