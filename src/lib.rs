// src/lib.rs

pub mod backup;
pub mod cli;
pub mod config;
pub mod errors;
pub mod instance;
pub mod lifetime;
pub mod logging;
pub mod ops;
pub mod store;
pub mod supervise;

use tracing::debug;

use crate::cli::{CliArgs, InstanceCommand};
use crate::errors::{AutomgrError, Result};
use crate::instance::Instance;
use crate::lifetime::Lifetime;
use crate::ops::{ExportTarget, ImportSource};

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - manager config loading
/// - instance resolution (explicit path, config override, discovery)
/// - the subcommand implementations in [`ops`]
pub async fn run(args: CliArgs) -> Result<()> {
    let manager_cfg = config::load_or_default(&args.config)?;
    let instance = Instance::resolve(&args.name, args.path.clone(), &manager_cfg)?;

    match args.command {
        InstanceCommand::Export { no_file, path } => {
            let target = if no_file {
                ExportTarget::Document
            } else if let Some(path) = path {
                ExportTarget::File(path)
            } else {
                ExportTarget::BackupDir
            };
            if let Some(doc) = ops::export(&instance, target)? {
                println!("{}", serde_json::to_string_pretty(&doc)?);
            }
        }

        InstanceCommand::Import {
            path,
            latest_backup,
            key,
        } => {
            let source = if latest_backup {
                ImportSource::LatestBackup
            } else if let Some(path) = path {
                ImportSource::File(path)
            } else {
                return Err(AutomgrError::ConfigError(
                    "import needs --path or --latest-backup".to_string(),
                ));
            };
            ops::import(&instance, source, &key)?;
        }

        InstanceCommand::Auto {
            lifetime,
            capture_output,
        } => {
            let lifetime: Lifetime = lifetime.parse()?;
            if let Some((stdout, stderr)) = ops::auto(&instance, &lifetime, capture_output).await? {
                print!("{stdout}");
                print!("{stderr}");
            }
        }

        InstanceCommand::Patch {
            path,
            must_have_key,
            parts,
        } => {
            ops::patch(&instance, path, &parts, must_have_key)?;
        }

        InstanceCommand::Op => {
            ops::open_root(&instance)?;
        }

        InstanceCommand::Backups { keep } => {
            let dir = instance.backup_dir();
            if let Some(keep) = keep {
                let removed = backup::rotate(&dir, keep)?;
                debug!(removed, "snapshot rotation done");
            }
            for snapshot in backup::list_snapshots(&dir)? {
                println!("{}", snapshot.display());
            }
        }
    }

    Ok(())
}
