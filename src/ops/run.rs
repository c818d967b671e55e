// src/ops/run.rs

//! Bounded execution of an instance's runner, plus desktop integration.

use tracing::info;

use crate::errors::{AutomgrError, Result};
use crate::instance::Instance;
use crate::lifetime::Lifetime;
use crate::supervise;

/// Run the instance's executable in daemon mode under a lifetime budget.
///
/// Kinds without a runner executable cannot be driven this way; that is a
/// configuration error, not a supervision failure.
pub async fn auto(
    instance: &Instance,
    lifetime: &Lifetime,
    capture_output: bool,
) -> Result<Option<(String, String)>> {
    let executable = instance.executable().ok_or_else(|| {
        AutomgrError::ConfigError(format!(
            "instance '{}' has no runner executable to supervise",
            instance.name()
        ))
    })?;

    let command = vec![executable.to_string_lossy().into_owned(), "-d".to_string()];
    info!(instance = %instance.name(), command = ?command, "starting bounded run");
    supervise::run_bounded(&command, lifetime, capture_output).await
}

/// Open the instance root in the system file manager.
pub fn open_root(instance: &Instance) -> Result<()> {
    open::that(instance.root())?;
    Ok(())
}
