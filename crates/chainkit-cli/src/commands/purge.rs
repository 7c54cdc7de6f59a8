//! `chainkit purge`: empty the project directory.

use chainkit_adapters::LocalFilesystem;
use chainkit_core::application::ports::Filesystem;
use tracing::{info, instrument};

use crate::{
    cli::{GlobalArgs, PurgeArgs},
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

#[instrument(skip_all, fields(yes = args.yes))]
pub async fn execute(args: PurgeArgs, global: GlobalArgs, output: OutputManager) -> CliResult<()> {
    let dir = global.project_dir();
    let fs = LocalFilesystem::new();

    if !fs.exists(&dir).await {
        return Err(CliError::InvalidInput {
            message: format!("{} does not exist", dir.display()),
            source: None,
        });
    }

    let shown = std::path::absolute(&dir).unwrap_or_else(|_| dir.clone());
    if !args.yes && !confirm(&format!("Delete everything in {}?", shown.display()))? {
        return Err(CliError::Cancelled);
    }

    fs.empty_dir(&dir)
        .await
        .with_cli_context(|| format!("emptying {}", dir.display()))?;

    info!(dir = %shown.display(), "Purged project directory");
    output.success(&format!("Emptied {}", shown.display()))?;
    Ok(())
}

#[cfg(feature = "interactive")]
fn confirm(prompt: &str) -> CliResult<bool> {
    dialoguer::Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .map_err(|e| CliError::InvalidInput {
            message: format!("confirmation prompt failed: {e}"),
            source: Some(Box::new(e)),
        })
}

#[cfg(not(feature = "interactive"))]
fn confirm(_prompt: &str) -> CliResult<bool> {
    Err(CliError::FeatureNotAvailable {
        feature: "interactive",
    })
}
