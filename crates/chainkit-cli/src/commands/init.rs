//! `chainkit init`: write a template `chainkit.json`.

use chainkit_adapters::LocalFilesystem;
use chainkit_core::{
    application::ports::Filesystem,
    domain::{CONFIG_FILE_NAME, ProjectConfig},
    error::ChainkitError,
};
use tracing::instrument;

use crate::{
    cli::{GlobalArgs, InitArgs},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Write the template config into the project directory.
///
/// The configured solidity version and package manager replace the
/// template's.
#[instrument(skip_all, fields(force = args.force))]
pub async fn execute(
    args: InitArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let dir = global.project_dir();
    let path = dir.join(CONFIG_FILE_NAME);
    let fs = LocalFilesystem::new();

    if fs.exists(&path).await && !args.force {
        return Err(CliError::ConfigExists { path });
    }

    let mut template = ProjectConfig::template();
    template.solidity_version = config.defaults.solidity_version.clone();
    template.packman = config.package_manager()?;

    let text = template
        .to_json_pretty()
        .map_err(ChainkitError::from)
        .with_cli_context(|| "serialising the project template")?;

    fs.create_dir_all(&dir)
        .await
        .with_cli_context(|| format!("creating {}", dir.display()))?;
    fs.write_file(&path, &text)
        .await
        .with_cli_context(|| format!("writing {}", path.display()))?;

    output.json(&serde_json::json!({ "path": path }))?;
    output.success(&format!("Wrote {}", path.display()))?;
    output.info("Edit contractImports, then run 'chainkit assemble'")?;
    Ok(())
}
