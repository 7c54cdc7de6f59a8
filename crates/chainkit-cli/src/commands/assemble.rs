//! `chainkit assemble`: build the project described by `chainkit.json`.

use std::path::Path;
use std::sync::Arc;

use chainkit_adapters::{
    LocalFilesystem, MemoryFilesystem, RecordingProcessRunner, SystemProcessRunner,
};
use chainkit_core::{
    application::{
        ports::Filesystem,
        services::{AssembleOptions, AssembleReport, Assembler},
    },
    domain::{CONFIG_FILE_NAME, ProjectConfig},
    error::ChainkitError,
};
use tracing::{info, instrument};

use crate::{
    cli::{AssembleArgs, GlobalArgs},
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

#[instrument(skip_all, fields(dry_run = args.dry_run, offline = args.offline))]
pub async fn execute(args: AssembleArgs, global: GlobalArgs, output: OutputManager) -> CliResult<()> {
    let dir = global.project_dir();
    let project = load_project(&dir).await?;
    let options = AssembleOptions {
        yes: args.yes,
        offline: args.offline,
    };

    info!(
        imports = project.contract_imports.len(),
        packman = %project.packman,
        "Loaded project config"
    );

    if project.contract_imports.is_empty() {
        output.warning("contractImports is empty; only tooling will be set up")?;
    }

    if args.dry_run {
        return dry_run(&dir, &project, options, &output).await;
    }

    output.header(&format!("Assembling {}", dir.display()))?;
    let pb = output.spinner("Writing contracts and installing packages...");
    let result = Assembler::new(
        Arc::new(LocalFilesystem::new()),
        Arc::new(SystemProcessRunner::new()),
    )
    .assemble(&dir, &project, options)
    .await;
    pb.finish_and_clear();

    let report = result.with_cli_context(|| "assembling project")?;
    print_report(&report, &output)?;
    output.success("Project assembled")?;
    Ok(())
}

/// Run the assembly against memory and report what would happen.
async fn dry_run(
    dir: &Path,
    project: &ProjectConfig,
    options: AssembleOptions,
    output: &OutputManager,
) -> CliResult<()> {
    let fs = MemoryFilesystem::new();
    let runner = RecordingProcessRunner::new();

    // `<packman> init` is not executed, so stand in for its manifest.
    fs.create_dir_all(dir).await?;
    fs.write_file(&dir.join("package.json"), "{}").await?;

    let report = Assembler::new(Arc::new(fs.clone()), Arc::new(runner.clone()))
        .assemble(dir, project, options)
        .await?;

    let files: Vec<String> = fs
        .list_files()
        .iter()
        .map(|path| path.strip_prefix(dir).unwrap_or(path.as_path()).display().to_string())
        .collect();
    let commands = runner.command_lines();

    output.json(&serde_json::json!({
        "files": files,
        "commands": commands,
        "dependencies": report.dependencies,
        "devDependencies": report.dev_dependencies,
    }))?;

    output.header("Files that would be written:")?;
    output.list(&files)?;
    output.header("Commands that would run:")?;
    output.list(&commands)?;
    output.info("Dry run: nothing was written")?;
    Ok(())
}

async fn load_project(dir: &Path) -> CliResult<ProjectConfig> {
    let path = dir.join(CONFIG_FILE_NAME);
    let fs = LocalFilesystem::new();
    if !fs.exists(&path).await {
        return Err(CliError::ProjectConfigMissing { path });
    }

    let text = fs
        .read_to_string(&path)
        .await
        .with_cli_context(|| format!("reading {}", path.display()))?;
    ProjectConfig::from_json(&text)
        .map_err(ChainkitError::from)
        .with_cli_context(|| format!("parsing {}", path.display()))
}

fn print_report(report: &AssembleReport, output: &OutputManager) -> CliResult<()> {
    output.json(&serde_json::json!({
        "contractDependencies": report.contract_dependencies,
        "dependencies": report.dependencies,
        "devDependencies": report.dev_dependencies,
    }))?;

    if !report.contract_dependencies.is_empty() {
        output.header("Protocol packages:")?;
        output.list(&report.contract_dependencies)?;
    }
    output.print(&format!(
        "Installed {} dependencies and {} dev dependencies",
        report.dependencies.len(),
        report.dev_dependencies.len()
    ))?;
    Ok(())
}
