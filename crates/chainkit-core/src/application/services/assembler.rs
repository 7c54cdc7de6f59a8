//! Assembler - builds a complete project from `chainkit.json`.
//!
//! Steps run strictly in order:
//! 1. Generate contract imports (`ProtocolCoordinator`)
//! 2. Truffle files, `.env` and `tsconfig.json`
//! 3. `<packman> init`
//! 4. `package.json` scripts and entry point
//! 5. Git files and `git init`
//! 6. Dev tooling files and dev dependency install
//! 7. Dependency install

use std::path::Path;
use std::sync::Arc;

use futures::future::try_join_all;
use serde_json::{Map, Value, json};
use tracing::{info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{CommandSpec, Filesystem, ProcessRunner},
        services::ProtocolCoordinator,
    },
    domain::{DependencySet, GeneratedFile, ProjectConfig, templates::configs, templates::contracts},
    error::ChainkitResult,
};

const PACKAGE_JSON: &str = "package.json";
const MOCHA_TEST_SCRIPT: &str = "mocha -r ts-node/register tests/tests.test.ts --timeout 900000";
const PACKAGE_MAIN: &str = "/lib/index.ts";

const BASE_DEV_DEPENDENCIES: [&str; 3] = ["typescript", "ts-node", "@types/node"];
const GANACHE_DEV_DEPENDENCIES: [&str; 1] = ["ganache-cli"];
const ESLINT_DEV_DEPENDENCIES: [&str; 3] = [
    "eslint",
    "@typescript-eslint/eslint-plugin",
    "@typescript-eslint/parser",
];
const MOCHA_DEV_DEPENDENCIES: [&str; 4] = ["mocha", "@types/mocha", "chai", "@types/chai"];
const BASE_DEPENDENCIES: [&str; 2] = ["web3", "dotenv"];
const HD_WALLET_PROVIDER: &str = "@truffle/hdwallet-provider";

/// Flags forwarded to the package manager.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AssembleOptions {
    /// Pass `-y` to `init`.
    pub yes: bool,
    /// Pass `--offline` to `add`.
    pub offline: bool,
}

/// What an assembly installed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssembleReport {
    pub contract_dependencies: Vec<String>,
    pub dependencies: Vec<String>,
    pub dev_dependencies: Vec<String>,
}

pub struct Assembler {
    fs: Arc<dyn Filesystem>,
    runner: Arc<dyn ProcessRunner>,
}

impl Assembler {
    pub fn new(fs: Arc<dyn Filesystem>, runner: Arc<dyn ProcessRunner>) -> Self {
        Self { fs, runner }
    }

    /// Assemble the project described by `config` inside `dir`.
    ///
    /// Any filesystem error or non-zero command exit aborts the assembly.
    #[instrument(skip_all, fields(dir = %dir.display(), packman = config.packman.program()))]
    pub async fn assemble(
        &self,
        dir: &Path,
        config: &ProjectConfig,
        options: AssembleOptions,
    ) -> ChainkitResult<AssembleReport> {
        config.validate()?;

        let contract_dependencies = ProtocolCoordinator::new(Arc::clone(&self.fs))
            .run(
                dir,
                &config.contract_imports,
                &config.solidity_version,
                config.default_net,
            )
            .await?;

        self.write_files(dir, &project_files(config)).await?;

        let mut init = CommandSpec::new(config.packman.program(), dir).arg("init");
        if options.yes {
            init = init.arg("-y");
        }
        self.run_checked(&init).await?;

        self.update_manifest(dir, config.mocha).await?;

        if config.git {
            self.write_files(dir, &git_files()).await?;
            self.run_checked(&CommandSpec::new("git", dir).arg("init"))
                .await?;
        }

        let (tooling, dev_dependencies) = dev_tooling(config);
        if config.mocha {
            self.fs.create_dir_all(&dir.join("tests")).await?;
        }
        self.write_files(dir, &tooling).await?;
        self.install(dir, config, &dev_dependencies, true, options.offline)
            .await?;

        let dependencies = dependencies(config, &contract_dependencies);
        self.install(dir, config, &dependencies, false, options.offline)
            .await?;

        info!(
            dependencies = dependencies.len(),
            dev_dependencies = dev_dependencies.len(),
            "Project assembled"
        );

        Ok(AssembleReport {
            contract_dependencies,
            dependencies,
            dev_dependencies,
        })
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    async fn write_files(&self, dir: &Path, files: &[GeneratedFile]) -> ChainkitResult<()> {
        try_join_all(files.iter().map(|file| {
            let path = dir.join(&file.path);
            async move { self.fs.write_file(&path, &file.content).await }
        }))
        .await?;
        Ok(())
    }

    async fn run_checked(&self, command: &CommandSpec) -> ChainkitResult<()> {
        info!(command = %command, "Running");
        let status = self.runner.run(command).await?;
        if !status.success() {
            return Err(ApplicationError::CommandFailed {
                command: command.to_string(),
                code: status.code,
            }
            .into());
        }
        Ok(())
    }

    async fn install(
        &self,
        dir: &Path,
        config: &ProjectConfig,
        packages: &[String],
        dev: bool,
        offline: bool,
    ) -> ChainkitResult<()> {
        let mut command = CommandSpec::new(config.packman.program(), dir)
            .arg("add")
            .args(packages.iter().cloned());
        if dev {
            command = command.arg("-D");
        }
        if offline {
            command = command.arg("--offline");
        }
        self.run_checked(&command).await
    }

    /// Ensure `scripts.tsc`, optionally `scripts.test`, and set `main`.
    async fn update_manifest(&self, dir: &Path, mocha: bool) -> ChainkitResult<()> {
        let path = dir.join(PACKAGE_JSON);
        let text = self.fs.read_to_string(&path).await?;
        let updated = mutate_manifest(&text, mocha).map_err(|reason| {
            ApplicationError::ManifestError {
                path: path.clone(),
                reason,
            }
        })?;
        self.fs.write_file(&path, &updated).await
    }
}

// ── Pure helpers ─────────────────────────────────────────────────────────────

fn project_files(config: &ProjectConfig) -> Vec<GeneratedFile> {
    vec![
        GeneratedFile::new(
            "contracts/Migrations.sol",
            contracts::truffle_migrations(&config.solidity_version),
        ),
        GeneratedFile::new(
            "migrations/1_initial_migration.js",
            configs::initial_migration(),
        ),
        GeneratedFile::new(
            "truffle-config.js",
            configs::truffle_config(&config.solidity_version, &config.contract_write_dir),
        ),
        GeneratedFile::new(".env", configs::dotenv(&config.eth_node_url)),
        GeneratedFile::new("tsconfig.json", configs::tsconfig()),
    ]
}

fn git_files() -> Vec<GeneratedFile> {
    vec![
        GeneratedFile::new(".gitignore", configs::git_ignore()),
        GeneratedFile::new(".gitattributes", configs::git_attributes()),
    ]
}

/// Tooling files to write and the dev dependencies to install.
fn dev_tooling(config: &ProjectConfig) -> (Vec<GeneratedFile>, Vec<String>) {
    let mut files = Vec::new();
    let mut packages: DependencySet = BASE_DEV_DEPENDENCIES.into_iter().collect();

    if config.ganache {
        files.push(GeneratedFile::new("fork-chain.js", configs::fork_chain()));
        packages.extend(GANACHE_DEV_DEPENDENCIES);
    }
    if config.eslint {
        files.push(GeneratedFile::new(".eslintignore", configs::eslint_ignore()));
        files.push(GeneratedFile::new(".eslintrc", configs::eslint_rc()));
        packages.extend(ESLINT_DEV_DEPENDENCIES);
    }
    if config.mocha {
        files.push(GeneratedFile::new(
            "tests/tests.test.ts",
            configs::mocha_test_scaffold(),
        ));
        packages.extend(MOCHA_DEV_DEPENDENCIES);
    }
    packages.extend(&config.added_dev_dependencies);

    (files, packages.into_vec())
}

fn dependencies(config: &ProjectConfig, contract_dependencies: &[String]) -> Vec<String> {
    let mut packages: DependencySet = BASE_DEPENDENCIES.into_iter().collect();
    if !config.omit_truffle_hd_wallet_provider {
        packages.insert(HD_WALLET_PROVIDER);
    }
    packages.extend(&config.added_dependencies);
    packages.extend(contract_dependencies);
    packages.into_vec()
}

fn mutate_manifest(text: &str, mocha: bool) -> Result<String, String> {
    let mut manifest: Value = serde_json::from_str(text).map_err(|e| e.to_string())?;
    let object = manifest
        .as_object_mut()
        .ok_or_else(|| "expected a JSON object".to_string())?;

    let scripts = object
        .entry("scripts")
        .or_insert_with(|| Value::Object(Map::new()));
    if !scripts.is_object() {
        *scripts = Value::Object(Map::new());
    }
    if let Some(scripts) = scripts.as_object_mut() {
        scripts.insert("tsc".into(), json!("tsc"));
        if mocha {
            scripts.insert("test".into(), json!(MOCHA_TEST_SCRIPT));
        }
    }
    object.insert("main".into(), json!(PACKAGE_MAIN));

    serde_json::to_string_pretty(&manifest).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{
        CommandStatus,
        output::{MockFilesystem, MockProcessRunner},
    };
    use std::sync::Mutex;

    fn config() -> ProjectConfig {
        ProjectConfig {
            contract_imports: Vec::new(),
            added_dependencies: vec!["express".into(), "web3".into()],
            added_dev_dependencies: vec!["@types/express".into()],
            ..ProjectConfig::template()
        }
    }

    #[test]
    fn manifest_gains_scripts_and_main() {
        let updated = mutate_manifest(r#"{"name":"app","scripts":{"start":"node ."}}"#, true).unwrap();
        let value: Value = serde_json::from_str(&updated).unwrap();
        assert_eq!(value["scripts"]["start"], "node .");
        assert_eq!(value["scripts"]["tsc"], "tsc");
        assert_eq!(value["scripts"]["test"], MOCHA_TEST_SCRIPT);
        assert_eq!(value["main"], "/lib/index.ts");
    }

    #[test]
    fn manifest_without_scripts_gets_tsc_only() {
        let updated = mutate_manifest(r#"{"name":"app"}"#, false).unwrap();
        let value: Value = serde_json::from_str(&updated).unwrap();
        assert_eq!(value["scripts"], json!({"tsc": "tsc"}));
    }

    #[test]
    fn manifest_must_be_an_object() {
        assert!(mutate_manifest("[]", false).is_err());
        assert!(mutate_manifest("not json", false).is_err());
    }

    #[test]
    fn dependencies_are_deduplicated() {
        let deps = dependencies(&config(), &["@bancor/sdk".to_string(), "web3".to_string()]);
        assert_eq!(
            deps,
            vec![
                "web3",
                "dotenv",
                "@truffle/hdwallet-provider",
                "express",
                "@bancor/sdk"
            ]
        );
    }

    #[test]
    fn dev_tooling_follows_flags() {
        let config = ProjectConfig {
            ganache: false,
            eslint: false,
            mocha: true,
            ..config()
        };
        let (files, packages) = dev_tooling(&config);
        assert_eq!(files.len(), 1);
        assert!(packages.contains(&"chai".to_string()));
        assert!(!packages.contains(&"eslint".to_string()));
        assert_eq!(packages.last().map(String::as_str), Some("@types/express"));
    }

    #[tokio::test]
    async fn runs_commands_in_order_and_fails_on_nonzero_exit() {
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file().returning(|_, _| Ok(()));
        fs.expect_read_to_string()
            .returning(|_| Ok(r#"{"name":"app"}"#.to_string()));

        let seen = Arc::new(Mutex::new(Vec::new()));
        let log = Arc::clone(&seen);
        let mut runner = MockProcessRunner::new();
        runner.expect_run().returning(move |command| {
            log.lock().unwrap().push(command.to_string());
            let code = if command.program == "git" { 128 } else { 0 };
            Ok(CommandStatus::from_code(code))
        });

        let assembler = Assembler::new(Arc::new(fs), Arc::new(runner));
        let err = assembler
            .assemble(Path::new("/p"), &config(), AssembleOptions { yes: true, offline: false })
            .await
            .unwrap_err();

        assert!(err.to_string().contains("git init"));
        assert_eq!(*seen.lock().unwrap(), vec!["yarn init -y", "git init"]);
    }
}
