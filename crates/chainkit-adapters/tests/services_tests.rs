//! Assembler and quick write against the in-memory filesystem and the
//! recording process runner.

use std::path::Path;
use std::sync::Arc;

use chainkit_adapters::{MemoryFilesystem, RecordingProcessRunner};
use chainkit_core::{application::ports::Filesystem, prelude::*};

const ROOT: &str = "/app";

async fn project_with_manifest() -> MemoryFilesystem {
    let fs = MemoryFilesystem::new();
    fs.create_dir_all(Path::new(ROOT)).await.unwrap();
    fs.write_file(&Path::new(ROOT).join("package.json"), r#"{"name":"app"}"#)
        .await
        .unwrap();
    fs
}

fn bancor_config() -> ProjectConfig {
    ProjectConfig {
        default_net: NetworkSelector::All,
        contract_imports: vec![ImportRequest::new("BANCOR", "IBancorNetwork")],
        ..ProjectConfig::template()
    }
}

#[tokio::test]
async fn assembler_runs_the_full_sequence() {
    let fs = project_with_manifest().await;
    let runner = RecordingProcessRunner::new();
    let assembler = Assembler::new(Arc::new(fs.clone()), Arc::new(runner.clone()));

    let report = assembler
        .assemble(
            Path::new(ROOT),
            &bancor_config(),
            AssembleOptions {
                yes: true,
                offline: true,
            },
        )
        .await
        .unwrap();

    assert_eq!(report.contract_dependencies, vec!["@bancor/sdk".to_string()]);
    assert_eq!(
        runner.command_lines(),
        vec![
            "yarn init -y",
            "git init",
            "yarn add typescript ts-node @types/node ganache-cli eslint \
             @typescript-eslint/eslint-plugin @typescript-eslint/parser mocha @types/mocha \
             chai @types/chai @types/express -D --offline",
            "yarn add web3 dotenv @truffle/hdwallet-provider express @bancor/sdk --offline",
        ]
    );
    assert!(runner.commands().iter().all(|c| c.cwd == Path::new(ROOT)));

    let manifest: serde_json::Value =
        serde_json::from_str(&fs.read_file("/app/package.json").unwrap()).unwrap();
    assert_eq!(manifest["main"], "/lib/index.ts");
    assert_eq!(manifest["scripts"]["tsc"], "tsc");

    for written in [
        ".env",
        "truffle-config.js",
        "tsconfig.json",
        "contracts/Migrations.sol",
        "migrations/1_initial_migration.js",
        ".gitignore",
        ".gitattributes",
        "fork-chain.js",
        ".eslintrc",
        "tests/tests.test.ts",
        "lib/addresses.ts",
    ] {
        assert!(
            fs.read_file(Path::new(ROOT).join(written)).is_some(),
            "{written} missing"
        );
    }
    assert_eq!(
        fs.read_file("/app/.env").unwrap(),
        "ETH_NODE_URL=wss://mainnet.infura.io/ws/v3/"
    );
}

#[tokio::test]
async fn assembler_stops_at_failed_command() {
    let fs = project_with_manifest().await;
    let runner = RecordingProcessRunner::new().with_exit_code("npm", 1);
    let config = ProjectConfig {
        packman: PackageManager::Npm,
        ..bancor_config()
    };

    let err = Assembler::new(Arc::new(fs), Arc::new(runner.clone()))
        .assemble(Path::new(ROOT), &config, AssembleOptions::default())
        .await
        .unwrap_err();

    assert!(err.to_string().contains("npm init"));
    assert_eq!(runner.command_lines(), vec!["npm init"]);
}

#[tokio::test]
async fn quick_write_installs_with_npm_init_when_manifest_is_missing() {
    let fs = MemoryFilesystem::new();
    let runner = RecordingProcessRunner::new();
    let service = QuickWriteService::new(Arc::new(fs.clone()), Arc::new(runner.clone()));

    let result = service
        .write(
            Path::new(ROOT),
            &QuickWriteRequest {
                protocol: "bancor".into(),
                pack: "ibancornetwork".into(),
                solidity_version: "0.8.6".into(),
                network: NetworkSelector::Live(Network::Mainnet),
                include_abi: true,
                omit_npm_pack: false,
            },
        )
        .await
        .unwrap();

    assert_eq!(result.addresses.len(), 1);
    assert_eq!(
        runner.command_lines(),
        vec!["npm init -y", "yarn add @bancor/sdk"]
    );
    assert!(
        fs.read_file("/app/lib/__abis__/abis/BancorNetwork.json")
            .is_some()
    );
    assert!(fs.read_file("/app/lib/addresses.ts").is_none());
}

#[tokio::test]
async fn quick_write_keeps_yarn_lock_projects_on_yarn() {
    let fs = project_with_manifest().await;
    fs.write_file(Path::new("/app/yarn.lock"), "").await.unwrap();
    let runner = RecordingProcessRunner::new().with_exit_code("yarn", 1);

    QuickWriteService::new(Arc::new(fs), Arc::new(runner.clone()))
        .write(
            Path::new(ROOT),
            &QuickWriteRequest {
                protocol: "UNISWAP".into(),
                pack: "V2Router02".into(),
                solidity_version: "0.8.6".into(),
                network: NetworkSelector::All,
                include_abi: false,
                omit_npm_pack: false,
            },
        )
        .await
        .unwrap();

    let lines = runner.command_lines();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("yarn add @uniswap/v2-sdk"));
}
