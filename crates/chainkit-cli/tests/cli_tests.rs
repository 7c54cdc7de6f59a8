//! End-to-end tests for the `chainkit` binary.

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// A `chainkit` invocation isolated from the user's config and colours.
fn chainkit(dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("chainkit");
    cmd.current_dir(dir)
        .env("XDG_CONFIG_HOME", dir.join(".config"))
        .env("HOME", dir)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

// ── arguments ────────────────────────────────────────────────────────────────

#[test]
fn version_flag_prints_version() {
    let temp = TempDir::new().unwrap();
    chainkit(temp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn unknown_flag_is_a_user_error() {
    let temp = TempDir::new().unwrap();
    chainkit(temp.path())
        .args(["init", "--bogus"])
        .assert()
        .code(2);
}

#[test]
fn completions_name_the_binary() {
    let temp = TempDir::new().unwrap();
    chainkit(temp.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("chainkit"));
}

// ── init ─────────────────────────────────────────────────────────────────────

#[test]
fn init_writes_template_config() {
    let temp = TempDir::new().unwrap();
    chainkit(temp.path()).arg("init").assert().success();

    let text = fs::read_to_string(temp.path().join("chainkit.json")).unwrap();
    let json: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(json["solversion"], "0.8.6");
    assert_eq!(json["packman"], "yarn");
    assert_eq!(json["contractImports"].as_array().unwrap().len(), 7);
}

#[test]
fn init_refuses_to_overwrite_without_force() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("chainkit.json"), "{}").unwrap();

    chainkit(temp.path())
        .arg("init")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--force"));
    assert_eq!(
        fs::read_to_string(temp.path().join("chainkit.json")).unwrap(),
        "{}"
    );

    chainkit(temp.path()).args(["init", "--force"]).assert().success();
    assert_ne!(
        fs::read_to_string(temp.path().join("chainkit.json")).unwrap(),
        "{}"
    );
}

#[test]
fn init_honours_dir_flag_and_config_defaults() {
    let temp = TempDir::new().unwrap();
    let project = temp.path().join("dapp");

    chainkit(temp.path())
        .env("CHAINKIT__DEFAULTS__PACKAGE_MANAGER", "npm")
        .args(["init", "-C"])
        .arg(&project)
        .assert()
        .success();

    let text = fs::read_to_string(project.join("chainkit.json")).unwrap();
    assert!(text.contains("\"packman\": \"npm\""));
}

// ── quick ────────────────────────────────────────────────────────────────────

#[test]
fn quick_without_pack_lists_packs() {
    let temp = TempDir::new().unwrap();
    chainkit(temp.path())
        .args(["quick", "oneinch"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ONESPLIT"))
        .stdout(predicate::str::contains("ONESPLITMULTI"));
}

#[test]
fn quick_lists_packs_as_json() {
    let temp = TempDir::new().unwrap();
    let assert = chainkit(temp.path())
        .args(["--output-format", "json", "quick", "uniswap"])
        .assert()
        .success();

    let json: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(json["protocol"], "UNISWAP");
    assert_eq!(json["packs"][0], "V2ROUTER02");
}

#[test]
fn quick_unknown_protocol_is_not_found() {
    let temp = TempDir::new().unwrap();
    chainkit(temp.path())
        .args(["quick", "compound", "ctoken"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Supported protocols"));
}

#[test]
fn quick_unknown_pack_is_not_found_and_writes_nothing() {
    let temp = TempDir::new().unwrap();
    chainkit(temp.path())
        .args(["quick", "uniswap", "v3router"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("V2ROUTER02"));
    assert!(!temp.path().join("contracts").exists());
}

#[test]
fn quick_rejects_unknown_network() {
    let temp = TempDir::new().unwrap();
    chainkit(temp.path())
        .args(["quick", "kyber", "ikybernetworkproxy", "--network", "goerli"])
        .assert()
        .code(2);
}

// ── assemble ─────────────────────────────────────────────────────────────────

#[test]
fn assemble_without_config_is_not_found() {
    let temp = TempDir::new().unwrap();
    chainkit(temp.path())
        .arg("assemble")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("chainkit init"));
}

#[test]
fn assemble_with_invalid_config_is_a_user_error() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("chainkit.json"), "{ \"solversion\": 1 }").unwrap();
    chainkit(temp.path()).arg("assemble").assert().code(2);
}

#[test]
fn assemble_dry_run_prints_plan_without_writing() {
    let temp = TempDir::new().unwrap();
    chainkit(temp.path()).arg("init").assert().success();

    chainkit(temp.path())
        .args(["assemble", "--dry-run", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("yarn init -y"))
        .stdout(predicate::str::contains("git init"))
        .stdout(predicate::str::contains("contracts/interfaces/Bancor/IBancorNetwork.sol"))
        .stdout(predicate::str::contains("lib/addresses.ts"));

    assert!(!temp.path().join("contracts").exists());
    assert!(!temp.path().join("package.json").exists());
}

// ── purge ────────────────────────────────────────────────────────────────────

#[test]
fn purge_empties_the_project_directory() {
    let temp = TempDir::new().unwrap();
    let project = temp.path().join("scratch");
    fs::create_dir_all(project.join("contracts/interfaces")).unwrap();
    fs::write(project.join("chainkit.json"), "{}").unwrap();

    chainkit(temp.path())
        .args(["purge", "--yes", "-C"])
        .arg(&project)
        .assert()
        .success();

    assert!(project.exists());
    assert_eq!(fs::read_dir(&project).unwrap().count(), 0);
}

// ── config ───────────────────────────────────────────────────────────────────

#[test]
fn config_get_reads_environment_override() {
    let temp = TempDir::new().unwrap();
    chainkit(temp.path())
        .env("CHAINKIT__DEFAULTS__NETWORK", "kovan")
        .args(["config", "get", "defaults.network"])
        .assert()
        .success()
        .stdout(predicate::str::contains("kovan"));
}

#[test]
fn config_get_unknown_key_is_a_user_error() {
    let temp = TempDir::new().unwrap();
    chainkit(temp.path())
        .args(["config", "get", "defaults.language"])
        .assert()
        .code(2);
}

#[test]
fn missing_explicit_config_file_is_a_configuration_error() {
    let temp = TempDir::new().unwrap();
    chainkit(temp.path())
        .args(["--config", "nope.toml", "config", "list"])
        .assert()
        .code(4);
}
