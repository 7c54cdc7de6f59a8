//! End-to-end generation runs against the in-memory filesystem.

use std::path::Path;
use std::sync::Arc;

use chainkit_adapters::MemoryFilesystem;
use chainkit_core::{
    domain::{Network, artifacts::ABIS_FILE, artifacts::ADDRESSES_FILE},
    prelude::*,
};

const ROOT: &str = "/app";

async fn run(
    fs: &MemoryFilesystem,
    requests: &[ImportRequest],
    network: NetworkSelector,
) -> ChainkitResult<Vec<String>> {
    ProtocolCoordinator::new(Arc::new(fs.clone()))
        .run(Path::new(ROOT), requests, "0.8.6", network)
        .await
}

fn file(fs: &MemoryFilesystem, relative: &str) -> String {
    fs.read_file(Path::new(ROOT).join(relative))
        .unwrap_or_else(|| panic!("{relative} was not written"))
}

#[tokio::test]
async fn bancor_without_abis() {
    let fs = MemoryFilesystem::new();
    let packages = run(
        &fs,
        &[ImportRequest::new("BANCOR", "IBancorNetwork")],
        NetworkSelector::All,
    )
    .await
    .unwrap();

    assert_eq!(packages, vec!["@bancor/sdk".to_string()]);
    assert_eq!(
        file(&fs, ADDRESSES_FILE),
        "export const Addresses = {
  BANCOR: {
    MAINNET: {
      ContractRegistry: '0x52Ae12ABe5D8BD778BD5397F99cA900624CfADD4',
    },
    KOVAN: {
      ContractRegistry: '',
    },
    ROPSTEN: {
      ContractRegistry: '0xFD95E724962fCfC269010A0c6700Aa09D5de3074',
    },
  },

}"
    );
    assert_eq!(file(&fs, ABIS_FILE), "/* eslint-disable */");
    assert!(file(&fs, "contracts/interfaces/Bancor/IBancorNetwork.sol").contains("0.8.6"));
    assert!(file(&fs, "contracts/interfaces/Bancor/IContractRegistry.sol").contains("0.8.6"));
    assert!(file(&fs, "contracts/interfaces/@OpenZeppelin/IERC20.sol").contains("IERC20"));
}

#[tokio::test]
async fn bancor_with_abis() {
    let fs = MemoryFilesystem::new();
    run(
        &fs,
        &[ImportRequest::new("BANCOR", "IBancorNetwork").with_abi(true)],
        NetworkSelector::All,
    )
    .await
    .unwrap();

    assert_eq!(
        file(&fs, ABIS_FILE),
        "/* eslint-disable */

export const BANCOR_ABIs = {
  BancorNetwork: require('./abis/BancorNetwork.json'),
  ContractRegistry: require('./abis/ContractRegistry.json'),
}"
    );
    for contract in ["BancorNetwork", "ContractRegistry"] {
        let json = file(&fs, &format!("lib/__abis__/abis/{contract}.json"));
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(parsed.is_array());
    }
}

#[tokio::test]
async fn duplicate_requests_are_folded_once() {
    let fs = MemoryFilesystem::new();
    let request = ImportRequest::new("ONEINCH", "OneSplit").with_abi(true);
    run(
        &fs,
        &[
            request.clone(),
            request,
            ImportRequest::new("oneinch", "onesplitmulti").with_abi(true),
        ],
        NetworkSelector::All,
    )
    .await
    .unwrap();

    let addresses = file(&fs, ADDRESSES_FILE);
    assert_eq!(addresses.matches("OneSplitAudit:").count(), 3);

    let abis = file(&fs, ABIS_FILE);
    assert_eq!(abis.matches("IOneSplit:").count(), 1);
    assert_eq!(abis.matches("IOneSplitMulti:").count(), 1);
}

#[tokio::test]
async fn setup_runs_once_under_concurrent_requests() {
    let fs = MemoryFilesystem::new();
    let mut requests = vec![ImportRequest::new("BANCOR", "IBancorNetwork"); 5];
    requests.extend(vec![ImportRequest::new("KYBER", "IKyberNetworkProxy"); 3]);
    requests.push(ImportRequest::new("DYDX", "Flashloan"));

    run(&fs, &requests, NetworkSelector::All).await.unwrap();

    let root = Path::new(ROOT);
    assert_eq!(fs.create_count(root.join("contracts/interfaces/Bancor")), 1);
    assert_eq!(fs.create_count(root.join("contracts/interfaces/Kyber")), 1);
    assert_eq!(fs.create_count(root.join("contracts/libraries/DyDx")), 1);
    assert_eq!(
        fs.write_count(root.join("contracts/interfaces/@OpenZeppelin/IERC20.sol")),
        1
    );
}

#[tokio::test]
async fn all_networks_fan_out_per_contract() {
    let fs = MemoryFilesystem::new();
    run(
        &fs,
        &[ImportRequest::new("UNISWAP", "V2Router02")],
        NetworkSelector::All,
    )
    .await
    .unwrap();

    let addresses = file(&fs, ADDRESSES_FILE);
    for network in Network::LIVE {
        assert!(addresses.contains(&format!("    {network}: {{")));
    }
    assert_eq!(addresses.matches("IUniswapV2Router01:").count(), 3);
    assert_eq!(addresses.matches("IUniswapV2Router02:").count(), 3);
}

#[tokio::test]
async fn pinned_network_keeps_empty_addresses() {
    let fs = MemoryFilesystem::new();
    run(
        &fs,
        &[ImportRequest::new("BANCOR", "IBancorNetwork")],
        NetworkSelector::Live(Network::Kovan),
    )
    .await
    .unwrap();

    assert_eq!(
        file(&fs, ADDRESSES_FILE),
        "export const Addresses = {
  BANCOR: {
    KOVAN: {
      ContractRegistry: '',
    },
  },

}"
    );
}

#[tokio::test]
async fn unsupported_pack_and_protocol_are_skipped() {
    let fs = MemoryFilesystem::new();
    let packages = run(
        &fs,
        &[
            ImportRequest::new("UNISWAP", "V3Router"),
            ImportRequest::new("COMPOUND", "CToken"),
        ],
        NetworkSelector::All,
    )
    .await
    .unwrap();

    assert!(packages.is_empty());
    assert_eq!(file(&fs, ADDRESSES_FILE), "export const Addresses = {\n}");
    assert!(
        !fs.list_files()
            .iter()
            .any(|p| p.starts_with("/app/contracts/interfaces/Uniswap"))
    );
}

#[tokio::test]
async fn unsupported_requests_do_not_block_siblings() {
    let fs = MemoryFilesystem::new();
    let packages = run(
        &fs,
        &[
            ImportRequest::new("NOT_A_REAL_PROTOCOL", "x"),
            ImportRequest::new("UNISWAP", "NOT_A_REAL_PACK"),
            ImportRequest::new("uniswap", "v2router02").with_abi(true),
        ],
        NetworkSelector::All,
    )
    .await
    .unwrap();

    assert!(packages.contains(&"@uniswap/v2-sdk".to_string()));
    assert!(file(&fs, ADDRESSES_FILE).contains("UNISWAP: {"));
    assert!(file(&fs, ABIS_FILE).contains("export const UNISWAP_ABIs = {"));
    assert!(file(&fs, "contracts/interfaces/Uniswap/IUniswapV2Router02.sol").contains("0.8.6"));
}

#[tokio::test]
async fn dependencies_are_an_ordered_union() {
    let fs = MemoryFilesystem::new();
    let packages = run(
        &fs,
        &[
            ImportRequest::new("BANCOR", "IBancorNetwork"),
            ImportRequest::new("BANCOR", "IBancorNetwork"),
            ImportRequest::new("KYBER", "IKyberNetworkProxy"),
            ImportRequest::new("AAVE", "ILendingPool").omit_npm_pack(true),
        ],
        NetworkSelector::All,
    )
    .await
    .unwrap();

    assert_eq!(packages, vec!["@bancor/sdk".to_string()]);
}

#[tokio::test]
async fn write_failure_aborts_the_run() {
    let fs = MemoryFilesystem::new();
    fs.fail_writes_under("/app/contracts/interfaces/Kyber");

    let result = run(
        &fs,
        &[
            ImportRequest::new("BANCOR", "IBancorNetwork"),
            ImportRequest::new("KYBER", "IKyberNetworkProxy"),
        ],
        NetworkSelector::All,
    )
    .await;

    assert!(result.is_err());
    assert!(fs.read_file(Path::new(ROOT).join(ADDRESSES_FILE)).is_none());
}
