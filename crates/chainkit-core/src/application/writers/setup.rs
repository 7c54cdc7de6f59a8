//! Directory skeleton and shared vendoring used before any pack is written.

use std::path::Path;

use futures::future::try_join_all;
use tracing::{debug, instrument};

use crate::{
    application::ports::Filesystem,
    domain::{AbiRecord, ProtocolId, artifacts::ABI_JSON_DIR, templates::contracts},
    error::ChainkitResult,
};

/// Directories every generated project has.
pub const BASE_DIRS: [&str; 4] = [
    "contracts/interfaces",
    "contracts/libraries",
    ABI_JSON_DIR,
    "migrations",
];

/// Where the shared OpenZeppelin interface is vendored.
pub const ERC20_DIR: &str = "contracts/interfaces/@OpenZeppelin";
pub const ERC20_FILE: &str = "IERC20.sol";

pub async fn create_base_dirs(fs: &dyn Filesystem, dir: &Path) -> ChainkitResult<()> {
    for base in BASE_DIRS {
        fs.create_dir_all(&dir.join(base)).await?;
    }
    Ok(())
}

/// Create the protocol's interface (and library) directories.
#[instrument(skip(fs, dir))]
pub async fn create_protocol_dirs(
    fs: &dyn Filesystem,
    dir: &Path,
    protocol: ProtocolId,
) -> ChainkitResult<()> {
    for sub in protocol.setup_dirs() {
        fs.create_dir_all(&dir.join(sub)).await?;
    }
    debug!("Protocol directories ready");
    Ok(())
}

/// Vendor `IERC20.sol`, imported by several protocols' interfaces.
#[instrument(skip(fs, dir))]
pub async fn vendor_erc20(
    fs: &dyn Filesystem,
    dir: &Path,
    solidity_version: &str,
) -> ChainkitResult<()> {
    let erc20_dir = dir.join(ERC20_DIR);
    fs.create_dir_all(&erc20_dir).await?;
    fs.write_file(
        &erc20_dir.join(ERC20_FILE),
        &contracts::ierc20(solidity_version),
    )
    .await?;
    debug!("IERC20 vendored");
    Ok(())
}

/// Write one `<Contract>.json` per ABI record.
pub async fn write_abi_files<'a>(
    fs: &dyn Filesystem,
    dir: &Path,
    records: impl IntoIterator<Item = &'a AbiRecord>,
) -> ChainkitResult<()> {
    let abi_dir = dir.join(ABI_JSON_DIR);
    fs.create_dir_all(&abi_dir).await?;

    try_join_all(records.into_iter().map(|record| {
        let path = abi_dir.join(format!("{}.json", record.contract_name));
        async move { fs.write_file(&path, &record.abi).await }
    }))
    .await?;
    Ok(())
}
