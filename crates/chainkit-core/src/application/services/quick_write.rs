//! Quick Write - vendor a single pack into an existing directory.
//!
//! Unlike a full run, the protocol and pack come straight from the user, so
//! unknown values are errors rather than diagnostics. No address or ABI
//! table is written; the caller prints snippets built from the result.

use std::path::Path;
use std::sync::Arc;

use tracing::{info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{CommandSpec, Filesystem, ProcessRunner},
        writers::{self, WriteContext, setup},
    },
    domain::{
        AbiRecord, AddressRecord, DomainError, NetworkSelector, PackageManager, ProtocolId,
        WriterResult,
    },
    error::ChainkitResult,
};

/// Arguments of one quick write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuickWriteRequest {
    pub protocol: String,
    pub pack: String,
    pub solidity_version: String,
    pub network: NetworkSelector,
    pub include_abi: bool,
    pub omit_npm_pack: bool,
}

pub struct QuickWriteService {
    fs: Arc<dyn Filesystem>,
    runner: Arc<dyn ProcessRunner>,
}

impl QuickWriteService {
    pub fn new(fs: Arc<dyn Filesystem>, runner: Arc<dyn ProcessRunner>) -> Self {
        Self { fs, runner }
    }

    /// Write one pack under `dir`, export its ABI files and install its
    /// packages.
    #[instrument(
        skip_all,
        fields(
            dir = %dir.display(),
            protocol = %request.protocol,
            pack = %request.pack
        )
    )]
    pub async fn write(
        &self,
        dir: &Path,
        request: &QuickWriteRequest,
    ) -> ChainkitResult<WriterResult> {
        let protocol: ProtocolId = request.protocol.parse()?;
        let writer = writers::resolve(protocol, &request.pack);
        if !writer.is_supported() {
            return Err(DomainError::UnsupportedPack {
                protocol: protocol.to_string(),
                pack: request.pack.clone(),
                supported: writers::supported_packs(protocol),
            }
            .into());
        }

        let fs = self.fs.as_ref();
        setup::create_protocol_dirs(fs, dir, protocol).await?;
        if protocol.vendors_erc20() {
            setup::vendor_erc20(fs, dir, &request.solidity_version).await?;
        }

        let ctx = WriteContext {
            dir: dir.to_path_buf(),
            solidity_version: request.solidity_version.clone(),
            network: request.network,
            include_abi: request.include_abi,
            omit_npm_pack: request.omit_npm_pack,
            pack_name: request.pack.to_ascii_uppercase(),
        };
        let result = writer.write(fs, &ctx).await?;

        if !result.abis.is_empty() {
            setup::write_abi_files(fs, dir, &result.abis).await?;
        }
        if !result.packages.is_empty() {
            self.install(dir, &result.packages).await?;
        }

        info!(
            addresses = result.addresses.len(),
            abis = result.abis.len(),
            "Quick write finished"
        );
        Ok(result)
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    /// Install with yarn, falling back to npm unless the project is already
    /// locked to yarn.
    async fn install(&self, dir: &Path, packages: &[String]) -> ChainkitResult<()> {
        if !self.fs.exists(&dir.join("package.json")).await {
            let init = CommandSpec::new(PackageManager::Npm.program(), dir).args(["init", "-y"]);
            let status = self.runner.run(&init).await?;
            if !status.success() {
                return Err(ApplicationError::CommandFailed {
                    command: init.to_string(),
                    code: status.code,
                }
                .into());
            }
        }

        let add = |manager: PackageManager| {
            CommandSpec::new(manager.program(), dir)
                .arg("add")
                .args(packages.iter().cloned())
        };

        let yarn = add(PackageManager::Yarn);
        match self.runner.run(&yarn).await {
            Ok(status) if status.success() => return Ok(()),
            Ok(status) => warn!(code = ?status.code, "yarn add failed"),
            Err(e) => warn!(error = %e, "yarn unavailable"),
        }

        if self.fs.exists(&dir.join("yarn.lock")).await {
            warn!("Found yarn.lock, not falling back to npm");
            return Ok(());
        }

        let npm = add(PackageManager::Npm);
        let status = self.runner.run(&npm).await?;
        if !status.success() {
            return Err(ApplicationError::CommandFailed {
                command: npm.to_string(),
                code: status.code,
            }
            .into());
        }
        Ok(())
    }
}

// ── Snippets ─────────────────────────────────────────────────────────────────

/// Address lines to paste into `lib/addresses.ts`.
pub fn address_snippet(protocol: ProtocolId, addresses: &[AddressRecord]) -> String {
    let mut out = format!("export const Addresses = {{\n  {protocol}: {{");
    for record in addresses {
        out.push_str(&format!(
            "\n    {}_{}: '{}',",
            record.contract_name, record.network, record.address
        ));
    }
    out.push_str("\n  }\n}");
    out
}

/// ABI requires to paste into `lib/__abis__/abis.ts`. Empty when there are
/// no ABIs.
pub fn abi_snippet(protocol: ProtocolId, abis: &[AbiRecord]) -> String {
    if abis.is_empty() {
        return String::new();
    }
    let mut out = format!("export const {protocol}_ABIs = {{");
    for record in abis {
        out.push_str(&format!(
            "\n  {name}: require('./abis/{name}.json'),",
            name = record.contract_name
        ));
    }
    out.push_str("\n}");
    out
}
