//! Import dispatch and pack writers.
//!
//! Each protocol module declares a closed `Pack` enum. [`resolve`] maps a
//! request onto one of them, or onto [`Writer::Unsupported`] when the pack
//! is unknown. Every writer returns the same [`WriterResult`] shape.

pub mod aave;
pub mod bancor;
pub mod dydx;
pub mod kyber;
pub mod oneinch;
pub mod setup;
pub mod uniswap;

use std::path::{Path, PathBuf};

use futures::future::try_join_all;
use tracing::{debug, instrument, warn};

use crate::{
    application::ports::Filesystem,
    domain::{
        GeneratedFile, NetworkSelector, ProtocolId, WriterResult,
        registry::{abis, addresses, packages},
    },
    error::ChainkitResult,
};

// ── WriteContext ─────────────────────────────────────────────────────────────

/// Inputs shared by every writer invocation.
///
/// `pack_name` is the pack as requested; diagnostics name it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteContext {
    pub dir: PathBuf,
    pub solidity_version: String,
    pub network: NetworkSelector,
    pub include_abi: bool,
    pub omit_npm_pack: bool,
    pub pack_name: String,
}

// ── PackSpec ─────────────────────────────────────────────────────────────────

/// A pack: the files it vendors and the contracts it exposes.
pub trait PackSpec: Copy + Send + Sync + 'static {
    const PROTOCOL: ProtocolId;
    const ALL: &'static [Self];

    /// Upper-case pack name as accepted in import requests.
    fn name(self) -> &'static str;

    fn files(self, solidity_version: &str) -> Vec<GeneratedFile>;

    /// Contracts whose deployment addresses are exported.
    fn address_contracts(self) -> &'static [&'static str];

    /// Contracts whose ABIs are exported when requested.
    fn abi_contracts(self) -> &'static [&'static str];

    /// Look up a pack by its upper-case name.
    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|pack| pack.name() == name)
    }
}

pub(crate) fn interface(protocol: ProtocolId, file: &str) -> PathBuf {
    Path::new("contracts/interfaces")
        .join(protocol.dir_name())
        .join(file)
}

pub(crate) fn library(protocol: ProtocolId, file: &str) -> PathBuf {
    Path::new("contracts/libraries")
        .join(protocol.dir_name())
        .join(file)
}

// ── Writer ───────────────────────────────────────────────────────────────────

/// The writer chosen for one import request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Writer {
    Aave(aave::Pack),
    Bancor(bancor::Pack),
    DyDx(dydx::Pack),
    Kyber(kyber::Pack),
    OneInch(oneinch::Pack),
    Uniswap(uniswap::Pack),
    /// Unknown protocol or pack. Writes nothing.
    Unsupported { protocol: String, pack: String },
}

impl Writer {
    pub fn unsupported(protocol: impl Into<String>, pack: impl Into<String>) -> Self {
        Self::Unsupported {
            protocol: protocol.into(),
            pack: pack.into(),
        }
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self, Self::Unsupported { .. })
    }

    /// Write the pack files under `ctx.dir` and collect its metadata.
    ///
    /// File writes are fatal. Missing registry data is logged and yields
    /// empty lists.
    pub async fn write(
        &self,
        fs: &dyn Filesystem,
        ctx: &WriteContext,
    ) -> ChainkitResult<WriterResult> {
        match self {
            Self::Aave(pack) => emit(fs, ctx, *pack).await,
            Self::Bancor(pack) => emit(fs, ctx, *pack).await,
            Self::DyDx(pack) => emit(fs, ctx, *pack).await,
            Self::Kyber(pack) => emit(fs, ctx, *pack).await,
            Self::OneInch(pack) => emit(fs, ctx, *pack).await,
            Self::Uniswap(pack) => emit(fs, ctx, *pack).await,
            Self::Unsupported { protocol, pack } => {
                warn!(%protocol, %pack, "Unsupported import, skipping");
                Ok(WriterResult::empty())
            }
        }
    }
}

/// Pick the writer for `pack` within `protocol`. Never fails.
pub fn resolve(protocol: ProtocolId, pack: &str) -> Writer {
    let name = pack.trim().to_ascii_uppercase();

    let writer = match protocol {
        ProtocolId::Aave => aave::Pack::from_name(&name).map(Writer::Aave),
        ProtocolId::Bancor => bancor::Pack::from_name(&name).map(Writer::Bancor),
        ProtocolId::DyDx => dydx::Pack::from_name(&name).map(Writer::DyDx),
        ProtocolId::Kyber => kyber::Pack::from_name(&name).map(Writer::Kyber),
        ProtocolId::OneInch => oneinch::Pack::from_name(&name).map(Writer::OneInch),
        ProtocolId::Uniswap => uniswap::Pack::from_name(&name).map(Writer::Uniswap),
    };

    writer.unwrap_or_else(|| Writer::unsupported(protocol.as_str(), pack))
}

/// Pack names accepted for `protocol`.
pub fn supported_packs(protocol: ProtocolId) -> Vec<&'static str> {
    fn names<P: PackSpec>() -> Vec<&'static str> {
        P::ALL.iter().map(|pack| pack.name()).collect()
    }

    match protocol {
        ProtocolId::Aave => names::<aave::Pack>(),
        ProtocolId::Bancor => names::<bancor::Pack>(),
        ProtocolId::DyDx => names::<dydx::Pack>(),
        ProtocolId::Kyber => names::<kyber::Pack>(),
        ProtocolId::OneInch => names::<oneinch::Pack>(),
        ProtocolId::Uniswap => names::<uniswap::Pack>(),
    }
}

#[instrument(skip_all, fields(protocol = %P::PROTOCOL, pack = pack.name()))]
async fn emit<P: PackSpec>(
    fs: &dyn Filesystem,
    ctx: &WriteContext,
    pack: P,
) -> ChainkitResult<WriterResult> {
    let files = pack.files(&ctx.solidity_version);

    try_join_all(files.iter().map(|file| {
        let path = ctx.dir.join(&file.path);
        async move { fs.write_file(&path, &file.content).await }
    }))
    .await?;

    let addresses = addresses::resolve(P::PROTOCOL, pack.address_contracts(), ctx.network);

    let abis = if ctx.include_abi {
        abis::resolve(P::PROTOCOL, &ctx.pack_name, pack.abi_contracts())
    } else {
        Vec::new()
    };

    let packages = if ctx.omit_npm_pack {
        Vec::new()
    } else {
        packages::resolve(P::PROTOCOL, &ctx.pack_name)
    };

    debug!(
        files = files.len(),
        addresses = addresses.len(),
        abis = abis.len(),
        packages = packages.len(),
        "Pack written"
    );

    Ok(WriterResult {
        addresses,
        abis,
        packages,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        application::{ApplicationError, ports::output::MockFilesystem},
        domain::Network,
        error::ChainkitError,
    };

    use std::io;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::fmt::MakeWriter;

    /// Collects formatted log lines for assertions.
    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl LogBuffer {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for LogBuffer {
        type Writer = LogBuffer;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    fn ctx(network: NetworkSelector, include_abi: bool, omit_npm_pack: bool) -> WriteContext {
        WriteContext {
            dir: PathBuf::from("/project"),
            solidity_version: "0.8.6".into(),
            network,
            include_abi,
            omit_npm_pack,
            pack_name: "IBANCORNETWORK".into(),
        }
    }

    #[test]
    fn resolve_is_case_insensitive() {
        assert_eq!(
            resolve(ProtocolId::Uniswap, "v2Router02"),
            Writer::Uniswap(uniswap::Pack::V2Router02)
        );
        assert_eq!(
            resolve(ProtocolId::OneInch, "OneSplitMulti"),
            Writer::OneInch(oneinch::Pack::OneSplitMulti)
        );
    }

    #[test]
    fn unknown_pack_resolves_to_unsupported() {
        let writer = resolve(ProtocolId::Uniswap, "V3Router");
        assert!(!writer.is_supported());
    }

    #[test]
    fn supported_packs_lists_table() {
        assert_eq!(
            supported_packs(ProtocolId::Aave),
            vec!["ILENDINGPOOL", "ILENDINGPOOLADDRESSESPROVIDER"]
        );
        assert_eq!(supported_packs(ProtocolId::DyDx), vec!["FLASHLOAN"]);
    }

    #[tokio::test]
    async fn unsupported_writer_touches_nothing() {
        // No expectations: any filesystem call panics.
        let fs = MockFilesystem::new();
        let result = Writer::unsupported("UNISWAP", "V3")
            .write(&fs, &ctx(NetworkSelector::All, true, false))
            .await
            .unwrap();
        assert!(result.is_empty());
    }

    #[tokio::test]
    async fn bancor_writes_files_and_fans_out_networks() {
        let mut fs = MockFilesystem::new();
        fs.expect_write_file().times(2).returning(|_, _| Ok(()));

        let result = Writer::Bancor(bancor::Pack::IBancorNetwork)
            .write(&fs, &ctx(NetworkSelector::All, true, false))
            .await
            .unwrap();

        assert_eq!(result.addresses.len(), 3);
        let abis: Vec<_> = result.abis.iter().map(|a| a.contract_name.as_str()).collect();
        assert_eq!(abis, vec!["BancorNetwork", "ContractRegistry"]);
        assert_eq!(result.packages, vec!["@bancor/sdk".to_string()]);
    }

    #[tokio::test]
    async fn pinned_network_keeps_empty_address() {
        let mut fs = MockFilesystem::new();
        fs.expect_write_file().returning(|_, _| Ok(()));

        let result = Writer::Bancor(bancor::Pack::IBancorNetwork)
            .write(&fs, &ctx(NetworkSelector::Live(Network::Kovan), false, true))
            .await
            .unwrap();

        assert_eq!(result.addresses.len(), 1);
        assert_eq!(result.addresses[0].network, Network::Kovan);
        assert_eq!(result.addresses[0].address, "");
        assert!(result.abis.is_empty());
        assert!(result.packages.is_empty());
    }

    #[tokio::test]
    async fn pinned_network_yields_one_record_per_contract() {
        let mut fs = MockFilesystem::new();
        fs.expect_write_file().returning(|_, _| Ok(()));

        let result = Writer::Aave(aave::Pack::ILendingPool)
            .write(&fs, &ctx(NetworkSelector::Live(Network::Ropsten), false, true))
            .await
            .unwrap();

        let names: Vec<_> = result
            .addresses
            .iter()
            .map(|r| r.contract_name.as_str())
            .collect();
        assert_eq!(names, ["LendingPool", "LendingPoolAddressesProvider"]);
        assert!(result.addresses.iter().all(|r| r.network == Network::Ropsten));
        assert!(result.addresses.iter().all(|r| r.address.is_empty()));
    }

    #[tokio::test]
    async fn missing_registry_data_is_logged_with_pack_name() {
        let mut fs = MockFilesystem::new();
        fs.expect_write_file().returning(|_, _| Ok(()));

        let logs = LogBuffer::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(logs.clone())
            .with_ansi(false)
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let mut context = ctx(NetworkSelector::All, true, false);
        context.pack_name = "IKYBERNETWORKPROXY".into();
        let result = Writer::Kyber(kyber::Pack::IKyberNetworkProxy)
            .write(&fs, &context)
            .await
            .unwrap();
        assert!(result.packages.is_empty());

        let mut context = ctx(NetworkSelector::All, true, true);
        context.pack_name = "FLASHLOAN".into();
        let result = Writer::DyDx(dydx::Pack::Flashloan)
            .write(&fs, &context)
            .await
            .unwrap();
        assert!(result.abis.is_empty());

        let output = logs.contents();
        assert!(output.contains("No npm package available"));
        assert!(output.contains("pack=IKYBERNETWORKPROXY"));
        assert!(output.contains("No ABI registered yet"));
        assert!(output.contains("pack=FLASHLOAN"));
    }

    #[tokio::test]
    async fn failed_write_propagates() {
        let mut fs = MockFilesystem::new();
        fs.expect_write_file().returning(|path, _| {
            Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "disk full".into(),
            }
            .into())
        });

        let err = Writer::Kyber(kyber::Pack::IKyberNetworkProxy)
            .write(&fs, &ctx(NetworkSelector::All, false, false))
            .await
            .unwrap_err();
        assert!(matches!(err, ChainkitError::Application(_)));
    }
}
