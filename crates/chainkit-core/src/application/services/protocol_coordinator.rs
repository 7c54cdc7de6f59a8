//! Protocol Coordinator - generates every contract import of one project.
//!
//! One coordinator serves one run:
//! 1. Create the base directory skeleton
//! 2. Handle every import request concurrently on the current task
//! 3. Fold writer results into deduplicating tables
//! 4. Serialise the address and ABI artifacts
//!
//! Per-protocol setup runs once no matter how many requests need it. The
//! first request starts it; the rest await the same shared future.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use futures::future::{BoxFuture, FutureExt, Shared, try_join_all};
use tracing::{debug, info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::Filesystem,
        writers::{self, WriteContext, Writer, setup},
    },
    domain::{
        AbiTable, AddressTable, DependencySet, ImportRequest, NetworkSelector, ProtocolId,
        WriterResult,
        artifacts::{ABIS_FILE, ADDRESSES_FILE},
    },
    error::ChainkitResult,
};

type SetupFuture = Shared<BoxFuture<'static, ChainkitResult<()>>>;

/// One-time setup units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum SetupKey {
    Protocol(ProtocolId),
    SharedErc20,
}

enum SetupState {
    NotStarted,
    InProgress(SetupFuture),
    Done,
}

#[derive(Default)]
struct Tables {
    addresses: AddressTable,
    abis: AbiTable,
    dependencies: DependencySet,
}

/// Drives one generation run. Construct a new coordinator per run.
pub struct ProtocolCoordinator {
    fs: Arc<dyn Filesystem>,
    setups: Mutex<HashMap<SetupKey, SetupState>>,
    tables: Mutex<Tables>,
}

impl ProtocolCoordinator {
    pub fn new(fs: Arc<dyn Filesystem>) -> Self {
        Self {
            fs,
            setups: Mutex::new(HashMap::new()),
            tables: Mutex::new(Tables::default()),
        }
    }

    /// Generate every import under `dir` and return the npm packages the
    /// imports need, deduplicated, in first-seen order.
    ///
    /// Unknown protocols and packs are skipped with a diagnostic. The first
    /// filesystem error aborts the run and may leave a partial tree.
    #[instrument(
        skip_all,
        fields(
            dir = %dir.display(),
            requests = requests.len(),
            network = %network
        )
    )]
    pub async fn run(
        self,
        dir: &Path,
        requests: &[ImportRequest],
        solidity_version: &str,
        network: NetworkSelector,
    ) -> ChainkitResult<Vec<String>> {
        setup::create_base_dirs(self.fs.as_ref(), dir).await?;

        try_join_all(
            requests
                .iter()
                .map(|request| self.handle(dir, request, solidity_version, network)),
        )
        .await?;

        let Tables {
            addresses,
            abis,
            dependencies,
        } = self
            .tables
            .into_inner()
            .map_err(|_| ApplicationError::StateLockError)?;
        let fs = self.fs;

        fs.write_file(&dir.join(ADDRESSES_FILE), &addresses.render())
            .await?;
        fs.write_file(&dir.join(ABIS_FILE), &abis.render()).await?;
        setup::write_abi_files(fs.as_ref(), dir, abis.records()).await?;

        let dependencies = dependencies.into_vec();
        info!(
            addresses = addresses.len(),
            abis = abis.len(),
            dependencies = dependencies.len(),
            "Contract imports generated"
        );
        Ok(dependencies)
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    #[instrument(skip_all, fields(protocol = %request.protocol, pack = %request.pack))]
    async fn handle(
        &self,
        dir: &Path,
        request: &ImportRequest,
        solidity_version: &str,
        network: NetworkSelector,
    ) -> ChainkitResult<()> {
        let (protocol, writer) = match request.protocol.parse::<ProtocolId>() {
            Ok(protocol) => {
                self.ensure_setup(SetupKey::Protocol(protocol), dir, solidity_version)
                    .await?;
                if protocol.vendors_erc20() {
                    self.ensure_setup(SetupKey::SharedErc20, dir, solidity_version)
                        .await?;
                }
                (Some(protocol), writers::resolve(protocol, &request.pack))
            }
            Err(_) => (
                None,
                Writer::unsupported(&request.protocol, &request.pack),
            ),
        };

        let ctx = WriteContext {
            dir: dir.to_path_buf(),
            solidity_version: solidity_version.to_string(),
            network,
            include_abi: request.abi,
            omit_npm_pack: request.omit_npm_pack,
            pack_name: request.pack.to_ascii_uppercase(),
        };
        let result = writer.write(self.fs.as_ref(), &ctx).await?;

        match protocol {
            Some(protocol) => self.fold(protocol, &result),
            None => Ok(()),
        }
    }

    /// Await the setup for `key`, starting it if nobody has.
    async fn ensure_setup(
        &self,
        key: SetupKey,
        dir: &Path,
        solidity_version: &str,
    ) -> ChainkitResult<()> {
        let pending = {
            let mut setups = self
                .setups
                .lock()
                .map_err(|_| ApplicationError::StateLockError)?;
            let state = setups.entry(key).or_insert(SetupState::NotStarted);
            match state {
                SetupState::Done => return Ok(()),
                SetupState::InProgress(pending) => pending.clone(),
                SetupState::NotStarted => {
                    debug!(?key, "Starting setup");
                    let pending = self
                        .setup_future(key, dir.to_path_buf(), solidity_version.to_string())
                        .shared();
                    *state = SetupState::InProgress(pending.clone());
                    pending
                }
            }
        };

        pending.await?;

        self.setups
            .lock()
            .map_err(|_| ApplicationError::StateLockError)?
            .insert(key, SetupState::Done);
        Ok(())
    }

    fn setup_future(
        &self,
        key: SetupKey,
        dir: PathBuf,
        solidity_version: String,
    ) -> BoxFuture<'static, ChainkitResult<()>> {
        let fs = Arc::clone(&self.fs);
        match key {
            SetupKey::Protocol(protocol) => {
                async move { setup::create_protocol_dirs(fs.as_ref(), &dir, protocol).await }
                    .boxed()
            }
            SetupKey::SharedErc20 => {
                async move { setup::vendor_erc20(fs.as_ref(), &dir, &solidity_version).await }
                    .boxed()
            }
        }
    }

    /// Merge one writer result. No await happens while the lock is held.
    fn fold(&self, protocol: ProtocolId, result: &WriterResult) -> ChainkitResult<()> {
        let mut tables = self
            .tables
            .lock()
            .map_err(|_| ApplicationError::StateLockError)?;

        for record in &result.addresses {
            if !tables.addresses.insert(protocol, record) {
                debug!(%protocol, contract = %record.contract_name, "Duplicate address skipped");
            }
        }
        for record in &result.abis {
            tables.abis.insert(protocol, record);
        }
        tables.dependencies.extend(&result.packages);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::output::MockFilesystem;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn permissive_fs(erc20_writes: Arc<AtomicUsize>) -> MockFilesystem {
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file().returning(move |path, _| {
            if path.ends_with("IERC20.sol") {
                erc20_writes.fetch_add(1, Ordering::SeqCst);
            }
            Ok(())
        });
        fs
    }

    #[tokio::test]
    async fn shared_erc20_is_vendored_once() {
        let erc20_writes = Arc::new(AtomicUsize::new(0));
        let fs = permissive_fs(Arc::clone(&erc20_writes));
        let requests = vec![
            ImportRequest::new("BANCOR", "IBancorNetwork"),
            ImportRequest::new("KYBER", "IKyberNetworkProxy"),
            ImportRequest::new("ONEINCH", "OneSplit"),
            ImportRequest::new("DYDX", "Flashloan"),
        ];

        ProtocolCoordinator::new(Arc::new(fs))
            .run(Path::new("/p"), &requests, "0.8.6", NetworkSelector::All)
            .await
            .unwrap();

        assert_eq!(erc20_writes.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn uniswap_alone_skips_erc20() {
        let erc20_writes = Arc::new(AtomicUsize::new(0));
        let fs = permissive_fs(Arc::clone(&erc20_writes));

        ProtocolCoordinator::new(Arc::new(fs))
            .run(
                Path::new("/p"),
                &[ImportRequest::new("UNISWAP", "V2Router02")],
                "0.8.6",
                NetworkSelector::All,
            )
            .await
            .unwrap();

        assert_eq!(erc20_writes.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn unknown_protocol_contributes_nothing() {
        let fs = permissive_fs(Arc::new(AtomicUsize::new(0)));

        let deps = ProtocolCoordinator::new(Arc::new(fs))
            .run(
                Path::new("/p"),
                &[ImportRequest::new("COMPOUND", "CToken")],
                "0.8.6",
                NetworkSelector::All,
            )
            .await
            .unwrap();

        assert!(deps.is_empty());
    }

    #[tokio::test]
    async fn failing_setup_aborts_run() {
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().returning(|path| {
            if path.ends_with("Bancor") {
                Err(ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "read-only".into(),
                }
                .into())
            } else {
                Ok(())
            }
        });
        fs.expect_write_file().returning(|_, _| Ok(()));

        let result = ProtocolCoordinator::new(Arc::new(fs))
            .run(
                Path::new("/p"),
                &[
                    ImportRequest::new("BANCOR", "IBancorNetwork"),
                    ImportRequest::new("BANCOR", "IBancorNetwork"),
                ],
                "0.8.6",
                NetworkSelector::All,
            )
            .await;

        assert!(result.is_err());
    }
}
