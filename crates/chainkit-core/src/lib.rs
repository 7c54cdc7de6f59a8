//! chainkit core - hexagonal architecture implementation
//!
//! This crate provides the domain and application layers for chainkit, a
//! generator that vendors DeFi protocol interfaces into a Truffle/TypeScript
//! project and exports their deployment addresses and ABIs.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          chainkit-cli (CLI)             │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (ProtocolCoordinator, Assembler,       │
//! │   QuickWriteService, pack writers)      │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │     (Filesystem, ProcessRunner)         │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    chainkit-adapters (Infrastructure)   │
//! │ (LocalFilesystem, SystemProcessRunner)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (ProtocolId, registries, templates,     │
//! │  AddressTable, AbiTable)                │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::{path::Path, sync::Arc};
//! use chainkit_core::prelude::*;
//!
//! # async fn demo(fs: Arc<dyn Filesystem>) -> ChainkitResult<()> {
//! let requests = vec![ImportRequest::new("BANCOR", "IBancorNetwork").with_abi(true)];
//! let packages = ProtocolCoordinator::new(fs)
//!     .run(Path::new("./app"), &requests, "0.8.6", NetworkSelector::All)
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        AssembleOptions, AssembleReport, Assembler, ProtocolCoordinator, QuickWriteRequest,
        QuickWriteService,
        ports::{CommandSpec, CommandStatus, Filesystem, ProcessRunner},
    };
    pub use crate::domain::{
        ImportRequest, Network, NetworkSelector, PackageManager, ProjectConfig, ProtocolId,
        WriterResult,
    };
    pub use crate::error::{ChainkitError, ChainkitResult};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
