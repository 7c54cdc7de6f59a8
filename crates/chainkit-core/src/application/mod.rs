//! Application layer for chainkit.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ProtocolCoordinator, Assembler, QuickWriteService)
//! - **Writers**: Per-protocol pack writers and the import dispatcher
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! Registries, templates and artifact formats live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;
pub mod writers;

pub use services::{
    AssembleOptions, AssembleReport, Assembler, ProtocolCoordinator, QuickWriteRequest,
    QuickWriteService,
};

// Re-export port traits (for adapter implementation)
pub use ports::{CommandSpec, CommandStatus, Filesystem, ProcessRunner};

pub use error::ApplicationError;
