// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for chainkit.
//!
//! Pure data and logic: protocol identifiers, registries, template bodies
//! and the deduplicating artifact tables. All I/O goes through the ports
//! defined in the application layer.
//!
//! - **No async**: domain logic is synchronous
//! - **No I/O**: no filesystem or process calls
//! - **Static data**: registries are compiled in
pub mod artifacts;
pub mod entities;
pub mod error;
pub mod registry;
pub mod templates;
pub mod value_objects;

pub use artifacts::{AbiTable, AddressTable, DependencySet};
pub use entities::{
    AbiRecord, AddressRecord, CONFIG_FILE_NAME, GeneratedFile, ImportRequest, ProjectConfig,
    WriterResult,
};
pub use error::{DomainError, ErrorCategory};
pub use value_objects::{Network, NetworkSelector, PackageManager, ProtocolId};
