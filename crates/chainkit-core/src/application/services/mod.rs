//! Application services - orchestrate use cases.
//!
//! - `ProtocolCoordinator`: generate a project's contract imports
//! - `Assembler`: full project assembly around the coordinator
//! - `QuickWriteService`: one import into an existing project

pub mod assembler;
pub mod protocol_coordinator;
pub mod quick_write;

pub use assembler::{AssembleOptions, AssembleReport, Assembler};
pub use protocol_coordinator::ProtocolCoordinator;
pub use quick_write::{QuickWriteRequest, QuickWriteService, abi_snippet, address_snippet};
