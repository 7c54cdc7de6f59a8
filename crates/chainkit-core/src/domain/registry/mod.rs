//! Compiled-in registries consulted by the writers.
//!
//! - [`addresses`]: known deployments per protocol, contract and network
//! - [`abis`]: canned ABI JSON per contract
//! - [`packages`]: npm packages per protocol

pub mod abis;
pub mod addresses;
pub mod packages;
