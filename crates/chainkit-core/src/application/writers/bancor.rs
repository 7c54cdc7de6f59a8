//! Bancor network pack.

use super::{PackSpec, interface};
use crate::domain::{GeneratedFile, ProtocolId, templates::contracts};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pack {
    IBancorNetwork,
}

impl PackSpec for Pack {
    const PROTOCOL: ProtocolId = ProtocolId::Bancor;
    const ALL: &'static [Self] = &[Self::IBancorNetwork];

    fn name(self) -> &'static str {
        "IBANCORNETWORK"
    }

    fn files(self, solidity_version: &str) -> Vec<GeneratedFile> {
        vec![
            GeneratedFile::new(
                interface(Self::PROTOCOL, "IBancorNetwork.sol"),
                contracts::bancor_ibancor_network(solidity_version),
            ),
            GeneratedFile::new(
                interface(Self::PROTOCOL, "IContractRegistry.sol"),
                contracts::bancor_icontract_registry(solidity_version),
            ),
        ]
    }

    // The network address moves; clients resolve it through the registry.
    fn address_contracts(self) -> &'static [&'static str] {
        &["ContractRegistry"]
    }

    fn abi_contracts(self) -> &'static [&'static str] {
        &["BancorNetwork", "ContractRegistry"]
    }
}
