//! Kyber network proxy pack.

use super::{PackSpec, interface};
use crate::domain::{GeneratedFile, ProtocolId, templates::contracts};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pack {
    IKyberNetworkProxy,
}

impl PackSpec for Pack {
    const PROTOCOL: ProtocolId = ProtocolId::Kyber;
    const ALL: &'static [Self] = &[Self::IKyberNetworkProxy];

    fn name(self) -> &'static str {
        "IKYBERNETWORKPROXY"
    }

    fn files(self, solidity_version: &str) -> Vec<GeneratedFile> {
        vec![GeneratedFile::new(
            interface(Self::PROTOCOL, "IKyberNetworkProxy.sol"),
            contracts::kyber_inetwork_proxy(solidity_version),
        )]
    }

    fn address_contracts(self) -> &'static [&'static str] {
        &["IKyberNetworkProxy"]
    }

    fn abi_contracts(self) -> &'static [&'static str] {
        &["IKyberNetworkProxy"]
    }
}
