//! Deployment addresses per protocol, contract and live network.
//!
//! An empty string means the contract has no known deployment on that
//! network. Empty addresses are still emitted when a network is pinned.

use tracing::debug;

use crate::domain::{
    entities::AddressRecord,
    value_objects::{Network, NetworkSelector, ProtocolId},
};

/// Addresses of one contract across the live networks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContractAddresses {
    pub contract: &'static str,
    pub mainnet: &'static str,
    pub kovan: &'static str,
    pub ropsten: &'static str,
}

impl ContractAddresses {
    pub const fn on(&self, network: Network) -> &'static str {
        match network {
            Network::Mainnet => self.mainnet,
            Network::Kovan => self.kovan,
            Network::Ropsten => self.ropsten,
        }
    }
}

const AAVE: &[ContractAddresses] = &[
    ContractAddresses {
        contract: "LendingPool",
        mainnet: "0x7d2768dE32b0b80b7a3454c06BdAc94A69DDc7A9",
        kovan: "0xE0fBa4Fc209b4948668006B2bE61711b7f465bAe",
        ropsten: "",
    },
    ContractAddresses {
        contract: "LendingPoolAddressesProvider",
        mainnet: "0xB53C1a33016B2DC2fF3653530bfF1848a515c8c5",
        kovan: "0x88757f2f99175387aB4C6a4b3067c77A695b0349",
        ropsten: "",
    },
];

const BANCOR: &[ContractAddresses] = &[ContractAddresses {
    contract: "ContractRegistry",
    mainnet: "0x52Ae12ABe5D8BD778BD5397F99cA900624CfADD4",
    kovan: "",
    ropsten: "0xFD95E724962fCfC269010A0c6700Aa09D5de3074",
}];

const DYDX: &[ContractAddresses] = &[ContractAddresses {
    contract: "ISoloMargin",
    mainnet: "0x1E0447b19BB6EcFdAe1e4AE1694b0C3659614e4e",
    kovan: "",
    ropsten: "",
}];

const KYBER: &[ContractAddresses] = &[ContractAddresses {
    contract: "IKyberNetworkProxy",
    mainnet: "0x9AAb3f75489902f3a48495025729a0AF77d4b11e",
    kovan: "0xc153eeAD19e0DBbDb3462Dcc2B703cC6D738A37c",
    ropsten: "0xd719c34261e099Fdb33030ac8909d5788D3039C4",
}];

const ONEINCH: &[ContractAddresses] = &[ContractAddresses {
    contract: "OneSplitAudit",
    mainnet: "0xC586BeF4a0992C495Cf22e1aeEE4E446CECDee0E",
    kovan: "",
    ropsten: "",
}];

const UNISWAP: &[ContractAddresses] = &[
    ContractAddresses {
        contract: "IUniswapV2Router01",
        mainnet: "0xf164fC0Ec4E93095b804a4795bBe1e041497b92a",
        kovan: "0xf164fC0Ec4E93095b804a4795bBe1e041497b92a",
        ropsten: "0xf164fC0Ec4E93095b804a4795bBe1e041497b92a",
    },
    ContractAddresses {
        contract: "IUniswapV2Router02",
        mainnet: "0x7a250d5630B4cF539739dF2C5dAcb4c659F2488D",
        kovan: "0x7a250d5630B4cF539739dF2C5dAcb4c659F2488D",
        ropsten: "0x7a250d5630B4cF539739dF2C5dAcb4c659F2488D",
    },
];

/// Every registered contract of a protocol.
pub const fn for_protocol(protocol: ProtocolId) -> &'static [ContractAddresses] {
    match protocol {
        ProtocolId::Aave => AAVE,
        ProtocolId::Bancor => BANCOR,
        ProtocolId::DyDx => DYDX,
        ProtocolId::Kyber => KYBER,
        ProtocolId::OneInch => ONEINCH,
        ProtocolId::Uniswap => UNISWAP,
    }
}

pub fn lookup(protocol: ProtocolId, contract: &str) -> Option<&'static ContractAddresses> {
    for_protocol(protocol)
        .iter()
        .find(|entry| entry.contract == contract)
}

/// Address records for `contracts`, one per selected network.
///
/// Contracts missing from the registry are skipped.
pub fn resolve(
    protocol: ProtocolId,
    contracts: &[&str],
    selector: NetworkSelector,
) -> Vec<AddressRecord> {
    let networks = selector.networks();
    let mut records = Vec::with_capacity(contracts.len() * networks.len());

    for contract in contracts {
        let Some(entry) = lookup(protocol, contract) else {
            debug!(%protocol, contract, "No registered addresses");
            continue;
        };
        for network in &networks {
            records.push(AddressRecord {
                network: *network,
                contract_name: entry.contract.to_string(),
                address: entry.on(*network).to_string(),
            });
        }
    }

    records
}
