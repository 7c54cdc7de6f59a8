//! npm packages installed for each protocol.

use tracing::warn;

use crate::domain::value_objects::ProtocolId;

pub const fn for_protocol(protocol: ProtocolId) -> &'static [&'static str] {
    match protocol {
        ProtocolId::Aave => &["@aave/protocol-v2"],
        ProtocolId::Bancor => &["@bancor/sdk"],
        ProtocolId::DyDx => &["@dydxprotocol/v3-client"],
        ProtocolId::Uniswap => &[
            "@uniswap/v2-sdk",
            "@ethersproject/address",
            "@ethersproject/solidity",
            "@ethersproject/contracts",
            "@ethersproject/providers",
        ],
        ProtocolId::Kyber | ProtocolId::OneInch => &[],
    }
}

/// The protocol's packages, or an empty list plus a warning naming the
/// requested pack when it has no ecosystem package.
pub fn resolve(protocol: ProtocolId, pack: &str) -> Vec<String> {
    let packages = for_protocol(protocol);
    if packages.is_empty() {
        warn!(%protocol, %pack, "No npm package available, skipping install");
    }
    packages.iter().map(|p| (*p).to_string()).collect()
}
