//! Uniswap v2 router pack.

use super::{PackSpec, interface};
use crate::domain::{GeneratedFile, ProtocolId, templates::contracts};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pack {
    V2Router02,
}

impl PackSpec for Pack {
    const PROTOCOL: ProtocolId = ProtocolId::Uniswap;
    const ALL: &'static [Self] = &[Self::V2Router02];

    fn name(self) -> &'static str {
        "V2ROUTER02"
    }

    fn files(self, solidity_version: &str) -> Vec<GeneratedFile> {
        vec![
            GeneratedFile::new(
                interface(Self::PROTOCOL, "IUniswapV2Router01.sol"),
                contracts::uniswap_v2_router01(solidity_version),
            ),
            GeneratedFile::new(
                interface(Self::PROTOCOL, "IUniswapV2Router02.sol"),
                contracts::uniswap_v2_router02(solidity_version),
            ),
        ]
    }

    fn address_contracts(self) -> &'static [&'static str] {
        &["IUniswapV2Router01", "IUniswapV2Router02"]
    }

    fn abi_contracts(self) -> &'static [&'static str] {
        &["IUniswapV2Router01", "IUniswapV2Router02"]
    }
}
