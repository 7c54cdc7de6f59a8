//! dYdX flash loan pack.

use std::path::PathBuf;

use super::{PackSpec, interface, library};
use crate::domain::{GeneratedFile, ProtocolId, templates::contracts};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pack {
    Flashloan,
}

impl PackSpec for Pack {
    const PROTOCOL: ProtocolId = ProtocolId::DyDx;
    const ALL: &'static [Self] = &[Self::Flashloan];

    fn name(self) -> &'static str {
        "FLASHLOAN"
    }

    fn files(self, solidity_version: &str) -> Vec<GeneratedFile> {
        let protocol = Self::PROTOCOL;
        vec![
            GeneratedFile::new(
                PathBuf::from("contracts/Flashloan.sol"),
                contracts::dydx_flashloan(solidity_version),
            ),
            GeneratedFile::new(
                interface(protocol, "ICallee.sol"),
                contracts::dydx_icallee(solidity_version),
            ),
            GeneratedFile::new(
                interface(protocol, "ISoloMargin.sol"),
                contracts::dydx_isolo_margin(solidity_version),
            ),
            GeneratedFile::new(
                library(protocol, "Account.sol"),
                contracts::dydx_account(solidity_version),
            ),
            GeneratedFile::new(
                library(protocol, "Actions.sol"),
                contracts::dydx_actions(solidity_version),
            ),
            GeneratedFile::new(
                library(protocol, "Types.sol"),
                contracts::dydx_types(solidity_version),
            ),
        ]
    }

    fn address_contracts(self) -> &'static [&'static str] {
        &["ISoloMargin"]
    }

    fn abi_contracts(self) -> &'static [&'static str] {
        &["ISoloMargin"]
    }
}
