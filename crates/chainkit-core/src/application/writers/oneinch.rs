//! 1inch OneSplit packs.

use super::{PackSpec, interface};
use crate::domain::{GeneratedFile, ProtocolId, templates::contracts};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pack {
    OneSplit,
    OneSplitMulti,
}

impl PackSpec for Pack {
    const PROTOCOL: ProtocolId = ProtocolId::OneInch;
    const ALL: &'static [Self] = &[Self::OneSplit, Self::OneSplitMulti];

    fn name(self) -> &'static str {
        match self {
            Self::OneSplit => "ONESPLIT",
            Self::OneSplitMulti => "ONESPLITMULTI",
        }
    }

    fn files(self, solidity_version: &str) -> Vec<GeneratedFile> {
        let one_split = GeneratedFile::new(
            interface(Self::PROTOCOL, "IOneSplit.sol"),
            contracts::oneinch_ione_split(solidity_version),
        );
        match self {
            Self::OneSplit => vec![one_split],
            Self::OneSplitMulti => vec![
                one_split,
                GeneratedFile::new(
                    interface(Self::PROTOCOL, "IOneSplitMulti.sol"),
                    contracts::oneinch_ione_split_multi(solidity_version),
                ),
            ],
        }
    }

    // Both packs are served by the OneSplitAudit deployment.
    fn address_contracts(self) -> &'static [&'static str] {
        &["OneSplitAudit"]
    }

    fn abi_contracts(self) -> &'static [&'static str] {
        match self {
            Self::OneSplit => &["IOneSplit"],
            Self::OneSplitMulti => &["IOneSplit", "IOneSplitMulti"],
        }
    }
}
