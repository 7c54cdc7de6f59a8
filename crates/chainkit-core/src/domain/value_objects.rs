//! Domain value objects: ProtocolId, Network, NetworkSelector, PackageManager.
//!
//! These are pure value types. They hold the per-protocol layout facts
//! (directory names, shared interface usage) but no I/O.
//!
//! # Adding a protocol
//!
//! 1. Add the variant here with its `as_str`, `FromStr` and layout arms
//! 2. Register its addresses, ABIs and packages under `domain::registry`
//! 3. Add its pack module under `application::writers`

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::domain::error::DomainError;

// ── ProtocolId ───────────────────────────────────────────────────────────────

/// A third-party protocol whose interfaces can be vendored.
///
/// Ordering follows declaration order, which is also the order protocols
/// appear in the generated artifacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ProtocolId {
    Aave,
    Bancor,
    DyDx,
    Kyber,
    OneInch,
    Uniswap,
}

impl ProtocolId {
    pub const ALL: [ProtocolId; 6] = [
        Self::Aave,
        Self::Bancor,
        Self::DyDx,
        Self::Kyber,
        Self::OneInch,
        Self::Uniswap,
    ];

    /// Canonical upper-case identifier used in configs and artifacts.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Aave => "AAVE",
            Self::Bancor => "BANCOR",
            Self::DyDx => "DYDX",
            Self::Kyber => "KYBER",
            Self::OneInch => "ONEINCH",
            Self::Uniswap => "UNISWAP",
        }
    }

    /// Directory name under `contracts/interfaces` and `contracts/libraries`.
    pub const fn dir_name(&self) -> &'static str {
        match self {
            Self::Aave => "Aave",
            Self::Bancor => "Bancor",
            Self::DyDx => "DyDx",
            Self::Kyber => "Kyber",
            Self::OneInch => "OneInch",
            Self::Uniswap => "Uniswap",
        }
    }

    /// Whether the protocol ships Solidity libraries next to its interfaces.
    pub const fn has_libraries(&self) -> bool {
        matches!(self, Self::Aave | Self::DyDx)
    }

    /// Whether the protocol's interfaces import the shared OpenZeppelin IERC20.
    pub const fn vendors_erc20(&self) -> bool {
        matches!(self, Self::Bancor | Self::DyDx | Self::Kyber | Self::OneInch)
    }

    /// Directories the one-time protocol setup creates, relative to the
    /// project root.
    pub fn setup_dirs(&self) -> Vec<PathBuf> {
        let mut dirs = vec![PathBuf::from("contracts/interfaces").join(self.dir_name())];
        if self.has_libraries() {
            dirs.push(PathBuf::from("contracts/libraries").join(self.dir_name()));
        }
        dirs
    }
}

impl fmt::Display for ProtocolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProtocolId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "AAVE" => Ok(Self::Aave),
            "BANCOR" => Ok(Self::Bancor),
            "DYDX" => Ok(Self::DyDx),
            "KYBER" => Ok(Self::Kyber),
            "ONEINCH" | "1INCH" => Ok(Self::OneInch),
            "UNISWAP" => Ok(Self::Uniswap),
            _ => Err(DomainError::UnsupportedProtocol {
                protocol: s.to_string(),
            }),
        }
    }
}

// ── Network ──────────────────────────────────────────────────────────────────

/// A live deployment network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Network {
    Mainnet,
    Kovan,
    Ropsten,
}

impl Network {
    /// Every live network, in artifact order.
    pub const LIVE: [Network; 3] = [Self::Mainnet, Self::Kovan, Self::Ropsten];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Mainnet => "MAINNET",
            Self::Kovan => "KOVAN",
            Self::Ropsten => "ROPSTEN",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Network {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "MAINNET" => Ok(Self::Mainnet),
            "KOVAN" => Ok(Self::Kovan),
            "ROPSTEN" => Ok(Self::Ropsten),
            _ => Err(DomainError::UnknownNetwork {
                value: s.to_string(),
            }),
        }
    }
}

// ── NetworkSelector ──────────────────────────────────────────────────────────

/// Which networks a writer emits address records for.
///
/// Serialised as `"all"` or a network name (`"KOVAN"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum NetworkSelector {
    /// One record per live network.
    #[default]
    All,
    /// Exactly one record for the given network.
    Live(Network),
}

impl NetworkSelector {
    pub fn networks(&self) -> Vec<Network> {
        match self {
            Self::All => Network::LIVE.to_vec(),
            Self::Live(network) => vec![*network],
        }
    }
}

impl fmt::Display for NetworkSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Live(network) => network.fmt(f),
        }
    }
}

impl FromStr for NetworkSelector {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        s.parse().map(Self::Live)
    }
}

impl TryFrom<String> for NetworkSelector {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<NetworkSelector> for String {
    fn from(value: NetworkSelector) -> Self {
        value.to_string()
    }
}

// ── PackageManager ───────────────────────────────────────────────────────────

/// Node package manager used for `init` and dependency installation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageManager {
    #[default]
    Yarn,
    Npm,
}

impl PackageManager {
    pub const fn program(&self) -> &'static str {
        match self {
            Self::Yarn => "yarn",
            Self::Npm => "npm",
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.program())
    }
}

impl FromStr for PackageManager {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "yarn" => Ok(Self::Yarn),
            "npm" => Ok(Self::Npm),
            other => Err(DomainError::InvalidConfig(format!(
                "unknown package manager: {other}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn protocol_parses_case_insensitively() {
        assert_eq!("bancor".parse::<ProtocolId>().unwrap(), ProtocolId::Bancor);
        assert_eq!("DyDx".parse::<ProtocolId>().unwrap(), ProtocolId::DyDx);
        assert_eq!("UNISWAP".parse::<ProtocolId>().unwrap(), ProtocolId::Uniswap);
        assert!("NOT_A_REAL_PROTOCOL".parse::<ProtocolId>().is_err());
    }

    #[test]
    fn only_libraries_protocols_get_a_library_dir() {
        assert_eq!(ProtocolId::DyDx.setup_dirs().len(), 2);
        assert_eq!(ProtocolId::Aave.setup_dirs().len(), 2);
        assert_eq!(
            ProtocolId::Kyber.setup_dirs(),
            vec![PathBuf::from("contracts/interfaces/Kyber")]
        );
    }

    #[test]
    fn uniswap_does_not_vendor_erc20() {
        assert!(!ProtocolId::Uniswap.vendors_erc20());
        assert!(!ProtocolId::Aave.vendors_erc20());
        assert!(ProtocolId::Bancor.vendors_erc20());
    }

    #[test]
    fn selector_parses_all_and_networks() {
        assert_eq!("all".parse::<NetworkSelector>().unwrap(), NetworkSelector::All);
        assert_eq!(
            "kovan".parse::<NetworkSelector>().unwrap(),
            NetworkSelector::Live(Network::Kovan)
        );
        assert!("goerli".parse::<NetworkSelector>().is_err());
    }

    #[test]
    fn selector_expands_to_networks() {
        assert_eq!(NetworkSelector::All.networks().len(), 3);
        assert_eq!(
            NetworkSelector::Live(Network::Ropsten).networks(),
            vec![Network::Ropsten]
        );
    }

    #[test]
    fn selector_round_trips_through_serde() {
        let json = serde_json::to_string(&NetworkSelector::Live(Network::Mainnet)).unwrap();
        assert_eq!(json, "\"MAINNET\"");
        let parsed: NetworkSelector = serde_json::from_str("\"all\"").unwrap();
        assert_eq!(parsed, NetworkSelector::All);
    }
}
