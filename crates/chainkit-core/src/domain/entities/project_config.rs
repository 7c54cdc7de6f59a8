//! The project configuration file (`chainkit.json`).
//!
//! Parsing is a flat serde deserialisation followed by a light validation
//! pass. Import requests are not validated here: unknown protocols and packs
//! degrade to diagnostics during generation.

use serde::{Deserialize, Serialize};

use crate::domain::{
    entities::ImportRequest,
    error::DomainError,
    value_objects::{NetworkSelector, PackageManager},
};

/// File name looked up in the project directory.
pub const CONFIG_FILE_NAME: &str = "chainkit.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectConfig {
    /// Solidity compiler version, e.g. `0.8.6`.
    #[serde(rename = "solversion")]
    pub solidity_version: String,
    pub default_net: NetworkSelector,
    #[serde(default)]
    pub eslint: bool,
    #[serde(default)]
    pub git: bool,
    pub contract_write_dir: String,
    #[serde(default)]
    pub ganache: bool,
    #[serde(default)]
    pub mocha: bool,
    #[serde(default)]
    pub packman: PackageManager,
    #[serde(default)]
    pub omit_truffle_hd_wallet_provider: bool,
    #[serde(rename = "ethNodeURL", default)]
    pub eth_node_url: String,
    #[serde(default)]
    pub contract_imports: Vec<ImportRequest>,
    #[serde(default)]
    pub added_dependencies: Vec<String>,
    #[serde(default)]
    pub added_dev_dependencies: Vec<String>,
}

impl ProjectConfig {
    /// The configuration `chainkit init` writes.
    pub fn template() -> Self {
        let import = |protocol: &str, pack: &str, abi: bool| {
            ImportRequest::new(protocol, pack)
                .with_abi(abi)
                .omit_npm_pack(true)
        };

        Self {
            solidity_version: "0.8.6".into(),
            default_net: NetworkSelector::Live(crate::domain::Network::Mainnet),
            eslint: true,
            git: true,
            contract_write_dir: "/lib/__abis__/artifacts".into(),
            ganache: true,
            mocha: true,
            packman: PackageManager::Yarn,
            omit_truffle_hd_wallet_provider: false,
            eth_node_url: "wss://mainnet.infura.io/ws/v3/".into(),
            contract_imports: vec![
                import("AAVE", "ILendingPool", true),
                import("UNISWAP", "V2Router02", true),
                import("DYDX", "Flashloan", false),
                import("KYBER", "IKyberNetworkProxy", true),
                import("ONEINCH", "OneSplit", true),
                import("ONEINCH", "OneSplitMulti", true),
                import("BANCOR", "IBancorNetwork", true),
            ],
            added_dependencies: vec!["express".into()],
            added_dev_dependencies: vec!["@types/express".into()],
        }
    }

    /// Parse and validate a configuration document.
    pub fn from_json(text: &str) -> Result<Self, DomainError> {
        let config: Self =
            serde_json::from_str(text).map_err(|e| DomainError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> Result<String, DomainError> {
        serde_json::to_string_pretty(self).map_err(|e| DomainError::InvalidConfig(e.to_string()))
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.solidity_version.trim().is_empty() {
            return Err(DomainError::InvalidConfig(
                "solversion cannot be empty".into(),
            ));
        }
        if self.contract_write_dir.trim().is_empty() {
            return Err(DomainError::InvalidConfig(
                "contractWriteDir cannot be empty".into(),
            ));
        }
        if let Some(request) = self
            .contract_imports
            .iter()
            .find(|r| r.protocol.trim().is_empty() || r.pack.trim().is_empty())
        {
            return Err(DomainError::InvalidConfig(format!(
                "contract import has an empty protocol or pack: {request:?}"
            )));
        }
        Ok(())
    }
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self::template()
    }
}
