//! AAVE v2 lending pool packs.

use super::{PackSpec, interface, library};
use crate::domain::{GeneratedFile, ProtocolId, templates::contracts};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pack {
    ILendingPool,
    ILendingPoolAddressesProvider,
}

impl PackSpec for Pack {
    const PROTOCOL: ProtocolId = ProtocolId::Aave;
    const ALL: &'static [Self] = &[Self::ILendingPool, Self::ILendingPoolAddressesProvider];

    fn name(self) -> &'static str {
        match self {
            Self::ILendingPool => "ILENDINGPOOL",
            Self::ILendingPoolAddressesProvider => "ILENDINGPOOLADDRESSESPROVIDER",
        }
    }

    fn files(self, solidity_version: &str) -> Vec<GeneratedFile> {
        let provider = GeneratedFile::new(
            interface(Self::PROTOCOL, "ILendingPoolAddressesProvider.sol"),
            contracts::aave_ilending_pool_addresses_provider(solidity_version),
        );

        match self {
            // ILendingPool imports both the provider and DataTypes.
            Self::ILendingPool => vec![
                provider,
                GeneratedFile::new(
                    interface(Self::PROTOCOL, "ILendingPool.sol"),
                    contracts::aave_ilending_pool(solidity_version),
                ),
                GeneratedFile::new(
                    library(Self::PROTOCOL, "DataTypes.sol"),
                    contracts::aave_data_types(solidity_version),
                ),
            ],
            Self::ILendingPoolAddressesProvider => vec![provider],
        }
    }

    fn address_contracts(self) -> &'static [&'static str] {
        match self {
            Self::ILendingPool => &["LendingPool", "LendingPoolAddressesProvider"],
            Self::ILendingPoolAddressesProvider => &["LendingPoolAddressesProvider"],
        }
    }

    fn abi_contracts(self) -> &'static [&'static str] {
        self.address_contracts()
    }
}
