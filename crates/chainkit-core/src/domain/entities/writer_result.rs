use crate::domain::value_objects::Network;

/// A known deployment address of one contract on one network.
///
/// An empty `address` is valid: the contract is not deployed there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressRecord {
    pub network: Network,
    pub contract_name: String,
    pub address: String,
}

/// A contract ABI, kept as the opaque JSON text from the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AbiRecord {
    pub contract_name: String,
    pub abi: String,
}

/// What a writer contributes for one import request.
///
/// Every writer returns this one shape; the unsupported writer returns it
/// empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WriterResult {
    pub addresses: Vec<AddressRecord>,
    pub abis: Vec<AbiRecord>,
    pub packages: Vec<String>,
}

impl WriterResult {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty() && self.abis.is_empty() && self.packages.is_empty()
    }
}
