//! Aggregated generation artifacts: the address table, the ABI table and
//! the dependency set.
//!
//! Insertion is synchronous and deduplicating. Callers must not suspend
//! between a duplicate check and the insert, so both happen inside one call.

use std::collections::{BTreeMap, HashSet};

use crate::domain::{
    entities::{AbiRecord, AddressRecord},
    value_objects::{Network, ProtocolId},
};

/// Location of the generated address table, relative to the project root.
pub const ADDRESSES_FILE: &str = "lib/addresses.ts";
/// Location of the generated ABI table.
pub const ABIS_FILE: &str = "lib/__abis__/abis.ts";
/// Directory holding one `<Contract>.json` per exported ABI.
pub const ABI_JSON_DIR: &str = "lib/__abis__/abis";

// ── AddressTable ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressEntry {
    pub contract_name: String,
    pub address: String,
}

/// Addresses per protocol and network, unique by `(protocol, network, address)`.
#[derive(Debug, Default, Clone)]
pub struct AddressTable {
    protocols: BTreeMap<ProtocolId, BTreeMap<Network, Vec<AddressEntry>>>,
}

impl AddressTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record. Returns `false` when the address is already present
    /// for that protocol and network.
    pub fn insert(&mut self, protocol: ProtocolId, record: &AddressRecord) -> bool {
        let entries = self
            .protocols
            .entry(protocol)
            .or_default()
            .entry(record.network)
            .or_default();

        if entries.iter().any(|e| e.address == record.address) {
            return false;
        }
        entries.push(AddressEntry {
            contract_name: record.contract_name.clone(),
            address: record.address.clone(),
        });
        true
    }

    pub fn len(&self) -> usize {
        self.protocols
            .values()
            .flat_map(|networks| networks.values())
            .map(Vec::len)
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Render `lib/addresses.ts`.
    ///
    /// Protocols and networks without records are omitted.
    pub fn render(&self) -> String {
        let mut out = String::from("export const Addresses = {");

        for (protocol, networks) in &self.protocols {
            if networks.values().all(Vec::is_empty) {
                continue;
            }
            out.push_str(&format!("\n  {protocol}: {{"));
            for (network, entries) in networks {
                if entries.is_empty() {
                    continue;
                }
                out.push_str(&format!("\n    {network}: {{"));
                for entry in entries {
                    out.push_str(&format!(
                        "\n      {}: '{}',",
                        entry.contract_name, entry.address
                    ));
                }
                out.push_str("\n    },");
            }
            out.push_str("\n  },\n");
        }

        out.push_str("\n}");
        out.trim().to_string()
    }
}

// ── AbiTable ─────────────────────────────────────────────────────────────────

/// ABIs per protocol, unique by `(protocol, contract_name)`.
#[derive(Debug, Default, Clone)]
pub struct AbiTable {
    protocols: BTreeMap<ProtocolId, Vec<AbiRecord>>,
}

impl AbiTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record. Returns `false` when the contract is already present
    /// for that protocol.
    pub fn insert(&mut self, protocol: ProtocolId, record: &AbiRecord) -> bool {
        let records = self.protocols.entry(protocol).or_default();
        if records
            .iter()
            .any(|r| r.contract_name == record.contract_name)
        {
            return false;
        }
        records.push(record.clone());
        true
    }

    pub fn records(&self) -> impl Iterator<Item = &AbiRecord> {
        self.protocols.values().flatten()
    }

    pub fn len(&self) -> usize {
        self.protocols.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Render `lib/__abis__/abis.ts`, one export per protocol with ABIs.
    pub fn render(&self) -> String {
        let mut out = String::from("/* eslint-disable */");

        for (protocol, records) in &self.protocols {
            if records.is_empty() {
                continue;
            }
            out.push_str(&format!("\n\nexport const {protocol}_ABIs = {{"));
            for record in records {
                out.push_str(&format!(
                    "\n  {name}: require('./abis/{name}.json'),",
                    name = record.contract_name
                ));
            }
            out.push_str("\n}");
        }

        out.trim().to_string()
    }
}

// ── DependencySet ────────────────────────────────────────────────────────────

/// Ordered union of package names. Empty names are dropped.
#[derive(Debug, Default, Clone)]
pub struct DependencySet {
    seen: HashSet<String>,
    ordered: Vec<String>,
}

impl DependencySet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, package: &str) -> bool {
        let package = package.trim();
        if package.is_empty() || !self.seen.insert(package.to_string()) {
            return false;
        }
        self.ordered.push(package.to_string());
        true
    }

    pub fn into_vec(self) -> Vec<String> {
        self.ordered
    }
}

impl<S: AsRef<str>> Extend<S> for DependencySet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for package in iter {
            self.insert(package.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for DependencySet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn address(network: Network, name: &str, address: &str) -> AddressRecord {
        AddressRecord {
            network,
            contract_name: name.into(),
            address: address.into(),
        }
    }

    fn abi(name: &str) -> AbiRecord {
        AbiRecord {
            contract_name: name.into(),
            abi: "[]".into(),
        }
    }

    #[test]
    fn duplicate_address_is_ignored() {
        let mut table = AddressTable::new();
        let record = address(Network::Mainnet, "ContractRegistry", "0xabc");
        assert!(table.insert(ProtocolId::Bancor, &record));
        assert!(!table.insert(ProtocolId::Bancor, &record));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn same_address_on_other_network_is_kept() {
        let mut table = AddressTable::new();
        table.insert(ProtocolId::Uniswap, &address(Network::Mainnet, "R", "0x1"));
        table.insert(ProtocolId::Uniswap, &address(Network::Kovan, "R", "0x1"));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn empty_address_table_renders_bare_object() {
        assert_eq!(AddressTable::new().render(), "export const Addresses = {\n}");
    }

    #[test]
    fn address_table_renders_nested_objects() {
        let mut table = AddressTable::new();
        table.insert(
            ProtocolId::Bancor,
            &address(Network::Mainnet, "ContractRegistry", "0xabc"),
        );
        table.insert(ProtocolId::Bancor, &address(Network::Kovan, "ContractRegistry", ""));

        let expected = "export const Addresses = {\n  BANCOR: {\n    MAINNET: {\n      ContractRegistry: '0xabc',\n    },\n    KOVAN: {\n      ContractRegistry: '',\n    },\n  },\n\n}";
        assert_eq!(table.render(), expected);
    }

    #[test]
    fn duplicate_abi_is_ignored() {
        let mut table = AbiTable::new();
        assert!(table.insert(ProtocolId::OneInch, &abi("IOneSplit")));
        assert!(!table.insert(ProtocolId::OneInch, &abi("IOneSplit")));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn empty_abi_table_renders_header_only() {
        assert_eq!(AbiTable::new().render(), "/* eslint-disable */");
    }

    #[test]
    fn abi_table_renders_requires() {
        let mut table = AbiTable::new();
        table.insert(ProtocolId::Bancor, &abi("BancorNetwork"));
        table.insert(ProtocolId::Bancor, &abi("ContractRegistry"));

        let expected = "/* eslint-disable */\n\nexport const BANCOR_ABIs = {\n  BancorNetwork: require('./abis/BancorNetwork.json'),\n  ContractRegistry: require('./abis/ContractRegistry.json'),\n}";
        assert_eq!(table.render(), expected);
    }

    #[test]
    fn dependency_set_is_an_ordered_union() {
        let set: DependencySet = ["@bancor/sdk", "", "web3", "@bancor/sdk", "  "]
            .into_iter()
            .collect();
        assert_eq!(set.into_vec(), vec!["@bancor/sdk", "web3"]);
    }
}
