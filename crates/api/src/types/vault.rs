//! Vault listing types.

use alloy_chains::NamedChain;
use alloy_primitives::Address;
use serde::{Deserialize, Serialize};
use yearn_oracle_watch_contracts::OnChainVault;

use super::asset::Asset;
use super::chain::{chain_from_id, chain_serde};
use super::scalars::{parse_address, parse_chain_id};

/// Where a [`VaultData`] entry came from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VaultSource {
    /// Listed by the Kong indexer.
    #[default]
    Kong,
    /// Read directly from the vault contract.
    OnChain,
}

/// Historical net APY reported by Kong, as fractions (0.05 = 5%).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct HistoricalApy {
    pub net: Option<f64>,
    pub weekly_net: Option<f64>,
    pub monthly_net: Option<f64>,
}

/// A Yearn vault with the metadata needed to query the APR oracle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VaultData {
    /// The vault's contract address.
    pub address: Address,
    /// The vault's symbol.
    pub symbol: String,
    /// The vault's name.
    pub name: String,
    /// The chain the vault is deployed on.
    #[serde(with = "chain_serde")]
    pub chain: NamedChain,
    /// The vault's underlying asset.
    pub asset: Asset,
    /// Vault API version (e.g. "3.0.2"), when known.
    pub api_version: Option<String>,
    /// Kong's historical APY, absent for vaults discovered on-chain.
    pub apy: Option<HistoricalApy>,
    pub source: VaultSource,
}

impl VaultData {
    /// Build a vault from Kong fields.
    ///
    /// Missing strings default to empty. Returns `None` when the vault or
    /// asset address is missing or invalid, or the chain ID is unknown.
    pub fn from_gql(
        address: Option<&str>,
        symbol: Option<String>,
        name: Option<String>,
        chain_id: Option<i64>,
        asset: Option<Asset>,
        api_version: Option<String>,
        apy: Option<HistoricalApy>,
    ) -> Option<Self> {
        Some(VaultData {
            address: parse_address(address?)?,
            symbol: symbol.unwrap_or_default(),
            name: name.unwrap_or_default(),
            chain: chain_from_id(parse_chain_id(chain_id)?)?,
            asset: asset?,
            api_version,
            apy,
            source: VaultSource::Kong,
        })
    }

    /// Build a vault from an on-chain probe.
    pub fn from_on_chain(vault: OnChainVault, chain: NamedChain) -> Self {
        VaultData {
            address: vault.address,
            symbol: vault.symbol,
            name: vault.name,
            chain,
            asset: vault.asset.into(),
            api_version: Some(vault.api_version),
            apy: None,
            source: VaultSource::OnChain,
        }
    }

    /// Numeric chain ID.
    pub fn chain_id(&self) -> u64 {
        self.chain.into()
    }

    /// Whether `term` matches the vault's name, symbol, address or asset
    /// symbol, ignoring case. An empty term matches everything.
    pub fn matches(&self, term: &str) -> bool {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(&term)
            || self.symbol.to_lowercase().contains(&term)
            || format!("{:#x}", self.address).contains(&term)
            || self.asset.symbol.to_lowercase().contains(&term)
    }
}

/// Vaults matching `term`, in their original order.
pub fn search_vaults<'a>(vaults: &'a [VaultData], term: &str) -> Vec<&'a VaultData> {
    vaults.iter().filter(|vault| vault.matches(term)).collect()
}

/// Drop vaults deployed on any of `excluded` chain IDs.
pub fn filter_vaults_by_chain_ids(vaults: Vec<VaultData>, excluded: &[u64]) -> Vec<VaultData> {
    vaults
        .into_iter()
        .filter(|vault| !excluded.contains(&vault.chain_id()))
        .collect()
}
