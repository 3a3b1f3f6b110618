//! Type definitions for the oracle watch API.

pub mod apr;
pub mod asset;
pub mod chain;
pub mod prices;
pub mod scalars;
pub mod vault;

pub use apr::{AprOracleData, Quote, QuoteRequest};
pub use asset::Asset;
pub use chain::{
    block_explorer_url, chain_display_name, chain_from_id, chain_id_by_name, chain_logo_url,
    chain_serde, explorer_address_url, is_chain_supported, parse_chain, token_logo_url,
    DEFAULT_EXCLUDED_CHAIN_IDS, SUPPORTED_CHAINS,
};
pub use prices::TokenPrices;
pub use vault::{filter_vaults_by_chain_ids, search_vaults, HistoricalApy, VaultData, VaultSource};
