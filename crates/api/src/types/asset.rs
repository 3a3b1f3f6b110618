//! Asset types for Yearn vaults.

use alloy_primitives::Address;
use serde::{Deserialize, Serialize};
use yearn_oracle_watch_contracts::TokenMetadata;

use super::scalars::parse_address;

/// The ERC-20 a vault holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    /// The asset's contract address.
    pub address: Address,
    /// The asset's name (e.g., "USD Coin").
    pub name: String,
    /// The asset's symbol (e.g., "USDC").
    pub symbol: String,
    /// The asset's decimals.
    pub decimals: u8,
}

impl Asset {
    /// Convert GraphQL response fields into an [`Asset`].
    ///
    /// Missing strings default to empty and missing decimals to zero.
    /// Returns `None` if the address is absent or not a valid 20-byte hex
    /// string.
    pub fn from_gql(
        address: Option<&str>,
        name: Option<String>,
        symbol: Option<String>,
        decimals: Option<i64>,
    ) -> Option<Self> {
        Some(Asset {
            address: parse_address(address?)?,
            name: name.unwrap_or_default(),
            symbol: symbol.unwrap_or_default(),
            decimals: decimals.and_then(|d| u8::try_from(d).ok()).unwrap_or(0),
        })
    }
}

impl From<TokenMetadata> for Asset {
    fn from(token: TokenMetadata) -> Self {
        Asset {
            address: token.address,
            name: token.name,
            symbol: token.symbol,
            decimals: token.decimals,
        }
    }
}
