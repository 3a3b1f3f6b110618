//! yDaemon token prices.

use std::collections::HashMap;

use alloy_primitives::Address;
use serde::{Deserialize, Deserializer, Serialize};

/// yDaemon prices are integers scaled by 1e6.
pub const PRICE_SCALE: f64 = 1_000_000.0;

/// Prices as returned by `GET /prices/all`:
/// `{ chainId: { tokenAddress: price } }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenPrices(
    #[serde(deserialize_with = "deserialize_price_table")] pub HashMap<String, HashMap<String, String>>,
);

impl TokenPrices {
    /// USD price of `address` on `chain_id`.
    ///
    /// Looks the address up as given, then lowercased. Returns `None` when
    /// the chain or token is unknown or the price does not parse.
    pub fn find_token_price(&self, address: &str, chain_id: u64) -> Option<f64> {
        let chain_prices = self.0.get(&chain_id.to_string())?;
        let raw = chain_prices
            .get(address)
            .or_else(|| chain_prices.get(&address.to_lowercase()));

        match raw {
            Some(raw) => raw.parse::<f64>().ok().map(|price| price / PRICE_SCALE),
            None => {
                tracing::debug!(
                    address,
                    chain_id,
                    known_tokens = chain_prices.len(),
                    "no price found for token"
                );
                None
            }
        }
    }

    /// [`find_token_price`](Self::find_token_price) for a parsed address,
    /// trying its checksummed form first.
    pub fn price_of(&self, address: Address, chain_id: u64) -> Option<f64> {
        self.find_token_price(&address.to_checksum(None), chain_id)
    }

    /// Prices known for one chain.
    pub fn chain(&self, chain_id: u64) -> Option<&HashMap<String, String>> {
        self.0.get(&chain_id.to_string())
    }

    /// Total number of token prices across all chains.
    pub fn len(&self) -> usize {
        self.0.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Accept both string and numeric price values.
fn deserialize_price_table<'de, D>(
    deserializer: D,
) -> Result<HashMap<String, HashMap<String, String>>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawPrice {
        Text(String),
        Number(serde_json::Number),
    }

    let raw: HashMap<String, HashMap<String, RawPrice>> = HashMap::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .map(|(chain, prices)| {
            let prices = prices
                .into_iter()
                .map(|(token, price)| {
                    let price = match price {
                        RawPrice::Text(text) => text,
                        RawPrice::Number(number) => number.to_string(),
                    };
                    (token, price)
                })
                .collect();
            (chain, prices)
        })
        .collect())
}
