//! APR oracle results.

use alloy_primitives::{Address, I256};
use serde::{Deserialize, Serialize};
use yearn_oracle_watch_apr::{Denomination, Direction};
use yearn_oracle_watch_contracts::AprReading;

use super::vault::VaultData;

/// Current and projected APR of a vault for one delta.
///
/// The formatted fields are `None` when the oracle had no value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AprOracleData {
    pub current_apr: Option<String>,
    pub projected_apr: Option<String>,
    pub percent_change: Option<String>,
    pub current: AprReading,
    pub projected: AprReading,
}

impl AprOracleData {
    /// Whether the oracle produced at least one usable APR.
    pub fn has_values(&self) -> bool {
        self.current_apr.is_some() || self.projected_apr.is_some()
    }
}

/// A "what if" request: how would `amount` change the APR of `vault`?
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteRequest {
    pub vault: Address,
    pub chain_id: u64,
    /// Amount as typed by the user.
    pub amount: String,
    pub denomination: Denomination,
    pub direction: Direction,
}

impl QuoteRequest {
    /// A deposit of `amount` asset units.
    pub fn deposit(vault: Address, chain_id: u64, amount: impl Into<String>) -> Self {
        Self {
            vault,
            chain_id,
            amount: amount.into(),
            denomination: Denomination::Asset,
            direction: Direction::Deposit,
        }
    }

    pub fn with_denomination(mut self, denomination: Denomination) -> Self {
        self.denomination = denomination;
        self
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }
}

/// Answer to a [`QuoteRequest`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub vault: VaultData,
    pub amount: String,
    pub denomination: Denomination,
    pub direction: Direction,
    /// USD price of the vault asset, when it was needed and known.
    pub asset_price: Option<f64>,
    /// Signed raw asset amount sent to the oracle.
    pub delta: I256,
    pub apr: AprOracleData,
}
