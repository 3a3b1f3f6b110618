//! APR oracle client.

use alloy::primitives::{Address, I256, U256};
use serde::{Deserialize, Serialize};

use crate::apr_oracle::{IAprOracle, APR_ORACLE_ADDRESS};
use crate::error::{ContractError, Result};
use crate::provider::{connect_http, HttpProvider};

/// Which oracle function produced a reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AprSource {
    /// `getStrategyApr` returned a non-zero value.
    Strategy,
    /// `getExpectedApr` answered after the strategy path had nothing.
    Expected,
    /// Neither function produced a value.
    Unavailable,
}

/// A raw APR value as returned by the oracle, in the oracle's own scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AprReading {
    pub raw: U256,
    pub source: AprSource,
}

impl AprReading {
    /// A zero reading for a vault the oracle cannot price.
    pub fn unavailable() -> Self {
        Self {
            raw: U256::ZERO,
            source: AprSource::Unavailable,
        }
    }

    /// Whether the oracle produced a value.
    pub fn is_available(&self) -> bool {
        self.source != AprSource::Unavailable
    }
}

/// Client for the Yearn APR oracle.
#[derive(Clone)]
pub struct AprOracleClient {
    provider: HttpProvider,
    oracle: Address,
}

impl AprOracleClient {
    /// Create a client for the default oracle deployment.
    pub fn new(rpc_url: &str) -> Result<Self> {
        Ok(Self::from_provider(connect_http(rpc_url)?, APR_ORACLE_ADDRESS))
    }

    /// Create a client from an existing provider and oracle address.
    pub fn from_provider(provider: HttpProvider, oracle: Address) -> Self {
        Self { provider, oracle }
    }

    /// Point the client at a different oracle deployment.
    pub fn with_oracle(mut self, oracle: Address) -> Self {
        self.oracle = oracle;
        self
    }

    /// The oracle address queried by this client.
    pub fn oracle(&self) -> Address {
        self.oracle
    }

    /// Expected APR of `vault` after its assets change by `delta`.
    pub async fn get_expected_apr(&self, vault: Address, delta: I256) -> Result<U256> {
        let contract = IAprOracle::new(self.oracle, &self.provider);
        contract
            .getExpectedApr(vault, delta)
            .call()
            .await
            .map_err(|e| ContractError::from_call(self.oracle, "getExpectedApr", e))
    }

    /// APR of `strategy` after its debt changes by `delta`.
    pub async fn get_strategy_apr(&self, strategy: Address, delta: I256) -> Result<U256> {
        let contract = IAprOracle::new(self.oracle, &self.provider);
        contract
            .getStrategyApr(strategy, delta)
            .call()
            .await
            .map_err(|e| ContractError::from_call(self.oracle, "getStrategyApr", e))
    }

    /// Current APR of `vault`.
    pub async fn get_current_apr(&self, vault: Address) -> Result<U256> {
        let contract = IAprOracle::new(self.oracle, &self.provider);
        contract
            .getCurrentApr(vault)
            .call()
            .await
            .map_err(|e| ContractError::from_call(self.oracle, "getCurrentApr", e))
    }

    /// APR of `vault` after a change of `delta`, with fallbacks.
    ///
    /// Tries `getStrategyApr` first. A revert or a zero answer falls back to
    /// `getExpectedApr`; if that reverts too the reading is
    /// [`AprReading::unavailable`]. Connection failures are never swallowed.
    pub async fn get_apr(&self, vault: Address, delta: I256) -> Result<AprReading> {
        match self.get_strategy_apr(vault, delta).await {
            Ok(raw) if !raw.is_zero() => {
                return Ok(AprReading {
                    raw,
                    source: AprSource::Strategy,
                })
            }
            Ok(_) => {
                tracing::debug!(%vault, %delta, "getStrategyApr returned zero, trying getExpectedApr");
            }
            Err(e) if e.is_call_failure() => {
                tracing::debug!(%vault, %delta, error = %e, "getStrategyApr failed, trying getExpectedApr");
            }
            Err(e) => return Err(e),
        }

        match self.get_expected_apr(vault, delta).await {
            Ok(raw) => Ok(AprReading {
                raw,
                source: AprSource::Expected,
            }),
            Err(e) if e.is_call_failure() => {
                tracing::warn!(%vault, %delta, error = %e, "APR oracle has no value for vault");
                Ok(AprReading::unavailable())
            }
            Err(e) => Err(e),
        }
    }
}
