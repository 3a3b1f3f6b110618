//! Read-only client bound to a single chain's RPC endpoint.

use alloy::primitives::Address;
use serde::{Deserialize, Serialize};

use crate::apr_oracle::APR_ORACLE_ADDRESS;
use crate::error::{ContractError, Result};
use crate::oracle::AprOracleClient;
use crate::provider::{connect_http, HttpProvider};
use crate::token_reader::{TokenMetadata, TokenReader};

/// A Yearn vault discovered by reading its contract directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnChainVault {
    pub address: Address,
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    pub api_version: String,
    pub asset: TokenMetadata,
}

/// Client for view calls against one chain.
#[derive(Clone)]
pub struct ChainReader {
    provider: HttpProvider,
}

impl ChainReader {
    /// Create a reader for an RPC endpoint.
    pub fn new(rpc_url: &str) -> Result<Self> {
        Ok(Self {
            provider: connect_http(rpc_url)?,
        })
    }

    /// Wrap an existing provider.
    pub fn from_provider(provider: HttpProvider) -> Self {
        Self { provider }
    }

    /// APR oracle client at the default oracle address, sharing this
    /// reader's provider.
    pub fn apr_oracle(&self) -> AprOracleClient {
        self.apr_oracle_at(APR_ORACLE_ADDRESS)
    }

    /// APR oracle client at a custom oracle address.
    pub fn apr_oracle_at(&self, oracle: Address) -> AprOracleClient {
        AprOracleClient::from_provider(self.provider.clone(), oracle)
    }

    /// Check whether `address` is a Yearn vault and read its metadata.
    ///
    /// An address counts as a vault when both `asset()` and `apiVersion()`
    /// succeed. Returns `Ok(None)` when either call reverts; connection
    /// failures are returned as errors.
    pub async fn probe_vault(&self, address: Address) -> Result<Option<OnChainVault>> {
        let (asset, api_version) = futures::join!(self.asset(address), self.api_version(address));

        let asset = match asset {
            Ok(asset) => asset,
            Err(e) => return not_a_vault(address, e),
        };
        let api_version = match api_version {
            Ok(version) => version,
            Err(e) => return not_a_vault(address, e),
        };

        let (vault, asset) =
            futures::try_join!(self.token_metadata(address), self.token_metadata(asset))?;

        Ok(Some(OnChainVault {
            address,
            name: vault.name,
            symbol: vault.symbol,
            decimals: vault.decimals,
            api_version,
            asset,
        }))
    }
}

fn not_a_vault(address: Address, err: ContractError) -> Result<Option<OnChainVault>> {
    if err.is_call_failure() {
        tracing::debug!(%address, error = %err, "address is not a yearn vault");
        Ok(None)
    } else {
        Err(err)
    }
}

impl TokenReader for ChainReader {
    fn provider(&self) -> &HttpProvider {
        &self.provider
    }
}
