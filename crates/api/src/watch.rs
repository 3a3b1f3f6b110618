//! Combined client tying Kong, yDaemon and the on-chain APR oracle together.

use std::collections::HashMap;
use std::future::Future;
use std::time::Duration;

use alloy_primitives::{Address, I256, U256};
use futures::future::join_all;
use yearn_oracle_watch_apr::{calculate_percent_change, format_apr_reading, signed_delta, Denomination};
use yearn_oracle_watch_contracts::{
    AprOracleClient, AprReading, ChainReader, ContractError, TokenMetadata, TokenReader,
};

use crate::cache::QueryCache;
use crate::client::{ClientConfig, KongClient, YDaemonClient};
use crate::error::{ApiError, Result};
use crate::types::{
    chain_from_id, is_chain_supported, AprOracleData, Quote, QuoteRequest, TokenPrices, VaultData,
};

/// Client for everything the oracle watcher reads.
///
/// Kong and yDaemon share one [`QueryCache`]. Chain reads go through one
/// [`ChainReader`] per configured RPC URL.
#[derive(Clone)]
pub struct OracleWatchClient {
    config: ClientConfig,
    kong: KongClient,
    ydaemon: YDaemonClient,
    cache: QueryCache,
    readers: HashMap<u64, ChainReader>,
}

impl Default for OracleWatchClient {
    fn default() -> Self {
        Self::new()
    }
}

impl OracleWatchClient {
    /// Create a client with default configuration and no RPC endpoints.
    ///
    /// Only Kong and yDaemon queries work until RPC URLs are configured.
    pub fn new() -> Self {
        let config = ClientConfig::default();
        let cache = QueryCache::new(config.cache_ttl);
        Self {
            kong: KongClient::with_cache(config.clone(), cache.clone()),
            ydaemon: YDaemonClient::with_cache(config.clone(), cache.clone()),
            cache,
            readers: HashMap::new(),
            config,
        }
    }

    /// Create a client with custom configuration.
    ///
    /// Fails if any configured RPC URL is invalid.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let cache = QueryCache::new(config.cache_ttl);

        let mut readers = HashMap::with_capacity(config.rpc_urls.len());
        for (chain_id, rpc_url) in &config.rpc_urls {
            readers.insert(*chain_id, ChainReader::new(rpc_url)?);
        }

        Ok(Self {
            kong: KongClient::with_cache(config.clone(), cache.clone()),
            ydaemon: YDaemonClient::with_cache(config.clone(), cache.clone()),
            cache,
            readers,
            config,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Get the Kong client.
    pub fn kong(&self) -> &KongClient {
        &self.kong
    }

    /// Get the yDaemon client.
    pub fn ydaemon(&self) -> &YDaemonClient {
        &self.ydaemon
    }

    /// The cache shared by the Kong and yDaemon clients.
    pub fn cache(&self) -> &QueryCache {
        &self.cache
    }

    /// Chain IDs with a configured RPC endpoint, ascending.
    pub fn configured_chains(&self) -> Vec<u64> {
        let mut chains: Vec<u64> = self.readers.keys().copied().collect();
        chains.sort_unstable();
        chains
    }

    /// Reader for a supported chain with a configured RPC endpoint.
    pub fn reader(&self, chain_id: u64) -> Result<&ChainReader> {
        if !is_chain_supported(chain_id) {
            return Err(ApiError::UnsupportedChain(chain_id));
        }
        self.readers
            .get(&chain_id)
            .ok_or(ApiError::MissingRpcUrl(chain_id))
    }

    fn oracle(&self, chain_id: u64) -> Result<AprOracleClient> {
        Ok(self.reader(chain_id)?.apr_oracle_at(self.config.apr_oracle))
    }

    /// Get every Yearn v3 vault listed by Kong.
    pub async fn get_vaults_data(&self) -> Result<Vec<VaultData>> {
        self.kong.get_vaults_data().await
    }

    /// Get all token prices from yDaemon.
    pub async fn get_prices(&self) -> Result<TokenPrices> {
        self.ydaemon.get_prices().await
    }

    /// Current and projected APR of `vault` for a change of `delta` asset
    /// units.
    ///
    /// Both readings are fetched concurrently, each bounded by the request
    /// timeout. A reading the oracle cannot produce, or that is zero, is
    /// reported as `None`. The percent change is only derived when both
    /// readings come from the same oracle function.
    pub async fn get_apr_oracle_data(
        &self,
        vault: Address,
        chain_id: u64,
        delta: I256,
    ) -> Result<AprOracleData> {
        let oracle = self.oracle(chain_id)?;

        let (current, projected) = futures::try_join!(
            self.read_apr(&oracle, vault, I256::ZERO),
            self.read_apr(&oracle, vault, delta),
        )?;

        let current_apr = format_apr_reading(current.raw);
        let projected_apr = format_apr_reading(projected.raw);
        // Readings from different oracle functions are not comparable
        let percent_change = if current.source == projected.source {
            calculate_percent_change(current_apr.as_deref(), projected_apr.as_deref())
        } else {
            tracing::warn!(
                %vault,
                chain_id,
                current_source = ?current.source,
                projected_source = ?projected.source,
                "APR readings came from different oracle functions, skipping percent change"
            );
            None
        };

        tracing::debug!(
            %vault,
            chain_id,
            %delta,
            current = ?current_apr,
            projected = ?projected_apr,
            "read APR oracle"
        );

        Ok(AprOracleData {
            current_apr,
            projected_apr,
            percent_change,
            current,
            projected,
        })
    }

    async fn read_apr(
        &self,
        oracle: &AprOracleClient,
        vault: Address,
        delta: I256,
    ) -> Result<AprReading> {
        let limit = self.config.request_timeout();
        self.config
            .retry_policy()
            .run("APR oracle call", || {
                with_timeout("APR oracle call", limit, oracle.get_apr(vault, delta))
            })
            .await
    }

    /// Find a vault's metadata: Kong first, then the vault contract itself.
    pub async fn find_vault(&self, address: Address, chain_id: u64) -> Result<VaultData> {
        match self.kong.get_vaults_data().await {
            Ok(vaults) => {
                if let Some(vault) = vaults
                    .into_iter()
                    .find(|v| v.address == address && v.chain_id() == chain_id)
                {
                    return Ok(vault);
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "kong unavailable, falling back to on-chain lookup");
            }
        }

        let chain = chain_from_id(chain_id).ok_or(ApiError::UnsupportedChain(chain_id))?;
        let reader = self.reader(chain_id)?;
        match reader.probe_vault(address).await? {
            Some(vault) => Ok(VaultData::from_on_chain(vault, chain)),
            None => Err(ApiError::VaultNotFound {
                address: address.to_string(),
                chain_id,
            }),
        }
    }

    /// How would depositing or withdrawing `request.amount` change the APR?
    ///
    /// USD amounts are converted with the yDaemon asset price. When no price
    /// is known the amount is taken as asset units.
    pub async fn quote(&self, request: &QuoteRequest) -> Result<Quote> {
        let vault = self.find_vault(request.vault, request.chain_id).await?;

        let asset_price = match request.denomination {
            Denomination::Usd => {
                let price = match self.get_prices().await {
                    Ok(prices) => prices.price_of(vault.asset.address, request.chain_id),
                    Err(e) => {
                        tracing::warn!(error = %e, "yDaemon prices unavailable");
                        None
                    }
                };
                if price.is_none() {
                    tracing::warn!(
                        asset = %vault.asset.address,
                        chain_id = request.chain_id,
                        "no USD price for asset, treating amount as asset units"
                    );
                }
                price
            }
            Denomination::Asset => None,
        };

        let delta = signed_delta(
            &request.amount,
            vault.asset.decimals,
            request.denomination,
            asset_price,
            request.direction,
        );
        let apr = self
            .get_apr_oracle_data(vault.address, request.chain_id, delta)
            .await?;

        Ok(Quote {
            vault,
            amount: request.amount.clone(),
            denomination: request.denomination,
            direction: request.direction,
            asset_price,
            delta,
            apr,
        })
    }

    /// Look for a Yearn vault at `address` on each of `chain_ids`.
    ///
    /// An empty list probes every configured chain. Chains without an RPC
    /// endpoint, or whose endpoint fails, are skipped.
    pub async fn discover_vaults_from_contract(
        &self,
        address: Address,
        chain_ids: &[u64],
    ) -> Result<Vec<VaultData>> {
        let chain_ids = if chain_ids.is_empty() {
            self.configured_chains()
        } else {
            chain_ids.to_vec()
        };

        let probes = chain_ids.into_iter().filter_map(|chain_id| {
            let chain = chain_from_id(chain_id)?;
            match self.reader(chain_id) {
                Ok(reader) => Some(async move {
                    match reader.probe_vault(address).await {
                        Ok(found) => found.map(|vault| VaultData::from_on_chain(vault, chain)),
                        Err(e) => {
                            tracing::warn!(%address, chain_id, error = %e, "vault probe failed");
                            None
                        }
                    }
                }),
                Err(e) => {
                    tracing::debug!(chain_id, error = %e, "skipping chain");
                    None
                }
            }
        });

        let found: Vec<VaultData> = join_all(probes).await.into_iter().flatten().collect();
        tracing::info!(%address, found = found.len(), "vault discovery finished");
        Ok(found)
    }

    /// ERC-20 balance of `owner`.
    pub async fn token_balance(&self, chain_id: u64, token: Address, owner: Address) -> Result<U256> {
        Ok(self.reader(chain_id)?.balance_of(token, owner).await?)
    }

    /// ERC-20 allowance from `owner` to `spender`.
    pub async fn token_allowance(
        &self,
        chain_id: u64,
        token: Address,
        owner: Address,
        spender: Address,
    ) -> Result<U256> {
        Ok(self.reader(chain_id)?.allowance(token, owner, spender).await?)
    }

    /// ERC-20 name, symbol and decimals.
    pub async fn token_metadata(&self, chain_id: u64, token: Address) -> Result<TokenMetadata> {
        Ok(self.reader(chain_id)?.token_metadata(token).await?)
    }
}

async fn with_timeout<T>(
    operation: &'static str,
    limit: Duration,
    future: impl Future<Output = std::result::Result<T, ContractError>>,
) -> Result<T> {
    match tokio::time::timeout(limit, future).await {
        Ok(result) => result.map_err(ApiError::from),
        Err(_) => Err(ApiError::Timeout {
            operation,
            elapsed: limit,
        }),
    }
}
