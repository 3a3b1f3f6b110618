//! Kong and yDaemon client implementations.

use std::collections::HashMap;
use std::time::Duration;

use alloy_primitives::Address;
use graphql_client::{GraphQLQuery, QueryBody, Response};
use reqwest::Client;
use yearn_oracle_watch_contracts::APR_ORACLE_ADDRESS;

use crate::cache::{CacheKey, QueryCache};
use crate::error::{ApiError, Result};
use crate::queries::kong::{get_vault, get_vault_data, GetVault, GetVaultData};
use crate::retry::RetryPolicy;
use crate::types::{
    filter_vaults_by_chain_ids, Asset, HistoricalApy, TokenPrices, VaultData,
    DEFAULT_EXCLUDED_CHAIN_IDS,
};

/// Default Kong GraphQL API endpoint.
pub const DEFAULT_KONG_URL: &str = "https://kong.yearn.farm/api/gql";

/// Default yDaemon REST API endpoint.
pub const DEFAULT_YDAEMON_URL: &str = "https://ydaemon.yearn.fi";

/// Default number of retries after a transient failure.
pub const DEFAULT_MAX_RETRIES: u32 = 2;

/// Default delay before the first retry.
pub const DEFAULT_RETRY_BASE_DELAY_MS: u64 = 1000;

/// Default per-request timeout for HTTP and RPC calls.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Default time a cached query result stays fresh.
pub const DEFAULT_CACHE_TTL_SECS: u64 = 60;

/// Cache source names.
const KONG_SOURCE: &str = "kong";
const YDAEMON_SOURCE: &str = "yDaemon";

/// Configuration for the oracle watch clients.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Kong GraphQL API URL.
    pub kong_url: String,
    /// yDaemon REST API base URL.
    pub ydaemon_url: String,
    /// Retries after a transient failure.
    pub max_retries: u32,
    /// Delay before the first retry; doubles per retry, capped at 30s.
    pub retry_base_delay_ms: u64,
    /// Timeout for a single HTTP request or RPC call.
    pub request_timeout_secs: u64,
    /// How long query results are served from cache.
    pub cache_ttl: Duration,
    /// Kong vaults on these chains are dropped.
    pub excluded_chain_ids: Vec<u64>,
    /// RPC endpoint per chain ID.
    pub rpc_urls: HashMap<u64, String>,
    /// APR oracle address, the same on every chain.
    pub apr_oracle: Address,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            kong_url: DEFAULT_KONG_URL.to_string(),
            ydaemon_url: DEFAULT_YDAEMON_URL.to_string(),
            max_retries: DEFAULT_MAX_RETRIES,
            retry_base_delay_ms: DEFAULT_RETRY_BASE_DELAY_MS,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            cache_ttl: Duration::from_secs(DEFAULT_CACHE_TTL_SECS),
            excluded_chain_ids: DEFAULT_EXCLUDED_CHAIN_IDS.to_vec(),
            rpc_urls: HashMap::new(),
            apr_oracle: APR_ORACLE_ADDRESS,
        }
    }
}

impl ClientConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a custom Kong URL.
    pub fn with_kong_url(mut self, url: impl Into<String>) -> Self {
        self.kong_url = url.into();
        self
    }

    /// Set a custom yDaemon URL.
    pub fn with_ydaemon_url(mut self, url: impl Into<String>) -> Self {
        self.ydaemon_url = url.into();
        self
    }

    /// Set the number of retries after a transient failure.
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Set the delay before the first retry.
    pub fn with_retry_base_delay_ms(mut self, delay_ms: u64) -> Self {
        self.retry_base_delay_ms = delay_ms;
        self
    }

    /// Set the timeout for a single request.
    pub fn with_request_timeout_secs(mut self, secs: u64) -> Self {
        self.request_timeout_secs = secs;
        self
    }

    /// Set how long results are cached. Zero disables caching.
    pub fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = ttl;
        self
    }

    /// Replace the excluded chain list.
    pub fn with_excluded_chain_ids(mut self, chain_ids: impl IntoIterator<Item = u64>) -> Self {
        self.excluded_chain_ids = chain_ids.into_iter().collect();
        self
    }

    /// Set the RPC URL for a chain.
    pub fn with_rpc_url(mut self, chain_id: u64, rpc_url: impl Into<String>) -> Self {
        self.rpc_urls.insert(chain_id, rpc_url.into());
        self
    }

    /// Use an oracle deployment other than [`APR_ORACLE_ADDRESS`].
    pub fn with_apr_oracle(mut self, oracle: Address) -> Self {
        self.apr_oracle = oracle;
        self
    }

    /// Retry policy derived from this configuration.
    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(self.max_retries, self.retry_base_delay_ms)
    }

    /// Per-request timeout.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub(crate) fn http_client(&self) -> Client {
        Client::builder()
            .timeout(self.request_timeout())
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "failed to build HTTP client, using defaults");
                Client::new()
            })
    }
}

/// Client for the Kong GraphQL service.
#[derive(Debug, Clone)]
pub struct KongClient {
    http_client: Client,
    config: ClientConfig,
    cache: QueryCache,
}

impl Default for KongClient {
    fn default() -> Self {
        Self::new()
    }
}

impl KongClient {
    /// Create a new Kong client with default configuration.
    pub fn new() -> Self {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new Kong client with custom configuration.
    pub fn with_config(config: ClientConfig) -> Self {
        let cache = QueryCache::new(config.cache_ttl);
        Self::with_cache(config, cache)
    }

    /// Create a Kong client sharing an existing cache.
    pub fn with_cache(config: ClientConfig, cache: QueryCache) -> Self {
        Self {
            http_client: config.http_client(),
            config,
            cache,
        }
    }

    /// Execute a GraphQL query, retrying transient failures.
    async fn execute<Q: GraphQLQuery>(&self, variables: Q::Variables) -> Result<Q::ResponseData> {
        let body = Q::build_query(variables);
        let body = &body;
        self.config
            .retry_policy()
            .run(body.operation_name, move || self.execute_once::<Q>(body))
            .await
    }

    async fn execute_once<Q: GraphQLQuery>(
        &self,
        body: &QueryBody<Q::Variables>,
    ) -> Result<Q::ResponseData> {
        let response = self
            .http_client
            .post(&self.config.kong_url)
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::HttpStatus {
                status: status.as_u16(),
                url: self.config.kong_url.clone(),
            });
        }

        let response_body: Response<Q::ResponseData> = response.json().await?;

        if let Some(errors) = response_body.errors {
            if !errors.is_empty() {
                return Err(ApiError::GraphQL(
                    errors
                        .iter()
                        .map(|e| e.message.clone())
                        .collect::<Vec<_>>()
                        .join("; "),
                ));
            }
        }

        response_body
            .data
            .ok_or_else(|| ApiError::Parse("No data in response".to_string()))
    }

    /// Get every Yearn v3 vault.
    ///
    /// Null entries and entries without a usable address or known chain are
    /// dropped, as are vaults on the configured excluded chains. Results are
    /// cached.
    pub async fn get_vaults_data(&self) -> Result<Vec<VaultData>> {
        self.cache
            .get_or_fetch(CacheKey::simple(KONG_SOURCE, "GetVaultData"), || {
                self.fetch_vaults_data()
            })
            .await
    }

    async fn fetch_vaults_data(&self) -> Result<Vec<VaultData>> {
        let data = self
            .execute::<GetVaultData>(get_vault_data::Variables {})
            .await?;

        let items = data.vaults.unwrap_or_default();
        let total = items.len();
        let vaults: Vec<VaultData> = items
            .into_iter()
            .flatten()
            .filter_map(convert_vault)
            .collect();
        let vaults = filter_vaults_by_chain_ids(vaults, &self.config.excluded_chain_ids);

        tracing::debug!(total, kept = vaults.len(), "fetched kong vaults");
        Ok(vaults)
    }

    /// Get a single vault by address and chain.
    pub async fn get_vault(&self, address: Address, chain_id: u64) -> Result<VaultData> {
        let key = CacheKey::new(KONG_SOURCE, "GetVault", &(chain_id, address));
        self.cache
            .get_or_fetch(key, || self.fetch_vault(address, chain_id))
            .await
    }

    async fn fetch_vault(&self, address: Address, chain_id: u64) -> Result<VaultData> {
        let variables = get_vault::Variables {
            address: address.to_checksum(None),
            chain_id: chain_id as i64,
        };
        let data = self.execute::<GetVault>(variables).await?;
        data.vault
            .and_then(convert_vault_single)
            .ok_or_else(|| ApiError::VaultNotFound {
                address: address.to_string(),
                chain_id,
            })
    }

    /// The cache backing this client.
    pub fn cache(&self) -> &QueryCache {
        &self.cache
    }

    /// Drop every cached Kong result.
    pub async fn invalidate(&self) {
        self.cache.invalidate_source(KONG_SOURCE).await;
    }
}

/// Client for the yDaemon REST service.
#[derive(Debug, Clone)]
pub struct YDaemonClient {
    http_client: Client,
    config: ClientConfig,
    cache: QueryCache,
}

impl Default for YDaemonClient {
    fn default() -> Self {
        Self::new()
    }
}

impl YDaemonClient {
    /// Create a new yDaemon client with default configuration.
    pub fn new() -> Self {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new yDaemon client with custom configuration.
    pub fn with_config(config: ClientConfig) -> Self {
        let cache = QueryCache::new(config.cache_ttl);
        Self::with_cache(config, cache)
    }

    /// Create a yDaemon client sharing an existing cache.
    pub fn with_cache(config: ClientConfig, cache: QueryCache) -> Self {
        Self {
            http_client: config.http_client(),
            config,
            cache,
        }
    }

    fn prices_url(&self) -> String {
        format!("{}/prices/all", self.config.ydaemon_url.trim_end_matches('/'))
    }

    /// Get all token prices, keyed by chain ID then token address.
    ///
    /// Values are integers scaled by 1e6; use
    /// [`TokenPrices::find_token_price`] to read USD prices. Results are
    /// cached.
    pub async fn get_prices(&self) -> Result<TokenPrices> {
        self.cache
            .get_or_fetch(CacheKey::simple(YDAEMON_SOURCE, "prices"), || {
                self.fetch_prices_with_retry()
            })
            .await
    }

    async fn fetch_prices_with_retry(&self) -> Result<TokenPrices> {
        self.config
            .retry_policy()
            .run("yDaemon prices", || self.fetch_prices())
            .await
    }

    async fn fetch_prices(&self) -> Result<TokenPrices> {
        let url = self.prices_url();
        let response = self.http_client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::HttpStatus {
                status: status.as_u16(),
                url,
            });
        }

        let prices: TokenPrices = response.json().await?;
        tracing::debug!(tokens = prices.len(), "fetched ydaemon prices");
        Ok(prices)
    }

    /// Drop cached prices.
    pub async fn invalidate(&self) {
        self.cache.invalidate_source(YDAEMON_SOURCE).await;
    }
}

// Conversion functions from GraphQL types to our types

/// Macro to generate vault conversion functions for both query modules,
/// whose fragment types are distinct but identically shaped.
macro_rules! impl_vault_conversion {
    ($fn_name:ident, $mod:ident) => {
        fn $fn_name(v: $mod::VaultFields) -> Option<VaultData> {
            let asset = v
                .asset
                .and_then(|a| Asset::from_gql(a.address.as_deref(), a.name, a.symbol, a.decimals));
            let apy = v.apy.map(|a| HistoricalApy {
                net: a.net,
                weekly_net: a.weekly_net,
                monthly_net: a.monthly_net,
            });

            let vault = VaultData::from_gql(
                v.address.as_deref(),
                v.symbol,
                v.name,
                v.chain_id,
                asset,
                v.api_version,
                apy,
            );
            if vault.is_none() {
                tracing::debug!(address = ?v.address, chain_id = ?v.chain_id, "dropping unusable kong vault");
            }
            vault
        }
    };
}

impl_vault_conversion!(convert_vault, get_vault_data);
impl_vault_conversion!(convert_vault_single, get_vault);
