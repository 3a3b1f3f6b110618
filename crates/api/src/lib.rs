//! Data sources for watching Yearn vault APRs.
//!
//! This crate combines three sources:
//!
//! - **Kong**, Yearn's GraphQL indexer, for the list of v3 vaults
//! - **yDaemon** for USD token prices
//! - The on-chain **APR oracle**, for current and projected APRs
//!
//! Kong and yDaemon responses are cached for a configurable stale time and
//! transient failures are retried with exponential backoff.
//!
//! # Example
//!
//! ```no_run
//! use yearn_oracle_watch_api::{ClientConfig, OracleWatchClient, QuoteRequest};
//! use alloy_primitives::Address;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), yearn_oracle_watch_api::ApiError> {
//!     let config = ClientConfig::new().with_rpc_url(1, "https://eth.llamarpc.com");
//!     let client = OracleWatchClient::with_config(config)?;
//!
//!     let vaults = client.get_vaults_data().await?;
//!     println!("{} vaults", vaults.len());
//!
//!     // How would a 10,000 USDC deposit move yvUSDC-1's APR?
//!     let vault: Address = "0xBe53A109B494E5c9f97b9Cd39Fe969BE68BF6204".parse().unwrap();
//!     let quote = client.quote(&QuoteRequest::deposit(vault, 1, "10000")).await?;
//!     println!(
//!         "{} -> {} ({})",
//!         quote.apr.current_apr.as_deref().unwrap_or("N/A"),
//!         quote.apr.projected_apr.as_deref().unwrap_or("N/A"),
//!         quote.apr.percent_change.as_deref().unwrap_or("N/A"),
//!     );
//!
//!     Ok(())
//! }
//! ```

pub mod cache;
pub mod client;
pub mod error;
pub mod queries;
pub mod retry;
pub mod sweep;
pub mod types;
pub mod watch;

pub use cache::{CacheKey, QueryCache};
pub use client::{
    ClientConfig, KongClient, YDaemonClient, DEFAULT_CACHE_TTL_SECS, DEFAULT_KONG_URL,
    DEFAULT_MAX_RETRIES, DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_RETRY_BASE_DELAY_MS,
    DEFAULT_YDAEMON_URL,
};
pub use error::{ApiError, ErrorCategory, Result};
pub use retry::{RetryPolicy, MAX_RETRY_DELAY_MS};
pub use sweep::{
    default_sweep_delta, run_sweep, SweepAnalysis, SweepErrorKind, SweepMetadata, SweepReport,
    SweptVault, VaultSweepResult,
};
pub use types::{
    block_explorer_url, chain_display_name, chain_from_id, chain_id_by_name, chain_logo_url,
    explorer_address_url, filter_vaults_by_chain_ids, is_chain_supported, parse_chain,
    search_vaults, token_logo_url, Asset, AprOracleData, HistoricalApy, Quote, QuoteRequest,
    TokenPrices, VaultData, VaultSource, DEFAULT_EXCLUDED_CHAIN_IDS, SUPPORTED_CHAINS,
};
pub use watch::OracleWatchClient;

// Re-export the crates callers need to build requests and read results.
pub use alloy_chains::NamedChain;
pub use yearn_oracle_watch_apr::{format_units, Denomination, Direction};
pub use yearn_oracle_watch_contracts::{AprReading, AprSource, TokenMetadata};
