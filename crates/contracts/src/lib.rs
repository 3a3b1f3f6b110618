//! Contract bindings and read-only clients for the Yearn APR oracle.
//!
//! This crate provides Solidity bindings for the APR oracle, ERC-20 and
//! ERC-4626 / Yearn V3 vault views, plus clients that read them over HTTP.
//!
//! # Example
//!
//! ```no_run
//! use yearn_oracle_watch_contracts::{ChainReader, TokenReader};
//! use alloy::primitives::{Address, I256};
//!
//! #[tokio::main]
//! async fn main() -> yearn_oracle_watch_contracts::Result<()> {
//!     let reader = ChainReader::new("https://eth.llamarpc.com")?;
//!
//!     let vault: Address = "0x...".parse().unwrap();
//!     let asset = reader.asset(vault).await?;
//!     println!("asset decimals: {}", reader.decimals(asset).await?);
//!
//!     // APR if 1,000 units of an 18-decimals asset were deposited
//!     let delta = I256::from_dec_str("1000000000000000000000").unwrap();
//!     let reading = reader.apr_oracle().get_apr(vault, delta).await?;
//!     println!("raw APR: {}", reading.raw);
//!
//!     Ok(())
//! }
//! ```

pub mod apr_oracle;
pub mod chain_reader;
pub mod erc20;
pub mod erc4626;
pub mod error;
pub mod oracle;
pub mod provider;
pub mod token_reader;

pub use apr_oracle::APR_ORACLE_ADDRESS;
pub use chain_reader::{ChainReader, OnChainVault};
pub use error::{ContractError, Result};
pub use oracle::{AprOracleClient, AprReading, AprSource};
pub use provider::{connect_http, HttpProvider};
pub use token_reader::{TokenMetadata, TokenReader};
