//! Shared read-only token and vault views.
//!
//! This module provides a trait with default implementations for the ERC-20,
//! ERC-4626 and Yearn vault view functions used by the oracle watcher.

#![allow(async_fn_in_trait)]

use alloy::primitives::{Address, U256};
use serde::{Deserialize, Serialize};

use crate::erc20::IERC20;
use crate::erc4626::{IYearnVault, IERC4626};
use crate::error::{ContractError, Result};
use crate::provider::HttpProvider;

/// ERC-20 metadata read on-chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenMetadata {
    pub address: Address,
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
}

/// Trait for reading token and vault state.
///
/// Provides default implementations for every view. Implementors only need
/// to provide `provider()`.
pub trait TokenReader {
    /// Returns a reference to the HTTP provider.
    fn provider(&self) -> &HttpProvider;

    /// Get the decimals of a token.
    async fn decimals(&self, token: Address) -> Result<u8> {
        let contract = IERC20::new(token, self.provider());
        contract
            .decimals()
            .call()
            .await
            .map_err(|e| ContractError::from_call(token, "decimals", e))
    }

    /// Get the symbol of a token.
    async fn symbol(&self, token: Address) -> Result<String> {
        let contract = IERC20::new(token, self.provider());
        contract
            .symbol()
            .call()
            .await
            .map_err(|e| ContractError::from_call(token, "symbol", e))
    }

    /// Get the name of a token.
    async fn name(&self, token: Address) -> Result<String> {
        let contract = IERC20::new(token, self.provider());
        contract
            .name()
            .call()
            .await
            .map_err(|e| ContractError::from_call(token, "name", e))
    }

    /// Get the balance of a token for an address.
    async fn balance_of(&self, token: Address, owner: Address) -> Result<U256> {
        let contract = IERC20::new(token, self.provider());
        contract
            .balanceOf(owner)
            .call()
            .await
            .map_err(|e| ContractError::from_call(token, "balanceOf", e))
    }

    /// Get the allowance granted by `owner` to `spender`.
    async fn allowance(&self, token: Address, owner: Address, spender: Address) -> Result<U256> {
        let contract = IERC20::new(token, self.provider());
        contract
            .allowance(owner, spender)
            .call()
            .await
            .map_err(|e| ContractError::from_call(token, "allowance", e))
    }

    /// Get the underlying asset address of a vault.
    async fn asset(&self, vault: Address) -> Result<Address> {
        let contract = IERC4626::new(vault, self.provider());
        contract
            .asset()
            .call()
            .await
            .map_err(|e| ContractError::from_call(vault, "asset", e))
    }

    /// Get the total assets managed by a vault.
    async fn total_assets(&self, vault: Address) -> Result<U256> {
        let contract = IERC4626::new(vault, self.provider());
        contract
            .totalAssets()
            .call()
            .await
            .map_err(|e| ContractError::from_call(vault, "totalAssets", e))
    }

    /// Convert a share amount to assets.
    async fn convert_to_assets(&self, vault: Address, shares: U256) -> Result<U256> {
        let contract = IERC4626::new(vault, self.provider());
        contract
            .convertToAssets(shares)
            .call()
            .await
            .map_err(|e| ContractError::from_call(vault, "convertToAssets", e))
    }

    /// Get the API version string of a Yearn vault.
    async fn api_version(&self, vault: Address) -> Result<String> {
        let contract = IYearnVault::new(vault, self.provider());
        contract
            .apiVersion()
            .call()
            .await
            .map_err(|e| ContractError::from_call(vault, "apiVersion", e))
    }

    /// Read name, symbol and decimals of a token in parallel.
    async fn token_metadata(&self, token: Address) -> Result<TokenMetadata> {
        let (name, symbol, decimals) =
            futures::try_join!(self.name(token), self.symbol(token), self.decimals(token))?;
        Ok(TokenMetadata {
            address: token,
            name,
            symbol,
            decimals,
        })
    }
}
