//! Error types for the oracle watch API client.

use std::time::Duration;

use thiserror::Error;
use yearn_oracle_watch_apr::AprError;
use yearn_oracle_watch_contracts::ContractError;

/// Errors that can occur when using the oracle watch API client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// A REST or GraphQL endpoint answered with a non-success status.
    #[error("HTTP request failed with status {status}: {url}")]
    HttpStatus { status: u16, url: String },

    /// GraphQL query returned errors.
    #[error("GraphQL error: {0}")]
    GraphQL(String),

    /// Failed to parse response.
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// Vault not found.
    #[error("Vault not found: {address} on chain {chain_id}")]
    VaultNotFound { address: String, chain_id: u64 },

    /// Invalid address format.
    #[error("Invalid address format: {0}")]
    InvalidAddress(String),

    /// Chain outside the supported set.
    #[error("Unsupported chain ID: {0}")]
    UnsupportedChain(u64),

    /// No RPC endpoint configured for a chain.
    #[error("No RPC URL configured for chain {0}")]
    MissingRpcUrl(u64),

    /// An operation did not finish in time.
    #[error("{operation} timeout after {elapsed:?}")]
    Timeout {
        operation: &'static str,
        elapsed: Duration,
    },

    /// Contract read failed.
    #[error(transparent)]
    Contract(#[from] ContractError),

    /// Amount or APR conversion failed.
    #[error(transparent)]
    Apr(#[from] AprError),
}

/// High-level classification of an [`ApiError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Transport-level failure talking to an HTTP or RPC endpoint.
    Network,
    /// The remote service answered but the answer was unusable.
    Api,
    /// A contract call reverted or returned undecodable data.
    Contract,
    /// Caller input was rejected.
    Validation,
    /// Missing or unsupported configuration.
    Configuration,
    /// The operation exceeded its deadline.
    Timeout,
}

impl ApiError {
    /// Classify this error.
    pub fn error_category(&self) -> ErrorCategory {
        match self {
            ApiError::Request(e) if e.is_decode() => ErrorCategory::Api,
            ApiError::Request(_) => ErrorCategory::Network,
            ApiError::HttpStatus { status, .. } if is_transient_status(*status) => {
                ErrorCategory::Network
            }
            ApiError::HttpStatus { .. }
            | ApiError::GraphQL(_)
            | ApiError::Parse(_)
            | ApiError::VaultNotFound { .. } => ErrorCategory::Api,
            ApiError::InvalidAddress(_) | ApiError::Apr(_) => ErrorCategory::Validation,
            ApiError::UnsupportedChain(_) | ApiError::MissingRpcUrl(_) => {
                ErrorCategory::Configuration
            }
            ApiError::Timeout { .. } => ErrorCategory::Timeout,
            ApiError::Contract(ContractError::RpcConnection(_)) => ErrorCategory::Network,
            ApiError::Contract(ContractError::CallFailed { .. }) => ErrorCategory::Contract,
        }
    }

    /// Whether repeating the request might succeed.
    ///
    /// Network failures, timeouts, 5xx and 429 responses are retryable;
    /// GraphQL errors, reverts and validation failures are not.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self.error_category(),
            ErrorCategory::Network | ErrorCategory::Timeout
        )
    }
}

fn is_transient_status(status: u16) -> bool {
    status == 429 || (500..600).contains(&status)
}

/// Result type alias for API operations.
pub type Result<T> = std::result::Result<T, ApiError>;
