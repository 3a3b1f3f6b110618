//! Error types for the contracts crate.

use alloy::primitives::Address;
use thiserror::Error;

/// Errors that can occur when reading contracts.
#[derive(Debug, Error)]
pub enum ContractError {
    /// RPC connection failed.
    #[error("RPC connection failed: {0}")]
    RpcConnection(String),

    /// A view call reverted or returned undecodable data.
    #[error("Contract call failed: {method} on {contract}: {message}")]
    CallFailed {
        contract: Address,
        method: &'static str,
        message: String,
    },
}

impl ContractError {
    /// Classify an alloy contract error raised by `method` on `contract`.
    ///
    /// Transport failures become [`ContractError::RpcConnection`]; reverts and
    /// decoding failures become [`ContractError::CallFailed`].
    pub fn from_call(contract: Address, method: &'static str, err: alloy::contract::Error) -> Self {
        match err {
            alloy::contract::Error::TransportError(e) if e.is_transport_error() => {
                ContractError::RpcConnection(e.to_string())
            }
            other => ContractError::CallFailed {
                contract,
                method,
                message: other.to_string(),
            },
        }
    }

    /// Whether the error came from the contract rather than the connection.
    pub fn is_call_failure(&self) -> bool {
        matches!(self, ContractError::CallFailed { .. })
    }
}

/// Result type alias for contract operations.
pub type Result<T> = std::result::Result<T, ContractError>;
