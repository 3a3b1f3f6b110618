//! Provider type definitions for read-only contract clients.

use alloy::providers::{DynProvider, Provider, ProviderBuilder};

use crate::error::{ContractError, Result};

/// The provider type shared by every client in this crate.
///
/// Clients only issue `eth_call`s, so the concrete filler stack is erased.
pub type HttpProvider = DynProvider;

/// Build an [`HttpProvider`] for an RPC endpoint.
pub fn connect_http(rpc_url: &str) -> Result<HttpProvider> {
    let url: url::Url = rpc_url
        .parse()
        .map_err(|e| ContractError::RpcConnection(format!("{}", e)))?;

    Ok(ProviderBuilder::new().connect_http(url).erased())
}
