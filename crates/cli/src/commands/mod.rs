//! Command implementations.

pub mod balance;
pub mod discover;
pub mod prices;
pub mod query;
pub mod sweep;
pub mod vaults;

use alloy_primitives::Address;
use anyhow::{Context, Result};
use yearn_oracle_watch_api::ClientConfig;

use crate::cli::RpcArg;

pub use balance::run_balance;
pub use discover::run_discover;
pub use prices::run_prices;
pub use query::run_query;
pub use sweep::run_sweep;
pub use vaults::{run_vaults_info, run_vaults_list};

/// API endpoints shared by every command.
#[derive(Debug, Clone)]
pub struct Endpoints {
    pub kong_url: String,
    pub ydaemon_url: String,
}

impl Endpoints {
    /// A ClientConfig pointed at these endpoints.
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new()
            .with_kong_url(&self.kong_url)
            .with_ydaemon_url(&self.ydaemon_url)
    }

    /// A ClientConfig with one RPC endpoint per `--rpc` argument.
    pub fn client_config_with_rpcs(&self, rpcs: &[RpcArg]) -> ClientConfig {
        rpcs.iter().fold(self.client_config(), |config, rpc| {
            config.with_rpc_url(rpc.chain.id(), &rpc.url)
        })
    }
}

pub(crate) fn parse_address(value: &str, what: &str) -> Result<Address> {
    value
        .trim()
        .parse()
        .with_context(|| format!("Invalid {} address: {}", what, value))
}
