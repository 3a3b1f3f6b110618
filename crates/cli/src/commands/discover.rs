//! Vault discovery command implementation.

use anyhow::Result;
use yearn_oracle_watch_api::OracleWatchClient;

use super::{parse_address, Endpoints};
use crate::cli::{DiscoverArgs, OutputFormat};
use crate::output::format_vaults_table;

pub async fn run_discover(
    args: &DiscoverArgs,
    format: OutputFormat,
    endpoints: &Endpoints,
) -> Result<()> {
    let address = parse_address(&args.address, "contract")?;
    let client = OracleWatchClient::with_config(endpoints.client_config_with_rpcs(&args.rpcs))?;

    let chain_ids: Vec<u64> = args.rpcs.iter().map(|rpc| rpc.chain.id()).collect();
    let vaults = client
        .discover_vaults_from_contract(address, &chain_ids)
        .await?;

    match format {
        OutputFormat::Table => {
            println!("{}", format_vaults_table(&vaults));
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&vaults)?;
            println!("{}", json);
        }
    }

    Ok(())
}
