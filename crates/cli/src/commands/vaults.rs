//! Vault listing command implementations.

use anyhow::Result;
use yearn_oracle_watch_api::{search_vaults, KongClient, VaultData};

use super::{parse_address, Endpoints};
use crate::cli::{InfoArgs, ListArgs, OutputFormat};
use crate::output::{format_vault_detail, format_vaults_table};

pub async fn run_vaults_list(
    args: &ListArgs,
    format: OutputFormat,
    endpoints: &Endpoints,
) -> Result<()> {
    let client = KongClient::with_config(endpoints.client_config());
    let mut vaults = client.get_vaults_data().await?;

    if let Some(chain) = args.chain {
        vaults.retain(|v| v.chain_id() == chain.id());
    }

    let mut vaults: Vec<VaultData> = match args.search.as_deref() {
        Some(term) => search_vaults(&vaults, term).into_iter().cloned().collect(),
        None => vaults,
    };

    vaults.truncate(args.limit);

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

pub async fn run_vaults_info(
    args: &InfoArgs,
    format: OutputFormat,
    endpoints: &Endpoints,
) -> Result<()> {
    let address = parse_address(&args.address, "vault")?;
    let client = KongClient::with_config(endpoints.client_config());

    let vault = client.get_vault(address, args.chain.id()).await?;

    match format {
        OutputFormat::Table => {
            println!("{}", format_vault_detail(&vault));
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&vault)?;
            println!("{}", json);
        }
    }

    Ok(())
}
