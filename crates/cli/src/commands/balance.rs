//! Token balance command implementation.

use anyhow::Result;
use serde_json::json;
use yearn_oracle_watch_api::OracleWatchClient;

use super::{parse_address, Endpoints};
use crate::cli::{BalanceArgs, OutputFormat};
use crate::output::format_balance;

pub async fn run_balance(
    args: &BalanceArgs,
    format: OutputFormat,
    endpoints: &Endpoints,
) -> Result<()> {
    let token = parse_address(&args.token, "token")?;
    let owner = parse_address(&args.owner, "owner")?;
    let spender = args
        .spender
        .as_deref()
        .map(|s| parse_address(s, "spender"))
        .transpose()?;

    let chain_id = args.chain.id();
    let config = endpoints
        .client_config()
        .with_rpc_url(chain_id, &args.rpc_url);
    let client = OracleWatchClient::with_config(config)?;

    let metadata = client.token_metadata(chain_id, token).await?;
    let balance = client.token_balance(chain_id, token, owner).await?;
    let allowance = match spender {
        Some(spender) => Some((
            spender,
            client
                .token_allowance(chain_id, token, owner, spender)
                .await?,
        )),
        None => None,
    };

    match format {
        OutputFormat::Table => {
            println!("{}", format_balance(&metadata, owner, balance, allowance));
        }
        OutputFormat::Json => {
            let value = json!({
                "token": metadata,
                "owner": owner,
                "balance": balance.to_string(),
                "spender": spender,
                "allowance": allowance.map(|(_, a)| a.to_string()),
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
    }

    Ok(())
}
