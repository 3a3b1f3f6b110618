//! APR quote command implementation.

use anyhow::Result;
use yearn_oracle_watch_api::{Denomination, Direction, OracleWatchClient, QuoteRequest};

use super::{parse_address, Endpoints};
use crate::cli::{OutputFormat, QueryArgs};
use crate::output::format_quote;

pub async fn run_query(args: &QueryArgs, format: OutputFormat, endpoints: &Endpoints) -> Result<()> {
    let vault = parse_address(&args.vault, "vault")?;
    let chain_id = args.chain.id();

    let mut config = endpoints
        .client_config()
        .with_rpc_url(chain_id, &args.rpc_url);
    if let Some(oracle) = args.oracle.as_deref() {
        config = config.with_apr_oracle(parse_address(oracle, "oracle")?);
    }
    let client = OracleWatchClient::with_config(config)?;

    let denomination = if args.usd {
        Denomination::Usd
    } else {
        Denomination::Asset
    };
    let direction = if args.withdraw {
        Direction::Withdraw
    } else {
        Direction::Deposit
    };
    let request = QuoteRequest::deposit(vault, chain_id, args.amount.as_str())
        .with_denomination(denomination)
        .with_direction(direction);

    let quote = client.quote(&request).await?;

    match format {
        OutputFormat::Table => {
            println!("{}", format_quote(&quote));
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&quote)?;
            println!("{}", json);
        }
    }

    Ok(())
}
