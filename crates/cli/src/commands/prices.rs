//! Token price command implementation.

use anyhow::{bail, Result};
use serde_json::json;
use yearn_oracle_watch_api::{TokenPrices, YDaemonClient};

use super::Endpoints;
use crate::cli::{OutputFormat, PricesArgs};
use crate::output::{format_prices_table, PriceEntry};

/// Flatten the price table into entries sorted by chain and token.
fn price_entries(prices: &TokenPrices, chain_id: Option<u64>) -> Vec<PriceEntry> {
    let mut entries: Vec<PriceEntry> = prices
        .0
        .iter()
        .filter_map(|(chain, tokens)| Some((chain.parse::<u64>().ok()?, tokens)))
        .filter(|(id, _)| chain_id.is_none_or(|wanted| wanted == *id))
        .flat_map(|(id, tokens)| {
            tokens.keys().filter_map(move |token| {
                let price = prices.find_token_price(token, id)?;
                Some(PriceEntry {
                    chain_id: id,
                    token: token.clone(),
                    price,
                })
            })
        })
        .collect();

    entries.sort_by(|a, b| a.chain_id.cmp(&b.chain_id).then_with(|| a.token.cmp(&b.token)));
    entries
}

pub async fn run_prices(args: &PricesArgs, format: OutputFormat, endpoints: &Endpoints) -> Result<()> {
    let client = YDaemonClient::with_config(endpoints.client_config());
    let prices = client.get_prices().await?;
    let chain_id = args.chain.map(|c| c.id());

    let mut entries = match (args.token.as_deref(), chain_id) {
        (Some(token), Some(id)) => match prices.find_token_price(token, id) {
            Some(price) => vec![PriceEntry {
                chain_id: id,
                token: token.to_string(),
                price,
            }],
            None => bail!("No price found for {} on chain {}", token, id),
        },
        _ => price_entries(&prices, chain_id),
    };

    entries.truncate(args.limit);

    match format {
        OutputFormat::Table => {
            println!("{}", format_prices_table(&entries));
        }
        OutputFormat::Json => {
            let rows: Vec<_> = entries
                .iter()
                .map(|e| json!({ "chainId": e.chain_id, "token": e.token, "price": e.price }))
                .collect();
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
    }

    Ok(())
}
