//! Table formatting for vault and price lists.

use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};
use yearn_oracle_watch_api::{chain_display_name, VaultData};

#[derive(Tabled)]
struct VaultRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Symbol")]
    symbol: String,
    #[tabled(rename = "Address")]
    address: String,
    #[tabled(rename = "Chain")]
    chain: String,
    #[tabled(rename = "Asset")]
    asset: String,
    #[tabled(rename = "Net APY")]
    apy: String,
}

#[derive(Tabled)]
struct PriceRow {
    #[tabled(rename = "Chain")]
    chain: String,
    #[tabled(rename = "Token")]
    token: String,
    #[tabled(rename = "Price (USD)")]
    price: String,
}

/// A token price ready for display.
pub struct PriceEntry {
    pub chain_id: u64,
    pub token: String,
    pub price: f64,
}

pub(crate) fn truncate_address(addr: &str) -> String {
    if addr.len() > 10 {
        format!("{}...{}", &addr[..6], &addr[addr.len() - 4..])
    } else {
        addr.to_string()
    }
}

fn truncate_name(name: &str, max_len: usize) -> String {
    if name.chars().count() > max_len {
        let kept: String = name.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    } else {
        name.to_string()
    }
}

pub(crate) fn chain_label(chain_id: u64) -> String {
    chain_display_name(chain_id)
        .map(str::to_string)
        .unwrap_or_else(|| chain_id.to_string())
}

pub(crate) fn format_apy(apy: f64) -> String {
    format!("{:.2}%", apy * 100.0)
}

pub(crate) fn format_usd(value: f64) -> String {
    if value >= 1_000_000.0 {
        format!("${:.2}M", value / 1_000_000.0)
    } else if value >= 1_000.0 {
        format!("${:.2}K", value / 1_000.0)
    } else if value >= 0.01 {
        format!("${:.2}", value)
    } else {
        format!("${:.6}", value)
    }
}

fn finish(table: &mut Table) -> String {
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::new(1..)).with(Alignment::left()));
    table.to_string()
}

pub fn format_vaults_table(vaults: &[VaultData]) -> String {
    if vaults.is_empty() {
        return "No vaults found.".to_string();
    }

    let rows: Vec<VaultRow> = vaults
        .iter()
        .map(|v| VaultRow {
            name: truncate_name(&v.name, 30),
            symbol: v.symbol.clone(),
            address: truncate_address(&v.address.to_string()),
            chain: chain_label(v.chain_id()),
            asset: v.asset.symbol.clone(),
            apy: v
                .apy
                .and_then(|a| a.net)
                .map(format_apy)
                .unwrap_or_else(|| "-".to_string()),
        })
        .collect();

    finish(&mut Table::new(rows))
}

pub fn format_prices_table(prices: &[PriceEntry]) -> String {
    if prices.is_empty() {
        return "No prices found.".to_string();
    }

    let rows: Vec<PriceRow> = prices
        .iter()
        .map(|p| PriceRow {
            chain: chain_label(p.chain_id),
            token: p.token.clone(),
            price: format_usd(p.price),
        })
        .collect();

    finish(&mut Table::new(rows))
}
