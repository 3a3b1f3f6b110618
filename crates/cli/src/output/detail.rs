//! Detailed output formatting for single results.

use std::path::PathBuf;

use alloy_primitives::{Address, U256};
use colored::Colorize;
use yearn_oracle_watch_api::{
    explorer_address_url, format_units, token_logo_url, AprSource, Direction, Quote, SweepReport,
    TokenMetadata, VaultData, VaultSource,
};

use super::table::{chain_label, format_apy, format_usd};

fn header(output: &mut String, title: &str) {
    output.push_str(&format!("{}\n", "=".repeat(60)));
    output.push_str(&format!("{}\n", title.bold()));
    output.push_str(&format!("{}\n\n", "=".repeat(60)));
}

fn section(output: &mut String, title: &str) {
    output.push_str(&format!("{}\n", title.cyan().bold()));
}

fn or_na(value: Option<&str>) -> &str {
    value.unwrap_or("N/A")
}

fn source_label(source: AprSource) -> &'static str {
    match source {
        AprSource::Strategy => "getStrategyApr",
        AprSource::Expected => "getExpectedApr",
        AprSource::Unavailable => "unavailable",
    }
}

pub fn format_vault_detail(vault: &VaultData) -> String {
    let mut output = String::new();
    let chain_id = vault.chain_id();

    header(&mut output, &vault.name);

    section(&mut output, "Basic Info");
    output.push_str(&format!("  Address:     {}\n", vault.address));
    output.push_str(&format!("  Symbol:      {}\n", vault.symbol));
    output.push_str(&format!("  Chain:       {} ({})\n", chain_label(chain_id), chain_id));
    output.push_str(&format!(
        "  API Version: {}\n",
        or_na(vault.api_version.as_deref())
    ));
    let source = match vault.source {
        VaultSource::Kong => "Kong",
        VaultSource::OnChain => "on-chain",
    };
    output.push_str(&format!("  Source:      {}\n", source));
    if let Some(url) = explorer_address_url(chain_id, vault.address) {
        output.push_str(&format!("  Explorer:    {}\n", url));
    }
    output.push('\n');

    section(&mut output, "Asset");
    output.push_str(&format!("  Name:     {}\n", vault.asset.name));
    output.push_str(&format!("  Symbol:   {}\n", vault.asset.symbol));
    output.push_str(&format!("  Address:  {}\n", vault.asset.address));
    output.push_str(&format!("  Decimals: {}\n", vault.asset.decimals));
    output.push_str(&format!(
        "  Logo:     {}\n",
        token_logo_url(chain_id, vault.asset.address)
    ));

    if let Some(apy) = vault.apy {
        output.push('\n');
        section(&mut output, "Historical APY");
        let show = |v: Option<f64>| v.map(format_apy).unwrap_or_else(|| "-".to_string());
        output.push_str(&format!("  Net:     {}\n", show(apy.net)));
        output.push_str(&format!("  Weekly:  {}\n", show(apy.weekly_net)));
        output.push_str(&format!("  Monthly: {}\n", show(apy.monthly_net)));
    }

    output
}

pub fn format_quote(quote: &Quote) -> String {
    let mut output = String::new();
    let vault = &quote.vault;

    header(&mut output, &format!("{} ({})", vault.name, vault.symbol));

    section(&mut output, "Request");
    output.push_str(&format!("  Vault:     {}\n", vault.address));
    output.push_str(&format!("  Chain:     {}\n", chain_label(vault.chain_id())));
    let action = match quote.direction {
        Direction::Deposit => "Deposit",
        Direction::Withdraw => "Withdraw",
    };
    let unit = match quote.asset_price {
        Some(_) => "USD".to_string(),
        None => vault.asset.symbol.clone(),
    };
    output.push_str(&format!("  {:<9}  {} {}\n", format!("{}:", action), quote.amount, unit));
    if let Some(price) = quote.asset_price {
        output.push_str(&format!(
            "  Price:     {} per {}\n",
            format_usd(price),
            vault.asset.symbol
        ));
    }
    let abs_delta = quote.delta.unsigned_abs();
    let sign = if quote.delta.is_negative() { "-" } else { "" };
    output.push_str(&format!(
        "  Delta:     {}{} {} (raw {})\n\n",
        sign,
        format_units(abs_delta, vault.asset.decimals),
        vault.asset.symbol,
        quote.delta
    ));

    section(&mut output, "APR Oracle");
    let apr = &quote.apr;
    output.push_str(&format!(
        "  Current APR:   {}  [{}]\n",
        or_na(apr.current_apr.as_deref()),
        source_label(apr.current.source)
    ));
    output.push_str(&format!(
        "  Projected APR: {}  [{}]\n",
        or_na(apr.projected_apr.as_deref()),
        source_label(apr.projected.source)
    ));

    let change = or_na(apr.percent_change.as_deref());
    let change = if change.starts_with('-') {
        change.red().to_string()
    } else if change.starts_with('+') {
        change.green().to_string()
    } else {
        change.to_string()
    };
    output.push_str(&format!("  Change:        {}\n", change));

    output
}

pub fn format_balance(
    token: &TokenMetadata,
    owner: Address,
    balance: U256,
    allowance: Option<(Address, U256)>,
) -> String {
    let mut output = String::new();

    header(&mut output, &format!("{} ({})", token.name, token.symbol));
    output.push_str(&format!("  Token:     {}\n", token.address));
    output.push_str(&format!("  Owner:     {}\n", owner));
    output.push_str(&format!(
        "  Balance:   {} {}\n",
        format_units(balance, token.decimals),
        token.symbol
    ));

    if let Some((spender, allowance)) = allowance {
        let amount = if allowance == U256::MAX {
            "unlimited".to_string()
        } else {
            format!("{} {}", format_units(allowance, token.decimals), token.symbol)
        };
        output.push_str(&format!("  Spender:   {}\n", spender));
        output.push_str(&format!("  Allowance: {}\n", amount));
    }

    output
}

pub fn format_sweep_summary(report: &SweepReport, files: &[PathBuf]) -> String {
    let mut output = String::new();
    let m = &report.metadata;

    header(&mut output, "APR Oracle Sweep");
    output.push_str(&format!("  Vaults:           {}\n", m.total_vaults));
    output.push_str(&format!(
        "  Passed:           {}\n",
        m.successful_vaults.to_string().green()
    ));
    output.push_str(&format!(
        "  Failed:           {}\n",
        m.failed_vaults.to_string().red()
    ));
    output.push_str(&format!("  Success rate:     {:.2}%\n", m.success_rate));
    output.push_str(&format!("  Average duration: {:.0}ms\n\n", m.average_duration_ms));

    if !report.analysis.errors_by_type.is_empty() {
        section(&mut output, "Errors");
        for (kind, count) in &report.analysis.errors_by_type {
            output.push_str(&format!("  {}: {}\n", kind, count));
        }
        output.push('\n');

        section(&mut output, "Failed Vaults");
        for r in report.failures() {
            output.push_str(&format!(
                "  {} {} on {}: {}\n",
                r.vault.name,
                r.vault.address,
                chain_label(r.vault.chain_id),
                r.error.as_deref().unwrap_or("unknown error")
            ));
        }
        output.push('\n');
    }

    if !files.is_empty() {
        section(&mut output, "Reports");
        for file in files {
            output.push_str(&format!("  {}\n", file.display()));
        }
    }

    output
}
