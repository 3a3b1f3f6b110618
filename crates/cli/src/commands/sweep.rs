//! Oracle sweep command implementation.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use alloy_primitives::I256;
use anyhow::{bail, Context, Result};
use yearn_oracle_watch_api::{OracleWatchClient, SweepReport};

use super::Endpoints;
use crate::cli::{OutputFormat, SweepArgs};
use crate::output::format_sweep_summary;

/// Write the JSON report, the failed-vault CSV (when anything failed) and the
/// markdown summary into `dir`.
fn write_reports(report: &SweepReport, dir: &Path, timestamp: u64) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory {}", dir.display()))?;

    let mut written = Vec::new();

    let json_path = dir.join(format!("apr-oracle-sweep-results-{}.json", timestamp));
    fs::write(&json_path, serde_json::to_string_pretty(report)?)
        .with_context(|| format!("Failed to write {}", json_path.display()))?;
    written.push(json_path);

    if let Some(csv) = report.failed_vaults_csv() {
        let csv_path = dir.join(format!("failed-vaults-{}.csv", timestamp));
        fs::write(&csv_path, csv)
            .with_context(|| format!("Failed to write {}", csv_path.display()))?;
        written.push(csv_path);
    }

    let md_path = dir.join(format!("apr-oracle-sweep-summary-{}.md", timestamp));
    fs::write(&md_path, report.to_markdown())
        .with_context(|| format!("Failed to write {}", md_path.display()))?;
    written.push(md_path);

    Ok(written)
}

pub async fn run_sweep(args: &SweepArgs, format: OutputFormat, endpoints: &Endpoints) -> Result<()> {
    let delta = I256::from_dec_str(args.delta.trim())
        .with_context(|| format!("Invalid delta: {}", args.delta))?;
    let client = OracleWatchClient::with_config(endpoints.client_config_with_rpcs(&args.rpcs))?;

    let mut vaults = client.get_vaults_data().await?;
    if let Some(chain) = args.chain {
        vaults.retain(|v| v.chain_id() == chain.id());
    }
    if vaults.is_empty() {
        bail!("No vault data found to sweep");
    }
    tracing::info!(vaults = vaults.len(), "fetched vaults to sweep");

    let report =
        yearn_oracle_watch_api::run_sweep(&client, &vaults, delta, args.concurrency.max(1)).await;

    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default();
    let files = write_reports(&report, &args.output_dir, timestamp)?;

    match format {
        OutputFormat::Table => {
            println!("{}", format_sweep_summary(&report, &files));
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&report)?;
            println!("{}", json);
        }
    }

    Ok(())
}
