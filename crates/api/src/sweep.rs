//! Oracle sweep: query the APR oracle for many vaults and summarize how it
//! fared.
//!
//! A vault passes when the oracle produced a current or a projected APR.
//! Failures are classified by [`SweepErrorKind`] and rolled up into a
//! [`SweepReport`], which renders as JSON, a failed-vault CSV or a markdown
//! summary.

use std::collections::BTreeMap;
use std::fmt;
use std::time::Instant;

use alloy_primitives::{Address, I256, U256};
use futures::stream::{self, StreamExt};
use serde::{Deserialize, Serialize};
use yearn_oracle_watch_contracts::ContractError;

use crate::error::ApiError;
use crate::types::VaultData;
use crate::watch::OracleWatchClient;

/// Message recorded for vaults where the oracle had no value at all.
pub const ORACLE_NA_MESSAGE: &str = "Oracle returned N/A values - no valid APR data available";

/// Default projected delta for sweeps: 1e18 raw asset units.
pub fn default_sweep_delta() -> I256 {
    I256::from_raw(U256::from(1_000_000_000_000_000_000u64))
}

/// Why a vault failed the sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SweepErrorKind {
    #[serde(rename = "Oracle N/A Values")]
    OracleNotAvailable,
    #[serde(rename = "RPC Connection Error")]
    RpcConnection,
    #[serde(rename = "Contract Call Error")]
    ContractCall,
    #[serde(rename = "Timeout Error")]
    Timeout,
    #[serde(rename = "Unsupported Chain")]
    UnsupportedChain,
    #[serde(rename = "Other")]
    Other,
}

impl SweepErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            SweepErrorKind::OracleNotAvailable => "Oracle N/A Values",
            SweepErrorKind::RpcConnection => "RPC Connection Error",
            SweepErrorKind::ContractCall => "Contract Call Error",
            SweepErrorKind::Timeout => "Timeout Error",
            SweepErrorKind::UnsupportedChain => "Unsupported Chain",
            SweepErrorKind::Other => "Other",
        }
    }

    /// Classify an error returned while reading the oracle.
    pub fn classify(error: &ApiError) -> Self {
        match error {
            ApiError::Timeout { .. } => SweepErrorKind::Timeout,
            ApiError::UnsupportedChain(_) | ApiError::MissingRpcUrl(_) => {
                SweepErrorKind::UnsupportedChain
            }
            ApiError::Contract(ContractError::RpcConnection(_)) | ApiError::Request(_) => {
                SweepErrorKind::RpcConnection
            }
            ApiError::Contract(ContractError::CallFailed { .. }) => SweepErrorKind::ContractCall,
            _ => SweepErrorKind::Other,
        }
    }
}

impl fmt::Display for SweepErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The subset of vault metadata a sweep result reports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SweptVault {
    pub name: String,
    pub address: Address,
    pub chain_id: u64,
    pub asset_symbol: String,
    pub asset_name: String,
}

impl From<&VaultData> for SweptVault {
    fn from(vault: &VaultData) -> Self {
        Self {
            name: vault.name.clone(),
            address: vault.address,
            chain_id: vault.chain_id(),
            asset_symbol: vault.asset.symbol.clone(),
            asset_name: vault.asset.name.clone(),
        }
    }
}

/// Outcome of querying one vault.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VaultSweepResult {
    pub vault: SweptVault,
    pub success: bool,
    pub error: Option<String>,
    pub error_kind: Option<SweepErrorKind>,
    pub current_apr: Option<String>,
    pub projected_apr: Option<String>,
    pub percent_change: Option<String>,
    pub duration_ms: u64,
}

/// Totals of a sweep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SweepMetadata {
    pub total_vaults: usize,
    pub successful_vaults: usize,
    pub failed_vaults: usize,
    /// Share of passing vaults, in percent.
    pub success_rate: f64,
    pub average_duration_ms: f64,
    /// Projected delta used, in raw asset units.
    pub delta: String,
}

/// Breakdown of a sweep's results.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SweepAnalysis {
    pub errors_by_type: BTreeMap<SweepErrorKind, usize>,
    pub chain_distribution: BTreeMap<u64, usize>,
    pub asset_distribution: BTreeMap<String, usize>,
}

/// Full sweep report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepReport {
    pub metadata: SweepMetadata,
    pub results: Vec<VaultSweepResult>,
    pub analysis: SweepAnalysis,
}

/// Query the oracle for every vault, running up to `concurrency` queries at
/// once. Results keep the order of `vaults`.
pub async fn run_sweep(
    client: &OracleWatchClient,
    vaults: &[VaultData],
    delta: I256,
    concurrency: usize,
) -> SweepReport {
    tracing::info!(vaults = vaults.len(), %delta, concurrency, "starting oracle sweep");

    let results: Vec<VaultSweepResult> = stream::iter(vaults)
        .map(|vault| sweep_vault(client, vault, delta))
        .buffered(concurrency.max(1))
        .collect()
        .await;

    let report = SweepReport::from_results(results, delta);
    tracing::info!(
        passed = report.metadata.successful_vaults,
        failed = report.metadata.failed_vaults,
        "oracle sweep finished"
    );
    report
}

async fn sweep_vault(client: &OracleWatchClient, vault: &VaultData, delta: I256) -> VaultSweepResult {
    let started = Instant::now();
    let outcome = client
        .get_apr_oracle_data(vault.address, vault.chain_id(), delta)
        .await;
    let duration_ms = started.elapsed().as_millis() as u64;

    let mut result = VaultSweepResult {
        vault: SweptVault::from(vault),
        success: false,
        error: None,
        error_kind: None,
        current_apr: None,
        projected_apr: None,
        percent_change: None,
        duration_ms,
    };

    match outcome {
        Ok(data) => {
            result.success = data.has_values();
            if !result.success {
                result.error = Some(ORACLE_NA_MESSAGE.to_string());
                result.error_kind = Some(SweepErrorKind::OracleNotAvailable);
            }
            result.current_apr = data.current_apr;
            result.projected_apr = data.projected_apr;
            result.percent_change = data.percent_change;
        }
        Err(e) => {
            result.error_kind = Some(SweepErrorKind::classify(&e));
            result.error = Some(e.to_string());
        }
    }

    if result.success {
        tracing::debug!(vault = %vault.address, chain_id = vault.chain_id(), duration_ms, "vault passed");
    } else {
        tracing::warn!(
            vault = %vault.address,
            chain_id = vault.chain_id(),
            error = result.error.as_deref().unwrap_or_default(),
            "vault failed"
        );
    }
    result
}

impl SweepReport {
    /// Aggregate per-vault results.
    pub fn from_results(results: Vec<VaultSweepResult>, delta: I256) -> Self {
        let total = results.len();
        let successful = results.iter().filter(|r| r.success).count();
        let failed = total - successful;

        let (success_rate, average_duration_ms) = if total == 0 {
            (0.0, 0.0)
        } else {
            let durations: u64 = results.iter().map(|r| r.duration_ms).sum();
            (
                successful as f64 / total as f64 * 100.0,
                durations as f64 / total as f64,
            )
        };

        let mut analysis = SweepAnalysis::default();
        for result in &results {
            if let Some(kind) = result.error_kind {
                *analysis.errors_by_type.entry(kind).or_default() += 1;
            }
            *analysis
                .chain_distribution
                .entry(result.vault.chain_id)
                .or_default() += 1;
            *analysis
                .asset_distribution
                .entry(result.vault.asset_symbol.clone())
                .or_default() += 1;
        }

        Self {
            metadata: SweepMetadata {
                total_vaults: total,
                successful_vaults: successful,
                failed_vaults: failed,
                success_rate,
                average_duration_ms,
                delta: delta.to_string(),
            },
            results,
            analysis,
        }
    }

    /// Results of vaults that failed.
    pub fn failures(&self) -> impl Iterator<Item = &VaultSweepResult> {
        self.results.iter().filter(|r| !r.success)
    }

    /// Failed vaults as CSV, or `None` when every vault passed.
    pub fn failed_vaults_csv(&self) -> Option<String> {
        if self.metadata.failed_vaults == 0 {
            return None;
        }

        let mut csv = String::from(
            "Name,Address,ChainId,Asset,Error,CurrentAPR,ProjectedAPR,PercentChange,Duration\n",
        );
        for r in self.failures() {
            csv.push_str(&format!(
                "{},{},{},{},{},{},{},{},{}\n",
                csv_field(&r.vault.name),
                csv_field(&r.vault.address.to_string()),
                r.vault.chain_id,
                csv_field(&r.vault.asset_symbol),
                csv_field(r.error.as_deref().unwrap_or_default()),
                csv_field(r.current_apr.as_deref().unwrap_or_default()),
                csv_field(r.projected_apr.as_deref().unwrap_or_default()),
                csv_field(r.percent_change.as_deref().unwrap_or_default()),
                r.duration_ms,
            ));
        }
        Some(csv)
    }

    /// Markdown summary of the sweep.
    pub fn to_markdown(&self) -> String {
        let m = &self.metadata;
        let mut md = String::from("# APR Oracle Sweep Results\n\n## Summary\n");
        md.push_str(&format!("- **Total Vaults Tested**: {}\n", m.total_vaults));
        md.push_str(&format!("- **Successful**: {}\n", m.successful_vaults));
        md.push_str(&format!("- **Failed**: {}\n", m.failed_vaults));
        md.push_str(&format!("- **Success Rate**: {:.2}%\n", m.success_rate));
        md.push_str(&format!("- **Average Duration**: {:.0}ms\n", m.average_duration_ms));
        md.push_str(&format!("- **Projected Delta**: {}\n\n", m.delta));

        if m.failed_vaults == 0 {
            md.push_str("## All Vaults Successful\n\n");
        } else {
            md.push_str(&format!("## Failed Vaults ({})\n\n", m.failed_vaults));
            md.push_str("| Name | Address | Chain | Asset | Error Type | Current APR | Projected APR | Duration |\n");
            md.push_str("|------|---------|-------|-------|------------|-------------|---------------|----------|\n");
            for r in self.failures() {
                md.push_str(&format!(
                    "| {} | `{}` | {} | {} | {} | {} | {} | {}ms |\n",
                    r.vault.name,
                    r.vault.address,
                    r.vault.chain_id,
                    r.vault.asset_symbol,
                    r.error_kind.unwrap_or(SweepErrorKind::Other),
                    r.current_apr.as_deref().unwrap_or("N/A"),
                    r.projected_apr.as_deref().unwrap_or("N/A"),
                    r.duration_ms,
                ));
            }
            md.push('\n');
        }

        md.push_str("## Error Analysis\n");
        if self.analysis.errors_by_type.is_empty() {
            md.push_str("No errors found!\n");
        } else {
            for (kind, count) in &self.analysis.errors_by_type {
                let share = *count as f64 / m.failed_vaults.max(1) as f64 * 100.0;
                md.push_str(&format!("- **{}**: {} occurrences ({:.1}%)\n", kind, count, share));
            }
        }

        md.push_str("\n## Chain Distribution\n");
        for (chain_id, count) in &self.analysis.chain_distribution {
            md.push_str(&format!("- **Chain {}**: {} vaults\n", chain_id, count));
        }
        md
    }
}

fn csv_field(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}
