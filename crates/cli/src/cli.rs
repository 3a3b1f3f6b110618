//! CLI argument definitions using clap.

use std::path::PathBuf;
use std::str::FromStr;

use alloy_chains::NamedChain;
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use yearn_oracle_watch_api::{parse_chain, DEFAULT_KONG_URL, DEFAULT_YDAEMON_URL};

/// Yearn oracle watch - query vaults and the on-chain APR oracle
#[derive(Parser, Debug)]
#[command(name = "oracle-watch")]
#[command(about = "CLI tool for watching Yearn vault APRs", long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "table")]
    pub format: OutputFormat,

    /// Kong GraphQL API URL
    #[arg(long, global = true, env = "KONG_API_URL", default_value = DEFAULT_KONG_URL)]
    pub kong_url: String,

    /// yDaemon API URL
    #[arg(long, global = true, env = "YDAEMON_API_URL", default_value = DEFAULT_YDAEMON_URL)]
    pub ydaemon_url: String,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Query Yearn v3 vaults listed by Kong
    Vaults {
        #[command(subcommand)]
        subcommand: VaultsSubcommand,
    },
    /// Current and projected APR for a hypothetical deposit or withdrawal
    Query(QueryArgs),
    /// Token prices from yDaemon
    Prices(PricesArgs),
    /// Check whether an address is a Yearn vault on each chain
    Discover(DiscoverArgs),
    /// ERC-20 balance and allowance
    Balance(BalanceArgs),
    /// Query the APR oracle for every Kong vault and write a report
    Sweep(SweepArgs),
}

#[derive(Subcommand, Debug)]
pub enum VaultsSubcommand {
    /// List vaults
    List(ListArgs),
    /// Get detailed info for a specific vault
    Info(InfoArgs),
}

#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Filter by chain (e.g., ethereum, base, polygon)
    #[arg(long)]
    pub chain: Option<ChainArg>,

    /// Filter by name, symbol, address or asset symbol
    #[arg(long)]
    pub search: Option<String>,

    /// Limit the number of results
    #[arg(short = 'n', long, default_value = "25")]
    pub limit: usize,
}

#[derive(Parser, Debug)]
pub struct InfoArgs {
    /// Vault address
    pub address: String,

    /// Chain the vault is on (default: ethereum)
    #[arg(long, default_value = "ethereum")]
    pub chain: ChainArg,
}

#[derive(Parser, Debug)]
pub struct QueryArgs {
    /// Vault address
    pub vault: String,

    /// Amount to deposit or withdraw (e.g., "1000.5"); omit for current APR only
    #[arg(default_value = "0")]
    pub amount: String,

    /// Chain the vault is on (default: ethereum)
    #[arg(long, default_value = "ethereum")]
    pub chain: ChainArg,

    /// Amount is in USD rather than asset units
    #[arg(long)]
    pub usd: bool,

    /// Simulate a withdrawal instead of a deposit
    #[arg(long)]
    pub withdraw: bool,

    /// RPC URL for the vault's chain (can also use RPC_URL env var)
    #[arg(long, env = "RPC_URL")]
    pub rpc_url: String,

    /// APR oracle address, if not the canonical deployment
    #[arg(long)]
    pub oracle: Option<String>,
}

#[derive(Parser, Debug)]
pub struct PricesArgs {
    /// Only show prices on this chain
    #[arg(long)]
    pub chain: Option<ChainArg>,

    /// Look up a single token address (requires --chain)
    #[arg(long, requires = "chain")]
    pub token: Option<String>,

    /// Limit the number of results
    #[arg(short = 'n', long, default_value = "25")]
    pub limit: usize,
}

#[derive(Parser, Debug)]
pub struct DiscoverArgs {
    /// Contract address to probe
    pub address: String,

    /// RPC endpoint per chain, as CHAIN=URL (repeatable)
    #[arg(long = "rpc", required = true, value_name = "CHAIN=URL")]
    pub rpcs: Vec<RpcArg>,
}

#[derive(Parser, Debug)]
pub struct BalanceArgs {
    /// Token address
    pub token: String,

    /// Holder address
    pub owner: String,

    /// Also read the allowance granted to this address
    #[arg(long)]
    pub spender: Option<String>,

    /// Chain the token is on (default: ethereum)
    #[arg(long, default_value = "ethereum")]
    pub chain: ChainArg,

    /// RPC URL for the token's chain (can also use RPC_URL env var)
    #[arg(long, env = "RPC_URL")]
    pub rpc_url: String,
}

#[derive(Parser, Debug)]
pub struct SweepArgs {
    /// RPC endpoint per chain, as CHAIN=URL (repeatable)
    #[arg(long = "rpc", required = true, value_name = "CHAIN=URL")]
    pub rpcs: Vec<RpcArg>,

    /// Projected delta in raw asset units
    #[arg(long, default_value = "1000000000000000000")]
    pub delta: String,

    /// Only sweep vaults on this chain
    #[arg(long)]
    pub chain: Option<ChainArg>,

    /// Number of vaults queried concurrently
    #[arg(long, default_value = "4")]
    pub concurrency: usize,

    /// Directory the JSON, CSV and markdown reports are written to
    #[arg(long, default_value = "output")]
    pub output_dir: PathBuf,
}

#[derive(ValueEnum, Clone, Copy, Debug, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// Wrapper for NamedChain that implements FromStr with aliases
#[derive(Clone, Copy, Debug)]
pub struct ChainArg(pub NamedChain);

impl ChainArg {
    pub fn id(self) -> u64 {
        self.0.into()
    }
}

impl FromStr for ChainArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chain = match s.to_lowercase().as_str() {
            "ethereum" | "eth" | "mainnet" => NamedChain::Mainnet,
            "optimism" | "op" => NamedChain::Optimism,
            "gnosis" | "xdai" => NamedChain::Gnosis,
            "polygon" | "matic" => NamedChain::Polygon,
            "arbitrum" | "arb" => NamedChain::Arbitrum,
            other => parse_chain(other).ok_or_else(|| format!("Unknown chain: {}", s))?,
        };
        Ok(ChainArg(chain))
    }
}

impl std::fmt::Display for ChainArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A `CHAIN=URL` pair naming the RPC endpoint of one chain.
#[derive(Clone, Debug)]
pub struct RpcArg {
    pub chain: ChainArg,
    pub url: String,
}

impl FromStr for RpcArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (chain, url) = s
            .split_once('=')
            .ok_or_else(|| format!("Expected CHAIN=URL, got: {}", s))?;
        if url.is_empty() {
            return Err(format!("Missing RPC URL for chain {}", chain));
        }
        Ok(RpcArg {
            chain: chain.parse()?,
            url: url.to_string(),
        })
    }
}
