//! Yearn oracle watch CLI - query vaults, prices and the APR oracle.

mod cli;
mod commands;
mod output;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands, VaultsSubcommand};
use commands::{
    run_balance, run_discover, run_prices, run_query, run_sweep, run_vaults_info,
    run_vaults_list, Endpoints,
};

/// Log to stderr so table and JSON output on stdout stay clean. `RUST_LOG`
/// wins over `-v`.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let endpoints = Endpoints {
        kong_url: cli.kong_url,
        ydaemon_url: cli.ydaemon_url,
    };
    let format = cli.format;

    match cli.command {
        Commands::Vaults { subcommand } => match subcommand {
            VaultsSubcommand::List(args) => {
                run_vaults_list(&args, format, &endpoints).await?;
            }
            VaultsSubcommand::Info(args) => {
                run_vaults_info(&args, format, &endpoints).await?;
            }
        },
        Commands::Query(args) => run_query(&args, format, &endpoints).await?,
        Commands::Prices(args) => run_prices(&args, format, &endpoints).await?,
        Commands::Discover(args) => run_discover(&args, format, &endpoints).await?,
        Commands::Balance(args) => run_balance(&args, format, &endpoints).await?,
        Commands::Sweep(args) => run_sweep(&args, format, &endpoints).await?,
    }

    Ok(())
}
