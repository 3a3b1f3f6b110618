//! Output formatting for CLI results.

pub mod detail;
pub mod table;

pub use detail::{format_balance, format_quote, format_sweep_summary, format_vault_detail};
pub use table::{format_prices_table, format_vaults_table, PriceEntry};
