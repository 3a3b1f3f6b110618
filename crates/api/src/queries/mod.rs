//! GraphQL query definitions.

pub mod kong;

pub use kong::{GetVault, GetVaultData};
