//! Chain types and helpers for the networks Yearn vaults are watched on.
//!
//! The full `NamedChain` type is re-exported from `alloy_chains`.

use alloy_chains::NamedChain;
use alloy_primitives::Address;

/// Chains the oracle watcher supports.
pub const SUPPORTED_CHAINS: &[NamedChain] = &[
    NamedChain::Mainnet,
    NamedChain::Optimism,
    NamedChain::Gnosis,
    NamedChain::Polygon,
    NamedChain::Sonic,
    NamedChain::Base,
    NamedChain::Arbitrum,
];

/// Chains whose vaults are dropped from Kong listings by default
/// (Katana and Fantom).
pub const DEFAULT_EXCLUDED_CHAIN_IDS: &[u64] = &[747_474, 250];

const CHAIN_NAMES: &[(u64, &str)] = &[
    (1, "Ethereum"),
    (10, "Optimism"),
    (100, "GnosisChain"),
    (137, "Polygon"),
    (146, "Sonic"),
    (250, "Fantom"),
    (8453, "Base"),
    (42161, "Arbitrum"),
    (747_474, "Katana"),
    (80094, "Berachain"),
];

const BLOCK_EXPLORERS: &[(u64, &str)] = &[
    (1, "https://etherscan.io"),
    (10, "https://optimistic.etherscan.io"),
    (100, "https://gnosisscan.io"),
    (137, "https://polygonscan.com"),
    (146, "https://sonicscan.org"),
    (250, "https://ftmscan.com"),
    (8453, "https://basescan.org"),
    (42161, "https://arbiscan.io"),
    (747_474, "https://explorer.katanarpc.com"),
    (80094, "https://berascan.com"),
];

/// Try to create a NamedChain from a chain ID.
pub fn chain_from_id(id: u64) -> Option<NamedChain> {
    NamedChain::try_from(id).ok()
}

/// Whether `chain_id` is one of [`SUPPORTED_CHAINS`].
pub fn is_chain_supported(chain_id: u64) -> bool {
    SUPPORTED_CHAINS
        .iter()
        .any(|chain| u64::from(*chain) == chain_id)
}

/// Human-readable name of a chain, as shown in Yearn frontends.
pub fn chain_display_name(chain_id: u64) -> Option<&'static str> {
    CHAIN_NAMES
        .iter()
        .find(|(id, _)| *id == chain_id)
        .map(|(_, name)| *name)
}

/// Reverse lookup of [`chain_display_name`].
pub fn chain_id_by_name(name: &str) -> Option<u64> {
    CHAIN_NAMES
        .iter()
        .find(|(_, chain_name)| chain_name.eq_ignore_ascii_case(name))
        .map(|(id, _)| *id)
}

/// Parse a chain given as an ID (`8453`), a display name (`Ethereum`) or
/// an alloy chain name (`mainnet`).
pub fn parse_chain(input: &str) -> Option<NamedChain> {
    let input = input.trim();
    if let Ok(id) = input.parse::<u64>() {
        return chain_from_id(id);
    }
    if let Some(id) = chain_id_by_name(input) {
        return chain_from_id(id);
    }
    input.to_ascii_lowercase().parse::<NamedChain>().ok()
}

/// Block explorer base URL of a chain.
pub fn block_explorer_url(chain_id: u64) -> Option<&'static str> {
    BLOCK_EXPLORERS
        .iter()
        .find(|(id, _)| *id == chain_id)
        .map(|(_, url)| *url)
}

/// Explorer link for an address, if the chain has a known explorer.
pub fn explorer_address_url(chain_id: u64, address: Address) -> Option<String> {
    block_explorer_url(chain_id).map(|base| format!("{}/address/{}", base, address))
}

/// 32px chain logo.
pub fn chain_logo_url(chain_id: u64) -> String {
    format!(
        "https://token-assets-one.vercel.app/api/chains/{}/logo-32.png",
        chain_id
    )
}

/// 32px token logo from the Yearn token assets repository.
pub fn token_logo_url(chain_id: u64, address: Address) -> String {
    format!(
        "https://cdn.jsdelivr.net/gh/yearn/tokenassets@main/tokens/{}/{:#x}/logo-32.png",
        chain_id, address
    )
}

/// Serde helper module for serializing/deserializing NamedChain as a chain ID.
///
/// # Example
///
/// ```ignore
/// use alloy_chains::NamedChain;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Serialize, Deserialize)]
/// struct Vault {
///     #[serde(with = "chain_serde")]
///     chain: NamedChain,
/// }
/// ```
pub mod chain_serde {
    use alloy_chains::NamedChain;
    use serde::{self, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(chain: &NamedChain, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64((*chain).into())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NamedChain, D::Error>
    where
        D: Deserializer<'de>,
    {
        let id = u64::deserialize(deserializer)?;
        NamedChain::try_from(id)
            .map_err(|_| serde::de::Error::custom(format!("Unknown chain ID: {}", id)))
    }
}
