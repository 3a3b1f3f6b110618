//! Kong scalar conversions.
//!
//! Kong returns addresses as hex strings and chain IDs as GraphQL `Int`s.

use alloy_primitives::Address;

/// Parse a Kong address, tolerating surrounding whitespace.
pub fn parse_address(s: &str) -> Option<Address> {
    s.trim().parse().ok()
}

/// Kong's `Int` chain ID as a `u64`; negative IDs are rejected.
pub fn parse_chain_id(id: Option<i64>) -> Option<u64> {
    id.and_then(|id| u64::try_from(id).ok())
}
