//! APR math for the Yearn APR oracle.
//!
//! This crate holds the numeric core shared by the API client and the CLI:
//!
//! - Converting user input (asset units or USD) into the signed `int256`
//!   delta the oracle expects
//! - Inferring the fixed-point scale of a raw oracle reading and formatting
//!   it as a percentage
//! - Computing the relative change between current and projected APR
//!
//! # Example
//!
//! ```
//! use alloy_primitives::U256;
//! use yearn_oracle_watch_apr::{calculate_delta, calculate_percent_change, format_apr, Denomination};
//!
//! // 1,000 USDC (6 decimals)
//! let delta = calculate_delta("1000", 6, Denomination::Asset, None);
//! assert_eq!(delta.to_string(), "1000000000");
//!
//! let current = format_apr(U256::from(40_000_000_000_000_000u64));
//! let projected = format_apr(U256::from(38_000_000_000_000_000u64));
//! assert_eq!(current, "4.00%");
//! assert_eq!(
//!     calculate_percent_change(Some(&current), Some(&projected)).as_deref(),
//!     Some("-5.00%")
//! );
//! ```

pub mod change;
pub mod delta;
pub mod error;
pub mod format;
pub mod scale;
pub mod units;

pub use change::{calculate_percent_change, percent_change};
pub use delta::{
    calculate_amount, calculate_delta, signed_delta, usd_to_asset_amount, Denomination, Direction,
};
pub use error::{AprError, Result};
pub use format::{format_percent, parse_percent, round_half_up, safe_value};
pub use scale::{format_apr, format_apr_reading, normalize_apr, AprScale, APR_MANTISSA};
pub use units::{format_units, parse_input_number_string, parse_units, u256_to_f64, MAX_DECIMALS};
