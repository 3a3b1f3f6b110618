//! Inference of the fixed-point scale used by APR oracle readings.
//!
//! Oracle deployments do not agree on a single scale: most return WAD
//! (`1e18` = 100%), older ones basis points or plain percentages. The scale is
//! therefore inferred from the magnitude of the raw value.

use alloy_primitives::U256;
use serde::{Deserialize, Serialize};

use crate::format::format_percent;
use crate::units::u256_to_f64;

/// Decimals shown for formatted APR values.
pub const APR_MANTISSA: usize = 2;

/// Fixed-point scale of a raw APR reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AprScale {
    /// `1e18` = 100%.
    Wad,
    /// `1e8` = 100%.
    Micro,
    /// `10_000` = 100%.
    BasisPoints,
    /// `100` = 100%.
    Percent,
}

impl AprScale {
    /// Infer the scale from the magnitude of a raw reading.
    pub fn infer(raw: U256) -> Self {
        let value = u256_to_f64(raw);
        if value > 1e15 {
            AprScale::Wad
        } else if value > 1e6 {
            AprScale::Micro
        } else if value > 1000.0 {
            AprScale::BasisPoints
        } else {
            AprScale::Percent
        }
    }

    /// Divisor turning a raw reading of this scale into a percentage.
    pub fn percent_divisor(self) -> f64 {
        match self {
            AprScale::Wad => 1e16,
            AprScale::Micro => 1e6,
            AprScale::BasisPoints => 100.0,
            AprScale::Percent => 1.0,
        }
    }
}

/// Convert a raw oracle reading into a percentage (`5.0` means 5%).
pub fn normalize_apr(raw: U256) -> f64 {
    u256_to_f64(raw) / AprScale::infer(raw).percent_divisor()
}

/// Format a raw oracle reading as a percentage string such as `"4.25%"`.
pub fn format_apr(raw: U256) -> String {
    format_percent(normalize_apr(raw), APR_MANTISSA)
}

/// Format a reading, treating zero as "no data".
pub fn format_apr_reading(raw: U256) -> Option<String> {
    if raw.is_zero() {
        None
    } else {
        Some(format_apr(raw))
    }
}
