//! Conversions between human-readable decimal strings and raw token amounts.

use alloy_primitives::U256;

use crate::error::{AprError, Result};

/// Largest decimals value for which `10^decimals` still fits in a `U256`.
pub const MAX_DECIMALS: u8 = 77;

/// Scale a decimal string (e.g. `"100.5"`) into a raw token amount.
///
/// Fraction digits beyond `decimals` are rounded half-up on the first dropped
/// digit. Signs, exponents and separators are rejected.
pub fn parse_units(value: &str, decimals: u8) -> Result<U256> {
    if decimals > MAX_DECIMALS {
        return Err(AprError::DecimalsOutOfRange {
            decimals,
            max: MAX_DECIMALS,
        });
    }

    let trimmed = value.trim();
    let (int_part, frac_part) = trimmed.split_once('.').unwrap_or((trimmed, ""));

    let is_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if (int_part.is_empty() && frac_part.is_empty()) || !is_digits(int_part) || !is_digits(frac_part)
    {
        return Err(AprError::InvalidAmount(value.to_string()));
    }

    let scale = usize::from(decimals);
    let (kept, dropped) = if frac_part.len() > scale {
        frac_part.split_at(scale)
    } else {
        (frac_part, "")
    };
    let round_up = dropped.bytes().next().is_some_and(|d| d >= b'5');

    let mut digits = String::with_capacity(int_part.len() + scale);
    digits.push_str(int_part);
    digits.push_str(kept);
    digits.extend(std::iter::repeat('0').take(scale - kept.len()));

    let digits = digits.trim_start_matches('0');
    let amount = if digits.is_empty() {
        U256::ZERO
    } else {
        U256::from_str_radix(digits, 10).map_err(|_| AprError::Overflow(value.to_string()))?
    };

    if round_up {
        amount
            .checked_add(U256::from(1))
            .ok_or_else(|| AprError::Overflow(value.to_string()))
    } else {
        Ok(amount)
    }
}

/// Render a raw token amount as a decimal string with trailing zeros removed.
pub fn format_units(value: U256, decimals: u8) -> String {
    let digits = value.to_string();
    let scale = usize::from(decimals);
    if scale == 0 {
        return digits;
    }

    let padded = if digits.len() <= scale {
        format!("{}{}", "0".repeat(scale - digits.len() + 1), digits)
    } else {
        digits
    };
    let (int_part, frac_part) = padded.split_at(padded.len() - scale);
    let frac_part = frac_part.trim_end_matches('0');

    if frac_part.is_empty() {
        int_part.to_string()
    } else {
        format!("{}.{}", int_part, frac_part)
    }
}

/// Clean free-form numeric input typed by a user.
///
/// Keeps digits, `.` and `,`; commas become periods and only the first
/// period survives, so `"1,5"` becomes `"1.5"` and `"1.2.3"` becomes `"1.23"`.
pub fn parse_input_number_string(input: &str) -> String {
    let cleaned: String = input
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == ',')
        .map(|c| if c == ',' { '.' } else { c })
        .collect();

    match cleaned.split_once('.') {
        Some((int_part, rest)) => format!("{}.{}", int_part, rest.replace('.', "")),
        None => cleaned,
    }
}

/// Approximate a `U256` as an `f64`.
pub fn u256_to_f64(value: U256) -> f64 {
    value
        .as_limbs()
        .iter()
        .rev()
        .fold(0.0, |acc, limb| acc * 18_446_744_073_709_551_616.0 + *limb as f64)
}
