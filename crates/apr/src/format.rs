//! Percentage formatting.

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

/// Replace values that cannot be shown as a percentage.
///
/// NaN and zero become `0`; infinities become `100`.
pub fn safe_value(value: f64) -> f64 {
    if value.is_nan() || value == 0.0 {
        0.0
    } else if value.is_infinite() {
        100.0
    } else {
        value
    }
}

/// Insert `,` between groups of three digits in the integer part of a
/// formatted number.
fn group_thousands(formatted: &str) -> String {
    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    match frac_part {
        Some(f) => format!("{}{}.{}", sign, grouped, f),
        None => format!("{}{}", sign, grouped),
    }
}

/// Render `value` with `dp` decimals, rounding ties away from zero.
pub(crate) fn fixed_decimals(value: Decimal, dp: usize) -> String {
    let rounded = value.round_dp_with_strategy(dp as u32, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.*}", dp, rounded)
}

/// Round `value` to `dp` decimals, ties away from zero, starting from its
/// shortest decimal representation so `12.125` becomes `12.13`.
pub fn round_half_up(value: f64, dp: usize) -> String {
    match Decimal::from_str(&value.to_string()) {
        Ok(decimal) => fixed_decimals(decimal, dp),
        // Beyond Decimal's range
        Err(_) => format!("{:.*}", dp, value),
    }
}

/// Format a percentage value (already scaled so that `5.0` means 5%) with
/// `mantissa` decimals, thousands separators and a `%` postfix.
pub fn format_percent(value: f64, mantissa: usize) -> String {
    let value = safe_value(value);
    format!("{}%", group_thousands(&round_half_up(value, mantissa)))
}

/// Parse a string produced by [`format_percent`] back into a number.
pub fn parse_percent(formatted: &str) -> Option<f64> {
    let cleaned: String = formatted
        .trim()
        .chars()
        .filter(|c| *c != '%' && *c != ',')
        .collect();
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}
