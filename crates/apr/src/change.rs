//! Relative change between current and projected APR.

use rust_decimal::Decimal;

use crate::format::{fixed_decimals, parse_percent};

/// Relative change in percent between two APR percentages.
///
/// Returns `None` when `current` is zero.
pub fn percent_change(current: f64, projected: f64) -> Option<f64> {
    if current == 0.0 {
        return None;
    }
    Some((projected - current) / current * 100.0)
}

/// Relative change between two formatted APR strings, e.g. `"+12.50%"`.
///
/// Returns `None` when either side is missing or unparsable, or when the
/// current APR is zero. Positive changes carry an explicit `+`.
pub fn calculate_percent_change(current: Option<&str>, projected: Option<&str>) -> Option<String> {
    let current = parse_percent(current?)?;
    let projected = parse_percent(projected?)?;
    let change = percent_change(current, projected)?;
    let sign = if change > 0.0 { "+" } else { "" };
    // Exact binary value, so only true ties round away from zero
    let rounded = match Decimal::from_f64_retain(change) {
        Some(decimal) => fixed_decimals(decimal, 2),
        None => format!("{:.2}", change),
    };
    Some(format!("{}{}%", sign, rounded))
}
