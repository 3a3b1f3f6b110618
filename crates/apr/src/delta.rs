//! Conversion of user input into the signed asset delta passed to the oracle.

use std::fmt;
use std::str::FromStr;

use alloy_primitives::{Sign, I256, U256};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{AprError, Result};
use crate::units::parse_units;

/// Unit the user typed the amount in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Denomination {
    /// Amount is in units of the vault asset.
    #[default]
    Asset,
    /// Amount is in US dollars and must be converted with the asset price.
    Usd,
}

/// Whether the hypothetical change adds or removes assets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Deposit,
    Withdraw,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Deposit => write!(f, "deposit"),
            Direction::Withdraw => write!(f, "withdraw"),
        }
    }
}

/// Convert a USD amount into asset units using the asset's USD price.
///
/// Returns the asset amount as a plain decimal string suitable for
/// [`parse_units`].
pub fn usd_to_asset_amount(usd: &str, price: f64) -> Result<String> {
    if !price.is_finite() || price <= 0.0 {
        return Err(AprError::InvalidPrice(price));
    }
    let usd = Decimal::from_str(usd.trim()).map_err(|_| AprError::InvalidAmount(usd.to_string()))?;
    if usd <= Decimal::ZERO {
        return Err(AprError::InvalidAmount(usd.to_string()));
    }
    let price = Decimal::from_f64(price).ok_or(AprError::InvalidPrice(price))?;
    let amount = usd
        .checked_div(price)
        .ok_or_else(|| AprError::Overflow(usd.to_string()))?;
    Ok(amount.normalize().to_string())
}

/// Convert user input into an unsigned raw asset amount.
///
/// Never fails: empty, zero, negative or malformed input yields zero. With
/// [`Denomination::Usd`] and a positive price the input is divided by the
/// price first; without a usable price the input is taken as asset units.
pub fn calculate_amount(
    input: &str,
    decimals: u8,
    denomination: Denomination,
    price: Option<f64>,
) -> U256 {
    let input = input.trim();
    let input = input.strip_prefix('+').unwrap_or(input);
    let numeric = match input.parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => return U256::ZERO,
    };
    if numeric <= 0.0 {
        return U256::ZERO;
    }

    let amount_in_asset = match (denomination, price) {
        (Denomination::Usd, Some(p)) if p > 0.0 => match usd_to_asset_amount(input, p) {
            Ok(amount) => amount,
            Err(e) => {
                tracing::warn!(input, price = p, error = %e, "failed to convert USD amount");
                return U256::ZERO;
            }
        },
        _ => input.to_string(),
    };

    match parse_units(&amount_in_asset, decimals) {
        Ok(amount) => amount,
        Err(e) => {
            tracing::warn!(
                input,
                amount_in_asset = %amount_in_asset,
                decimals,
                ?denomination,
                ?price,
                error = %e,
                "error calculating delta"
            );
            U256::ZERO
        }
    }
}

/// Convert user input into the positive delta for a deposit.
pub fn calculate_delta(
    input: &str,
    decimals: u8,
    denomination: Denomination,
    price: Option<f64>,
) -> I256 {
    signed_delta(input, decimals, denomination, price, Direction::Deposit)
}

/// Convert user input into a delta signed by `direction`.
///
/// Deposits are positive, withdrawals negative. Amounts beyond the `int256`
/// range collapse to zero like any other unusable input.
pub fn signed_delta(
    input: &str,
    decimals: u8,
    denomination: Denomination,
    price: Option<f64>,
    direction: Direction,
) -> I256 {
    let amount = calculate_amount(input, decimals, denomination, price);
    let sign = match direction {
        Direction::Deposit => Sign::Positive,
        Direction::Withdraw => Sign::Negative,
    };
    I256::checked_from_sign_and_abs(sign, amount).unwrap_or_else(|| {
        tracing::warn!(%amount, %direction, "delta exceeds int256 range");
        I256::ZERO
    })
}
