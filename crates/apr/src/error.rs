//! Error types for the APR math library.

use thiserror::Error;

/// Errors that can occur while converting amounts or APR values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AprError {
    /// The amount is not a plain non-negative decimal number.
    #[error("Invalid amount: {0:?}")]
    InvalidAmount(String),

    /// The token decimals cannot be represented in a 256-bit amount.
    #[error("Decimals out of range: {decimals} (max {max})")]
    DecimalsOutOfRange { decimals: u8, max: u8 },

    /// The scaled amount does not fit in 256 bits.
    #[error("Amount overflows 256 bits: {0}")]
    Overflow(String),

    /// The asset price is zero, negative or not finite.
    #[error("Invalid asset price: {0}")]
    InvalidPrice(f64),
}

/// Result type alias for APR operations.
pub type Result<T> = std::result::Result<T, AprError>;
