//! Conversion between raw on-chain token amounts and display units.
//!
//! All conversions use `rust_decimal::Decimal`; amounts never pass
//! through native floating point.

use rust_decimal::{Decimal, RoundingStrategy};
use thiserror::Error;

/// Maximum decimal exponent representable by `Decimal`.
const MAX_DECIMALS: u32 = 28;

/// Unit conversion error.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UnitsError {
    #[error("amount must be non-negative, got {0}")]
    NegativeAmount(Decimal),
    #[error("decimals {0} exceeds the supported maximum of {MAX_DECIMALS}")]
    DecimalsOutOfRange(u32),
}

/// Returns `10^decimals` as a Decimal.
fn pow10(decimals: u32) -> Result<Decimal, UnitsError> {
    if decimals > MAX_DECIMALS {
        return Err(UnitsError::DecimalsOutOfRange(decimals));
    }
    Ok(Decimal::from_i128_with_scale(10i128.pow(decimals), 0))
}

/// Converts a raw integer token amount to display units by dividing by
/// `10^decimals`. Rejects negative input.
pub fn to_unit_amount(raw_amount: Decimal, decimals: u32) -> Result<Decimal, UnitsError> {
    if raw_amount.is_sign_negative() && !raw_amount.is_zero() {
        return Err(UnitsError::NegativeAmount(raw_amount));
    }
    Ok(raw_amount / pow10(decimals)?)
}

/// Converts a display-unit amount to raw units by multiplying by
/// `10^decimals`. Rejects negative input.
pub fn to_base_unit_amount(unit_amount: Decimal, decimals: u32) -> Result<Decimal, UnitsError> {
    if unit_amount.is_sign_negative() && !unit_amount.is_zero() {
        return Err(UnitsError::NegativeAmount(unit_amount));
    }
    Ok(unit_amount * pow10(decimals)?)
}

/// Converts a raw token amount to a display-unit string.
///
/// With `display_decimals` the result is rounded toward zero (balances
/// are never overstated) and zero-padded to that many fractional
/// digits; without it the full precision is returned.
pub fn token_amount_in_units(
    raw_amount: Decimal,
    decimals: u32,
    display_decimals: Option<u32>,
) -> Result<String, UnitsError> {
    let units = to_unit_amount(raw_amount, decimals)?;
    match display_decimals {
        Some(dd) => {
            let rounded = units.round_dp_with_strategy(dd, RoundingStrategy::ToZero);
            Ok(format!("{:.*}", dd as usize, rounded))
        }
        None => Ok(units.normalize().to_string()),
    }
}
