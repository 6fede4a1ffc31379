//! Decimal/fractional carrying between units and nanos.
//!
//! Intermediate conversion results keep both parts as `Decimal` so the
//! fractional remainder of a division survives until the final truncation.

use currency_shared::types::{CurrencyCode, MoneyValue};
use rust_decimal::Decimal;
use rust_decimal::prelude::*;

use super::error::CurrencyError;

/// One whole unit expressed in nanos.
pub const FRACTION_SIZE: Decimal = Decimal::from_parts(1_000_000_000, 0, 0, false, 0);

/// An amount split into units and nanos, both possibly fractional.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecimalAmount {
    /// Whole units (fractional before carrying).
    pub units: Decimal,
    /// Nanos (may exceed one unit before carrying).
    pub nanos: Decimal,
}

impl DecimalAmount {
    /// Creates an amount without normalizing it.
    #[must_use]
    pub const fn new(units: Decimal, nanos: Decimal) -> Self {
        Self { units, nanos }
    }

    /// Normalizes the amount so `units` is integral and `0 <= nanos < 10^9`.
    ///
    /// Expects non-negative parts.
    pub fn carry(self) -> Result<Self, CurrencyError> {
        carry(self.units, self.nanos)
    }

    /// Rounds nanos to the nearest integer, halves away from zero.
    #[must_use]
    pub fn round_nanos(self) -> Self {
        Self {
            units: self.units,
            nanos: self
                .nanos
                .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero),
        }
    }

    /// Floors both parts and builds a money value in `currency_code`.
    pub fn into_money(self, currency_code: CurrencyCode) -> Result<MoneyValue, CurrencyError> {
        let units = self.units.floor().to_i64().ok_or(CurrencyError::Overflow)?;
        let nanos = self.nanos.floor().to_i32().ok_or(CurrencyError::Overflow)?;
        Ok(MoneyValue::new(currency_code, units, nanos)?)
    }
}

/// Moves the fractional part of `units` into `nanos` and whole units out of
/// `nanos`.
///
/// The quotient is taken as `(nanos - nanos mod 10^9) / 10^9`, which stays
/// exact at full `Decimal` precision.
pub fn carry(units: Decimal, nanos: Decimal) -> Result<DecimalAmount, CurrencyError> {
    let nanos = units
        .fract()
        .checked_mul(FRACTION_SIZE)
        .and_then(|extra| nanos.checked_add(extra))
        .ok_or(CurrencyError::Overflow)?;
    let remainder = nanos
        .checked_rem(FRACTION_SIZE)
        .ok_or(CurrencyError::Overflow)?;
    let carried = (nanos - remainder) / FRACTION_SIZE;
    let units = units
        .floor()
        .checked_add(carried)
        .ok_or(CurrencyError::Overflow)?;

    Ok(DecimalAmount::new(units, remainder))
}
