//! Currency conversion logic.
//!
//! CRITICAL: Rounding pipeline for every conversion:
//! - Divide by the source rate to reach EUR, carry
//! - Round EUR nanos half away from zero
//! - Multiply by the target rate, carry
//! - Floor units and nanos
//!
//! Same-currency conversions take the same route, so they are subject to the
//! same rounding.

use currency_shared::types::MoneyValue;
use rust_decimal::Decimal;

use super::carry::DecimalAmount;
use super::error::CurrencyError;
use super::rates::RateTable;

/// Converts `amount` into `target` through the base currency.
///
/// Fails with [`CurrencyError::UnknownCurrency`] when either code has no
/// rate (source checked first), and rejects negative amounts.
///
/// # Example
///
/// ```
/// use currency_core::currency::{RateTable, convert};
/// use currency_shared::MoneyValue;
/// use rust_decimal_macros::dec;
///
/// let rates = RateTable::new([("EUR", dec!(1)), ("USD", dec!(1.1)), ("JPY", dec!(126.0))]).unwrap();
/// let usd = MoneyValue::new("USD".parse().unwrap(), 100, 0).unwrap();
/// let jpy = convert(&usd, "JPY", &rates).unwrap();
/// assert_eq!((jpy.units, jpy.nanos), (11454, 545_454_534));
/// ```
pub fn convert(
    amount: &MoneyValue,
    target: &str,
    rates: &RateTable,
) -> Result<MoneyValue, CurrencyError> {
    let source = amount.currency_code.as_str();
    let source_rate = rates
        .rate(source)
        .ok_or_else(|| CurrencyError::UnknownCurrency(source.to_string()))?;
    let (target_code, target_rate) = rates
        .get(target)
        .ok_or_else(|| CurrencyError::UnknownCurrency(target.to_string()))?;
    if amount.is_negative() {
        return Err(CurrencyError::NegativeAmount(amount.to_string()));
    }

    // from_currency --> EUR
    let euros = DecimalAmount::new(
        divide(Decimal::from(amount.units), source_rate)?,
        divide(Decimal::from(amount.nanos), source_rate)?,
    )
    .carry()?
    .round_nanos();

    // EUR --> to_currency
    let result = DecimalAmount::new(
        multiply(euros.units, target_rate)?,
        multiply(euros.nanos, target_rate)?,
    )
    .carry()?;

    result.into_money(target_code.clone())
}

fn divide(value: Decimal, rate: Decimal) -> Result<Decimal, CurrencyError> {
    value.checked_div(rate).ok_or(CurrencyError::Overflow)
}

fn multiply(value: Decimal, rate: Decimal) -> Result<Decimal, CurrencyError> {
    value.checked_mul(rate).ok_or(CurrencyError::Overflow)
}
