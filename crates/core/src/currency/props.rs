//! Property-based tests for carry normalization and conversion.
//!
//! - Carry: integral units, nanos in `[0, 10^9)`, value preserved, idempotent
//! - Conversion: zero maps to zero, same-currency drift bounded, outputs
//!   well-formed, deterministic, unknown codes rejected

use std::sync::LazyLock;

use currency_shared::types::MoneyValue;
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::carry::{FRACTION_SIZE, carry};
use super::conversion::convert;
use super::error::CurrencyError;
use super::rates::RateTable;

static RATES: LazyLock<RateTable> =
    LazyLock::new(|| RateTable::bundled().expect("bundled rates are valid"));

/// Strategy to pick any code from the bundled table.
fn supported_code() -> impl Strategy<Value = String> {
    let codes: Vec<String> = RATES.codes().map(ToString::to_string).collect();
    prop::sample::select(codes)
}

/// Strategy to generate non-negative decimals with up to 9 fractional digits.
fn non_negative_decimal() -> impl Strategy<Value = Decimal> {
    (0i64..1_000_000_000_000_000_000i64, 0u32..=9).prop_map(|(mantissa, scale)| {
        Decimal::new(mantissa, scale)
    })
}

/// Strategy to generate well-formed, non-negative money parts.
fn money_parts() -> impl Strategy<Value = (i64, i32)> {
    (0i64..1_000_000_000i64, 0i32..1_000_000_000i32)
}

fn money(code: &str, units: i64, nanos: i32) -> MoneyValue {
    MoneyValue::new(code.parse().expect("valid code"), units, nanos).expect("well-formed")
}

fn total_nanos(value: &MoneyValue) -> Decimal {
    value.to_decimal() * FRACTION_SIZE
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// *For any* non-negative parts, carry SHALL yield integral units and
    /// nanos within one unit, without changing the total value.
    #[test]
    fn prop_carry_normalizes(
        units in non_negative_decimal(),
        nanos in non_negative_decimal(),
    ) {
        let result = carry(units, nanos).unwrap();

        prop_assert_eq!(result.units.fract(), Decimal::ZERO);
        prop_assert!(result.nanos >= Decimal::ZERO);
        prop_assert!(result.nanos < FRACTION_SIZE);
        prop_assert_eq!(
            result.units * FRACTION_SIZE + result.nanos,
            units * FRACTION_SIZE + nanos
        );
    }

    /// *For any* input, carrying twice SHALL equal carrying once.
    #[test]
    fn prop_carry_is_idempotent(
        units in non_negative_decimal(),
        nanos in non_negative_decimal(),
    ) {
        let once = carry(units, nanos).unwrap();
        let twice = once.carry().unwrap();
        prop_assert_eq!(once, twice);
    }

    /// *For any* pair of supported codes, zero SHALL convert to zero.
    #[test]
    fn prop_zero_converts_to_zero(
        source in supported_code(),
        target in supported_code(),
    ) {
        let result = convert(&money(&source, 0, 0), &target, &RATES).unwrap();
        prop_assert!(result.is_zero());
        prop_assert_eq!(result.currency_code.as_str(), target.as_str());
    }

    /// *For any* amount, a same-currency conversion SHALL drift by at most
    /// `R/2 + 1` nanos: half a EUR nano lost to rounding, scaled back by the
    /// rate, plus the final floor. For `R <= 1` that is a single nano.
    #[test]
    fn prop_same_currency_drift_bounded(
        code in supported_code(),
        (units, nanos) in money_parts(),
    ) {
        let amount = money(&code, units, nanos);
        let result = convert(&amount, &code, &RATES).unwrap();

        let rate = RATES.rate(&code).unwrap();
        let drift = (total_nanos(&result) - total_nanos(&amount)).abs();
        prop_assert!(
            drift <= rate / Decimal::TWO + Decimal::ONE,
            "{} -> {} drifted {} nanos at rate {}",
            amount, result, drift, rate
        );
        if rate <= Decimal::ONE {
            prop_assert!(drift <= Decimal::ONE);
        }
    }

    /// *For any* amount and pair of codes, the result SHALL be a
    /// well-formed, non-negative money value in the target currency.
    #[test]
    fn prop_output_well_formed(
        source in supported_code(),
        target in supported_code(),
        (units, nanos) in money_parts(),
    ) {
        let result = convert(&money(&source, units, nanos), &target, &RATES).unwrap();

        prop_assert!(result.units >= 0);
        prop_assert!((0..1_000_000_000).contains(&result.nanos));
        prop_assert_eq!(result.currency_code.as_str(), target.as_str());
    }

    /// *For any* input, converting twice SHALL produce the same result.
    #[test]
    fn prop_convert_is_deterministic(
        source in supported_code(),
        target in supported_code(),
        (units, nanos) in money_parts(),
    ) {
        let amount = money(&source, units, nanos);
        prop_assert_eq!(
            convert(&amount, &target, &RATES),
            convert(&amount, &target, &RATES)
        );
    }

    /// *For any* code missing from the table, conversion SHALL fail with
    /// `UnknownCurrency` in both the source and the target position.
    #[test]
    fn prop_unknown_code_rejected(
        known in supported_code(),
        unknown in "[A-Z]{3}".prop_filter("not in table", |c| !RATES.contains(c)),
        (units, nanos) in money_parts(),
    ) {
        let from_unknown = convert(&money(&unknown, units, nanos), &known, &RATES);
        prop_assert_eq!(from_unknown, Err(CurrencyError::UnknownCurrency(unknown.clone())));

        let to_unknown = convert(&money(&known, units, nanos), &unknown, &RATES);
        prop_assert_eq!(to_unknown, Err(CurrencyError::UnknownCurrency(unknown)));
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    /// Specific example: EUR is exact under identity conversion.
    #[test]
    fn test_eur_identity_exact() {
        let amount = money("EUR", 123_456, 789_012_345);
        assert_eq!(convert(&amount, "EUR", &RATES).unwrap(), amount);
    }

    /// Specific example: IDR drift reaches thousands of nanos.
    #[test]
    fn test_idr_identity_drift() {
        // 8000 nanos IDR / 15999.40 = 0.50001875 EUR nanos -> rounds to 1 -> 15999.40
        let amount = money("IDR", 0, 8000);
        let result = convert(&amount, "IDR", &RATES).unwrap();
        assert_eq!(result, money("IDR", 0, 15999));
    }
}
