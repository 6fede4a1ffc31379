//! Fixed-point money value with an ISO 4217 style currency code.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! An amount is carried as whole `units` plus `nanos` (billionths of a unit),
//! so every value the service emits is exact.

use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of nanos in one whole unit.
pub const NANOS_PER_UNIT: i32 = 1_000_000_000;

/// Errors raised when constructing a money value or a currency code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyError {
    /// Currency code is not three uppercase ASCII letters.
    #[error("Invalid currency code: {0:?}")]
    InvalidCurrencyCode(String),

    /// Nanos magnitude is one whole unit or more.
    #[error("Nanos out of range: {0} (must be within +/-999999999)")]
    NanosOutOfRange(i32),

    /// Units and nanos carry opposite signs.
    #[error("Sign mismatch: units {units} and nanos {nanos} must share a sign")]
    SignMismatch {
        /// Whole units.
        units: i64,
        /// Fractional nanos.
        nanos: i32,
    },
}

/// A three-letter uppercase currency code such as `EUR` or `JPY`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CurrencyCode(String);

impl CurrencyCode {
    /// The pivot currency every conversion is routed through.
    pub const BASE: &'static str = "EUR";

    /// Returns the code as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for CurrencyCode {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() == 3 && s.bytes().all(|b| b.is_ascii_uppercase()) {
            Ok(Self(s.to_string()))
        } else {
            Err(MoneyError::InvalidCurrencyCode(s.to_string()))
        }
    }
}

impl TryFrom<String> for CurrencyCode {
    type Error = MoneyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CurrencyCode> for String {
    fn from(code: CurrencyCode) -> Self {
        code.0
    }
}

impl Borrow<str> for CurrencyCode {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for CurrencyCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Represents a monetary amount as whole units plus billionths of a unit.
///
/// Always well-formed: `|nanos| < 10^9` and `units`/`nanos` never carry
/// opposite signs. Deserialization runs the same check as [`MoneyValue::new`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawMoneyValue")]
pub struct MoneyValue {
    /// Currency the amount is expressed in.
    pub currency_code: CurrencyCode,
    /// Whole units of the amount.
    pub units: i64,
    /// Fractional part in nanos (10^-9 units).
    pub nanos: i32,
}

#[derive(Deserialize)]
struct RawMoneyValue {
    currency_code: CurrencyCode,
    #[serde(default)]
    units: i64,
    #[serde(default)]
    nanos: i32,
}

impl TryFrom<RawMoneyValue> for MoneyValue {
    type Error = MoneyError;

    fn try_from(raw: RawMoneyValue) -> Result<Self, Self::Error> {
        Self::new(raw.currency_code, raw.units, raw.nanos)
    }
}

impl MoneyValue {
    /// Creates a new money value, rejecting malformed `units`/`nanos` pairs.
    pub fn new(currency_code: CurrencyCode, units: i64, nanos: i32) -> Result<Self, MoneyError> {
        if nanos <= -NANOS_PER_UNIT || nanos >= NANOS_PER_UNIT {
            return Err(MoneyError::NanosOutOfRange(nanos));
        }
        if (units > 0 && nanos < 0) || (units < 0 && nanos > 0) {
            return Err(MoneyError::SignMismatch { units, nanos });
        }
        Ok(Self {
            currency_code,
            units,
            nanos,
        })
    }

    /// Creates a zero amount in the specified currency.
    #[must_use]
    pub const fn zero(currency_code: CurrencyCode) -> Self {
        Self {
            currency_code,
            units: 0,
            nanos: 0,
        }
    }

    /// Returns true if the amount is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.units == 0 && self.nanos == 0
    }

    /// Returns true if the amount is negative.
    #[must_use]
    pub const fn is_negative(&self) -> bool {
        self.units < 0 || self.nanos < 0
    }

    /// Returns the exact decimal value of the amount.
    #[must_use]
    pub fn to_decimal(&self) -> Decimal {
        Decimal::from(self.units) + Decimal::new(i64::from(self.nanos), 9)
    }
}

impl fmt::Display for MoneyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.to_decimal().normalize(), self.currency_code)
    }
}
