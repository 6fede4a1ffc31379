//! Currency error types.

use currency_shared::{AppError, MoneyError};
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised by the conversion engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CurrencyError {
    /// Currency code has no entry in the rate table.
    #[error("Unsupported currency: {0}")]
    UnknownCurrency(String),

    /// Negative amounts have no defined conversion.
    #[error("Cannot convert negative amount {0}")]
    NegativeAmount(String),

    /// Intermediate or final amount does not fit the representation.
    #[error("Amount out of range during conversion")]
    Overflow,

    /// Amount is not a well-formed money value.
    #[error(transparent)]
    InvalidMoney(#[from] MoneyError),
}

/// Errors raised while loading a rate table.
#[derive(Debug, Error)]
pub enum RateTableError {
    /// Key is not a three-letter uppercase code.
    #[error("Invalid currency code in rate table: {0:?}")]
    InvalidCode(String),

    /// Same code listed twice.
    #[error("Duplicate currency code in rate table: {0}")]
    DuplicateCode(String),

    /// Rate is zero or negative.
    #[error("Rate for {code} must be positive, got {rate}")]
    NonPositiveRate {
        /// Currency code.
        code: String,
        /// Offending rate.
        rate: Decimal,
    },

    /// Base currency EUR is absent.
    #[error("Rate table has no entry for base currency EUR")]
    MissingBaseCurrency,

    /// Base currency rate differs from 1.
    #[error("Base currency EUR must have rate 1, got {0}")]
    BaseRateNotOne(Decimal),

    /// Document is not a JSON object of code to rate.
    #[error("Malformed rate document: {0}")]
    Parse(#[from] serde_json::Error),

    /// Rate file could not be read.
    #[error("Failed to read rate file {path}: {source}")]
    Io {
        /// Path that was read.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

impl From<CurrencyError> for AppError {
    fn from(err: CurrencyError) -> Self {
        match err {
            CurrencyError::UnknownCurrency(code) => Self::UnknownCurrency(code),
            CurrencyError::NegativeAmount(_) => Self::Validation(err.to_string()),
            CurrencyError::InvalidMoney(inner) => inner.into(),
            CurrencyError::Overflow => Self::BusinessRule(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_currency_maps_to_app_error() {
        let err: AppError = CurrencyError::UnknownCurrency("XYZ".into()).into();
        assert_eq!(err.error_code(), "UNKNOWN_CURRENCY");
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.to_string(), "Unknown currency: XYZ");
    }

    #[test]
    fn test_negative_amount_maps_to_validation() {
        let err: AppError = CurrencyError::NegativeAmount("-1 USD".into()).into();
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
        assert_eq!(
            err.to_string(),
            "Validation error: Cannot convert negative amount -1 USD"
        );
    }

    #[test]
    fn test_overflow_maps_to_business_rule() {
        let err: AppError = CurrencyError::Overflow.into();
        assert_eq!(err.status_code(), 422);
    }

    #[test]
    fn test_invalid_money_maps_to_validation() {
        let err: AppError = CurrencyError::from(MoneyError::NanosOutOfRange(-1_000_000_000)).into();
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
    }

    #[test]
    fn test_rate_table_error_display() {
        assert_eq!(
            RateTableError::MissingBaseCurrency.to_string(),
            "Rate table has no entry for base currency EUR"
        );
        assert_eq!(
            RateTableError::DuplicateCode("USD".into()).to_string(),
            "Duplicate currency code in rate table: USD"
        );
    }
}
