//! Multi-currency conversion through the base currency EUR.

pub mod carry;
pub mod conversion;
pub mod error;
pub mod rates;
pub mod service;

#[cfg(test)]
mod props;

pub use carry::{DecimalAmount, FRACTION_SIZE, carry};
pub use conversion::convert;
pub use error::{CurrencyError, RateTableError};
pub use rates::RateTable;
pub use service::CurrencyService;
