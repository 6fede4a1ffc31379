//! Common types used across the application.

pub mod money;

pub use money::{CurrencyCode, MoneyError, MoneyValue, NANOS_PER_UNIT};
