//! Currency service for conversion and supported-currency lookups.
//!
//! This module provides the main service interface handed to request
//! handlers. It wraps an immutable [`RateTable`] behind an `Arc`, so clones
//! are cheap and concurrent calls need no locking.

use std::sync::Arc;

use currency_shared::types::MoneyValue;

use super::conversion;
use super::error::CurrencyError;
use super::rates::RateTable;

/// Currency service for conversion operations.
#[derive(Debug, Clone)]
pub struct CurrencyService {
    rates: Arc<RateTable>,
}

impl CurrencyService {
    /// Creates a service over a loaded rate table.
    #[must_use]
    pub fn new(rates: RateTable) -> Self {
        Self {
            rates: Arc::new(rates),
        }
    }

    /// Returns the underlying rate table.
    #[must_use]
    pub fn rates(&self) -> &RateTable {
        &self.rates
    }

    /// Convert `from` into `to_code` through EUR.
    ///
    /// # Example
    ///
    /// ```
    /// use currency_core::currency::{CurrencyService, RateTable};
    /// use currency_shared::MoneyValue;
    ///
    /// let service = CurrencyService::new(RateTable::bundled().unwrap());
    /// let eur = MoneyValue::new("EUR".parse().unwrap(), 10, 0).unwrap();
    /// let usd = service.convert(&eur, "USD").unwrap();
    /// assert_eq!((usd.units, usd.nanos), (11, 305_000_000));
    /// ```
    pub fn convert(&self, from: &MoneyValue, to_code: &str) -> Result<MoneyValue, CurrencyError> {
        conversion::convert(from, to_code, &self.rates)
    }

    /// Lists every supported currency code in rate table order.
    #[must_use]
    pub fn supported_currencies(&self) -> Vec<String> {
        self.rates.codes().map(ToString::to_string).collect()
    }
}
