//! Exchange rate table relative to the base currency EUR.
//!
//! A rate `R(code)` converts both ways: an amount in `code` divided by
//! `R(code)` is in EUR, and an amount in EUR multiplied by `R(code)` is in
//! `code`. The table is validated once on load and never mutated afterwards.

use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use currency_shared::types::CurrencyCode;
use rust_decimal::Decimal;
use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};

use super::error::RateTableError;

/// European Central Bank reference rates shipped with the service.
const BUNDLED_RATES: &str = include_str!("../../data/currency_conversion.json");

/// Immutable mapping from currency code to its rate against EUR.
///
/// Keeps the insertion order of the source document for listing.
#[derive(Debug, Clone)]
pub struct RateTable {
    entries: Vec<(CurrencyCode, Decimal)>,
    index: HashMap<CurrencyCode, usize>,
}

impl RateTable {
    /// Builds a table from `(code, rate)` pairs.
    ///
    /// Rejects malformed or duplicate codes, non-positive rates, and a
    /// missing or non-unit EUR rate.
    pub fn new<I, S>(entries: I) -> Result<Self, RateTableError>
    where
        I: IntoIterator<Item = (S, Decimal)>,
        S: Into<String>,
    {
        let mut table = Self {
            entries: Vec::new(),
            index: HashMap::new(),
        };

        for (code, rate) in entries {
            let code: String = code.into();
            let code: CurrencyCode = code
                .parse()
                .map_err(|_| RateTableError::InvalidCode(code.clone()))?;
            if table.index.contains_key(&code) {
                return Err(RateTableError::DuplicateCode(code.to_string()));
            }
            if rate <= Decimal::ZERO {
                return Err(RateTableError::NonPositiveRate {
                    code: code.to_string(),
                    rate,
                });
            }
            table.index.insert(code.clone(), table.entries.len());
            table.entries.push((code, rate));
        }

        match table.rate(CurrencyCode::BASE) {
            None => Err(RateTableError::MissingBaseCurrency),
            Some(rate) if rate != Decimal::ONE => Err(RateTableError::BaseRateNotOne(rate)),
            Some(_) => Ok(table),
        }
    }

    /// Parses a JSON object of `"CODE": rate` pairs.
    ///
    /// Rates may be decimal strings (`"1.1305"`) or JSON numbers; strings are
    /// parsed exactly.
    pub fn from_json_str(json: &str) -> Result<Self, RateTableError> {
        let document: RateDocument = serde_json::from_str(json)?;
        Self::new(document.0)
    }

    /// Reads and parses a JSON rate document from disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, RateTableError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| RateTableError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Loads the rate snapshot bundled with the service.
    pub fn bundled() -> Result<Self, RateTableError> {
        Self::from_json_str(BUNDLED_RATES)
    }

    /// Returns the rate for `code`, if present.
    #[must_use]
    pub fn rate(&self, code: &str) -> Option<Decimal> {
        self.get(code).map(|(_, rate)| rate)
    }

    /// Returns the stored code and its rate, if present.
    #[must_use]
    pub fn get(&self, code: &str) -> Option<(&CurrencyCode, Decimal)> {
        self.index.get(code).map(|&i| {
            let (code, rate) = &self.entries[i];
            (code, *rate)
        })
    }

    /// Returns true if `code` has an entry.
    #[must_use]
    pub fn contains(&self, code: &str) -> bool {
        self.index.contains_key(code)
    }

    /// Iterates over codes in insertion order.
    pub fn codes(&self) -> impl Iterator<Item = &CurrencyCode> {
        self.entries.iter().map(|(code, _)| code)
    }

    /// Number of currencies in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// JSON object read as an ordered list so duplicates and order survive.
struct RateDocument(Vec<(String, Decimal)>);

impl<'de> Deserialize<'de> for RateDocument {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct RateDocumentVisitor;

        impl<'de> Visitor<'de> for RateDocumentVisitor {
            type Value = RateDocument;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of currency code to rate")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(entry) = map.next_entry::<String, Decimal>()? {
                    entries.push(entry);
                }
                Ok(RateDocument(entries))
            }
        }

        deserializer.deserialize_map(RateDocumentVisitor)
    }
}
