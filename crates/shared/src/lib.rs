//! Shared types, errors, and configuration for the currency service.
//!
//! This crate provides common types used across all other crates:
//! - Fixed-point money values and currency codes
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::{AppConfig, LogFormat};
pub use error::AppError;
pub use types::{CurrencyCode, MoneyError, MoneyValue};
