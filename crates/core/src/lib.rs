//! Core business logic for the currency service.
//!
//! This crate contains pure business logic with ZERO web dependencies.
//! Money arithmetic, the rate table, and the conversion engine live here.
//!
//! # Modules
//!
//! - `currency` - Carry normalization, rate table, and two-hop conversion

pub mod currency;
