//! Rate models
//!
//! This module contains the core data types for rate lookups:
//! - `pair` - Normalized currency pair used as the cache key (CurrencyPair)
//! - `rate` - A fetched exchange rate with its timestamp (ExchangeRate)

mod pair;
mod rate;

pub use pair::CurrencyPair;
pub use rate::ExchangeRate;
