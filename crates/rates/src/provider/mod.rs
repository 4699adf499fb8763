//! Rate provider abstraction and implementations.
//!
//! This module contains:
//! - The `RateProvider` trait that all rate sources implement
//! - The exchangerate-api.com v6 implementation
//!
//! Providers are deliberately dumb: one request per call, no caching, no
//! retries. Caching and failure policy live in the service layer.

mod traits;

pub mod exchange_rate_api;

pub use traits::RateProvider;
