//! Subfolio Rates Crate
//!
//! This crate provides pairwise exchange-rate fetching with a bounded
//! in-process cache for the Subfolio cost engine.
//!
//! # Overview
//!
//! The rates crate supports:
//! - Cache-first rate lookups keyed by currency pair (LRU bound, 32 pairs)
//! - A provider abstraction with an exchangerate-api.com v6 implementation
//! - Typed failures that callers can degrade from, never panics
//!
//! # Architecture
//!
//! ```text
//! +------------------+     +------------------+
//! |     Caller       | --> |   RateService    |  (same-currency short-circuit)
//! +------------------+     +------------------+
//!                             |            |
//!                        cache hit    cache miss
//!                             |            |
//!                             v            v
//!                    +------------+  +--------------+
//!                    | RateCache  |  | RateProvider |  (single fetch, no retry)
//!                    +------------+  +--------------+
//! ```
//!
//! Failed fetches are returned as [`RateError`] values and are never cached:
//! the next lookup for the same pair retries the source.
//!
//! # Core Types
//!
//! - [`RateService`] / [`RateServiceTrait`] - Cache-first lookup entry point
//! - [`RateProvider`] - Trait implemented by rate sources
//! - [`RateCache`] - Bounded LRU cache owned by the service
//! - [`CurrencyPair`] - Normalized cache key
//! - [`ExchangeRate`] - A fetched rate with its timestamp

pub mod cache;
pub mod errors;
pub mod models;
pub mod provider;
pub mod service;

// Re-export the public surface
pub use cache::{RateCache, DEFAULT_CACHE_CAPACITY};
pub use errors::RateError;
pub use models::{CurrencyPair, ExchangeRate};
pub use provider::exchange_rate_api::ExchangeRateApiProvider;
pub use provider::RateProvider;
pub use service::{RateService, RateServiceTrait};
