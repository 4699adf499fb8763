//! Rate provider trait definition.

use async_trait::async_trait;

use crate::errors::RateError;
use crate::models::ExchangeRate;

/// Trait for pairwise exchange-rate sources.
///
/// Implement this trait to add support for a new rate source. The rate
/// service drives it: one fetch per cache miss, no retries, and the result
/// of a failed fetch is never stored.
#[async_trait]
pub trait RateProvider: Send + Sync {
    /// Unique identifier for this provider.
    ///
    /// Should be a constant string like "EXCHANGE_RATE_API".
    /// Used for logging and error attribution.
    fn id(&self) -> &'static str;

    /// Fetch the current rate for one currency pair.
    ///
    /// # Arguments
    ///
    /// * `from_currency` - 3-letter code of the currency being converted from
    /// * `to_currency` - 3-letter code of the currency being converted to
    ///
    /// # Returns
    ///
    /// The fetched rate on success, or a `RateError` on failure.
    async fn fetch_rate(
        &self,
        from_currency: &str,
        to_currency: &str,
    ) -> Result<ExchangeRate, RateError>;
}
