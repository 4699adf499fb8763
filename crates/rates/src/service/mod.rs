//! Rate service: cache-first rate lookups over a provider.

use std::sync::Arc;

use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::cache::RateCache;
use crate::errors::RateError;
use crate::models::{CurrencyPair, ExchangeRate};
use crate::provider::RateProvider;

/// Trait defining the contract for rate service operations.
#[async_trait]
pub trait RateServiceTrait: Send + Sync {
    /// Current rate between two currencies (cache hit or a single fetch).
    async fn get_rate(&self, from_currency: &str, to_currency: &str)
        -> Result<Decimal, RateError>;

    /// Like `get_rate`, but returning the full model with its fetch timestamp.
    async fn get_exchange_rate(
        &self,
        from_currency: &str,
        to_currency: &str,
    ) -> Result<ExchangeRate, RateError>;
}

/// Cache-first rate lookups over a single provider.
///
/// The service owns the bounded cache; there is no global state. A cache
/// miss triggers exactly one provider fetch. A failed fetch is reported to
/// the caller and nothing is stored, so the next call for the same pair
/// retries the source.
pub struct RateService {
    provider: Arc<dyn RateProvider>,
    cache: RateCache,
}

impl RateService {
    /// Create a service with the default cache capacity.
    pub fn new(provider: Arc<dyn RateProvider>) -> Self {
        Self::with_cache(provider, RateCache::new())
    }

    /// Create a service around an explicitly constructed cache.
    pub fn with_cache(provider: Arc<dyn RateProvider>, cache: RateCache) -> Self {
        Self { provider, cache }
    }

    /// Number of currency pairs currently cached.
    pub fn cached_pairs(&self) -> usize {
        self.cache.len()
    }
}

#[async_trait]
impl RateServiceTrait for RateService {
    async fn get_rate(
        &self,
        from_currency: &str,
        to_currency: &str,
    ) -> Result<Decimal, RateError> {
        self.get_exchange_rate(from_currency, to_currency)
            .await
            .map(|r| r.rate)
    }

    async fn get_exchange_rate(
        &self,
        from_currency: &str,
        to_currency: &str,
    ) -> Result<ExchangeRate, RateError> {
        let pair = CurrencyPair::new(from_currency, to_currency);

        // Same-currency lookups are answered without touching provider or cache.
        if pair.is_identity() {
            return Ok(ExchangeRate::new(
                pair.from_currency().to_string(),
                pair.to_currency().to_string(),
                Decimal::ONE,
            ));
        }

        if let Some(cached) = self.cache.get(&pair) {
            return Ok(cached);
        }

        match self
            .provider
            .fetch_rate(pair.from_currency(), pair.to_currency())
            .await
        {
            Ok(rate) => {
                self.cache.insert(pair, rate.clone());
                Ok(rate)
            }
            Err(e) => {
                log::warn!(
                    "Rate lookup failed for {} via {}: {}",
                    pair,
                    self.provider.id(),
                    e
                );
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingProvider {
        rate: Decimal,
        fail: bool,
        calls: AtomicUsize,
    }

    impl CountingProvider {
        fn returning(rate: Decimal) -> Self {
            Self {
                rate,
                fail: false,
                calls: AtomicUsize::new(0),
            }
        }

        fn failing() -> Self {
            Self {
                rate: Decimal::ZERO,
                fail: true,
                calls: AtomicUsize::new(0),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl RateProvider for CountingProvider {
        fn id(&self) -> &'static str {
            "TEST_PROVIDER"
        }

        async fn fetch_rate(
            &self,
            from_currency: &str,
            to_currency: &str,
        ) -> Result<ExchangeRate, RateError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(RateError::ProviderError {
                    provider: "TEST_PROVIDER".to_string(),
                    message: "source unavailable".to_string(),
                });
            }
            Ok(ExchangeRate::new(
                from_currency.to_string(),
                to_currency.to_string(),
                self.rate,
            ))
        }
    }

    #[tokio::test]
    async fn test_same_currency_answers_one_without_fetching() {
        let provider = Arc::new(CountingProvider::returning(dec!(5)));
        let service = RateService::new(provider.clone());

        let rate = service.get_rate("BRL", "BRL").await.unwrap();

        assert_eq!(rate, Decimal::ONE);
        assert_eq!(provider.call_count(), 0);
        assert_eq!(service.cached_pairs(), 0);
    }

    #[tokio::test]
    async fn test_second_lookup_hits_cache() {
        let provider = Arc::new(CountingProvider::returning(dec!(5.25)));
        let service = RateService::new(provider.clone());

        let first = service.get_rate("USD", "BRL").await.unwrap();
        let second = service.get_rate("USD", "BRL").await.unwrap();

        assert_eq!(first, dec!(5.25));
        assert_eq!(second, dec!(5.25));
        assert_eq!(provider.call_count(), 1);
    }

    #[tokio::test]
    async fn test_pair_lookup_is_case_insensitive() {
        let provider = Arc::new(CountingProvider::returning(dec!(6.1)));
        let service = RateService::new(provider.clone());

        service.get_rate("eur", "brl").await.unwrap();
        service.get_rate("EUR", "BRL").await.unwrap();

        assert_eq!(provider.call_count(), 1);
        assert_eq!(service.cached_pairs(), 1);
    }

    #[tokio::test]
    async fn test_failures_are_not_cached() {
        let provider = Arc::new(CountingProvider::failing());
        let service = RateService::new(provider.clone());

        assert!(service.get_rate("USD", "BRL").await.is_err());
        assert!(service.get_rate("USD", "BRL").await.is_err());

        // Each call retried the source; nothing was stored
        assert_eq!(provider.call_count(), 2);
        assert_eq!(service.cached_pairs(), 0);
    }

    #[tokio::test]
    async fn test_distinct_pairs_fetch_independently() {
        let provider = Arc::new(CountingProvider::returning(dec!(2)));
        let service = RateService::new(provider.clone());

        service.get_rate("USD", "BRL").await.unwrap();
        service.get_rate("EUR", "BRL").await.unwrap();

        assert_eq!(provider.call_count(), 2);
        assert_eq!(service.cached_pairs(), 2);
    }

    #[tokio::test]
    async fn test_get_exchange_rate_returns_full_model() {
        let provider = Arc::new(CountingProvider::returning(dec!(5.4)));
        let service = RateService::new(provider);

        let rate = service.get_exchange_rate("usd", "brl").await.unwrap();

        assert_eq!(rate.from_currency, "USD");
        assert_eq!(rate.to_currency, "BRL");
        assert_eq!(rate.rate, dec!(5.4));
    }
}
