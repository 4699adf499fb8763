//! Bounded in-process cache for fetched exchange rates.
//!
//! Keyed by normalized currency pair. There is no time-based expiry: an
//! entry lives until the process exits or the pair is evicted as least
//! recently used. Only successful lookups are stored, so a transient
//! provider failure never pins a bad entry.

use std::collections::{HashMap, VecDeque};
use std::sync::{Mutex, MutexGuard};

use log::warn;

use crate::models::{CurrencyPair, ExchangeRate};

/// Default maximum number of distinct pairs held in the cache.
pub const DEFAULT_CACHE_CAPACITY: usize = 32;

/// Cache state guarded by a single mutex: the rate map plus a recency queue.
///
/// `recency` holds every cached pair exactly once, least recently used at
/// the front.
#[derive(Debug, Default)]
struct CacheState {
    rates: HashMap<CurrencyPair, ExchangeRate>,
    recency: VecDeque<CurrencyPair>,
}

/// Bounded LRU cache of exchange rates, safe for concurrent use.
///
/// One instance is owned by the rate service and shared by handle; there is
/// no process-global cache.
#[derive(Debug)]
pub struct RateCache {
    state: Mutex<CacheState>,
    capacity: usize,
}

impl RateCache {
    /// Create a cache with the default capacity.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CACHE_CAPACITY)
    }

    /// Create a cache bounded at `capacity` distinct pairs (minimum 1).
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            state: Mutex::new(CacheState::default()),
            capacity: capacity.max(1),
        }
    }

    /// Lock the cache state, recovering from poison if necessary.
    ///
    /// Worst case after recovery is a stale or missing entry, which only
    /// costs an extra fetch.
    fn lock_state(&self) -> MutexGuard<'_, CacheState> {
        self.state.lock().unwrap_or_else(|poisoned| {
            warn!("Rate cache mutex was poisoned, recovering");
            poisoned.into_inner()
        })
    }

    /// Look up a cached rate, marking the pair as most recently used.
    pub fn get(&self, pair: &CurrencyPair) -> Option<ExchangeRate> {
        let mut state = self.lock_state();
        let hit = state.rates.get(pair).cloned();
        if hit.is_some() {
            touch(&mut state.recency, pair);
        }
        hit
    }

    /// Insert or replace the rate for a pair, evicting the least recently
    /// used pair once the cache is full.
    pub fn insert(&self, pair: CurrencyPair, rate: ExchangeRate) {
        let mut state = self.lock_state();

        if state.rates.contains_key(&pair) {
            touch(&mut state.recency, &pair);
            state.rates.insert(pair, rate);
            return;
        }

        if state.rates.len() >= self.capacity {
            if let Some(oldest) = state.recency.pop_front() {
                state.rates.remove(&oldest);
            }
        }

        state.recency.push_back(pair.clone());
        state.rates.insert(pair, rate);
    }

    /// Number of pairs currently cached.
    pub fn len(&self) -> usize {
        self.lock_state().rates.len()
    }

    /// True when nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every cached entry.
    pub fn clear(&self) {
        let mut state = self.lock_state();
        state.rates.clear();
        state.recency.clear();
    }
}

impl Default for RateCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Move `pair` to the most-recently-used end of the queue.
fn touch(recency: &mut VecDeque<CurrencyPair>, pair: &CurrencyPair) {
    if let Some(pos) = recency.iter().position(|p| p == pair) {
        recency.remove(pos);
    }
    recency.push_back(pair.clone());
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn make_rate(from: &str, to: &str, rate: rust_decimal::Decimal) -> ExchangeRate {
        ExchangeRate::new(from.to_string(), to.to_string(), rate)
    }

    #[test]
    fn test_get_returns_inserted_rate() {
        let cache = RateCache::new();
        let pair = CurrencyPair::new("USD", "BRL");
        cache.insert(pair.clone(), make_rate("USD", "BRL", dec!(5.25)));

        let hit = cache.get(&pair).expect("rate should be cached");
        assert_eq!(hit.rate, dec!(5.25));
    }

    #[test]
    fn test_get_misses_unknown_pair() {
        let cache = RateCache::new();
        assert!(cache.get(&CurrencyPair::new("USD", "BRL")).is_none());
        assert!(cache.is_empty());
    }

    #[test]
    fn test_insert_replaces_existing_pair() {
        let cache = RateCache::new();
        let pair = CurrencyPair::new("USD", "BRL");
        cache.insert(pair.clone(), make_rate("USD", "BRL", dec!(5.0)));
        cache.insert(pair.clone(), make_rate("USD", "BRL", dec!(5.5)));

        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get(&pair).unwrap().rate, dec!(5.5));
    }

    #[test]
    fn test_capacity_is_bounded() {
        let cache = RateCache::with_capacity(4);
        for i in 0..10 {
            let code = format!("C{:02}", i);
            cache.insert(
                CurrencyPair::new(&code, "BRL"),
                make_rate(&code, "BRL", dec!(1)),
            );
        }
        assert_eq!(cache.len(), 4);
    }

    #[test]
    fn test_eviction_drops_least_recently_used() {
        let cache = RateCache::with_capacity(2);
        let usd = CurrencyPair::new("USD", "BRL");
        let eur = CurrencyPair::new("EUR", "BRL");
        let gbp = CurrencyPair::new("GBP", "BRL");

        cache.insert(usd.clone(), make_rate("USD", "BRL", dec!(5)));
        cache.insert(eur.clone(), make_rate("EUR", "BRL", dec!(6)));

        // Touch USD so EUR becomes the oldest entry
        assert!(cache.get(&usd).is_some());

        cache.insert(gbp.clone(), make_rate("GBP", "BRL", dec!(7)));

        assert!(cache.get(&eur).is_none());
        assert!(cache.get(&usd).is_some());
        assert!(cache.get(&gbp).is_some());
    }

    #[test]
    fn test_clear_empties_the_cache() {
        let cache = RateCache::new();
        cache.insert(
            CurrencyPair::new("USD", "BRL"),
            make_rate("USD", "BRL", dec!(5)),
        );
        cache.clear();
        assert!(cache.is_empty());
    }
}
