//! In-memory quote cache with a fixed freshness window.

use coinwatch_coinmarketcap::listings::CoinListing;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// How long a cached quote keeps being served before a refetch.
pub const FRESHNESS_WINDOW: Duration = Duration::from_secs(300);

#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub data: CoinListing,
    /// When the listing fetch that produced this entry completed. Every entry
    /// populated by one fetch carries the same timestamp.
    pub fetched_at: Instant,
}

impl CacheEntry {
    /// True while the entry is younger than `window`; an entry aged exactly
    /// `window` is already stale.
    pub fn is_fresh(&self, now: Instant, window: Duration) -> bool {
        self.age(now) < window
    }

    pub fn age(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.fetched_at)
    }
}

/// Process-wide symbol -> quote map. Entries are added or renewed, never
/// evicted; the listings endpoint bounds how many symbols can ever exist.
#[derive(Default)]
pub struct QuoteCache {
    entries: RwLock<HashMap<String, CacheEntry>>,
}

impl QuoteCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, symbol: &str) -> Option<CacheEntry> {
        self.entries.read().get(symbol).cloned()
    }

    /// Gap-fill refresh: insert an entry for every symbol the cache has never
    /// seen, all stamped with the same `fetched_at`. Entries already present
    /// are left untouched, stale or not.
    pub fn fill_missing(&self, listings: &[CoinListing], fetched_at: Instant) {
        let mut entries = self.entries.write();
        for listing in listings {
            if !entries.contains_key(&listing.symbol) {
                entries.insert(
                    listing.symbol.clone(),
                    CacheEntry {
                        data: listing.clone(),
                        fetched_at,
                    },
                );
            }
        }
    }

    /// Unconditional overwrite. Reserved for the symbol a request was
    /// actually about; everything else goes through `fill_missing`.
    pub fn insert(&self, symbol: &str, data: CoinListing, fetched_at: Instant) {
        self.entries
            .write()
            .insert(symbol.to_string(), CacheEntry { data, fetched_at });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::listing;

    #[test]
    fn entry_is_fresh_strictly_below_the_window() {
        let fetched_at = Instant::now();
        let entry = CacheEntry {
            data: listing("BTC", 43250.5),
            fetched_at,
        };

        let just_before = fetched_at + Duration::from_millis(299_999);
        assert!(entry.is_fresh(just_before, FRESHNESS_WINDOW));

        let at_boundary = fetched_at + Duration::from_millis(300_000);
        assert!(!entry.is_fresh(at_boundary, FRESHNESS_WINDOW));
    }

    #[test]
    fn get_returns_nothing_for_unknown_symbols() {
        let cache = QuoteCache::new();

        assert!(cache.get("BTC").is_none());
    }

    #[test]
    fn fill_missing_stamps_every_new_entry_with_the_same_instant() {
        let cache = QuoteCache::new();
        let fetched_at = Instant::now();

        cache.fill_missing(&[listing("BTC", 43250.5), listing("ETH", 2300.0)], fetched_at);

        assert_eq!(cache.get("BTC").unwrap().fetched_at, fetched_at);
        assert_eq!(cache.get("ETH").unwrap().fetched_at, fetched_at);
    }

    #[test]
    fn fill_missing_never_touches_existing_entries() {
        let cache = QuoteCache::new();
        let first = Instant::now();
        cache.fill_missing(&[listing("BTC", 100.0)], first);

        // A later bulk refresh with new data must not renew the old entry.
        let second = first + Duration::from_secs(600);
        cache.fill_missing(&[listing("BTC", 200.0), listing("ETH", 2300.0)], second);

        let btc = cache.get("BTC").unwrap();
        assert_eq!(btc.fetched_at, first);
        assert_eq!(btc.data.quote.usd.price, 100.0);
        assert_eq!(cache.get("ETH").unwrap().fetched_at, second);
    }

    #[test]
    fn fill_missing_is_idempotent() {
        let cache = QuoteCache::new();
        let fetched_at = Instant::now();
        let listings = [listing("BTC", 43250.5)];

        cache.fill_missing(&listings, fetched_at);
        cache.fill_missing(&listings, fetched_at + Duration::from_secs(1));

        assert_eq!(cache.get("BTC").unwrap().fetched_at, fetched_at);
    }

    #[test]
    fn insert_overwrites_what_fill_missing_preserves() {
        let cache = QuoteCache::new();
        let first = Instant::now();
        cache.fill_missing(&[listing("BTC", 100.0)], first);

        let second = first + Duration::from_secs(600);
        cache.insert("BTC", listing("BTC", 200.0), second);

        let btc = cache.get("BTC").unwrap();
        assert_eq!(btc.fetched_at, second);
        assert_eq!(btc.data.quote.usd.price, 200.0);
    }

    #[test]
    fn racing_writers_leave_a_single_consistent_entry() {
        let cache = QuoteCache::new();
        let fetched_at = Instant::now();

        // Two requests for the same absent symbol may both reach the refresh
        // step; whichever write lands last, the entry content is identical.
        std::thread::scope(|scope| {
            for _ in 0..2 {
                scope.spawn(|| {
                    let listings = [listing("BTC", 43250.5), listing("ETH", 2300.0)];
                    cache.fill_missing(&listings, fetched_at);
                    cache.insert("BTC", listings[0].clone(), fetched_at);
                });
            }
        });

        let btc = cache.get("BTC").unwrap();
        assert_eq!(btc.data.quote.usd.price, 43250.5);
        assert_eq!(btc.fetched_at, fetched_at);
    }
}
