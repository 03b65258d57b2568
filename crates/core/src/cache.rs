use fnv::FnvBuildHasher;
use indexmap::IndexMap;
use log::debug;
use serde::Serialize;
use std::hash::Hash;

/// Snapshot of a cache's effectiveness at one moment
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize)]
pub struct CacheStats {
    /// Number of entries currently stored
    pub size: usize,
    /// Fraction of lookups that hit, in `[0, 1]`. Zero before any lookup.
    pub hit_rate: f64,
}

/// An injectable memoization context for expensive queries.
///
/// Nothing in this crate consults a cache unless the caller hands one in,
/// and the cached code paths return exactly what recomputation would. One
/// instance should back one operation: keys carry no operation tag, so
/// sharing an instance between, say, range and ring queries would mix
/// results under the same `(center, radius)` key.
///
/// Lookups take `&mut self` to maintain the hit/miss counters, which also
/// pins the single-writer model at compile time. Entries iterate in
/// insertion order, so lifecycle logging and debugging stay deterministic.
pub struct GridCache<K: Eq + Hash, V: Clone> {
    entries: IndexMap<K, V, FnvBuildHasher>,
    hits: u64,
    misses: u64,
}

impl<K: Eq + Hash, V: Clone> GridCache<K, V> {
    pub fn new() -> Self {
        Self {
            entries: IndexMap::default(),
            hits: 0,
            misses: 0,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: IndexMap::with_capacity_and_hasher(
                capacity,
                FnvBuildHasher::default(),
            ),
            hits: 0,
            misses: 0,
        }
    }

    /// Look up a previously stored value, counting the outcome
    pub fn try_get(&mut self, key: &K) -> Option<V> {
        match self.entries.get(key) {
            Some(value) => {
                self.hits += 1;
                Some(value.clone())
            }
            None => {
                self.misses += 1;
                None
            }
        }
    }

    /// Store a value, replacing any previous entry under the key
    pub fn set(&mut self, key: K, value: V) {
        self.entries.insert(key, value);
    }

    /// Drop every entry and reset the counters, ending this cache's
    /// current lifecycle
    pub fn clear(&mut self) {
        let stats = self.stats();
        debug!(
            "clearing cache: {} entries, hit rate {:.3}",
            stats.size, stats.hit_rate
        );
        self.entries.clear();
        self.hits = 0;
        self.misses = 0;
    }

    pub fn stats(&self) -> CacheStats {
        let lookups = self.hits + self.misses;
        let hit_rate = if lookups == 0 {
            0.0
        } else {
            self.hits as f64 / lookups as f64
        };
        CacheStats {
            size: self.entries.len(),
            hit_rate,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Eq + Hash, V: Clone> Default for GridCache<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_miss_counting() {
        let mut cache: GridCache<u32, String> = GridCache::new();
        assert_eq!(cache.stats(), CacheStats::default());

        assert_eq!(cache.try_get(&1), None);
        cache.set(1, "one".into());
        assert_eq!(cache.try_get(&1), Some("one".into()));
        assert_eq!(cache.try_get(&2), None);

        let stats = cache.stats();
        assert_eq!(stats.size, 1);
        // 1 hit out of 3 lookups
        assert!((stats.hit_rate - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_set_overwrites() {
        let mut cache: GridCache<u32, u32> = GridCache::new();
        cache.set(7, 1);
        cache.set(7, 2);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.try_get(&7), Some(2));
    }

    #[test]
    fn test_clear_resets_lifecycle() {
        let mut cache: GridCache<u32, u32> = GridCache::with_capacity(4);
        cache.set(1, 1);
        let _ = cache.try_get(&1);
        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.stats(), CacheStats::default());
    }
}
