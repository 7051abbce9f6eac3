//! In-memory TTL cache store.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;
use std::time::{Duration, Instant};

use super::key::CacheKey;

#[derive(Clone)]
struct CacheEntry {
    data: serde_json::Value,
    stored_at: Instant,
    ttl: Duration,
}

impl CacheEntry {
    fn new(data: serde_json::Value, ttl: Duration) -> Self {
        Self {
            data,
            stored_at: Instant::now(),
            ttl,
        }
    }

    fn is_expired(&self) -> bool {
        self.stored_at.elapsed() >= self.ttl
    }
}

/// Snapshot of cache activity counters.
#[derive(Debug, Clone, Default)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub sets: u64,
    pub invalidations: u64,
}

impl CacheStats {
    pub fn hit_ratio(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

struct AtomicStats {
    hits: AtomicU64,
    misses: AtomicU64,
    sets: AtomicU64,
    invalidations: AtomicU64,
}

impl AtomicStats {
    fn new() -> Self {
        Self {
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
            sets: AtomicU64::new(0),
            invalidations: AtomicU64::new(0),
        }
    }

    fn to_stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            sets: self.sets.load(Ordering::Relaxed),
            invalidations: self.invalidations.load(Ordering::Relaxed),
        }
    }
}

/// In-memory keyed store of time-bounded entries.
///
/// An explicit, constructible object owned by its gateway (tests build
/// isolated instances); purely in-memory, nothing survives a restart.
/// Callers always receive cloned values, never references into the store.
pub struct CacheStore {
    entries: RwLock<HashMap<String, CacheEntry>>,
    stats: AtomicStats,
}

impl CacheStore {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            stats: AtomicStats::new(),
        }
    }

    /// Return the entry's value only if it has not expired.
    ///
    /// Lazy expiry: an expired entry is reported absent but not evicted
    /// here; [`Self::sweep`] is the hygiene pass that reclaims it.
    pub fn get(&self, key: &CacheKey) -> Option<serde_json::Value> {
        let entries = self.entries.read().unwrap();
        match entries.get(key.as_str()) {
            Some(entry) if !entry.is_expired() => {
                self.stats.hits.fetch_add(1, Ordering::Relaxed);
                Some(entry.data.clone())
            }
            _ => {
                self.stats.misses.fetch_add(1, Ordering::Relaxed);
                None
            }
        }
    }

    /// Store a value, unconditionally overwriting any existing entry
    /// (last-write-wins).
    pub fn set(&self, key: &CacheKey, data: serde_json::Value, ttl: Duration) {
        self.stats.sets.fetch_add(1, Ordering::Relaxed);
        self.entries
            .write()
            .unwrap()
            .insert(key.as_str().to_string(), CacheEntry::new(data, ttl));
    }

    /// Remove one exact key. Returns whether anything was removed.
    pub fn remove(&self, key: &CacheKey) -> bool {
        let removed = self.entries.write().unwrap().remove(key.as_str()).is_some();
        if removed {
            self.stats.invalidations.fetch_add(1, Ordering::Relaxed);
        }
        removed
    }

    /// Remove every key containing `pattern`. Returns the number removed.
    pub fn invalidate(&self, pattern: &str) -> usize {
        let mut entries = self.entries.write().unwrap();
        let before = entries.len();
        entries.retain(|key, _| !key.contains(pattern));
        let removed = before - entries.len();
        self.stats
            .invalidations
            .fetch_add(removed as u64, Ordering::Relaxed);
        removed
    }

    /// Drop everything.
    pub fn clear(&self) {
        let mut entries = self.entries.write().unwrap();
        self.stats
            .invalidations
            .fetch_add(entries.len() as u64, Ordering::Relaxed);
        entries.clear();
    }

    /// Evict expired entries. Returns the number reclaimed.
    pub fn sweep(&self) -> usize {
        let mut entries = self.entries.write().unwrap();
        let before = entries.len();
        entries.retain(|_, entry| !entry.is_expired());
        before - entries.len()
    }

    /// Number of live (unexpired) entries.
    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap()
            .values()
            .filter(|e| !e.is_expired())
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn stats(&self) -> CacheStats {
        self.stats.to_stats()
    }
}

impl Default for CacheStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn key(s: &str) -> CacheKey {
        CacheKey::from(s)
    }

    #[test]
    fn serves_within_ttl_and_refuses_after() {
        let store = CacheStore::new();
        store.set(&key("GET:/properties:"), json!([1, 2]), Duration::from_millis(40));

        assert_eq!(store.get(&key("GET:/properties:")), Some(json!([1, 2])));

        std::thread::sleep(Duration::from_millis(60));
        assert_eq!(store.get(&key("GET:/properties:")), None);
    }

    #[test]
    fn get_does_not_evict_expired_entries() {
        let store = CacheStore::new();
        store.set(&key("GET:/units:"), json!({}), Duration::from_millis(1));
        std::thread::sleep(Duration::from_millis(10));

        assert_eq!(store.get(&key("GET:/units:")), None);
        // Still physically present until the sweep pass reclaims it.
        assert_eq!(store.sweep(), 1);
        assert_eq!(store.sweep(), 0);
    }

    #[test]
    fn set_overwrites_unconditionally() {
        let store = CacheStore::new();
        let k = key("GET:/tenants:");
        store.set(&k, json!("old"), Duration::from_secs(60));
        store.set(&k, json!("new"), Duration::from_secs(60));
        assert_eq!(store.get(&k), Some(json!("new")));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn pattern_invalidation_matches_substrings() {
        let store = CacheStore::new();
        store.set(&key("GET:/properties:"), json!(1), Duration::from_secs(60));
        store.set(&key("GET:/properties/42:"), json!(2), Duration::from_secs(60));
        store.set(&key("GET:/tenants:"), json!(3), Duration::from_secs(60));

        assert_eq!(store.invalidate("properties/42"), 1);
        assert!(store.get(&key("GET:/properties:")).is_some());
        assert!(store.get(&key("GET:/properties/42:")).is_none());

        assert_eq!(store.invalidate("properties"), 1);
        assert!(store.get(&key("GET:/properties:")).is_none());
        assert!(store.get(&key("GET:/tenants:")).is_some());
    }

    #[test]
    fn clear_drops_everything() {
        let store = CacheStore::new();
        store.set(&key("a"), json!(1), Duration::from_secs(60));
        store.set(&key("b"), json!(2), Duration::from_secs(60));
        store.clear();
        assert!(store.is_empty());
    }

    #[test]
    fn callers_get_copies_not_references() {
        let store = CacheStore::new();
        let k = key("GET:/properties:");
        store.set(&k, json!({"name": "Elm"}), Duration::from_secs(60));

        let mut copy = store.get(&k).unwrap();
        copy["name"] = json!("mutated");

        assert_eq!(store.get(&k), Some(json!({"name": "Elm"})));
    }

    #[test]
    fn stats_track_activity() {
        let store = CacheStore::new();
        let k = key("GET:/payments:");
        store.get(&k);
        store.set(&k, json!(0), Duration::from_secs(60));
        store.get(&k);
        store.invalidate("payments");

        let stats = store.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.sets, 1);
        assert_eq!(stats.invalidations, 1);
        assert!((stats.hit_ratio() - 0.5).abs() < f64::EPSILON);
    }
}
