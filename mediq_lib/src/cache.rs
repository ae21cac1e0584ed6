//! In-memory TTL query cache backed by `DashMap` for concurrent access.

use dashmap::DashMap;
use std::time::{Duration, Instant};

use mediq_api::Resource;

/// Staleness window before a cached page is refetched in the background.
const DEFAULT_TTL: Duration = Duration::from_secs(60);

/// A single cached value with its expiration time.
struct CacheEntry {
    value: String,
    expires_at: Instant,
}

/// Thread-safe query cache with time-to-live expiration.
///
/// Entries are serialized JSON pages keyed by
/// `{resource}:{pageSize}:{pageNumber}`, so a mutation can drop exactly the
/// owning resource's entries and nothing else. Expired entries are lazily
/// evicted on the next `get` for that key.
pub struct QueryCache {
    store: DashMap<String, CacheEntry>,
    ttl: Duration,
}

impl Default for QueryCache {
    fn default() -> Self {
        Self::new(DEFAULT_TTL)
    }
}

impl QueryCache {
    /// Creates a cache with the given time-to-live for entries.
    pub fn new(ttl: Duration) -> Self {
        Self {
            store: DashMap::new(),
            ttl,
        }
    }

    /// The cache key for one page of one resource.
    pub fn key(resource: Resource, page_size: i64, page_number: i64) -> String {
        format!("{}:{}:{}", resource.name(), page_size, page_number)
    }

    /// Returns the cached value for `key`, or `None` if missing or expired.
    pub fn get(&self, key: &str) -> Option<String> {
        let entry = self.store.get(key)?;
        if Instant::now() > entry.expires_at {
            drop(entry);
            self.store.remove(key);
            return None;
        }
        Some(entry.value.clone())
    }

    /// Inserts or overwrites a cache entry. The entry expires after the
    /// configured TTL.
    pub fn set(&self, key: String, value: String) {
        self.store.insert(
            key,
            CacheEntry {
                value,
                expires_at: Instant::now() + self.ttl,
            },
        );
    }

    /// Drops every cached page of `resource`. Other resources' entries are
    /// untouched; there is no cross-resource invalidation.
    pub fn invalidate(&self, resource: Resource) {
        let prefix = format!("{}:", resource.name());
        self.store.retain(|key, _| !key.starts_with(&prefix));
    }

    /// Removes all entries from the cache.
    pub fn clear(&self) {
        self.store.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cache_set_and_get() {
        let cache = QueryCache::new(Duration::from_secs(60));
        cache.set("key1".to_string(), "value1".to_string());
        assert_eq!(cache.get("key1"), Some("value1".to_string()));
    }

    #[test]
    fn cache_miss() {
        let cache = QueryCache::new(Duration::from_secs(60));
        assert_eq!(cache.get("nonexistent"), None);
    }

    #[test]
    fn cache_expiration() {
        let cache = QueryCache::new(Duration::from_millis(1));
        cache.set("key1".to_string(), "value1".to_string());
        std::thread::sleep(Duration::from_millis(10));
        assert_eq!(cache.get("key1"), None);
    }

    #[test]
    fn cache_overwrite() {
        let cache = QueryCache::new(Duration::from_secs(60));
        cache.set("key1".to_string(), "old".to_string());
        cache.set("key1".to_string(), "new".to_string());
        assert_eq!(cache.get("key1"), Some("new".to_string()));
    }

    #[test]
    fn invalidate_is_scoped_to_one_resource() {
        let cache = QueryCache::new(Duration::from_secs(60));
        cache.set(
            QueryCache::key(Resource::Medicines, 10, 1),
            "meds".to_string(),
        );
        cache.set(
            QueryCache::key(Resource::Medicines, 10, 2),
            "meds2".to_string(),
        );
        cache.set(
            QueryCache::key(Resource::Appointments, 10, 1),
            "appts".to_string(),
        );

        cache.invalidate(Resource::Medicines);

        assert_eq!(cache.get(&QueryCache::key(Resource::Medicines, 10, 1)), None);
        assert_eq!(cache.get(&QueryCache::key(Resource::Medicines, 10, 2)), None);
        assert_eq!(
            cache.get(&QueryCache::key(Resource::Appointments, 10, 1)),
            Some("appts".to_string())
        );
    }

    #[test]
    fn cache_clear() {
        let cache = QueryCache::new(Duration::from_secs(60));
        cache.set("a".to_string(), "1".to_string());
        cache.set("b".to_string(), "2".to_string());
        cache.clear();
        assert_eq!(cache.get("a"), None);
        assert_eq!(cache.get("b"), None);
    }
}
