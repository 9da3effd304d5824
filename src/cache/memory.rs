/// Generic in-memory cache with per-entry TTL and LRU eviction
///
/// Thread-safe; locks are never held across await points. Expired
/// entries are dropped lazily on lookup and eagerly by the periodic
/// sweep task.
use super::config::CacheConfig;
use super::CacheStore;
use crate::engine::Classification;
use crate::errors::ClassifierResult;
use crate::logger::{self, LogTag};
use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::RwLock;
use std::time::{Duration, Instant};

/// Cache entry with absolute expiry
struct CacheEntry {
    value: Classification,
    expires_at: Instant,
}

impl CacheEntry {
    fn new(value: Classification, ttl: Duration) -> Self {
        Self {
            value,
            expires_at: Instant::now() + ttl,
        }
    }

    fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// Internal counters for sweep/eviction visibility
#[derive(Debug, Clone, Default)]
pub struct CacheStats {
    pub inserts: u64,
    pub evictions: u64,
    pub expirations: u64,
}

/// In-memory cache backend
pub struct MemoryCache {
    config: CacheConfig,
    data: RwLock<HashMap<String, CacheEntry>>,
    access_order: RwLock<VecDeque<String>>, // For LRU tracking
    stats: RwLock<CacheStats>,
}

impl MemoryCache {
    /// Create new cache with given configuration
    pub fn new(config: CacheConfig) -> Self {
        Self {
            config,
            data: RwLock::new(HashMap::new()),
            access_order: RwLock::new(VecDeque::new()),
            stats: RwLock::new(CacheStats::default()),
        }
    }

    /// Drop all expired entries
    ///
    /// Called periodically by the sweep task; lookups also drop expired
    /// entries lazily, so this only bounds memory, not correctness.
    pub fn purge_expired(&self) -> usize {
        let mut data = self.data.write().unwrap();
        let before = data.len();
        data.retain(|_, entry| !entry.is_expired());
        let removed = before - data.len();

        if removed > 0 {
            let mut access_order = self.access_order.write().unwrap();
            access_order.retain(|k| data.contains_key(k));

            let mut stats = self.stats.write().unwrap();
            stats.expirations += removed as u64;

            logger::debug(
                LogTag::Cache,
                &format!("Swept {} expired entries ({} remain)", removed, data.len()),
            );
        }

        removed
    }

    /// Get current counters
    pub fn stats(&self) -> CacheStats {
        self.stats.read().unwrap().clone()
    }

    /// Get current cache size
    pub fn len(&self) -> usize {
        self.data.read().unwrap().len()
    }

    /// Check if cache is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn get_sync(&self, key: &str) -> Option<Classification> {
        let mut data = self.data.write().unwrap();

        let live = match data.get(key) {
            None => return None,
            Some(entry) if entry.is_expired() => None,
            Some(entry) => Some(entry.value.clone()),
        };

        match live {
            Some(value) => {
                // Order update happens under the data lock so a concurrent
                // purge cannot leave a ghost key in access_order
                self.update_access_order(key);
                drop(data);
                Some(value)
            }
            None => {
                // Expired - behaves as absent
                data.remove(key);
                self.remove_from_access_order(key);

                let mut stats = self.stats.write().unwrap();
                stats.expirations += 1;

                None
            }
        }
    }

    fn set_sync(&self, key: &str, value: &Classification, ttl: Duration) {
        let mut data = self.data.write().unwrap();

        // Evict LRU if at capacity and this is a new key
        if data.len() >= self.config.capacity && !data.contains_key(key) {
            self.evict_lru(&mut data);
        }

        data.insert(key.to_string(), CacheEntry::new(value.clone(), ttl));
        self.update_access_order(key);
        drop(data);

        let mut stats = self.stats.write().unwrap();
        stats.inserts += 1;
    }

    // Private: Evict least recently used entry
    fn evict_lru(&self, data: &mut HashMap<String, CacheEntry>) {
        let mut access_order = self.access_order.write().unwrap();

        if let Some(lru_key) = access_order.pop_front() {
            data.remove(&lru_key);

            let mut stats = self.stats.write().unwrap();
            stats.evictions += 1;
        }
    }

    // Private: Update access order for LRU tracking
    fn update_access_order(&self, key: &str) {
        let mut access_order = self.access_order.write().unwrap();

        // Remove from current position, re-add as most recently used
        access_order.retain(|k| k != key);
        access_order.push_back(key.to_string());
    }

    // Private: Remove key from access order
    fn remove_from_access_order(&self, key: &str) {
        let mut access_order = self.access_order.write().unwrap();
        access_order.retain(|k| k != key);
    }
}

#[async_trait]
impl CacheStore for MemoryCache {
    async fn get(&self, key: &str) -> ClassifierResult<Option<Classification>> {
        Ok(self.get_sync(key))
    }

    async fn set(&self, key: &str, value: &Classification, ttl: Duration) -> ClassifierResult<()> {
        self.set_sync(key, value, ttl);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classification(label: &str) -> Classification {
        Classification {
            label: label.to_string(),
            score: 0.9,
        }
    }

    #[tokio::test]
    async fn basic_operations() {
        let cache = MemoryCache::new(CacheConfig::custom(60, 100));

        cache
            .set("key1", &classification("POSITIVE"), Duration::from_secs(60))
            .await
            .unwrap();
        assert_eq!(
            cache.get("key1").await.unwrap(),
            Some(classification("POSITIVE"))
        );

        // Miss
        assert_eq!(cache.get("nonexistent").await.unwrap(), None);

        assert_eq!(cache.stats().inserts, 1);
    }

    #[tokio::test]
    async fn overwrite_is_unconditional() {
        let cache = MemoryCache::new(CacheConfig::custom(60, 100));

        cache
            .set("key", &classification("POSITIVE"), Duration::from_secs(60))
            .await
            .unwrap();
        cache
            .set("key", &classification("NEGATIVE"), Duration::from_secs(60))
            .await
            .unwrap();

        assert_eq!(
            cache.get("key").await.unwrap(),
            Some(classification("NEGATIVE"))
        );
        assert_eq!(cache.len(), 1);
    }

    #[tokio::test]
    async fn ttl_expiration_behaves_as_absent() {
        let cache = MemoryCache::new(CacheConfig::custom(60, 100));

        cache
            .set("key", &classification("POSITIVE"), Duration::from_millis(20))
            .await
            .unwrap();
        assert!(cache.get("key").await.unwrap().is_some());

        tokio::time::sleep(Duration::from_millis(40)).await;
        assert_eq!(cache.get("key").await.unwrap(), None);
        assert_eq!(cache.stats().expirations, 1);
    }

    #[tokio::test]
    async fn lru_eviction_at_capacity() {
        let cache = MemoryCache::new(CacheConfig::custom(60, 2));
        let ttl = Duration::from_secs(60);

        cache.set("key1", &classification("A"), ttl).await.unwrap();
        cache.set("key2", &classification("B"), ttl).await.unwrap();
        cache.set("key3", &classification("C"), ttl).await.unwrap(); // Should evict key1

        assert_eq!(cache.get("key1").await.unwrap(), None); // Evicted
        assert!(cache.get("key2").await.unwrap().is_some());
        assert!(cache.get("key3").await.unwrap().is_some());
        assert_eq!(cache.stats().evictions, 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn lru_order_stays_consistent_with_sweeps() {
        use std::sync::Arc;

        let cache = Arc::new(MemoryCache::new(CacheConfig::custom(60, 8)));

        // Churn a small keyspace with mixed TTLs while sweeping, so
        // lookups race expiry removal
        let mut tasks = tokio::task::JoinSet::new();
        for t in 0..4u64 {
            let cache = Arc::clone(&cache);
            tasks.spawn(async move {
                for i in 0..200u64 {
                    let key = format!("key{}", (t * 50 + i) % 16);
                    let ttl = if i % 2 == 0 {
                        Duration::from_micros(50)
                    } else {
                        Duration::from_secs(60)
                    };
                    cache.set(&key, &classification("A"), ttl).await.unwrap();
                    cache.get(&key).await.unwrap();
                    if i % 16 == 0 {
                        cache.purge_expired();
                    }
                }
            });
        }
        while let Some(result) = tasks.join_next().await {
            result.unwrap();
        }

        // Refill past capacity: every eviction must remove a live entry,
        // so a stale access_order ghost would overshoot the cap here
        for i in 0..20 {
            cache
                .set(&format!("fresh{}", i), &classification("B"), Duration::from_secs(60))
                .await
                .unwrap();
        }
        assert!(cache.len() <= 8, "capacity exceeded: len = {}", cache.len());
    }

    #[tokio::test]
    async fn sweep_drops_expired_entries() {
        let cache = MemoryCache::new(CacheConfig::custom(60, 100));

        cache
            .set("old", &classification("A"), Duration::from_millis(10))
            .await
            .unwrap();
        cache
            .set("fresh", &classification("B"), Duration::from_secs(60))
            .await
            .unwrap();

        tokio::time::sleep(Duration::from_millis(30)).await;
        assert_eq!(cache.purge_expired(), 1);
        assert_eq!(cache.len(), 1);
        assert!(cache.get("fresh").await.unwrap().is_some());
    }
}
