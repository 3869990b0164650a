use crate::application::ports::Cache;
use crate::domain::DomainError;
use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Writes between sweeps of expired entries
const SWEEP_INTERVAL: u64 = 256;

#[derive(Debug, Clone)]
struct CacheEntry {
    value: String,
    expires_at: Option<Instant>,
}

impl CacheEntry {
    fn is_expired(&self, now: Instant) -> bool {
        self.expires_at.is_some_and(|at| now >= at)
    }
}

/// In-process cache
///
/// Expired entries are dropped on access and swept every
/// [`SWEEP_INTERVAL`] writes, so abandoned keys do not accumulate.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCache {
    entries: Arc<DashMap<String, CacheEntry>>,
    writes: Arc<AtomicU64>,
}

impl InMemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remaining lifetime of a live key; `None` when absent or persistent
    pub fn ttl(&self, key: &str) -> Option<Duration> {
        let now = Instant::now();
        let entry = self.entries.get(key)?;
        entry
            .expires_at
            .filter(|at| *at > now)
            .map(|at| at.duration_since(now))
    }

    /// Drop every expired entry, returning how many were removed
    pub fn purge_expired(&self) -> usize {
        let now = Instant::now();
        let before = self.entries.len();
        self.entries.retain(|_, e| !e.is_expired(now));
        before.saturating_sub(self.entries.len())
    }

    fn record_write(&self) {
        let writes = self.writes.fetch_add(1, Ordering::Relaxed) + 1;
        if writes % SWEEP_INTERVAL == 0 {
            let purged = self.purge_expired();
            if purged > 0 {
                tracing::debug!(purged, "Swept expired cache entries");
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait]
impl Cache for InMemoryCache {
    async fn get(&self, key: &str) -> Option<String> {
        let now = Instant::now();
        let hit = self.entries.get(key).map(|e| e.value().clone())?;
        if hit.is_expired(now) {
            self.entries.remove_if(key, |_, e| e.is_expired(now));
            return None;
        }
        Some(hit.value)
    }

    async fn set(&self, key: &str, value: &str, ttl: Option<Duration>) {
        self.entries.insert(
            key.to_string(),
            CacheEntry {
                value: value.to_string(),
                expires_at: ttl.map(|d| Instant::now() + d),
            },
        );
        self.record_write();
    }

    async fn incr(&self, key: &str) -> Result<i64, DomainError> {
        let now = Instant::now();
        let next = match self.entries.entry(key.to_string()) {
            Entry::Occupied(mut occupied) => {
                let entry = occupied.get_mut();
                let current = if entry.is_expired(now) {
                    entry.expires_at = None;
                    0
                } else {
                    entry.value.parse::<i64>().map_err(|_| {
                        DomainError::invalid_input(format!("value at '{}' is not an integer", key))
                    })?
                };
                entry.value = (current + 1).to_string();
                current + 1
            }
            Entry::Vacant(vacant) => {
                vacant.insert(CacheEntry {
                    value: "1".to_string(),
                    expires_at: None,
                });
                1
            }
        };

        self.record_write();
        Ok(next)
    }

    async fn expire(&self, key: &str, ttl: Duration) -> bool {
        let now = Instant::now();
        match self.entries.get_mut(key) {
            Some(mut entry) if !entry.is_expired(now) => {
                entry.expires_at = Some(now + ttl);
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set_and_get() {
        let cache = InMemoryCache::new();
        cache.set("a", "1", None).await;

        assert_eq!(cache.get("a").await.as_deref(), Some("1"));
        assert!(cache.get("missing").await.is_none());
    }

    #[tokio::test]
    async fn test_incr_counts_from_zero() {
        let cache = InMemoryCache::new();
        assert_eq!(cache.incr("a:count").await.unwrap(), 1);
        assert_eq!(cache.incr("a:count").await.unwrap(), 2);
        assert_eq!(cache.get("a:count").await.as_deref(), Some("2"));
    }

    #[tokio::test]
    async fn test_incr_rejects_non_integer() {
        let cache = InMemoryCache::new();
        cache.set("name", "juapesa", None).await;
        assert!(cache.incr("name").await.unwrap_err().is_invalid_input());
    }

    #[tokio::test]
    async fn test_expired_entries_vanish() {
        let cache = InMemoryCache::new();
        cache.set("short", "x", Some(Duration::from_millis(10))).await;
        cache.set("long", "y", Some(Duration::from_secs(60))).await;

        tokio::time::sleep(Duration::from_millis(25)).await;

        assert!(cache.get("short").await.is_none());
        assert_eq!(cache.get("long").await.as_deref(), Some("y"));
        assert_eq!(cache.len(), 1);
    }

    #[tokio::test]
    async fn test_incr_restarts_after_expiry() {
        let cache = InMemoryCache::new();
        cache.set("hits", "41", Some(Duration::from_millis(10))).await;
        tokio::time::sleep(Duration::from_millis(25)).await;

        assert_eq!(cache.incr("hits").await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_expire_applies_to_counters() {
        let cache = InMemoryCache::new();
        cache.incr("session:steps").await.unwrap();

        assert!(cache.ttl("session:steps").is_none());
        assert!(cache.expire("session:steps", Duration::from_millis(10)).await);
        assert!(cache.ttl("session:steps").is_some());
        assert!(!cache.expire("absent", Duration::from_secs(1)).await);

        tokio::time::sleep(Duration::from_millis(25)).await;
        assert!(cache.get("session:steps").await.is_none());
    }

    #[tokio::test]
    async fn test_purge_expired() {
        let cache = InMemoryCache::new();
        for i in 0..10 {
            cache
                .set(&format!("k{}", i), "v", Some(Duration::from_millis(5)))
                .await;
        }
        cache.set("keep", "v", None).await;
        tokio::time::sleep(Duration::from_millis(20)).await;

        assert_eq!(cache.purge_expired(), 10);
        assert_eq!(cache.len(), 1);
    }

    #[tokio::test]
    async fn test_writes_sweep_abandoned_keys() {
        let cache = InMemoryCache::new();
        for i in 0..100 {
            cache
                .set(&format!("abandoned:{}", i), "v", Some(Duration::from_millis(5)))
                .await;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;

        // Never read again; only the periodic sweep can remove them
        for _ in 0..SWEEP_INTERVAL {
            cache.set("live", "v", None).await;
        }

        assert_eq!(cache.len(), 1);
    }

    #[tokio::test]
    async fn test_factory_falls_back_to_memory() {
        let cache = crate::infrastructure::cache_from_url(Some("redis://localhost:6379"));
        cache.set("k", "v", None).await;
        assert_eq!(cache.get("k").await.as_deref(), Some("v"));
    }
}
