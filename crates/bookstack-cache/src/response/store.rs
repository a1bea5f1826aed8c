//! Cache-aside response store.
//!
//! Every operation is best-effort: a Redis failure is logged at warn level
//! and treated as a miss (reads) or a no-op (writes), so the database path
//! is never blocked by cache availability.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::pool::RedisPool;

/// SCAN batch size for wildcard invalidation
const SCAN_COUNT: usize = 100;

/// Best-effort cache-aside store over the Redis pool.
///
/// Built with `disabled()` it behaves like a cache that always misses.
#[derive(Debug, Clone)]
pub struct ResponseCache {
    pool: Option<RedisPool>,
    default_ttl_secs: u64,
    list_ttl_secs: u64,
}

impl ResponseCache {
    /// Create a response cache backed by a Redis pool
    #[must_use]
    pub fn new(pool: RedisPool, default_ttl_secs: u64, list_ttl_secs: u64) -> Self {
        Self {
            pool: Some(pool),
            default_ttl_secs,
            list_ttl_secs,
        }
    }

    /// Create a cache that always misses and ignores writes
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            pool: None,
            default_ttl_secs: 0,
            list_ttl_secs: 0,
        }
    }

    /// TTL for single-item entries
    #[must_use]
    pub fn default_ttl(&self) -> u64 {
        self.default_ttl_secs
    }

    /// TTL for public list pages
    #[must_use]
    pub fn list_ttl(&self) -> u64 {
        self.list_ttl_secs
    }

    /// Look up a cached value, treating any failure as a miss
    pub async fn get_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let pool = self.pool.as_ref()?;
        match pool.get_value(key).await {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "Cache read failed, treating as miss");
                None
            }
        }
    }

    /// Store a value under a key. `ttl_seconds` of `None` means no expiry.
    pub async fn put<T: Serialize>(&self, key: &str, value: &T, ttl_seconds: Option<u64>) {
        let Some(pool) = self.pool.as_ref() else {
            return;
        };
        if let Err(e) = pool.set(key, value, ttl_seconds).await {
            tracing::warn!(key = %key, error = %e, "Cache write failed");
        }
    }

    /// Delete the given keys
    pub async fn invalidate(&self, keys: &[&str]) {
        let Some(pool) = self.pool.as_ref() else {
            return;
        };
        if let Err(e) = pool.delete_many(keys).await {
            tracing::warn!(error = %e, "Cache invalidation failed");
        }
    }

    /// Delete every key matching a wildcard pattern via SCAN
    pub async fn invalidate_pattern(&self, pattern: &str) {
        let Some(pool) = self.pool.as_ref() else {
            return;
        };

        let keys = match pool.scan_keys(pattern, SCAN_COUNT).await {
            Ok(keys) => keys,
            Err(e) => {
                tracing::warn!(pattern = %pattern, error = %e, "Cache scan failed");
                return;
            }
        };

        if keys.is_empty() {
            return;
        }

        let refs: Vec<&str> = keys.iter().map(String::as_str).collect();
        if let Err(e) = pool.delete_many(&refs).await {
            tracing::warn!(pattern = %pattern, error = %e, "Cache invalidation failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_disabled_cache_misses() {
        let cache = ResponseCache::disabled();

        let hit: Option<String> = cache.get_json("any_key").await;
        assert!(hit.is_none());

        // Writes and invalidations are no-ops, not errors
        cache.put("any_key", &"value", Some(60)).await;
        cache.invalidate(&["any_key"]).await;
        cache.invalidate_pattern("any_*").await;
    }

    #[test]
    fn test_ttl_accessors() {
        let cache = ResponseCache::disabled();
        assert_eq!(cache.default_ttl(), 0);
        assert_eq!(cache.list_ttl(), 0);
    }
}
