//! Redis cache client for distributed caching.
//!
//! Provides async Redis operations with JSON serialization for cached values.
//! All read paths degrade to a miss on connection or decode failures so that
//! callers can treat the cache as strictly best-effort.

use redis::{AsyncCommands, Client, aio::ConnectionManager};
use serde::{Serialize, de::DeserializeOwned};
use std::future::Future;
use std::time::Duration;
use tracing::{debug, error, instrument};

/// Redis cache client with connection pooling.
#[derive(Clone)]
pub struct RedisCache {
    conn: ConnectionManager,
}

impl std::fmt::Debug for RedisCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisCache").finish_non_exhaustive()
    }
}

/// Error type for cache operations.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("Redis connection error: {0}")]
    Connection(#[from] redis::RedisError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl RedisCache {
    /// Creates a new Redis cache client.
    ///
    /// # Arguments
    ///
    /// * `redis_url` - Redis connection URL (e.g., "redis://localhost:6379")
    ///
    /// # Errors
    ///
    /// Returns `CacheError::Connection` if connection fails.
    pub async fn new(redis_url: &str) -> Result<Self, CacheError> {
        let client = Client::open(redis_url)?;
        let conn = ConnectionManager::new(client).await?;

        Ok(Self { conn })
    }

    /// Gets a cached value by key.
    ///
    /// Returns `None` if the key doesn't exist or deserialization fails.
    #[instrument(skip(self), fields(cache.operation = "GET"))]
    pub async fn get<T>(&self, key: &str) -> Option<T>
    where
        T: DeserializeOwned,
    {
        let mut conn = self.conn.clone();

        match conn.get::<_, Option<String>>(key).await {
            Ok(Some(value)) => {
                debug!(cache.key = %key, "Cache hit");
                match serde_json::from_str(&value) {
                    Ok(parsed) => Some(parsed),
                    Err(e) => {
                        error!(cache.key = %key, error = %e, "Failed to deserialize cached value");
                        None
                    }
                }
            }
            Ok(None) => {
                debug!(cache.key = %key, "Cache miss");
                None
            }
            Err(e) => {
                error!(cache.key = %key, error = %e, "Redis GET error");
                None
            }
        }
    }

    /// Sets a cached value with a TTL.
    #[instrument(skip(self, value), fields(cache.operation = "SETEX"))]
    pub async fn set_with_ttl<T>(
        &self,
        key: &str,
        value: &T,
        ttl: Duration,
    ) -> Result<(), CacheError>
    where
        T: Serialize,
    {
        let mut conn = self.conn.clone();
        let json = serde_json::to_string(value)?;

        conn.set_ex::<_, _, ()>(key, json, ttl.as_secs()).await?;

        debug!(cache.key = %key, cache.ttl_secs = %ttl.as_secs(), "Cache set");

        Ok(())
    }

    /// Gets a cached value, computing and storing it on a miss.
    ///
    /// The computed value is cached with the given TTL on a best-effort
    /// basis: a failed SET is logged and the computed value is still
    /// returned. Concurrent callers racing past the same expiry may each
    /// run `compute`; last write wins, which is fine for idempotent loads.
    pub async fn get_or_compute<T, F, Fut>(&self, key: &str, ttl: Duration, compute: F) -> T
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = T>,
    {
        if let Some(hit) = self.get(key).await {
            return hit;
        }

        let value = compute().await;

        if let Err(e) = self.set_with_ttl(key, &value, ttl).await {
            error!(cache.key = %key, error = %e, "Failed to store computed value");
        }

        value
    }

    /// Invalidates (deletes) a cached key.
    #[instrument(skip(self), fields(cache.operation = "DEL"))]
    pub async fn invalidate(&self, key: &str) -> Result<(), CacheError> {
        let mut conn = self.conn.clone();

        conn.del::<_, ()>(key).await?;

        debug!(cache.key = %key, "Cache invalidated");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct TestData {
        id: i32,
        name: String,
    }

    // Integration tests require a running Redis instance

    #[tokio::test]
    #[ignore = "requires Redis"]
    async fn test_set_and_get() {
        let cache = RedisCache::new("redis://localhost:6379").await.unwrap();

        let data = TestData {
            id: 1,
            name: "test".to_string(),
        };

        cache
            .set_with_ttl("test:key", &data, Duration::from_secs(60))
            .await
            .unwrap();

        let retrieved: Option<TestData> = cache.get("test:key").await;
        assert_eq!(retrieved, Some(data));

        cache.invalidate("test:key").await.unwrap();
    }

    #[tokio::test]
    #[ignore = "requires Redis"]
    async fn test_get_or_compute_fills_cache() {
        let cache = RedisCache::new("redis://localhost:6379").await.unwrap();
        cache.invalidate("test:compute").await.unwrap();

        let computed: TestData = cache
            .get_or_compute("test:compute", Duration::from_secs(60), || async {
                TestData {
                    id: 7,
                    name: "computed".to_string(),
                }
            })
            .await;
        assert_eq!(computed.id, 7);

        // Second call must come from the cache, not the closure
        let cached: TestData = cache
            .get_or_compute("test:compute", Duration::from_secs(60), || async {
                panic!("should not recompute on a warm cache")
            })
            .await;
        assert_eq!(cached, computed);

        cache.invalidate("test:compute").await.unwrap();
    }
}
