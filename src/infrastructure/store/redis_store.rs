//! Redis-backed key-value store.

use super::service::{KeyValueStore, StoreError, StoreResult};
use async_trait::async_trait;
use redis::{AsyncCommands, Client, RedisResult, aio::ConnectionManager};
use std::future::Future;
use std::time::Duration;
use tracing::{debug, info};

/// Redis implementation of [`KeyValueStore`].
///
/// Uses `ConnectionManager` for automatic reconnection; cloning the manager is
/// cheap and shares the underlying multiplexed connection. Every command is
/// bounded by `timeout` and, unlike a cache, every failure is returned to the
/// caller.
pub struct RedisStore {
    client: ConnectionManager,
    timeout: Duration,
}

impl RedisStore {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Arguments
    ///
    /// - `redis_url` - Redis connection string (e.g., `"redis://localhost:6379/0"`)
    /// - `timeout` - Upper bound for connecting and for each command; controlled via
    ///   `REDIS_TIMEOUT_MS`
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ConnectionError`] if the URL is invalid or the connection
    /// cannot be established, and [`StoreError::Timeout`] if either step stalls.
    pub async fn connect(redis_url: &str, timeout: Duration) -> StoreResult<Self> {
        info!("Connecting to Redis");

        let client = Client::open(redis_url).map_err(|e| {
            StoreError::ConnectionError(format!("Failed to create Redis client: {}", e))
        })?;

        let manager = tokio::time::timeout(timeout, ConnectionManager::new(client))
            .await
            .map_err(|_| StoreError::Timeout(timeout))?
            .map_err(|e| StoreError::ConnectionError(format!("Failed to connect to Redis: {}", e)))?;

        let store = Self {
            client: manager,
            timeout,
        };

        let mut conn = store.client.clone();
        store
            .bounded("PING", "", conn.ping::<()>())
            .await
            .map_err(|e| StoreError::ConnectionError(format!("Redis PING failed: {}", e)))?;

        info!("✓ Connected to Redis");

        Ok(store)
    }

    /// Awaits a Redis command, converting errors and enforcing the timeout.
    async fn bounded<T>(
        &self,
        command: &'static str,
        key: &str,
        fut: impl Future<Output = RedisResult<T>>,
    ) -> StoreResult<T> {
        match tokio::time::timeout(self.timeout, fut).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(e)) => Err(StoreError::OperationError(format!(
                "{} {}: {}",
                command, key, e
            ))),
            Err(_) => Err(StoreError::Timeout(self.timeout)),
        }
    }
}

#[async_trait]
impl KeyValueStore for RedisStore {
    async fn incr(&self, key: &str) -> StoreResult<i64> {
        let mut conn = self.client.clone();
        let value = self.bounded("INCR", key, conn.incr::<_, _, i64>(key, 1)).await?;
        debug!("INCR {} -> {}", key, value);
        Ok(value)
    }

    async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let mut conn = self.client.clone();
        let value = self
            .bounded("GET", key, conn.get::<_, Option<String>>(key))
            .await?;

        match value {
            Some(_) => debug!("GET {}: hit", key),
            None => debug!("GET {}: miss", key),
        }
        Ok(value)
    }

    async fn set(&self, key: &str, value: &str, ttl: Duration) -> StoreResult<()> {
        let mut conn = self.client.clone();

        if ttl.is_zero() {
            self.bounded("SET", key, conn.set::<_, _, ()>(key, value))
                .await?;
            debug!("SET {} (no expiry)", key);
        } else {
            // SETEX takes whole seconds; round sub-second remainders up
            let seconds = ttl.as_secs() + u64::from(ttl.subsec_nanos() > 0);
            self.bounded("SETEX", key, conn.set_ex::<_, _, ()>(key, value, seconds))
                .await?;
            debug!("SET {} (TTL: {}s)", key, seconds);
        }

        Ok(())
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.client.clone();
        self.bounded("PING", "", conn.ping::<()>()).await.is_ok()
    }
}
