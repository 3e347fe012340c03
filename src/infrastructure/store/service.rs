//! Key-value backend trait and error types.

use async_trait::async_trait;
use std::time::Duration;

/// Errors reported by a key-value backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("Store connection error: {0}")]
    ConnectionError(String),

    #[error("Store operation error: {0}")]
    OperationError(String),

    #[error("Store operation timed out after {0:?}")]
    Timeout(Duration),

    #[error("Unexpected value under key {key}: {reason}")]
    UnexpectedValue { key: String, reason: String },
}

/// Result type for backend operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Capabilities the shortening engine needs from its shared backend.
///
/// Every call either completes or fails within a bounded time. Expiration is the
/// backend's job: once a TTL elapses the key reads as absent.
///
/// # Implementations
///
/// - [`crate::infrastructure::store::RedisStore`] - Redis via `ConnectionManager`
/// - [`crate::infrastructure::store::MemoryStore`] - In-process map for tests and local runs
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Atomically increments the integer at `key` and returns the new value.
    ///
    /// A missing key counts as `0`, so the first call returns `1`.
    async fn incr(&self, key: &str) -> StoreResult<i64>;

    /// Reads the string at `key`.
    ///
    /// Returns `Ok(None)` when the key is absent or has expired.
    async fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Writes `value` at `key`, replacing any previous value.
    ///
    /// A zero `ttl` stores the key without expiry; any other value expires the
    /// key once it elapses.
    async fn set(&self, key: &str, value: &str, ttl: Duration) -> StoreResult<()>;

    /// Checks if the backend is reachable.
    async fn health_check(&self) -> bool;
}
