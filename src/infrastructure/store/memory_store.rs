//! In-process key-value store for tests and single-node development.

use super::service::{KeyValueStore, StoreError, StoreResult};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;
use tokio::time::Instant;
use tracing::debug;

struct Entry {
    value: String,
    expires_at: Option<Instant>,
}

impl Entry {
    fn is_live(&self, now: Instant) -> bool {
        self.expires_at.is_none_or(|at| now < at)
    }
}

/// A [`KeyValueStore`] held entirely in process memory.
///
/// Expiry is checked lazily on read against the Tokio clock, so tests can pause
/// time and step past a TTL with `tokio::time::advance`. State is not shared
/// between processes, which makes this unsuitable for multi-instance deployments.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, Entry>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        debug!("Using MemoryStore (state is process-local)");
        Self::default()
    }

    /// Returns the live value and remaining TTL for `key`.
    ///
    /// `Some((value, None))` means the key never expires. Intended for assertions.
    pub fn inspect(&self, key: &str) -> Option<(String, Option<Duration>)> {
        let now = Instant::now();
        let entries = self.lock().ok()?;
        entries.get(key).filter(|e| e.is_live(now)).map(|e| {
            (
                e.value.clone(),
                e.expires_at.map(|at| at.saturating_duration_since(now)),
            )
        })
    }

    /// Number of keys that have not yet expired.
    pub fn live_keys(&self) -> usize {
        let now = Instant::now();
        self.lock()
            .map(|entries| entries.values().filter(|e| e.is_live(now)).count())
            .unwrap_or(0)
    }

    fn lock(&self) -> StoreResult<MutexGuard<'_, HashMap<String, Entry>>> {
        self.entries
            .lock()
            .map_err(|_| StoreError::OperationError("memory store lock poisoned".to_string()))
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn incr(&self, key: &str) -> StoreResult<i64> {
        let now = Instant::now();
        let mut entries = self.lock()?;

        let (current, expires_at) = match entries.get(key).filter(|e| e.is_live(now)) {
            Some(entry) => {
                let current = entry.value.parse::<i64>().map_err(|_| {
                    StoreError::UnexpectedValue {
                        key: key.to_string(),
                        reason: "value is not an integer".to_string(),
                    }
                })?;
                (current, entry.expires_at)
            }
            None => (0, None),
        };

        let next = current
            .checked_add(1)
            .ok_or_else(|| StoreError::UnexpectedValue {
                key: key.to_string(),
                reason: "increment would overflow".to_string(),
            })?;

        entries.insert(
            key.to_string(),
            Entry {
                value: next.to_string(),
                expires_at,
            },
        );
        Ok(next)
    }

    async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let now = Instant::now();
        let mut entries = self.lock()?;

        match entries.get(key) {
            Some(entry) if entry.is_live(now) => Ok(Some(entry.value.clone())),
            Some(_) => {
                entries.remove(key);
                Ok(None)
            }
            None => Ok(None),
        }
    }

    async fn set(&self, key: &str, value: &str, ttl: Duration) -> StoreResult<()> {
        let expires_at = (!ttl.is_zero()).then(|| Instant::now() + ttl);
        self.lock()?.insert(
            key.to_string(),
            Entry {
                value: value.to_string(),
                expires_at,
            },
        );
        Ok(())
    }

    async fn health_check(&self) -> bool {
        self.lock().is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_incr_starts_at_one() {
        let store = MemoryStore::new();
        assert_eq!(store.incr("counter").await.unwrap(), 1);
        assert_eq!(store.incr("counter").await.unwrap(), 2);
        assert_eq!(store.incr("other").await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_incr_rejects_non_integer() {
        let store = MemoryStore::new();
        store.set("k", "abc", Duration::ZERO).await.unwrap();
        assert!(matches!(
            store.incr("k").await,
            Err(StoreError::UnexpectedValue { .. })
        ));
    }

    #[tokio::test]
    async fn test_get_missing_key() {
        let store = MemoryStore::new();
        assert_eq!(store.get("nope").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_set_overwrites() {
        let store = MemoryStore::new();
        store.set("k", "a", Duration::ZERO).await.unwrap();
        store.set("k", "b", Duration::ZERO).await.unwrap();
        assert_eq!(store.get("k").await.unwrap().as_deref(), Some("b"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_ttl_expires_key() {
        let store = MemoryStore::new();
        store.set("k", "v", Duration::from_secs(60)).await.unwrap();

        tokio::time::advance(Duration::from_secs(59)).await;
        assert_eq!(store.get("k").await.unwrap().as_deref(), Some("v"));

        tokio::time::advance(Duration::from_secs(1)).await;
        assert_eq!(store.get("k").await.unwrap(), None);
        assert_eq!(store.live_keys(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_ttl_never_expires() {
        let store = MemoryStore::new();
        store.set("k", "v", Duration::ZERO).await.unwrap();

        tokio::time::advance(Duration::from_secs(10 * 365 * 24 * 3600)).await;
        assert_eq!(store.inspect("k"), Some(("v".to_string(), None)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_inspect_reports_remaining_ttl() {
        let store = MemoryStore::new();
        store.set("k", "v", Duration::from_secs(600)).await.unwrap();
        tokio::time::advance(Duration::from_secs(100)).await;

        let (value, ttl) = store.inspect("k").unwrap();
        assert_eq!(value, "v");
        assert_eq!(ttl, Some(Duration::from_secs(500)));
    }
}
