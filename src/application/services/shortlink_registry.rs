//! Forward mapping from short code to original URL.

use std::sync::Arc;
use std::time::Duration;

use crate::domain::entities::ShortCode;
use crate::domain::keys::Keyspace;
use crate::infrastructure::store::{KeyValueStore, StoreResult};

/// The mapping consulted on every redirect.
pub struct ShortlinkRegistry<S: KeyValueStore + ?Sized> {
    store: Arc<S>,
    keys: Keyspace,
}

impl<S: KeyValueStore + ?Sized> ShortlinkRegistry<S> {
    pub fn new(store: Arc<S>, keys: Keyspace) -> Self {
        Self { store, keys }
    }

    pub async fn put(&self, code: &ShortCode, url: &str, ttl: Duration) -> StoreResult<()> {
        self.store
            .set(&self.keys.shortlink(code.as_str()), url, ttl)
            .await
    }

    /// Returns the URL for `code`, or `None` once it is absent or expired.
    pub async fn get(&self, code: &ShortCode) -> StoreResult<Option<String>> {
        self.store.get(&self.keys.shortlink(code.as_str())).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::store::MemoryStore;

    #[tokio::test(start_paused = true)]
    async fn test_put_get_and_expire() {
        let registry = ShortlinkRegistry::new(Arc::new(MemoryStore::new()), Keyspace::default());
        let code = ShortCode::from_sequence(42);

        registry
            .put(&code, "https://example.com/x", Duration::from_secs(120))
            .await
            .unwrap();
        assert_eq!(
            registry.get(&code).await.unwrap().as_deref(),
            Some("https://example.com/x")
        );

        tokio::time::advance(Duration::from_secs(120)).await;
        assert_eq!(registry.get(&code).await.unwrap(), None);
    }
}
