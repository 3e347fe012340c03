//! Fingerprint -> short code index that makes re-submission idempotent.

use std::sync::Arc;
use std::time::Duration;

use crate::domain::entities::ShortCode;
use crate::domain::keys::Keyspace;
use crate::infrastructure::store::{KeyValueStore, StoreResult};

/// Value treated as "no mapping" when read from the index.
///
/// Nothing in this crate writes it; the lookup still honours it so a stale marker
/// left by another writer never resolves to a bogus code.
pub const EMPTY_PLACEHOLDER: &str = "{}";

pub struct DedupIndex<S: KeyValueStore + ?Sized> {
    store: Arc<S>,
    keys: Keyspace,
}

impl<S: KeyValueStore + ?Sized> DedupIndex<S> {
    pub fn new(store: Arc<S>, keys: Keyspace) -> Self {
        Self { store, keys }
    }

    /// Returns the code previously recorded for `fingerprint`.
    ///
    /// Absent keys, the [`EMPTY_PLACEHOLDER`] sentinel and values that are not a
    /// canonical short code all read as `None`, and the caller allocates afresh.
    pub async fn lookup(&self, fingerprint: &str) -> StoreResult<Option<ShortCode>> {
        let stored = self.store.get(&self.keys.url_hash(fingerprint)).await?;

        Ok(stored
            .filter(|value| value != EMPTY_PLACEHOLDER)
            .and_then(|value| ShortCode::parse(&value).ok()))
    }

    /// Records `code` for `fingerprint`; the entry expires with `ttl`.
    pub async fn record(&self, fingerprint: &str, code: &ShortCode, ttl: Duration) -> StoreResult<()> {
        self.store
            .set(&self.keys.url_hash(fingerprint), code.as_str(), ttl)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::store::MemoryStore;

    fn index() -> (Arc<MemoryStore>, DedupIndex<MemoryStore>) {
        let store = Arc::new(MemoryStore::new());
        (store.clone(), DedupIndex::new(store, Keyspace::default()))
    }

    #[tokio::test]
    async fn test_lookup_missing() {
        let (_, index) = index();
        assert_eq!(index.lookup("abc").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_record_then_lookup() {
        let (store, index) = index();
        let code = ShortCode::from_sequence(7);

        index
            .record("abc", &code, Duration::from_secs(3600))
            .await
            .unwrap();

        assert_eq!(index.lookup("abc").await.unwrap(), Some(code));
        let (_, ttl) = store.inspect("urlhash:abc:shortlink").unwrap();
        assert!(ttl.is_some());
    }

    #[tokio::test]
    async fn test_placeholder_reads_as_missing() {
        let (store, index) = index();
        store
            .set("urlhash:abc:shortlink", EMPTY_PLACEHOLDER, Duration::ZERO)
            .await
            .unwrap();

        assert_eq!(index.lookup("abc").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_garbage_value_reads_as_missing() {
        let (store, index) = index();
        store
            .set("urlhash:abc:shortlink", "not/a code", Duration::ZERO)
            .await
            .unwrap();

        assert_eq!(index.lookup("abc").await.unwrap(), None);
    }
}
