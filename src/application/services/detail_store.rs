//! JSON detail records addressed by short code.

use std::sync::Arc;
use std::time::Duration;

use crate::domain::ShortenerError;
use crate::domain::entities::{DetailRecord, ShortCode};
use crate::domain::keys::Keyspace;
use crate::infrastructure::store::{KeyValueStore, StoreError, StoreResult};

pub struct DetailStore<S: KeyValueStore + ?Sized> {
    store: Arc<S>,
    keys: Keyspace,
}

impl<S: KeyValueStore + ?Sized> DetailStore<S> {
    pub fn new(store: Arc<S>, keys: Keyspace) -> Self {
        Self { store, keys }
    }

    /// Writes `record` for `code`.
    ///
    /// `ttl` must match the forward mapping's TTL so both expire together.
    pub async fn put(&self, code: &ShortCode, record: &DetailRecord, ttl: Duration) -> StoreResult<()> {
        let json = serde_json::to_string(record)
            .map_err(|e| StoreError::OperationError(format!("serialize detail: {}", e)))?;

        self.store
            .set(&self.keys.detail(code.as_str()), &json, ttl)
            .await
    }

    /// Reads the record for `code`.
    ///
    /// # Errors
    ///
    /// Returns [`ShortenerError::BackendUnavailable`] on backend failure and
    /// [`ShortenerError::CorruptRecord`] if the stored JSON does not parse.
    pub async fn get(&self, code: &ShortCode) -> Result<Option<DetailRecord>, ShortenerError> {
        let Some(json) = self.store.get(&self.keys.detail(code.as_str())).await? else {
            return Ok(None);
        };

        serde_json::from_str(&json)
            .map(Some)
            .map_err(|source| ShortenerError::CorruptRecord {
                code: code.to_string(),
                source,
            })
    }
}
