//! Globally unique sequence numbers.

use std::sync::Arc;

use crate::domain::keys::Keyspace;
use crate::domain::ShortenerError;
use crate::infrastructure::store::{KeyValueStore, StoreError};

/// Hands out sequence numbers from the backend's atomic counter.
///
/// The counter lives only in the backend and is never cached here, so any number
/// of allocators in any number of processes draw from one total order.
pub struct SequenceAllocator<S: KeyValueStore + ?Sized> {
    store: Arc<S>,
    key: String,
}

impl<S: KeyValueStore + ?Sized> SequenceAllocator<S> {
    pub fn new(store: Arc<S>, keys: &Keyspace) -> Self {
        Self {
            store,
            key: keys.sequence(),
        }
    }

    /// Increments the counter and returns the value produced by that increment.
    ///
    /// A failed call consumes nothing the caller may reuse; the next attempt must
    /// call `next` again.
    ///
    /// # Errors
    ///
    /// Returns [`ShortenerError::BackendUnavailable`] if the increment fails or the
    /// counter holds a negative value.
    pub async fn next(&self) -> Result<u64, ShortenerError> {
        let value = self.store.incr(&self.key).await?;

        u64::try_from(value).map_err(|_| {
            ShortenerError::BackendUnavailable(StoreError::UnexpectedValue {
                key: self.key.clone(),
                reason: format!("counter is negative ({})", value),
            })
        })
    }
}
