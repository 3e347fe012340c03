//! The shortening engine: `shorten`, `resolve` and `info`.

use std::sync::Arc;
use std::time::Duration;

use crate::application::services::{DedupIndex, DetailStore, SequenceAllocator, ShortlinkRegistry};
use crate::domain::entities::{DetailRecord, ShortCode};
use crate::domain::keys::Keyspace;
use crate::domain::{ShortenerError, WriteStage};
use crate::infrastructure::store::{KeyValueStore, StoreError};
use crate::utils::base62::DecodeError;
use crate::utils::fingerprint::fingerprint;
use crate::utils::url_normalizer::normalize_url;

/// Upper bound on `expiration_in_minutes` (100 years).
///
/// Keeps the derived TTL representable by every backend.
pub const MAX_EXPIRATION_MINUTES: i64 = 100 * 365 * 24 * 60;

/// Composes the allocator, encoder, dedup index, registry and detail store.
///
/// Holds no mutable state of its own; all state lives in the backend, so one
/// service may be shared across tasks and any number of processes may run against
/// the same backend.
pub struct ShortenerService<S: KeyValueStore + ?Sized> {
    allocator: SequenceAllocator<S>,
    dedup: DedupIndex<S>,
    registry: ShortlinkRegistry<S>,
    details: DetailStore<S>,
}

impl<S: KeyValueStore + ?Sized> ShortenerService<S> {
    /// Creates an engine over `store` using the key layout in `keys`.
    pub fn new(store: Arc<S>, keys: Keyspace) -> Self {
        Self {
            allocator: SequenceAllocator::new(store.clone(), &keys),
            dedup: DedupIndex::new(store.clone(), keys.clone()),
            registry: ShortlinkRegistry::new(store.clone(), keys.clone()),
            details: DetailStore::new(store, keys),
        }
    }

    /// Returns a short code for `url`, reusing an earlier one within the dedup window.
    ///
    /// # Algorithm
    ///
    /// 1. Normalize and fingerprint `url`
    /// 2. Return the code recorded for the fingerprint, if any (nothing is allocated
    ///    or written)
    /// 3. Otherwise allocate a sequence number and encode it
    /// 4. Write the forward mapping, the dedup entry and the detail record, in that
    ///    order, all with the same TTL
    ///
    /// The URL is stored exactly as given; only the fingerprint uses the normalized
    /// form. `expiration_in_minutes` is converted to a TTL and passed to the
    /// backend unchanged, including `0`.
    ///
    /// # Errors
    ///
    /// - [`ShortenerError::InvalidExpiration`] if the expiration is negative or above
    ///   [`MAX_EXPIRATION_MINUTES`]
    /// - [`ShortenerError::InvalidUrl`] if the URL cannot be normalized
    /// - [`ShortenerError::BackendUnavailable`] if the lookup, the allocation or the
    ///   first write fails
    /// - [`ShortenerError::PartialWrite`] if a later write fails
    pub async fn shorten(
        &self,
        url: &str,
        expiration_in_minutes: i64,
    ) -> Result<ShortCode, ShortenerError> {
        let ttl = ttl_from_minutes(expiration_in_minutes)?;
        let hash = fingerprint(&normalize_url(url)?);

        if let Some(existing) = self.dedup.lookup(&hash).await? {
            return Ok(existing);
        }

        let code = ShortCode::from_sequence(self.allocator.next().await?);

        self.registry.put(&code, url, ttl).await?;

        self.dedup
            .record(&hash, &code, ttl)
            .await
            .map_err(|source| partial_write(&code, WriteStage::DedupIndex, source))?;

        let detail = DetailRecord::new(url, expiration_in_minutes);
        self.details
            .put(&code, &detail, ttl)
            .await
            .map_err(|source| partial_write(&code, WriteStage::Detail, source))?;

        Ok(code)
    }

    /// Returns the original URL for `code`.
    ///
    /// # Errors
    ///
    /// - [`ShortenerError::InvalidCode`] if `code` is empty or has a character
    ///   outside the base62 alphabet
    /// - [`ShortenerError::NotFound`] if it was never issued or has expired,
    ///   including non-canonical codes such as `"007"`
    /// - [`ShortenerError::BackendUnavailable`] on backend failure
    pub async fn resolve(&self, code: &str) -> Result<String, ShortenerError> {
        let code = parse_code(code)?;

        self.registry
            .get(&code)
            .await?
            .ok_or_else(ShortenerError::unknown_code)
    }

    /// Returns the detail record for `code`.
    ///
    /// # Errors
    ///
    /// Same as [`Self::resolve`], plus [`ShortenerError::CorruptRecord`] if the
    /// stored record cannot be parsed.
    pub async fn info(&self, code: &str) -> Result<DetailRecord, ShortenerError> {
        let code = parse_code(code)?;

        self.details
            .get(&code)
            .await?
            .ok_or_else(ShortenerError::unknown_code)
    }
}

/// Alphanumeric codes that no allocation can produce are unknown, not invalid.
fn parse_code(code: &str) -> Result<ShortCode, ShortenerError> {
    ShortCode::parse(code).map_err(|reason| match reason {
        DecodeError::LeadingZero | DecodeError::Overflow => ShortenerError::unknown_code(),
        DecodeError::Empty | DecodeError::InvalidCharacter { .. } => {
            ShortenerError::invalid_code(code, reason)
        }
    })
}

fn partial_write(
    code: &ShortCode,
    stage: WriteStage,
    source: StoreError,
) -> ShortenerError {
    ShortenerError::PartialWrite {
        code: code.to_string(),
        stage,
        source,
    }
}

/// Converts caller minutes into the TTL handed to the backend.
fn ttl_from_minutes(minutes: i64) -> Result<Duration, ShortenerError> {
    if !(0..=MAX_EXPIRATION_MINUTES).contains(&minutes) {
        return Err(ShortenerError::InvalidExpiration(minutes));
    }
    Ok(Duration::from_secs(minutes as u64 * 60))
}
