//! Errors returned by the shortening engine.

use crate::infrastructure::store::StoreError;
use crate::utils::base62::DecodeError;
use crate::utils::url_normalizer::UrlNormalizationError;
use std::fmt;

/// The later record write that failed inside `shorten`.
///
/// A failed forward-mapping write publishes nothing and is reported as
/// [`ShortenerError::BackendUnavailable`] instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteStage {
    DedupIndex,
    Detail,
}

impl fmt::Display for WriteStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::DedupIndex => "dedup index",
            Self::Detail => "detail",
        };
        f.write_str(name)
    }
}

/// Every failure the engine can report.
///
/// Backend failures are never retried or downgraded; they come back to the caller
/// as [`ShortenerError::BackendUnavailable`] or [`ShortenerError::PartialWrite`].
#[derive(Debug, thiserror::Error)]
pub enum ShortenerError {
    #[error("backend unavailable: {0}")]
    BackendUnavailable(#[from] StoreError),

    #[error("{0}")]
    NotFound(String),

    #[error("invalid short code {code:?}: {reason}")]
    InvalidCode {
        code: String,
        #[source]
        reason: DecodeError,
    },

    /// A record write failed after an earlier write of the same `shorten` succeeded.
    ///
    /// Retrying the whole `shorten` is safe: it either hits the dedup entry or
    /// allocates a fresh code.
    #[error("partial write for code {code}: {stage} write failed")]
    PartialWrite {
        code: String,
        stage: WriteStage,
        #[source]
        source: StoreError,
    },

    #[error("invalid url: {0}")]
    InvalidUrl(#[from] UrlNormalizationError),

    #[error("invalid expiration: {0} minutes")]
    InvalidExpiration(i64),

    #[error("corrupt detail record for code {code}")]
    CorruptRecord {
        code: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ShortenerError {
    pub(crate) fn unknown_code() -> Self {
        Self::NotFound("unknown short code".to_string())
    }

    pub(crate) fn invalid_code(code: &str, reason: DecodeError) -> Self {
        Self::InvalidCode {
            code: code.to_string(),
            reason,
        }
    }

    /// Returns true for failures a caller may resolve by retrying later.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::BackendUnavailable(_) | Self::PartialWrite { .. }
        )
    }
}
