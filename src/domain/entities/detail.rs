//! Detail record kept next to every forward mapping.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Metadata about a shortened URL, returned by info queries.
///
/// Stored as JSON under `shortlink:<code>:detail` with the same TTL as the
/// forward mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailRecord {
    pub url: String,
    pub created_at: DateTime<Utc>,
    pub expiration_in_minutes: i64,
}

impl DetailRecord {
    /// Creates a record stamped with the current time.
    pub fn new(url: impl Into<String>, expiration_in_minutes: i64) -> Self {
        Self {
            url: url.into(),
            created_at: Utc::now(),
            expiration_in_minutes,
        }
    }

    /// Returns when the record stops resolving, or `None` for a zero TTL.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        if self.expiration_in_minutes <= 0 {
            return None;
        }
        chrono::Duration::try_minutes(self.expiration_in_minutes)
            .and_then(|ttl| self.created_at.checked_add_signed(ttl))
    }
}
