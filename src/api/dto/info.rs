//! DTOs for the info endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::DetailRecord;

/// Query string of `GET /api/info`.
#[derive(Debug, Deserialize)]
pub struct InfoQuery {
    pub shortlink: String,
}

/// Detail record as returned to clients.
#[derive(Debug, Serialize)]
pub struct InfoResponse {
    pub url: String,
    pub created_at: DateTime<Utc>,
    pub expiration_in_minutes: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
}

impl From<DetailRecord> for InfoResponse {
    fn from(record: DetailRecord) -> Self {
        Self {
            expires_at: record.expires_at(),
            url: record.url,
            created_at: record.created_at,
            expiration_in_minutes: record.expiration_in_minutes,
        }
    }
}
