//! DTOs for the shorten endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::application::services::shortener_service::MAX_EXPIRATION_MINUTES;

/// Request to shorten a single URL.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The original URL to shorten (must be valid HTTP/HTTPS).
    #[validate(url(message = "Invalid URL format"))]
    pub url: String,

    /// Lifetime of the short link and its dedup window, in minutes.
    ///
    /// Passed to the backend as-is; `0` stores the records without expiry.
    #[validate(range(min = 0, max = MAX_EXPIRATION_MINUTES))]
    #[serde(default)]
    pub expiration_in_minutes: i64,
}

/// Response for a created (or reused) short link.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub shortlink: String,
    pub short_url: String,
}
