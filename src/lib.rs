//! # Shortlink
//!
//! A URL shortener backed by a shared Redis instance. Every new URL draws a number
//! from one global counter and is published under its base62 encoding; a SHA-256
//! fingerprint of the normalized URL lets re-submissions reuse the existing code
//! until the records expire.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Short codes, detail records, key layout, errors
//! - **Application Layer** ([`application`]) - The shortening engine and its parts
//! - **Infrastructure Layer** ([`infrastructure`]) - Redis and in-memory backends
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Backend Keys
//!
//! | Key                               | Value            | TTL            |
//! |-----------------------------------|------------------|----------------|
//! | `next.url.id`                     | counter          | none           |
//! | `shortlink:<code>:url`            | original URL     | caller minutes |
//! | `urlhash:<fingerprint>:shortlink` | short code       | caller minutes |
//! | `shortlink:<code>:detail`         | JSON detail      | caller minutes |
//!
//! ## Quick Start
//!
//! ```bash
//! export REDIS_URL="redis://localhost:6379/0"
//! cargo run
//!
//! curl -X POST localhost:8000/api/shorten \
//!   -H 'content-type: application/json' \
//!   -d '{"url":"https://example.com/a","expiration_in_minutes":60}'
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
pub mod prelude {
    pub use crate::application::services::ShortenerService;
    pub use crate::domain::entities::{DetailRecord, ShortCode};
    pub use crate::domain::keys::Keyspace;
    pub use crate::domain::{ShortenerError, WriteStage};
    pub use crate::error::AppError;
    pub use crate::infrastructure::store::{KeyValueStore, MemoryStore, RedisStore, StoreError};
    pub use crate::state::AppState;
}
