//! Application layer: the shortening engine and its components.
//!
//! Services consume the [`crate::infrastructure::store::KeyValueStore`] trait and
//! expose the API the HTTP handlers and the admin CLI call.
//!
//! # Available Services
//!
//! - [`services::ShortenerService`] - `shorten`, `resolve` and `info`

pub mod services;
