//! Pure helpers shared by the engine, the HTTP layer and the admin CLI.
//!
//! - [`base62`] - Sequence number <-> short code encoding
//! - [`fingerprint`] - URL digests for deduplication keys
//! - [`url_normalizer`] - URL normalization before fingerprinting

pub mod base62;
pub mod fingerprint;
pub mod url_normalizer;
