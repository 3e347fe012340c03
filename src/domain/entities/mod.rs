//! Core domain entities.
//!
//! - [`ShortCode`] - Canonical base62 identifier handed out to clients
//! - [`DetailRecord`] - Metadata stored beside each forward mapping

pub mod detail;
pub mod short_code;

pub use detail::DetailRecord;
pub use short_code::ShortCode;
