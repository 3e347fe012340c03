//! Engine components and their orchestration.
//!
//! - [`SequenceAllocator`] - Unique sequence numbers from the backend counter
//! - [`DedupIndex`] - URL fingerprint -> existing short code
//! - [`ShortlinkRegistry`] - Short code -> original URL
//! - [`DetailStore`] - Short code -> [`crate::domain::entities::DetailRecord`]
//! - [`ShortenerService`] - `shorten`, `resolve` and `info` over the four above

pub mod dedup_index;
pub mod detail_store;
pub mod sequence_allocator;
pub mod shortener_service;
pub mod shortlink_registry;

pub use dedup_index::DedupIndex;
pub use detail_store::DetailStore;
pub use sequence_allocator::SequenceAllocator;
pub use shortener_service::ShortenerService;
pub use shortlink_registry::ShortlinkRegistry;
