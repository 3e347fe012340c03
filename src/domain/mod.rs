//! Domain layer: entities, the backend key layout and the engine's error type.
//!
//! # Architecture
//!
//! - [`entities`] - Short codes and detail records
//! - [`keys`] - How records are laid out in the shared backend
//! - [`error`] - [`ShortenerError`], the taxonomy every engine operation returns
//!
//! The domain layer has no dependency on HTTP. Engine components live in
//! [`crate::application::services`]; backends in [`crate::infrastructure::store`].

pub mod entities;
pub mod error;
pub mod keys;

pub use error::{ShortenerError, WriteStage};
