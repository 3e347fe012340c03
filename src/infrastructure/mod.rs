//! Infrastructure layer for external integrations.
//!
//! # Modules
//!
//! - [`store`] - The shared key-value backend (Redis and in-memory implementations)

pub mod store;
