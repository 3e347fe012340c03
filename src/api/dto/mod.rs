//! Data Transfer Objects for API requests and responses.
//!
//! Request DTOs derive `validator::Validate`; responses are plain Serde structs.

pub mod health;
pub mod info;
pub mod shorten;
