//! REST API layer for HTTP request/response handling.
//!
//! A thin adapter over [`crate::application::services::ShortenerService`]: it
//! validates input, calls the engine and maps [`crate::domain::ShortenerError`]
//! to HTTP responses through [`crate::error::AppError`].
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects for request/response serialization
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request logging and panic recovery
//! - [`routes`] - Route configuration and composition

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
