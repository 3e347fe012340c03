//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /{shortlink}` - Short link redirect
//! - `GET  /health`      - Backend health check
//! - `/api/*`            - JSON API (shorten, info)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Panic recovery** - Panics become JSON 500 responses
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler};
use crate::api::middleware::{recover, tracing};
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(app_routes(state))
}

/// Routes and middleware without path normalization.
pub fn app_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/{shortlink}", get(redirect_handler))
        .nest("/api", api::routes::api_routes())
        .with_state(state)
        .layer(recover::layer())
        .layer(tracing::layer())
}
