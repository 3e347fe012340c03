//! API route configuration.

use crate::api::handlers::{info_handler, shorten_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// JSON API routes, mounted under `/api`.
///
/// # Endpoints
///
/// - `POST /shorten` - Create (or reuse) a short link
/// - `GET  /info`    - Detail record for `?shortlink={code}`
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/info", get(info_handler))
}
