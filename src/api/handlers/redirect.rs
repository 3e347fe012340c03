//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::IntoResponse,
};
use serde_json::json;
use tracing::{debug, error};

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::base62::{self, MAX_CODE_LEN};

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{shortlink}` where `shortlink` matches `[a-zA-Z0-9]{1,11}`
///
/// Returns 307 Temporary Redirect so clients keep asking; a link may expire.
///
/// # Errors
///
/// Returns 404 Not Found for anything that is not an issued, live code,
/// including paths outside the code pattern. Returns 500 if the stored URL
/// cannot be sent as a `Location` header.
pub async fn redirect_handler(
    Path(shortlink): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    if shortlink.is_empty() || shortlink.len() > MAX_CODE_LEN || !base62::is_alphabet(&shortlink) {
        return Err(AppError::not_found(
            "Not found",
            json!({ "path": shortlink }),
        ));
    }

    let long_url = state.shortener.resolve(&shortlink).await?;

    let location = HeaderValue::try_from(long_url.as_str()).map_err(|e| {
        error!("Stored URL for {} is not a valid Location: {}", shortlink, e);
        AppError::internal("Stored URL cannot be redirected to", json!({ "code": shortlink }))
    })?;

    debug!("Redirect {} -> {}", shortlink, long_url);

    Ok((StatusCode::TEMPORARY_REDIRECT, [(header::LOCATION, location)]))
}
