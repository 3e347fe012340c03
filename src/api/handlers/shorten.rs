//! Handler for link shortening endpoint.

use axum::{Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link, or returns the existing one for the same URL.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com/a", "expiration_in_minutes": 60 }
/// ```
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// { "shortlink": "1", "short_url": "http://localhost:8000/1" }
/// ```
///
/// Re-submitting a URL inside its dedup window returns the same `shortlink`.
///
/// # Errors
///
/// - 400 if validation fails or the URL is not HTTP(S)
/// - 503 if the backend is unreachable
/// - 500 if only part of the records were written
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    payload.validate()?;

    let code = state
        .shortener
        .shorten(&payload.url, payload.expiration_in_minutes)
        .await?;

    tracing::info!(code = %code, "Short link issued");

    let short_url = state.short_url(code.as_str());
    Ok((
        StatusCode::CREATED,
        Json(ShortenResponse {
            shortlink: code.into_inner(),
            short_url,
        }),
    ))
}
