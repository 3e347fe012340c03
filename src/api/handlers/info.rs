//! Handler for short link inspection.

use axum::{
    Json,
    extract::{Query, State},
};

use crate::api::dto::info::{InfoQuery, InfoResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Returns the detail record of a short link without redirecting.
///
/// # Endpoint
///
/// `GET /api/info?shortlink={code}`
///
/// # Response
///
/// ```json
/// {
///   "url": "https://example.com/a",
///   "created_at": "2024-05-01T12:00:00Z",
///   "expiration_in_minutes": 60,
///   "expires_at": "2024-05-01T13:00:00Z"
/// }
/// ```
///
/// # Errors
///
/// - 400 if `shortlink` is not a valid code
/// - 404 if the code is unknown or expired
pub async fn info_handler(
    State(state): State<AppState>,
    Query(query): Query<InfoQuery>,
) -> Result<Json<InfoResponse>, AppError> {
    let record = state.shortener.info(&query.shortlink).await?;
    Ok(Json(record.into()))
}
