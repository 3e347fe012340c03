//! HTTP-facing error type.
//!
//! Handlers return [`AppError`], which renders as
//! `{"error": {"code", "message", "details"}}` with a matching status code.
//! Engine errors convert through `From<ShortenerError>`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use validator::ValidationErrors;

use crate::domain::ShortenerError;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Error payload included in every error response.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug)]
pub enum AppError {
    Validation { message: String, details: Value },
    NotFound { message: String, details: Value },
    Unavailable { message: String, details: Value },
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn unavailable(message: impl Into<String>, details: Value) -> Self {
        Self::Unavailable {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Unavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Converts into the serializable payload, consuming the error.
    pub fn to_error_info(self) -> ErrorInfo {
        let (code, message, details) = match self {
            AppError::Validation { message, details } => ("validation_error", message, details),
            AppError::NotFound { message, details } => ("not_found", message, details),
            AppError::Unavailable { message, details } => {
                ("backend_unavailable", message, details)
            }
            AppError::Internal { message, details } => ("internal_error", message, details),
        };

        ErrorInfo {
            code,
            message,
            details,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let details = serde_json::to_value(&errors).unwrap_or_else(|_| json!({}));
        AppError::bad_request("Request validation failed", details)
    }
}

impl From<ShortenerError> for AppError {
    fn from(err: ShortenerError) -> Self {
        match err {
            ShortenerError::NotFound(message) => AppError::not_found(message, json!({})),
            ShortenerError::InvalidCode { code, reason } => AppError::bad_request(
                "Invalid short code",
                json!({ "code": code, "reason": reason.to_string() }),
            ),
            ShortenerError::InvalidUrl(reason) => AppError::bad_request(
                "Invalid URL format",
                json!({ "reason": reason.to_string() }),
            ),
            ShortenerError::InvalidExpiration(minutes) => AppError::bad_request(
                "Invalid expiration",
                json!({ "expiration_in_minutes": minutes }),
            ),
            ShortenerError::BackendUnavailable(e) => {
                tracing::error!("Backend unavailable: {}", e);
                AppError::unavailable("Storage backend unavailable", json!({}))
            }
            ShortenerError::PartialWrite {
                code,
                stage,
                source,
            } => {
                tracing::error!("Partial write for {} at {} stage: {}", code, stage, source);
                AppError::internal(
                    "Short link was only partially stored; retry the request",
                    json!({ "stage": stage.to_string() }),
                )
            }
            ShortenerError::CorruptRecord { code, source } => {
                tracing::error!("Corrupt detail record for {}: {}", code, source);
                AppError::internal("Stored record is corrupt", json!({ "code": code }))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::WriteStage;
    use crate::infrastructure::store::StoreError;
    use crate::utils::base62::DecodeError;

    #[test]
    fn test_not_found_maps_to_404() {
        let err: AppError = ShortenerError::NotFound("unknown short code".to_string()).into();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);

        let info = err.to_error_info();
        assert_eq!(info.code, "not_found");
        assert_eq!(info.message, "unknown short code");
    }

    #[test]
    fn test_invalid_code_maps_to_400() {
        let err: AppError = ShortenerError::InvalidCode {
            code: "a-b".to_string(),
            reason: DecodeError::InvalidCharacter {
                character: '-',
                position: 1,
            },
        }
        .into();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_backend_failures_map_to_5xx() {
        let err: AppError =
            ShortenerError::BackendUnavailable(StoreError::Timeout(std::time::Duration::from_secs(1)))
                .into();
        assert_eq!(err.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(err.to_error_info().code, "backend_unavailable");

        let err: AppError = ShortenerError::PartialWrite {
            code: "1".to_string(),
            stage: WriteStage::Detail,
            source: StoreError::OperationError("boom".to_string()),
        }
        .into();
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_error_info().details["stage"], "detail");
    }
}
