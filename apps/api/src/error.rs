//! # API Error Types
//!
//! The single error type every handler returns, plus its mapping onto
//! HTTP status codes and the failure envelope.
//!
//! ## Status Mapping
//! ```text
//! ApiError::Validation   → 400 Bad Request
//! ApiError::NotFound     → 404 Not Found
//! ApiError::Unavailable  → 409 Conflict   (catalog entity exists, flagged off)
//! ApiError::Conflict     → 409 Conflict   (unique/foreign key violations)
//! ApiError::Internal     → 500 Internal Server Error
//! ```
//!
//! Every error that reaches a handler boundary produces exactly one
//! enveloped response; nothing is swallowed. Internal errors are logged
//! with full detail and the client sees only a generic message.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tracing::error;

use pizzeria_core::{CoreError, ValidationError};
use pizzeria_db::DbError;

/// API request errors.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Request input failed validation.
    #[error("{0}")]
    Validation(String),

    /// The referenced entity does not exist (or is soft-deleted).
    #[error("{0}")]
    NotFound(String),

    /// The referenced catalog entity exists but is not orderable.
    #[error("{0}")]
    Unavailable(String),

    /// The request conflicts with existing data.
    #[error("{0}")]
    Conflict(String),

    /// Unexpected server-side failure. The message is logged, not returned.
    #[error("Internal server error")]
    Internal(String),
}

impl ApiError {
    /// Short error kind for the envelope's optional `error` field.
    fn kind(&self) -> &'static str {
        match self {
            ApiError::Validation(_) => "ValidationError",
            ApiError::NotFound(_) => "NotFoundError",
            ApiError::Unavailable(_) => "UnavailableError",
            ApiError::Conflict(_) => "ConflictError",
            ApiError::Internal(_) => "InternalError",
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Unavailable(_) => StatusCode::CONFLICT,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The client-facing message. Internal details never leak.
    fn public_message(&self) -> String {
        match self {
            ApiError::Internal(_) => "Internal server error".to_string(),
            other => other.to_string(),
        }
    }
}

/// The failure envelope body.
#[derive(Debug, Serialize)]
struct ErrorBody {
    success: bool,
    message: String,
    error: &'static str,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Internal(ref detail) = self {
            error!(detail = %detail, "Request failed with internal error");
        }

        let body = ErrorBody {
            success: false,
            message: self.public_message(),
            error: self.kind(),
        };

        (self.status(), Json(body)).into_response()
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::Validation(err.to_string())
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::BaseUnavailable
            | CoreError::SizeUnavailable
            | CoreError::ToppingsUnavailable { .. } => ApiError::Unavailable(err.to_string()),
            CoreError::ToppingsNotFound => ApiError::NotFound(err.to_string()),
            CoreError::Validation(inner) => inner.into(),
        }
    }
}

impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::NotFound { .. } => ApiError::NotFound(err.to_string()),
            DbError::UniqueViolation { .. } | DbError::ForeignKeyViolation { .. } => {
                ApiError::Conflict(err.to_string())
            }
            other => ApiError::Internal(other.to_string()),
        }
    }
}

/// Result type for API operations.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError::Validation("x".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::NotFound("x".into()).status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::Unavailable("x".into()).status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ApiError::Internal("boom".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_internal_detail_never_leaks() {
        let err = ApiError::Internal("connection string with secrets".into());
        assert_eq!(err.public_message(), "Internal server error");
    }

    #[test]
    fn test_core_error_conversion() {
        let err: ApiError = CoreError::BaseUnavailable.into();
        assert!(matches!(err, ApiError::Unavailable(_)));

        let err: ApiError = CoreError::ToppingsNotFound.into();
        assert!(matches!(err, ApiError::NotFound(_)));
    }

    #[test]
    fn test_db_error_conversion() {
        let err: ApiError = DbError::not_found("Order", "abc").into();
        assert!(matches!(err, ApiError::NotFound(_)));

        let err: ApiError = DbError::UniqueViolation {
            field: "toppings.name".into(),
        }
        .into();
        assert!(matches!(err, ApiError::Conflict(_)));
    }
}
