//! # HTTP Handlers
//!
//! One module per resource, plus the cross-cutting health and fallback
//! handlers.

pub mod order;
pub mod pizza;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::ApiError;
use crate::response::ApiResponse;
use crate::state::AppState;

/// Health check payload.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthStatus {
    pub status: &'static str,
    pub database: &'static str,
    pub timestamp: DateTime<Utc>,
}

/// `GET /health`
///
/// Reports 200 with database connectivity included; a dead pool reports
/// 503 in a failure envelope so load balancers can rotate the instance
/// out.
pub async fn health(
    State(state): State<AppState>,
) -> (StatusCode, Json<ApiResponse<HealthStatus>>) {
    let db_ok = state.db.health_check().await;

    if db_ok {
        let payload = HealthStatus {
            status: "ok",
            database: "up",
            timestamp: Utc::now(),
        };
        (StatusCode::OK, Json(ApiResponse::ok("Health check", payload)))
    } else {
        let payload = HealthStatus {
            status: "degraded",
            database: "down",
            timestamp: Utc::now(),
        };
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ApiResponse::fail("Database unreachable", payload)),
        )
    }
}

/// Fallback for unknown routes: the standard 404 failure envelope
/// instead of axum's bare default.
pub async fn not_found() -> Response {
    ApiError::NotFound("Route not found".to_string()).into_response()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pizzeria_db::{Database, DbConfig};

    #[tokio::test]
    async fn test_health_ok() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let state = AppState::new(db);

        let (code, Json(envelope)) = health(State(state)).await;

        assert_eq!(code, StatusCode::OK);
        assert!(envelope.success);
        assert_eq!(envelope.data.unwrap().database, "up");
    }

    #[tokio::test]
    async fn test_health_degraded_uses_failure_envelope() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        db.pool().close().await;
        let state = AppState::new(db);

        let (code, Json(envelope)) = health(State(state)).await;

        assert_eq!(code, StatusCode::SERVICE_UNAVAILABLE);
        assert!(!envelope.success);
        assert_eq!(envelope.data.unwrap().database, "down");
    }

    #[tokio::test]
    async fn test_not_found_matches_standard_error_shape() {
        let response = not_found().await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = axum::body::to_bytes(response.into_body(), 1024)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "Route not found");
        assert_eq!(json["error"], "NotFoundError");
    }
}
