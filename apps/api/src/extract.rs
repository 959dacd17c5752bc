//! JSON extraction with enveloped rejections.
//!
//! axum's stock `Json` extractor rejects malformed bodies with a bare
//! plain-text response, which would be the one place the failure envelope
//! doesn't apply. This wrapper converts every rejection into an
//! [`ApiError::Validation`], so deserialization failures go through the
//! same 400 + envelope path as every other bad request.

use axum::async_trait;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::Json;

use crate::error::ApiError;

/// `Json` with failures mapped into the standard error envelope.
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ApiJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::Validation(rejection.body_text()))?;

        Ok(ApiJson(value))
    }
}
