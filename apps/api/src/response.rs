//! # Response Envelope
//!
//! Every endpoint wraps its payload in the same JSON envelope:
//!
//! ```text
//! Success: { "success": true,  "message": "...", "data": <payload> }
//! Failure: { "success": false, "message": "..." }
//! ```
//!
//! Failure envelopes are produced by the error type; this module only
//! builds the success side.

use serde::Serialize;

/// The success envelope returned by every endpoint.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Builds a success envelope with a payload.
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        ApiResponse {
            success: true,
            message: message.into(),
            data: Some(data),
        }
    }
}

impl<T: Serialize> ApiResponse<T> {
    /// Builds a failure envelope that still carries a payload.
    ///
    /// Errors normally flow through `ApiError`; this exists for the health
    /// endpoint, which reports a degraded state with diagnostic data.
    pub fn fail(message: impl Into<String>, data: T) -> Self {
        ApiResponse {
            success: false,
            message: message.into(),
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    /// Builds a success envelope without a payload.
    pub fn ok_empty(message: impl Into<String>) -> Self {
        ApiResponse {
            success: true,
            message: message.into(),
            data: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope_shape() {
        let envelope = ApiResponse::ok("Orders retrieved successfully", vec![1, 2]);
        let json = serde_json::to_value(&envelope).unwrap();

        assert_eq!(json["success"], true);
        assert_eq!(json["message"], "Orders retrieved successfully");
        assert_eq!(json["data"], serde_json::json!([1, 2]));
    }

    #[test]
    fn test_empty_envelope_omits_data() {
        let envelope = ApiResponse::ok_empty("Order deleted successfully");
        let json = serde_json::to_value(&envelope).unwrap();

        assert!(json.get("data").is_none());
    }
}
