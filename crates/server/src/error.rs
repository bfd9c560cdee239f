//! API error responses.
//!
//! Procedures report business failures inside their `{ success, error }`
//! envelope; only input validation and framework-level problems reach this
//! type.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use jcn_dashboard_core::errors::CoreError;
use serde::{Deserialize, Serialize};

/// JSON error body.
///
/// ```json
/// { "code": "VALIDATION_ERROR", "message": "Validation failed: ..." }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Error code (e.g. "VALIDATION_ERROR", "UPSTREAM_ERROR")
    pub code: String,
    /// Human-readable message
    pub message: String,
}

impl ApiErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// Handler error: a [`CoreError`] rendered with the matching status code.
#[derive(Debug)]
pub struct ApiError(pub CoreError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            CoreError::Validation(_) => StatusCode::BAD_REQUEST,
            CoreError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            CoreError::Upstream { .. } | CoreError::Transport(_) | CoreError::Deserialization(_) => {
                StatusCode::BAD_GATEWAY
            }
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(e: CoreError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ApiErrorResponse::new(self.0.code(), self.0.to_string());
        (self.status(), Json(body)).into_response()
    }
}
