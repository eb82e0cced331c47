//! API error handling
//!
//! Injected stage faults surface as 503 responses naming the failed
//! stage; they are the point of the demo, not something to hide.

use application::ApplicationError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use domain::Stage;
use serde::Serialize;
use thiserror::Error;

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Stage {0} unavailable")]
    StageUnavailable(Stage),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
    /// The stage that failed, for injected faults
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stage: Option<Stage>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, stage) = match &self {
            Self::BadRequest(_) => (StatusCode::BAD_REQUEST, "bad_request", None),
            Self::NotFound(_) => (StatusCode::NOT_FOUND, "not_found", None),
            Self::StageUnavailable(stage) => (
                StatusCode::SERVICE_UNAVAILABLE,
                "stage_unavailable",
                Some(*stage),
            ),
            Self::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", None),
        };

        let body = ErrorResponse {
            error: self.to_string(),
            code: code.to_string(),
            stage,
        };

        (status, Json(body)).into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(err: ApplicationError) -> Self {
        match err {
            ApplicationError::Domain(e) => Self::BadRequest(e.to_string()),
            ApplicationError::StageFault { stage }
            | ApplicationError::DispatchFailed { stage, .. } => Self::StageUnavailable(stage),
            ApplicationError::Configuration(msg) | ApplicationError::Internal(msg) => {
                Self::Internal(msg)
            },
        }
    }
}
