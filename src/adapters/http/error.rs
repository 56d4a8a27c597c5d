//! Error-to-response mapping shared by all HTTP resources.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::domain::foundation::InterviewError;

/// Standard error response body.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new("BAD_REQUEST", message)
    }
}

/// Maps each error kind onto a distinct status code with its message intact.
pub fn interview_error_response(error: InterviewError) -> Response {
    let status = match &error {
        InterviewError::NotFound(_) => StatusCode::NOT_FOUND,
        InterviewError::OutOfOrderAnswer { .. } => StatusCode::CONFLICT,
        InterviewError::AlreadyComplete => StatusCode::CONFLICT,
        InterviewError::NotYetComplete { .. } => StatusCode::CONFLICT,
        InterviewError::GenerationFailure(_) => StatusCode::BAD_GATEWAY,
        InterviewError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    let body = ErrorResponse::new(error.code(), error.to_string());
    (status, Json(body)).into_response()
}

/// 400 response for malformed path parameters.
pub fn invalid_session_id_response() -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse::bad_request("Invalid session ID")),
    )
        .into_response()
}
