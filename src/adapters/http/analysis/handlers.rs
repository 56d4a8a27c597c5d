//! HTTP handlers for analysis endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{
    interview_error_response, invalid_session_id_response, ErrorResponse,
};
use crate::application::handlers::{
    GetAnalysisHandler, GetAnalysisQuery, RequestAnalysisCommand, RequestAnalysisHandler,
};
use crate::domain::foundation::SessionId;

use super::dto::AnalysisResponse;

/// Handler state for the analysis resource.
#[derive(Clone)]
pub struct AnalysisHandlers {
    request_handler: Arc<RequestAnalysisHandler>,
    get_handler: Arc<GetAnalysisHandler>,
}

impl AnalysisHandlers {
    pub fn new(
        request_handler: Arc<RequestAnalysisHandler>,
        get_handler: Arc<GetAnalysisHandler>,
    ) -> Self {
        Self {
            request_handler,
            get_handler,
        }
    }
}

fn parse_session_id(raw: &str) -> Result<SessionId, Response> {
    raw.parse::<SessionId>()
        .map_err(|_| invalid_session_id_response())
}

/// POST /api/interviews/:id/analysis - Generate (or fetch) the report
pub async fn request_analysis(
    State(handlers): State<AnalysisHandlers>,
    Path(session_id): Path<String>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers
        .request_handler
        .handle(RequestAnalysisCommand { session_id })
        .await
    {
        Ok(result) => {
            let response = AnalysisResponse::from_report(&result.report, result.cached);
            let status = if result.cached {
                StatusCode::OK
            } else {
                StatusCode::CREATED
            };
            (status, Json(response)).into_response()
        }
        Err(e) => interview_error_response(e),
    }
}

/// GET /api/interviews/:id/analysis - Fetch a previously generated report
pub async fn get_analysis(
    State(handlers): State<AnalysisHandlers>,
    Path(session_id): Path<String>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers
        .get_handler
        .handle(GetAnalysisQuery { session_id })
        .await
    {
        Ok(Some(report)) => {
            let response = AnalysisResponse::from_report(&report, true);
            (StatusCode::OK, Json(response)).into_response()
        }
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::new(
                "REPORT_NOT_FOUND",
                format!("No analysis has been generated for session {}", session_id),
            )),
        )
            .into_response(),
        Err(e) => interview_error_response(e),
    }
}
