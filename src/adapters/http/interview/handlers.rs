//! HTTP handlers for interview endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{interview_error_response, invalid_session_id_response};
use crate::application::handlers::{
    GetSessionHandler, GetSessionQuery, ListHistoryHandler, ListHistoryQuery, NextQuestionHandler,
    NextQuestionQuery, StartInterviewCommand, StartInterviewHandler, SubmitAnswerCommand,
    SubmitAnswerHandler,
};
use crate::domain::foundation::SessionId;

use super::dto::{
    ListHistoryParams, NextStepResponse, SessionListResponse, SessionResponse,
    StartInterviewRequest, StartInterviewResponse, SubmitAnswerRequest, SubmitAnswerResponse,
};

/// Handler state for the interview resource.
#[derive(Clone)]
pub struct InterviewHandlers {
    start_handler: Arc<StartInterviewHandler>,
    submit_handler: Arc<SubmitAnswerHandler>,
    next_handler: Arc<NextQuestionHandler>,
    get_handler: Arc<GetSessionHandler>,
    list_handler: Arc<ListHistoryHandler>,
}

impl InterviewHandlers {
    pub fn new(
        start_handler: Arc<StartInterviewHandler>,
        submit_handler: Arc<SubmitAnswerHandler>,
        next_handler: Arc<NextQuestionHandler>,
        get_handler: Arc<GetSessionHandler>,
        list_handler: Arc<ListHistoryHandler>,
    ) -> Self {
        Self {
            start_handler,
            submit_handler,
            next_handler,
            get_handler,
            list_handler,
        }
    }
}

fn parse_session_id(raw: &str) -> Result<SessionId, Response> {
    raw.parse::<SessionId>()
        .map_err(|_| invalid_session_id_response())
}

/// POST /api/interviews - Start a new interview
pub async fn start_interview(
    State(handlers): State<InterviewHandlers>,
    Json(req): Json<StartInterviewRequest>,
) -> Response {
    let cmd = StartInterviewCommand {
        stack_description: req.stack_description,
    };

    match handlers.start_handler.handle(cmd).await {
        Ok(result) => {
            let response = StartInterviewResponse {
                session_id: result.session.id().to_string(),
                question: result.first_question.into(),
            };
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => interview_error_response(e),
    }
}

/// POST /api/interviews/:id/answers - Submit the next answer
pub async fn submit_answer(
    State(handlers): State<InterviewHandlers>,
    Path(session_id): Path<String>,
    Json(req): Json<SubmitAnswerRequest>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = SubmitAnswerCommand {
        session_id,
        index: req.index,
        text: req.text,
    };

    match handlers.submit_handler.handle(cmd).await {
        Ok(result) => {
            let response = SubmitAnswerResponse {
                session_id: session_id.to_string(),
                status: result.session.status(),
                next: result.next.into(),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => interview_error_response(e),
    }
}

/// GET /api/interviews/:id/next-question - What the interview asks next
pub async fn next_question(
    State(handlers): State<InterviewHandlers>,
    Path(session_id): Path<String>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers.next_handler.handle(NextQuestionQuery { session_id }).await {
        Ok(step) => {
            let response: NextStepResponse = step.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => interview_error_response(e),
    }
}

/// GET /api/interviews/:id - Full session transcript
pub async fn get_session(
    State(handlers): State<InterviewHandlers>,
    Path(session_id): Path<String>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers.get_handler.handle(GetSessionQuery { session_id }).await {
        Ok(session) => {
            let response = SessionResponse::from(&session);
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => interview_error_response(e),
    }
}

/// GET /api/interviews - History listing, newest first
pub async fn list_history(
    State(handlers): State<InterviewHandlers>,
    Query(params): Query<ListHistoryParams>,
) -> Response {
    let query = ListHistoryQuery {
        limit: params.limit,
        offset: params.offset,
    };

    match handlers.list_handler.handle(query).await {
        Ok(page) => {
            let response: SessionListResponse = page.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => interview_error_response(e),
    }
}
