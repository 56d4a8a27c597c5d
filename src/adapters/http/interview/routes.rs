//! HTTP routes for interview endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    get_session, list_history, next_question, start_interview, submit_answer, InterviewHandlers,
};

/// Creates the interview router with all endpoints.
pub fn interview_routes(handlers: InterviewHandlers) -> Router {
    Router::new()
        .route("/", post(start_interview))
        .route("/", get(list_history))
        .route("/:id", get(get_session))
        .route("/:id/next-question", get(next_question))
        .route("/:id/answers", post(submit_answer))
        .with_state(handlers)
}
