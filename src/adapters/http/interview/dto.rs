//! HTTP DTOs for interview endpoints.
//!
//! These types decouple the HTTP API from domain types.

use serde::{Deserialize, Serialize};

use crate::domain::interview::{
    question_for_index, Answer, InterviewStatus, InterviewStep, Question, Session,
};
use crate::ports::{SessionPage, SessionSummary};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to start a new interview.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StartInterviewRequest {
    #[serde(default)]
    pub stack_description: Option<String>,
}

/// Request to submit one answer.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitAnswerRequest {
    pub index: usize,
    pub text: String,
}

/// Query parameters for the history listing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListHistoryParams {
    #[serde(default)]
    pub limit: Option<u32>,
    #[serde(default)]
    pub offset: Option<u32>,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// A question as shown to the client.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionResponse {
    pub index: usize,
    pub slot: String,
    pub text: &'static str,
}

impl From<&'static Question> for QuestionResponse {
    fn from(question: &'static Question) -> Self {
        Self {
            index: question.index,
            slot: question.slot.to_string(),
            text: question.text,
        }
    }
}

/// What the interview asks for next.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NextStepResponse {
    Question { question: QuestionResponse },
    ProfileReady,
}

impl From<InterviewStep> for NextStepResponse {
    fn from(step: InterviewStep) -> Self {
        match step {
            InterviewStep::Ask(question) => NextStepResponse::Question {
                question: question.into(),
            },
            InterviewStep::ProfileReady => NextStepResponse::ProfileReady,
        }
    }
}

/// Response after starting an interview.
#[derive(Debug, Clone, Serialize)]
pub struct StartInterviewResponse {
    pub session_id: String,
    pub question: QuestionResponse,
}

/// Response after submitting an answer.
#[derive(Debug, Clone, Serialize)]
pub struct SubmitAnswerResponse {
    pub session_id: String,
    pub status: InterviewStatus,
    pub next: NextStepResponse,
}

/// One answer with its question text.
#[derive(Debug, Clone, Serialize)]
pub struct AnswerResponse {
    pub question_index: usize,
    pub question: Option<&'static str>,
    pub text: String,
    pub answered_at: String,
}

impl From<&Answer> for AnswerResponse {
    fn from(answer: &Answer) -> Self {
        Self {
            question_index: answer.question_index(),
            question: question_for_index(answer.question_index()).map(|q| q.text),
            text: answer.text().to_string(),
            answered_at: answer.answered_at().to_rfc3339(),
        }
    }
}

/// Full session transcript.
#[derive(Debug, Clone, Serialize)]
pub struct SessionResponse {
    pub id: String,
    pub status: InterviewStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack_description: Option<String>,
    pub answers: Vec<AnswerResponse>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&Session> for SessionResponse {
    fn from(session: &Session) -> Self {
        Self {
            id: session.id().to_string(),
            status: session.status(),
            stack_description: session.stack_description().map(str::to_string),
            answers: session.answers().iter().map(Into::into).collect(),
            created_at: session.created_at().to_rfc3339(),
            updated_at: session.updated_at().to_rfc3339(),
        }
    }
}

/// Session summary for list responses.
#[derive(Debug, Clone, Serialize)]
pub struct SessionSummaryResponse {
    pub id: String,
    pub status: InterviewStatus,
    pub answer_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack_description: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<SessionSummary> for SessionSummaryResponse {
    fn from(summary: SessionSummary) -> Self {
        Self {
            id: summary.id.to_string(),
            status: summary.status,
            answer_count: summary.answer_count,
            stack_description: summary.stack_description,
            created_at: summary.created_at.to_rfc3339(),
            updated_at: summary.updated_at.to_rfc3339(),
        }
    }
}

/// Paginated history listing.
#[derive(Debug, Clone, Serialize)]
pub struct SessionListResponse {
    pub items: Vec<SessionSummaryResponse>,
    pub total: u64,
}

impl From<SessionPage> for SessionListResponse {
    fn from(page: SessionPage) -> Self {
        Self {
            items: page.items.into_iter().map(Into::into).collect(),
            total: page.total,
        }
    }
}
