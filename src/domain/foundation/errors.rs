//! Error taxonomy for the interview workflow.
//!
//! Every failure the core can produce maps to exactly one variant here, and
//! each variant carries enough context for a distinct, human-readable message.
//! No layer below the transport retries or swallows these.

use thiserror::Error;

use super::SessionId;
use crate::domain::interview::QUESTION_COUNT;

/// Errors surfaced by the interview state machine, stores, and orchestrator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InterviewError {
    /// Referenced session does not exist.
    #[error("session not found: {0}")]
    NotFound(SessionId),

    /// Submitted answer index does not equal the current answer count.
    #[error("answer out of order: submitted index {submitted}, expected {expected}")]
    OutOfOrderAnswer { submitted: usize, expected: usize },

    /// The interview already has all five answers.
    #[error("interview is already complete; no further answers are accepted")]
    AlreadyComplete,

    /// Profile extraction or analysis requested before all answers are in.
    #[error("interview is not complete: {answered} of {required} answers recorded")]
    NotYetComplete { answered: usize, required: usize },

    /// The external report generator failed or returned unusable content.
    #[error("report generation failed: {0}")]
    GenerationFailure(String),

    /// The persistence backend failed.
    #[error("storage error: {0}")]
    Storage(String),
}

impl InterviewError {
    /// Builds a `NotYetComplete` error for a session with `answered` answers.
    pub fn not_yet_complete(answered: usize) -> Self {
        InterviewError::NotYetComplete {
            answered,
            required: QUESTION_COUNT,
        }
    }

    /// Builds a `Storage` error from any displayable cause.
    pub fn storage(cause: impl std::fmt::Display) -> Self {
        InterviewError::Storage(cause.to_string())
    }

    /// Builds a `GenerationFailure` error from any displayable cause.
    pub fn generation(cause: impl std::fmt::Display) -> Self {
        InterviewError::GenerationFailure(cause.to_string())
    }

    /// Stable machine-readable code for wire protocols and logs.
    pub fn code(&self) -> &'static str {
        match self {
            InterviewError::NotFound(_) => "SESSION_NOT_FOUND",
            InterviewError::OutOfOrderAnswer { .. } => "OUT_OF_ORDER_ANSWER",
            InterviewError::AlreadyComplete => "ALREADY_COMPLETE",
            InterviewError::NotYetComplete { .. } => "NOT_YET_COMPLETE",
            InterviewError::GenerationFailure(_) => "GENERATION_FAILURE",
            InterviewError::Storage(_) => "STORAGE_ERROR",
        }
    }
}
