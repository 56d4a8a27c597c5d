//! SubmitAnswerHandler - records one answer and reports what comes next.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::foundation::{InterviewError, SessionId};
use crate::domain::interview::{InterviewStep, Session};
use crate::ports::SessionStore;

/// Command to submit the answer for one question.
#[derive(Debug, Clone)]
pub struct SubmitAnswerCommand {
    pub session_id: SessionId,
    /// Zero-based question index; must be the next unanswered index.
    pub index: usize,
    /// Freeform answer text.
    pub text: String,
}

/// Result of a successful submission.
#[derive(Debug, Clone)]
pub struct SubmitAnswerResult {
    pub session: Session,
    /// The step after this answer: the next question or the profile signal.
    pub next: InterviewStep,
}

/// Handler for answer submission.
pub struct SubmitAnswerHandler {
    sessions: Arc<dyn SessionStore>,
}

impl SubmitAnswerHandler {
    pub fn new(sessions: Arc<dyn SessionStore>) -> Self {
        Self { sessions }
    }

    pub async fn handle(
        &self,
        cmd: SubmitAnswerCommand,
    ) -> Result<SubmitAnswerResult, InterviewError> {
        debug!(session_id = %cmd.session_id, index = cmd.index, "submitting answer");

        // The store performs the check-and-append atomically per session.
        let session = self
            .sessions
            .append_answer(&cmd.session_id, cmd.index, &cmd.text)
            .await?;

        let next = session.next_step();
        if session.is_complete() {
            info!(session_id = %cmd.session_id, "interview complete");
        }

        Ok(SubmitAnswerResult { session, next })
    }
}
