//! Session aggregate entity.
//!
//! A session is one interview instance: an append-only sequence of answers
//! to the fixed question catalog.
//!
//! # Invariants
//!
//! - `answers` never holds more than [`QUESTION_COUNT`] entries
//! - the Nth answer always has question index N-1 (no gaps, no reordering)
//! - status is derived: complete exactly when all five answers are recorded

use serde::{Deserialize, Serialize};

use super::answer::Answer;
use super::questions::{question_for_index, QUESTION_COUNT};
use super::state::{InterviewStatus, InterviewStep};
use crate::domain::foundation::{InterviewError, SessionId, Timestamp};

/// Session aggregate - one interview instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Unique identifier for this session.
    id: SessionId,

    /// Freeform stack description captured when the interview started.
    stack_description: Option<String>,

    /// Recorded answers, insertion-ordered and append-only.
    answers: Vec<Answer>,

    /// When the session was created.
    created_at: Timestamp,

    /// When the session last changed.
    updated_at: Timestamp,
}

impl Session {
    /// Creates a new empty session.
    pub fn new(id: SessionId) -> Self {
        let now = Timestamp::now();
        Self {
            id,
            stack_description: None,
            answers: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Sets the initial stack description (builder form, used at creation).
    pub fn with_stack_description(mut self, description: impl Into<String>) -> Self {
        let description = description.into();
        if !description.trim().is_empty() {
            self.stack_description = Some(description);
        }
        self
    }

    /// Reconstitutes a session from persistence (no validation, no clock reads).
    pub fn reconstitute(
        id: SessionId,
        stack_description: Option<String>,
        answers: Vec<Answer>,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            stack_description,
            answers,
            created_at,
            updated_at,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the session ID.
    pub fn id(&self) -> &SessionId {
        &self.id
    }

    /// Returns the stack description given at interview start, if any.
    pub fn stack_description(&self) -> Option<&str> {
        self.stack_description.as_deref()
    }

    /// Returns the recorded answers in question order.
    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }

    /// Returns the number of recorded answers.
    pub fn answer_count(&self) -> usize {
        self.answers.len()
    }

    /// Returns the derived lifecycle status.
    pub fn status(&self) -> InterviewStatus {
        InterviewStatus::from_answer_count(self.answers.len())
    }

    /// Returns true iff all five answers are recorded.
    pub fn is_complete(&self) -> bool {
        self.answers.len() == QUESTION_COUNT
    }

    /// Returns when the session was created.
    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    /// Returns when the session last changed.
    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    // ─────────────────────────────────────────────────────────────────────────
    // State machine
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns what the interview asks for next.
    ///
    /// A pure lookup on the answer count: the catalog question at the next
    /// index while answers remain, the profile-ready signal afterwards.
    /// Idempotent; repeated calls without a new answer return the same step.
    pub fn next_step(&self) -> InterviewStep {
        match question_for_index(self.answers.len()) {
            Some(question) => InterviewStep::Ask(question),
            None => InterviewStep::ProfileReady,
        }
    }

    /// Records the answer for question `index`.
    ///
    /// The index must equal the current answer count exactly; anything else
    /// is rejected rather than reinterpreted. Answer text is freeform.
    ///
    /// # Errors
    ///
    /// - `AlreadyComplete` if all five answers are already recorded
    /// - `OutOfOrderAnswer` if `index` is not the next expected index
    pub fn submit_answer(
        &mut self,
        index: usize,
        text: impl Into<String>,
    ) -> Result<InterviewStep, InterviewError> {
        if self.is_complete() {
            return Err(InterviewError::AlreadyComplete);
        }

        let expected = self.answers.len();
        if index != expected {
            return Err(InterviewError::OutOfOrderAnswer {
                submitted: index,
                expected,
            });
        }

        self.answers.push(Answer::new(index, text));
        self.updated_at = Timestamp::now();
        Ok(self.next_step())
    }
}
