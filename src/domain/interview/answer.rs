//! Answer value object.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Timestamp;

/// One recorded answer, bound to the question it responds to.
///
/// Answer text is freeform; the core performs no content validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    /// Zero-based index of the question this answers.
    question_index: usize,
    /// Verbatim answer text.
    text: String,
    /// When the answer was recorded.
    answered_at: Timestamp,
}

impl Answer {
    /// Creates a new answer recorded now.
    pub fn new(question_index: usize, text: impl Into<String>) -> Self {
        Self {
            question_index,
            text: text.into(),
            answered_at: Timestamp::now(),
        }
    }

    /// Reconstitutes an answer from persistence.
    pub fn reconstitute(question_index: usize, text: String, answered_at: Timestamp) -> Self {
        Self {
            question_index,
            text,
            answered_at,
        }
    }

    /// Returns the question index.
    pub fn question_index(&self) -> usize {
        self.question_index
    }

    /// Returns the answer text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns when the answer was recorded.
    pub fn answered_at(&self) -> &Timestamp {
        &self.answered_at
    }
}
