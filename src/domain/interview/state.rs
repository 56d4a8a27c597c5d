//! Derived interview state.
//!
//! There is no stored status field anywhere in the system. Both types in
//! this module are computed from the answer count alone, which keeps the
//! stored record and the state machine incapable of drifting apart.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::questions::{Question, QUESTION_COUNT};

/// Lifecycle status of an interview session, derived from the answer count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterviewStatus {
    InProgress,
    Complete,
}

impl InterviewStatus {
    /// Derives the status from a recorded answer count.
    pub fn from_answer_count(count: usize) -> Self {
        if count >= QUESTION_COUNT {
            InterviewStatus::Complete
        } else {
            InterviewStatus::InProgress
        }
    }

    /// Returns true if further answers are accepted.
    pub fn accepts_answers(&self) -> bool {
        matches!(self, InterviewStatus::InProgress)
    }
}

impl fmt::Display for InterviewStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            InterviewStatus::InProgress => "in_progress",
            InterviewStatus::Complete => "complete",
        };
        write!(f, "{}", s)
    }
}

/// What the interview asks for next.
///
/// Returned by [`super::Session::next_step`]: either the fixed question for
/// the current index, or the signal that all answers are in and the profile
/// can be produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InterviewStep {
    /// Ask the contained question next.
    Ask(&'static Question),
    /// All five answers recorded; proceed to profile extraction.
    ProfileReady,
}

impl InterviewStep {
    /// Returns the question if this step asks one.
    pub fn question(&self) -> Option<&'static Question> {
        match self {
            InterviewStep::Ask(question) => Some(question),
            InterviewStep::ProfileReady => None,
        }
    }

    /// Returns true if the interview has finished asking.
    pub fn is_profile_ready(&self) -> bool {
        matches!(self, InterviewStep::ProfileReady)
    }
}
