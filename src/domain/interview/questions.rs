//! The fixed interview question catalog.
//!
//! The catalog is an immutable ordered table loaded once at process start.
//! Question order is load-bearing: answer N always belongs to question N,
//! and the profile fields are bound to slots by position.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of questions in every interview.
pub const QUESTION_COUNT: usize = 5;

/// The topic a question slot is bound to.
///
/// Slots double as the field names of the extracted technology profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionSlot {
    /// Languages, frameworks, and versions, including data stores.
    StackAndVersions,
    /// Hosting, containerization, and network exposure.
    Deployment,
    /// Data sensitivity and regulatory obligations.
    DataAndCompliance,
    /// Authentication and authorization model.
    Authentication,
    /// Security tooling and practices already in place.
    SecurityTooling,
}

impl QuestionSlot {
    /// Returns the slot for a question index, if the index is in range.
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(QuestionSlot::StackAndVersions),
            1 => Some(QuestionSlot::Deployment),
            2 => Some(QuestionSlot::DataAndCompliance),
            3 => Some(QuestionSlot::Authentication),
            4 => Some(QuestionSlot::SecurityTooling),
            _ => None,
        }
    }

    /// Returns the zero-based position of this slot in the interview.
    pub fn index(&self) -> usize {
        match self {
            QuestionSlot::StackAndVersions => 0,
            QuestionSlot::Deployment => 1,
            QuestionSlot::DataAndCompliance => 2,
            QuestionSlot::Authentication => 3,
            QuestionSlot::SecurityTooling => 4,
        }
    }
}

impl fmt::Display for QuestionSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            QuestionSlot::StackAndVersions => "stack_and_versions",
            QuestionSlot::Deployment => "deployment",
            QuestionSlot::DataAndCompliance => "data_and_compliance",
            QuestionSlot::Authentication => "authentication",
            QuestionSlot::SecurityTooling => "security_tooling",
        };
        write!(f, "{}", s)
    }
}

/// One entry in the interview catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    /// Zero-based position in the interview.
    pub index: usize,
    /// Topic slot this question fills.
    pub slot: QuestionSlot,
    /// The question text shown to the user.
    pub text: &'static str,
}

static QUESTIONS: Lazy<[Question; QUESTION_COUNT]> = Lazy::new(|| {
    [
        Question {
            index: 0,
            slot: QuestionSlot::StackAndVersions,
            text: "What languages, frameworks, and versions make up your stack, \
                   including databases and notable third-party services?",
        },
        Question {
            index: 1,
            slot: QuestionSlot::Deployment,
            text: "How is the system deployed and hosted? Include cloud provider, \
                   containerization, orchestration, and what is exposed to the internet.",
        },
        Question {
            index: 2,
            slot: QuestionSlot::DataAndCompliance,
            text: "What kinds of data do you store or process, and are you subject to \
                   any compliance regimes (PII, PCI-DSS, HIPAA, GDPR)?",
        },
        Question {
            index: 3,
            slot: QuestionSlot::Authentication,
            text: "How do users and services authenticate, and how is authorization \
                   handled? Mention admin access paths and secrets management.",
        },
        Question {
            index: 4,
            slot: QuestionSlot::SecurityTooling,
            text: "What security tooling and practices are already in place, such as \
                   logging, monitoring, WAF, dependency scanning, or incident response?",
        },
    ]
});

/// Looks up the question for a zero-based index.
///
/// Returns `None` for indices at or past [`QUESTION_COUNT`].
pub fn question_for_index(index: usize) -> Option<&'static Question> {
    QUESTIONS.get(index)
}
