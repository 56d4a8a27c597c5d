//! Technology profile derived from a completed interview.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::InterviewError;
use crate::domain::interview::{QuestionSlot, Session};

/// Normalized five-field record compiled from a completed session.
///
/// Each field is the verbatim answer bound to its question slot: answer N
/// maps to field N, no reordering and no inference. The profile is derived
/// on demand and never persisted separately from its session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechnologyProfile {
    /// Languages, frameworks, versions, and data stores.
    pub stack_and_versions: String,
    /// Hosting, containerization, and network exposure.
    pub deployment: String,
    /// Data sensitivity and regulatory obligations.
    pub data_and_compliance: String,
    /// Authentication and authorization model.
    pub authentication: String,
    /// Security tooling and practices already in place.
    pub security_tooling: String,
}

impl TechnologyProfile {
    /// Compiles the profile from a completed session.
    ///
    /// # Errors
    ///
    /// - `NotYetComplete` if the session has fewer than five answers
    pub fn from_session(session: &Session) -> Result<Self, InterviewError> {
        if !session.is_complete() {
            return Err(InterviewError::not_yet_complete(session.answer_count()));
        }

        let answers = session.answers();
        Ok(Self {
            stack_and_versions: answers[0].text().to_string(),
            deployment: answers[1].text().to_string(),
            data_and_compliance: answers[2].text().to_string(),
            authentication: answers[3].text().to_string(),
            security_tooling: answers[4].text().to_string(),
        })
    }

    /// Returns the fields in interview order, paired with their slots.
    pub fn fields(&self) -> [(QuestionSlot, &str); 5] {
        [
            (QuestionSlot::StackAndVersions, &self.stack_and_versions),
            (QuestionSlot::Deployment, &self.deployment),
            (QuestionSlot::DataAndCompliance, &self.data_and_compliance),
            (QuestionSlot::Authentication, &self.authentication),
            (QuestionSlot::SecurityTooling, &self.security_tooling),
        ]
    }
}
