//! StartInterviewHandler - creates a session and returns the first question.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::{InterviewError, SessionId};
use crate::domain::interview::{Question, Session};
use crate::ports::SessionStore;

/// Command to start a new interview.
#[derive(Debug, Clone, Default)]
pub struct StartInterviewCommand {
    /// Optional freeform description of the stack under review.
    pub stack_description: Option<String>,
}

/// Result of successfully starting an interview.
#[derive(Debug, Clone)]
pub struct StartInterviewResult {
    pub session: Session,
    pub first_question: &'static Question,
}

/// Handler for starting interviews.
pub struct StartInterviewHandler {
    sessions: Arc<dyn SessionStore>,
}

impl StartInterviewHandler {
    pub fn new(sessions: Arc<dyn SessionStore>) -> Self {
        Self { sessions }
    }

    pub async fn handle(
        &self,
        cmd: StartInterviewCommand,
    ) -> Result<StartInterviewResult, InterviewError> {
        let mut session = Session::new(SessionId::new());
        if let Some(description) = cmd.stack_description {
            session = session.with_stack_description(description);
        }

        self.sessions.create(&session).await?;
        info!(session_id = %session.id(), "interview started");

        let first_question = session
            .next_step()
            .question()
            .ok_or_else(|| InterviewError::storage("new session has no next question"))?;

        Ok(StartInterviewResult {
            session,
            first_question,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemorySessionStore;
    use async_trait::async_trait;
    use crate::ports::{SessionPage, SessionStore as _};

    struct FailingSessionStore;

    #[async_trait]
    impl SessionStore for FailingSessionStore {
        async fn create(&self, _session: &Session) -> Result<(), InterviewError> {
            Err(InterviewError::storage("simulated create failure"))
        }

        async fn find_by_id(
            &self,
            _id: &SessionId,
        ) -> Result<Option<Session>, InterviewError> {
            Ok(None)
        }

        async fn append_answer(
            &self,
            id: &SessionId,
            _index: usize,
            _text: &str,
        ) -> Result<Session, InterviewError> {
            Err(InterviewError::NotFound(*id))
        }

        async fn list_recent(
            &self,
            _limit: u32,
            _offset: u32,
        ) -> Result<SessionPage, InterviewError> {
            Ok(SessionPage {
                items: vec![],
                total: 0,
            })
        }
    }

    #[tokio::test]
    async fn starts_interview_with_first_question() {
        let store = Arc::new(InMemorySessionStore::new());
        let handler = StartInterviewHandler::new(store.clone());

        let result = handler.handle(StartInterviewCommand::default()).await.unwrap();

        assert_eq!(result.first_question.index, 0);
        assert_eq!(result.session.answer_count(), 0);

        let persisted = store.find_by_id(result.session.id()).await.unwrap();
        assert_eq!(persisted, Some(result.session));
    }

    #[tokio::test]
    async fn stores_stack_description_when_given() {
        let store = Arc::new(InMemorySessionStore::new());
        let handler = StartInterviewHandler::new(store);

        let cmd = StartInterviewCommand {
            stack_description: Some("Django + Postgres on GCP".to_string()),
        };
        let result = handler.handle(cmd).await.unwrap();

        assert_eq!(
            result.session.stack_description(),
            Some("Django + Postgres on GCP")
        );
    }

    #[tokio::test]
    async fn surfaces_storage_failure() {
        let handler = StartInterviewHandler::new(Arc::new(FailingSessionStore));
        let result = handler.handle(StartInterviewCommand::default()).await;
        assert!(matches!(result, Err(InterviewError::Storage(_))));
    }
}
