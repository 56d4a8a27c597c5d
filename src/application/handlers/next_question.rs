//! NextQuestionHandler - query for what the interview asks next.

use std::sync::Arc;

use crate::domain::foundation::{InterviewError, SessionId};
use crate::domain::interview::InterviewStep;
use crate::ports::SessionStore;

/// Query for the next interview step of a session.
#[derive(Debug, Clone)]
pub struct NextQuestionQuery {
    pub session_id: SessionId,
}

/// Handler for the next-question query.
pub struct NextQuestionHandler {
    sessions: Arc<dyn SessionStore>,
}

impl NextQuestionHandler {
    pub fn new(sessions: Arc<dyn SessionStore>) -> Self {
        Self { sessions }
    }

    /// Returns the next step without mutating anything. Idempotent.
    pub async fn handle(&self, query: NextQuestionQuery) -> Result<InterviewStep, InterviewError> {
        let session = self
            .sessions
            .find_by_id(&query.session_id)
            .await?
            .ok_or(InterviewError::NotFound(query.session_id))?;

        Ok(session.next_step())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemorySessionStore;
    use crate::domain::interview::{Session, QUESTION_COUNT};
    use crate::ports::SessionStore as _;

    #[tokio::test]
    async fn returns_question_matching_answer_count() {
        let store = Arc::new(InMemorySessionStore::new());
        let mut session = Session::new(SessionId::new());
        session.submit_answer(0, "one").unwrap();
        session.submit_answer(1, "two").unwrap();
        let id = *session.id();
        store.create(&session).await.unwrap();

        let handler = NextQuestionHandler::new(store);
        let step = handler.handle(NextQuestionQuery { session_id: id }).await.unwrap();

        assert_eq!(step.question().unwrap().index, 2);
    }

    #[tokio::test]
    async fn repeated_queries_return_same_question() {
        let store = Arc::new(InMemorySessionStore::new());
        let session = Session::new(SessionId::new());
        let id = *session.id();
        store.create(&session).await.unwrap();

        let handler = NextQuestionHandler::new(store);
        let first = handler.handle(NextQuestionQuery { session_id: id }).await.unwrap();
        let second = handler.handle(NextQuestionQuery { session_id: id }).await.unwrap();

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn complete_session_signals_profile_ready() {
        let store = Arc::new(InMemorySessionStore::new());
        let mut session = Session::new(SessionId::new());
        for i in 0..QUESTION_COUNT {
            session.submit_answer(i, format!("answer {}", i)).unwrap();
        }
        let id = *session.id();
        store.create(&session).await.unwrap();

        let handler = NextQuestionHandler::new(store);
        let step = handler.handle(NextQuestionQuery { session_id: id }).await.unwrap();

        assert!(step.is_profile_ready());
    }

    #[tokio::test]
    async fn unknown_session_is_not_found() {
        let store = Arc::new(InMemorySessionStore::new());
        let handler = NextQuestionHandler::new(store);
        let missing = SessionId::new();

        let result = handler.handle(NextQuestionQuery { session_id: missing }).await;
        assert_eq!(result.unwrap_err(), InterviewError::NotFound(missing));
    }
}
