//! In-memory implementation of SessionStore.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{InterviewError, SessionId};
use crate::domain::interview::Session;
use crate::ports::{SessionPage, SessionStore, SessionSummary};

/// In-memory session store.
///
/// `append_answer` holds the write lock across the index check and the
/// append, which serializes concurrent submissions per session (and, in this
/// adapter, across sessions too, which is stricter than required).
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionStore {
    sessions: Arc<RwLock<HashMap<SessionId, Session>>>,
}

impl InMemorySessionStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored sessions.
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// Returns true if the store holds no sessions.
    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn create(&self, session: &Session) -> Result<(), InterviewError> {
        let mut sessions = self.sessions.write().await;
        sessions.insert(*session.id(), session.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &SessionId) -> Result<Option<Session>, InterviewError> {
        let sessions = self.sessions.read().await;
        Ok(sessions.get(id).cloned())
    }

    async fn append_answer(
        &self,
        id: &SessionId,
        index: usize,
        text: &str,
    ) -> Result<Session, InterviewError> {
        let mut sessions = self.sessions.write().await;
        let session = sessions.get_mut(id).ok_or(InterviewError::NotFound(*id))?;
        session.submit_answer(index, text)?;
        Ok(session.clone())
    }

    async fn list_recent(&self, limit: u32, offset: u32) -> Result<SessionPage, InterviewError> {
        let sessions = self.sessions.read().await;
        let total = sessions.len() as u64;

        let mut summaries: Vec<SessionSummary> =
            sessions.values().map(SessionSummary::from_session).collect();
        summaries.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let items = summaries
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect();

        Ok(SessionPage { items, total })
    }
}
