//! GetSessionHandler - query for a full session transcript.

use std::sync::Arc;

use crate::domain::foundation::{InterviewError, SessionId};
use crate::domain::interview::Session;
use crate::ports::SessionStore;

/// Query for one session by ID.
#[derive(Debug, Clone)]
pub struct GetSessionQuery {
    pub session_id: SessionId,
}

/// Handler for fetching a session.
pub struct GetSessionHandler {
    sessions: Arc<dyn SessionStore>,
}

impl GetSessionHandler {
    pub fn new(sessions: Arc<dyn SessionStore>) -> Self {
        Self { sessions }
    }

    pub async fn handle(&self, query: GetSessionQuery) -> Result<Session, InterviewError> {
        self.sessions
            .find_by_id(&query.session_id)
            .await?
            .ok_or(InterviewError::NotFound(query.session_id))
    }
}
