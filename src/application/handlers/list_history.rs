//! ListHistoryHandler - query for recent sessions.

use std::sync::Arc;

use crate::domain::foundation::InterviewError;
use crate::ports::{SessionPage, SessionStore};

/// Default page size when the caller does not specify one.
const DEFAULT_LIMIT: u32 = 20;

/// Upper bound on page size.
const MAX_LIMIT: u32 = 100;

/// Query for the session history listing.
#[derive(Debug, Clone, Default)]
pub struct ListHistoryQuery {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

/// Handler for history browsing.
pub struct ListHistoryHandler {
    sessions: Arc<dyn SessionStore>,
}

impl ListHistoryHandler {
    pub fn new(sessions: Arc<dyn SessionStore>) -> Self {
        Self { sessions }
    }

    /// Returns sessions ordered newest-first.
    pub async fn handle(&self, query: ListHistoryQuery) -> Result<SessionPage, InterviewError> {
        let limit = query.limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT);
        let offset = query.offset.unwrap_or(0);
        self.sessions.list_recent(limit, offset).await
    }
}
