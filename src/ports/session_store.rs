//! Session store port.
//!
//! Durable keyed storage of interview sessions. The store exclusively owns
//! Session records; all interview mutation flows through `append_answer`.
//!
//! # Atomicity
//!
//! `append_answer` must make the "index equals current answer count" check
//! and the append indivisible with respect to concurrent callers on the same
//! session. Any backend offering atomic read-modify-write per key can satisfy
//! this; sessions with different ids need no coordination.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{InterviewError, SessionId, Timestamp};
use crate::domain::interview::{InterviewStatus, Session};

/// Storage contract for Session aggregates.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Persists a newly created session.
    ///
    /// # Errors
    ///
    /// - `Storage` on persistence failure
    async fn create(&self, session: &Session) -> Result<(), InterviewError>;

    /// Loads a session by ID.
    ///
    /// Returns `None` if no session has this ID.
    async fn find_by_id(&self, id: &SessionId) -> Result<Option<Session>, InterviewError>;

    /// Atomically records the answer for question `index` and returns the
    /// updated session.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the session does not exist
    /// - `OutOfOrderAnswer` if `index` is not the next expected index
    /// - `AlreadyComplete` if the interview already has five answers
    /// - `Storage` on persistence failure
    async fn append_answer(
        &self,
        id: &SessionId,
        index: usize,
        text: &str,
    ) -> Result<Session, InterviewError>;

    /// Lists sessions ordered by `created_at` descending.
    async fn list_recent(&self, limit: u32, offset: u32) -> Result<SessionPage, InterviewError>;
}

/// Summary row for history browsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub id: SessionId,
    pub status: InterviewStatus,
    pub answer_count: usize,
    pub stack_description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl SessionSummary {
    /// Builds a summary from a full session.
    pub fn from_session(session: &Session) -> Self {
        Self {
            id: *session.id(),
            status: session.status(),
            answer_count: session.answer_count(),
            stack_description: session.stack_description().map(str::to_string),
            created_at: *session.created_at(),
            updated_at: *session.updated_at(),
        }
    }
}

/// One page of the session history listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionPage {
    /// Summaries in `created_at` descending order.
    pub items: Vec<SessionSummary>,
    /// Total sessions in the store, across all pages.
    pub total: u64,
}
