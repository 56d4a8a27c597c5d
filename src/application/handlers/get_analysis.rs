//! GetAnalysisHandler - query for a previously generated report.

use std::sync::Arc;

use crate::domain::analysis::AnalysisReport;
use crate::domain::foundation::{InterviewError, SessionId};
use crate::ports::{ReportStore, SessionStore};

/// Query for the stored report of a session.
#[derive(Debug, Clone)]
pub struct GetAnalysisQuery {
    pub session_id: SessionId,
}

/// Handler for fetching stored reports.
pub struct GetAnalysisHandler {
    sessions: Arc<dyn SessionStore>,
    reports: Arc<dyn ReportStore>,
}

impl GetAnalysisHandler {
    pub fn new(sessions: Arc<dyn SessionStore>, reports: Arc<dyn ReportStore>) -> Self {
        Self { sessions, reports }
    }

    /// Returns the stored report, or `None` if analysis has not run yet.
    ///
    /// An unknown session is `NotFound`; a known session without a report is
    /// not an error, so callers can distinguish the two.
    pub async fn handle(
        &self,
        query: GetAnalysisQuery,
    ) -> Result<Option<AnalysisReport>, InterviewError> {
        if self.sessions.find_by_id(&query.session_id).await?.is_none() {
            return Err(InterviewError::NotFound(query.session_id));
        }
        self.reports.find_by_session(&query.session_id).await
    }
}
