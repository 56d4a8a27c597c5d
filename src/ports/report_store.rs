//! Report store port.
//!
//! Persists analysis reports keyed by their session. One report per session;
//! saving twice for the same session replaces the stored report.

use async_trait::async_trait;

use crate::domain::analysis::AnalysisReport;
use crate::domain::foundation::{InterviewError, SessionId};

/// Storage contract for analysis reports.
#[async_trait]
pub trait ReportStore: Send + Sync {
    /// Persists a report.
    ///
    /// # Errors
    ///
    /// - `Storage` on persistence failure
    async fn save(&self, report: &AnalysisReport) -> Result<(), InterviewError>;

    /// Loads the report for a session.
    ///
    /// Returns `None` if no report has been generated for the session.
    async fn find_by_session(
        &self,
        session_id: &SessionId,
    ) -> Result<Option<AnalysisReport>, InterviewError>;
}
