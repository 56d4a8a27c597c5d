//! In-memory implementation of ReportStore.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::analysis::AnalysisReport;
use crate::domain::foundation::{InterviewError, SessionId};
use crate::ports::ReportStore;

/// In-memory report store, keyed by session.
#[derive(Debug, Clone, Default)]
pub struct InMemoryReportStore {
    reports: Arc<RwLock<HashMap<SessionId, AnalysisReport>>>,
}

impl InMemoryReportStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ReportStore for InMemoryReportStore {
    async fn save(&self, report: &AnalysisReport) -> Result<(), InterviewError> {
        let mut reports = self.reports.write().await;
        reports.insert(*report.session_id(), report.clone());
        Ok(())
    }

    async fn find_by_session(
        &self,
        session_id: &SessionId,
    ) -> Result<Option<AnalysisReport>, InterviewError> {
        let reports = self.reports.read().await;
        Ok(reports.get(session_id).cloned())
    }
}
