//! RequestAnalysisHandler - orchestrates report generation for a session.
//!
//! The orchestrator loads the completed transcript, extracts the profile,
//! assembles the context document, and delegates text generation to the
//! [`AiProvider`] port. Generation failures surface to the caller; retry
//! policy, if any, lives inside the provider adapter.

use std::sync::Arc;

use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::analysis::{analyst_system_prompt, build_context_document, AnalysisReport};
use crate::domain::foundation::{InterviewError, SessionId};
use crate::domain::profile::TechnologyProfile;
use crate::ports::{
    AiProvider, CompletionRequest, MessageRole, ReportStore, RequestMetadata, SessionStore,
};

/// Upper bound for generated report length.
const REPORT_MAX_TOKENS: u32 = 4096;

/// Low temperature keeps findings grounded in the transcript.
const REPORT_TEMPERATURE: f32 = 0.3;

/// Command to produce the analysis report for a session.
#[derive(Debug, Clone)]
pub struct RequestAnalysisCommand {
    pub session_id: SessionId,
}

/// Result of an analysis request.
#[derive(Debug, Clone)]
pub struct RequestAnalysisResult {
    pub report: AnalysisReport,
    /// True when a previously generated report was returned.
    pub cached: bool,
}

/// Handler coordinating profile extraction and report generation.
pub struct RequestAnalysisHandler {
    sessions: Arc<dyn SessionStore>,
    reports: Arc<dyn ReportStore>,
    provider: Arc<dyn AiProvider>,
}

impl RequestAnalysisHandler {
    pub fn new(
        sessions: Arc<dyn SessionStore>,
        reports: Arc<dyn ReportStore>,
        provider: Arc<dyn AiProvider>,
    ) -> Self {
        Self {
            sessions,
            reports,
            provider,
        }
    }

    pub async fn handle(
        &self,
        cmd: RequestAnalysisCommand,
    ) -> Result<RequestAnalysisResult, InterviewError> {
        let session = self
            .sessions
            .find_by_id(&cmd.session_id)
            .await?
            .ok_or(InterviewError::NotFound(cmd.session_id))?;

        if !session.is_complete() {
            return Err(InterviewError::not_yet_complete(session.answer_count()));
        }

        if let Some(report) = self.reports.find_by_session(&cmd.session_id).await? {
            return Ok(RequestAnalysisResult {
                report,
                cached: true,
            });
        }

        let profile = TechnologyProfile::from_session(&session)?;
        let document = build_context_document(&session, &profile);

        let metadata = RequestMetadata::new(cmd.session_id, Uuid::new_v4().to_string());
        let request = CompletionRequest::new(metadata)
            .with_system_prompt(analyst_system_prompt())
            .with_message(MessageRole::User, document)
            .with_max_tokens(REPORT_MAX_TOKENS)
            .with_temperature(REPORT_TEMPERATURE);

        let response = self.provider.complete(request).await.map_err(|e| {
            warn!(session_id = %cmd.session_id, error = %e, "report generation failed");
            InterviewError::generation(e)
        })?;

        if response.content.trim().is_empty() {
            return Err(InterviewError::GenerationFailure(
                "generator returned empty content".to_string(),
            ));
        }

        let report = AnalysisReport::new(cmd.session_id, response.content, response.model);
        self.reports.save(&report).await?;
        info!(session_id = %cmd.session_id, "analysis report generated");

        Ok(RequestAnalysisResult {
            report,
            cached: false,
        })
    }
}
