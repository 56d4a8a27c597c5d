//! HTTP DTOs for analysis endpoints.

use serde::Serialize;

use crate::domain::analysis::AnalysisReport;

/// One `## `-headed section of the report, pre-split for UI tabs.
#[derive(Debug, Clone, Serialize)]
pub struct ReportSectionResponse {
    pub title: String,
    pub content: String,
}

/// Analysis report response.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResponse {
    pub session_id: String,
    pub content: String,
    pub model: String,
    pub generated_at: String,
    /// True when a previously generated report was returned.
    pub cached: bool,
    pub sections: Vec<ReportSectionResponse>,
}

impl AnalysisResponse {
    /// Builds the response from a report plus cache provenance.
    pub fn from_report(report: &AnalysisReport, cached: bool) -> Self {
        Self {
            session_id: report.session_id().to_string(),
            content: report.content().to_string(),
            model: report.model().to_string(),
            generated_at: report.generated_at().to_rfc3339(),
            cached,
            sections: report
                .sections()
                .into_iter()
                .map(|(title, content)| ReportSectionResponse { title, content })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::SessionId;

    #[test]
    fn response_carries_sections() {
        let report = AnalysisReport::new(
            SessionId::new(),
            "## Threats\ninjection\n## Hardening\nWAF",
            "mock",
        );
        let response = AnalysisResponse::from_report(&report, true);

        assert!(response.cached);
        assert_eq!(response.sections.len(), 2);
        assert_eq!(response.sections[0].title, "Threats");
    }
}
