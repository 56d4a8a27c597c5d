//! Analysis report entity.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{SessionId, Timestamp};

/// Security-analysis report generated for one completed session.
///
/// Reports are 1:1 with sessions: requesting analysis again returns the
/// stored report rather than regenerating it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Session this report was generated for.
    session_id: SessionId,
    /// Raw markdown report content.
    content: String,
    /// Model that produced the content.
    model: String,
    /// When the report was generated.
    generated_at: Timestamp,
}

impl AnalysisReport {
    /// Creates a report generated now.
    pub fn new(session_id: SessionId, content: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            session_id,
            content: content.into(),
            model: model.into(),
            generated_at: Timestamp::now(),
        }
    }

    /// Reconstitutes a report from persistence.
    pub fn reconstitute(
        session_id: SessionId,
        content: String,
        model: String,
        generated_at: Timestamp,
    ) -> Self {
        Self {
            session_id,
            content,
            model,
            generated_at,
        }
    }

    /// Returns the owning session's ID.
    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    /// Returns the raw markdown content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the model that produced the content.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Returns when the report was generated.
    pub fn generated_at(&self) -> &Timestamp {
        &self.generated_at
    }

    /// Splits the markdown into `## `-headed sections for display.
    ///
    /// Text before the first heading is discarded. Content with no headings
    /// at all is returned whole under the "Full Report" title.
    pub fn sections(&self) -> Vec<(String, String)> {
        let mut sections: Vec<(String, String)> = Vec::new();
        let mut current: Option<(String, Vec<&str>)> = None;

        for line in self.content.lines() {
            if let Some(title) = line.strip_prefix("## ") {
                if let Some((done_title, body)) = current.take() {
                    sections.push((done_title, body.join("\n").trim().to_string()));
                }
                current = Some((title.trim().to_string(), Vec::new()));
            } else if let Some((_, body)) = current.as_mut() {
                body.push(line);
            }
        }
        if let Some((title, body)) = current {
            sections.push((title, body.join("\n").trim().to_string()));
        }

        if sections.is_empty() {
            return vec![("Full Report".to_string(), self.content.trim().to_string())];
        }
        sections
    }
}
