//! Context-document assembly for report generation.
//!
//! The generator receives one markdown document holding the full transcript
//! (all five Q&A pairs, in order) and the extracted technology profile.
//! Assembly is pure; the actual generation call lives behind the
//! [`crate::ports::AiProvider`] port.

use crate::domain::interview::{question_for_index, Session};
use crate::domain::profile::TechnologyProfile;

/// System prompt framing the generator as a security analyst.
pub fn analyst_system_prompt() -> &'static str {
    "You are a senior application security analyst. You are given a completed \
     technology-stack interview and a normalized technology profile. Produce a \
     practical security analysis in markdown with `## `-headed sections covering, \
     at minimum: Threat Overview, Key Risks, Hardening Recommendations, and \
     Suggested Next Steps. Ground every finding in the interview content; do not \
     invent facts about the stack. Be specific and actionable."
}

/// Builds the context document from a transcript and its profile.
///
/// Question/answer pairs appear in interview order. The caller is expected
/// to have verified completeness; an incomplete session simply renders the
/// answers it has.
pub fn build_context_document(session: &Session, profile: &TechnologyProfile) -> String {
    let mut doc = String::new();

    doc.push_str("# Technology Stack Interview\n\n");
    if let Some(description) = session.stack_description() {
        doc.push_str("Initial stack description: ");
        doc.push_str(description);
        doc.push_str("\n\n");
    }

    doc.push_str("## Transcript\n\n");
    for answer in session.answers() {
        if let Some(question) = question_for_index(answer.question_index()) {
            doc.push_str(&format!("**Q{}: {}**\n", question.index + 1, question.text));
        }
        doc.push_str(answer.text());
        doc.push_str("\n\n");
    }

    doc.push_str("## Technology Profile\n\n");
    for (slot, value) in profile.fields() {
        doc.push_str(&format!("- {}: {}\n", slot, value));
    }

    doc
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::SessionId;

    fn completed_session() -> Session {
        let mut session =
            Session::new(SessionId::new()).with_stack_description("React + Node on AWS");
        let answers = [
            "React 18 + Node 20 + MongoDB 6",
            "AWS ECS, containerized, auto-scaling",
            "PII, no formal compliance",
            "JWT-based, 2 admins via IAM",
            "CloudWatch logging, no WAF",
        ];
        for (i, text) in answers.iter().enumerate() {
            session.submit_answer(i, *text).unwrap();
        }
        session
    }

    #[test]
    fn document_contains_all_answers_in_order() {
        let session = completed_session();
        let profile = TechnologyProfile::from_session(&session).unwrap();
        let doc = build_context_document(&session, &profile);

        let positions: Vec<usize> = session
            .answers()
            .iter()
            .map(|a| doc.find(a.text()).expect("answer missing from document"))
            .collect();
        for pair in positions.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn document_includes_stack_description_and_profile() {
        let session = completed_session();
        let profile = TechnologyProfile::from_session(&session).unwrap();
        let doc = build_context_document(&session, &profile);

        assert!(doc.contains("React + Node on AWS"));
        assert!(doc.contains("## Technology Profile"));
        assert!(doc.contains("stack_and_versions: React 18 + Node 20 + MongoDB 6"));
    }

    #[test]
    fn document_pairs_questions_with_answers() {
        let session = completed_session();
        let profile = TechnologyProfile::from_session(&session).unwrap();
        let doc = build_context_document(&session, &profile);

        assert!(doc.contains("**Q1:"));
        assert!(doc.contains("**Q5:"));
    }

    #[test]
    fn system_prompt_demands_markdown_sections() {
        assert!(analyst_system_prompt().contains("## "));
    }
}
