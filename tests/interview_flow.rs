//! End-to-end workflow tests over the application handlers.
//!
//! These wire real handlers to the in-memory stores and the mock AI
//! provider, exercising the full interview-to-report path without HTTP.

use std::sync::Arc;

use security_expert::adapters::ai::MockAiProvider;
use security_expert::adapters::memory::{InMemoryReportStore, InMemorySessionStore};
use security_expert::application::handlers::{
    GetAnalysisHandler, GetAnalysisQuery, ListHistoryHandler, ListHistoryQuery,
    NextQuestionHandler, NextQuestionQuery, RequestAnalysisCommand, RequestAnalysisHandler,
    StartInterviewCommand, StartInterviewHandler, SubmitAnswerCommand, SubmitAnswerHandler,
};
use security_expert::domain::foundation::{InterviewError, SessionId};
use security_expert::domain::interview::QUESTION_COUNT;
use security_expert::domain::profile::TechnologyProfile;
use security_expert::ports::SessionStore;

const ANSWERS: [&str; 5] = [
    "React 18 + Node 20 + MongoDB 6",
    "AWS ECS, containerized, auto-scaling",
    "PII, no formal compliance",
    "JWT-based, 2 admins via IAM",
    "CloudWatch logging, no WAF",
];

struct Workbench {
    sessions: Arc<InMemorySessionStore>,
    start: StartInterviewHandler,
    submit: SubmitAnswerHandler,
    next: NextQuestionHandler,
    analysis: RequestAnalysisHandler,
    get_analysis: GetAnalysisHandler,
    list: ListHistoryHandler,
    provider: MockAiProvider,
}

fn workbench(provider: MockAiProvider) -> Workbench {
    let sessions = Arc::new(InMemorySessionStore::new());
    let reports = Arc::new(InMemoryReportStore::new());

    Workbench {
        sessions: sessions.clone(),
        start: StartInterviewHandler::new(sessions.clone()),
        submit: SubmitAnswerHandler::new(sessions.clone()),
        next: NextQuestionHandler::new(sessions.clone()),
        analysis: RequestAnalysisHandler::new(
            sessions.clone(),
            reports.clone(),
            Arc::new(provider.clone()),
        ),
        get_analysis: GetAnalysisHandler::new(sessions.clone(), reports),
        list: ListHistoryHandler::new(sessions),
        provider,
    }
}

#[tokio::test]
async fn full_interview_to_report_scenario() {
    let bench = workbench(
        MockAiProvider::new().with_response("## Threat Overview\nUnauthenticated MongoDB access"),
    );

    // Start: the first question is index 0.
    let started = bench
        .start
        .handle(StartInterviewCommand {
            stack_description: Some("React/Node SaaS".to_string()),
        })
        .await
        .unwrap();
    let session_id = *started.session.id();
    assert_eq!(started.first_question.index, 0);

    // Answer all five questions in order; completion flips only on the fifth.
    for (i, text) in ANSWERS.iter().enumerate() {
        let result = bench
            .submit
            .handle(SubmitAnswerCommand {
                session_id,
                index: i,
                text: text.to_string(),
            })
            .await
            .unwrap();

        assert_eq!(result.session.is_complete(), i + 1 == QUESTION_COUNT);
    }

    // Profile fields are the answers, identity-mapped.
    let session = bench
        .sessions
        .find_by_id(&session_id)
        .await
        .unwrap()
        .unwrap();
    let profile = TechnologyProfile::from_session(&session).unwrap();
    assert_eq!(profile.stack_and_versions, ANSWERS[0]);
    assert_eq!(profile.deployment, ANSWERS[1]);
    assert_eq!(profile.data_and_compliance, ANSWERS[2]);
    assert_eq!(profile.authentication, ANSWERS[3]);
    assert_eq!(profile.security_tooling, ANSWERS[4]);

    // Analysis succeeds and returns non-empty report text.
    let analysis = bench
        .analysis
        .handle(RequestAnalysisCommand { session_id })
        .await
        .unwrap();
    assert!(!analysis.cached);
    assert!(!analysis.report.content().trim().is_empty());

    // The report is retrievable afterwards.
    let fetched = bench
        .get_analysis
        .handle(GetAnalysisQuery { session_id })
        .await
        .unwrap()
        .unwrap();
    assert_eq!(fetched.content(), analysis.report.content());

    // The generator saw the transcript and the profile.
    let calls = bench.provider.calls();
    assert_eq!(calls.len(), 1);
    let document = &calls[0].messages[0].content;
    for answer in ANSWERS {
        assert!(document.contains(answer));
    }
}

#[tokio::test]
async fn analysis_on_fresh_session_fails_not_yet_complete() {
    let bench = workbench(MockAiProvider::new().with_response("unused"));

    let started = bench
        .start
        .handle(StartInterviewCommand::default())
        .await
        .unwrap();

    let result = bench
        .analysis
        .handle(RequestAnalysisCommand {
            session_id: *started.session.id(),
        })
        .await;

    assert_eq!(
        result.unwrap_err(),
        InterviewError::NotYetComplete {
            answered: 0,
            required: QUESTION_COUNT
        }
    );
    assert!(bench.provider.calls().is_empty());
}

#[tokio::test]
async fn next_question_is_idempotent_and_tracks_progress() {
    let bench = workbench(MockAiProvider::new());

    let started = bench
        .start
        .handle(StartInterviewCommand::default())
        .await
        .unwrap();
    let session_id = *started.session.id();

    for i in 0..QUESTION_COUNT {
        let first = bench
            .next
            .handle(NextQuestionQuery { session_id })
            .await
            .unwrap();
        let second = bench
            .next
            .handle(NextQuestionQuery { session_id })
            .await
            .unwrap();

        assert_eq!(first, second);
        assert_eq!(first.question().unwrap().index, i);

        bench
            .submit
            .handle(SubmitAnswerCommand {
                session_id,
                index: i,
                text: format!("answer {}", i),
            })
            .await
            .unwrap();
    }

    let step = bench
        .next
        .handle(NextQuestionQuery { session_id })
        .await
        .unwrap();
    assert!(step.is_profile_ready());
}

#[tokio::test]
async fn concurrent_submissions_for_same_index_admit_exactly_one() {
    let bench = workbench(MockAiProvider::new());
    let submit = Arc::new(bench.submit);

    let started = bench
        .start
        .handle(StartInterviewCommand::default())
        .await
        .unwrap();
    let session_id = *started.session.id();

    let mut tasks = Vec::new();
    for n in 0..6 {
        let submit = submit.clone();
        tasks.push(tokio::spawn(async move {
            submit
                .handle(SubmitAnswerCommand {
                    session_id,
                    index: 0,
                    text: format!("contender {}", n),
                })
                .await
        }));
    }

    let mut successes = 0;
    for task in tasks {
        match task.await.unwrap() {
            Ok(_) => successes += 1,
            Err(e) => assert!(matches!(
                e,
                InterviewError::OutOfOrderAnswer { .. } | InterviewError::AlreadyComplete
            )),
        }
    }
    assert_eq!(successes, 1);

    let session = bench
        .sessions
        .find_by_id(&session_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(session.answer_count(), 1);
}

#[tokio::test]
async fn history_lists_sessions_newest_first() {
    let bench = workbench(MockAiProvider::new());

    for _ in 0..3 {
        bench
            .start
            .handle(StartInterviewCommand::default())
            .await
            .unwrap();
        tokio::time::sleep(std::time::Duration::from_millis(2)).await;
    }

    let page = bench.list.handle(ListHistoryQuery::default()).await.unwrap();
    assert_eq!(page.total, 3);
    for pair in page.items.windows(2) {
        assert!(pair[0].created_at >= pair[1].created_at);
    }
}

#[tokio::test]
async fn submitting_to_unknown_session_reports_not_found() {
    let bench = workbench(MockAiProvider::new());
    let missing = SessionId::new();

    let result = bench
        .submit
        .handle(SubmitAnswerCommand {
            session_id: missing,
            index: 0,
            text: "hello".to_string(),
        })
        .await;

    assert_eq!(result.unwrap_err(), InterviewError::NotFound(missing));
}
