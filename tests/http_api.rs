//! Integration tests for the HTTP layer wiring.
//!
//! These drive the assembled router with in-memory stores and the mock AI
//! provider, verifying endpoint wiring, status codes, and error mapping.

use std::sync::Arc;
use std::time::Duration;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use security_expert::adapters::ai::MockAiProvider;
use security_expert::adapters::http::analysis::AnalysisHandlers;
use security_expert::adapters::http::interview::InterviewHandlers;
use security_expert::adapters::http::{app_router, AppState};
use security_expert::adapters::memory::{InMemoryReportStore, InMemorySessionStore};
use security_expert::application::handlers::{
    GetAnalysisHandler, GetSessionHandler, ListHistoryHandler, NextQuestionHandler,
    RequestAnalysisHandler, StartInterviewHandler, SubmitAnswerHandler,
};

// =============================================================================
// Test Infrastructure
// =============================================================================

fn test_app(provider: MockAiProvider) -> Router {
    let sessions = Arc::new(InMemorySessionStore::new());
    let reports = Arc::new(InMemoryReportStore::new());

    let interview = InterviewHandlers::new(
        Arc::new(StartInterviewHandler::new(sessions.clone())),
        Arc::new(SubmitAnswerHandler::new(sessions.clone())),
        Arc::new(NextQuestionHandler::new(sessions.clone())),
        Arc::new(GetSessionHandler::new(sessions.clone())),
        Arc::new(ListHistoryHandler::new(sessions.clone())),
    );
    let analysis = AnalysisHandlers::new(
        Arc::new(RequestAnalysisHandler::new(
            sessions.clone(),
            reports.clone(),
            Arc::new(provider),
        )),
        Arc::new(GetAnalysisHandler::new(sessions, reports)),
    );

    app_router(
        AppState {
            interview,
            analysis,
        },
        Duration::from_secs(30),
    )
}

async fn send_json(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = match body {
        Some(body) => Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn start_session(app: &Router) -> String {
    let (status, body) = send_json(app, "POST", "/api/interviews", Some(json!({}))).await;
    assert_eq!(status, StatusCode::CREATED);
    body["session_id"].as_str().unwrap().to_string()
}

// =============================================================================
// Tests
// =============================================================================

#[tokio::test]
async fn health_endpoint_responds() {
    let app = test_app(MockAiProvider::new());
    let (status, body) = send_json(&app, "GET", "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn start_interview_returns_first_question() {
    let app = test_app(MockAiProvider::new());
    let (status, body) = send_json(
        &app,
        "POST",
        "/api/interviews",
        Some(json!({"stack_description": "Rails 7 on Heroku"})),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["question"]["index"], 0);
    assert!(body["question"]["text"].as_str().unwrap().contains("stack"));
}

#[tokio::test]
async fn full_flow_over_http() {
    let app = test_app(MockAiProvider::new().with_response("## Threat Overview\nexposed admin"));
    let id = start_session(&app).await;

    let answers = [
        "React 18 + Node 20 + MongoDB 6",
        "AWS ECS, containerized, auto-scaling",
        "PII, no formal compliance",
        "JWT-based, 2 admins via IAM",
        "CloudWatch logging, no WAF",
    ];

    for (i, text) in answers.iter().enumerate() {
        let (status, body) = send_json(
            &app,
            "POST",
            &format!("/api/interviews/{}/answers", id),
            Some(json!({"index": i, "text": text})),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        if i + 1 == answers.len() {
            assert_eq!(body["status"], "complete");
            assert_eq!(body["next"]["kind"], "profile_ready");
        } else {
            assert_eq!(body["status"], "in_progress");
            assert_eq!(body["next"]["question"]["index"], i + 1);
        }
    }

    // Transcript reflects every answer, bound to its question.
    let (status, body) = send_json(&app, "GET", &format!("/api/interviews/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["answers"].as_array().unwrap().len(), 5);
    assert_eq!(body["answers"][2]["text"], answers[2]);

    // First analysis generates; second is served from the store.
    let (status, body) = send_json(
        &app,
        "POST",
        &format!("/api/interviews/{}/analysis", id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["cached"], false);
    assert!(body["content"].as_str().unwrap().contains("exposed admin"));
    assert_eq!(body["sections"][0]["title"], "Threat Overview");

    let (status, body) = send_json(
        &app,
        "POST",
        &format!("/api/interviews/{}/analysis", id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["cached"], true);

    let (status, _) = send_json(
        &app,
        "GET",
        &format!("/api/interviews/{}/analysis", id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn next_question_endpoint_is_idempotent() {
    let app = test_app(MockAiProvider::new());
    let id = start_session(&app).await;

    let uri = format!("/api/interviews/{}/next-question", id);
    let (status, first) = send_json(&app, "GET", &uri, None).await;
    let (_, second) = send_json(&app, "GET", &uri, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(first, second);
    assert_eq!(first["question"]["index"], 0);
}

#[tokio::test]
async fn out_of_order_answer_maps_to_conflict() {
    let app = test_app(MockAiProvider::new());
    let id = start_session(&app).await;

    let (status, body) = send_json(
        &app,
        "POST",
        &format!("/api/interviews/{}/answers", id),
        Some(json!({"index": 3, "text": "eager"})),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "OUT_OF_ORDER_ANSWER");
}

#[tokio::test]
async fn analysis_before_completion_maps_to_conflict() {
    let app = test_app(MockAiProvider::new());
    let id = start_session(&app).await;

    let (status, body) = send_json(
        &app,
        "POST",
        &format!("/api/interviews/{}/analysis", id),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "NOT_YET_COMPLETE");
}

#[tokio::test]
async fn unknown_session_maps_to_not_found() {
    let app = test_app(MockAiProvider::new());
    let missing = uuid::Uuid::new_v4();

    let (status, body) = send_json(
        &app,
        "GET",
        &format!("/api/interviews/{}", missing),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "SESSION_NOT_FOUND");
}

#[tokio::test]
async fn malformed_session_id_maps_to_bad_request() {
    let app = test_app(MockAiProvider::new());

    let (status, body) = send_json(&app, "GET", "/api/interviews/not-a-uuid", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn missing_report_maps_to_not_found() {
    let app = test_app(MockAiProvider::new());
    let id = start_session(&app).await;

    let (status, body) = send_json(
        &app,
        "GET",
        &format!("/api/interviews/{}/analysis", id),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "REPORT_NOT_FOUND");
}

#[tokio::test]
async fn generation_failure_maps_to_bad_gateway() {
    // Empty mock queue: the provider errors on the first call.
    let app = test_app(MockAiProvider::new());
    let id = start_session(&app).await;

    for i in 0..5 {
        send_json(
            &app,
            "POST",
            &format!("/api/interviews/{}/answers", id),
            Some(json!({"index": i, "text": format!("answer {}", i)})),
        )
        .await;
    }

    let (status, body) = send_json(
        &app,
        "POST",
        &format!("/api/interviews/{}/analysis", id),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["code"], "GENERATION_FAILURE");
}

#[tokio::test]
async fn history_endpoint_lists_sessions() {
    let app = test_app(MockAiProvider::new());
    start_session(&app).await;
    start_session(&app).await;

    let (status, body) = send_json(&app, "GET", "/api/interviews?limit=1", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 2);
    assert_eq!(body["items"].as_array().unwrap().len(), 1);
}
