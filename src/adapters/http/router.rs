//! Router assembly and shared middleware.

use std::time::Duration;

use axum::{http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde_json::json;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use super::analysis::{analysis_routes, AnalysisHandlers};
use super::interview::{interview_routes, InterviewHandlers};

/// Wired handler state for the whole HTTP surface.
#[derive(Clone)]
pub struct AppState {
    pub interview: InterviewHandlers,
    pub analysis: AnalysisHandlers,
}

/// GET /health - liveness probe
async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({
            "status": "healthy",
            "timestamp": chrono::Utc::now().to_rfc3339(),
        })),
    )
}

/// Assembles the application router.
///
/// The request timeout bounds every endpoint, including report generation;
/// it should comfortably exceed the AI provider timeout so generation errors
/// arrive as structured responses rather than transport timeouts.
pub fn app_router(state: AppState, request_timeout: Duration) -> Router {
    let api = interview_routes(state.interview).merge(analysis_routes(state.analysis));

    Router::new()
        .route("/health", get(health))
        .nest("/api/interviews", api)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(TimeoutLayer::new(request_timeout))
}
