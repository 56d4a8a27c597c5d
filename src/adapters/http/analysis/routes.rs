//! HTTP routes for analysis endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{get_analysis, request_analysis, AnalysisHandlers};

/// Creates the analysis router; mounted under the interviews path space.
pub fn analysis_routes(handlers: AnalysisHandlers) -> Router {
    Router::new()
        .route("/:id/analysis", post(request_analysis))
        .route("/:id/analysis", get(get_analysis))
        .with_state(handlers)
}
